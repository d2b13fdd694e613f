mod api;
mod envelope;
mod record;

pub use api::CalendarBackendApi;
pub use envelope::{normalize, BackendEnvelope, BackendError};
pub use record::{
    records_from_values, BackendEventRecord, BackendParticipant, BackendTimestamp,
};
