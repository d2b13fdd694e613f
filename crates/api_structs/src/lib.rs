mod calendar;
mod event;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
}

pub use crate::calendar::api::*;
pub use crate::event::api::*;
pub use crate::status::api::*;
