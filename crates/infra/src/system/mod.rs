use chrono::Utc;

/// Source of the current time, so tests can pin "today" of a calendar view
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// Wall clock of the host
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
