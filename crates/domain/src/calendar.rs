use chrono_tz::{Tz, UTC};

/// How a calendar is laid out for the person looking at it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarSettings {
    /// First day of the week, 0 = Sunday .. 6 = Saturday
    pub week_start: u32,
    /// Time zone every wall clock computation (weekdays, month lengths,
    /// start of day) happens in
    pub timezone: Tz,
}

impl CalendarSettings {
    pub fn set_week_start(&mut self, wkst: u32) -> bool {
        if wkst <= 6 {
            self.week_start = wkst;
            true
        } else {
            false
        }
    }

    pub fn set_timezone(&mut self, timezone: &str) -> bool {
        match timezone.parse::<Tz>() {
            Ok(tzid) => {
                self.timezone = tzid;
                true
            }
            Err(_) => false,
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_start: 0,
            timezone: UTC,
        }
    }
}
