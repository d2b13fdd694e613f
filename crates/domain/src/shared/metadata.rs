use std::collections::HashMap;

/// Free form key value pairs the calendar backend attaches to an event,
/// e.g. the calibration procedure or the lab responsible for a gage.
pub type Metadata = HashMap<String, String>;
