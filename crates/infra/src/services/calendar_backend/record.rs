use super::BackendError;
use chrono::{DateTime, NaiveDate, NaiveTime};
use gage_calendar_domain::{
    CalendarEvent, EventParticipant, Metadata, ParticipantStatus, RecurrenceOptions,
    RecurrenceRule, ID,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::convert::TryFrom;
use tracing::warn;

/// Point in time as the backend sends it: epoch millis, an RFC 3339 string
/// or a plain `YYYY-MM-DD` date for all day events (taken as UTC midnight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackendTimestamp {
    Millis(i64),
    Text(String),
}

impl BackendTimestamp {
    pub fn timestamp_millis(&self) -> Option<i64> {
        match self {
            Self::Millis(millis) => Some(*millis),
            Self::Text(text) => match DateTime::parse_from_rfc3339(text) {
                Ok(datetime) => Some(datetime.timestamp_millis()),
                Err(_) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendParticipant {
    pub user_id: ID,
    #[serde(default = "pending")]
    pub status: ParticipantStatus,
}

fn pending() -> ParticipantStatus {
    ParticipantStatus::Pending
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendEventRecord {
    pub id: ID,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gage_id: Option<String>,
    #[serde(default)]
    pub organizer_id: Option<ID>,
    #[serde(default)]
    pub participants: Vec<BackendParticipant>,
    #[serde(alias = "startTs")]
    pub start: BackendTimestamp,
    #[serde(alias = "endTs")]
    pub end: BackendTimestamp,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence: Option<RecurrenceOptions>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl TryFrom<BackendEventRecord> for CalendarEvent {
    type Error = BackendError;

    fn try_from(record: BackendEventRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: String| BackendError::InvalidEvent {
            id: record.id.to_string(),
            reason,
        };
        let start_ts = record
            .start
            .timestamp_millis()
            .ok_or_else(|| invalid(format!("unreadable start: {:?}", record.start)))?;
        let end_ts = record
            .end
            .timestamp_millis()
            .ok_or_else(|| invalid(format!("unreadable end: {:?}", record.end)))?;
        let recurrence = match record.recurrence.clone() {
            Some(options) => Some(
                RecurrenceRule::try_from(options).map_err(|e| invalid(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            id: record.id,
            title: record.title,
            description: record.description,
            location: record.location,
            gage_id: record.gage_id,
            organizer_id: record.organizer_id,
            participants: record
                .participants
                .into_iter()
                .map(|p| EventParticipant {
                    user_id: p.user_id,
                    status: p.status,
                })
                .collect(),
            start_ts,
            end_ts,
            all_day: record.all_day,
            is_recurring: record.is_recurring,
            recurrence,
            metadata: record.metadata,
        })
    }
}

/// Reads each listed record on its own. Entries that do not have the record
/// shape are skipped with a warning.
pub fn records_from_values(values: Vec<Value>) -> Vec<BackendEventRecord> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed calendar backend record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use gage_calendar_domain::{EndCondition, Frequency};

    #[test]
    fn converts_rfc3339_record() {
        let record: BackendEventRecord = serde_json::from_str(
            r#"{
                "id": 17,
                "title": "Micrometer calibration",
                "gageId": "MIC-0042",
                "organizerId": "user-1",
                "participants": [{ "userId": "user-2", "status": "accepted" }, { "userId": 3 }],
                "start": "2024-03-04T09:00:00Z",
                "end": "2024-03-04T10:30:00+00:00",
                "isRecurring": true,
                "recurrence": { "frequency": "weekly", "interval": 2, "daysOfWeek": [1, 3], "endType": "after", "occurrences": 6 }
            }"#,
        )
        .unwrap();
        let event = CalendarEvent::try_from(record).unwrap();
        assert_eq!(event.id.as_str(), "17");
        assert_eq!(event.gage_id.as_deref(), Some("MIC-0042"));
        assert_eq!(event.duration(), 90 * 60 * 1000);
        assert_eq!(event.participants.len(), 2);
        assert_eq!(event.participants[0].status, ParticipantStatus::Accepted);
        assert_eq!(event.participants[1].status, ParticipantStatus::Pending);
        let rule = event.recurrence_rule().unwrap();
        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.interval, 2);
        assert_eq!(rule.end, EndCondition::After(6));
    }

    #[test]
    fn converts_millis_and_plain_dates() {
        let record: BackendEventRecord = serde_json::from_str(
            r#"{ "id": "e1", "title": "Audit", "startTs": 1000, "endTs": 2000 }"#,
        )
        .unwrap();
        let event = CalendarEvent::try_from(record).unwrap();
        assert_eq!((event.start_ts, event.end_ts), (1000, 2000));

        let all_day = BackendTimestamp::Text("1970-01-02".into());
        assert_eq!(all_day.timestamp_millis(), Some(24 * 60 * 60 * 1000));
    }

    #[test]
    fn rejects_invalid_records() {
        let record: BackendEventRecord = serde_json::from_str(
            r#"{ "id": "e2", "start": "tomorrow", "end": 0 }"#,
        )
        .unwrap();
        assert!(matches!(
            CalendarEvent::try_from(record),
            Err(BackendError::InvalidEvent { id, .. }) if id == "e2"
        ));

        let record: BackendEventRecord = serde_json::from_str(
            r#"{ "id": "e3", "start": 0, "end": 1, "isRecurring": true, "recurrence": { "frequency": "daily", "interval": -1 } }"#,
        )
        .unwrap();
        assert!(CalendarEvent::try_from(record).is_err());
    }

    #[test]
    fn skips_malformed_records_in_list() {
        let values: Vec<Value> = serde_json::from_str(
            r#"[{ "id": "a", "start": 0, "end": 1 }, { "id": "b", "title": "missing times" }, 7]"#,
        )
        .unwrap();
        let records = records_from_values(values);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "a");
    }
}
