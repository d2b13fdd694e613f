mod helpers;

use chrono::{TimeZone, Utc};
use gage_calendar_domain::{CalendarEvent as StoredEvent, RecurrenceRule, Weekday};
use gage_calendar_sdk::{
    APIErrorVariant, CalendarEvent, ExpandEventsInput, Frequency, GetCalendarInput,
    GetEventOccurrencesInput, RecurrenceOptions, ViewMode, ID,
};
use helpers::setup::{new_session, spawn_app, spawn_app_with_events};

const DAY: i64 = 1000 * 60 * 60 * 24;

fn millis(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn event_input(id: &str, recurrence: Option<RecurrenceOptions>) -> CalendarEvent {
    CalendarEvent {
        id: id.parse().unwrap(),
        title: "Bore gauge calibration".into(),
        description: None,
        location: Some("Metrology lab".into()),
        gage_id: Some("BG-12".into()),
        organizer_id: None,
        participants: Vec::new(),
        start_ts: 0,
        end_ts: 1000 * 60 * 45,
        all_day: false,
        is_recurring: recurrence.is_some(),
        recurrence,
        metadata: Default::default(),
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_expand_events() {
    let (_, sdk) = spawn_app().await;
    let every_other_day = RecurrenceOptions {
        frequency: Frequency::Daily,
        interval: 2,
        ..Default::default()
    };

    let res = sdk
        .event
        .expand(ExpandEventsInput {
            events: vec![
                event_input("recurring", Some(every_other_day)),
                event_input("single", None),
            ],
            start_ts: DAY,
            end_ts: 6 * DAY,
        })
        .await
        .expect("To expand events");

    let ids: Vec<_> = res.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "recurring-occurrence-1",
            "recurring-occurrence-2",
            "recurring-occurrence-3",
            "single"
        ]
    );
    for item in res.items.iter().filter(|item| item.is_recurrence_instance) {
        assert_eq!(item.original_event_id.as_str(), "recurring");
        assert_eq!(item.end_ts - item.start_ts, 1000 * 60 * 45);
        assert_eq!(item.gage_id.as_deref(), Some("BG-12"));
    }
    assert_eq!(res.items[0].start_ts, 2 * DAY);
    assert!(!res.items[3].is_recurrence_instance);
}

#[actix_web::main]
#[test]
async fn test_expand_events_rejects_invalid_recurrence() {
    let (_, sdk) = spawn_app().await;
    let broken = RecurrenceOptions {
        frequency: Frequency::Monthly,
        day_of_month: Some(32),
        ..Default::default()
    };

    let res = sdk
        .event
        .expand(ExpandEventsInput {
            events: vec![event_input("broken", Some(broken))],
            start_ts: 0,
            end_ts: DAY,
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_calendar_requires_session() {
    let (app, sdk) = spawn_app().await;
    let input = || GetCalendarInput {
        date: Some("2024-02-15".into()),
        view: Some("week".into()),
    };

    let res = sdk.calendar.get(input()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::Unauthorized);

    let session = new_session();
    assert!(app.sdk_for(&session).calendar.get(input()).await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_get_calendar() {
    let session = new_session();
    let mut round = StoredEvent::new(
        "Calibration round",
        millis(2024, 1, 1, 9),
        millis(2024, 1, 1, 10),
    );
    round.organizer_id = Some(session.user_id.clone());
    round.set_recurrence(RecurrenceRule::weekly_on(1, vec![Weekday::Mon, Weekday::Wed]));
    let mut audit = StoredEvent::new(
        "Gage audit",
        millis(2024, 2, 16, 13),
        millis(2024, 2, 16, 15),
    );
    audit.organizer_id = Some(session.user_id.clone());
    let mut elsewhere = audit.clone();
    elsewhere.id = ID::new();
    elsewhere.organizer_id = Some(ID::new());

    let (app, _) = spawn_app_with_events(&[round.clone(), audit.clone(), elsewhere]).await;
    let res = app
        .sdk_for(&session)
        .calendar
        .get(GetCalendarInput {
            date: Some("2024-02-15".into()),
            view: Some("week".into()),
        })
        .await
        .expect("To get calendar");

    assert_eq!(res.view, ViewMode::Week);
    assert_eq!(res.range.start(), millis(2024, 2, 11, 0));
    assert_eq!(res.range.end(), millis(2024, 2, 18, 0) - 1);
    assert_eq!(res.previous_date, "2024-02-08");
    assert_eq!(res.next_date, "2024-02-22");

    let starts: Vec<_> = res.items.iter().map(|item| item.start_ts).collect();
    assert_eq!(
        starts,
        vec![
            millis(2024, 2, 12, 9),
            millis(2024, 2, 14, 9),
            millis(2024, 2, 16, 13)
        ]
    );
    assert_eq!(res.items[0].original_event_id, round.id);
    assert_eq!(res.items[2].id, audit.id.to_string());
}

#[actix_web::main]
#[test]
async fn test_get_calendar_rejects_invalid_date() {
    let (app, _) = spawn_app().await;
    let res = app
        .sdk_for(&new_session())
        .calendar
        .get(GetCalendarInput {
            date: Some("2024-13-01".into()),
            view: None,
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_get_calendar_defaults_to_today() {
    let (app, _) = spawn_app().await;
    let res = app
        .sdk_for(&new_session())
        .calendar
        .get(GetCalendarInput {
            date: None,
            view: Some("day".into()),
        })
        .await
        .expect("To get calendar");
    assert_eq!(res.view, ViewMode::Day);
    assert_eq!(res.range.duration(), DAY - 1);
}

#[actix_web::main]
#[test]
async fn test_get_event_occurrences() {
    let session = new_session();
    let mut event = StoredEvent::new("Thread gauge check", 0, 1000 * 60 * 60);
    event.organizer_id = Some(session.user_id.clone());
    event.set_recurrence(RecurrenceRule::weekly_on(1, Vec::new()));

    let (app, _) = spawn_app_with_events(&[event.clone()]).await;
    let sdk = app.sdk_for(&session);

    let res = sdk
        .event
        .get_occurrences(GetEventOccurrencesInput {
            event_id: event.id.clone(),
            start_ts: 0,
            end_ts: 30 * DAY,
        })
        .await
        .expect("To get event occurrences");
    assert_eq!(res.event.id, event.id);
    let starts: Vec<_> = res.items.iter().map(|item| item.start_ts).collect();
    assert_eq!(starts, vec![0, 7 * DAY, 14 * DAY, 21 * DAY, 28 * DAY]);

    let too_long = sdk
        .event
        .get_occurrences(GetEventOccurrencesInput {
            event_id: event.id.clone(),
            start_ts: 0,
            end_ts: app.config.expansion_window_limit + 1,
        })
        .await;
    assert_eq!(too_long.unwrap_err().variant, APIErrorVariant::BadClientData);

    let missing = sdk
        .event
        .get_occurrences(GetEventOccurrencesInput {
            event_id: ID::new(),
            start_ts: 0,
            end_ts: DAY,
        })
        .await;
    assert_eq!(missing.unwrap_err().variant, APIErrorVariant::NotFound);

    let anonymous = app
        .sdk_for(&new_session())
        .event
        .get_occurrences(GetEventOccurrencesInput {
            event_id: event.id.clone(),
            start_ts: 0,
            end_ts: DAY,
        })
        .await;
    assert_eq!(anonymous.unwrap_err().variant, APIErrorVariant::NotFound);
}
