use crate::error::GageCalendarError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use gage_calendar_api_structs::get_calendar::*;
use gage_calendar_domain::{
    date, expand_events, resolve_range, CalendarItem, CalendarView, TimeSpan, UserSession,
    ViewMode,
};
use gage_calendar_infra::GageCalendarContext;
use tracing::{error, warn};

fn handle_error(e: UseCaseErrors) -> GageCalendarError {
    match e {
        UseCaseErrors::InvalidDate(datestr) => GageCalendarError::BadClientData(format!(
            "Invalid date: {}, expected a date on the format YYYY-MM-DD",
            datestr
        )),
        UseCaseErrors::StorageError => GageCalendarError::InternalError,
    }
}

pub async fn get_calendar_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<GageCalendarContext>,
) -> Result<HttpResponse, GageCalendarError> {
    let session = protect_route(&http_req)?;
    let query = query_params.0;

    let usecase = GetCalendarUseCase {
        session,
        date: query.date,
        view: query.view,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse::new(
                res.range,
                res.view.mode(),
                date::format_date(&res.view.previous_date()),
                date::format_date(&res.view.next_date()),
                res.items,
            ))
        })
        .map_err(handle_error)
}

/// Everything a calendar page shows for one date and view
#[derive(Debug)]
pub struct GetCalendarUseCase {
    pub session: UserSession,
    /// Today in the calendar timezone when missing
    pub date: Option<String>,
    pub view: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidDate(String),
    StorageError,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub range: TimeSpan,
    pub view: CalendarView,
    pub items: Vec<CalendarItem>,
}

impl GetCalendarUseCase {
    fn day(&self, ctx: &GageCalendarContext) -> Option<NaiveDate> {
        match &self.date {
            Some(datestr) => date::parse_date(datestr).ok(),
            None => {
                let tz = ctx.config.calendar_settings.timezone;
                date::from_millis(ctx.sys.get_timestamp_millis(), &tz).map(|now| now.date_naive())
            }
        }
    }

    /// The requested view mode and the range it covers. A missing view is the
    /// month view, an unknown one covers the month without padding.
    fn resolve(
        &self,
        day: NaiveDate,
        ctx: &GageCalendarContext,
    ) -> Option<(CalendarView, TimeSpan)> {
        let settings = &ctx.config.calendar_settings;
        let mode = match &self.view {
            None => Some(ViewMode::Month),
            Some(view) => match view.parse::<ViewMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    warn!("{}, showing the plain month", e);
                    None
                }
            },
        };

        let view = CalendarView::new(day, mode.unwrap_or(ViewMode::Month));
        let range = match mode {
            Some(_) => view.range(settings)?,
            None => {
                let current = date::localize(&settings.timezone, day.and_time(NaiveTime::MIN));
                resolve_range(&current, None, settings)?
            }
        };
        Some((view, range))
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetCalendar";

    async fn execute(&mut self, ctx: &GageCalendarContext) -> Result<Self::Response, Self::Errors> {
        let (view, range) = self
            .day(ctx)
            .and_then(|day| self.resolve(day, ctx))
            .ok_or_else(|| UseCaseErrors::InvalidDate(self.date.clone().unwrap_or_default()))?;

        let events = ctx
            .repos
            .events
            .find_by_user(&self.session, &range)
            .await
            .map_err(|e| {
                error!(
                    "Unable to read calendar events of user {}: {:?}",
                    self.session.user_id, e
                );
                UseCaseErrors::StorageError
            })?;

        let items = expand_events(
            &events,
            &range,
            &ctx.config.calendar_settings,
            &ctx.config.expansion_limits,
        );

        Ok(UseCaseResponse { range, view, items })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gage_calendar_domain::{CalendarEvent, RecurrenceRule, Weekday, ID};
    use gage_calendar_infra::{ISys, Repos};
    use std::sync::Arc;

    fn millis(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    struct StaticTimeSys(i64);

    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    struct TestContext {
        ctx: GageCalendarContext,
        session: UserSession,
    }

    /// A weekly Monday and Wednesday calibration round starting 2024-01-01
    fn setup() -> TestContext {
        let session = UserSession::new(ID::new(), "token");
        let mut event = CalendarEvent::new(
            "Calibration round",
            millis(2024, 1, 1, 9),
            millis(2024, 1, 1, 10),
        );
        event.organizer_id = Some(session.user_id.clone());
        event.set_recurrence(RecurrenceRule::weekly_on(
            1,
            vec![Weekday::Mon, Weekday::Wed],
        ));
        let mut unrelated = event.clone();
        unrelated.id = ID::new();
        unrelated.organizer_id = Some(ID::new());

        let mut ctx = GageCalendarContext::create_inmemory();
        ctx.config.calendar_settings = Default::default();
        ctx.repos = Repos::create_inmemory_with(&[event, unrelated]);
        TestContext { ctx, session }
    }

    fn usecase(session: &UserSession, date: &str, view: Option<&str>) -> GetCalendarUseCase {
        GetCalendarUseCase {
            session: session.clone(),
            date: Some(date.into()),
            view: view.map(String::from),
        }
    }

    #[actix_web::main]
    #[test]
    async fn week_view() {
        let TestContext { ctx, session } = setup();

        let res = execute(usecase(&session, "2024-02-15", Some("week")), &ctx)
            .await
            .unwrap();
        assert_eq!(res.view.mode(), ViewMode::Week);
        assert_eq!(res.range.start(), millis(2024, 2, 11, 0));
        assert_eq!(res.range.end(), millis(2024, 2, 18, 0) - 1);
        let starts: Vec<_> = res.items.iter().map(|item| item.start_ts()).collect();
        assert_eq!(starts, vec![millis(2024, 2, 12, 9), millis(2024, 2, 14, 9)]);
        assert_eq!(res.view.previous_date(), NaiveDate::from_ymd_opt(2024, 2, 8).unwrap());
        assert_eq!(res.view.next_date(), NaiveDate::from_ymd_opt(2024, 2, 22).unwrap());
    }

    #[actix_web::main]
    #[test]
    async fn month_view_is_padded() {
        let TestContext { ctx, session } = setup();

        let res = execute(usecase(&session, "2024-02-15", None), &ctx)
            .await
            .unwrap();
        assert_eq!(res.view.mode(), ViewMode::Month);
        assert_eq!(res.range.start(), millis(2024, 1, 25, 0));
        assert_eq!(res.range.end(), millis(2024, 3, 8, 0) - 1);
        assert!(res
            .items
            .iter()
            .any(|item| item.start_ts() == millis(2024, 1, 29, 9)));
        assert!(res
            .items
            .iter()
            .all(|item| res.range.contains(item.start_ts())));
    }

    #[actix_web::main]
    #[test]
    async fn unknown_view_is_plain_month() {
        let TestContext { ctx, session } = setup();

        let res = execute(usecase(&session, "2024-02-15", Some("quarter")), &ctx)
            .await
            .unwrap();
        assert_eq!(res.view.mode(), ViewMode::Month);
        assert_eq!(res.range.start(), millis(2024, 2, 1, 0));
        assert_eq!(res.range.end(), millis(2024, 3, 1, 0) - 1);
        // 2024-02 has four Mondays and four Wednesdays
        assert_eq!(res.items.len(), 8);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_date() {
        let TestContext { ctx, session } = setup();

        for datestr in ["2024-02-30", "15.02.2024", ""].iter() {
            let res = execute(usecase(&session, datestr, Some("day")), &ctx).await;
            assert!(matches!(res, Err(UseCaseErrors::InvalidDate(_))));
        }
    }

    #[actix_web::main]
    #[test]
    async fn missing_date_is_today_in_calendar_timezone() {
        let TestContext { mut ctx, session } = setup();
        // 2024-02-15 02:00 UTC is still 2024-02-14 in New York
        ctx.sys = Arc::new(StaticTimeSys(millis(2024, 2, 15, 2)));
        assert!(ctx.config.calendar_settings.set_timezone("America/New_York"));

        let mut usecase = usecase(&session, "", Some("day"));
        usecase.date = None;
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.view.date(), NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
        assert_eq!(res.range.start(), millis(2024, 2, 14, 5));
        // Wednesday round at 09:00 UTC
        assert_eq!(res.items.len(), 1);
    }
}
