use crate::error::GageCalendarError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gage_calendar_api_structs::{dtos::CalendarEventDTO, expand_events::*};
use gage_calendar_domain::{
    expand_events, CalendarEvent, CalendarItem, InvalidRecurrenceError, TimeSpan, ID,
};
use gage_calendar_infra::GageCalendarContext;

fn handle_error(e: UseCaseErrors) -> GageCalendarError {
    match e {
        UseCaseErrors::InvalidTimespan => {
            GageCalendarError::BadClientData("The provided start_ts and end_ts is invalid".into())
        }
        UseCaseErrors::InvalidRecurrence(event_id, e) => GageCalendarError::BadClientData(
            format!("The recurrence of the event with id: {}, is invalid. {}", event_id, e),
        ),
    }
}

pub async fn expand_events_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<GageCalendarContext>,
) -> Result<HttpResponse, GageCalendarError> {
    let body = body.0;
    let usecase = ExpandEventsUseCase {
        events: body.events,
        start_ts: body.start_ts,
        end_ts: body.end_ts,
    };

    execute(usecase, &ctx)
        .await
        .map(|items| HttpResponse::Ok().json(APIResponse::new(items)))
        .map_err(handle_error)
}

/// Expands events handed in by the caller, nothing is read from storage
#[derive(Debug)]
pub struct ExpandEventsUseCase {
    pub events: Vec<CalendarEventDTO>,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidTimespan,
    InvalidRecurrence(ID, InvalidRecurrenceError),
}

#[async_trait::async_trait(?Send)]
impl UseCase for ExpandEventsUseCase {
    type Response = Vec<CalendarItem>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ExpandEvents";

    async fn execute(&mut self, ctx: &GageCalendarContext) -> Result<Self::Response, Self::Errors> {
        let timespan = TimeSpan::create(self.start_ts, self.end_ts)
            .map_err(|_| UseCaseErrors::InvalidTimespan)?;

        let events = std::mem::take(&mut self.events)
            .into_iter()
            .map(|dto| {
                let event_id = dto.id.clone();
                CalendarEvent::try_from(dto)
                    .map_err(|e| UseCaseErrors::InvalidRecurrence(event_id, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expand_events(
            &events,
            &timespan,
            &ctx.config.calendar_settings,
            &ctx.config.expansion_limits,
        ))
    }
}
