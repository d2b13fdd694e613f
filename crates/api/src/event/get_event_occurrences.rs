use crate::error::GageCalendarError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use gage_calendar_api_structs::get_event_occurrences::*;
use gage_calendar_domain::{CalendarEvent, CalendarItem, TimeSpan, UserSession, ID};
use gage_calendar_infra::GageCalendarContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> GageCalendarError {
    match e {
        UseCaseErrors::InvalidTimespan => {
            GageCalendarError::BadClientData("The provided start_ts and end_ts is invalid".into())
        }
        UseCaseErrors::NotFound(event_id) => GageCalendarError::NotFound(format!(
            "The calendar event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::StorageError => GageCalendarError::InternalError,
    }
}

pub async fn get_event_occurrences_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<GageCalendarContext>,
) -> Result<HttpResponse, GageCalendarError> {
    let session = protect_route(&http_req)?;

    let usecase = GetEventOccurrencesUseCase {
        session,
        event_id: path_params.event_id.clone(),
        timespan: query_params.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            HttpResponse::Ok().json(APIResponse::new(usecase_res.event, usecase_res.items))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventOccurrencesUseCase {
    pub session: UserSession,
    pub event_id: ID,
    pub timespan: QueryParams,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    InvalidTimespan,
    StorageError,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub event: CalendarEvent,
    pub items: Vec<CalendarItem>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventOccurrencesUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetEventOccurrences";

    async fn execute(&mut self, ctx: &GageCalendarContext) -> Result<Self::Response, Self::Errors> {
        let timespan = TimeSpan::create(self.timespan.start_ts, self.timespan.end_ts)
            .map_err(|_| UseCaseErrors::InvalidTimespan)?;
        if timespan.greater_than(ctx.config.expansion_window_limit) {
            return Err(UseCaseErrors::InvalidTimespan);
        }

        let event = ctx
            .repos
            .events
            .find(&self.event_id, &self.session)
            .await
            .map_err(|e| {
                error!("Unable to read calendar event {}: {:?}", self.event_id, e);
                UseCaseErrors::StorageError
            })?
            .ok_or_else(|| UseCaseErrors::NotFound(self.event_id.clone()))?;

        let items = event.expand(
            &timespan,
            &ctx.config.calendar_settings,
            &ctx.config.expansion_limits,
        );
        Ok(UseCaseResponse { event, items })
    }
}
