use gage_calendar_api::Application;
use gage_calendar_domain::{CalendarEvent, CalendarSettings, ExpansionLimits, UserSession, ID};
use gage_calendar_infra::{Config, GageCalendarContext, Repos};
use gage_calendar_sdk::GageCalendarSDK;

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// SDK acting on behalf of `session`
    pub fn sdk_for(&self, session: &UserSession) -> GageCalendarSDK {
        GageCalendarSDK::with_session(
            self.address.clone(),
            &session.user_id,
            session.access_token.clone(),
        )
    }
}

pub fn new_session() -> UserSession {
    UserSession::new(ID::new(), "test-access-token")
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, GageCalendarSDK) {
    spawn_app_with_events(&[]).await
}

/// Launch the application with `events` stored in the in memory repository
pub async fn spawn_app_with_events(events: &[CalendarEvent]) -> (TestApp, GageCalendarSDK) {
    let mut ctx = GageCalendarContext::create_inmemory();
    ctx.repos = Repos::create_inmemory_with(events);
    ctx.config.port = 0; // Random port
    ctx.config.calendar_settings = CalendarSettings::default();
    ctx.config.expansion_limits = ExpansionLimits::default();
    ctx.config.expansion_window_limit = 1000 * 60 * 60 * 24 * 62;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = GageCalendarSDK::new(address.clone());
    let app = TestApp { config, address };
    (app, sdk)
}
