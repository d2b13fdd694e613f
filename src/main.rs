mod telemetry;

use gage_calendar_api::Application;
use gage_calendar_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("gage_calendar_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    app.start().await
}
