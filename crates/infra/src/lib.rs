mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IEventRepo, InMemoryEventRepo, Repos};
pub use services::calendar_backend::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct GageCalendarContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl GageCalendarContext {
    fn create(config: Config) -> Self {
        let repos = match &config.calendar_api_base_url {
            Some(base_url) => {
                info!("Reading calendar events from: {}", base_url);
                Repos::create_remote(base_url)
            }
            None => Repos::create_inmemory(),
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> GageCalendarContext {
    GageCalendarContext::create(Config::new())
}
