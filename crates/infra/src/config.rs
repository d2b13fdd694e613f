use gage_calendar_domain::{CalendarSettings, ExpansionLimits, DEFAULT_ITERATION_CAP};
use std::str::FromStr;
use tracing::{info, warn};

const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Base url of the calendar backend owning the events. Events are kept
    /// in memory when this is not set.
    pub calendar_api_base_url: Option<String>,
    /// Bounds every recurring event is expanded with
    pub expansion_limits: ExpansionLimits,
    /// Maximum allowed duration in millis for querying occurrences of an
    /// event. Keeps clients from asking for years of occurrences at once.
    pub expansion_window_limit: i64,
    /// Time zone and week start the calendar is laid out in
    pub calendar_settings: CalendarSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from a variable lookup, falling back to defaults for
    /// anything missing or invalid
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&var, "PORT", 5000);

        let calendar_api_base_url = match var("CALENDAR_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => {
                Some(url.trim().trim_end_matches('/').to_string())
            }
            _ => {
                info!("Did not find CALENDAR_API_BASE_URL environment variable. Events will be kept in memory.");
                None
            }
        };

        let iteration_cap = match parse_or(&var, "EXPANSION_ITERATION_CAP", DEFAULT_ITERATION_CAP) {
            0 => {
                warn!(
                    "EXPANSION_ITERATION_CAP must be positive, falling back to: {}.",
                    DEFAULT_ITERATION_CAP
                );
                DEFAULT_ITERATION_CAP
            }
            cap => cap,
        };
        let render_budget = match var("EXPANSION_RENDER_BUDGET") {
            Some(budget) => match budget.parse::<usize>() {
                Ok(budget) if budget > 0 => Some(budget),
                _ => {
                    warn!(
                        "The given EXPANSION_RENDER_BUDGET: {} is not valid, rendering every occurrence.",
                        budget
                    );
                    None
                }
            },
            None => None,
        };

        let window_limit_days = match parse_or(&var, "EXPANSION_WINDOW_LIMIT_DAYS", 62i64) {
            days if days > 0 => days,
            days => {
                warn!(
                    "EXPANSION_WINDOW_LIMIT_DAYS must be positive, got: {}. Falling back to 62.",
                    days
                );
                62
            }
        };

        let mut calendar_settings = CalendarSettings::default();
        if let Some(timezone) = var("CALENDAR_TIMEZONE") {
            if !calendar_settings.set_timezone(&timezone) {
                warn!(
                    "The given CALENDAR_TIMEZONE: {} is not valid, falling back to: {}.",
                    timezone, calendar_settings.timezone
                );
            }
        }
        if let Some(week_start) = var("CALENDAR_WEEK_START") {
            let valid = week_start
                .parse::<u32>()
                .map(|wkst| calendar_settings.set_week_start(wkst))
                .unwrap_or(false);
            if !valid {
                warn!(
                    "The given CALENDAR_WEEK_START: {} is not valid, falling back to: {}.",
                    week_start, calendar_settings.week_start
                );
            }
        }

        Self {
            port,
            calendar_api_base_url,
            expansion_limits: ExpansionLimits {
                iteration_cap,
                render_budget,
            },
            expansion_window_limit: window_limit_days * DAY_MILLIS,
            calendar_settings,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match var(key) {
        Some(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        None => default,
    }
}
