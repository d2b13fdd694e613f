use chrono::{prelude::*, Duration, LocalResult};
use chrono_tz::Tz;

pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };
    if !(1970..=2100).contains(&year) || !(1..=12).contains(&month) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow::Error::msg(datestr.to_string()))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%F").to_string()
}

pub fn from_millis(timestamp_millis: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(timestamp_millis).single()
}

/// Attaches the time zone to a wall clock time.
///
/// Ambiguous wall clock times (DST fall back) resolve to the earliest instant
/// and skipped ones (DST spring forward) are moved past the gap.
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

fn with_naive(
    dt: &DateTime<Tz>,
    f: impl FnOnce(NaiveDateTime) -> Option<NaiveDateTime>,
) -> Option<DateTime<Tz>> {
    f(dt.naive_local()).map(|naive| localize(&dt.timezone(), naive))
}

pub fn add_days(dt: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let delta = Duration::try_days(days)?;
    with_naive(dt, |naive| naive.checked_add_signed(delta))
}

pub fn add_weeks(dt: &DateTime<Tz>, weeks: i64) -> Option<DateTime<Tz>> {
    add_days(dt, weeks.checked_mul(7)?)
}

/// Moves `months` months forward and places the result on `day_of_month`,
/// clamped to the length of the resulting month.
pub fn add_months_clamped(dt: &DateTime<Tz>, months: i64, day_of_month: u32) -> Option<DateTime<Tz>> {
    with_naive(dt, |naive| {
        let total = i64::from(naive.year()) * 12 + i64::from(naive.month0()) + months;
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let month = total.rem_euclid(12) as u32 + 1;
        let day = day_of_month.clamp(1, days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(naive.time()))
    })
}

/// Moves `years` years forward and places the result on `month` (January -> 1)
/// and `day_of_month`, clamped to the length of that month.
pub fn add_years_clamped(
    dt: &DateTime<Tz>,
    years: i64,
    month: u32,
    day_of_month: u32,
) -> Option<DateTime<Tz>> {
    with_naive(dt, |naive| {
        let year = i32::try_from(i64::from(naive.year()).checked_add(years)?).ok()?;
        let month = month.clamp(1, 12);
        let day = day_of_month.clamp(1, days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(naive.time()))
    })
}

/// Next day in `days` (sorted, Sunday based) after `dt`. When `dt` is on or
/// past the last day of the set, jumps `interval` weeks and lands on the first
/// day of the set in that week.
pub fn next_weekday_in_set(dt: &DateTime<Tz>, days: &[Weekday], interval: i64) -> Option<DateTime<Tz>> {
    let current = i64::from(dt.weekday().num_days_from_sunday());
    let mut sorted = days
        .iter()
        .map(|d| i64::from(d.num_days_from_sunday()))
        .collect::<Vec<_>>();
    sorted.sort_unstable();

    if let Some(next) = sorted.iter().find(|day| **day > current) {
        return add_days(dt, next - current);
    }
    let first = *sorted.first()?;
    add_days(dt, interval.checked_mul(7)? - current + first)
}

pub fn start_of_day(dt: &DateTime<Tz>) -> DateTime<Tz> {
    localize(&dt.timezone(), dt.date_naive().and_time(NaiveTime::MIN))
}

pub fn end_of_day(dt: &DateTime<Tz>) -> DateTime<Tz> {
    let last_millisecond = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    localize(&dt.timezone(), dt.date_naive().and_time(last_millisecond))
}

/// `week_start`: 0 = Sunday, 1 = Monday, ...
pub fn start_of_week(dt: &DateTime<Tz>, week_start: u32) -> Option<DateTime<Tz>> {
    let weekday = i64::from(dt.weekday().num_days_from_sunday());
    let offset = (weekday - i64::from(week_start % 7) + 7) % 7;
    add_days(&start_of_day(dt), -offset)
}

pub fn end_of_week(dt: &DateTime<Tz>, week_start: u32) -> Option<DateTime<Tz>> {
    let start = start_of_week(dt, week_start)?;
    add_days(&start, 6).map(|last_day| end_of_day(&last_day))
}

pub fn start_of_month(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let first = dt.date_naive().with_day(1)?;
    Some(localize(&dt.timezone(), first.and_time(NaiveTime::MIN)))
}

pub fn end_of_month(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let last_day = days_in_month(dt.year(), dt.month());
    let last = dt.date_naive().with_day(last_day)?;
    Some(end_of_day(&localize(&dt.timezone(), last.and_time(NaiveTime::MIN))))
}
