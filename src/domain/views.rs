use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

/// Window for view counts, ending now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewPeriod {
    Day,
    Week,
    Month,
    #[default]
    All,
}

impl ViewPeriod {
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            ViewPeriod::Day => Some(now - Duration::days(1)),
            ViewPeriod::Week => Some(now - Duration::days(7)),
            ViewPeriod::Month => Some(now - Duration::days(30)),
            ViewPeriod::All => None,
        }
    }
}

pub const DEFAULT_SERIES_DAYS: i64 = 30;
pub const MAX_SERIES_DAYS: i64 = 90;

pub fn clamp_series_days(days: Option<i64>) -> i64 {
    days.unwrap_or(DEFAULT_SERIES_DAYS).clamp(1, MAX_SERIES_DAYS)
}

/// One entry per UTC day of the window ending today, oldest first. Days missing from
/// `counts` are zero.
pub fn fill_daily_buckets(
    now: DateTime<Utc>,
    days: i64,
    counts: &[(NaiveDate, i64)],
) -> Vec<(NaiveDate, i64)> {
    let today = now.date_naive();
    (0..days)
        .rev()
        .map(|back| today - Duration::days(back))
        .map(|day| {
            let count = counts
                .iter()
                .find(|(d, _)| *d == day)
                .map(|(_, c)| *c)
                .unwrap_or(0);
            (day, count)
        })
        .collect()
}

/// First instant counted by a series of `days` days ending today.
pub fn series_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let first_day = now.date_naive() - Duration::days(days - 1);
    first_day.and_time(NaiveTime::MIN).and_utc()
}
