use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Drops minutes, seconds and sub-second precision.
pub fn truncate_to_hour(datetime: DateTime<Utc>) -> DateTime<Utc> {
    datetime
        .with_minute(0)
        .and_then(|dt| dt.with_second(0))
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(datetime)
}

/// June 15th of `year` at the given UTC hour, the fixed sampling day for past years.
pub fn mid_june(year: i32, hour: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 6, 15, hour, 0, 0).single()
}

/// Date `days` before `now`, moved to the 15th of that month and formatted `YYYY-MM-15`.
pub fn mid_month_days_before(now: DateTime<Utc>, days: i64) -> String {
    let target = now - Duration::days(days);
    format!("{:04}-{:02}-15", target.year(), target.month())
}
