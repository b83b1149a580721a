//! Day-boundary arithmetic for the display timezone.
//!
//! The bot renders everything in a fixed UTC+5 offset. "Today" ends at the
//! next local midnight, which is 19:00 UTC. All functions here are pure and
//! take the current instant as an argument so they can be tested without a
//! clock.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime, Timelike, Utc};

/// Fixed display offset from UTC, in hours.
pub const DISPLAY_OFFSET_HOURS: i32 = 5;

/// Hour of the UTC day that corresponds to local midnight.
pub const DAY_CUTOVER_HOUR_UTC: u32 = 19;

#[allow(clippy::panic)]
const DISPLAY_OFFSET: FixedOffset = match FixedOffset::east_opt(DISPLAY_OFFSET_HOURS * 3600) {
    Some(offset) => offset,
    None => panic!("DISPLAY_OFFSET_HOURS is out of range"),
};

#[allow(clippy::panic)]
const CUTOVER_TIME: NaiveTime = match NaiveTime::from_hms_opt(DAY_CUTOVER_HOUR_UTC, 0, 0) {
    Some(time) => time,
    None => panic!("DAY_CUTOVER_HOUR_UTC is not a valid hour"),
};

/// Uzbek weekday names, Monday first.
pub const WEEKDAYS_UZ: [&str; 7] = [
    "Dushanba",
    "Seshanba",
    "Chorshanba",
    "Payshanba",
    "Juma",
    "Shanba",
    "Yakshanba",
];

/// The display timezone as a chrono offset.
pub fn display_offset() -> FixedOffset {
    DISPLAY_OFFSET
}

/// Returns today's 19:00 UTC when `now` is earlier in the day, otherwise
/// tomorrow's 19:00 UTC. This is the next local midnight expressed in UTC.
pub fn next_local_midnight_utc(now: DateTime<Utc>) -> DateTime<Utc> {
    let cutover = now.date_naive().and_time(CUTOVER_TIME).and_utc();

    if now.hour() < DAY_CUTOVER_HOUR_UTC {
        cutover
    } else {
        cutover + Duration::days(1)
    }
}

/// Lower bound for the posts kept by the daily purge.
pub fn today_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    next_local_midnight_utc(now)
}

/// The trailing 24 hour window that ends at the next local midnight.
///
/// Lower bound inclusive, upper bound exclusive.
pub fn recent_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let upper = next_local_midnight_utc(now);
    (upper - Duration::hours(24), upper)
}

/// Next literal local midnight, computed through the display timezone.
///
/// Used by the cleanup loop. Agrees with [`next_local_midnight_utc`] for every
/// instant.
pub fn local_midnight_after(now: DateTime<Utc>) -> DateTime<Utc> {
    let local_today = now.with_timezone(&DISPLAY_OFFSET).date_naive();
    let local_midnight = (local_today + Duration::days(1)).and_time(NaiveTime::MIN);

    (local_midnight - Duration::seconds(i64::from(DISPLAY_OFFSET.local_minus_utc()))).and_utc()
}

/// Converts a UTC instant into the display timezone.
pub fn to_display_local(ts: DateTime<Utc>) -> DateTime<FixedOffset> {
    ts.with_timezone(&display_offset())
}

/// Localized weekday name for an instant already in the display timezone.
pub fn weekday_name(local: &DateTime<FixedOffset>) -> &'static str {
    WEEKDAYS_UZ[local.weekday().num_days_from_monday() as usize]
}

/// Converts a stored unix timestamp into a UTC instant.
pub fn from_unix(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}
