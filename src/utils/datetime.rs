use chrono::{DateTime, Utc};

use crate::services::time_window::{to_display_local, weekday_name};

/// A post time broken into the pieces shown to users, in local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStamp {
    pub day_name: &'static str,
    /// `dd.mm.YYYY`
    pub date: String,
    /// `dd.mm`
    pub short_date: String,
    /// `HH:MM`
    pub time: String,
}

pub fn local_stamp(dt: &DateTime<Utc>) -> LocalStamp {
    let local = to_display_local(*dt);
    LocalStamp {
        day_name: weekday_name(&local),
        date: local.format("%d.%m.%Y").to_string(),
        short_date: local.format("%d.%m").to_string(),
        time: local.format("%H:%M").to_string(),
    }
}
