use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::store::{
    daily::DailyEntry, goal::Goal, list::ListItem, note::Note, prayer::PrayerTimes,
    schedule::ScheduleActivity, table::TableViewData,
};

/// The screen the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Table,
    Schedule,
    Goals,
    Daily,
    Notes,
    Lists,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Table,
        ViewKind::Schedule,
        ViewKind::Goals,
        ViewKind::Daily,
        ViewKind::Notes,
        ViewKind::Lists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Table => "table",
            ViewKind::Schedule => "schedule",
            ViewKind::Goals => "goals",
            ViewKind::Daily => "daily",
            ViewKind::Notes => "notes",
            ViewKind::Lists => "lists",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|view| view.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Invalid view: {}", s))
    }
}

/// Everything the application knows. One instance per store; readers get it
/// by shared reference and all writes go through `AppStore`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_view: ViewKind,
    pub sidebar_open: bool,
    pub selected_week: i64,
    pub selected_city: String,
    pub prayer_times: PrayerTimes,
    pub table_view_data: TableViewData,
    pub schedule_activities: Vec<ScheduleActivity>,
    pub goals: Vec<Goal>,
    pub daily_entries: Vec<DailyEntry>,
    pub notes: Vec<Note>,
    pub list_items: Vec<ListItem>,
}
