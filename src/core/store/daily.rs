use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub activity: String,
    pub notes: String,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDailyEntry {
    pub id: Option<String>,
    pub date: Option<String>,
    pub activity: Option<String>,
    pub notes: Option<String>,
}

impl NewDailyEntry {
    /// `today` fills in a missing date.
    pub(super) fn into_entry(self, generated_id: String, today: String) -> DailyEntry {
        DailyEntry {
            id: self.id.unwrap_or(generated_id),
            date: self.date.unwrap_or(today),
            activity: self.activity.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            _guard: (),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyEntryUpdate {
    pub date: Option<String>,
    pub activity: Option<String>,
    pub notes: Option<String>,
}

impl DailyEntryUpdate {
    pub(super) fn apply(&self, entry: &mut DailyEntry) {
        if let Some(date) = &self.date {
            entry.date = date.clone();
        }
        if let Some(activity) = &self.activity {
            entry.activity = activity.clone();
        }
        if let Some(notes) = &self.notes {
            entry.notes = notes.clone();
        }
    }
}

pub trait DailyRepository {
    fn daily_entries(&self) -> &[DailyEntry];
    fn daily_entry_by_id(&self, id: &str) -> Option<&DailyEntry>;
    fn add_daily_entry(&mut self, entry: NewDailyEntry) -> String;
    fn update_daily_entry(&mut self, id: &str, update: &DailyEntryUpdate) -> bool;
    fn delete_daily_entry(&mut self, id: &str) -> bool;
}
