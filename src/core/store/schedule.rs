use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub weekly: u32,
    pub monthly: u32,
    pub streak: u32,
}

/// A recurring activity on the weekly schedule. `weekly_tracker` runs
/// Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleActivity {
    pub id: String,
    pub time: String,
    pub day: String,
    pub activity: String,
    pub weekly_tracker: [bool; 7],
    pub stats: ActivityStats,
    #[serde(skip)]
    pub(super) _guard: (),
}

/// Fields for a new activity. Anything left `None` takes its default; an
/// `id` given here replaces the generated one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleActivity {
    pub id: Option<String>,
    pub time: Option<String>,
    pub day: Option<String>,
    pub activity: Option<String>,
    pub weekly_tracker: Option<[bool; 7]>,
    pub stats: Option<ActivityStats>,
}

impl NewScheduleActivity {
    pub(super) fn into_activity(self, generated_id: String) -> ScheduleActivity {
        ScheduleActivity {
            id: self.id.unwrap_or(generated_id),
            time: self.time.unwrap_or_default(),
            day: self.day.unwrap_or_default(),
            activity: self.activity.unwrap_or_else(|| "New Activity".to_string()),
            weekly_tracker: self.weekly_tracker.unwrap_or([false; 7]),
            stats: self.stats.unwrap_or_default(),
            _guard: (),
        }
    }
}

pub trait ScheduleRepository {
    fn schedule_activities(&self) -> &[ScheduleActivity];
    fn schedule_activity_by_id(&self, id: &str) -> Option<&ScheduleActivity>;
    fn add_schedule_activity(&mut self, activity: NewScheduleActivity) -> String;
}
