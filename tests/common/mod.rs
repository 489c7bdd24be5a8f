mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from planboard for tests
pub use planboard::core::store::{
    AppState, AppStore, CellValue, DailyEntryUpdate, DailyRepository, GoalRepository, GoalUpdate,
    ListItemUpdate, ListRepository, ListStatus, NewDailyEntry, NewGoal, NewListItem, NewNote,
    NewScheduleActivity, NoteRepository, NoteUpdate, PrayerKey, PrayerRepository, Progress,
    RowColor, ScheduleRepository, StoreConfig, TableRepository, ViewKind,
};
