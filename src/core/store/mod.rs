mod config;
mod daily;
mod goal;
mod list;
mod model;
mod note;
mod prayer;
mod schedule;
mod seed;
mod state;
mod table;
mod util;

use tracing::{debug, info};

pub use config::{StoreConfig, DEFAULT_TABLE_COLUMNS, DEFAULT_TABLE_ROWS};
pub use daily::{DailyEntry, DailyEntryUpdate, DailyRepository, NewDailyEntry};
pub use goal::{Goal, GoalRepository, GoalUpdate, NewGoal};
pub use list::{group_items, ListGroup, ListItem, ListItemUpdate, ListRepository, ListStatus, NewListItem};
pub use model::{CellValue, Progress};
pub use note::{NewNote, Note, NoteRepository, NoteUpdate};
pub use prayer::{PrayerKey, PrayerRepository, PrayerTime, PrayerTimes};
pub use schedule::{ActivityStats, NewScheduleActivity, ScheduleActivity, ScheduleRepository};
pub use state::{AppState, ViewKind};
pub use table::{RowColor, TableCell, TableColumn, TableRepository, TableRow, TableStats, TableViewData};
pub use util::{iso_date, iso_timestamp, Clock, FixedClock, IdSource, SequentialIds, SystemClock, UuidIds};

/// Owner of the application state. Build one at startup and hand `&mut`
/// access to whatever drives the UI; every read and write goes through it.
pub struct AppStore {
    state: AppState,
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("current_view", &self.state.current_view)
            .field("table_stats", &self.state.table_view_data.stats())
            .field("goals", &self.state.goals.len())
            .field("notes", &self.state.notes.len())
            .field("list_items", &self.state.list_items.len())
            .finish()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl AppStore {
    /// Seeded store with random ids and the system clock.
    pub fn new(config: &StoreConfig) -> Self {
        let state = seed::initial_state(config);
        info!(
            rows = state.table_view_data.rows.len(),
            columns = state.table_view_data.columns.len(),
            city = %state.selected_city,
            "Store seeded"
        );
        Self {
            state,
            ids: Box::new(UuidIds),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_view(&self) -> ViewKind {
        self.state.current_view
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.sidebar_open
    }

    pub fn selected_week(&self) -> i64 {
        self.state.selected_week
    }

    pub fn selected_city(&self) -> &str {
        &self.state.selected_city
    }

    pub fn set_current_view(&mut self, view: ViewKind) {
        debug!(%view, "Switching view");
        self.state.current_view = view;
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_open = !self.state.sidebar_open;
        debug!(open = self.state.sidebar_open, "Sidebar toggled");
    }

    pub fn set_selected_week(&mut self, week: i64) {
        self.state.selected_week = week;
    }

    pub fn set_selected_city(&mut self, city: &str) {
        self.state.selected_city = city.to_string();
    }

    /// Pretty-printed JSON of the whole state.
    pub fn snapshot_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }
}

impl PrayerRepository for AppStore {
    fn prayer_times(&self) -> &PrayerTimes {
        &self.state.prayer_times
    }

    fn update_prayer_time(&mut self, prayer: PrayerKey, time: &str) {
        debug!(%prayer, time, "Updating prayer time");
        self.state.prayer_times.get_mut(prayer).time = time.to_string();
    }
}

impl TableRepository for AppStore {
    fn table(&self) -> &TableViewData {
        &self.state.table_view_data
    }

    fn table_stats(&self) -> TableStats {
        self.state.table_view_data.stats()
    }

    fn add_table_row(&mut self) -> String {
        let row_id = self.ids.next_id("row");
        let cell_base = self.ids.next_id("cell");
        let grid = &mut self.state.table_view_data;
        let row_index = grid.rows.len();
        let row = table::numbered_row(row_id.clone(), row_index, grid.columns.len(), |col| {
            format!("{}-{}", cell_base, col)
        });
        grid.rows.push(row);
        debug!(row_id, row_index, "Added table row");
        row_id
    }

    fn update_table_cell(&mut self, row_id: &str, cell_id: &str, value: CellValue) -> bool {
        let cell = self
            .state
            .table_view_data
            .rows
            .iter_mut()
            .find(|r| r.id == row_id)
            .and_then(|row| row.cells.iter_mut().find(|c| c.id == cell_id));
        match cell {
            Some(cell) => {
                cell.value = value;
                true
            }
            None => {
                debug!(row_id, cell_id, "Cell not found, ignoring update");
                false
            }
        }
    }
}

impl ScheduleRepository for AppStore {
    fn schedule_activities(&self) -> &[ScheduleActivity] {
        &self.state.schedule_activities
    }

    fn schedule_activity_by_id(&self, id: &str) -> Option<&ScheduleActivity> {
        self.state.schedule_activities.iter().find(|a| a.id == id)
    }

    fn add_schedule_activity(&mut self, activity: NewScheduleActivity) -> String {
        let activity = activity.into_activity(self.ids.next_id("activity"));
        let id = activity.id.clone();
        self.state.schedule_activities.push(activity);
        debug!(id, "Added schedule activity");
        id
    }
}

impl GoalRepository for AppStore {
    fn goals(&self) -> &[Goal] {
        &self.state.goals
    }

    fn goal_by_id(&self, id: &str) -> Option<&Goal> {
        self.state.goals.iter().find(|g| g.id == id)
    }

    fn add_goal(&mut self, goal: NewGoal) -> String {
        let goal = goal.into_goal(self.ids.next_id("goal"));
        let id = goal.id.clone();
        self.state.goals.push(goal);
        debug!(id, "Added goal");
        id
    }

    fn update_goal(&mut self, id: &str, update: &GoalUpdate) -> bool {
        match self.state.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                update.apply(goal);
                true
            }
            None => {
                debug!(id, "Goal not found, ignoring update");
                false
            }
        }
    }

    fn delete_goal(&mut self, id: &str) -> bool {
        let before = self.state.goals.len();
        self.state.goals.retain(|g| g.id != id);
        let removed = self.state.goals.len() != before;
        debug!(id, removed, "Delete goal");
        removed
    }
}

impl DailyRepository for AppStore {
    fn daily_entries(&self) -> &[DailyEntry] {
        &self.state.daily_entries
    }

    fn daily_entry_by_id(&self, id: &str) -> Option<&DailyEntry> {
        self.state.daily_entries.iter().find(|e| e.id == id)
    }

    fn add_daily_entry(&mut self, entry: NewDailyEntry) -> String {
        let today = iso_date(self.clock.now());
        let entry = entry.into_entry(self.ids.next_id("daily"), today);
        let id = entry.id.clone();
        self.state.daily_entries.push(entry);
        debug!(id, "Added daily entry");
        id
    }

    fn update_daily_entry(&mut self, id: &str, update: &DailyEntryUpdate) -> bool {
        match self.state.daily_entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                update.apply(entry);
                true
            }
            None => {
                debug!(id, "Daily entry not found, ignoring update");
                false
            }
        }
    }

    fn delete_daily_entry(&mut self, id: &str) -> bool {
        let before = self.state.daily_entries.len();
        self.state.daily_entries.retain(|e| e.id != id);
        let removed = self.state.daily_entries.len() != before;
        debug!(id, removed, "Delete daily entry");
        removed
    }
}

impl NoteRepository for AppStore {
    fn notes(&self) -> &[Note] {
        &self.state.notes
    }

    fn note_by_id(&self, id: &str) -> Option<&Note> {
        self.state.notes.iter().find(|n| n.id == id)
    }

    fn add_note(&mut self, note: NewNote) -> String {
        let now = iso_timestamp(self.clock.now());
        let note = note.into_note(self.ids.next_id("note"), now);
        let id = note.id.clone();
        self.state.notes.push(note);
        debug!(id, "Added note");
        id
    }

    fn update_note(&mut self, id: &str, update: &NoteUpdate) -> bool {
        match self.state.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                update.apply(note);
                true
            }
            None => {
                debug!(id, "Note not found, ignoring update");
                false
            }
        }
    }

    fn delete_note(&mut self, id: &str) -> bool {
        let before = self.state.notes.len();
        self.state.notes.retain(|n| n.id != id);
        let removed = self.state.notes.len() != before;
        debug!(id, removed, "Delete note");
        removed
    }
}

impl ListRepository for AppStore {
    fn list_items(&self) -> &[ListItem] {
        &self.state.list_items
    }

    fn list_item_by_id(&self, id: &str) -> Option<&ListItem> {
        self.state.list_items.iter().find(|i| i.id == id)
    }

    fn add_list_item(&mut self, item: NewListItem) -> String {
        let item = item.into_item(self.ids.next_id("list"));
        let id = item.id.clone();
        self.state.list_items.push(item);
        debug!(id, "Added list item");
        id
    }

    fn update_list_item(&mut self, id: &str, update: &ListItemUpdate) -> bool {
        match self.state.list_items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                update.apply(item);
                true
            }
            None => {
                debug!(id, "List item not found, ignoring update");
                false
            }
        }
    }

    fn delete_list_item(&mut self, id: &str) -> bool {
        let before = self.state.list_items.len();
        self.state.list_items.retain(|i| i.id != id);
        let removed = self.state.list_items.len() != before;
        debug!(id, removed, "Delete list item");
        removed
    }
}
