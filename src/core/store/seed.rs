//! Initial contents of a freshly created store.

use crate::core::store::{
    config::StoreConfig,
    daily::DailyEntry,
    goal::Goal,
    list::{ListItem, ListStatus},
    model::Progress,
    note::Note,
    prayer::PrayerTimes,
    schedule::{ActivityStats, ScheduleActivity},
    state::AppState,
    table::{numbered_row, TableColumn, TableViewData},
};

pub(super) fn initial_state(config: &StoreConfig) -> AppState {
    AppState {
        current_view: config.initial_view,
        sidebar_open: config.sidebar_open,
        selected_week: config.selected_week,
        selected_city: config.selected_city.clone(),
        prayer_times: PrayerTimes::default(),
        table_view_data: table(config.table_rows, config.table_columns),
        schedule_activities: schedule(),
        goals: goals(),
        daily_entries: daily_entries(),
        notes: notes(),
        list_items: list_items(),
    }
}

fn table(row_count: usize, column_count: usize) -> TableViewData {
    let columns = (0..column_count)
        .map(|i| TableColumn {
            id: format!("col-{}", i),
            header: format!("Field {}", i + 1),
            width: Some("auto".to_string()),
        })
        .collect();
    let rows = (0..row_count)
        .map(|i| numbered_row(format!("row-{}", i), i, column_count, |j| format!("cell-{}-{}", i, j)))
        .collect();
    TableViewData { columns, rows }
}

fn activity(id: &str, time: &str, day: &str, activity: &str) -> ScheduleActivity {
    ScheduleActivity {
        id: id.to_string(),
        time: time.to_string(),
        day: day.to_string(),
        activity: activity.to_string(),
        weekly_tracker: [false; 7],
        stats: ActivityStats::default(),
        _guard: (),
    }
}

fn schedule() -> Vec<ScheduleActivity> {
    vec![
        activity("activity-1", "QIYAM", "DAILY", "Wake Up Early (For Qiyam)"),
        activity("activity-2", "DAILY", "DAILY", "Pray Qiyam/Tahajjud"),
        activity("activity-3", "7AM - 9AM", "MON/THU", "Commute (Morning)"),
    ]
}

fn goals() -> Vec<Goal> {
    let goal = |id: &str, title: &str, category: &str, target: &str, progress: i64| Goal {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        target: target.to_string(),
        progress: Progress::from(progress),
        completed: false,
        _guard: (),
    };
    vec![
        goal("goal-1", "Complete Project", "Work", "Dec 31", 75),
        goal("goal-2", "Learn New Skill", "Personal", "Nov 30", 50),
    ]
}

fn daily_entries() -> Vec<DailyEntry> {
    let entry = |id: &str, activity: &str, notes: &str| DailyEntry {
        id: id.to_string(),
        date: "2024-01-15".to_string(),
        activity: activity.to_string(),
        notes: notes.to_string(),
        _guard: (),
    };
    vec![
        entry("daily-1", "Team Meeting", "Discussed Q1 goals"),
        entry("daily-2", "Code Review", "Reviewed pull requests"),
    ]
}

fn notes() -> Vec<Note> {
    let note = |id: &str, title: &str, category: &str, content: &str, created_at: &str| Note {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        content: content.to_string(),
        created_at: created_at.to_string(),
        _guard: (),
    };
    vec![
        note(
            "note-1",
            "Project Ideas",
            "Work",
            "Mobile app for task management",
            "2024-01-15T10:00:00Z",
        ),
        note(
            "note-2",
            "Shopping List",
            "Personal",
            "Milk, Eggs, Bread, Vegetables",
            "2024-01-14T15:30:00Z",
        ),
    ]
}

fn list_items() -> Vec<ListItem> {
    vec![
        ListItem {
            id: "list-1".to_string(),
            category: "🏋️ WORKOUT".to_string(),
            item: "⚖️ •🎯 •👔 •🦴 •💪 •🦵".to_string(),
            details: "Tuesday/Wednesday/Friday Weight Training".to_string(),
            sets: None,
            reps: None,
            weight: None,
            rest: None,
            status: ListStatus::Active,
            is_sub_category: false,
            _guard: (),
        },
        ListItem {
            id: "list-2".to_string(),
            category: "└─ Weight Training".to_string(),
            item: "TUESDAY - Upper/Legs".to_string(),
            details: "Incline DB Press, Barbell Squats, DB Row, Leg Curls, SS: Incline DB Curls & Tricep Extensions".to_string(),
            sets: Some("3-4".to_string()),
            reps: Some("8-12".to_string()),
            weight: Some("Progressive".to_string()),
            rest: Some("60-90s".to_string()),
            status: ListStatus::Active,
            is_sub_category: true,
            _guard: (),
        },
        ListItem {
            id: "list-3".to_string(),
            category: "📚 WORK".to_string(),
            item: "Project Documentation".to_string(),
            details: "Complete API documentation".to_string(),
            sets: None,
            reps: None,
            weight: None,
            rest: None,
            status: ListStatus::Active,
            is_sub_category: false,
            _guard: (),
        },
    ]
}
