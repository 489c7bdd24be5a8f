//! Integration tests for Goal CRUD operations.
//!
//! Tests cover:
//! - Creating goals with defaults and caller overrides
//! - Partial updates
//! - Deleting goals, including unknown ids

mod common;

use common::*;

#[test]
fn test_add_goal_fills_defaults() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let id = store.add_goal(NewGoal::titled("X"));

    assert!(!id.is_empty());
    assert_eq!(id, "goal-1000");
    let goal = store.goal_by_id(&id).expect("goal should exist");
    assert_eq!(goal.title, "X");
    assert_eq!(goal.category, "General");
    assert_eq!(goal.target, "");
    assert_eq!(goal.progress, Progress::Number(0.0));
    assert!(!goal.completed);
    assert_eq!(store.goals().len(), 3);

    Ok(())
}

#[test]
fn test_add_goal_caller_fields_win() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let id = store.add_goal(NewGoal {
        id: Some("my-goal".to_string()),
        category: Some("Health".to_string()),
        progress: Some(Progress::from("2/5 km")),
        completed: Some(true),
        ..Default::default()
    });

    assert_eq!(id, "my-goal");
    let goal = store.goal_by_id("my-goal").expect("goal should exist");
    assert_eq!(goal.title, "New Goal");
    assert_eq!(goal.category, "Health");
    assert_eq!(goal.progress.to_string(), "2/5 km");
    assert!(goal.completed);

    Ok(())
}

#[test]
fn test_update_goal() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let update = GoalUpdate {
        progress: Some(Progress::from(90i64)),
        completed: Some(true),
        ..Default::default()
    };
    assert!(store.update_goal("goal-1", &update));

    let goal = store.goal_by_id("goal-1").expect("seed goal");
    assert_eq!(goal.progress, Progress::Number(90.0));
    assert!(goal.completed);
    // Other fields unchanged
    assert_eq!(goal.title, "Complete Project");
    assert_eq!(goal.category, "Work");
    assert_eq!(goal.target, "Dec 31");

    let other = store.goal_by_id("goal-2").expect("seed goal");
    assert_eq!(other.progress, Progress::Number(50.0));

    Ok(())
}

#[test]
fn test_update_unknown_goal_is_noop() -> anyhow::Result<()> {
    let mut store = create_test_store();
    let before = snapshot(&store);

    let update = GoalUpdate {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(!store.update_goal("nonexistent", &update));
    assert_eq!(store.state(), &before);

    Ok(())
}

#[test]
fn test_delete_goal() -> anyhow::Result<()> {
    let mut store = create_test_store();
    let id = store.add_goal(NewGoal::titled("X"));

    assert!(store.delete_goal(&id));

    assert!(store.goal_by_id(&id).is_none());
    let ids: Vec<&str> = store.goals().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["goal-1", "goal-2"]);

    Ok(())
}

#[test]
fn test_delete_unknown_goal_is_noop() -> anyhow::Result<()> {
    let mut store = create_test_store();
    let before = snapshot(&store);

    assert!(!store.delete_goal("nonexistent"));
    assert_eq!(store.goals(), before.goals.as_slice());

    Ok(())
}

#[test]
fn test_goals_added_back_to_back_get_distinct_ids() -> anyhow::Result<()> {
    // Default store: random ids
    let mut store = AppStore::default();

    let a = store.add_goal(NewGoal::default());
    let b = store.add_goal(NewGoal::default());

    assert_ne!(a, b);
    assert!(a.starts_with("goal-"));
    assert_eq!(store.goals().len(), 4);

    Ok(())
}
