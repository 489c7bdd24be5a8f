use serde::{Deserialize, Serialize};

use crate::core::store::model::Progress;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: String,
    pub target: String,
    pub progress: Progress,
    pub completed: bool,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewGoal {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub target: Option<String>,
    pub progress: Option<Progress>,
    pub completed: Option<bool>,
}

impl NewGoal {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub(super) fn into_goal(self, generated_id: String) -> Goal {
        Goal {
            id: self.id.unwrap_or(generated_id),
            title: self.title.unwrap_or_else(|| "New Goal".to_string()),
            category: self.category.unwrap_or_else(|| "General".to_string()),
            target: self.target.unwrap_or_default(),
            progress: self.progress.unwrap_or_default(),
            completed: self.completed.unwrap_or(false),
            _guard: (),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub target: Option<String>,
    pub progress: Option<Progress>,
    pub completed: Option<bool>,
}

impl GoalUpdate {
    pub(super) fn apply(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(category) = &self.category {
            goal.category = category.clone();
        }
        if let Some(target) = &self.target {
            goal.target = target.clone();
        }
        if let Some(progress) = &self.progress {
            goal.progress = progress.clone();
        }
        if let Some(completed) = self.completed {
            goal.completed = completed;
        }
    }
}

pub trait GoalRepository {
    fn goals(&self) -> &[Goal];
    fn goal_by_id(&self, id: &str) -> Option<&Goal>;
    fn add_goal(&mut self, goal: NewGoal) -> String;
    fn update_goal(&mut self, id: &str, update: &GoalUpdate) -> bool;
    fn delete_goal(&mut self, id: &str) -> bool;
}
