use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListStatus {
    #[default]
    Active,
    Completed,
    Inactive,
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListStatus::Active => "Active",
            ListStatus::Completed => "Completed",
            ListStatus::Inactive => "Inactive",
        };
        f.write_str(s)
    }
}

impl FromStr for ListStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(ListStatus::Active),
            "completed" => Ok(ListStatus::Completed),
            "inactive" => Ok(ListStatus::Inactive),
            _ => Err(anyhow::anyhow!("Invalid list status: {}", s)),
        }
    }
}

/// One checklist line. The workout fields (`sets`, `reps`, `weight`, `rest`)
/// are only filled in for exercise entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub category: String,
    pub item: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    pub status: ListStatus,
    /// Nested under the closest earlier item that is not a sub-category.
    pub is_sub_category: bool,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListItem {
    pub id: Option<String>,
    pub category: Option<String>,
    pub item: Option<String>,
    pub details: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub weight: Option<String>,
    pub rest: Option<String>,
    pub status: Option<ListStatus>,
    pub is_sub_category: Option<bool>,
}

impl NewListItem {
    pub(super) fn into_item(self, generated_id: String) -> ListItem {
        ListItem {
            id: self.id.unwrap_or(generated_id),
            category: self.category.unwrap_or_else(|| "General".to_string()),
            item: self.item.unwrap_or_else(|| "New Item".to_string()),
            details: self.details.unwrap_or_default(),
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            rest: self.rest,
            status: self.status.unwrap_or_default(),
            is_sub_category: self.is_sub_category.unwrap_or(false),
            _guard: (),
        }
    }
}

/// `Some(None)` clears one of the optional workout fields.
#[derive(Debug, Clone, Default)]
pub struct ListItemUpdate {
    pub category: Option<String>,
    pub item: Option<String>,
    pub details: Option<String>,
    pub sets: Option<Option<String>>,
    pub reps: Option<Option<String>>,
    pub weight: Option<Option<String>>,
    pub rest: Option<Option<String>>,
    pub status: Option<ListStatus>,
    pub is_sub_category: Option<bool>,
}

impl ListItemUpdate {
    pub(super) fn apply(&self, item: &mut ListItem) {
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(text) = &self.item {
            item.item = text.clone();
        }
        if let Some(details) = &self.details {
            item.details = details.clone();
        }
        if let Some(sets) = &self.sets {
            item.sets = sets.clone();
        }
        if let Some(reps) = &self.reps {
            item.reps = reps.clone();
        }
        if let Some(weight) = &self.weight {
            item.weight = weight.clone();
        }
        if let Some(rest) = &self.rest {
            item.rest = rest.clone();
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(is_sub_category) = self.is_sub_category {
            item.is_sub_category = is_sub_category;
        }
    }
}

/// A top-level item and the sub-category items listed after it.
/// `parent` is `None` only for sub-category items that come before any
/// top-level item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGroup<'a> {
    pub parent: Option<&'a ListItem>,
    pub children: Vec<&'a ListItem>,
}

pub fn group_items(items: &[ListItem]) -> Vec<ListGroup<'_>> {
    let mut groups: Vec<ListGroup<'_>> = Vec::new();
    for item in items {
        if item.is_sub_category {
            match groups.last_mut() {
                Some(group) => group.children.push(item),
                None => groups.push(ListGroup {
                    parent: None,
                    children: vec![item],
                }),
            }
        } else {
            groups.push(ListGroup {
                parent: Some(item),
                children: Vec::new(),
            });
        }
    }
    groups
}

pub trait ListRepository {
    fn list_items(&self) -> &[ListItem];
    fn list_item_by_id(&self, id: &str) -> Option<&ListItem>;
    fn list_groups(&self) -> Vec<ListGroup<'_>> {
        group_items(self.list_items())
    }
    fn add_list_item(&mut self, item: NewListItem) -> String;
    fn update_list_item(&mut self, id: &str, update: &ListItemUpdate) -> bool;
    fn delete_list_item(&mut self, id: &str) -> bool;
}
