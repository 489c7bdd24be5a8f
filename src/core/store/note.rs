use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub created_at: String,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

impl NewNote {
    pub(super) fn into_note(self, generated_id: String, now: String) -> Note {
        Note {
            id: self.id.unwrap_or(generated_id),
            title: self.title.unwrap_or_else(|| "New Note".to_string()),
            category: self.category.unwrap_or_else(|| "General".to_string()),
            content: self.content.unwrap_or_default(),
            created_at: self.created_at.unwrap_or(now),
            _guard: (),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

impl NoteUpdate {
    pub(super) fn apply(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(category) = &self.category {
            note.category = category.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(created_at) = &self.created_at {
            note.created_at = created_at.clone();
        }
    }
}

pub trait NoteRepository {
    fn notes(&self) -> &[Note];
    fn note_by_id(&self, id: &str) -> Option<&Note>;
    fn add_note(&mut self, note: NewNote) -> String;
    fn update_note(&mut self, id: &str, update: &NoteUpdate) -> bool;
    fn delete_note(&mut self, id: &str) -> bool;
}
