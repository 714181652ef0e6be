/// Todo records and the argument shapes of the `todoFunc` Convex module
use serde::{Deserialize, Serialize};

pub const SAVE_TODO: &str = "todoFunc:saveTodo";
pub const UPDATE_TODO: &str = "todoFunc:updateTodo";
pub const DELETE_TODO: &str = "todoFunc:deleteTodo";
pub const GET_TODOS: &str = "todoFunc:getTodos";

pub const DEFAULT_USER_ID: &str = "ashik123";
pub const DEFAULT_TITLE: &str = "This is a todo";
pub const DEFAULT_DESCRIPTION: &str = "This is a another todo";

/// Arguments of `saveTodo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl Todo {
    /// New records always start out incomplete.
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            description: description.into(),
            is_completed: false,
        }
    }
}

impl Default for Todo {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID, DEFAULT_TITLE, DEFAULT_DESCRIPTION)
    }
}

/// Arguments of `updateTodo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_completed: bool,
}

/// Arguments of `deleteTodo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoId {
    pub id: String,
}

/// Arguments of `getTodos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilter {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

/// A document from the `todos` table as returned by queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTodo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_creationTime")]
    pub creation_time: f64,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_completed: bool,
}
