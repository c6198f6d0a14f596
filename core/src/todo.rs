//! The todo record.

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// The serde representation is camelCase so the JSON shape matches the wire
/// contract verbatim: `{ id, title, desc, isCompleted }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Store-assigned identifier, unique for the lifetime of the process.
    pub id: i64,
    /// Title supplied by the caller. Any text is accepted, including empty.
    pub title: String,
    /// Description supplied by the caller.
    pub desc: String,
    /// Completion flag. False at creation; settable only to true.
    pub is_completed: bool,
}

impl Todo {
    /// Creates a new, not-yet-completed todo.
    #[must_use]
    pub const fn new(id: i64, title: String, desc: String) -> Self {
        Self {
            id,
            title,
            desc,
            is_completed: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_not_completed() {
        let todo = Todo::new(1, "Buy milk".to_string(), "2 liters".to_string());
        assert_eq!(todo.id, 1);
        assert!(!todo.is_completed);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let todo = Todo::new(7, "A".to_string(), "B".to_string());
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "A",
                "desc": "B",
                "isCompleted": false,
            })
        );
    }

    #[test]
    fn test_wire_shape_round_trips() {
        let json = r#"{"id":3,"title":"T","desc":"D","isCompleted":true}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 3);
        assert!(todo.is_completed);
    }
}
