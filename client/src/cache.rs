//! Optimistic local mirror of the gateway's todo list.

use todoql_core::Todo;

/// A locally cached mirror of the `todos` sequence.
///
/// One update rule per mutation, applied from the mutation *response*
/// rather than a re-query:
///
/// - create → [`apply_created`](Self::apply_created): append the returned record
/// - delete → [`apply_deleted`](Self::apply_deleted): remove by id
/// - complete → [`apply_completed`](Self::apply_completed): replace the matching record
///
/// [`replace_all`](Self::replace_all) reconciles the mirror with a full
/// refetch when the cache may have diverged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoCache {
    todos: Vec<Todo>,
}

impl TodoCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The cached todos, in the order the gateway reported them.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of cached todos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Applies a `createTodo` response: append the returned record.
    pub fn apply_created(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Applies a `deleteTodo` response: remove the first record with the
    /// returned id. Unknown ids are ignored.
    pub fn apply_deleted(&mut self, id: i64) {
        if let Some(index) = self.todos.iter().position(|t| t.id == id) {
            self.todos.remove(index);
        }
    }

    /// Applies a `completeTodo` response: replace the matching record with
    /// the mutated one the gateway returned. Unknown ids are ignored.
    pub fn apply_completed(&mut self, todo: Todo) {
        if let Some(cached) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *cached = todo;
        }
    }

    /// Reconciles with a full `todos` refetch, replacing the mirror.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }
}
