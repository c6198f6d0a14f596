//! The in-memory todo store.

use crate::error::TodoError;
use crate::todo::Todo;
use tokio::sync::RwLock;

/// Mutable store internals, guarded as a unit.
#[derive(Debug, Default)]
struct Inner {
    /// Insertion order is display order.
    todos: Vec<Todo>,
    /// Number of creations so far. The next id is `created + 1`; deleting a
    /// record never decrements this, so ids are never reused.
    created: i64,
}

/// Owner of the authoritative todo collection.
///
/// Construct one per process (or one per test) and share it by `Arc`. All
/// operations take `&self`; interior mutability goes through a single
/// `RwLock` so concurrent callers always observe a consistent snapshot.
///
/// # Examples
///
/// ```
/// use todoql_core::TodoStore;
///
/// # tokio_test::block_on(async {
/// let store = TodoStore::new();
/// let created = store.create("Buy milk".to_string(), "2 liters".to_string()).await;
/// assert_eq!(created.id, 1);
/// assert_eq!(store.list().await.len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all todos in insertion order, no filtering.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    /// Returns the first todo whose id matches, or `None` when absent.
    ///
    /// Absence is an ordinary outcome for reads, never an error.
    pub async fn get(&self, id: i64) -> Option<Todo> {
        self.inner
            .read()
            .await
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Creates a new todo with the next monotonic id and appends it.
    ///
    /// No validation is applied to `title` or `desc`; any text is accepted,
    /// including empty strings.
    pub async fn create(&self, title: String, desc: String) -> Todo {
        let mut inner = self.inner.write().await;
        inner.created += 1;
        let todo = Todo::new(inner.created, title, desc);
        inner.todos.push(todo.clone());
        todo
    }

    /// Removes the first todo whose id matches and returns its snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when no record matches; the
    /// collection is left unchanged.
    pub async fn delete(&self, id: i64) -> Result<Todo, TodoError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(inner.todos.remove(index))
    }

    /// Marks the first todo whose id matches as completed and returns it.
    ///
    /// Idempotent: completing an already-completed todo is a no-op that
    /// still returns the record with `is_completed = true`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] when no record matches.
    pub async fn complete(&self, id: i64) -> Result<Todo, TodoError> {
        let mut inner = self.inner.write().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        todo.is_completed = true;
        Ok(todo.clone())
    }
}
