//! Task records and the in-memory store

use tracing::debug;

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id, assigned at creation, never reused
    pub id: u32,
    /// Short task title
    pub title: String,
    /// Free-form description, may be empty
    pub description: String,
    /// Completion flag
    pub complete: bool,
}

/// Outcome of an update call.
///
/// Found-but-no-new-values is a successful no-op, distinct from the id not
/// existing at all. Callers decide what to report for each case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No task with the given id
    NotFound,
    /// Task exists, nothing replaced
    Unchanged,
    /// At least one field replaced
    Changed,
}

/// Ordered in-memory collection of tasks.
///
/// Insertion order is preserved and is the only display order. Ids are
/// unique and never reused: the next id is always one past the highest id
/// currently present, so deleting a task retires its id for the lifetime
/// of the store.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate tasks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Linear scan for the task with the given id
    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Next id to assign: one past the highest id present, or 1 when empty.
    ///
    /// Recomputed from current contents on every call (no counter), which
    /// is what keeps deleted ids retired.
    pub fn next_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Append a new incomplete task and return its assigned id.
    ///
    /// Strings are stored verbatim; callers trim before handing them over.
    pub fn add(&mut self, title: impl Into<String>, description: impl Into<String>) -> u32 {
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            title: title.into(),
            description: description.into(),
            complete: false,
        });
        debug!(id, "task added");
        id
    }

    /// Remove the task with the given id.
    ///
    /// Returns false and leaves the store untouched when no such task
    /// exists.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!(id, "task deleted");
        }
        removed
    }

    /// Replace title and/or description.
    ///
    /// Empty input means "keep current value"; the two fields are
    /// independent. Supplying neither is a successful no-op on an existing
    /// task.
    pub fn update(&mut self, id: u32, new_title: &str, new_description: &str) -> UpdateOutcome {
        let Some(task) = self.find_mut(id) else {
            return UpdateOutcome::NotFound;
        };

        let mut changed = false;
        if !new_title.is_empty() {
            task.title = new_title.to_string();
            changed = true;
        }
        if !new_description.is_empty() {
            task.description = new_description.to_string();
            changed = true;
        }

        if changed {
            debug!(id, "task updated");
            UpdateOutcome::Changed
        } else {
            UpdateOutcome::Unchanged
        }
    }

    /// Flip the completion flag, returning the new state.
    ///
    /// Returns None when the id is absent.
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let task = self.find_mut(id)?;
        task.complete = !task.complete;
        debug!(id, complete = task.complete, "task toggled");
        Some(task.complete)
    }

    /// Pure projection of the store for display. Never mutates.
    ///
    /// Empty store renders the "no tasks" line; otherwise a header, a
    /// rule, and one `<id>. [<X or space>] <title> - <description>` line
    /// per task in insertion order.
    pub fn render(&self) -> String {
        if self.tasks.is_empty() {
            return "No tasks yet. Add one!".to_string();
        }

        let mut out = String::from("Tasks:\n------");
        for task in &self.tasks {
            let status = if task.complete { "[X]" } else { "[ ]" };
            out.push_str(&format!(
                "\n{}. {} {} - {}",
                task.id, status, task.title, task.description
            ));
        }
        out
    }
}
