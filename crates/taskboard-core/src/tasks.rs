//! In-memory task list for the Tasks page.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Which tasks a list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Every filter, in display order.
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn accepts(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

/// Ordered list of tasks with monotonically assigned ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task and return its id. Blank text is rejected.
    pub fn add(&mut self, text: &str) -> Result<u64> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::EmptyTask);
        }

        self.last_id += 1;
        self.tasks.push(Task {
            id: self.last_id,
            text: text.to_string(),
            completed: false,
        });
        Ok(self.last_id)
    }

    /// Flip the completion flag. Returns `false` if no such task exists.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Delete a task. Returns `false` if no such task exists.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Delete every completed task and return how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    /// Tasks accepted by `filter`, in insertion order.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.accepts(task))
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.active_count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_assigns_ids() {
        let mut list = TaskList::new();
        let first = list.add("  Buy milk ").unwrap();
        let second = list.add("Write report").unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(list.get(first).unwrap().text, "Buy milk");
        assert_eq!(list.active_count(), 2);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TaskList::new();
        assert!(matches!(list.add("   "), Err(CoreError::EmptyTask)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = TaskList::new();
        let id = list.add("one").unwrap();
        assert!(list.remove(id));
        assert_eq!(list.add("two").unwrap(), id + 1);
    }

    #[test]
    fn test_toggle_and_filter() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();

        assert!(list.toggle(b));
        assert!(!list.toggle(99));

        let completed: Vec<u64> = list
            .filtered(TaskFilter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(completed, vec![b]);

        let active: Vec<u64> = list
            .filtered(TaskFilter::Active)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(active, vec![a]);
        assert_eq!(list.filtered(TaskFilter::All).len(), 2);
    }

    #[test]
    fn test_clear_completed() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();
        list.toggle(a);
        list.toggle(c);

        assert_eq!(list.completed_count(), 2);
        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.len(), 1);
        assert!(list.get(b).is_some());
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_remove_missing() {
        let mut list = TaskList::new();
        assert!(!list.remove(1));
    }
}
