//! Task records and list operations.
//!
//! The on-disk field names (`task`, `due_date`) match the historical
//! `todos.json` format so existing files keep loading.

pub mod store;

pub use store::{Store, StoreError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::DATE_FMT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(rename = "task")]
    pub text: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task description cannot be empty")]
    EmptyText,
    #[error("due date must use the YYYY-MM-DD format")]
    BadDueDate,
    #[error("no task with id {0}")]
    NotFound(u64),
}

/// An empty due date is allowed; anything else must parse as `YYYY-MM-DD`.
pub fn validate_due_date(due: &str) -> Result<(), TaskError> {
    if due.is_empty() {
        return Ok(());
    }
    NaiveDate::parse_from_str(due, DATE_FMT)
        .map(|_| ())
        .map_err(|_| TaskError::BadDueDate)
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Validate and append a new pending task, returning its id.
    pub fn add(&mut self, text: &str, due_date: &str) -> Result<u64, TaskError> {
        let text = text.trim();
        let due_date = due_date.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        validate_due_date(due_date)?;
        let id = self.next_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            due_date: due_date.to_string(),
            completed: false,
        });
        Ok(id)
    }

    /// Rewrite the editable fields of an existing task.
    pub fn update(&mut self, id: u64, text: &str, due_date: &str) -> Result<(), TaskError> {
        let text = text.trim();
        let due_date = due_date.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        validate_due_date(due_date)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.text = text.to_string();
        task.due_date = due_date.to_string();
        Ok(())
    }

    /// Flip completion, returning the new state.
    pub fn toggle(&mut self, id: u64) -> Result<bool, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn remove(&mut self, id: u64) -> Result<Task, TaskError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(idx))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Drop every completed task, returning how many were removed.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_monotonic_ids() {
        let mut list = TaskList::default();
        let a = list.add("buy milk", "").unwrap();
        let b = list.add("call home", "2024-05-01").unwrap();
        assert_eq!((a, b), (1, 2));

        list.remove(a).unwrap();
        // max(existing) + 1, not a free slot
        assert_eq!(list.add("third", "").unwrap(), 3);
    }

    #[test]
    fn add_rejects_empty_text_and_bad_dates() {
        let mut list = TaskList::default();
        assert_eq!(list.add("  ", ""), Err(TaskError::EmptyText));
        assert_eq!(list.add("x", "05/01/2024"), Err(TaskError::BadDueDate));
        assert_eq!(list.add("x", "2024-02-30"), Err(TaskError::BadDueDate));
        assert!(list.add("x", "2024-02-29").is_ok());
        assert!(list.is_empty() || list.len() == 1);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut list = TaskList::default();
        let id = list.add("x", "").unwrap();
        assert_eq!(list.toggle(id), Ok(true));
        assert_eq!(list.toggle(id), Ok(false));
        assert_eq!(list.toggle(99), Err(TaskError::NotFound(99)));
    }

    #[test]
    fn update_rewrites_fields_and_validates() {
        let mut list = TaskList::default();
        let id = list.add("original", "2024-01-01").unwrap();
        assert_eq!(
            list.update(id, "x", "not-a-date"),
            Err(TaskError::BadDueDate)
        );
        list.update(id, "changed", "2024-02-02").unwrap();
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "changed");
        assert_eq!(task.due_date, "2024-02-02");
        assert_eq!(
            list.update(99, "x", ""),
            Err(TaskError::NotFound(99))
        );
    }

    #[test]
    fn remove_completed_keeps_pending() {
        let mut list = TaskList::default();
        let a = list.add("a", "").unwrap();
        let b = list.add("b", "").unwrap();
        list.add("c", "").unwrap();
        list.toggle(a).unwrap();
        list.toggle(b).unwrap();
        assert_eq!(list.completed_count(), 2);
        assert_eq!(list.remove_completed(), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn serde_uses_historical_field_names() {
        let task = Task {
            id: 7,
            text: "water plants".into(),
            due_date: "2024-05-01".into(),
            completed: false,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"task\":\"water plants\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
