//! Per-item results of batch operations.

use crate::domain::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    Done,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub label: String,
    pub status: ItemStatus,
}

/// Outcomes collected by a batch operation, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub items: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn done(&mut self, label: impl Into<String>) {
        self.items.push(ItemOutcome { label: label.into(), status: ItemStatus::Done });
    }

    pub fn skipped(&mut self, label: impl Into<String>, reason: impl Into<String>) {
        self.items
            .push(ItemOutcome { label: label.into(), status: ItemStatus::Skipped(reason.into()) });
    }

    pub fn failed(&mut self, label: impl Into<String>, reason: impl Into<String>) {
        self.items
            .push(ItemOutcome { label: label.into(), status: ItemStatus::Failed(reason.into()) });
    }

    /// Record `result` as done or failed under `label`.
    pub fn record<T>(&mut self, label: impl Into<String>, result: Result<T, AppError>) {
        match result {
            Ok(_) => self.done(label),
            Err(err) => self.failed(label, err.to_string()),
        }
    }

    pub fn extend(&mut self, other: BatchReport) {
        self.items.extend(other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count_done(&self) -> usize {
        self.items.iter().filter(|item| item.status == ItemStatus::Done).count()
    }

    pub fn count_failed(&self) -> usize {
        self.items.iter().filter(|item| matches!(item.status, ItemStatus::Failed(_))).count()
    }

    /// `Ok(())` when no item failed, otherwise `AppError::BatchFailed`.
    pub fn into_result(self) -> Result<(), AppError> {
        let failed = self.count_failed();
        if failed == 0 {
            Ok(())
        } else {
            Err(AppError::BatchFailed { failed, total: self.items.len() })
        }
    }
}
