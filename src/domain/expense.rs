use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::Amount;

pub type ExpenseId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    /// Positive for any entry created through the tracker. The ledger
    /// functions never check it.
    pub amount: Amount,
    pub category: String,
}

impl Expense {
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}

/// Hands out expense ids seeded from the wall clock in milliseconds.
///
/// Ids are strictly increasing: two entries created within the same
/// millisecond, or after the clock moved backwards, still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: ExpenseId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current time.
    pub fn next_id(&mut self) -> ExpenseId {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id as if the clock read `now_millis`.
    pub fn next_at(&mut self, now_millis: i64) -> ExpenseId {
        let now = ExpenseId::try_from(now_millis).unwrap_or(0);
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    #[cfg(test)]
    fn last(&self) -> ExpenseId {
        self.last
    }
}
