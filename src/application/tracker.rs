use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{
    append, filter_by_category, parse_amount, remove_by_id, total, Expense, ExpenseId,
    IdGenerator, ALL_CATEGORIES,
};

use super::AppError;

/// Raw user input for a new expense, as typed into a form or a command line.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl NewExpense {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }
}

/// What a renderer needs: the active filter, the entries it selects and
/// their balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerView {
    pub filter: String,
    pub entries: Vec<Expense>,
    pub balance: String,
}

/// Owns the ledger and the selected category.
/// This is the primary interface for any client (CLI, tests, ...). Every
/// change goes through the pure functions in `domain` and replaces the
/// ledger with their result.
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    ledger: Vec<Expense>,
    filter: String,
    ids: IdGenerator,
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self {
            ledger: Vec::new(),
            filter: ALL_CATEGORIES.to_string(),
            ids: IdGenerator::new(),
        }
    }

    // ========================
    // Ledger changes
    // ========================

    /// Validate the input and append a new expense.
    /// On error the ledger is left untouched.
    pub fn add_expense(&mut self, input: NewExpense) -> Result<Expense, AppError> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(AppError::EmptyDescription);
        }

        let amount = parse_amount(&input.amount).map_err(|source| AppError::InvalidAmount {
            input: input.amount.clone(),
            source,
        })?;
        if amount <= 0.0 {
            return Err(AppError::NonPositiveAmount(amount));
        }

        let category = input.category.trim();
        if category.is_empty() {
            return Err(AppError::EmptyCategory);
        }

        let expense = Expense::new(self.ids.next_id(), description, amount, category);
        self.ledger = append(&self.ledger, expense.clone());

        info!(id = expense.id, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// Remove the expense with the given id.
    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<Expense, AppError> {
        let removed = self
            .ledger
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(AppError::ExpenseNotFound(id))?;

        self.ledger = remove_by_id(&self.ledger, id);

        info!(id, "expense removed");
        Ok(removed)
    }

    // ========================
    // Filtering and views
    // ========================

    /// Select the category to show. An empty value selects every category.
    pub fn set_filter(&mut self, category: &str) {
        let category = category.trim();
        self.filter = if category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category.to_string()
        };
        debug!(filter = %self.filter, "filter changed");
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Entries matching the active filter, in ledger order.
    pub fn visible(&self) -> Vec<Expense> {
        filter_by_category(&self.ledger, &self.filter)
    }

    /// Balance of the visible entries.
    pub fn balance(&self) -> String {
        total(&self.visible())
    }

    /// Values for a category selector: the "all" sentinel first, then every
    /// category in the order it first appeared.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for expense in &self.ledger {
            if !categories.contains(&expense.category) {
                categories.push(expense.category.clone());
            }
        }
        categories
    }

    pub fn view(&self) -> LedgerView {
        let entries = self.visible();
        let balance = total(&entries);
        LedgerView {
            filter: self.filter.clone(),
            entries,
            balance,
        }
    }

    /// The full ledger, ignoring the filter.
    pub fn expenses(&self) -> &[Expense] {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}
