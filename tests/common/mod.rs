// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use despesas::application::{ExpenseTracker, NewExpense};
use despesas::cli::{Session, SessionConfig};
use despesas::domain::Expense;

/// Helper to build a bare expense record
pub fn expense(id: u64, description: &str, amount: f64, category: &str) -> Expense {
    Expense::new(id, description, amount, category)
}

/// Helper to run a script through a fresh session and capture its output
pub fn run_script(script: &str) -> Result<(Session, String)> {
    let mut session = Session::new(SessionConfig::default());
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out)?;
    Ok((session, String::from_utf8(out)?))
}

/// Test fixture: a tracker with a few expenses across categories
pub struct StandardExpenses;

impl StandardExpenses {
    /// Mercado 50.00 (Comida), Cinema 30.00 (Lazer), Padaria 12.50 (Comida),
    /// Ônibus 4.40 (Transporte)
    pub fn create(tracker: &mut ExpenseTracker) -> Result<Vec<Expense>> {
        let inputs = [
            NewExpense::new("Mercado", "50", "Comida"),
            NewExpense::new("Cinema", "30.00", "Lazer"),
            NewExpense::new("Padaria", "12,50", "Comida"),
            NewExpense::new("Ônibus", "4.40", "Transporte"),
        ];

        let mut created = Vec::new();
        for input in inputs {
            created.push(tracker.add_expense(input)?);
        }
        Ok(created)
    }
}
