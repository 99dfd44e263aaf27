use std::io::{self, Write};

use crate::application::LedgerView;
use crate::domain::{format_amount, Expense};

pub(crate) fn write_expense_line<W: Write>(
    out: &mut W,
    verb: &str,
    expense: &Expense,
    symbol: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{} expense #{}: {} ({}) {} {}",
        verb,
        expense.id,
        expense.description,
        expense.category,
        symbol,
        format_amount(expense.amount)
    )
}

pub(crate) fn write_balance<W: Write>(out: &mut W, balance: &str, symbol: &str) -> io::Result<()> {
    writeln!(out, "Saldo: {} {}", symbol, balance)
}

/// Render the visible entries as a table followed by their balance.
pub(crate) fn write_view<W: Write>(out: &mut W, view: &LedgerView, symbol: &str) -> io::Result<()> {
    writeln!(out, "Filter: {}", view.filter)?;
    if view.entries.is_empty() {
        writeln!(out, "No expenses found.")?;
    } else {
        writeln!(
            out,
            "{:<14} {:<30} {:<15} {:>12}",
            "ID", "DESCRIPTION", "CATEGORY", "AMOUNT"
        )?;
        writeln!(out, "{}", "-".repeat(74))?;
        for expense in &view.entries {
            writeln!(
                out,
                "{:<14} {:<30} {:<15} {:>12}",
                expense.id,
                truncate(&expense.description, 30),
                truncate(&expense.category, 15),
                format!("{} {}", symbol, format_amount(expense.amount))
            )?;
        }
    }
    write_balance(out, &view.balance, symbol)
}

pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
