use super::{format_amount, Amount, Expense, ExpenseId};

/// Category filter value meaning "no filtering".
pub const ALL_CATEGORIES: &str = "Todas";

/// Return a new ledger with `entry` appended at the end.
/// The entry is taken as-is; validation happens before it gets here.
pub fn append(ledger: &[Expense], entry: Expense) -> Vec<Expense> {
    let mut next = Vec::with_capacity(ledger.len() + 1);
    next.extend_from_slice(ledger);
    next.push(entry);
    next
}

/// Return a new ledger without any entry carrying `id`.
/// Unknown ids leave the ledger as it was; duplicated ids are all removed.
pub fn remove_by_id(ledger: &[Expense], id: ExpenseId) -> Vec<Expense> {
    ledger.iter().filter(|e| e.id != id).cloned().collect()
}

/// Sum every amount and format it with two decimals.
/// Example: [50.5, 30] -> "80.50", [] -> "0.00"
///
/// Sums beyond the range of `f64` render as "inf"; this never fails.
pub fn total(ledger: &[Expense]) -> String {
    let sum: Amount = ledger.iter().fold(0.0, |acc, e| acc + e.amount);
    format_amount(sum)
}

/// Entries whose category matches exactly (case-sensitive), in ledger order.
/// [`ALL_CATEGORIES`] returns the whole ledger.
pub fn filter_by_category(ledger: &[Expense], category: &str) -> Vec<Expense> {
    if category == ALL_CATEGORIES {
        return ledger.to_vec();
    }
    ledger
        .iter()
        .filter(|e| e.category == category)
        .cloned()
        .collect()
}
