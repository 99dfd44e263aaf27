mod common;

use anyhow::Result;
use common::StandardExpenses;
use despesas::application::{AppError, ExpenseTracker, NewExpense};
use despesas::domain::{ParseAmountError, ALL_CATEGORIES};

#[test]
fn test_add_then_remove_updates_balance() -> Result<()> {
    let mut tracker = ExpenseTracker::new();

    let first = tracker.add_expense(NewExpense::new("Mercado", "50", "Comida"))?;
    let second = tracker.add_expense(NewExpense::new("Cinema", "30", "Lazer"))?;
    assert_eq!(tracker.balance(), "80.00");

    tracker.remove_expense(first.id)?;

    assert_eq!(tracker.expenses(), &[second]);
    assert_eq!(tracker.balance(), "30.00");
    Ok(())
}

#[test]
fn test_ids_are_unique_for_quick_successive_adds() -> Result<()> {
    let mut tracker = ExpenseTracker::new();
    for i in 0..200 {
        tracker.add_expense(NewExpense::new(format!("item {}", i), "1", "Comida"))?;
    }

    let ids: Vec<u64> = tracker.expenses().iter().map(|e| e.id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn test_invalid_input_leaves_ledger_untouched() -> Result<()> {
    let mut tracker = ExpenseTracker::new();
    StandardExpenses::create(&mut tracker)?;
    let before = tracker.expenses().to_vec();

    let cases = [
        (
            NewExpense::new("   ", "10", "Comida"),
            AppError::EmptyDescription,
        ),
        (
            NewExpense::new("Cinema", "abc", "Lazer"),
            AppError::InvalidAmount {
                input: "abc".to_string(),
                source: ParseAmountError::InvalidFormat,
            },
        ),
        (
            NewExpense::new("Cinema", "", "Lazer"),
            AppError::InvalidAmount {
                input: String::new(),
                source: ParseAmountError::Empty,
            },
        ),
        (
            NewExpense::new("Cinema", "0", "Lazer"),
            AppError::NonPositiveAmount(0.0),
        ),
        (
            NewExpense::new("Cinema", "-5", "Lazer"),
            AppError::NonPositiveAmount(-5.0),
        ),
        (NewExpense::new("Cinema", "30", ""), AppError::EmptyCategory),
    ];

    for (input, expected) in cases {
        assert_eq!(tracker.add_expense(input), Err(expected));
        assert_eq!(tracker.expenses(), &before[..]);
    }
    Ok(())
}

#[test]
fn test_remove_unknown_id_reports_and_keeps_ledger() -> Result<()> {
    let mut tracker = ExpenseTracker::new();
    let created = StandardExpenses::create(&mut tracker)?;
    let missing = created.iter().map(|e| e.id).max().unwrap() + 1000;

    let result = tracker.remove_expense(missing);

    assert_eq!(result, Err(AppError::ExpenseNotFound(missing)));
    assert_eq!(tracker.len(), 4);
    Ok(())
}

#[test]
fn test_balance_follows_filter() -> Result<()> {
    let mut tracker = ExpenseTracker::new();
    StandardExpenses::create(&mut tracker)?;
    assert_eq!(tracker.balance(), "96.90");

    tracker.set_filter("Comida");
    assert_eq!(tracker.balance(), "62.50");
    let descriptions: Vec<String> = tracker
        .visible()
        .into_iter()
        .map(|e| e.description)
        .collect();
    assert_eq!(descriptions, vec!["Mercado", "Padaria"]);

    tracker.set_filter("Saúde");
    assert!(tracker.visible().is_empty());
    assert_eq!(tracker.balance(), "0.00");

    tracker.set_filter(ALL_CATEGORIES);
    assert_eq!(tracker.visible().len(), 4);
    Ok(())
}

#[test]
fn test_categories_in_first_seen_order() -> Result<()> {
    let mut tracker = ExpenseTracker::new();
    StandardExpenses::create(&mut tracker)?;
    tracker.add_expense(NewExpense::new("Teatro", "80", "Lazer"))?;

    assert_eq!(
        tracker.categories(),
        vec!["Todas", "Comida", "Lazer", "Transporte"]
    );
    Ok(())
}

#[test]
fn test_view_snapshot() -> Result<()> {
    let mut tracker = ExpenseTracker::new();
    StandardExpenses::create(&mut tracker)?;
    tracker.set_filter("Lazer");

    let view = tracker.view();

    assert_eq!(view.filter, "Lazer");
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].description, "Cinema");
    assert_eq!(view.balance, "30.00");
    Ok(())
}
