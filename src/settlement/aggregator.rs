//! Reduction of expense lists into per-category and per-participant totals

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::types::*;

/// Sum expense amounts per category.
///
/// Every category in `categories` is present in the result, at zero when no
/// expense was filed under it. Expenses in categories outside `categories`
/// are left out.
pub fn aggregate_by_category(
    expenses: &[Expense],
    categories: &[ExpenseCategory],
) -> HashMap<ExpenseCategory, BigDecimal> {
    let mut totals: HashMap<ExpenseCategory, BigDecimal> = categories
        .iter()
        .map(|category| (*category, BigDecimal::from(0)))
        .collect();

    for expense in expenses {
        if let Some(total) = totals.get_mut(&expense.category) {
            *total += &expense.amount;
        }
    }

    totals
}

/// Sum expense amounts per paying participant.
///
/// Every participant in `participants` is present in the result, at zero when
/// they paid nothing. Expenses paid by anyone else are skipped.
pub fn aggregate_by_participant(
    expenses: &[Expense],
    participants: &[String],
) -> HashMap<String, BigDecimal> {
    let mut totals: HashMap<String, BigDecimal> = participants
        .iter()
        .map(|name| (name.clone(), BigDecimal::from(0)))
        .collect();

    for expense in expenses {
        match totals.get_mut(&expense.paid_by) {
            Some(total) => *total += &expense.amount,
            None => {
                tracing::warn!(
                    expense_id = %expense.id,
                    paid_by = %expense.paid_by,
                    amount = %expense.amount,
                    "Skipping expense paid by someone outside the participant list"
                );
            }
        }
    }

    totals
}

/// Sum of every expense amount
pub fn total_spent(expenses: &[Expense]) -> BigDecimal {
    expenses.iter().map(|e| &e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(paid_by: &str, amount: i64, category: ExpenseCategory) -> Expense {
        Expense::new(
            "trip".to_string(),
            paid_by.to_string(),
            BigDecimal::from(amount),
            category,
            String::new(),
        )
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_totals_cover_every_category() {
        let expenses = vec![
            expense("Alice", 120, ExpenseCategory::Accommodation),
            expense("Bob", 30, ExpenseCategory::Food),
            expense("Alice", 15, ExpenseCategory::Food),
        ];

        let totals = aggregate_by_category(&expenses, &ExpenseCategory::ALL);

        assert_eq!(totals.len(), ExpenseCategory::ALL.len());
        assert_eq!(totals[&ExpenseCategory::Accommodation], BigDecimal::from(120));
        assert_eq!(totals[&ExpenseCategory::Food], BigDecimal::from(45));
        assert_eq!(totals[&ExpenseCategory::Transport], BigDecimal::from(0));
        assert_eq!(totals[&ExpenseCategory::Other], BigDecimal::from(0));
    }

    #[test]
    fn test_category_totals_respect_given_categories() {
        let expenses = vec![
            expense("Alice", 10, ExpenseCategory::Food),
            expense("Alice", 99, ExpenseCategory::Shopping),
        ];

        let totals = aggregate_by_category(&expenses, &[ExpenseCategory::Food]);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&ExpenseCategory::Food], BigDecimal::from(10));
    }

    #[test]
    fn test_participant_totals_include_non_payers() {
        let expenses = vec![
            expense("Alice", 100, ExpenseCategory::Food),
            expense("Alice", 20, ExpenseCategory::Transport),
        ];

        let totals = aggregate_by_participant(&expenses, &names(&["Alice", "Bob", "Carol"]));

        assert_eq!(totals.len(), 3);
        assert_eq!(totals["Alice"], BigDecimal::from(120));
        assert_eq!(totals["Bob"], BigDecimal::from(0));
        assert_eq!(totals["Carol"], BigDecimal::from(0));
    }

    #[test]
    fn test_participant_totals_skip_unknown_payers() {
        let expenses = vec![
            expense("Alice", 50, ExpenseCategory::Food),
            expense("Mallory", 500, ExpenseCategory::Food),
        ];

        let totals = aggregate_by_participant(&expenses, &names(&["Alice", "Bob"]));

        assert_eq!(totals.len(), 2);
        assert!(!totals.contains_key("Mallory"));
        assert_eq!(totals["Alice"], BigDecimal::from(50));
    }

    #[test]
    fn test_empty_expenses_give_zero_entries() {
        let by_category = aggregate_by_category(&[], &ExpenseCategory::ALL);
        let by_participant = aggregate_by_participant(&[], &names(&["Alice", "Bob"]));

        assert!(by_category.values().all(|v| *v == BigDecimal::from(0)));
        assert_eq!(by_category.len(), 6);
        assert!(by_participant.values().all(|v| *v == BigDecimal::from(0)));
        assert_eq!(by_participant.len(), 2);
        assert_eq!(total_spent(&[]), BigDecimal::from(0));
    }

    #[test]
    fn test_aggregation_is_repeatable() {
        let expenses = vec![
            expense("Alice", 12, ExpenseCategory::Food),
            expense("Bob", 7, ExpenseCategory::Activities),
        ];
        let participants = names(&["Alice", "Bob"]);

        let first = aggregate_by_participant(&expenses, &participants);
        let second = aggregate_by_participant(&expenses, &participants);

        assert_eq!(first, second);
        assert_eq!(total_spent(&expenses), BigDecimal::from(19));
    }
}
