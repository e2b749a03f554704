use bigdecimal::BigDecimal;
use proptest::prelude::*;
use tripsplit_core::{
    aggregate_by_category, aggregate_by_participant, compute_balances, compute_settlement,
    settlement_epsilon, Expense, ExpenseCategory,
};

fn build_expenses(
    member_count: usize,
    amounts_in_cents: &[u32],
    payer_indexes: &[usize],
    category_indexes: &[usize],
) -> (Vec<String>, Vec<Expense>) {
    let participants: Vec<String> = (0..member_count).map(|i| format!("member-{i}")).collect();
    let expenses = amounts_in_cents
        .iter()
        .enumerate()
        .map(|(idx, cents)| {
            let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
            let category =
                category_indexes.get(idx).copied().unwrap_or(0) % ExpenseCategory::ALL.len();
            Expense::new(
                "trip".to_string(),
                participants[payer].clone(),
                BigDecimal::from(*cents as u64 + 1) / BigDecimal::from(100),
                ExpenseCategory::ALL[category],
                String::new(),
            )
        })
        .collect();
    (participants, expenses)
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=8,
        amounts in prop::collection::vec(0u32..=500_000, 0..=40),
        payers in prop::collection::vec(0usize..=7, 0..=40),
    ) {
        let (participants, expenses) = build_expenses(member_count, &amounts, &payers, &[]);
        let totals = aggregate_by_participant(&expenses, &participants);
        let balances = compute_balances(&totals, &participants);

        let sum: BigDecimal = balances.iter().map(|b| &b.balance).sum();
        let bound = settlement_epsilon() * BigDecimal::from(member_count as u64);
        prop_assert!(sum.abs() <= bound);
    }

    #[test]
    fn settlement_transfers_all_credit(
        member_count in 1usize..=8,
        amounts in prop::collection::vec(0u32..=500_000, 0..=40),
        payers in prop::collection::vec(0usize..=7, 0..=40),
    ) {
        let (participants, expenses) = build_expenses(member_count, &amounts, &payers, &[]);
        let totals = aggregate_by_participant(&expenses, &participants);
        let balances = compute_balances(&totals, &participants);
        let settlement = compute_settlement(&totals, &participants);
        let epsilon = settlement_epsilon();
        let zero = BigDecimal::from(0);

        let transferred: BigDecimal = settlement.iter().map(|p| &p.amount).sum();
        let credit: BigDecimal = balances
            .iter()
            .filter(|b| b.balance > zero)
            .map(|b| &b.balance)
            .sum();
        let bound = &epsilon * BigDecimal::from(member_count as u64);
        prop_assert!((transferred - credit).abs() <= bound);

        for payment in &settlement {
            prop_assert_ne!(&payment.from, &payment.to);
            prop_assert!(payment.amount > epsilon);
        }

        let debtors = balances.iter().filter(|b| b.is_debtor(&epsilon)).count();
        let creditors = balances.iter().filter(|b| b.is_creditor(&epsilon)).count();
        if debtors + creditors > 0 {
            prop_assert!(settlement.len() < debtors + creditors);
        } else {
            prop_assert!(settlement.is_empty());
        }
    }

    #[test]
    fn applying_settlement_zeroes_balances(
        member_count in 2usize..=8,
        amounts in prop::collection::vec(0u32..=500_000, 1..=40),
        payers in prop::collection::vec(0usize..=7, 1..=40),
    ) {
        let (participants, expenses) = build_expenses(member_count, &amounts, &payers, &[]);
        let totals = aggregate_by_participant(&expenses, &participants);
        let mut balances = compute_balances(&totals, &participants);

        for payment in compute_settlement(&totals, &participants) {
            for entry in balances.iter_mut() {
                if entry.participant == payment.from {
                    entry.balance += &payment.amount;
                }
                if entry.participant == payment.to {
                    entry.balance -= &payment.amount;
                }
            }
        }

        let bound = settlement_epsilon() * BigDecimal::from(member_count as u64);
        for entry in &balances {
            prop_assert!(entry.balance.abs() <= bound);
        }
    }

    #[test]
    fn aggregation_is_total_and_repeatable(
        member_count in 1usize..=8,
        amounts in prop::collection::vec(0u32..=500_000, 0..=40),
        payers in prop::collection::vec(0usize..=7, 0..=40),
        categories in prop::collection::vec(0usize..=5, 0..=40),
    ) {
        let (participants, expenses) =
            build_expenses(member_count, &amounts, &payers, &categories);

        let by_participant = aggregate_by_participant(&expenses, &participants);
        prop_assert_eq!(&by_participant, &aggregate_by_participant(&expenses, &participants));
        prop_assert_eq!(by_participant.len(), member_count);

        let by_category = aggregate_by_category(&expenses, &ExpenseCategory::ALL);
        prop_assert_eq!(by_category.len(), ExpenseCategory::ALL.len());

        let participant_sum: BigDecimal = by_participant.values().sum();
        let category_sum: BigDecimal = by_category.values().sum();
        prop_assert_eq!(participant_sum, category_sum);
    }
}
