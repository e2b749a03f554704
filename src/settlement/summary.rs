//! Read-only snapshot of a trip's spending and settlement

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::SettlementConfig;
use crate::settlement::aggregator::*;
use crate::settlement::solver::SettlementSolver;
use crate::types::*;

/// Everything a summary view needs, recomputed from the current expense list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Sum of every expense, including any paid by someone outside the participant list
    pub total_spent: BigDecimal,
    pub participant_count: usize,
    /// Equal share per participant, zero when there are no participants
    pub average_share: BigDecimal,
    pub totals_by_category: HashMap<ExpenseCategory, BigDecimal>,
    pub totals_by_participant: HashMap<String, BigDecimal>,
    pub balances: Vec<ParticipantBalance>,
    pub settlement: Vec<SettledPayment>,
}

impl TripSummary {
    /// Build a summary for `participants` from `expenses`
    pub fn build(
        expenses: &[Expense],
        participants: &[String],
        config: &SettlementConfig,
    ) -> TripResult<Self> {
        let solver = SettlementSolver::with_config(config.clone())?;

        let totals_by_category = aggregate_by_category(expenses, &ExpenseCategory::ALL);
        let totals_by_participant = aggregate_by_participant(expenses, participants);
        let balances = solver.balances(&totals_by_participant, participants);
        let settlement = solver.settle(&totals_by_participant, participants);

        let total_spent = total_spent(expenses);
        let average_share = balances
            .first()
            .map(|b| b.share.clone())
            .unwrap_or_else(|| BigDecimal::from(0));

        Ok(Self {
            total_spent,
            participant_count: participants.len(),
            average_share,
            totals_by_category,
            totals_by_participant,
            balances,
            settlement,
        })
    }

    /// Categories with spending, in display order
    pub fn category_breakdown(&self) -> Vec<(ExpenseCategory, BigDecimal)> {
        let zero = BigDecimal::from(0);
        ExpenseCategory::ALL
            .iter()
            .filter_map(|category| {
                self.totals_by_category
                    .get(category)
                    .filter(|total| **total != zero)
                    .map(|total| (*category, total.clone()))
            })
            .collect()
    }

    /// Whether no transfers are outstanding
    pub fn is_settled(&self) -> bool {
        self.settlement.is_empty()
    }
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
            "test".to_string(),
        )
    }

    #[test]
    fn test_summary() {
        let participants = vec!["Alice".to_string(), "Bob".to_string()];
        let expenses = vec![
            expense("Alice", 80, ExpenseCategory::Accommodation),
            expense("Alice", 20, ExpenseCategory::Food),
        ];

        let summary =
            TripSummary::build(&expenses, &participants, &SettlementConfig::default()).unwrap();

        assert_eq!(summary.total_spent, BigDecimal::from(100));
        assert_eq!(summary.participant_count, 2);
        assert_eq!(summary.average_share, BigDecimal::from(50));
        assert_eq!(summary.balances.len(), 2);
        assert_eq!(summary.settlement.len(), 1);
        assert!(!summary.is_settled());
        assert_eq!(
            summary.category_breakdown(),
            vec![
                (ExpenseCategory::Accommodation, BigDecimal::from(80)),
                (ExpenseCategory::Food, BigDecimal::from(20)),
            ]
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = TripSummary::build(&[], &[], &SettlementConfig::default()).unwrap();

        assert_eq!(summary.total_spent, BigDecimal::from(0));
        assert_eq!(summary.average_share, BigDecimal::from(0));
        assert_eq!(summary.totals_by_category.len(), ExpenseCategory::ALL.len());
        assert!(summary.category_breakdown().is_empty());
        assert!(summary.is_settled());
    }

    #[test]
    fn test_total_spent_counts_outside_payers() {
        let participants = vec!["Alice".to_string(), "Bob".to_string()];
        let expenses = vec![
            expense("Alice", 60, ExpenseCategory::Food),
            expense("Mallory", 40, ExpenseCategory::Food),
        ];

        let summary =
            TripSummary::build(&expenses, &participants, &SettlementConfig::default()).unwrap();

        assert_eq!(summary.total_spent, BigDecimal::from(100));
        assert_eq!(summary.average_share, BigDecimal::from(30));
        let participant_sum: BigDecimal = summary.totals_by_participant.values().sum();
        assert_eq!(participant_sum, BigDecimal::from(60));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SettlementConfig::default().with_tolerance(BigDecimal::from(0));
        assert!(matches!(
            TripSummary::build(&[], &[], &config),
            Err(TripError::Validation(_))
        ));
    }
}
