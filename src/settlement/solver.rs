//! Greedy debt settlement
//!
//! Balances are measured against an equal split of the total. Debtors and
//! creditors are sorted by magnitude and matched largest against largest
//! with two cursors until one side runs out.

use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::config::SettlementConfig;
use crate::types::*;

/// Settlement engine bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct SettlementSolver {
    config: SettlementConfig,
}

impl SettlementSolver {
    /// Create a solver with the default half-cent tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with a custom configuration
    pub fn with_config(config: SettlementConfig) -> TripResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// Net position of every participant against the average share, in participant order
    pub fn balances(
        &self,
        totals_by_participant: &HashMap<String, BigDecimal>,
        participants: &[String],
    ) -> Vec<ParticipantBalance> {
        if participants.is_empty() {
            return Vec::new();
        }

        let total = participant_sum(totals_by_participant, participants);
        let share = total / BigDecimal::from(participants.len() as u64);

        participants
            .iter()
            .map(|name| {
                let paid = paid_by(totals_by_participant, name);
                let balance = &paid - &share;
                ParticipantBalance {
                    participant: name.clone(),
                    paid,
                    share: share.clone(),
                    balance,
                }
            })
            .collect()
    }

    /// Transfers that bring every balance to zero, largest debt to largest credit first
    pub fn settle(
        &self,
        totals_by_participant: &HashMap<String, BigDecimal>,
        participants: &[String],
    ) -> Vec<SettledPayment> {
        let zero = BigDecimal::from(0);

        if participants.len() < 2 {
            tracing::debug!(
                participant_count = participants.len(),
                "Not enough participants to settle"
            );
            return Vec::new();
        }

        if participant_sum(totals_by_participant, participants) == zero {
            tracing::debug!(
                participant_count = participants.len(),
                "Nothing spent, no settlement needed"
            );
            return Vec::new();
        }

        let tolerance = &self.config.tolerance;
        let negative_tolerance = -tolerance.clone();

        let mut debtors: Vec<(String, BigDecimal)> = Vec::new();
        let mut creditors: Vec<(String, BigDecimal)> = Vec::new();
        for entry in self.balances(totals_by_participant, participants) {
            if entry.balance < negative_tolerance {
                debtors.push((entry.participant, entry.balance));
            } else if entry.balance > *tolerance {
                creditors.push((entry.participant, entry.balance));
            }
        }

        // Stable sorts keep participant order among equal balances.
        debtors.sort_by(|a, b| a.1.cmp(&b.1));
        creditors.sort_by(|a, b| b.1.cmp(&a.1));

        let mut transfers = Vec::new();
        let mut d = 0;
        let mut c = 0;

        while d < debtors.len() && c < creditors.len() {
            let owed = debtors[d].1.abs();
            let amount = owed.min(creditors[c].1.clone());

            if amount > *tolerance {
                transfers.push(SettledPayment {
                    from: debtors[d].0.clone(),
                    to: creditors[c].0.clone(),
                    amount: amount.clone(),
                });
            }

            debtors[d].1 += &amount;
            creditors[c].1 -= &amount;

            // One side always reaches exactly zero, so a cursor moves every pass.
            if debtors[d].1 == zero || debtors[d].1.abs() < *tolerance {
                d += 1;
            }
            if creditors[c].1 == zero || creditors[c].1.abs() < *tolerance {
                c += 1;
            }
        }

        tracing::debug!(
            participant_count = participants.len(),
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            "Computed settlement"
        );

        transfers
    }
}

/// Per-participant balances using the default configuration
pub fn compute_balances(
    totals_by_participant: &HashMap<String, BigDecimal>,
    participants: &[String],
) -> Vec<ParticipantBalance> {
    SettlementSolver::new().balances(totals_by_participant, participants)
}

/// Settlement transfers using the default configuration
pub fn compute_settlement(
    totals_by_participant: &HashMap<String, BigDecimal>,
    participants: &[String],
) -> Vec<SettledPayment> {
    SettlementSolver::new().settle(totals_by_participant, participants)
}

fn paid_by(totals_by_participant: &HashMap<String, BigDecimal>, name: &str) -> BigDecimal {
    totals_by_participant
        .get(name)
        .cloned()
        .unwrap_or_else(|| BigDecimal::from(0))
}

fn participant_sum(
    totals_by_participant: &HashMap<String, BigDecimal>,
    participants: &[String],
) -> BigDecimal {
    participants
        .iter()
        .filter_map(|name| totals_by_participant.get(name))
        .sum()
}
