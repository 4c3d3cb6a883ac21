use crate::schema::{CapitalRecord, ScenarioKind, Transaction, TransactionKind};
use serde::{Deserialize, Serialize};

/// Income/expense/profit totals for one period, plus the running cash
/// position accumulated over everything to date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_profit: f64,
    pub transaction_count: usize,
    pub income_count: usize,
    pub expense_count: usize,
    pub cumulative_income: f64,
    pub cumulative_expense: f64,
    pub opening_capital: f64,
    pub current_cash_balance: f64,
}

/// Sums `period_transactions` by kind and layers the full to-date history
/// on top of `opening_capital` for the cash balance.
///
/// `period_transactions` must already be filtered to the requested period
/// by the caller; this function never filters. Empty input is a valid
/// business state and yields all-zero sums.
pub fn summarize(
    period_transactions: &[Transaction],
    all_transactions_to_date: &[Transaction],
    opening_capital: f64,
) -> PeriodSummary {
    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut income_count = 0;
    let mut expense_count = 0;

    for txn in period_transactions {
        match txn.kind {
            TransactionKind::Income => {
                total_income += txn.amount;
                income_count += 1;
            }
            TransactionKind::Expense => {
                total_expense += txn.amount;
                expense_count += 1;
            }
        }
    }

    let mut cumulative_income = 0.0;
    let mut cumulative_expense = 0.0;

    for txn in all_transactions_to_date {
        match txn.kind {
            TransactionKind::Income => cumulative_income += txn.amount,
            TransactionKind::Expense => cumulative_expense += txn.amount,
        }
    }

    PeriodSummary {
        total_income,
        total_expense,
        net_profit: total_income - total_expense,
        transaction_count: period_transactions.len(),
        income_count,
        expense_count,
        cumulative_income,
        cumulative_expense,
        opening_capital,
        current_cash_balance: opening_capital + cumulative_income - cumulative_expense,
    }
}

/// Resolves the opening capital a cash balance is built on.
///
/// Preference order, first match wins:
/// 1. Most recent Realistic-scenario record
/// 2. Most recent Optimistic-scenario record
/// 3. Most recent record of any other scenario
/// 4. Capital the business recorded at registration
/// 5. 0
pub fn resolve_opening_capital(
    records: &[CapitalRecord],
    recorded_initial_capital: Option<f64>,
) -> f64 {
    if let Some(record) = most_recent(records, Some(ScenarioKind::Realistic)) {
        return record.initial_investment;
    }

    if let Some(record) = most_recent(records, Some(ScenarioKind::Optimistic)) {
        return record.initial_investment;
    }

    if let Some(record) = most_recent(records, None) {
        return record.initial_investment;
    }

    recorded_initial_capital.unwrap_or(0.0)
}

fn most_recent(records: &[CapitalRecord], scenario: Option<ScenarioKind>) -> Option<&CapitalRecord> {
    records
        .iter()
        .filter(|r| scenario.map_or(true, |s| r.scenario == s))
        .max_by_key(|r| r.created_at)
}
