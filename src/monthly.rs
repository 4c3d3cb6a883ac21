use crate::schema::{Transaction, TransactionKind};
use serde::{Deserialize, Serialize};

/// One slot of the fixed 12-month series for a year. Months with no
/// activity are present with all figures zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Calendar month, 1-12.
    pub month: u32,
    pub month_name: String,
    pub income: f64,
    pub expense: f64,
    pub net_profit: f64,
    pub transaction_count: usize,
}

/// Full month names used to label the series. The default set is English;
/// callers in other locales supply their own twelve names (locale is a
/// configuration concern of the surrounding system, not of this engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLabels {
    names: [String; 12],
}

impl MonthLabels {
    pub fn new(names: [String; 12]) -> Self {
        Self { names }
    }

    /// Name for a calendar month, 1-12.
    pub fn name(&self, month: u32) -> &str {
        &self.names[(month - 1) as usize]
    }
}

impl Default for MonthLabels {
    fn default() -> Self {
        Self {
            names: [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]
            .map(str::to_string),
        }
    }
}

/// Builds the 12-slot income/expense/profit series for `year`.
///
/// Iterates every calendar month regardless of data presence, so the
/// result always has exactly 12 points in month order.
pub fn build_monthly_series(
    transactions: &[Transaction],
    year: i32,
    labels: &MonthLabels,
) -> Vec<MonthlyPoint> {
    let mut series = Vec::with_capacity(12);

    for month in 1..=12u32 {
        let mut income = 0.0;
        let mut expense = 0.0;
        let mut transaction_count = 0;

        for txn in transactions {
            if txn.year() != year || txn.month() != month {
                continue;
            }
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expense += txn.amount,
            }
            transaction_count += 1;
        }

        series.push(MonthlyPoint {
            month,
            month_name: labels.name(month).to_string(),
            income,
            expense,
            net_profit: income - expense,
            transaction_count,
        });
    }

    series
}
