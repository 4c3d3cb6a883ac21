//! # Financial Report Engine
//!
//! A library for aggregating a business's raw transactions and
//! externally computed forecast rows into period-aligned summaries,
//! category rankings, and deterministic multi-year projections.
//!
//! ## Core Concepts
//!
//! - **Period**: a calendar year, or one month of it, resolved from a
//!   string specifier into a [`PeriodKey`]
//! - **Period Summary**: income/expense/profit totals plus a running cash
//!   balance built on a resolved opening capital
//! - **Category Ranking**: per-category totals with top-5 slices per kind
//! - **Yearly Projection**: forecast rows summed per year and extended to
//!   a minimum horizon by fixed 10% compounding
//! - **Chart Data**: label/series tuples handed to an external renderer
//!
//! The engine is a pure computation library: it consumes already-fetched,
//! pre-scoped collections, never queries or mutates them, and allocates
//! fresh output on every call. Empty input is a valid business state and
//! degrades to zero/empty results; only malformed input shape errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_report_engine::*;
//!
//! let input = ReportInput {
//!     business_name: "ACME Trading".to_string(),
//!     initial_capital: Some(50_000.0),
//!     transactions,
//!     categories,
//!     capital_records,
//!     forecast_rows,
//! };
//!
//! let period = resolve_period("month", "2024-3")?;
//! let report = build_period_report(&input, &period)?;
//! let forecast = build_forecast_report(&input)?;
//! ```

pub mod aggregate;
pub mod chart;
pub mod error;
pub mod monthly;
pub mod period;
pub mod projection;
pub mod ranking;
pub mod schema;
pub mod statistics;

pub use aggregate::{resolve_opening_capital, summarize, PeriodSummary};
pub use chart::{ChartData, ChartSeries};
pub use error::{ReportError, Result};
pub use monthly::{build_monthly_series, MonthLabels, MonthlyPoint};
pub use period::{resolve_period, PeriodKey};
pub use projection::{
    project_yearly, YearlyProjection, ANNUAL_GROWTH_RATE, DEFAULT_PROJECTION_YEARS,
};
pub use ranking::{rank_categories, CategoryRanking, CategorySummary, TOP_CATEGORY_COUNT};
pub use schema::*;
pub use statistics::{compute_forecast_statistics, ForecastStatistics};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Everything the reporting/export collaborator needs for one period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period: PeriodKey,
    pub summary: PeriodSummary,
    pub categories: CategoryRanking,
    /// Present for whole-year periods only.
    pub monthly: Option<Vec<MonthlyPoint>>,
}

/// Projections and descriptive statistics derived from the forecast rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub projections: Vec<YearlyProjection>,
    pub statistics: ForecastStatistics,
}

pub struct ReportEngine {
    month_labels: MonthLabels,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEngine {
    pub fn new() -> Self {
        Self {
            month_labels: MonthLabels::default(),
        }
    }

    /// Month names come from the surrounding system's locale configuration.
    pub fn with_month_labels(month_labels: MonthLabels) -> Self {
        Self { month_labels }
    }

    /// Builds the full period report: summary, category ranking, and (for
    /// whole-year periods) the 12-month series.
    ///
    /// The cash balance in the summary accumulates the entire supplied
    /// transaction snapshot on top of the resolved opening capital, not
    /// just the requested period.
    pub fn build_period_report(
        &self,
        input: &ReportInput,
        period: &PeriodKey,
    ) -> Result<PeriodReport> {
        validate_input(input)?;

        info!(
            "Building {} report for business: {}",
            period, input.business_name
        );

        let opening_capital =
            resolve_opening_capital(&input.capital_records, input.initial_capital);
        debug!("Resolved opening capital: {}", opening_capital);

        let period_transactions: Vec<Transaction> = input
            .transactions
            .iter()
            .filter(|t| period.contains(t.occurred_on))
            .cloned()
            .collect();
        debug!(
            "{} of {} transactions fall within {}",
            period_transactions.len(),
            input.transactions.len(),
            period
        );

        let summary = summarize(&period_transactions, &input.transactions, opening_capital);
        let categories = rank_categories(&period_transactions, &input.categories);

        let monthly = match period.month {
            None => Some(build_monthly_series(
                &period_transactions,
                period.year,
                &self.month_labels,
            )),
            Some(_) => None,
        };

        Ok(PeriodReport {
            period: *period,
            summary,
            categories,
            monthly,
        })
    }

    /// Builds yearly projections over at least [`DEFAULT_PROJECTION_YEARS`]
    /// years plus the forecast statistics.
    pub fn build_forecast_report(&self, input: &ReportInput) -> Result<ForecastReport> {
        validate_input(input)?;

        info!(
            "Building forecast report for business: {} ({} forecast rows)",
            input.business_name,
            input.forecast_rows.len()
        );

        Ok(ForecastReport {
            projections: project_yearly(&input.forecast_rows, DEFAULT_PROJECTION_YEARS),
            statistics: compute_forecast_statistics(&input.forecast_rows),
        })
    }
}

/// Validates input shape at the collaborator boundary, so the algorithms
/// themselves never have to. Amounts must be non-negative and forecast
/// months, when present, must be calendar months.
pub fn validate_input(input: &ReportInput) -> Result<()> {
    for txn in &input.transactions {
        if txn.amount < 0.0 {
            return Err(ReportError::NegativeAmount {
                transaction_id: txn.id.clone(),
                amount: txn.amount,
            });
        }
    }

    for row in &input.forecast_rows {
        if let Some(month) = row.month {
            if !(1..=12).contains(&month) {
                return Err(ReportError::InvalidMonth(month));
            }
        }
    }

    Ok(())
}

pub fn build_period_report(input: &ReportInput, period: &PeriodKey) -> Result<PeriodReport> {
    ReportEngine::new().build_period_report(input, period)
}

pub fn build_forecast_report(input: &ReportInput) -> Result<ForecastReport> {
    ReportEngine::new().build_forecast_report(input)
}
