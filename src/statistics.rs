use crate::period::PeriodKey;
use crate::schema::ForecastRow;
use serde::{Deserialize, Serialize};

/// Descriptive statistics over a forecast series. Empty input yields the
/// all-zero record with `None` peak months; "no forecast yet" is a valid
/// state, not an error. Rendering placeholders for the missing peaks is a
/// presentation concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastStatistics {
    pub total_income: f64,
    pub total_expense: f64,
    pub total_profit: f64,
    pub avg_margin: f64,
    pub avg_confidence: f64,
    /// Percentage change from the first row's profit to the last row's;
    /// floored to 0 when the first profit is 0 or fewer than two rows exist.
    pub growth_rate: f64,
    pub highest_income_month: Option<PeriodKey>,
    pub highest_income_value: f64,
    pub highest_profit_month: Option<PeriodKey>,
    pub highest_profit_value: f64,
}

/// Single linear pass over the forecast rows: totals, arithmetic means,
/// first-vs-last growth, and peak months. Peaks use strict `>`, so ties
/// keep the first-seen maximum.
pub fn compute_forecast_statistics(rows: &[ForecastRow]) -> ForecastStatistics {
    if rows.is_empty() {
        return ForecastStatistics::default();
    }

    let mut stats = ForecastStatistics::default();
    let mut margin_sum = 0.0;
    let mut confidence_sum = 0.0;
    let mut highest_income = f64::NEG_INFINITY;
    let mut highest_profit = f64::NEG_INFINITY;

    for row in rows {
        stats.total_income += row.forecast_income;
        stats.total_expense += row.forecast_expense;
        stats.total_profit += row.forecast_profit;
        margin_sum += row.forecast_margin.unwrap_or(0.0);
        confidence_sum += row.confidence_level.unwrap_or(0.0);

        if row.forecast_income > highest_income {
            highest_income = row.forecast_income;
            stats.highest_income_month = Some(PeriodKey {
                year: row.year,
                month: row.month,
            });
            stats.highest_income_value = row.forecast_income;
        }

        if row.forecast_profit > highest_profit {
            highest_profit = row.forecast_profit;
            stats.highest_profit_month = Some(PeriodKey {
                year: row.year,
                month: row.month,
            });
            stats.highest_profit_value = row.forecast_profit;
        }
    }

    let count = rows.len() as f64;
    stats.avg_margin = margin_sum / count;
    stats.avg_confidence = confidence_sum / count;

    if rows.len() >= 2 {
        let first = rows[0].forecast_profit;
        let last = rows[rows.len() - 1].forecast_profit;
        if first != 0.0 {
            stats.growth_rate = (last - first) / first.abs() * 100.0;
        }
    }

    stats
}
