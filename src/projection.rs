use crate::schema::ForecastRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed 10% annual compounding applied to extrapolated years. A deliberate
/// simplification, not a fitted parameter.
pub const ANNUAL_GROWTH_RATE: f64 = 1.10;

/// Minimum horizon the facade asks for when projecting.
pub const DEFAULT_PROJECTION_YEARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjection {
    pub year: i32,
    pub income: f64,
    pub expense: f64,
    pub profit: f64,
    /// Profit as a percentage of income; 0 when income is 0.
    pub margin: f64,
    /// True for years synthesized by fixed-rate compounding rather than
    /// summed from forecast rows.
    pub is_projected: bool,
}

/// Sums forecast rows into yearly totals and extends the series to at
/// least `target_min_years` by compounding the last observed year at
/// [`ANNUAL_GROWTH_RATE`].
///
/// Rows sharing a year accumulate into one bucket; this is how monthly
/// forecast rows roll up into yearly totals. With no rows at all there is
/// no anchor to compound from and the result is empty. The output is
/// fully determined by the input.
pub fn project_yearly(forecast_rows: &[ForecastRow], target_min_years: usize) -> Vec<YearlyProjection> {
    let mut groups: BTreeMap<i32, (f64, f64, f64)> = BTreeMap::new();

    for row in forecast_rows {
        let entry = groups.entry(row.year).or_insert((0.0, 0.0, 0.0));
        entry.0 += row.forecast_income;
        entry.1 += row.forecast_expense;
        entry.2 += row.forecast_profit;
    }

    // BTreeMap iteration already yields years ascending
    let mut projections: Vec<YearlyProjection> = groups
        .into_iter()
        .map(|(year, (income, expense, profit))| YearlyProjection {
            year,
            income,
            expense,
            profit,
            margin: margin_percent(profit, income),
            is_projected: false,
        })
        .collect();

    if projections.is_empty() {
        return projections;
    }

    let target = target_min_years.max(projections.len());
    let additional = target - projections.len();
    let last = projections.last().expect("non-empty checked above").clone();

    for i in 1..=additional {
        let growth = ANNUAL_GROWTH_RATE.powi(i as i32);
        let income = last.income * growth;
        let expense = last.expense * growth;
        let profit = income - expense;

        projections.push(YearlyProjection {
            year: last.year + i as i32,
            income,
            expense,
            profit,
            margin: margin_percent(profit, income),
            is_projected: true,
        });
    }

    projections
}

fn margin_percent(profit: f64, income: f64) -> f64 {
    if income > 0.0 {
        profit / income * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, month: Option<u32>, income: f64, expense: f64, profit: f64) -> ForecastRow {
        ForecastRow {
            year,
            month,
            forecast_income: income,
            forecast_expense: expense,
            forecast_profit: profit,
            forecast_margin: None,
            confidence_level: None,
        }
    }

    #[test]
    fn test_single_year_extends_to_three() {
        let rows = vec![row(2024, None, 1000.0, 600.0, 400.0)];
        let projections = project_yearly(&rows, 3);

        assert_eq!(projections.len(), 3);
        assert_eq!(projections[0].year, 2024);
        assert!(!projections[0].is_projected);

        assert_eq!(projections[1].year, 2025);
        assert!(projections[1].is_projected);
        assert!((projections[1].income - 1000.0 * 1.10).abs() < 1e-9);
        assert!((projections[1].expense - 600.0 * 1.10).abs() < 1e-9);

        assert_eq!(projections[2].year, 2026);
        assert!(projections[2].is_projected);
        assert!((projections[2].income - 1000.0 * 1.10_f64.powi(2)).abs() < 1e-9);
        assert!(
            (projections[2].profit - (projections[2].income - projections[2].expense)).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(project_yearly(&[], 3).is_empty());
    }

    #[test]
    fn test_monthly_rows_accumulate_into_yearly_totals() {
        let rows = vec![
            row(2024, Some(1), 100.0, 40.0, 60.0),
            row(2024, Some(2), 200.0, 80.0, 120.0),
            row(2025, Some(1), 500.0, 100.0, 400.0),
        ];
        let projections = project_yearly(&rows, 2);

        assert_eq!(projections.len(), 2);
        assert_eq!(projections[0].year, 2024);
        assert_eq!(projections[0].income, 300.0);
        assert_eq!(projections[0].expense, 120.0);
        assert_eq!(projections[0].profit, 180.0);
        assert_eq!(projections[1].year, 2025);
    }

    #[test]
    fn test_observed_years_meeting_target_are_not_extended() {
        let rows = vec![
            row(2023, None, 100.0, 50.0, 50.0),
            row(2024, None, 110.0, 55.0, 55.0),
            row(2025, None, 120.0, 60.0, 60.0),
            row(2026, None, 130.0, 65.0, 65.0),
        ];
        let projections = project_yearly(&rows, 3);

        assert_eq!(projections.len(), 4);
        assert!(projections.iter().all(|p| !p.is_projected));
    }

    #[test]
    fn test_years_are_ascending_without_gaps() {
        let rows = vec![
            row(2025, None, 500.0, 200.0, 300.0),
            row(2023, None, 300.0, 100.0, 200.0),
        ];
        let projections = project_yearly(&rows, 4);

        let years: Vec<i32> = projections.iter().map(|p| p.year).collect();
        // Observed years sort ascending; extrapolation continues from the last
        assert_eq!(years, vec![2023, 2025, 2026, 2027]);
        assert!(projections[2].is_projected);
        assert!(projections[3].is_projected);
    }

    #[test]
    fn test_margin_is_zero_without_income() {
        let rows = vec![row(2024, None, 0.0, 100.0, -100.0)];
        let projections = project_yearly(&rows, 1);
        assert_eq!(projections[0].margin, 0.0);
    }

    #[test]
    fn test_margin_from_projected_figures() {
        let rows = vec![row(2024, None, 1000.0, 600.0, 400.0)];
        let projections = project_yearly(&rows, 2);

        let projected = &projections[1];
        let expected = (projected.profit / projected.income) * 100.0;
        assert!((projected.margin - expected).abs() < 1e-9);
        // Income and expense grow at the same rate, so the margin holds
        assert!((projected.margin - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let rows = vec![row(2024, None, 1234.56, 789.01, 445.55)];
        assert_eq!(project_yearly(&rows, 5), project_yearly(&rows, 5));
    }
}
