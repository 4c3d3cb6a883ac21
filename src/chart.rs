use crate::monthly::MonthlyPoint;
use crate::projection::YearlyProjection;
use crate::ranking::CategorySummary;
use serde::{Deserialize, Serialize};

/// One named series of raw numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Label/series tuples for an external rendering collaborator.
///
/// The engine only reshapes: labels line up 1:1 with every series' values,
/// and numbers are passed through unformatted. Currency symbols, percent
/// signs, and image generation belong to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn from_monthly_series(points: &[MonthlyPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.month_name.clone()).collect(),
            series: vec![
                ChartSeries {
                    name: "Income".to_string(),
                    values: points.iter().map(|p| p.income).collect(),
                },
                ChartSeries {
                    name: "Expense".to_string(),
                    values: points.iter().map(|p| p.expense).collect(),
                },
                ChartSeries {
                    name: "Net Profit".to_string(),
                    values: points.iter().map(|p| p.net_profit).collect(),
                },
            ],
        }
    }

    pub fn from_yearly_projections(projections: &[YearlyProjection]) -> Self {
        Self {
            labels: projections.iter().map(|p| p.year.to_string()).collect(),
            series: vec![
                ChartSeries {
                    name: "Income".to_string(),
                    values: projections.iter().map(|p| p.income).collect(),
                },
                ChartSeries {
                    name: "Expense".to_string(),
                    values: projections.iter().map(|p| p.expense).collect(),
                },
                ChartSeries {
                    name: "Profit".to_string(),
                    values: projections.iter().map(|p| p.profit).collect(),
                },
            ],
        }
    }

    /// One totals series labeled by category name, e.g. for a top-5 slice.
    pub fn from_category_totals(name: &str, summaries: &[CategorySummary]) -> Self {
        Self {
            labels: summaries.iter().map(|s| s.category.name.clone()).collect(),
            series: vec![ChartSeries {
                name: name.to_string(),
                values: summaries.iter().map(|s| s.total).collect(),
            }],
        }
    }

    /// True when every series has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.series.iter().all(|s| s.values.len() == self.labels.len())
    }
}
