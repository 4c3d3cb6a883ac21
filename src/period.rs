use crate::error::{ReportError, Result};
use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reporting period: a whole calendar year, or one month of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PeriodKey {
    pub year: i32,
    /// 1-12 for a monthly period, `None` for a whole-year period.
    pub month: Option<u32>,
}

impl PeriodKey {
    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn month(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ReportError::InvalidMonth(month));
        }
        Ok(Self {
            year,
            month: Some(month),
        })
    }

    /// Returns true if the given date falls within this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if date.year() != self.year {
            return false;
        }
        match self.month {
            Some(month) => date.month() == month,
            None => true,
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(month) => write!(f, "{:04}-{:02}", self.year, month),
            None => write!(f, "{:04}", self.year),
        }
    }
}

/// Parses a period specifier into a canonical [`PeriodKey`].
///
/// `period_type` selects the shape: `"year"` takes a bare integer year,
/// `"month"` takes `"YYYY-M"`.
pub fn resolve_period(period_type: &str, period_value: &str) -> Result<PeriodKey> {
    match period_type {
        "year" => {
            let year = period_value.trim().parse::<i32>().map_err(|_| {
                ReportError::InvalidPeriod(format!(
                    "Invalid year '{}'. Expected an integer year",
                    period_value
                ))
            })?;
            Ok(PeriodKey::year(year))
        }
        "month" => {
            let parts: Vec<&str> = period_value.split('-').collect();
            if parts.len() < 2 {
                return Err(ReportError::InvalidPeriod(format!(
                    "Invalid month period '{}'. Expected YYYY-M",
                    period_value
                )));
            }

            let year = parts[0].trim().parse::<i32>().map_err(|_| {
                ReportError::InvalidPeriod(format!(
                    "Invalid year part in period '{}'. Expected YYYY-M",
                    period_value
                ))
            })?;
            let month = parts[1].trim().parse::<u32>().map_err(|_| {
                ReportError::InvalidPeriod(format!(
                    "Invalid month part in period '{}'. Expected YYYY-M",
                    period_value
                ))
            })?;

            PeriodKey::month(year, month)
        }
        other => Err(ReportError::InvalidPeriod(format!(
            "Unknown period type '{}'. Expected 'year' or 'month'",
            other
        ))),
    }
}
