use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum TransactionKind {
    #[schemars(description = "Money flowing into the business (sales, fees, interest received)")]
    Income,

    #[schemars(description = "Money flowing out of the business (purchases, salaries, rent)")]
    Expense,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Transaction {
    #[schemars(description = "Caller-assigned transaction identifier")]
    pub id: String,

    #[schemars(description = "Whether this transaction is income or an expense")]
    pub kind: TransactionKind,

    #[schemars(
        description = "Monetary amount, always >= 0. The sign of a movement is carried by the kind, not the amount."
    )]
    pub amount: f64,

    #[schemars(description = "Identifier of the category this transaction belongs to")]
    pub category_id: String,

    #[schemars(description = "Date the transaction occurred, YYYY-MM-DD")]
    pub occurred_on: NaiveDate,
}

impl Transaction {
    pub fn year(&self) -> i32 {
        self.occurred_on.year()
    }

    pub fn month(&self) -> u32 {
        self.occurred_on.month()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    #[schemars(description = "Unique category identifier")]
    pub id: String,

    #[schemars(description = "Display name (e.g., 'Product Sales', 'Office Rent')")]
    pub name: String,

    #[schemars(description = "Whether transactions in this category are income or expenses")]
    pub kind: TransactionKind,

    #[schemars(description = "Display color hint for the rendering collaborator (e.g., '#4caf50')")]
    pub color: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum ScenarioKind {
    #[schemars(description = "Base-case projection; preferred reference for opening capital")]
    Realistic,

    #[schemars(description = "Best-case projection; first fallback for opening capital")]
    Optimistic,

    #[schemars(description = "Worst-case projection")]
    Pessimistic,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CapitalRecord {
    #[schemars(description = "Scenario label on this capital/projection record")]
    pub scenario: ScenarioKind,

    #[schemars(description = "Initial investment recorded under this scenario")]
    pub initial_investment: f64,

    #[schemars(description = "Date the record was created; newer records win within a scenario")]
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ForecastRow {
    #[schemars(description = "Calendar year this forecast row covers")]
    pub year: i32,

    #[serde(default)]
    #[schemars(description = "Calendar month 1-12 when the row is monthly; omitted for yearly rows")]
    pub month: Option<u32>,

    #[serde(default)]
    #[schemars(description = "Predicted income for the row's period. Missing values are treated as 0.")]
    pub forecast_income: f64,

    #[serde(default)]
    #[schemars(description = "Predicted expenses for the row's period. Missing values are treated as 0.")]
    pub forecast_expense: f64,

    #[serde(default)]
    #[schemars(description = "Predicted profit for the row's period. Missing values are treated as 0.")]
    pub forecast_profit: f64,

    #[serde(default)]
    #[schemars(description = "Predicted profit margin in percent, if the model emitted one")]
    pub forecast_margin: Option<f64>,

    #[serde(default)]
    #[schemars(description = "Model confidence for this row, 0-100, if the model emitted one")]
    pub confidence_level: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportInput {
    #[schemars(description = "The legal name of the business being reported on")]
    pub business_name: String,

    #[serde(default)]
    #[schemars(
        description = "Capital the business recorded at registration. Last fallback for the opening-capital resolution; 0 if absent."
    )]
    pub initial_capital: Option<f64>,

    #[schemars(
        description = "All transactions in the caller's intended scope (business, user, status), ordered by occurrence. The engine never re-queries or widens this set."
    )]
    pub transactions: Vec<Transaction>,

    #[schemars(description = "Categories referenced by the transactions")]
    pub categories: Vec<Category>,

    #[serde(default)]
    #[schemars(description = "Capital/projection records used to resolve opening capital")]
    pub capital_records: Vec<CapitalRecord>,

    #[serde(default)]
    #[schemars(
        description = "Externally computed forecast rows, typically monthly, potentially spanning multiple years"
    )]
    pub forecast_rows: Vec<ForecastRow>,
}

impl ReportInput {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ReportInput)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generation() {
        let schema_json = ReportInput::schema_as_json().unwrap();
        assert!(schema_json.contains("business_name"));
        assert!(schema_json.contains("transactions"));
        assert!(schema_json.contains("forecast_rows"));
    }

    #[test]
    fn test_serialization() {
        let input = ReportInput {
            business_name: "Test Corp".to_string(),
            initial_capital: Some(10_000.0),
            transactions: vec![Transaction {
                id: "t1".to_string(),
                kind: TransactionKind::Income,
                amount: 2500.0,
                category_id: "c1".to_string(),
                occurred_on: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            }],
            categories: vec![Category {
                id: "c1".to_string(),
                name: "Sales".to_string(),
                kind: TransactionKind::Income,
                color: "#4caf50".to_string(),
            }],
            capital_records: vec![],
            forecast_rows: vec![],
        };

        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("Test Corp"));

        let deserialized: ReportInput = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.business_name, "Test Corp");
        assert_eq!(deserialized.transactions.len(), 1);
    }

    #[test]
    fn test_forecast_row_defaults_missing_figures_to_zero() {
        let row: ForecastRow = serde_json::from_str(r#"{ "year": 2025 }"#).unwrap();
        assert_eq!(row.forecast_income, 0.0);
        assert_eq!(row.forecast_expense, 0.0);
        assert_eq!(row.forecast_profit, 0.0);
        assert!(row.month.is_none());
        assert!(row.confidence_level.is_none());
    }
}
