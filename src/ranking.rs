use crate::schema::{Category, Transaction, TransactionKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How many categories the top-N slices keep per kind.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// Contribution of one category within a period. `count` is always > 0:
/// categories with no matching transactions are omitted entirely, not
/// zero-filled (unlike the monthly series, which zero-fills).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: f64,
    pub count: usize,
    pub average: f64,
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRanking {
    /// Every active category, descending by total.
    pub all: Vec<CategorySummary>,
    pub income: Vec<CategorySummary>,
    pub expense: Vec<CategorySummary>,
    /// First [`TOP_CATEGORY_COUNT`] of `income`; always a prefix of it.
    pub top_income: Vec<CategorySummary>,
    /// First [`TOP_CATEGORY_COUNT`] of `expense`; always a prefix of it.
    pub top_expense: Vec<CategorySummary>,
}

/// Groups the period's transactions by category and ranks categories by
/// total contribution. Ties are broken by category id ascending so the
/// ordering never depends on caller input order.
pub fn rank_categories(
    period_transactions: &[Transaction],
    categories: &[Category],
) -> CategoryRanking {
    let mut all: Vec<CategorySummary> = Vec::new();

    for category in categories {
        let mut total = 0.0;
        let mut count = 0;

        for txn in period_transactions {
            if txn.category_id == category.id {
                total += txn.amount;
                count += 1;
            }
        }

        if count == 0 {
            continue;
        }

        all.push(CategorySummary {
            category: category.clone(),
            total,
            count,
            average: total / count as f64,
            kind: category.kind,
        });
    }

    all.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.id.cmp(&b.category.id))
    });

    let income: Vec<CategorySummary> = all
        .iter()
        .filter(|s| s.kind == TransactionKind::Income)
        .cloned()
        .collect();
    let expense: Vec<CategorySummary> = all
        .iter()
        .filter(|s| s.kind == TransactionKind::Expense)
        .cloned()
        .collect();

    let top_income = income.iter().take(TOP_CATEGORY_COUNT).cloned().collect();
    let top_expense = expense.iter().take(TOP_CATEGORY_COUNT).cloned().collect();

    CategoryRanking {
        all,
        income,
        expense,
        top_income,
        top_expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn category(id: &str, kind: TransactionKind) -> Category {
        Category {
            id: id.to_string(),
            name: format!("Category {}", id),
            kind,
            color: "#888888".to_string(),
        }
    }

    fn txn(category_id: &str, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: format!("{}-{}", category_id, amount),
            kind,
            amount,
            category_id: category_id.to_string(),
            occurred_on: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        }
    }

    #[test]
    fn test_zero_activity_categories_are_omitted() {
        let categories = vec![
            category("a", TransactionKind::Income),
            category("b", TransactionKind::Expense),
        ];
        let transactions = vec![txn("a", TransactionKind::Income, 100.0)];

        let ranking = rank_categories(&transactions, &categories);

        assert_eq!(ranking.all.len(), 1);
        assert_eq!(ranking.all[0].category.id, "a");
        assert!(ranking.expense.is_empty());
        assert!(ranking.all.iter().all(|s| s.count > 0));
    }

    #[test]
    fn test_each_active_category_appears_exactly_once() {
        let categories = vec![
            category("a", TransactionKind::Income),
            category("b", TransactionKind::Expense),
        ];
        let transactions = vec![
            txn("a", TransactionKind::Income, 100.0),
            txn("a", TransactionKind::Income, 300.0),
            txn("b", TransactionKind::Expense, 50.0),
        ];

        let ranking = rank_categories(&transactions, &categories);

        assert_eq!(ranking.all.len(), 2);
        let a = ranking.all.iter().find(|s| s.category.id == "a").unwrap();
        assert_eq!(a.total, 400.0);
        assert_eq!(a.count, 2);
        assert_eq!(a.average, 200.0);
    }

    #[test]
    fn test_sorted_descending_with_id_tiebreak() {
        let categories = vec![
            category("z", TransactionKind::Expense),
            category("a", TransactionKind::Expense),
            category("m", TransactionKind::Expense),
        ];
        let transactions = vec![
            txn("z", TransactionKind::Expense, 100.0),
            txn("a", TransactionKind::Expense, 100.0),
            txn("m", TransactionKind::Expense, 500.0),
        ];

        let ranking = rank_categories(&transactions, &categories);

        let ids: Vec<&str> = ranking.all.iter().map(|s| s.category.id.as_str()).collect();
        assert_eq!(ids, vec!["m", "a", "z"]);
    }

    #[test]
    fn test_top_lists_are_bounded_prefixes() {
        let categories: Vec<Category> = (0..8)
            .map(|i| category(&format!("e{}", i), TransactionKind::Expense))
            .collect();
        let transactions: Vec<Transaction> = (0..8)
            .map(|i| {
                txn(
                    &format!("e{}", i),
                    TransactionKind::Expense,
                    (i + 1) as f64 * 10.0,
                )
            })
            .collect();

        let ranking = rank_categories(&transactions, &categories);

        assert_eq!(ranking.expense.len(), 8);
        assert_eq!(ranking.top_expense.len(), TOP_CATEGORY_COUNT);
        assert_eq!(
            ranking.top_expense[..],
            ranking.expense[..TOP_CATEGORY_COUNT]
        );
        assert!(ranking.top_income.len() <= TOP_CATEGORY_COUNT);
    }
}
