use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// One row of `expenses` or `income`. Which table it lives in is decided by
/// the [`Kind`](super::Kind) it is stored under.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Option<i64>,
    pub category: String,
    pub amount: Decimal,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub note: Option<String>,
}

impl Transaction {
    /// A new transaction dated today (local time).
    pub fn new(category: String, amount: Decimal, note: Option<String>) -> Self {
        Self {
            id: None,
            category,
            amount,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            note,
        }
    }
}

/// Group transactions by category name. Each group keeps the input order,
/// so a date-descending input yields date-descending groups.
pub fn group_by_category(txns: &[Transaction]) -> BTreeMap<&str, Vec<&Transaction>> {
    let mut groups: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for txn in txns {
        groups.entry(txn.category.as_str()).or_default().push(txn);
    }
    groups
}

/// Sum of all amounts, `None` on overflow.
pub fn total<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Option<Decimal> {
    checked_sum(txns.into_iter().map(|t| t.amount))
}

pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}
