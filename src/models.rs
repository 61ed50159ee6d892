use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A category as supplied by the category provider. `planned` is only
/// present for categories that participate in budgeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub category_type: String,
    pub planned: Option<Decimal>,
}

/// A budget bucket with a planned amount. `planned` must be non-negative;
/// the store enforces this on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: String,
    pub name: String,
    pub planned: Decimal,
}

/// A single bank-statement entry. Produced upstream by whatever parses the
/// statement file; this crate never sees the file itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub suggested_category: Option<String>,
}

/// Budget standing of a category, derived from its mapped items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Over,
    Within,
    Unmapped,
}

impl CategoryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Over => "Over budget",
            CategoryStatus::Within => "Within budget",
            CategoryStatus::Unmapped => "Unmapped",
        }
    }
}

/// Per-category reconciliation result. Never stored; recomputed from the
/// mapping relation on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub planned: Decimal,
    pub actual: Decimal,
    /// actual - planned (positive when over budget)
    pub difference: Decimal,
    /// planned - actual (negative when over budget)
    pub remaining: Decimal,
    pub status: CategoryStatus,
}

/// Whole-book totals for the reconciliation header cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingTotals {
    pub planned: Decimal,
    pub statement: Decimal,
    pub mapped: Decimal,
    pub unmapped: Decimal,
    /// Share of the statement total already mapped, 0-100, rounded.
    pub mapped_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_item_json_roundtrip() {
        let item = LineItem {
            id: "aluguel".to_string(),
            description: "ALUGUEL IMOBILIARIA XYZ".to_string(),
            amount: dec!(1800),
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            suggested_category: Some("moradia".to_string()),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "aluguel");
        assert_eq!(back.amount, dec!(1800));
        assert_eq!(back.suggested_category.as_deref(), Some("moradia"));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&CategoryStatus::Over).unwrap();
        assert_eq!(json, "\"over\"");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CategoryStatus::Over.label(), "Over budget");
        assert_eq!(CategoryStatus::Unmapped.label(), "Unmapped");
    }
}
