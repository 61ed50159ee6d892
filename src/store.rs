use rust_decimal::Decimal;

use crate::error::{DefinancaError, Result};
use crate::models::{BudgetCategory, LineItem};

/// In-memory backing store for one reconciliation session: the budget
/// categories and the statement line items they are reconciled against.
///
/// Built once by the host (from the category provider and the statement
/// import) and handed to the engine, so nothing in this crate depends on
/// ambient state. Insertion order is preserved and drives display order.
#[derive(Debug, Default)]
pub struct BudgetBook {
    categories: Vec<BudgetCategory>,
    items: Vec<LineItem>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a budget category. Rejects duplicate ids and negative planned
    /// amounts without touching the store.
    pub fn add_category(&mut self, category: BudgetCategory) -> Result<()> {
        if self.category(&category.id).is_some() {
            return Err(DefinancaError::DuplicateId(category.id));
        }
        if category.planned < Decimal::ZERO {
            return Err(DefinancaError::Other(format!(
                "Planned amount for {} cannot be negative",
                category.name
            )));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Add a statement line item. Rejects duplicate ids.
    pub fn add_item(&mut self, item: LineItem) -> Result<()> {
        if self.item(&item.id).is_some() {
            return Err(DefinancaError::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all planned amounts.
    pub fn total_planned(&self) -> Decimal {
        self.categories.iter().map(|c| c.planned).sum()
    }

    /// Sum of all statement line-item amounts.
    pub fn total_statement(&self) -> Decimal {
        self.items.iter().map(|i| i.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn cat(id: &str, planned: Decimal) -> BudgetCategory {
        BudgetCategory {
            id: id.to_string(),
            name: id.to_uppercase(),
            planned,
        }
    }

    fn item(id: &str, amount: Decimal) -> LineItem {
        LineItem {
            id: id.to_string(),
            description: id.to_uppercase(),
            amount,
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            suggested_category: None,
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut book = BudgetBook::new();
        book.add_category(cat("moradia", dec!(2000))).unwrap();
        book.add_item(item("aluguel", dec!(1800))).unwrap();

        assert_eq!(book.category("moradia").unwrap().planned, dec!(2000));
        assert_eq!(book.item("aluguel").unwrap().amount, dec!(1800));
        assert!(book.category("nope").is_none());
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut book = BudgetBook::new();
        book.add_category(cat("lazer", dec!(200))).unwrap();
        let err = book.add_category(cat("lazer", dec!(300))).unwrap_err();
        assert!(matches!(err, DefinancaError::DuplicateId(_)));
        // Original entry untouched
        assert_eq!(book.category("lazer").unwrap().planned, dec!(200));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut book = BudgetBook::new();
        book.add_item(item("uber1", dec!(45))).unwrap();
        assert!(book.add_item(item("uber1", dec!(45))).is_err());
        assert_eq!(book.items().len(), 1);
    }

    #[test]
    fn test_negative_planned_rejected() {
        let mut book = BudgetBook::new();
        let err = book.add_category(cat("saude", dec!(-150))).unwrap_err();
        assert!(err.to_string().contains("negative"));
        assert!(book.categories().is_empty());
    }

    #[test]
    fn test_totals() {
        let mut book = BudgetBook::new();
        book.add_category(cat("moradia", dec!(2000))).unwrap();
        book.add_category(cat("lazer", dec!(200))).unwrap();
        book.add_item(item("aluguel", dec!(1800))).unwrap();
        book.add_item(item("netflix", dec!(39.90))).unwrap();

        assert_eq!(book.total_planned(), dec!(2200));
        assert_eq!(book.total_statement(), dec!(1839.90));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut book = BudgetBook::new();
        for id in ["moradia", "alimentacao", "transporte"] {
            book.add_category(cat(id, dec!(100))).unwrap();
        }
        let ids: Vec<&str> = book.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["moradia", "alimentacao", "transporte"]);
    }
}
