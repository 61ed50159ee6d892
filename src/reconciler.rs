use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DefinancaError, Result};
use crate::models::{CategoryStatus, CategorySummary, LineItem, MappingTotals};
use crate::notify::{Notification, Notifier};
use crate::store::BudgetBook;

/// Advisory over-budget condition: at least one category's actual exceeds
/// its planned amount. Surfaced to the host, never enforced — items can
/// still be mapped into an over-budget category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    /// Names of the offending categories, in budget order.
    pub categories: Vec<String>,
}

impl BudgetAlert {
    pub fn message(&self) -> String {
        format!(
            "{} categor{} over the planned budget: {}.",
            self.categories.len(),
            if self.categories.len() == 1 { "y is" } else { "ies are" },
            self.categories.join(", ")
        )
    }
}

/// The budget-reconciliation engine: owns the line-item → category mapping
/// for one session's `BudgetBook` and recomputes aggregates from it.
///
/// The mapping is a single map keyed by item id, so an item belongs to at
/// most one category by construction; remapping replaces the previous
/// assignment. Summaries, totals, and the alert are pure derivations of
/// the current mapping — the host re-queries them after each change.
pub struct Reconciler {
    book: BudgetBook,
    mapping: BTreeMap<String, String>,
}

impl Reconciler {
    pub fn new(book: BudgetBook) -> Self {
        Self {
            book,
            mapping: BTreeMap::new(),
        }
    }

    pub fn book(&self) -> &BudgetBook {
        &self.book
    }

    /// Map a line item to a category. Remapping moves the item out of its
    /// previous category; mapping to its current category is a no-op.
    /// Unknown ids are rejected without touching the mapping.
    ///
    /// Notifies the sink with a confirmation, plus a warning when the
    /// destination differs from the item's suggested category.
    pub fn map_item(
        &mut self,
        item_id: &str,
        category_id: &str,
        notifier: &mut dyn Notifier,
    ) -> Result<()> {
        let item = self
            .book
            .item(item_id)
            .ok_or_else(|| DefinancaError::UnknownItem(item_id.to_string()))?;
        let category = self
            .book
            .category(category_id)
            .ok_or_else(|| DefinancaError::UnknownCategory(category_id.to_string()))?;

        if self.mapping.get(item_id).map(String::as_str) == Some(category_id) {
            return Ok(());
        }

        let description = item.description.clone();
        let category_name = category.name.clone();
        let suggested = item.suggested_category.clone();

        self.mapping.insert(item_id.to_string(), category_id.to_string());

        notifier.notify(Notification::info(
            "Item mapped",
            format!("{description} was mapped to {category_name}"),
        ));

        if let Some(suggested_id) = suggested {
            if suggested_id != category_id {
                let suggested_name = self
                    .book
                    .category(&suggested_id)
                    .map(|c| c.name.clone())
                    .unwrap_or(suggested_id);
                notifier.notify(Notification::warning(
                    "Different from suggested category",
                    format!("This item was suggested for {suggested_name}"),
                ));
            }
        }
        Ok(())
    }

    /// Remove a line item's mapping, if any. Unmapping an already-unmapped
    /// item is a silent no-op; an unknown item id is rejected.
    pub fn unmap_item(&mut self, item_id: &str, notifier: &mut dyn Notifier) -> Result<()> {
        let item = self
            .book
            .item(item_id)
            .ok_or_else(|| DefinancaError::UnknownItem(item_id.to_string()))?;
        let description = item.description.clone();

        if let Some(category_id) = self.mapping.remove(item_id) {
            let category_name = self
                .book
                .category(&category_id)
                .map(|c| c.name.clone())
                .unwrap_or(category_id);
            notifier.notify(Notification::info(
                "Item removed",
                format!("{description} was removed from {category_name}"),
            ));
        }
        Ok(())
    }

    /// Map every unmapped item carrying a suggestion to that suggestion.
    /// Manual mappings are never overridden, items without a suggestion
    /// stay unmapped, and suggestions pointing at no known category are
    /// skipped. Idempotent. Returns how many items were mapped.
    pub fn auto_map(&mut self, notifier: &mut dyn Notifier) -> usize {
        let mut mapped = 0usize;
        for item in self.book.items() {
            if self.mapping.contains_key(&item.id) {
                continue;
            }
            let Some(suggested_id) = &item.suggested_category else {
                continue;
            };
            if self.book.category(suggested_id).is_none() {
                continue;
            }
            self.mapping.insert(item.id.clone(), suggested_id.clone());
            mapped += 1;
        }
        notifier.notify(Notification::info(
            "Automatic mapping complete",
            format!("{mapped} items were mapped to their suggested categories"),
        ));
        mapped
    }

    /// The category an item is currently mapped to, if any.
    pub fn category_of(&self, item_id: &str) -> Option<&str> {
        self.mapping.get(item_id).map(String::as_str)
    }

    /// Items currently mapped to the given category, in statement order.
    pub fn mapped_items(&self, category_id: &str) -> Vec<&LineItem> {
        self.book
            .items()
            .iter()
            .filter(|i| self.category_of(&i.id) == Some(category_id))
            .collect()
    }

    /// Items not mapped to any category yet, in statement order.
    pub fn unmapped_items(&self) -> Vec<&LineItem> {
        self.book
            .items()
            .iter()
            .filter(|i| !self.mapping.contains_key(&i.id))
            .collect()
    }

    fn actual(&self, category_id: &str) -> Decimal {
        self.mapped_items(category_id)
            .iter()
            .map(|i| i.amount)
            .sum()
    }

    /// Per-category aggregates in budget order. Status: actual above
    /// planned is Over, any other non-zero actual is Within, zero is
    /// Unmapped.
    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.book
            .categories()
            .iter()
            .map(|c| {
                let actual = self.actual(&c.id);
                let status = if actual > c.planned {
                    CategoryStatus::Over
                } else if actual > Decimal::ZERO {
                    CategoryStatus::Within
                } else {
                    CategoryStatus::Unmapped
                };
                CategorySummary {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    planned: c.planned,
                    actual,
                    difference: actual - c.planned,
                    remaining: c.planned - actual,
                    status,
                }
            })
            .collect()
    }

    /// Over-budget advisory, if any category is currently over.
    pub fn alert(&self) -> Option<BudgetAlert> {
        let categories: Vec<String> = self
            .summaries()
            .into_iter()
            .filter(|s| s.status == CategoryStatus::Over)
            .map(|s| s.name)
            .collect();
        if categories.is_empty() {
            None
        } else {
            Some(BudgetAlert { categories })
        }
    }

    /// Whole-book totals for the header cards.
    pub fn totals(&self) -> MappingTotals {
        let planned = self.book.total_planned();
        let statement = self.book.total_statement();
        let mapped: Decimal = self
            .book
            .items()
            .iter()
            .filter(|i| self.mapping.contains_key(&i.id))
            .map(|i| i.amount)
            .sum();
        let mapped_percent = if statement > Decimal::ZERO {
            (mapped * Decimal::ONE_HUNDRED / statement)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u8()
                .unwrap_or(100)
        } else {
            0
        };
        MappingTotals {
            planned,
            statement,
            unmapped: statement - mapped,
            mapped,
            mapped_percent,
        }
    }
}
