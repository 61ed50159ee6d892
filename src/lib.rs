//! Core engines for a personal-finance dashboard: a schema-driven table
//! view (search, per-column filters, sort, pagination, visibility, CSV
//! export) and a budget reconciliation engine that maps bank-statement
//! line items onto budget categories and tracks per-category actuals.
//!
//! Both engines are pure state machines: the host application owns the
//! event loop and rendering, feeds user interactions into the mutators,
//! and re-derives the output after every change. There is no I/O here
//! beyond the CSV export writer the host supplies.
//!
//! ```
//! use definanca::{Reconciler, TableView, NullNotifier};
//! use definanca::samples::{sample_budget, statement_schema};
//!
//! let book = sample_budget()?;
//! let mut table = TableView::new(statement_schema()?, book.items().to_vec());
//! table.set_search_term("uber");
//! table.sort_by("amount");
//! assert_eq!(table.derive().filtered_count, 2);
//!
//! let mut rec = Reconciler::new(book);
//! rec.auto_map(&mut NullNotifier);
//! assert!(rec.alert().is_some());
//! # Ok::<(), definanca::DefinancaError>(())
//! ```

pub mod error;
pub mod export;
pub mod fmt;
pub mod models;
pub mod notify;
pub mod reconciler;
pub mod render;
pub mod samples;
pub mod schema;
pub mod store;
pub mod table;

pub use error::{DefinancaError, Result};
pub use models::{
    BudgetCategory, Category, CategoryStatus, CategorySummary, LineItem, MappingTotals,
};
pub use notify::{MemoNotifier, Notification, Notifier, NullNotifier, Severity};
pub use reconciler::{BudgetAlert, Reconciler};
pub use schema::{CellValue, Column, Schema};
pub use store::BudgetBook;
pub use table::{DerivedView, FilterBadge, SortDirection, SortKey, TableView, ViewState};
