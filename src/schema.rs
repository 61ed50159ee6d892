use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{DefinancaError, Result};

/// A single cell value extracted from a row by a column accessor.
///
/// Rows are opaque to the engine, so a column may in principle yield
/// different kinds across rows. The ordering is total regardless: values
/// rank by kind (Null < Bool < Number < Date < Text) and then compare
/// within the kind. Text compares case-insensitively, tie-broken by code
/// point so the order stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(Decimal),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Case-insensitive substring match against the stringified value.
    /// Null never matches: an absent value is not searchable text.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if self.is_null() {
            return false;
        }
        self.to_string().to_lowercase().contains(needle_lower)
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<Decimal> for CellValue {
    fn from(n: Decimal) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(Decimal::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// One column of a table schema: a typed accessor plus display metadata.
///
/// The accessor is total over rows — an absent field yields
/// `CellValue::Null` rather than failing. The optional renderer only
/// affects on-screen display; filtering, sorting, and export always use
/// the raw accessor value.
pub struct Column<R> {
    pub id: String,
    pub header: String,
    accessor: Box<dyn Fn(&R) -> CellValue>,
    render: Option<Box<dyn Fn(&R) -> String>>,
    pub sortable: bool,
    pub filterable: bool,
}

impl<R> Column<R> {
    pub fn new(
        id: &str,
        header: &str,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            id: id.to_string(),
            header: header.to_string(),
            accessor: Box::new(accessor),
            render: None,
            sortable: true,
            filterable: true,
        }
    }

    /// Attach a display renderer (e.g. money formatting).
    pub fn with_render(mut self, render: impl Fn(&R) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Rendered cell text: the renderer if present, else the raw value.
    pub fn display(&self, row: &R) -> String {
        match &self.render {
            Some(render) => render(row),
            None => self.value(row).to_string(),
        }
    }
}

/// An ordered set of columns, validated at construction: column ids must
/// be unique, since they key filters, sort state, and visibility.
pub struct Schema<R> {
    columns: Vec<Column<R>>,
}

impl<R> Schema<R> {
    pub fn new(columns: Vec<Column<R>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.id.clone()) {
                return Err(DefinancaError::InvalidSchema(format!(
                    "duplicate column id: {}",
                    col.id
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.id == id)
    }
}
