use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::{money, money_signed};
use crate::models::CategoryStatus;
use crate::reconciler::Reconciler;
use crate::table::{SortDirection, TableView};

// ---------------------------------------------------------------------------
// Pure formatting functions (derived view / reconciliation → String)
// ---------------------------------------------------------------------------

/// Render the current page of a table view as text: visible columns only,
/// sort indicator in the header, a "no results" body for an empty filtered
/// set, and a status footer with the row range and active filters.
pub fn format_table<R>(view: &TableView<R>) -> String {
    let derived = view.derive();
    let columns = view.visible_columns();

    let mut table = Table::new();
    let headers: Vec<Cell> = columns
        .iter()
        .map(|col| {
            let marker = match &derived.sort {
                Some(key) if key.column == col.id => match key.direction {
                    SortDirection::Asc => " \u{25b2}",
                    SortDirection::Desc => " \u{25bc}",
                },
                _ => "",
            };
            Cell::new(format!("{}{marker}", col.header))
        })
        .collect();
    table.set_header(headers);

    if derived.is_empty() {
        table.add_row(vec![Cell::new("No results found.")]);
    } else {
        for row in &derived.rows {
            let cells: Vec<Cell> = columns
                .iter()
                .map(|col| Cell::new(col.display(row)))
                .collect();
            table.add_row(cells);
        }
    }

    let mut status = format!(
        "Rows {}-{} of {} | Page {} of {}",
        derived.start, derived.end, derived.filtered_count, derived.page, derived.total_pages,
    );
    if !derived.active_filters.is_empty() {
        let badges: Vec<String> = derived
            .active_filters
            .iter()
            .map(|b| format!("{}: {}", b.header, b.value))
            .collect();
        status.push_str(&format!(" | Filters: {}", badges.join(", ")));
    }

    format!("{table}\n{status}")
}

fn status_cell(status: CategoryStatus) -> Cell {
    match status {
        CategoryStatus::Over => Cell::new(status.label().red().bold()),
        CategoryStatus::Within => Cell::new(status.label().green()),
        CategoryStatus::Unmapped => Cell::new(status.label()),
    }
}

/// Render the mapping summary: the over-budget banner when raised, one
/// row per category with colored status, and a totals row.
pub fn format_summary(rec: &Reconciler) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Category",
        "Planned",
        "Actual",
        "Difference",
        "Remaining",
        "Status",
    ]);

    for summary in rec.summaries() {
        table.add_row(vec![
            Cell::new(&summary.name),
            Cell::new(money(summary.planned)),
            Cell::new(money(summary.actual)),
            Cell::new(money_signed(summary.difference)),
            Cell::new(money(summary.remaining)),
            status_cell(summary.status),
        ]);
    }

    let totals = rec.totals();
    let overall = if totals.mapped > totals.planned {
        Cell::new("Over budget".red().bold())
    } else if totals.mapped < totals.planned {
        Cell::new("Under budget".green())
    } else {
        Cell::new("On budget".green())
    };
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(totals.planned)),
        Cell::new(money(totals.mapped)),
        Cell::new(money_signed(totals.mapped - totals.planned)),
        Cell::new(money(totals.planned - totals.mapped)),
        overall,
    ]);

    let progress = format!(
        "{} of {} mapped ({}%) | {} unmapped",
        money(totals.mapped),
        money(totals.statement),
        totals.mapped_percent,
        money(totals.unmapped),
    );

    match rec.alert() {
        Some(alert) => format!(
            "{} {}\nMapping summary\n{table}\n{progress}",
            "Budget alert:".red().bold(),
            alert.message(),
        ),
        None => format!("Mapping summary\n{table}\n{progress}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NullNotifier;
    use crate::samples::{sample_budget, statement_schema};
    use crate::schema::{Column, Schema};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[derive(Clone)]
    struct Entry {
        description: String,
        amount: Decimal,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                description: "Aluguel".to_string(),
                amount: dec!(1800),
            },
            Entry {
                description: "Netflix".to_string(),
                amount: dec!(40),
            },
        ]
    }

    fn schema() -> Schema<Entry> {
        Schema::new(vec![
            Column::new("description", "Description", |r: &Entry| {
                r.description.as_str().into()
            }),
            Column::new("amount", "Amount", |r: &Entry| r.amount.into())
                .with_render(|r: &Entry| money(r.amount)),
        ])
        .unwrap()
    }

    #[test]
    fn test_table_renders_rows_and_footer() {
        let view = TableView::new(schema(), entries());
        let out = format_table(&view);
        assert!(out.contains("Description"));
        assert!(out.contains("Aluguel"));
        assert!(out.contains("R$ 1.800,00")); // rendered, not raw
        assert!(out.contains("Rows 1-2 of 2 | Page 1 of 1"));
    }

    #[test]
    fn test_table_shows_sort_indicator() {
        let mut view = TableView::new(schema(), entries());
        view.sort_by("amount");
        assert!(format_table(&view).contains("Amount \u{25b2}"));
        view.sort_by("amount");
        assert!(format_table(&view).contains("Amount \u{25bc}"));
    }

    #[test]
    fn test_table_empty_state() {
        let mut view = TableView::new(schema(), entries());
        view.set_search_term("nothing-here");
        let out = format_table(&view);
        assert!(out.contains("No results found."));
        assert!(out.contains("Rows 0-0 of 0"));
    }

    #[test]
    fn test_table_footer_lists_filter_badges() {
        let mut view = TableView::new(schema(), entries());
        view.set_column_filter("description", "alu");
        let out = format_table(&view);
        assert!(out.contains("Filters: Description: alu"));
    }

    #[test]
    fn test_table_hides_hidden_columns() {
        let mut view = TableView::new(schema(), entries());
        view.toggle_column("amount");
        let out = format_table(&view);
        assert!(out.contains("Description"));
        assert!(!out.contains("Amount"));
    }

    #[test]
    fn test_summary_renders_categories_and_totals() {
        let mut rec = Reconciler::new(sample_budget().unwrap());
        rec.auto_map(&mut NullNotifier);
        let out = format_summary(&rec);

        assert!(out.contains("Mapping summary"));
        assert!(out.contains("Moradia"));
        assert!(out.contains("Within budget"));
        assert!(out.contains("Total"));
        assert!(out.contains("unmapped"));
    }

    #[test]
    fn test_summary_shows_alert_when_over() {
        let mut rec = Reconciler::new(sample_budget().unwrap());
        // The sample statement overruns Saúde (180 mapped vs 150 planned)
        rec.auto_map(&mut NullNotifier);

        let out = format_summary(&rec);
        assert!(out.contains("Budget alert:"));
        assert!(out.contains("Sa\u{fa}de"));
        assert!(out.contains("Over budget"));
    }

    #[test]
    fn test_statement_schema_renders() {
        let book = sample_budget().unwrap();
        let view = TableView::new(statement_schema().unwrap(), book.items().to_vec());
        let out = format_table(&view);
        assert!(out.contains("ALUGUEL IMOBILIARIA XYZ"));
        assert!(out.contains("2023-05-01"));
    }
}
