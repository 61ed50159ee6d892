use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::error::{DefinancaError, Result};
use crate::fmt::money;
use crate::models::{BudgetCategory, LineItem};
use crate::schema::{Column, Schema};
use crate::store::BudgetBook;

/// The demo dataset: the monthly budget and a May bank statement with
/// suggested categories, as a parsed import would hand them over. Used by
/// doc examples and tests; real hosts build their own `BudgetBook`.
pub fn sample_budget() -> Result<BudgetBook> {
    let mut book = BudgetBook::new();

    for (id, name, planned) in [
        ("moradia", "Moradia", dec!(2000)),
        ("alimentacao", "Alimenta\u{e7}\u{e3}o", dec!(600)),
        ("transporte", "Transporte", dec!(400)),
        ("utilidades", "Utilidades", dec!(300)),
        ("lazer", "Lazer", dec!(200)),
        ("saude", "Sa\u{fa}de", dec!(150)),
        ("poupanca", "Poupan\u{e7}a", dec!(500)),
        ("diversos", "Diversos", dec!(150)),
    ] {
        book.add_category(BudgetCategory {
            id: id.to_string(),
            name: name.to_string(),
            planned,
        })?;
    }

    for (id, description, amount, date, suggested) in [
        ("aluguel", "ALUGUEL IMOBILIARIA XYZ", dec!(1800), "2023-05-01", "moradia"),
        ("condominio", "CONDOMINIO EDIFICIO CENTRAL", dec!(200), "2023-05-05", "moradia"),
        ("mercado1", "SUPERMERCADO PAO DE ACUCAR", dec!(350), "2023-05-03", "alimentacao"),
        ("mercado2", "SUPERMERCADO EXTRA", dec!(180), "2023-05-15", "alimentacao"),
        ("restaurante1", "RESTAURANTE SABOR E ARTE", dec!(120), "2023-05-10", "alimentacao"),
        ("uber1", "UBER *TRIP", dec!(45), "2023-05-04", "transporte"),
        ("uber2", "UBER *TRIP", dec!(38), "2023-05-12", "transporte"),
        ("metro", "METRO SP", dec!(100), "2023-05-01", "transporte"),
        ("luz", "ENEL ENERGIA", dec!(150), "2023-05-10", "utilidades"),
        ("agua", "SABESP", dec!(80), "2023-05-15", "utilidades"),
        ("internet", "VIVO INTERNET", dec!(90), "2023-05-05", "utilidades"),
        ("netflix", "NETFLIX.COM", dec!(40), "2023-05-08", "lazer"),
        ("spotify", "SPOTIFY", dec!(20), "2023-05-08", "lazer"),
        ("cinema", "CINEMARK", dec!(60), "2023-05-20", "lazer"),
        ("farmacia", "DROGARIA SAO PAULO", dec!(100), "2023-05-18", "saude"),
        ("academia", "SMARTFIT", dec!(80), "2023-05-05", "saude"),
    ] {
        book.add_item(LineItem {
            id: id.to_string(),
            description: description.to_string(),
            amount,
            date: parse_date(date)?,
            suggested_category: Some(suggested.to_string()),
        })?;
    }

    Ok(book)
}

/// Table schema for browsing statement line items: money-rendered amount,
/// raw values everywhere else.
pub fn statement_schema() -> Result<Schema<LineItem>> {
    Schema::new(vec![
        Column::new("description", "Description", |i: &LineItem| {
            i.description.as_str().into()
        }),
        Column::new("amount", "Amount", |i: &LineItem| i.amount.into())
            .with_render(|i: &LineItem| money(i.amount)),
        Column::new("date", "Date", |i: &LineItem| i.date.into()),
        Column::new("suggested", "Suggested category", |i: &LineItem| {
            i.suggested_category.clone().into()
        }),
    ])
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse()
        .map_err(|_| DefinancaError::Other(format!("Invalid date: {s}")))
}
