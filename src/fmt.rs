use rust_decimal::Decimal;

/// Format an amount in the app's display style: R$ 1.234,56 with dot
/// thousands grouping and a leading minus for negatives. Display only —
/// arithmetic always stays in `Decimal`.
pub fn money(value: Decimal) -> String {
    let negative = value < Decimal::ZERO;
    let rounded = value.abs().round_dp(2);
    let plain = rounded.to_string();
    let (int_part, dec_part) = match plain.split_once('.') {
        Some((i, d)) => (i.to_string(), format!("{d:0<2}")),
        None => (plain, "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {grouped},{dec_part}")
    } else {
        format!("R$ {grouped},{dec_part}")
    }
}

/// Signed variant for difference columns: explicit plus sign when positive.
pub fn money_signed(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}
