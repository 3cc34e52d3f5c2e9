/// Money renders with a currency sign, thousands separators, and two
/// decimals: `1234.5` becomes `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Optional amounts fall back to a dash, matching empty table cells.
pub fn format_money_or_dash(amount: Option<f64>) -> String {
    amount.map(format_money).unwrap_or_else(|| "—".to_string())
}
