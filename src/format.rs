//! Currency display helpers.
//!
//! Whole-unit formatting with a leading symbol: US grouping (`$1,234,567`)
//! for dollars and Indian lakh/crore grouping (`₹12,34,567`) for rupees.
//! The card detail view shows dollars to the cent with [`usd_cents`].

/// Convert a USD amount at `rate`.
pub fn inr_value(usd: f64, rate: f64) -> f64 {
    usd * rate
}

/// Format a dollar amount rounded to whole dollars.
pub fn usd(amount: f64) -> String {
    with_sign(amount, "$", group_thousands)
}

/// Format a dollar amount rounded to the cent, e.g. `$1,234.50`.
pub fn usd_cents(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let sign = if cents < 0.0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = format!("{:.0}", (cents / 100.0).trunc());
    let frac = cents % 100.0;
    format!("{}${}.{:02.0}", sign, group_thousands(&whole), frac)
}

/// Format a rupee amount rounded to whole rupees.
pub fn inr(amount: f64) -> String {
    with_sign(amount, "₹", group_indian)
}

fn with_sign(amount: f64, symbol: &str, group: fn(&str) -> String) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group(&digits))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Last three digits form one group, everything before is grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
