//! Price display.
//!
//! Prices come from the backend as plain rupee amounts. Display follows the
//! `en-IN` currency convention: rupee sign, two decimals, and Indian digit
//! grouping (last three digits, then pairs).

const RUPEE: char = '₹';

/// Format a rupee amount, e.g. `123456.5` → `₹1,23,456.50`.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return format!("{RUPEE}NaN");
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}{RUPEE}∞");
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{sign}{RUPEE}{}.{fraction}", group_indian(whole))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
