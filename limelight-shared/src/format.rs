//! Display formatting helpers shared by the dashboard views.

use chrono::{DateTime, Datelike, Utc};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a timestamp with one of the date patterns the settings page
/// offers. Unknown patterns fall back to "MMM D, YYYY".
#[must_use]
pub fn format_date(date: Option<DateTime<Utc>>, pattern: &str) -> String {
    let Some(date) = date else {
        return "Invalid date".to_string();
    };

    let day = date.day();
    let month = date.month();
    let year = date.year();

    match pattern {
        "MM/DD/YYYY" => format!("{month}/{day}/{year}"),
        "DD/MM/YYYY" => format!("{day}/{month}/{year}"),
        "YYYY/MM/DD" => format!("{year}/{month}/{day}"),
        _ => format!(
            "{} {day}, {year}",
            MONTHS_SHORT[(month as usize).saturating_sub(1)]
        ),
    }
}

/// Relative-time phrase for a past timestamp, e.g. "2 hours ago".
///
/// `now` is injected so views can share one clock read per render.
/// Timestamps in the future collapse to "just now".
#[must_use]
pub fn time_ago(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(then) = then else {
        return "Invalid date".to_string();
    };

    let seconds = (now - then).num_seconds();
    if seconds < 0 {
        return "just now".to_string();
    }

    let intervals: [(&str, i64); 7] = [
        ("year", 31_536_000),
        ("month", 2_592_000),
        ("week", 604_800),
        ("day", 86_400),
        ("hour", 3_600),
        ("minute", 60),
        ("second", 1),
    ];

    for (unit, length) in intervals {
        let count = seconds / length;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            return format!("{count} {unit}{plural} ago");
        }
    }

    "just now".to_string()
}

/// Shorten text to `max_len` characters, appending an ellipsis when cut.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(max_len).collect();
        truncated.push_str("...");
        truncated
    }
}

/// Up to two uppercase initials for an avatar placeholder.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Normalize a price for display: values that already carry a currency
/// symbol pass through; bare numbers gain a dollar sign and thousands
/// separators; anything unparsable passes through unchanged.
#[must_use]
pub fn format_price(price: &str) -> String {
    if price.contains('$') || price.contains('€') || price.contains('£') {
        return price.to_string();
    }

    match crate::models::product::parse_price(price) {
        Some(value) => format!("${}", group_thousands(value)),
        None => price.to_string(),
    }
}

// Catalog prices are far below 2^63, so the cast is lossless.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn group_thousands(value: f64) -> String {
    let whole = value.trunc() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = value.fract();
    if fraction > f64::EPSILON {
        grouped.push_str(&format!("{fraction:.2}")[1..]);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn format_date_patterns() {
        let date = Some(clock());

        assert_eq!(format_date(date, "MMM D, YYYY"), "Mar 15, 2024");
        assert_eq!(format_date(date, "MM/DD/YYYY"), "3/15/2024");
        assert_eq!(format_date(date, "DD/MM/YYYY"), "15/3/2024");
        assert_eq!(format_date(date, "YYYY/MM/DD"), "2024/3/15");
        assert_eq!(format_date(date, "bogus"), "Mar 15, 2024");
        assert_eq!(format_date(None, "MMM D, YYYY"), "Invalid date");
    }

    #[test]
    fn time_ago_picks_largest_unit() {
        let now = clock();

        assert_eq!(time_ago(Some(now - Duration::hours(2)), now), "2 hours ago");
        assert_eq!(time_ago(Some(now - Duration::days(1)), now), "1 day ago");
        assert_eq!(time_ago(Some(now - Duration::weeks(3)), now), "3 weeks ago");
        assert_eq!(time_ago(Some(now - Duration::seconds(5)), now), "5 seconds ago");
    }

    #[test]
    fn time_ago_edge_cases() {
        let now = clock();

        assert_eq!(time_ago(Some(now), now), "just now");
        assert_eq!(time_ago(Some(now + Duration::hours(1)), now), "just now");
        assert_eq!(time_ago(None, now), "Invalid date");
    }

    #[test]
    fn truncate_respects_limit() {
        assert_eq!(truncate_text("short", 50), "short");
        assert_eq!(truncate_text("abcdefgh", 5), "abcde...");
        assert_eq!(truncate_text("", 10), "");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Luxury Supplier"), "LS");
        assert_eq!(initials("Hong Kong Dealer"), "HK");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn format_price_passthrough_and_grouping() {
        assert_eq!(format_price("$15,900"), "$15,900");
        assert_eq!(format_price("1960"), "$1,960");
        assert_eq!(format_price("12500"), "$12,500");
        assert_eq!(format_price("ask"), "ask");
    }
}
