//! Popup content for completed stops.

use serde::{Deserialize, Serialize};

use crate::manifest::Stop;

const GIFT: &str = "🎁";

/// Digit grouping used when displaying delivery counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Groups of three: `1,000,000`.
    #[default]
    Thousands,
    /// Lakh/crore grouping as in `en-IN`: `10,00,000`.
    Indian,
}

impl DigitGrouping {
    /// Whether a separator goes before a digit with `remaining` digits left
    /// (itself included).
    fn separates(self, remaining: usize) -> bool {
        match self {
            DigitGrouping::Thousands => remaining % 3 == 0,
            DigitGrouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }
}

/// Formats a count as a grouped integer.
pub fn format_count(value: u64, grouping: DigitGrouping) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && grouping.separates(len - index) {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    strip_decimal_fragment(&grouped).to_string()
}

/// Drops a trailing all-zero decimal fragment such as `.00`.
pub fn strip_decimal_fragment(text: &str) -> &str {
    match text.rsplit_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|ch| ch == '0') => whole,
        _ => text,
    }
}

/// Labelled delivery summary shown when a stop marker is opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub city: String,
    pub region: String,
    pub presents_delivered: u64,
    /// `presents_delivered` after digit grouping.
    pub presents: String,
}

impl Popup {
    pub fn for_stop(stop: &Stop, grouping: DigitGrouping) -> Self {
        Self {
            city: stop.city.clone(),
            region: stop.region.clone(),
            presents_delivered: stop.presents_delivered,
            presents: format_count(stop.presents_delivered, grouping),
        }
    }

    pub fn title(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }

    pub fn text(&self) -> String {
        format!("{}\n{} {}", self.title(), self.presents, GIFT)
    }

    pub fn html(&self) -> String {
        format!(
            "<div class=\"text-center\"><strong>{}, {}</strong><br /><hr />{} {}</div>",
            escape_html(&self.city),
            escape_html(&self.region),
            self.presents,
            GIFT
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
