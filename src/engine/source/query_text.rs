use crate::engine::core::filter::InstantRange;
use crate::engine::types::INSTANT_FORMAT;

/// Relation a query reads from: the last dot-separated segment of its first token.
///
/// `aerofleet.analytics.shift_sales_v` and `shift_sales_v WHERE ...` both name
/// `shift_sales_v`.
pub fn relation_name(text: &str) -> &str {
    let first = text.split_whitespace().next().unwrap_or("");
    first.rsplit('.').next().unwrap_or(first)
}

/// Substitute the `{start}` and `{end}` placeholders of a query template.
pub fn bind_range(template: &str, range: &InstantRange) -> String {
    template
        .replace("{start}", &range.lower().format(INSTANT_FORMAT).to_string())
        .replace("{end}", &range.upper().format(INSTANT_FORMAT).to_string())
}
