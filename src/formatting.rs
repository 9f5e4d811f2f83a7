//! Output formatting utilities

/// Format a price with two decimal places and a dollar sign
#[inline]
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Shorten UUID to first 8 characters for log readability
#[inline]
pub fn short_id(uuid: &uuid::Uuid) -> String {
    let s = uuid.to_string();
    s[..8].to_owned()
}
