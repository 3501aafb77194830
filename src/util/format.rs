//! Display helpers for contract data.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Render a block timestamp (nanoseconds since the epoch) as UTC.
pub fn format_timestamp(nanos: i64) -> String {
    let secs = nanos.div_euclid(NANOS_PER_SEC);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let sub = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    chrono::DateTime::from_timestamp(secs, sub)
        .map_or_else(|| "unknown time".to_owned(), |dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}\u{2026}", text[..idx].trim_end()),
        None => text.to_owned(),
    }
}

/// `1 answer`, `3 answers`.
pub fn count_label(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}
