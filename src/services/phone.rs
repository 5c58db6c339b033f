/*
 * Responsibility
 * - Phone number → country calling region lookup
 * - The numbering-plan data lives in the phonenumber crate; this module only normalizes input
 *
 * Accepted shapes
 * - "+31 6 1234 5678", "0031612345678", "31612345678" (bare digits already carry the country code)
 * - Formatting characters (space, dash, dot, parentheses) are ignored
 */
use phonenumber::country;

/// Returns the ISO-3166 region the number's calling code resolves to,
/// or `None` when the input is not a recognizable international number.
pub fn calling_region(number: &str) -> Option<country::Id> {
    let international = normalize(number)?;
    let parsed = phonenumber::parse(None, &international).ok()?;
    parsed.country().id()
}

fn normalize(number: &str) -> Option<String> {
    let trimmed = number.trim();
    if trimmed
        .chars()
        .any(|c| !(c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '.' | '(' | ')')))
    {
        return None;
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let digits = match digits.strip_prefix("00") {
        Some(rest) if !trimmed.starts_with('+') => rest.to_string(),
        _ => digits,
    };

    if digits.is_empty() {
        return None;
    }
    Some(format!("+{digits}"))
}
