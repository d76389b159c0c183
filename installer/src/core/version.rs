//! Dotted version comparison for prerequisite checks.

use std::cmp::Ordering;

/// Numeric components of a version such as `2.7.4` or `1.9.3-p0`.
///
/// Parsing stops at the first component that does not start with a digit;
/// trailing qualifiers like `-p0` are ignored.
pub fn parse_version(raw: &str) -> Vec<u32> {
    let mut parts = Vec::new();
    for piece in raw.trim().split('.') {
        let digits: String = piece.chars().take_while(char::is_ascii_digit).collect();
        match digits.parse::<u32>() {
            Ok(n) => parts.push(n),
            Err(_) => break,
        }
        if digits.len() != piece.len() {
            break;
        }
    }
    parts
}

/// Compare two versions component by component, missing components count as 0.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let (a, b) = (parse_version(a), parse_version(b));
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// True when `found` is at least `minimum`. Unparseable versions never qualify.
pub fn meets_minimum(found: &str, minimum: &str) -> bool {
    !parse_version(found).is_empty() && compare_versions(found, minimum) != Ordering::Less
}
