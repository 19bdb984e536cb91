//! Default stringifiers and rendering helpers

use std::fmt::Display;

/// Marker rendered by harnesses built without a stringifier
pub const PLACEHOLDER: &str = "<to-string function not specified>";

/// Render a value through its `Display` impl
#[inline]
#[must_use]
pub fn display_string<R: Display>(value: &R) -> String {
    value.to_string()
}

/// Render a slice of values joined by a separator
///
/// `join_display(&[1, 13, 15], ", ")` renders `1, 13, 15`.
#[must_use]
pub fn join_display<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_display_separates_items() {
        assert_eq!(join_display(&[1, 13, 15], ", "), "1, 13, 15");
    }

    #[test]
    fn join_display_edge_lengths() {
        assert_eq!(join_display::<i32>(&[], ", "), "");
        assert_eq!(join_display(&[7], ", "), "7");
    }

    #[test]
    fn display_string_uses_display() {
        assert_eq!(display_string(&13), "13");
    }
}
