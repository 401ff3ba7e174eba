//! Terminal width detection.

/// Width assumed when the output is not a terminal or its size is unknown.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Gets the current terminal width in columns.
///
/// Falls back to [`DEFAULT_TERMINAL_WIDTH`] when stdout is not a terminal or
/// reports a zero width. The value is not cached, so a resize between calls
/// is picked up.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_width_is_positive() {
        assert!(terminal_width() > 0);
    }

    #[test]
    fn terminal_width_is_stable_between_calls() {
        assert_eq!(terminal_width(), terminal_width());
    }
}
