//! Shared cyclic-index helpers for row and option navigation.

use crate::style_options::OptionValue;

/// Compute the next index in a circular list; only the sign of `direction`
/// matters.
#[must_use]
pub(crate) fn cycle_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let step = match direction {
        d if d < 0 => len - 1,
        d if d > 0 => 1,
        _ => 0,
    };
    (current.min(len - 1) + step) % len
}

/// Pick the neighbouring value in a circular option set.
#[must_use]
pub(crate) fn cycle_option(
    options: &'static [OptionValue],
    current: &OptionValue,
    direction: i32,
) -> &'static OptionValue {
    let current_idx = options
        .iter()
        .position(|option| option == current)
        .unwrap_or(0);
    let next_idx = cycle_index(current_idx, options.len(), direction);
    &options[next_idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_options::{CONTENT_WIDTH_OPTIONS, FONT_SIZE_OPTIONS};

    #[test]
    fn cycle_index_wraps_forward_and_backward() {
        assert_eq!(cycle_index(0, 3, 1), 1);
        assert_eq!(cycle_index(2, 3, 1), 0);
        assert_eq!(cycle_index(0, 3, -1), 2);
    }

    #[test]
    fn cycle_index_handles_empty() {
        assert_eq!(cycle_index(4, 0, 1), 0);
    }

    #[test]
    fn cycle_option_walks_the_set_both_ways() {
        let start = &FONT_SIZE_OPTIONS[1];
        assert_eq!(cycle_option(&FONT_SIZE_OPTIONS, start, 1), &FONT_SIZE_OPTIONS[2]);
        assert_eq!(cycle_option(&FONT_SIZE_OPTIONS, start, -1), &FONT_SIZE_OPTIONS[0]);
    }

    #[test]
    fn cycle_option_wraps_a_two_entry_set() {
        let wide = &CONTENT_WIDTH_OPTIONS[0];
        let narrow = cycle_option(&CONTENT_WIDTH_OPTIONS, wide, 1);
        assert_eq!(narrow, &CONTENT_WIDTH_OPTIONS[1]);
        assert_eq!(cycle_option(&CONTENT_WIDTH_OPTIONS, narrow, 1), wide);
    }
}
