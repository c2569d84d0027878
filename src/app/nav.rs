//! Keyboard navigation over the section list (pure functions)

use crate::registry::{self, DEFAULT_SECTION, SECTIONS};

/// Step the active selection up or down the registry, clamped at the ends.
///
/// An unknown current identifier snaps back to the default section instead
/// of panicking; the only way to reach that state is direct injection.
pub fn step_selection(current: &str, delta: i32) -> &'static str {
    match registry::position(current) {
        Some(pos) => SECTIONS[apply_index_delta(pos, delta, SECTIONS.len())].id,
        None => DEFAULT_SECTION,
    }
}

/// Clamp an index after applying a delta
pub fn apply_index_delta(current: usize, delta: i32, len: usize) -> usize {
    if delta < 0 {
        current.saturating_sub((-delta) as usize)
    } else {
        (current + delta as usize).min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_through_registry_order() {
        assert_eq!(step_selection("overview", 1), "getting-started");
        assert_eq!(step_selection("getting-started", -1), "overview");
    }

    #[test]
    fn test_step_clamps_at_ends() {
        assert_eq!(step_selection("overview", -1), "overview");
        assert_eq!(step_selection("summary", 1), "summary");
    }

    #[test]
    fn test_zero_delta_is_identity() {
        for section in SECTIONS {
            assert_eq!(step_selection(section.id, 0), section.id);
        }
    }

    #[test]
    fn test_unknown_id_snaps_to_default() {
        assert_eq!(step_selection("nonexistent", 1), DEFAULT_SECTION);
    }

    #[test]
    fn test_apply_delta() {
        assert_eq!(apply_index_delta(5, -1, 10), 4);
        assert_eq!(apply_index_delta(0, -1, 10), 0); // Clamp at 0
        assert_eq!(apply_index_delta(8, 5, 10), 9); // Clamp at len-1
    }
}
