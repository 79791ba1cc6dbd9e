/// Rows rendered per panel. The reducer and the panels take the size as a
/// parameter; only the event loop and the renderer pin this constant.
pub const VIEWPORT_SIZE: usize = 15;

/// Computes the new window start so the selection stays visible, scrolling
/// by the minimum amount needed and never past either boundary.
pub fn viewport_start(
    selected_index: usize,
    total_items: usize,
    current_start: usize,
    viewport_size: usize,
) -> usize {
    if viewport_size == 0 {
        return 0;
    }

    let new_start = if selected_index < current_start {
        selected_index
    } else if selected_index >= current_start + viewport_size {
        selected_index - viewport_size + 1
    } else {
        current_start
    };

    // Never leave trailing blank rows when there are enough items to fill
    // the viewport.
    new_start.min(total_items.saturating_sub(viewport_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_down_to_reveal_selection_at_bottom() {
        assert_eq!(viewport_start(20, 50, 0, 15), 6);
    }

    #[test]
    fn scrolls_up_to_reveal_selection_at_top() {
        assert_eq!(viewport_start(3, 50, 10, 15), 3);
    }

    #[test]
    fn unchanged_when_selection_already_visible() {
        assert_eq!(viewport_start(12, 50, 10, 15), 10);
        assert_eq!(viewport_start(10, 50, 10, 15), 10);
        assert_eq!(viewport_start(24, 50, 10, 15), 10);
    }

    #[test]
    fn clamps_to_trailing_edge() {
        // A stale start past the end of a shrunken list gets pulled back.
        assert_eq!(viewport_start(0, 20, 30, 15), 0);
        assert_eq!(viewport_start(19, 20, 30, 15), 5);
    }

    #[test]
    fn short_lists_never_scroll() {
        for selected in 0..5 {
            assert_eq!(viewport_start(selected, 5, 0, 15), 0);
        }
    }

    #[test]
    fn zero_viewport_is_a_noop() {
        assert_eq!(viewport_start(7, 50, 3, 0), 0);
    }

    #[test]
    fn selection_stays_within_the_window() {
        for total in [0usize, 1, 14, 15, 16, 50, 200] {
            for viewport in [1usize, 5, 15] {
                for start in [0usize, 3, 14, 40, 250] {
                    for selected in (0..total.max(1)).step_by(7) {
                        let result = viewport_start(selected, total, start, viewport);
                        assert!(result <= total.saturating_sub(viewport));
                        if total >= viewport {
                            assert!(result <= selected);
                            assert!(selected <= result + viewport - 1);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn is_idempotent() {
        let first = viewport_start(33, 100, 5, 15);
        let second = viewport_start(33, 100, 5, 15);
        assert_eq!(first, second);
    }
}
