/// The scroll container holding the full-viewport sections.
pub trait ScrollSurface {
    fn viewport_height(&self) -> f64;
    fn scroll_offset(&self) -> f64;
    /// Starts a smooth scroll towards `top`. Does not wait for arrival.
    fn request_scroll(&self, top: f64);
}

/// Nearest section to the current scroll position, rounding half up and
/// clamped to `[0, section_count)`. Elastic overscroll past either end maps
/// to the first or last section.
pub fn compute_active_index(scroll_offset: f64, viewport_height: f64, section_count: usize) -> usize {
    if section_count == 0 || viewport_height.is_nan() || viewport_height <= 0.0 {
        return 0;
    }
    if scroll_offset.is_nan() || scroll_offset <= 0.0 {
        return 0;
    }
    let nearest = (scroll_offset / viewport_height + 0.5).floor();
    // float-to-int casts saturate, so +inf lands on the last section
    (nearest as usize).min(section_count - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionScroller {
    section_count: usize,
}

impl SectionScroller {
    pub fn new(section_count: usize) -> Self {
        Self { section_count }
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    pub fn active_index<S: ScrollSurface>(&self, surface: &S) -> usize {
        compute_active_index(
            surface.scroll_offset(),
            surface.viewport_height(),
            self.section_count,
        )
    }

    /// Requests a scroll to the top of section `index` and returns the
    /// requested offset. `None` when there are no sections.
    pub fn scroll_to<S: ScrollSurface>(&self, surface: &S, index: usize) -> Option<f64> {
        if self.section_count == 0 {
            return None;
        }
        if index >= self.section_count {
            log::debug!(
                "section {index} out of range, clamping to {}",
                self.section_count - 1
            );
        }
        let index = index.min(self.section_count - 1);
        let target = index as f64 * surface.viewport_height();
        log::debug!("jumping to section {index} at {target}px");
        surface.request_scroll(target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeContainer {
        height: f64,
        offset: f64,
        requests: RefCell<Vec<f64>>,
    }

    impl FakeContainer {
        fn new(height: f64, offset: f64) -> Self {
            Self {
                height,
                offset,
                requests: RefCell::new(vec![]),
            }
        }
    }

    impl ScrollSurface for FakeContainer {
        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn request_scroll(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_nearest_section() {
        assert_eq!(compute_active_index(750.0, 800.0, 3), 1);
        assert_eq!(compute_active_index(0.0, 800.0, 3), 0);
        assert_eq!(compute_active_index(399.0, 800.0, 3), 0);
        assert_eq!(compute_active_index(1600.0, 800.0, 3), 2);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(compute_active_index(400.0, 800.0, 3), 1);
        assert_eq!(compute_active_index(1200.0, 800.0, 3), 2);
    }

    #[test]
    fn test_clamps_overscroll() {
        assert_eq!(compute_active_index(-120.0, 800.0, 3), 0);
        assert_eq!(compute_active_index(5000.0, 800.0, 3), 2);
        assert_eq!(compute_active_index(f64::INFINITY, 800.0, 3), 2);
        assert_eq!(compute_active_index(f64::NAN, 800.0, 3), 0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_active_index(750.0, 800.0, 0), 0);
        assert_eq!(compute_active_index(750.0, 0.0, 3), 0);
        assert_eq!(compute_active_index(750.0, -10.0, 3), 0);
    }

    #[test]
    fn test_idempotent_and_monotonic() {
        let height = 800.0;
        let mut previous = 0;
        let mut offset = 0.0;
        while offset <= 9.0 * height {
            let first = compute_active_index(offset, height, 9);
            let second = compute_active_index(offset, height, 9);
            assert_eq!(first, second);
            assert!(first >= previous, "index went backwards at {offset}");
            previous = first;
            offset += 37.0;
        }
        assert_eq!(previous, 8);
    }

    #[test]
    fn test_scroll_to_requests_section_top() {
        let container = FakeContainer::new(800.0, 0.0);
        let scroller = SectionScroller::new(3);
        for index in 0..3 {
            assert_eq!(scroller.scroll_to(&container, index), Some(index as f64 * 800.0));
        }
        assert_eq!(*container.requests.borrow(), vec![0.0, 800.0, 1600.0]);
    }

    #[test]
    fn test_scroll_to_out_of_range_clamps() {
        let container = FakeContainer::new(800.0, 0.0);
        let scroller = SectionScroller::new(3);
        assert_eq!(scroller.scroll_to(&container, 7), Some(1600.0));

        let empty = SectionScroller::new(0);
        assert_eq!(empty.scroll_to(&container, 0), None);
        assert_eq!(container.requests.borrow().len(), 1);
    }

    #[test]
    fn test_active_index_reads_surface() {
        let container = FakeContainer::new(800.0, 750.0);
        assert_eq!(SectionScroller::new(3).active_index(&container), 1);
    }
}
