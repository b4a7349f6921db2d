// Pager
//
// page changes are intents: each returns the page to switch to, or None when the intent
// is a no-op and nothing should be fetched or scrolled
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pager {
    current: u32,
    total: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Pager { current: 1, total: 1 }
    }
}

impl Pager {
    pub fn new(current: u32, total: u32) -> Self {
        Pager {
            current: current.max(1),
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn go_to(&self, page: u32) -> Option<u32> {
        if page < 1 || page > self.total || page == self.current {
            return None;
        }
        Some(page)
    }

    pub fn prev(&self) -> Option<u32> {
        if self.current <= 1 {
            return None;
        }
        Some(self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        if self.current >= self.total {
            return None;
        }
        Some(self.current + 1)
    }

    pub fn has_prev(&self) -> bool {
        self.prev().is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_is_a_noop_on_the_first_page() {
        assert_eq!(Pager::new(1, 4).prev(), None);
        assert_eq!(Pager::new(3, 4).prev(), Some(2));
    }

    #[test]
    fn next_is_a_noop_on_the_last_page() {
        assert_eq!(Pager::new(4, 4).next(), None);
        assert_eq!(Pager::new(1, 1).next(), None);
        assert_eq!(Pager::new(2, 4).next(), Some(3));
    }

    #[test]
    fn go_to_rejects_out_of_range_and_current() {
        let pager = Pager::new(2, 5);

        assert_eq!(pager.go_to(0), None);
        assert_eq!(pager.go_to(6), None);
        assert_eq!(pager.go_to(2), None);
        assert_eq!(pager.go_to(5), Some(5));
        assert_eq!(pager.go_to(1), Some(1));
    }

    #[test]
    fn zero_inputs_are_clamped_to_one() {
        let pager = Pager::new(0, 0);

        assert_eq!((pager.current(), pager.total()), (1, 1));
        assert_eq!(pager.pages().collect::<Vec<_>>(), vec![1]);
        assert!(!pager.has_prev() && !pager.has_next());
    }
}
