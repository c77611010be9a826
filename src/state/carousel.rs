/// Cyclic index over a fixed-length card list. Both the rotation timer and
/// manual navigation go through the same transitions, last write wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn select(self, index: usize) -> Self {
        Self {
            index: index % self.len,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_back_to_start_after_full_cycle() {
        for len in 1..=7 {
            let mut state = CarouselState::new(len);
            for _ in 0..len {
                state = state.next();
            }
            assert_eq!(state.index(), 0, "len {}", len);
        }
    }

    #[test]
    fn prev_from_start_lands_on_last() {
        for len in 1..=7 {
            let state = CarouselState::new(len).prev();
            assert_eq!(state.index(), len - 1, "len {}", len);
        }
    }

    #[test]
    fn index_stays_in_range_under_mixed_navigation() {
        let mut state = CarouselState::new(4);
        for step in 0..50 {
            state = match step % 3 {
                0 => state.next(),
                1 => state.prev(),
                _ => state.select(step),
            };
            assert!(state.index() < 4);
        }
    }

    #[test]
    fn select_picks_the_requested_dot() {
        let state = CarouselState::new(5).select(3);
        assert_eq!(state.index(), 3);
    }
}
