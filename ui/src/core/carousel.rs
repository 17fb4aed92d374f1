//! Wrapping cursor over a fixed slide list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides. An empty list is treated as a single
    /// slide so the index invariant `index < len` always holds.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        self.index
    }

    /// Jump straight to `index`; out-of-range targets are ignored.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Where slide `index` sits relative to the active one, for transitions.
    pub fn offset_of(&self, index: usize) -> SlideOffset {
        use std::cmp::Ordering;
        match index.cmp(&self.index) {
            Ordering::Less => SlideOffset::Before,
            Ordering::Equal => SlideOffset::Active,
            Ordering::Greater => SlideOffset::After,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOffset {
    Before,
    Active,
    After,
}

impl SlideOffset {
    pub fn css_modifier(self) -> &'static str {
        match self {
            SlideOffset::Before => "slide--before",
            SlideOffset::Active => "slide--active",
            SlideOffset::After => "slide--after",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_modulo_length() {
        for len in 1..=6 {
            let mut carousel = Carousel::new(len);
            for n in 1..=20 {
                carousel.next();
                assert_eq!(carousel.index(), n % len);
            }
        }
    }

    #[test]
    fn prev_at_start_goes_to_last_slide() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.prev(), 4);
        assert_eq!(carousel.prev(), 3);
        carousel.jump(0);
        carousel.next();
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn jump_rejects_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.jump(2));
        assert!(!carousel.jump(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn empty_list_behaves_as_single_slide() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn offsets_follow_active_index() {
        let mut carousel = Carousel::new(3);
        carousel.jump(1);
        assert_eq!(carousel.offset_of(0), SlideOffset::Before);
        assert_eq!(carousel.offset_of(1), SlideOffset::Active);
        assert_eq!(carousel.offset_of(2), SlideOffset::After);
        assert!(carousel.is_active(1));
    }
}
