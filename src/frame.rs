use image::RgbImage;

/// Tick context handed to animators: current index and total count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub index: u32,
    pub total: u32,
}

impl Tick {
    pub fn new(index: u32, total: u32) -> Self {
        Self { index, total }
    }

    /// True once the tick is past the animation's midpoint
    pub fn is_past_midpoint(&self) -> bool {
        // tick > ticks / 2, evaluated without rounding
        u64::from(self.index) * 2 > u64::from(self.total)
    }
}

/// Finite iterator over `0..total` ticks
/// Use this in a loop: `for tick in Ticks::new(n) { ... }`
#[derive(Debug, Clone)]
pub struct Ticks {
    next: u32,
    total: u32,
}

impl Ticks {
    pub fn new(total: u32) -> Self {
        Self { next: 0, total }
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next >= self.total {
            return None;
        }
        let tick = Tick::new(self.next, self.total);
        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ticks {}

/// Rendered frame of an animation
#[derive(Debug, Clone)]
pub struct Frame {
    pub tick: Tick,
    pub image: RgbImage,
}

impl Frame {
    pub fn new(tick: Tick, image: RgbImage) -> Self {
        Self { tick, image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cover_range() {
        let ticks: Vec<u32> = Ticks::new(4).map(|t| t.index).collect();
        assert_eq!(ticks, vec![0, 1, 2, 3]);
        assert_eq!(Ticks::new(4).len(), 4);
    }

    #[test]
    fn zero_ticks_is_empty() {
        assert_eq!(Ticks::new(0).next(), None);
    }

    #[test]
    fn midpoint_even() {
        assert!(!Tick::new(5, 10).is_past_midpoint());
        assert!(Tick::new(6, 10).is_past_midpoint());
    }

    #[test]
    fn midpoint_odd() {
        // 11 / 2 = 5.5 exactly, 5 truncated: both flip at 6
        assert!(!Tick::new(5, 11).is_past_midpoint());
        assert!(Tick::new(6, 11).is_past_midpoint());
    }
}
