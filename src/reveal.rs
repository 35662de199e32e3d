/// One-shot entrance state of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    /// Folds a visibility sample into the state. Once revealed, stays revealed.
    pub fn observe(self, visible: bool) -> Reveal {
        match (self, visible) {
            (Reveal::Revealed, _) | (Reveal::Pending, true) => Reveal::Revealed,
            (Reveal::Pending, false) => Reveal::Pending,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Reveal::Revealed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

/// Transition delay for the `index`-th child of a staggered reveal.
pub fn stagger(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    base_ms + step_ms.saturating_mul(index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let state = Reveal::default();
        assert!(!state.is_revealed());

        let state = state.observe(false);
        assert_eq!(state, Reveal::Pending);

        let state = state.observe(true);
        assert_eq!(state, Reveal::Revealed);

        // scrolling back out never hides the section again
        let state = state.observe(false).observe(false);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 0, 100), 0);
        assert_eq!(stagger(1000, 3, 100), 1300);
        assert_eq!(stagger(400, 2, 200), 800);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(RevealOptions::default().threshold, 0.1);
    }
}
