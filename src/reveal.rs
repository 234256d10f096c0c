use leptos::prelude::*;

/// One-shot appear state of an animated block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unseen,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection sample. Returns `true` only for the single
    /// `Unseen -> Revealed` transition; `Revealed` is terminal.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (Self::Unseen, true) => {
                *self = Self::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

/// How a block enters once revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMotion {
    /// Fade in while rising 30px.
    Rise,
    /// Fade in while growing from 90%.
    Zoom,
}

impl RevealMotion {
    pub fn classes(self, state: RevealState) -> &'static str {
        match (self, state) {
            (Self::Rise, RevealState::Unseen) => {
                "transition-all duration-700 ease-out opacity-0 translate-y-[30px]"
            }
            (Self::Rise, RevealState::Revealed) => {
                "transition-all duration-700 ease-out opacity-100 translate-y-0"
            }
            (Self::Zoom, RevealState::Unseen) => {
                "transition-all duration-700 ease-out opacity-0 scale-90"
            }
            (Self::Zoom, RevealState::Revealed) => {
                "transition-all duration-700 ease-out opacity-100 scale-100"
            }
        }
    }
}

/// Reactive reveal latch owned by a single block instance.
#[derive(Debug, Clone, Copy)]
pub struct RevealLatch {
    state: RwSignal<RevealState>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(RevealState::Unseen),
        }
    }

    /// Returns `true` when this sample revealed the block.
    pub fn observe(&self, intersecting: bool) -> bool {
        let Some(mut state) = self.state.try_get_untracked() else {
            return false;
        };
        if !state.observe(intersecting) {
            return false;
        }
        self.state.try_set(state).is_none()
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn is_revealed(&self) -> bool {
        self.state().is_revealed()
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new()
    }
}
