//! Enter/exit state machine behind `CssTransition`.
//!
//! The machine never animates anything. It only tracks which phase an
//! element is in, and the class names handed to the stylesheet are derived
//! from that phase on every render.

/// Phase of a transitionable element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStage {
    /// Not shown. Absent from the output when unmounting on exit.
    Exited,
    Entering,
    /// Shown and at rest.
    Entered,
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    stage: TransitionStage,
    /// Bumped on every boundary crossing; a settle carrying an older value is ignored.
    generation: u64,
    /// The current or last entry was the initial `appear` run.
    appearing: bool,
    /// At least one enter/exit has completed since mount.
    settled_once: bool,
}

impl TransitionState {
    /// Initial state for an element whose predicate is `shown` at mount.
    pub fn mount(shown: bool, appear: bool) -> Self {
        let stage = match (shown, appear) {
            (true, true) => TransitionStage::Entering,
            (true, false) => TransitionStage::Entered,
            (false, _) => TransitionStage::Exited,
        };
        Self {
            stage,
            generation: 0,
            appearing: shown && appear,
            settled_once: false,
        }
    }

    pub fn stage(&self) -> TransitionStage {
        self.stage
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the window currently running, if any.
    pub fn pending(&self) -> Option<u64> {
        match self.stage {
            TransitionStage::Entering | TransitionStage::Exiting => Some(self.generation),
            TransitionStage::Entered | TransitionStage::Exited => None,
        }
    }

    /// Feed the latest value of the visibility predicate.
    ///
    /// Returns the generation of the newly opened window when `shown`
    /// crosses the boundary, `None` when it doesn't.
    pub fn set_shown(&mut self, shown: bool) -> Option<u64> {
        let next = match (self.stage, shown) {
            (TransitionStage::Exited | TransitionStage::Exiting, true) => TransitionStage::Entering,
            (TransitionStage::Entered | TransitionStage::Entering, false) => TransitionStage::Exiting,
            _ => return None,
        };
        self.stage = next;
        self.appearing = false;
        self.generation += 1;
        Some(self.generation)
    }

    /// Close the window opened as `generation`. Stale generations are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.stage = match self.stage {
            TransitionStage::Entering => TransitionStage::Entered,
            TransitionStage::Exiting => TransitionStage::Exited,
            _ => return false,
        };
        self.settled_once = true;
        true
    }

    /// Whether the element belongs in the render output.
    pub fn is_mounted(&self, unmount_on_exit: bool) -> bool {
        self.stage != TransitionStage::Exited || !unmount_on_exit
    }

    /// Classes for the current phase, each prefixed with `prefix`.
    pub fn class_names(&self, prefix: &str) -> String {
        let phases: &[&str] = match (self.stage, self.appearing, self.settled_once) {
            (TransitionStage::Entering, true, _) => &["appear", "appear-active"],
            (TransitionStage::Entering, false, _) => &["enter", "enter-active"],
            (TransitionStage::Entered, true, true) => &["appear-done", "enter-done"],
            (TransitionStage::Entered, false, true) => &["enter-done"],
            (TransitionStage::Exiting, _, _) => &["exit", "exit-active"],
            (TransitionStage::Exited, _, true) => &["exit-done"],
            (TransitionStage::Entered | TransitionStage::Exited, _, false) => &[],
        };
        phases
            .iter()
            .map(|phase| format!("{prefix}-{phase}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
