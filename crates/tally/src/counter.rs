//! The counter state machine.
//!
//! A [`CounterState`] is the pair `(counter, error)`. It changes only through
//! [`CounterState::apply`] with one of the three [`Transition`]s, and each
//! application replaces both fields at once.
//!
//! ```text
//!               increment                    decrement (n > 0)
//!   Normal(n) ───────────▶ Normal(n+1)   Normal(n) ───────────▶ Normal(n-1)
//!   Normal(0) ──decrement──▶ Blocked(0) ──decrement──▶ Blocked(0)
//!   Blocked(0) ──increment──▶ Normal(1)
//!   any ──reset──▶ Normal(0)
//! ```

use std::fmt;

/// One of the three user-triggered state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Increment,
    Decrement,
    Reset,
}

impl Transition {
    /// All transitions in control order.
    pub const ALL: [Transition; 3] = [Transition::Increment, Transition::Decrement, Transition::Reset];

    /// Button label for this transition.
    pub fn label(self) -> &'static str {
        match self {
            Transition::Increment => "Increment",
            Transition::Decrement => "Decrement",
            Transition::Reset => "Reset",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happened when a transition was applied.
///
/// A rejection is not an error: it is reported through the state's error
/// flag, and this value only exists so callers can log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Decrement at zero; the error flag is now set.
    Rejected,
}

/// The full state of one counter widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterState {
    counter: u64,
    error: bool,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arbitrary state directly, for test setup.
    pub fn from_parts(counter: u64, error: bool) -> Self {
        Self { counter, error }
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Whether the last transition was a rejected decrement.
    pub fn error(&self) -> bool {
        self.error
    }

    /// Apply `transition`, replacing the whole state.
    pub fn apply(&mut self, transition: Transition) -> Outcome {
        let (next, outcome) = self.next(transition);
        *self = next;
        outcome
    }

    /// The state `transition` would produce, without applying it.
    pub fn next(&self, transition: Transition) -> (CounterState, Outcome) {
        match transition {
            Transition::Increment => (
                CounterState {
                    counter: self.counter.saturating_add(1),
                    error: false,
                },
                Outcome::Applied,
            ),
            Transition::Decrement => match self.counter.checked_sub(1) {
                Some(counter) => (
                    CounterState {
                        counter,
                        error: false,
                    },
                    Outcome::Applied,
                ),
                None => (
                    CounterState {
                        counter: self.counter,
                        error: true,
                    },
                    Outcome::Rejected,
                ),
            },
            Transition::Reset => (CounterState::default(), Outcome::Applied),
        }
    }

    pub fn increment(&mut self) -> Outcome {
        self.apply(Transition::Increment)
    }

    pub fn decrement(&mut self) -> Outcome {
        self.apply(Transition::Decrement)
    }

    pub fn reset(&mut self) -> Outcome {
        self.apply(Transition::Reset)
    }
}
