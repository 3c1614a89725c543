use std::fmt;

use crate::cycle::CycleIndex;
use crate::rng::RngState;

/// Candidate-set size above which no forecast is attempted.
pub const MAX_CANDIDATES: usize = 20;

/// The lever accepts a pull when the visible value is divisible by 4.
#[inline]
pub const fn lever_ready(value: u8) -> bool {
    value % 4 == 0
}

/// Outcome of reconciling the surviving candidates.
///
/// The three indeterminate outcomes are ordinary values, not errors, and
/// each is reported to the player distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    /// Every candidate projects the same wait: swing this many more times,
    /// then the lever pull succeeds.
    Swings(u32),
    /// No orbit position is consistent with the observed sounds.
    NoMatch,
    /// Too many candidates survive to project a trustworthy wait.
    TooManyCandidates,
    /// Surviving candidates project different waits.
    Ambiguous,
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Forecast::Swings(n) => write!(f, "Swing {n} more times"),
            Forecast::NoMatch => {
                write!(f, "No match, did you make a mistake inputting the sounds?")
            }
            Forecast::TooManyCandidates => {
                write!(f, "Too many candidates yet, keep swinging the sword")
            }
            Forecast::Ambiguous => {
                write!(f, "Candidates disagree, keep swinging the sword")
            }
        }
    }
}

/// Reconcile the matching positions for a sequence of `observed` sounds
/// into a single forecast.
///
/// Each candidate is projected independently: step past the observed
/// sounds plus the swing that triggers the gated check, then count further
/// steps until [`lever_ready`]. Only full agreement produces a count.
pub fn forecast(cycle: &CycleIndex, candidates: &[usize], observed: usize) -> Forecast {
    if candidates.is_empty() {
        return Forecast::NoMatch;
    }
    if candidates.len() > MAX_CANDIDATES {
        return Forecast::TooManyCandidates;
    }

    let mut agreed: Option<u32> = None;
    for &position in candidates {
        let wait = projected_wait(cycle, position, observed);
        match agreed {
            Some(w) if w != wait => return Forecast::Ambiguous,
            _ => agreed = Some(wait),
        }
    }
    match agreed {
        Some(w) => Forecast::Swings(w),
        None => Forecast::NoMatch,
    }
}

/// Swings remaining for one candidate. The orbit visits thousands of
/// lever-ready values, so the scan ends well within one lap.
fn projected_wait(cycle: &CycleIndex, position: usize, observed: usize) -> u32 {
    let mut state: RngState = cycle.state_at(position);
    for _ in 0..=observed {
        state = state.advance().0;
    }
    let mut wait = 0u32;
    while !lever_ready(state.value()) {
        state = state.advance().0;
        wait += 1;
    }
    wait
}
