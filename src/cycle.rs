use hashbrown::HashSet;

use crate::rng::RngState;

/// The generator's full orbit from [`RngState::SEED`], one snapshot per
/// position. Position `p` holds the state *before* the `p`-th step, so
/// `state_at(0)` is the seed itself.
///
/// Built once per process and read-only afterwards. The orbit must be a
/// single closed loop: stepping the last snapshot lands back on the seed.
#[derive(Debug)]
pub struct CycleIndex {
    states: Vec<RngState>,
}

impl CycleIndex {
    /// Enumerate the orbit by repeated `advance` from the seed, stopping
    /// the instant a produced state has been seen before.
    ///
    /// A repeat that is not the seed means the orbit has a tail, which the
    /// generator model does not allow; that is reported as an error and
    /// callers must treat it as fatal rather than truncate the orbit.
    pub fn build() -> Result<Self, String> {
        let mut states: Vec<RngState> = Vec::with_capacity(1 << 15);
        let mut seen: HashSet<RngState> = HashSet::with_capacity(1 << 15);

        let mut state = RngState::SEED;
        seen.insert(state);
        loop {
            states.push(state);
            let (next, _) = state.advance();
            if next == RngState::SEED {
                break;
            }
            if !seen.insert(next) {
                let (r1, r2) = next.registers();
                return Err(format!(
                    "orbit revisited state (r1=0x{r1:02x}, r2=0x{r2:02x}) before returning to the seed"
                ));
            }
            state = next;
        }

        Ok(Self { states })
    }

    /// Number of states in the orbit.
    #[inline]
    pub fn period(&self) -> usize {
        self.states.len()
    }

    /// Snapshot at `position` (`0 <= position < period`). Snapshots are
    /// plain values; callers advance their own copies freely.
    #[inline]
    pub fn state_at(&self, position: usize) -> RngState {
        self.states[position]
    }
}
