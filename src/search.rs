use crate::classify::{PartitionTable, Pitch};
use crate::cycle::CycleIndex;
use crate::rng::RngState;

/// Scan the orbit for every start position consistent with `sounds`.
///
/// A candidate position `p` matches when stepping a working copy of the
/// snapshot at `p` once per observed sound yields, in order, values the
/// table classifies as that sound. Lookahead never wraps past the recorded
/// orbit: with `k` sounds only positions with `p + k < period` have room,
/// so a fresh scan over `period` candidates yields at most `period - k`
/// positions, in increasing order.
///
/// The returned iterator is lazy and finite; call `find_matches` again to
/// rescan from position 0.
pub fn find_matches<'a>(
    cycle: &'a CycleIndex,
    table: &'a PartitionTable,
    sounds: &'a [Pitch],
) -> Matches<'a> {
    Matches {
        cycle,
        table,
        sounds,
        next: 0,
    }
}

/// Lazy iterator over matching orbit positions. See [`find_matches`].
#[derive(Debug)]
pub struct Matches<'a> {
    cycle: &'a CycleIndex,
    table: &'a PartitionTable,
    sounds: &'a [Pitch],
    next: usize,
}

impl Matches<'_> {
    fn matches_at(&self, position: usize) -> bool {
        let mut state: RngState = self.cycle.state_at(position);
        for &sound in self.sounds {
            let (next, value) = state.advance();
            state = next;
            if self.table.classify(value) != sound {
                return false;
            }
        }
        true
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // Positions past this bound would need snapshots beyond the end of
        // the recorded orbit; they cannot match, and candidates are scanned
        // in increasing order, so the scan ends here.
        let last = self.cycle.period().checked_sub(self.sounds.len())?;
        while self.next < last {
            let position = self.next;
            self.next += 1;
            if self.matches_at(position) {
                return Some(position);
            }
        }
        None
    }
}
