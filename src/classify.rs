use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Audible pitch of a sword swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Pitch {
    Low,
    Mid,
    High,
}

impl Pitch {
    /// Single-letter form used everywhere the sequence is shown or typed.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Pitch::Low => 'L',
            Pitch::Mid => 'M',
            Pitch::High => 'H',
        }
    }

    /// Map one input character to a pitch. Accepts the letter in either
    /// case and the numeric aliases `1`/`2`/`3`; anything else is `None`
    /// and interactive callers ignore the character.
    #[inline]
    pub fn from_key(c: char) -> Option<Pitch> {
        match c {
            'L' | 'l' | '1' => Some(Pitch::Low),
            'M' | 'm' | '2' => Some(Pitch::Mid),
            'H' | 'h' | '3' => Some(Pitch::High),
            _ => None,
        }
    }
}

/// Render a pitch sequence as its letter string.
pub fn letters(sounds: &[Pitch]) -> String {
    sounds.iter().map(|p| p.letter()).collect()
}

/// Number of distinguishable low-order output values; one table bucket per
/// value.
pub const TABLE_LEN: usize = 8;

/// Assignment of each low-order generator output value to a pitch.
///
/// The array is indexed by the low three bits of the visible value, so
/// every value belongs to exactly one bucket. A table parses from /
/// renders to its 8-letter string form (e.g. `"MHLMMHMM"`) and can be
/// swapped per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartitionTable {
    buckets: [Pitch; TABLE_LEN],
}

/// How the game classifies sword-swing sounds: measured table for the
/// swing action. Other observable actions would carry their own table.
pub const SWING_TABLE: PartitionTable = PartitionTable {
    buckets: [
        Pitch::Mid,
        Pitch::High,
        Pitch::Low,
        Pitch::Mid,
        Pitch::Mid,
        Pitch::High,
        Pitch::Mid,
        Pitch::Mid,
    ],
};

impl PartitionTable {
    /// Pitch for a visible generator value. Only the low three bits
    /// participate.
    #[inline]
    pub fn classify(&self, value: u8) -> Pitch {
        self.buckets[(value & 0x7) as usize]
    }

    /// The bucket array in index order.
    #[inline]
    pub fn buckets(&self) -> &[Pitch; TABLE_LEN] {
        &self.buckets
    }
}

impl FromStr for PartitionTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != TABLE_LEN {
            return Err(format!(
                "partition table '{s}' has {} letters, expected {TABLE_LEN}",
                chars.len()
            ));
        }
        let mut buckets = [Pitch::Mid; TABLE_LEN];
        for (i, c) in chars.into_iter().enumerate() {
            buckets[i] = Pitch::from_key(c)
                .ok_or_else(|| format!("partition table '{s}' has invalid letter '{c}' at index {i}"))?;
        }
        Ok(Self { buckets })
    }
}

impl fmt::Display for PartitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.buckets {
            write!(f, "{}", p.letter())?;
        }
        Ok(())
    }
}

impl TryFrom<String> for PartitionTable {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PartitionTable> for String {
    fn from(table: PartitionTable) -> String {
        table.to_string()
    }
}
