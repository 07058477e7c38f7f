//! Playable characters and their level tables.

use crate::stats::{StatKind, StatVector};

/// A named character with precomputed stats for every level it can reach.
///
/// Index 0 is the base stat line, index 1 the stats after one level-up, and
/// so on. A table may be empty, in which case the character meets no
/// requirement at all.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    stats: Vec<StatVector>,
}

impl Character {
    pub fn new(name: impl Into<String>, stats: Vec<StatVector>) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The whole level table, base level first.
    pub fn levels(&self) -> &[StatVector] {
        &self.stats
    }

    /// Number of entries in the level table.
    pub fn level_count(&self) -> usize {
        self.stats.len()
    }

    pub fn stats_at(&self, level: usize) -> Option<&StatVector> {
        self.stats.get(level)
    }

    /// Lowest level whose `stat` value reaches `required`.
    ///
    /// Scans upward from level 0. Returns `None` when no level in the table
    /// gets there.
    pub fn level_for(&self, stat: StatKind, required: u32) -> Option<usize> {
        self.stats
            .iter()
            .position(|level| level[stat] >= required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorcerer() -> Character {
        Character::new(
            "sorcerer",
            vec![
                StatVector::new(8, 12, 16, 9),
                StatVector::new(12, 16, 22, 14),
                StatVector::new(16, 20, 30, 18),
            ],
        )
    }

    #[test]
    fn level_for_returns_first_matching_level() {
        let c = sorcerer();

        assert_eq!(c.level_for(StatKind::Intelligence, 0), Some(0));
        assert_eq!(c.level_for(StatKind::Intelligence, 16), Some(0));
        assert_eq!(c.level_for(StatKind::Intelligence, 17), Some(1));
        assert_eq!(c.level_for(StatKind::Strength, 16), Some(2));
        assert_eq!(c.level_for(StatKind::Strength, 17), None);
    }

    #[test]
    fn empty_table_reaches_nothing() {
        let c = Character::new("ghost", Vec::new());

        assert_eq!(c.level_count(), 0);
        assert_eq!(c.stats_at(0), None);
        assert_eq!(c.level_for(StatKind::Faith, 0), None);
    }
}
