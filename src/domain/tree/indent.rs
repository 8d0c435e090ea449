use std::collections::BTreeMap;

use super::FlattenedRow;

pub const LEVEL_PROJECT: &str = "Проект";
pub const LEVEL_DIRECTION: &str = "Направление";
pub const LEVEL_OBJECT: &str = "Объект";
pub const LEVEL_SYSTEM: &str = "Система";
pub const LEVEL_WORK_PACKAGE: &str = "Пакет работ";

pub const DEFAULT_INDENT_UNIT: u16 = 2;

/// Maps a level label to an indent rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentTable {
    ranks: BTreeMap<String, u16>,
}

impl Default for IndentTable {
    fn default() -> Self {
        let ranks = [
            (LEVEL_PROJECT, 0),
            (LEVEL_DIRECTION, 1),
            (LEVEL_OBJECT, 2),
            (LEVEL_SYSTEM, 3),
            (LEVEL_WORK_PACKAGE, 4),
        ]
        .into_iter()
        .map(|(level, rank)| (level.to_string(), rank))
        .collect();
        Self { ranks }
    }
}

impl IndentTable {
    /// Default table with `overrides` layered on top.
    pub fn with_overrides(overrides: &BTreeMap<String, u16>) -> Self {
        let mut table = Self::default();
        for (level, rank) in overrides {
            table.ranks.insert(level.clone(), *rank);
        }
        table
    }

    pub fn rank(&self, level: &str) -> Option<u16> {
        self.ranks.get(level).copied()
    }

    /// Indent rank of a row. Levels missing from the table indent by depth.
    pub fn rank_for(&self, row: &FlattenedRow<'_>) -> u16 {
        self.rank(&row.node.level)
            .unwrap_or_else(|| u16::try_from(row.depth).unwrap_or(u16::MAX))
    }

    /// Indent width in terminal cells.
    pub fn cells_for(&self, row: &FlattenedRow<'_>, unit: u16) -> u16 {
        self.rank_for(row).saturating_mul(unit)
    }
}
