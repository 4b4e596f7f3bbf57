//! Points model: finishing position to point value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::race::ResultFlags;
use crate::types::Points;

/// Immutable position-to-points mapping.
///
/// The table is configuration, not logic: construct one per deployment (or
/// per test) and pass it into the facade. Positions outside the table score
/// zero; DNF and DSQ results score zero regardless of position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    table: BTreeMap<u32, Points>,
}

impl PointsTable {
    /// Builds a table from `(position, points)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (u32, Points)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// Points awarded for `position` under `flags`.
    ///
    /// Deterministic and total: unscored flags and unmapped positions both
    /// resolve to zero, never an error.
    pub fn points_for(&self, position: u32, flags: &ResultFlags) -> Points {
        if flags.unscored() {
            return 0;
        }
        self.table.get(&position).copied().unwrap_or(0)
    }

    /// Highest position that still scores points, if the table is non-empty.
    pub fn scored_range_end(&self) -> Option<u32> {
        self.table.keys().next_back().copied()
    }
}

impl Default for PointsTable {
    /// Modern Formula 1 top-10 table.
    fn default() -> Self {
        Self::new([
            (1, 25),
            (2, 18),
            (3, 15),
            (4, 12),
            (5, 10),
            (6, 8),
            (7, 6),
            (8, 4),
            (9, 2),
            (10, 1),
        ])
    }
}
