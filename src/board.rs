//! Board geometry: placement kinds, the layout table, and addressing.
//!
//! Externally a column is addressed by a `(Placement, index)` pair;
//! internally the 16 columns live in one flat array. Both directions of
//! that mapping, and every capacity, derive from the single `LAYOUT`
//! table below rather than per-index logic.

use core::fmt;

/// The kind of column a board position belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Placement {
    /// One of the 8 main playing columns.
    Cascade,
    /// One of the 4 single-card holding slots.
    Cell,
    /// One of the 4 target columns built up Ace to King.
    Foundation,
}

/// One row of the board configuration: how many columns a placement kind
/// has and how many cards each of those columns can hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacementSpec {
    pub placement: Placement,
    pub count: usize,
    pub capacity: usize,
}

/// The board layout as data.
///
/// Cascade capacity: a cascade is dealt at most 7 cards, and in the
/// worst case 12 more stack alternately on a dealt King, so 19. Cells
/// hold a single card; foundations a full suit run.
///
/// The table order is also the flat-array order: cascades at 0..8,
/// cells at 8..12, foundations at 12..16.
pub const LAYOUT: [PlacementSpec; 3] = [
    PlacementSpec {
        placement: Placement::Cascade,
        count: 8,
        capacity: 19,
    },
    PlacementSpec {
        placement: Placement::Cell,
        count: 4,
        capacity: 1,
    },
    PlacementSpec {
        placement: Placement::Foundation,
        count: 4,
        capacity: 13,
    },
];

/// Total number of columns on the board.
pub const COLUMN_COUNT: usize = 16;

impl Placement {
    fn spec(self) -> &'static PlacementSpec {
        match self {
            Placement::Cascade => &LAYOUT[0],
            Placement::Cell => &LAYOUT[1],
            Placement::Foundation => &LAYOUT[2],
        }
    }

    /// Number of columns of this kind on the board.
    #[inline]
    pub fn count(self) -> usize {
        self.spec().count
    }

    /// Capacity of each column of this kind.
    #[inline]
    pub fn capacity(self) -> usize {
        self.spec().capacity
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Placement::Cascade => "cascade",
            Placement::Cell => "cell",
            Placement::Foundation => "foundation",
        };
        f.write_str(name)
    }
}

/// True iff `index` is in range for columns of kind `placement`.
#[inline]
pub fn is_valid_placement(placement: Placement, index: usize) -> bool {
    index < placement.count()
}

/// Flat-array index of a `(placement, index)` pair.
///
/// Assumes the pair is valid; callers go through `is_valid_placement`
/// first.
pub(crate) fn flat_index(placement: Placement, index: usize) -> usize {
    let mut offset = 0;
    for spec in LAYOUT.iter() {
        if spec.placement == placement {
            return offset + index;
        }
        offset += spec.count;
    }
    unreachable!("every placement kind appears in LAYOUT");
}

/// Inverse of [`flat_index`]: the `(placement, index)` pair stored at a
/// flat-array slot.
///
/// # Panics
///
/// Panics if `flat >= COLUMN_COUNT`.
pub(crate) fn position_at(flat: usize) -> (Placement, usize) {
    let mut offset = 0;
    for spec in LAYOUT.iter() {
        if flat < offset + spec.count {
            return (spec.placement, flat - offset);
        }
        offset += spec.count;
    }
    panic!("flat column index {flat} out of range");
}

/// Every board position in the fixed scan order used by stalemate
/// detection: Cascade 7..0, then Cell 3..0, then Foundation 3..0.
///
/// The order matters only for determinism, not for semantics.
pub fn all_positions() -> [(Placement, usize); COLUMN_COUNT] {
    let mut positions = [(Placement::Cascade, 0usize); COLUMN_COUNT];
    let mut n = 0;
    for spec in LAYOUT.iter() {
        for index in (0..spec.count).rev() {
            positions[n] = (spec.placement, index);
            n += 1;
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_table_matches_the_board() {
        assert_eq!(Placement::Cascade.count(), 8);
        assert_eq!(Placement::Cascade.capacity(), 19);
        assert_eq!(Placement::Cell.count(), 4);
        assert_eq!(Placement::Cell.capacity(), 1);
        assert_eq!(Placement::Foundation.count(), 4);
        assert_eq!(Placement::Foundation.capacity(), 13);

        let total: usize = LAYOUT.iter().map(|spec| spec.count).sum();
        assert_eq!(total, COLUMN_COUNT);
    }

    #[test]
    fn placement_ranges() {
        for i in 0..8 {
            assert!(is_valid_placement(Placement::Cascade, i));
        }
        assert!(!is_valid_placement(Placement::Cascade, 8));

        for p in [Placement::Cell, Placement::Foundation] {
            for i in 0..4 {
                assert!(is_valid_placement(p, i));
            }
            assert!(!is_valid_placement(p, 4));
        }
    }

    #[test]
    fn flat_index_and_position_at_are_inverse() {
        for flat in 0..COLUMN_COUNT {
            let (p, i) = position_at(flat);
            assert!(is_valid_placement(p, i));
            assert_eq!(flat_index(p, i), flat);
        }

        assert_eq!(flat_index(Placement::Cascade, 0), 0);
        assert_eq!(flat_index(Placement::Cell, 0), 8);
        assert_eq!(flat_index(Placement::Foundation, 0), 12);
    }

    #[test]
    fn scan_order_is_cascades_then_cells_then_foundations_descending() {
        let positions = all_positions();
        assert_eq!(positions.len(), COLUMN_COUNT);

        assert_eq!(positions[0], (Placement::Cascade, 7));
        assert_eq!(positions[7], (Placement::Cascade, 0));
        assert_eq!(positions[8], (Placement::Cell, 3));
        assert_eq!(positions[11], (Placement::Cell, 0));
        assert_eq!(positions[12], (Placement::Foundation, 3));
        assert_eq!(positions[15], (Placement::Foundation, 0));
    }
}
