use super::cell::Cell;
use std::sync::OnceLock;

/// The number of distinct values in the alive bit and the 4-bit neighbor count
const PERMUTATIONS: usize = 1 << 5;
type LifeRuleTable = [bool; PERMUTATIONS];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
pub(super) fn get_rule_table() -> &'static LifeRuleTable {
    static CELL: OnceLock<LifeRuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Whether a cell with the given packed state is alive in the next generation
#[inline]
pub(super) fn next_alive(cell: Cell) -> bool {
    get_rule_table()[(cell.bits() & Cell::STATE_MASK) as usize]
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed by the low five bits of a packed cell: the alive flag
/// in bit 0 and the neighbor count in bits 1-4.
///
/// Returns whether the cell should be alive or dead in the next generation
pub(super) fn generate_rule_table() -> LifeRuleTable {
    let mut table = [false; PERMUTATIONS];
    for (i, entry) in table.iter_mut().enumerate() {
        let alive = i & Cell::ALIVE as usize != 0;
        let neighbors = i >> Cell::NEIGHBOR_SHIFT;
        *entry = matches!((alive, neighbors), (true, 2) | (_, 3));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(alive: bool, neighbors: u8) -> Cell {
        Cell::from_bits(u8::from(alive) | (neighbors << Cell::NEIGHBOR_SHIFT))
    }

    #[test]
    fn rules_match_conway_life() {
        assert!(next_alive(packed(true, 2)));
        assert!(next_alive(packed(true, 3)));
        assert!(next_alive(packed(false, 3)));

        assert!(!next_alive(packed(true, 0)));
        assert!(!next_alive(packed(true, 1)));
        assert!(!next_alive(packed(true, 4)));
        assert!(!next_alive(packed(false, 2)));
        assert!(!next_alive(packed(false, 4)));
        assert!(!next_alive(packed(true, 8)));
        assert!(!next_alive(packed(false, 8)));
    }

    #[test]
    fn only_births_and_survivors_are_alive() {
        let table = generate_rule_table();
        let alive_entries: Vec<usize> = (0..PERMUTATIONS).filter(|&i| table[i]).collect();

        // alive with 2, dead with 3, alive with 3
        assert_eq!(alive_entries, vec![0b0_0101, 0b0_0110, 0b0_0111]);
    }
}
