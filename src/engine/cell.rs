/// A single packed cell
///
/// ```text
/// 7 6 5 4 3 2 1 0
/// └─┬─┘ └──┬──┘ └─ alive flag
///   │      └────── live neighbor count (0-8)
///   └───────────── unused, always 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    pub(crate) const ALIVE: u8 = 0b0000_0001;
    pub(crate) const NEIGHBOR_SHIFT: u32 = 1;
    pub(crate) const NEIGHBOR_MASK: u8 = 0b0001_1110;
    /// Every bit that carries state; the rest must stay clear
    pub(crate) const STATE_MASK: u8 = Self::ALIVE | Self::NEIGHBOR_MASK;
    /// One neighbor, already shifted into the count field
    pub(crate) const ONE_NEIGHBOR: u8 = 1 << Self::NEIGHBOR_SHIFT;

    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self.0 & Self::ALIVE != 0
    }
    /// Number of live cells among the 8 toroidal neighbors
    #[inline]
    pub fn neighbors(self) -> u8 {
        (self.0 & Self::NEIGHBOR_MASK) >> Self::NEIGHBOR_SHIFT
    }

    /// Dead with no live neighbors; such a cell cannot change next generation
    #[inline]
    pub fn is_quiescent(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_decode_independently() {
        let cell = Cell::from_bits(0b0001_0001);

        assert!(cell.is_alive());
        assert_eq!(cell.neighbors(), 8);

        let cell = Cell::from_bits(0b0000_0110);
        assert!(!cell.is_alive());
        assert_eq!(cell.neighbors(), 3);
    }

    #[test]
    fn only_zero_is_quiescent() {
        assert!(Cell::default().is_quiescent());
        assert!(!Cell::from_bits(Cell::ALIVE).is_quiescent());
        assert!(!Cell::from_bits(Cell::ONE_NEIGHBOR).is_quiescent());
    }
}
