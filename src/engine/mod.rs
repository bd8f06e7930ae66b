mod cell;
mod rule;
mod window;

pub use self::cell::Cell;
pub use self::window::GridWindow;
use crate::Pos2;
use rand::Rng;

/// Offsets of the 8 neighbors around a cell
const NEIGHBOR_OFFSETS: [Pos2; 8] = [
    Pos2 { x: -1, y: -1 },
    Pos2 { x: 0, y: -1 },
    Pos2 { x: 1, y: -1 },
    Pos2 { x: -1, y: 0 },
    Pos2 { x: 1, y: 0 },
    Pos2 { x: -1, y: 1 },
    Pos2 { x: 0, y: 1 },
    Pos2 { x: 1, y: 1 },
];

/// Cells that changed state during a single [`Grid::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transitions {
    pub births: usize,
    pub deaths: usize,
}

/// A square, toroidal Game of Life grid
///
/// Every cell is a packed byte (see [`Cell`]) holding its alive flag and the
/// number of live neighbors it has. The neighbor counts are kept in sync on
/// every birth and death, so a generation never has to recount them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
    generation: u64,
}

impl Grid {
    /// Largest side length whose coordinates fit in a [`Pos2`]
    pub const MAX_SIZE: usize = 1 << 15;

    /// Creates a `size × size` grid of dead cells
    pub fn new(size: usize) -> Self {
        debug_assert!(size <= Self::MAX_SIZE, "grid size {size} is too large");
        Self {
            size,
            cells: vec![0; size * size],
            generation: 0,
        }
    }

    /// Clears the grid and fills every cell alive or dead with equal odds
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// [`Grid::randomize`] with a caller supplied source of randomness
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        for index in 0..self.cells.len() {
            if rng.random_bool(0.5) {
                self.birth(index);
            }
        }
        tracing::debug!(size = self.size, alive = self.alive_count(), "randomized grid");
    }

    /// Kills every cell and resets the generation counter
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.generation = 0;
    }

    /// Advances the simulation by one generation
    ///
    /// The rule is evaluated against a snapshot of the grid as it was before
    /// the step, while births and deaths are applied to the live cells so that
    /// neighbor counts are ready for the next generation.
    pub fn step(&mut self) -> Transitions {
        let mut transitions = Transitions::default();
        let snapshot = self.cells.clone();
        for (index, &bits) in snapshot.iter().enumerate() {
            let cell = Cell::from_bits(bits);
            if cell.is_quiescent() {
                continue;
            }

            match (cell.is_alive(), rule::next_alive(cell)) {
                (false, true) => {
                    self.birth(index);
                    transitions.births += 1;
                }
                (true, false) => {
                    self.kill(index);
                    transitions.deaths += 1;
                }
                _ => {}
            }
        }
        self.generation += 1;

        // verify integrity of next generation
        debug_assert!(
            self.cells.iter().all(|&bits| bits & !Cell::STATE_MASK == 0),
            "unused cell bits are set"
        );
        transitions
    }

    /// Sets the state of a single cell, updating the counts of its neighbors
    pub fn set_alive(&mut self, index: usize, alive: bool) {
        match (self.is_alive(index), alive) {
            (false, true) => self.birth(index),
            (true, false) => self.kill(index),
            _ => {}
        }
    }

    #[inline]
    pub fn is_alive(&self, index: usize) -> bool {
        self.cell(index).is_alive()
    }

    /// Number of live neighbors around the cell at `index`
    #[inline]
    pub fn neighbors(&self, index: usize) -> u8 {
        self.cell(index).neighbors()
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Cell {
        Cell::from_bits(self.cells[index])
    }

    #[inline]
    pub fn coordinate_of(&self, index: usize) -> Pos2 {
        Pos2 {
            x: (index % self.size) as i32,
            y: (index / self.size) as i32,
        }
    }

    #[inline]
    pub fn index_of(&self, pos: Pos2) -> usize {
        debug_assert!(
            self.contains(pos),
            "{pos:?} is outside a grid of size {}",
            self.size
        );
        pos.x as usize + pos.y as usize * self.size
    }

    /// Wraps a coordinate that is at most one step outside of the grid
    #[inline]
    pub fn wrap(&self, coord: i32) -> i32 {
        let size = self.size as i32;
        debug_assert!((-1..=size).contains(&coord), "{coord} cannot be wrapped");
        match coord {
            -1 => size - 1,
            c if c == size => 0,
            c => c,
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    /// Side length of the grid
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }
    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Number of generations stepped since the grid was last cleared
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&bits| bits & Cell::ALIVE != 0)
            .count()
    }

    /// Positions of all live cells, in index order
    pub fn iter_alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &bits)| bits & Cell::ALIVE != 0)
            .map(|(index, _)| self.coordinate_of(index))
    }

    pub fn window(&self, top_left: Pos2, bottom_right: Pos2) -> GridWindow<'_> {
        GridWindow::new(self, top_left, bottom_right)
    }

    /// Indices of the 8 toroidal neighbors of `index`
    fn neighbor_indices(&self, index: usize) -> [usize; 8] {
        let center = self.coordinate_of(index);
        NEIGHBOR_OFFSETS.map(|offset| {
            let pos = center + offset;
            self.index_of(Pos2 {
                x: self.wrap(pos.x),
                y: self.wrap(pos.y),
            })
        })
    }

    /// Brings a dead cell to life
    ///
    /// Must not be called on a live cell, or its neighbors would be counted twice
    pub(crate) fn birth(&mut self, index: usize) {
        debug_assert!(!self.is_alive(index), "birth of a live cell at {index}");
        self.cells[index] |= Cell::ALIVE;
        for neighbor in self.neighbor_indices(index) {
            debug_assert!(self.neighbors(neighbor) < 8, "neighbor count overflow");
            self.cells[neighbor] += Cell::ONE_NEIGHBOR;
        }
    }

    /// Kills a live cell
    pub(crate) fn kill(&mut self, index: usize) {
        debug_assert!(self.is_alive(index), "kill of a dead cell at {index}");
        self.cells[index] &= !Cell::ALIVE;
        for neighbor in self.neighbor_indices(index) {
            debug_assert!(self.neighbors(neighbor) > 0, "neighbor count underflow");
            self.cells[neighbor] -= Cell::ONE_NEIGHBOR;
        }
    }
}
