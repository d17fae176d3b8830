use std::fmt;

use rand::Rng;

use super::{Algorithm, Cell, CellsView, SeedLayout, UniverseError};

/// Construction parameters for a [`Universe`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seed: SeedLayout,
    pub algorithm: Algorithm,
}

impl UniverseConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: SeedLayout::default(),
            algorithm: Algorithm::default(),
        }
    }

    pub fn with_seed(mut self, seed: SeedLayout) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// A fixed-size toroidal Game of Life grid.
///
/// Owns two equally sized buffers: `cells` holds the committed generation and
/// is the only one ever exposed; `scratch` receives the next generation during
/// [`tick`](Universe::tick) and is copied back, so the exported address never
/// changes.
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    seed: SeedLayout,
    algorithm: Algorithm,
    generation: u64,
}

impl Universe {
    /// Create a universe with every cell dead.
    pub fn new(width: u32, height: u32) -> Result<Self, UniverseError> {
        Self::from_config(&UniverseConfig::new(width, height))
    }

    /// Create a universe starting from (and resetting to) `seed`.
    pub fn with_seed(width: u32, height: u32, seed: SeedLayout) -> Result<Self, UniverseError> {
        Self::from_config(&UniverseConfig::new(width, height).with_seed(seed))
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self, UniverseError> {
        let UniverseConfig { width, height, .. } = *config;
        let size = (width as usize)
            .checked_mul(height as usize)
            .filter(|&size| size > 0)
            .ok_or(UniverseError::InvalidDimensions { width, height })?;

        let mut universe = Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
            scratch: vec![Cell::Dead; size],
            seed: config.seed.clone(),
            algorithm: config.algorithm,
            generation: 0,
        };
        universe.seed.apply(&mut universe.cells, width, height);

        tracing::debug!(
            width,
            height,
            seed = universe.seed.name(),
            algorithm = universe.algorithm.name(),
            "universe created"
        );
        Ok(universe)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of ticks since the last `random`, `reset` or `purge`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn seed(&self) -> &SeedLayout {
        &self.seed
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Zero-copy view of the committed generation.
    pub fn cells(&self) -> CellsView<'_> {
        CellsView::new(&self.cells, self.width, self.height)
    }

    /// Raw address of the cell buffer for hosts that read memory directly.
    /// Contents are only meaningful until the next mutating call.
    pub fn cells_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        self.cells().get(row, col)
    }

    /// Count of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Convert 2D coordinates to a buffer index, rejecting anything off the grid.
    fn index(&self, row: u32, col: u32) -> Result<usize, UniverseError> {
        if row < self.height && col < self.width {
            Ok(row as usize * self.width as usize + col as usize)
        } else {
            Err(UniverseError::IndexOutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        let Self { width, height, cells, scratch, algorithm, .. } = self;
        algorithm.step(cells.as_slice(), scratch.as_mut_slice(), *width, *height);
        cells.copy_from_slice(scratch.as_slice());
        self.generation += 1;

        tracing::trace!(generation = self.generation, "tick");
    }

    /// Fill every cell with a fair coin flip from the thread-local RNG.
    pub fn random(&mut self) {
        self.random_with(&mut rand::rng());
    }

    /// Fill every cell with a fair coin flip drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
        self.generation = 0;

        tracing::debug!(population = self.population(), "universe randomized");
    }

    /// Restore the seed layout the universe was built with.
    pub fn reset(&mut self) {
        self.seed.apply(&mut self.cells, self.width, self.height);
        self.generation = 0;

        tracing::debug!(seed = self.seed.name(), "universe reset");
    }

    /// Kill every cell.
    pub fn purge(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;

        tracing::debug!("universe purged");
    }

    /// Flip a single cell between Alive and Dead.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), UniverseError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Mark every listed `(row, col)` alive. Nothing changes unless every
    /// coordinate is on the grid.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<(), UniverseError> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.index(row, col))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Text rendering, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells().rows() {
            for &cell in line {
                let symbol = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .field("seed", &self.seed.name())
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
