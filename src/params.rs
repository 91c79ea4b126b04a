/// Parameters for grid generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Edge length of the square grid, in cells.
    ///
    /// Zero or negative values produce an empty grid.
    pub size: i64,
    /// Probability that a single cell is filled.
    ///
    /// Not clamped: values at or below 0.0 leave every cell blank, values
    /// at or above 1.0 fill every cell.
    pub frequency: f64,
}

impl GridParams {
    pub const DEFAULT_SIZE: i64 = 5;
    pub const DEFAULT_FREQUENCY: f64 = 0.5;

    /// Returns the number of rows (and columns) that will be produced.
    pub fn rows(&self) -> usize {
        usize::try_from(self.size).unwrap_or(0)
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            frequency: Self::DEFAULT_FREQUENCY,
        }
    }
}
