//! Reading rendered grids back into cell coordinates.
//!
//! Rendered grids double as seed patterns for cellular simulations, which
//! only care about where the filled cells are.

use crate::grid::{BLANK, FILLED};

/// Returns the `(x, y)` position of every filled cell in `text`.
///
/// Any character other than `#` or `\n` counts as an empty cell and just
/// advances the column.
///
/// # Example
///
/// ```
/// use speckle::{GridParams, filled_cells, render};
/// use rand_chacha::ChaCha20Rng;
/// use rand::SeedableRng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(0);
/// let grid = render(&GridParams { size: 2, frequency: 1.0 }, &mut rng);
/// assert_eq!(filled_cells(&grid), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
/// ```
pub fn filled_cells(text: &str) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    let (mut x, mut y) = (0, 0);
    for c in text.chars() {
        match c {
            FILLED => {
                cells.push((x, y));
                x += 1;
            }
            '\n' => {
                x = 0;
                y += 1;
            }
            _ => x += 1,
        }
    }
    cells
}

/// Returns the share of filled cells among all cells of a rendered grid.
///
/// Only `#` and blanks count as cells. Returns `None` for a grid without cells.
pub fn fill_ratio(text: &str) -> Option<f64> {
    let (filled, total) = text.chars().fold((0usize, 0usize), |(f, t), c| match c {
        FILLED => (f + 1, t + 1),
        BLANK => (f, t + 1),
        _ => (f, t),
    });
    (total > 0).then(|| filled as f64 / total as f64)
}
