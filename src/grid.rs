use crate::GridParams;
use rand::Rng;

/// Glyph for a filled cell.
pub const FILLED: char = '#';
/// Glyph for an empty cell.
pub const BLANK: char = ' ';

/// Returns the glyph for a cell given its random draw in `[0, 1)`.
#[inline]
pub fn cell_glyph(draw: f64, frequency: f64) -> char {
    if draw < frequency { FILLED } else { BLANK }
}

/// Renders a whole grid as text: one line per row, each ending in `\n`.
///
/// Cells are drawn in row-major order, one `f64` per cell. The output is
/// deterministic given the same RNG state and parameters.
pub fn render<R: Rng + ?Sized>(params: &GridParams, rng: &mut R) -> String {
    Rows::new(params, rng).collect()
}

/// An iterator over the rows of a randomly filled grid.
///
/// Rows are generated on demand, so a grid never has to be held in memory
/// as a whole.
///
/// # Example
///
/// ```
/// use speckle::{GridParams, Rows};
/// use rand_chacha::ChaCha20Rng;
/// use rand::SeedableRng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let params = GridParams { size: 4, frequency: 0.3 };
///
/// for row in Rows::new(&params, rng) {
///     print!("{}", row);
/// }
/// ```
pub struct Rows<R> {
    width: usize,
    remaining: usize,
    frequency: f64,
    rng: R,
}

impl<R: Rng> Rows<R> {
    pub fn new(params: &GridParams, rng: R) -> Self {
        let n = params.rows();
        Self {
            width: n,
            remaining: n,
            frequency: params.frequency,
            rng,
        }
    }
}

impl<R: Rng> Iterator for Rows<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut row = String::with_capacity(self.width + 1);
        for _ in 0..self.width {
            let draw = self.rng.random::<f64>();
            row.push(cell_glyph(draw, self.frequency));
        }
        row.push('\n');
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Rows<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill_ratio;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn params(size: i64, frequency: f64) -> GridParams {
        GridParams { size, frequency }
    }

    #[test]
    fn full_frequency_fills_every_cell() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(render(&params(3, 1.0), &mut rng), "###\n###\n###\n");
    }

    #[test]
    fn zero_frequency_leaves_every_cell_blank() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(render(&params(3, 0.0), &mut rng), "   \n   \n   \n");
    }

    #[test]
    fn out_of_range_frequencies_saturate() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let full = render(&params(6, 7.5), &mut rng);
        assert!(full.lines().all(|line| line == "######"));

        let empty = render(&params(6, -2.0), &mut rng);
        assert!(empty.lines().all(|line| line == "      "));
    }

    #[test]
    fn empty_for_zero_and_negative_sizes() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(render(&params(0, 0.5), &mut rng), "");
        assert_eq!(render(&params(-4, 0.5), &mut rng), "");
        assert_eq!(Rows::new(&params(-4, 0.5), &mut rng).count(), 0);
    }

    #[test]
    fn huge_sizes_are_generated_lazily() {
        let rng = ChaCha20Rng::seed_from_u64(0);
        let rows = Rows::new(&params(5_000_000_000, 0.0), rng);
        assert_eq!(rows.len(), 5_000_000_000);
        assert_eq!(rows.size_hint(), (5_000_000_000, Some(5_000_000_000)));
    }

    #[test]
    fn shape_is_square() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for n in 1..=12 {
            let text = render(&params(n, 0.5), &mut rng);
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), n as usize);
            for line in lines {
                assert_eq!(line.chars().count(), n as usize);
                assert!(line.chars().all(|c| c == FILLED || c == BLANK));
            }
            assert!(text.ends_with('\n'));
        }
    }

    #[test]
    fn reproducibility_same_seed_same_output() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(42);
        let mut rng2 = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            render(&params(16, 0.5), &mut rng1),
            render(&params(16, 0.5), &mut rng2),
            "Same seed should produce identical grids"
        );
    }

    #[test]
    fn rows_match_eager_render() {
        let p = params(9, 0.4);
        let eager = render(&p, &mut ChaCha20Rng::seed_from_u64(3));
        let rows = Rows::new(&p, ChaCha20Rng::seed_from_u64(3));
        assert_eq!(rows.len(), 9);
        assert_eq!(rows.collect::<String>(), eager);
    }

    #[test]
    fn fill_ratio_tracks_frequency() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for frequency in [0.1, 0.5, 0.9] {
            let text = render(&params(200, frequency), &mut rng);
            let ratio = fill_ratio(&text).unwrap();
            assert!(
                (ratio - frequency).abs() < 0.02,
                "ratio {} too far from frequency {}",
                ratio,
                frequency
            );
        }
    }

    #[test]
    fn glyph_threshold_is_strict() {
        assert_eq!(cell_glyph(0.5, 0.5), BLANK);
        assert_eq!(cell_glyph(0.4999, 0.5), FILLED);
        assert_eq!(cell_glyph(0.0, 0.0), BLANK);
        assert_eq!(cell_glyph(0.0, f64::NAN), BLANK);
    }
}
