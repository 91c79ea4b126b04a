#![doc = include_str!("../README.md")]

mod args;
mod grid;
mod params;
mod pattern;

pub use args::{Invocation, USAGE, parse_frequency, parse_or_default, parse_size};
pub use grid::{BLANK, FILLED, Rows, cell_glyph, render};
pub use params::GridParams;
pub use pattern::{fill_ratio, filled_cells};
