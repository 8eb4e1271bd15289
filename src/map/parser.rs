//! Parsing of flat level data into a grid of tile codes.

use tracing::debug;

use crate::error::ParseError;

/// Parses level data: integer tile codes separated by commas and/or whitespace.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTileCode`] for the first token that is not a valid code.
pub fn parse_tile_codes(raw: &str) -> Result<Vec<u16>, ParseError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token.parse::<u16>().map_err(|_| ParseError::InvalidTileCode {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// A row-major view of flat tile codes.
///
/// Every row has exactly `row_width` cells. Codes left over after the last
/// complete row are dropped.
#[derive(Debug, Clone)]
pub struct TileGrid<'a> {
    rows: Vec<&'a [u16]>,
}

impl<'a> TileGrid<'a> {
    pub fn new(codes: &'a [u16], row_width: usize) -> Self {
        if row_width == 0 {
            debug!(code_count = codes.len(), "Zero row width, tile grid is empty");
            return Self { rows: Vec::new() };
        }

        let chunks = codes.chunks_exact(row_width);
        let dropped = chunks.remainder().len();
        if dropped > 0 {
            debug!(dropped, row_width, "Truncating partial last row of tile data");
        }

        Self { rows: chunks.collect() }
    }

    pub fn rows(&self) -> &[&'a [u16]] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Iterates `(column, row, code)` over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u16)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &code)| (x, y, code)))
    }
}
