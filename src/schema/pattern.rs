//! Pattern types: binary matrices, orientation and stamp composition.
//!
//! A [`Pattern`] is an immutable width x height binary matrix, typically
//! produced by the plaintext parser or a preset constructor. The
//! [`PatternBuffer`] holds the currently loaded pattern together with its
//! orientation and composes oriented absolute-coordinate stamps for the
//! grid to consume.

use serde::{Deserialize, Serialize};

/// Pattern and placement errors.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("no pattern loaded")]
    NoPatternLoaded,
    #[error("line {line}: unexpected character {found:?} (expected '.' or 'O')")]
    MalformedInput { line: usize, found: char },
    #[error("line {line}: row of length {len} does not match pattern width {width}")]
    RaggedRows { line: usize, len: usize, width: usize },
    #[error("row {row} has length {len}, expected {width}")]
    RaggedMatrix { row: usize, len: usize, width: usize },
    #[error("matrix value {value} at ({row}, {col}) is not binary")]
    NonBinaryValue { row: usize, col: usize, value: u8 },
}

/// Immutable binary matrix.
///
/// Stored flat in row-major order; `cells[row * width + col]` is 1 for an
/// alive cell and 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Pattern {
    /// Build a pattern from parsed rows of binary values.
    ///
    /// All rows must share the first row's length and every value must be
    /// 0 or 1. An empty row list yields the empty pattern.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, PatternError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * width);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PatternError::RaggedMatrix {
                    row: r,
                    len: row.len(),
                    width,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(PatternError::NonBinaryValue {
                        row: r,
                        col: c,
                        value,
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Parse a plaintext pattern: `.` dead, `O` alive, one row per line.
    ///
    /// Lines are trimmed and blank lines skipped, so indented pattern
    /// literals and surrounding whitespace are accepted. Any other
    /// character fails with [`PatternError::MalformedInput`].
    pub fn parse_plaintext(text: &str) -> Result<Self, PatternError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let mut len = 0;
            for ch in line.chars() {
                let cell = match ch {
                    '.' => 0,
                    'O' => 1,
                    found => {
                        return Err(PatternError::MalformedInput {
                            line: line_no + 1,
                            found,
                        });
                    }
                };
                cells.push(cell);
                len += 1;
            }

            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(PatternError::RaggedRows {
                        line: line_no + 1,
                        len,
                        width: w,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    /// The classic 5-cell glider, heading down-right in the base (`Up`)
    /// orientation.
    pub fn glider() -> Self {
        Self::parse_plaintext(
            "\
            .O.\n\
            ..O\n\
            OOO",
        )
        .expect("glider literal is well-formed")
    }

    /// Pattern width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pattern height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the pattern has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell value at (row, col); 1 for alive.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    /// Quarter-turn rotation: `rotated[col][height - 1 - row] = self[row][col]`.
    ///
    /// Produces a new height x width matrix. Applying it four times returns
    /// a matrix equal to the original; twice gives the 180 degree mirror.
    pub fn rotate90(&self) -> Self {
        // Rotated dimensions: width and height swap.
        let (rw, rh) = (self.height, self.width);
        let mut cells = vec![0u8; self.cells.len()];

        for row in 0..self.height {
            for col in 0..self.width {
                cells[col * rw + (self.height - 1 - row)] = self.cells[row * self.width + col];
            }
        }

        Self {
            width: rw,
            height: rh,
            cells,
        }
    }

    /// Rotate by `turns` quarter-turns.
    pub fn rotated(&self, turns: usize) -> Self {
        let mut out = self.clone();
        for _ in 0..turns % 4 {
            out = out.rotate90();
        }
        out
    }
}

/// Four-way rotational orientation for pattern placement.
///
/// `Up` is the pattern as loaded; the other variants are successive
/// quarter-turns of the base matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Up,
    Left,
    Down,
    Right,
}

impl Orientation {
    /// Number of `rotate90` applications deriving this view from `Up`.
    #[inline]
    pub fn quarter_turns(self) -> usize {
        match self {
            Orientation::Up => 0,
            Orientation::Left => 1,
            Orientation::Down => 2,
            Orientation::Right => 3,
        }
    }
}

/// Holds the loaded pattern and its orientation, and composes stamps.
///
/// The oriented matrix is recomputed once per `set_pattern` /
/// `set_orientation` call, so [`PatternBuffer::compose_at`] is plain
/// orientation-agnostic arithmetic with no per-cell branching.
#[derive(Debug, Clone, Default)]
pub struct PatternBuffer {
    base: Option<Pattern>,
    oriented: Option<Pattern>,
    orientation: Orientation,
}

impl PatternBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pattern; the current orientation is applied to it.
    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.base = Some(pattern);
        self.reorient();
    }

    /// Store an orientation and re-derive the oriented matrix.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.reorient();
    }

    /// Current orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// True once a pattern has been loaded.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.base.is_some()
    }

    fn reorient(&mut self) {
        let turns = self.orientation.quarter_turns();
        self.oriented = self.base.as_ref().map(|p| p.rotated(turns));
    }

    /// Compose the oriented pattern at an absolute grid origin.
    ///
    /// Yields one `(row, col, alive)` triple per cell of the oriented
    /// matrix, centered so that `origin` lands on the matrix's half-height
    /// / half-width cell. Single-pass; recompose to iterate again.
    pub fn compose_at(
        &self,
        origin: (i64, i64),
    ) -> Result<impl Iterator<Item = (i64, i64, bool)> + '_, PatternError> {
        let pattern = self.oriented.as_ref().ok_or(PatternError::NoPatternLoaded)?;
        let half_row = (pattern.height() / 2) as i64;
        let half_col = (pattern.width() / 2) as i64;

        Ok((0..pattern.height()).flat_map(move |row| {
            (0..pattern.width()).map(move |col| {
                (
                    origin.0 + row as i64 - half_row,
                    origin.1 + col as i64 - half_col,
                    pattern.get(row, col) == 1,
                )
            })
        }))
    }
}
