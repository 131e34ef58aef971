//! Shape module - occupancy matrices and their geometry
//!
//! A shape is a small boolean matrix (at most 4x4) stored inline, so rotating or
//! cropping never allocates. Rotation is computed on demand from the current
//! matrix; pieces never carry a separate rotation state.

use crate::types::PieceKind;

/// Largest matrix side used by any tetromino (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupancy matrix of a piece.
///
/// Only the `height` x `width` top-left corner of `rows` is meaningful; the rest
/// is always `false` so equality and hashing stay structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1.
    ///
    /// Panics if the matrix is larger than 4x4 or ragged; only used with
    /// compile-time tables and in tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height <= MAX_SHAPE_SIZE && width <= MAX_SHAPE_SIZE);

        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row {}", y);
            for (x, &v) in row.iter().enumerate() {
                out[y][x] = v != 0;
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            rows: out,
        }
    }

    /// Spawn orientation for a piece kind
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether cell `(x, y)` of the matrix is occupied (false when outside)
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Offsets `(dx, dy)` of all occupied cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.rows[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells().count()
    }

    /// Index of the lowest row holding an occupied cell
    pub fn bottom_row(&self) -> Option<u8> {
        (0..self.height)
            .rev()
            .find(|&y| self.rows[y as usize].iter().any(|&c| c))
    }

    /// 90° clockwise: transpose, then reverse each row.
    pub fn rotate_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        // Transposed matrix is w rows by h columns.
        for (y, row) in out.iter_mut().enumerate().take(w) {
            for (x, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - x][y];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows: out,
        }
    }

    /// 90° counter-clockwise, i.e. three clockwise turns.
    pub fn rotate_ccw(&self) -> Self {
        self.rotate_cw().rotate_cw().rotate_cw()
    }

    /// Minimal bounding box around the occupied cells.
    ///
    /// Preview panels only; collision always uses the full matrix.
    pub fn cropped(&self) -> Self {
        let (mut top, mut bottom) = (usize::MAX, 0);
        let (mut left, mut right) = (usize::MAX, 0);
        for (x, y) in self.cells() {
            let (x, y) = (x as usize, y as usize);
            top = top.min(y);
            bottom = bottom.max(y);
            left = left.min(x);
            right = right.max(x);
        }

        if top == usize::MAX {
            return Self {
                width: 0,
                height: 0,
                rows: [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
            };
        }

        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in top..=bottom {
            for x in left..=right {
                out[y - top][x - left] = self.rows[y][x];
            }
        }
        Self {
            width: (right - left + 1) as u8,
            height: (bottom - top + 1) as u8,
            rows: out,
        }
    }
}

/// Rotate a shape 90° clockwise.
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotate_cw()
}

/// Strip empty border rows and columns from a shape.
pub fn crop_shape(shape: &Shape) -> Shape {
    shape.cropped()
}
