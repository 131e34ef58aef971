//! Snapshot module - the read-only view handed to renderers
//!
//! A snapshot is a plain `Copy` value captured after each mutation. The active
//! piece is already overlaid on `grid`; the ghost is carried separately so a
//! renderer can draw it only on empty cells. Nothing here is stored back into
//! the game state.

use crate::game_state::GameState;
use crate::pieces::Piece;
use crate::shape::Shape;
use crate::types::{Block, Cell, Phase, PieceKind, Position, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Cropped preview of a piece (next / hold panels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePreview {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

impl From<Piece> for PiecePreview {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape.cropped(),
            color: piece.color,
        }
    }
}

/// The falling piece as it stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub position: Position,
    pub ghost: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the active piece drawn in
    pub grid: Grid,
    pub active: Option<ActiveSnapshot>,
    pub next: PiecePreview,
    pub hold: Option<PiecePreview>,
    pub can_hold: bool,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub pieces_placed: u32,
    pub hold_counts: [u32; 7],
    pub episode_id: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut grid = state.board().to_grid();

        let active = state.current().map(|piece| {
            let position = state.position();
            let block = Some(Block {
                kind: piece.kind,
                color: piece.color,
            });
            for (dx, dy) in piece.shape.cells() {
                let (x, y) = (position.x + dx, position.y + dy);
                if in_grid(x, y) {
                    grid[y as usize][x as usize] = block;
                }
            }
            ActiveSnapshot {
                kind: piece.kind,
                shape: piece.shape,
                color: piece.color,
                position,
                ghost: state.ghost_position().unwrap_or(position),
            }
        });

        Self {
            grid,
            active,
            next: state.next().into(),
            hold: state.held().map(PiecePreview::from),
            can_hold: state.can_hold(),
            phase: state.phase(),
            score: state.score(),
            level: state.level(),
            lines: state.lines(),
            pieces_placed: state.pieces_placed(),
            hold_counts: state.hold_counts(),
            episode_id: state.episode_id(),
            drop_interval_ms: state.drop_interval_ms(),
        }
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Visible grid cells of the ghost piece
    pub fn ghost_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.active.iter().flat_map(|active| {
            active
                .shape
                .cells()
                .map(move |(dx, dy)| (active.ghost.x + dx, active.ghost.y + dy))
                .filter(|&(x, y)| in_grid(x, y))
        })
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

fn in_grid(x: i8, y: i8) -> bool {
    x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
}
