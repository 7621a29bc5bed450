//! Pieces module - shape catalog and rotation rules
//!
//! A catalog maps a piece kind and rotation state to block offsets around the
//! piece anchor, plus the kind's rotation mode. Rotation turns offsets 90°
//! counter-clockwise about the anchor, so offsets stay on integer cells.
//!
//! The catalog is a trait so hosts and tests can inject alternative shape sets.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, RotationMode};

/// Most blocks a catalog shape may have
pub const MAX_BLOCKS: usize = 4;

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// Block offsets (or absolute cells) of one piece
pub type PieceShape = ArrayVec<BlockOffset, MAX_BLOCKS>;

/// Source of piece shapes and rotation behavior
pub trait ShapeCatalog {
    /// Block offsets for `kind` in rotation state `rotation`
    fn shape(&self, kind: PieceKind, rotation: u8) -> PieceShape;

    /// How `kind` rotates
    fn rotation_mode(&self, kind: PieceKind) -> RotationMode;
}

/// The seven standard four-block pieces.
///
/// Every spawn shape has a block one row above its anchor, so a piece that
/// locks at the spawn row always pokes above the visible board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCatalog;

impl ShapeCatalog for StandardCatalog {
    fn shape(&self, kind: PieceKind, rotation: u8) -> PieceShape {
        let turns = rotation % self.rotation_mode(kind).states();
        spawn_shape(kind)
            .iter()
            .map(|&offset| (0..turns).fold(offset, |o, _| rotate_ccw(o)))
            .collect()
    }

    fn rotation_mode(&self, kind: PieceKind) -> RotationMode {
        kind.rotation_mode()
    }
}

/// Spawn orientation offsets (rotation state 0)
fn spawn_shape(kind: PieceKind) -> [BlockOffset; 4] {
    match kind {
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        PieceKind::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::J => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
    }
}

/// Rotate an offset 90° counter-clockwise about the anchor
pub fn rotate_ccw((dx, dy): BlockOffset) -> BlockOffset {
    (-dy, dx)
}

/// Rotation state after one rotate input, or None if the kind cannot rotate.
///
/// Limited kinds toggle between states 0 and 1; free kinds cycle 0..=3.
pub fn next_rotation(mode: RotationMode, rotation: u8) -> Option<u8> {
    match mode {
        RotationMode::None => None,
        RotationMode::Limited => Some(if rotation == 0 { 1 } else { 0 }),
        RotationMode::Free => Some((rotation + 1) % 4),
    }
}

/// Absolute cells of `shape` anchored at (x, y).
///
/// None if any cell falls outside the `i8` coordinate range; callers treat
/// that as an invalid position.
pub fn cells_at(shape: &PieceShape, x: i8, y: i8) -> Option<PieceShape> {
    shape
        .iter()
        .map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
        .collect()
}
