//! Block field layout
//!
//! The field is a fixed grid, laid out column by column. Colors come from
//! a four-entry table keyed on column/row parity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::BlockField;
use crate::consts::*;

/// Grid parameters for the block field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Horizontal space between columns
    pub gap_x: f32,
    /// Vertical space between rows
    pub gap_y: f32,
    /// Bottom-left corner of block (0, 0)
    pub start: Vec2,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            cell_width: BLOCK_WIDTH,
            cell_height: BLOCK_HEIGHT,
            gap_x: BLOCK_GAP_X,
            gap_y: BLOCK_GAP_Y,
            start: GRID_START,
        }
    }
}

impl GridLayout {
    /// Bottom-left corner of the block at grid cell (x, y)
    pub fn cell_origin(&self, x: u32, y: u32) -> Vec2 {
        self.start
            + Vec2::new(
                x as f32 * (self.cell_width + self.gap_x),
                y as f32 * (self.cell_height + self.gap_y),
            )
    }
}

/// Color for grid cell (x, y), derived from parity only
pub fn block_color(x: u32, y: u32) -> [f32; 4] {
    match (x % 2 == 0, y % 2 == 0) {
        (true, true) => [0.5, 1.0, 1.0, 1.0],
        (true, false) => [0.5, 0.0, 0.0, 1.0],
        (false, true) => [1.0, 1.0, 0.0, 1.0],
        (false, false) => [1.0, 0.0, 0.0, 1.0],
    }
}

/// Build the block field for a grid layout
pub fn build_field(layout: &GridLayout) -> BlockField {
    let mut blocks = Vec::with_capacity((layout.columns * layout.rows) as usize);
    for x in 0..layout.columns {
        for y in 0..layout.rows {
            blocks.push(Rect::new(
                layout.cell_origin(x, y),
                layout.cell_width,
                layout.cell_height,
                block_color(x, y),
            ));
        }
    }
    log::debug!(
        "Built {}x{} block field ({} blocks)",
        layout.columns,
        layout.rows,
        blocks.len()
    );
    BlockField::from_blocks(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_has_fifteen_blocks() {
        let field = build_field(&GridLayout::default());
        assert_eq!(field.len(), 15);
        assert!(field.iter().all(|b| b.width == 100.0 && b.height == 45.0));
    }

    #[test]
    fn test_cell_origin_formula_without_row_gap() {
        let layout = GridLayout {
            gap_y: 0.0,
            start: Vec2::new(10.0, 20.0),
            ..GridLayout::default()
        };
        let field = build_field(&layout);

        for x in 0..5 {
            for y in 0..3 {
                let expected = Vec2::new(10.0 + x as f32 * 105.0, 20.0 + y as f32 * 45.0);
                assert!(
                    field.iter().any(|b| b.pos == expected),
                    "missing block at {expected}"
                );
            }
        }
    }

    #[test]
    fn test_default_rows_are_fifty_apart() {
        let layout = GridLayout::default();
        assert_eq!(layout.cell_origin(0, 0), Vec2::new(50.0, 300.0));
        assert_eq!(layout.cell_origin(4, 2), Vec2::new(470.0, 400.0));
    }

    #[test]
    fn test_layout_is_deterministic() {
        let a = build_field(&GridLayout::default());
        let b = build_field(&GridLayout::default());
        assert_eq!(a, b);

        // Color depends only on parity, regardless of call order
        let later = block_color(3, 1);
        let _ = block_color(0, 0);
        assert_eq!(block_color(3, 1), later);
        assert_eq!(block_color(1, 1), block_color(3, 1));
        assert_eq!(block_color(0, 2), block_color(2, 0));
    }

    #[test]
    fn test_block_colors() {
        assert_eq!(block_color(0, 0), [0.5, 1.0, 1.0, 1.0]);
        assert_eq!(block_color(0, 1), [0.5, 0.0, 0.0, 1.0]);
        assert_eq!(block_color(1, 0), [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(block_color(1, 1), [1.0, 0.0, 0.0, 1.0]);

        let field = build_field(&GridLayout::default());
        let origin = field
            .iter()
            .find(|b| b.pos == Vec2::new(50.0, 300.0))
            .copied();
        assert_eq!(origin.map(|b| b.color), Some(block_color(0, 0)));
    }
}
