use glam::UVec2;
use snafu::prelude::*;

use crate::error::*;

use super::rect::CellRect;
use super::spec::GridSpec;

/// Pixel geometry of one grid, resolved for a concrete page size.
///
/// Margins are floored to whole pixels, then the usable region is divided
/// into equal cells with floor division. Remainder pixels are not
/// redistributed: they stay unassigned at the right and bottom edges of the
/// grid, which keeps cell boundaries reproducible across page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of the usable grid region.
    pub origin: UVec2,
    /// Size of every cell.
    pub cell: UVec2,
    /// Height of the icon band kept at the top of each cell.
    pub icon_height: u32,
    pub rows: u32,
    pub columns: u32,
}

impl GridLayout {
    /// Resolves `spec` against a page of `page_width x page_height` pixels.
    ///
    /// Fails with `EmptyRegion` when the page is too small for the grid:
    /// a zero-size usable region, a cell dimension that floors to zero, or
    /// an icon band that floors to zero would all produce zero-area crops.
    pub fn compute(
        spec: &GridSpec,
        page_width: u32,
        page_height: u32,
    ) -> Result<Self, BudiconError> {
        spec.validate()?;

        let top = (f64::from(page_height) * spec.margin_top) as u32;
        let bottom = page_height - (f64::from(page_height) * spec.margin_bottom) as u32;
        let left = (f64::from(page_width) * spec.margin_left) as u32;
        let right = page_width - (f64::from(page_width) * spec.margin_right) as u32;

        let grid_width = right - left;
        let grid_height = bottom - top;
        ensure!(
            grid_width > 0 && grid_height > 0,
            EmptyRegionSnafu {
                page_width,
                page_height,
            }
        );

        let cell_width = grid_width / spec.columns;
        let cell_height = grid_height / spec.rows;
        let icon_height = (f64::from(cell_height) * spec.icon_height) as u32;
        ensure!(
            cell_width > 0 && cell_height > 0 && icon_height > 0,
            EmptyRegionSnafu {
                page_width,
                page_height,
            }
        );

        Ok(Self {
            origin: UVec2::new(left, top),
            cell: UVec2::new(cell_width, cell_height),
            icon_height,
            rows: spec.rows,
            columns: spec.columns,
        })
    }

    /// The full cell at `(row, column)`, caption band included.
    pub fn cell_rect(&self, row: u32, column: u32) -> CellRect {
        let min = self.origin + UVec2::new(column * self.cell.x, row * self.cell.y);
        CellRect::from_min_size(min, self.cell)
    }

    /// The icon region of the cell at `(row, column)`: the top
    /// `icon_height` pixels, with the caption band below cut off.
    pub fn icon_rect(&self, row: u32, column: u32) -> CellRect {
        let min = self.origin + UVec2::new(column * self.cell.x, row * self.cell.y);
        CellRect::from_min_size(min, UVec2::new(self.cell.x, self.icon_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_geometry() {
        // Worked example: a 1200x900 page under the visual-index layout.
        let layout = GridLayout::compute(&GridSpec::default(), 1200, 900).unwrap();

        assert_eq!(layout.origin, UVec2::new(60, 135));
        assert_eq!(layout.cell, UVec2::new(270, 240));
        assert_eq!(layout.icon_height, 168);

        let cell = layout.cell_rect(0, 0);
        assert_eq!(cell.min, UVec2::new(60, 135));
        assert_eq!(cell.max, UVec2::new(330, 375));

        let icon = layout.icon_rect(0, 0);
        assert_eq!(icon.min, UVec2::new(60, 135));
        assert_eq!(icon.max, UVec2::new(330, 303));

        // Last cell sits flush against the grid's bottom-right corner.
        let last = layout.icon_rect(2, 3);
        assert_eq!(last.min, UVec2::new(870, 615));
        assert_eq!(last.max, UVec2::new(1140, 783));
    }

    #[test]
    fn test_zero_margins_full_height_tiles_page() {
        let spec = GridSpec {
            rows: 3,
            columns: 4,
            margin_top: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            margin_right: 0.0,
            icon_height: 1.0,
        };
        let layout = GridLayout::compute(&spec, 8, 6).unwrap();

        // Every pixel belongs to exactly one cell.
        for y in 0..6 {
            for x in 0..8 {
                let owners = (0..3)
                    .flat_map(|r| (0..4).map(move |c| (r, c)))
                    .filter(|&(r, c)| layout.cell_rect(r, c).contains_point(UVec2::new(x, y)))
                    .count();
                assert_eq!(owners, 1, "pixel ({x},{y}) owned by {owners} cells");
            }
        }
    }

    #[test]
    fn test_remainder_pixels_left_unassigned() {
        let spec = GridSpec {
            rows: 3,
            columns: 4,
            margin_top: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            margin_right: 0.0,
            icon_height: 1.0,
        };
        // 10 / 4 and 7 / 3 both truncate.
        let layout = GridLayout::compute(&spec, 10, 7).unwrap();
        assert_eq!(layout.cell, UVec2::new(2, 2));

        // Columns 8-9 and row 6 belong to no cell.
        let covered = |x: u32, y: u32| {
            (0..3)
                .flat_map(|r| (0..4).map(move |c| (r, c)))
                .any(|(r, c)| layout.cell_rect(r, c).contains_point(UVec2::new(x, y)))
        };
        assert!(covered(7, 5));
        assert!(!covered(8, 0));
        assert!(!covered(9, 6));
        assert!(!covered(0, 6));
    }

    #[test]
    fn test_tiny_page_is_empty_region() {
        // 3 px wide / 4 columns floors to zero-width cells.
        let result = GridLayout::compute(&GridSpec::default(), 3, 900);
        assert!(matches!(result, Err(BudiconError::EmptyRegion { .. })));

        let result = GridLayout::compute(&GridSpec::default(), 0, 0);
        assert!(matches!(result, Err(BudiconError::EmptyRegion { .. })));
    }

    #[test]
    fn test_one_pixel_cells_with_thin_icon_band() {
        // cell_height = 1 and icon_height 0.7 floors the band to zero.
        let spec = GridSpec {
            rows: 3,
            columns: 4,
            margin_top: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            margin_right: 0.0,
            icon_height: 0.7,
        };
        let result = GridLayout::compute(&spec, 8, 3);
        assert!(matches!(result, Err(BudiconError::EmptyRegion { .. })));
    }
}
