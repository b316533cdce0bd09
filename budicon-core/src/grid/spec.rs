use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use crate::consts::*;
use crate::error::*;

/// Shape and proportional margins of one icon grid.
///
/// All margins are fractions of the page dimension they apply to, in
/// `[0, 1)`. `icon_height` is the fraction of each cell's height kept as
/// the icon region; the remainder of the cell (the caption band printed
/// below each icon) is discarded. Fractions are `f64` so pixel boundaries
/// come out identical on every platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub icon_height: f64,
}

impl Default for GridSpec {
    /// The visual-index page layout: 3x4 grid under a title band, icons
    /// above captions.
    fn default() -> Self {
        Self {
            rows: INDEX_ROWS,
            columns: INDEX_COLUMNS,
            margin_top: INDEX_MARGIN_TOP,
            margin_bottom: INDEX_MARGIN_BOTTOM,
            margin_left: INDEX_MARGIN_LEFT,
            margin_right: INDEX_MARGIN_RIGHT,
            icon_height: INDEX_ICON_HEIGHT,
        }
    }
}

impl GridSpec {
    /// Checks every constraint on the spec itself, before any page data is
    /// touched.
    pub fn validate(&self) -> Result<(), BudiconError> {
        ensure!(
            self.rows >= 1 && self.columns >= 1,
            InvalidGridSpecSnafu {
                reason: format!(
                    "grid must have at least one row and one column, got {}x{}",
                    self.rows, self.columns
                ),
            }
        );

        for (label, fraction) in [
            ("margin_top", self.margin_top),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
            ("margin_right", self.margin_right),
        ] {
            ensure!(
                (0.0..1.0).contains(&fraction),
                InvalidGridSpecSnafu {
                    reason: format!("{} must be in [0, 1), got {}", label, fraction),
                }
            );
        }

        ensure!(
            self.margin_top + self.margin_bottom < 1.0,
            InvalidGridSpecSnafu {
                reason: format!(
                    "vertical margins leave no usable region ({} + {} >= 1)",
                    self.margin_top, self.margin_bottom
                ),
            }
        );
        ensure!(
            self.margin_left + self.margin_right < 1.0,
            InvalidGridSpecSnafu {
                reason: format!(
                    "horizontal margins leave no usable region ({} + {} >= 1)",
                    self.margin_left, self.margin_right
                ),
            }
        );

        ensure!(
            self.icon_height > 0.0 && self.icon_height <= 1.0,
            InvalidGridSpecSnafu {
                reason: format!("icon_height must be in (0, 1], got {}", self.icon_height),
            }
        );

        Ok(())
    }
}

/// The hand-authored name for every cell of one grid, in reading order.
///
/// Row count and per-row lengths must match the grid spec exactly: every
/// cell carries exactly one name. Names need not be unique across pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameGrid(Vec<Vec<String>>);

impl NameGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }

    /// Builds a grid from string-slice rows, for embedded tables.
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self(
            rows.iter()
                .map(|row| row.iter().map(|name| (*name).to_string()).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }

    /// Verifies that this grid names exactly `spec.rows x spec.columns`
    /// cells.
    pub fn check_shape(&self, spec: &GridSpec) -> Result<(), BudiconError> {
        ensure!(
            self.0.len() == spec.rows as usize,
            NameGridMismatchSnafu {
                detail: format!("{} name rows", self.0.len()),
                rows: spec.rows,
                columns: spec.columns,
            }
        );

        for (index, row) in self.0.iter().enumerate() {
            ensure!(
                row.len() == spec.columns as usize,
                NameGridMismatchSnafu {
                    detail: format!("row {} has {} names", index, row.len()),
                    rows: spec.rows,
                    columns: spec.columns,
                }
            );
        }

        Ok(())
    }
}
