//! Grid icon extraction: slice a rasterized page into named icon crops.

use image::DynamicImage;
use tracing::debug;

use crate::error::BudiconError;
use crate::grid::layout::GridLayout;
use crate::grid::rect::CellRect;
use crate::grid::spec::{GridSpec, NameGrid};

/// One named crop produced by [`extract_grid`].
#[derive(Debug, Clone)]
pub struct ExtractedIcon {
    pub name: String,
    /// Where on the source page the crop was taken from.
    pub rect: CellRect,
    pub image: DynamicImage,
}

/// Slices `page` into `spec.rows x spec.columns` named icon crops.
///
/// Cell boundaries follow [`GridLayout`]: floored pixel margins, floor
/// division into equal cells, and only the top `icon_height` fraction of
/// each cell kept. Crops are returned in row-major order, one per entry of
/// `names`.
///
/// The call is all-or-nothing: every precondition (`InvalidGridSpec`,
/// `NameGridMismatch`, `EmptyRegion`) is checked before the first crop, and
/// no partial results are ever returned. The function is pure; persisting
/// the crops is the caller's concern.
pub fn extract_grid(
    page: &DynamicImage,
    spec: &GridSpec,
    names: &NameGrid,
) -> Result<Vec<ExtractedIcon>, BudiconError> {
    spec.validate()?;
    names.check_shape(spec)?;
    let layout = GridLayout::compute(spec, page.width(), page.height())?;

    debug!(
        "slicing {}x{} page into {}x{} cells of {}x{}, icon band {} px",
        page.width(),
        page.height(),
        layout.rows,
        layout.columns,
        layout.cell.x,
        layout.cell.y,
        layout.icon_height
    );

    let mut icons = Vec::with_capacity(spec.rows as usize * spec.columns as usize);
    for (row, row_names) in names.rows().iter().enumerate() {
        for (column, name) in row_names.iter().enumerate() {
            let rect = layout.icon_rect(row as u32, column as u32);
            let image = page.crop_imm(rect.min.x, rect.min.y, rect.width(), rect.height());
            icons.push(ExtractedIcon {
                name: name.clone(),
                rect,
                image,
            });
        }
    }

    Ok(icons)
}
