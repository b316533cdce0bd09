//! Page rasterization through Pdfium.

use std::path::Path;

use image::DynamicImage;
use pdfium_render::prelude::*;
use snafu::prelude::*;
use tracing::info;

use crate::consts::PDFIUM_LIB_PATH_ENV_NAME;
use crate::error::*;

/// Binds Pdfium from the dynamic library directory named by
/// `PDFIUM_DYNAMIC_LIB_PATH`.
pub fn bind_pdfium() -> Result<Pdfium, BudiconError> {
    let pdfium_lib_path = std::env::var(PDFIUM_LIB_PATH_ENV_NAME).context(EnvNotFoundSnafu {
        name: PDFIUM_LIB_PATH_ENV_NAME,
    })?;
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
        &pdfium_lib_path,
    ))
    .context(PdfiumSnafu {
        stage: "load-dyn-lib",
    })?;

    Ok(Pdfium::new(bindings))
}

/// Renders single pages of a PDF document into bitmaps.
pub struct PageRasterizer {
    pdfium: Pdfium,
}

impl PageRasterizer {
    pub fn new() -> Result<Self, BudiconError> {
        Ok(Self {
            pdfium: bind_pdfium()?,
        })
    }

    /// Rasterizes the 1-based `page_number` of the document at `path`,
    /// scaled by `zoom`.
    ///
    /// A zoom of 1.0 renders at the page's nominal point size; the visual
    /// index is rendered at 3.0 so the cropped icons keep usable detail.
    pub fn rasterize(
        &self,
        path: &Path,
        page_number: u16,
        zoom: f32,
    ) -> Result<DynamicImage, BudiconError> {
        ensure!(zoom > 0.0, InvalidZoomSnafu { zoom });

        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .context(PdfiumSnafu { stage: "load-pdf" })?;

        let count = document.pages().len();
        ensure!(
            page_number >= 1 && page_number <= count,
            PageOutOfRangeSnafu {
                page: page_number,
                count,
            }
        );

        let page = document
            .pages()
            .get(page_number - 1)
            .context(PdfiumSnafu { stage: "get-page" })?;

        let render_config = PdfRenderConfig::new().scale_page_by_factor(zoom);
        let image = page
            .render_with_config(&render_config)
            .context(PdfiumSnafu { stage: "render" })?
            .as_image();

        info!(
            "rasterized page {} of {} at zoom {} into {}x{}",
            page_number,
            path.display(),
            zoom,
            image.width(),
            image.height()
        );

        Ok(image)
    }
}
