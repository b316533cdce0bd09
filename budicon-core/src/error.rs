use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BudiconError {
    #[snafu(display("Invalid grid spec: {}", reason))]
    InvalidGridSpec { reason: String },
    #[snafu(display(
        "Name grid does not match the {}x{} grid spec: {}",
        rows,
        columns,
        detail
    ))]
    NameGridMismatch {
        detail: String,
        rows: u32,
        columns: u32,
    },
    #[snafu(display(
        "Grid region degenerates to zero-area cells on a {}x{} page",
        page_width,
        page_height
    ))]
    EmptyRegion { page_width: u32, page_height: u32 },
    #[snafu(display("Zoom factor must be positive, got {}", zoom))]
    InvalidZoom { zoom: f32 },
    #[snafu(display("Page {} not found, document has {} pages", page, count))]
    PageOutOfRange { page: u16, count: u16 },
    #[snafu(display("Pdfium `{}` error {}", stage, source))]
    Pdfium {
        source: pdfium_render::prelude::PdfiumError,
        stage: String,
    },
    #[snafu(display("Image Write error for `{}`: {}", path, source))]
    ImageWrite {
        source: image::ImageError,
        path: String,
    },
    #[snafu(display("Write `{}` error: {}", path, source))]
    IoWrite {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Environment `{}` Not Found, error {}", name, source))]
    EnvNotFound {
        source: std::env::VarError,
        name: String,
    },
    #[snafu(display("Read catalog `{}` error: {}", path, source))]
    CatalogRead {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Parse catalog `{}` error: {}", path, source))]
    CatalogParse {
        source: serde_json::Error,
        path: String,
    },
}
