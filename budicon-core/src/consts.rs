/// Number of icon rows on each visual-index page.
///
/// The handbook lays its visual index out as a fixed 3x4 grid; the
/// row/column counts are properties of the printed layout, not of the
/// extraction algorithm, which accepts any positive grid shape.
pub const INDEX_ROWS: u32 = 3;

/// Number of icon columns on each visual-index page.
pub const INDEX_COLUMNS: u32 = 4;

/// Fraction of the page height taken by the title band above the grid.
///
/// The visual-index pages carry a heading across the top ~15% of the page;
/// the usable grid region starts below it.
pub const INDEX_MARGIN_TOP: f64 = 0.15;

/// Fraction of the page height left as whitespace below the grid.
pub const INDEX_MARGIN_BOTTOM: f64 = 0.05;

/// Fraction of the page width left as whitespace to the left of the grid.
pub const INDEX_MARGIN_LEFT: f64 = 0.05;

/// Fraction of the page width left as whitespace to the right of the grid.
pub const INDEX_MARGIN_RIGHT: f64 = 0.05;

/// Fraction of each cell's height occupied by the icon itself.
///
/// Every cell stacks an icon above a printed caption; the bottom 30% of the
/// cell holds the caption text and is discarded from the crop.
pub const INDEX_ICON_HEIGHT: f64 = 0.7;

/// Default rasterization zoom factor.
///
/// Pages are rendered at 3x their nominal size so the cropped icons come
/// out at a usable resolution. Higher values cost render time and memory
/// without improving the source material much beyond this point.
pub const DEFAULT_ZOOM: f32 = 3.0;

/// Canvas size (width and height, pixels) of the generated fallback icon.
pub const PLACEHOLDER_SIZE: u32 = 200;

/// Output name of the generated fallback icon (written as `{name}.png`).
///
/// Callers substitute this asset for entries that have no extracted icon.
pub const PLACEHOLDER_NAME: &str = "macerat-generic";

/// Environment variable naming the directory that holds the Pdfium
/// dynamic library.
pub const PDFIUM_LIB_PATH_ENV_NAME: &str = "PDFIUM_DYNAMIC_LIB_PATH";
