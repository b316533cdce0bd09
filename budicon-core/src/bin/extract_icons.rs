use std::path::Path;

use clap::Parser;
use image::DynamicImage;
use tracing::info;

use budicon_core::catalog::{self, PageGrid};
use budicon_core::consts::{DEFAULT_ZOOM, PLACEHOLDER_NAME, PLACEHOLDER_SIZE};
use budicon_core::extract::extract_grid;
use budicon_core::placeholder::generic_icon;
use budicon_core::render::PageRasterizer;
use budicon_core::store::IconStore;

#[derive(Parser)]
#[command(name = "extract-icons")]
#[command(about = "Slice named icons out of a PDF's visual-index pages")]
struct Args {
    #[arg(help = "Input PDF file path")]
    input: String,

    #[arg(short, long, default_value = "icons", help = "Output directory")]
    output: String,

    #[arg(
        short,
        long,
        help = "JSON catalog of page grids (defaults to the built-in visual index)"
    )]
    catalog: Option<String>,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ZOOM,
        help = "Rasterization zoom factor"
    )]
    zoom: f32,
}

fn validate_input(input_path: &str) -> anyhow::Result<()> {
    if !Path::new(input_path).exists() {
        anyhow::bail!("Input PDF not found: {}", input_path);
    }
    if !input_path.to_lowercase().ends_with(".pdf") {
        anyhow::bail!("Input file must be a PDF");
    }
    Ok(())
}

fn load_catalog(arg: Option<&str>) -> anyhow::Result<Vec<PageGrid>> {
    match arg {
        Some(path) => {
            let pages = catalog::load(path)?;
            info!("loaded catalog of {} pages from {}", pages.len(), path);
            Ok(pages)
        }
        None => Ok(catalog::visual_index()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    validate_input(&args.input)?;

    let pages = load_catalog(args.catalog.as_deref())?;
    let store = IconStore::create(&args.output)?;
    let rasterizer = PageRasterizer::new()?;

    let mut written = 0usize;
    for page_grid in &pages {
        info!("processing page {}", page_grid.page);

        let bitmap = rasterizer.rasterize(Path::new(&args.input), page_grid.page, args.zoom)?;
        let icons = extract_grid(&bitmap, &page_grid.spec, &page_grid.names)?;

        for icon in &icons {
            let path = store.save(icon)?;
            info!("wrote {}", path.display());
            written += 1;
        }
    }

    let placeholder = DynamicImage::ImageRgba8(generic_icon(PLACEHOLDER_SIZE));
    let path = store.save_image(PLACEHOLDER_NAME, &placeholder)?;
    info!("wrote fallback asset {}", path.display());

    info!(
        "extracted {} icons into {}",
        written,
        store.root().display()
    );
    Ok(())
}
