//! Diagnostic dump of a PDF's pages: text previews and embedded image
//! counts. Useful for eyeballing which pages carry an icon grid; nothing
//! downstream consumes this output.

use clap::Parser;
use pdfium_render::prelude::*;

use budicon_core::render::bind_pdfium;

#[derive(Parser)]
#[command(name = "inspect")]
#[command(about = "Print per-page text previews and image counts for a PDF")]
struct Args {
    #[arg(help = "Input PDF file path")]
    input: String,

    #[arg(
        short,
        long,
        default_value = "200",
        help = "Characters of text to preview per page"
    )]
    preview: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let pdfium = bind_pdfium()?;
    let document = pdfium.load_pdf_from_file(&args.input, None)?;
    println!("Pages: {}", document.pages().len());

    for (index, page) in document.pages().iter().enumerate() {
        println!("--- Page {} ---", index + 1);

        if let Ok(text) = page.text() {
            let flattened: String = text
                .all()
                .chars()
                .map(|c| if c == '\n' { ' ' } else { c })
                .take(args.preview)
                .collect();
            println!("{}", flattened);
        }

        let image_count = page
            .objects()
            .iter()
            .filter(|object| matches!(object.object_type(), PdfPageObjectType::Image))
            .count();
        if image_count > 0 {
            println!("Images: {}", image_count);
        }
    }

    Ok(())
}
