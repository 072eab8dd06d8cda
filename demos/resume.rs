//! Renders the oxford resume template to a PDF.
//!
//! Usage: `cargo run --example resume -- <regular.ttf> [bold.ttf] <out.pdf>`
//!
//! Set `RUST_LOG=debug` to see page breaks as they happen.

use pdf_flow::pagesize;
use pdf_flow::surface::{pdf::PdfSurface, FontStyle};
use pdf_flow::templates::oxford::{self, FAMILY};
use pdf_flow::{Font, Info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (fonts, out) = match args.split_last() {
        Some((out, fonts)) if !fonts.is_empty() => (fonts, out),
        _ => {
            eprintln!("usage: resume <regular.ttf> [bold.ttf] <out.pdf>");
            std::process::exit(1);
        }
    };

    let mut surface = PdfSurface::new(pagesize::A4);
    surface.set_info(
        Info::new()
            .title("Lorem Ipsum Dolor Sit Amet")
            .author("Lorem Ipsum")
            .subject("Resume"),
    );

    // the first font is the regular face; any further faces are told apart by their weight
    for path in fonts {
        let font = Font::load(std::fs::read(path)?)?;
        let style = if font.is_italic() {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };
        surface.register_font(font, FAMILY, style);
    }

    oxford::oxford(&mut surface)?;
    println!("rendered {} page(s) to {out}", surface.page_count());

    let out = std::fs::File::create(out)?;
    surface.write(out)?;
    Ok(())
}
