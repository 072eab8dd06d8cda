//! Content stream rendering for page contents.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, RuleLayout, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to a PDF content stream, converting the high-level content items
/// into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Rule(rule) => render_rule(&mut content, rule)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    current_colour.write_fill(content)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            current_colour.write_fill(content)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        if let Some(font) = fonts.get(current_font.id) {
            for ch in span.text.chars() {
                write!(content, "{:04x}", font.glyph_or_fallback(ch))?;
            }
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rule(content: &mut Vec<u8>, rule: &RuleLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(content, "{} w\n", rule.width)?;
    rule.colour.write_stroke(content)?;
    write!(content, "{} {} m\n", rule.from.0, rule.from.1)?;
    write!(content, "{} {} l\n", rule.to.0, rule.to.1)?;
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}
