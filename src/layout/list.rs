use super::measure::{text_height, text_width};
use super::options::{ListMarker, ListOptions, NumberStyle, DEFAULT_LINE_HEIGHT};
use super::paginate::advance_if_needed;
use super::position::{center_x, effective_width, resolve_x, resolve_y};
use super::region::RegionState;
use super::text::apply_font;
use crate::error::FlowError;
use crate::surface::{Surface, TextDrawOptions};
use log::trace;

const ROMAN_NUMERALS: [(usize, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Uppercase subtractive roman numeral of `n`. Zero yields an empty string.
pub fn to_roman(mut n: usize) -> String {
    let mut roman = String::new();
    for (value, numeral) in ROMAN_NUMERALS {
        while n >= value {
            roman.push_str(numeral);
            n -= value;
        }
    }
    roman
}

/// Lowercase letter label of the 0-based `index`: `a` to `z`, then `aa`, `ab`, and so on
pub fn to_alpha(index: usize) -> String {
    let mut n = index + 1;
    let mut letters: Vec<char> = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// The prefix drawn in front of the item at 0-based `index`, including its trailing space
pub fn item_prefix(marker: &ListMarker, index: usize) -> String {
    match marker {
        ListMarker::Bullet(bullet) => format!("{bullet} "),
        ListMarker::Ordered(NumberStyle::Decimal) => format!("{}. ", index + 1),
        ListMarker::Ordered(NumberStyle::Roman) => format!("{}. ", to_roman(index + 1)),
        ListMarker::Ordered(NumberStyle::Alpha) => format!("{}. ", to_alpha(index)),
    }
}

/// Lay out `items` as a bulleted or numbered list at the region's cursor.
///
/// Every item is checked for fit on its own, so a list may continue on the next page. Items
/// follow each other directly; the region's vertical padding is only reclaimed once, before
/// the first item. An empty list does nothing at all.
pub fn add_list<S, T>(
    surface: &mut S,
    region: &mut RegionState,
    items: &[T],
    options: &ListOptions,
) -> Result<(), FlowError>
where
    S: Surface + ?Sized,
    T: AsRef<str>,
{
    if items.is_empty() {
        return Ok(());
    }

    let size = options.font.size;
    let placement = &options.placement;
    let line_height = options.line_height.unwrap_or(DEFAULT_LINE_HEIGHT);

    apply_font(surface, &options.font)?;
    surface.set_text_colour(options.colour);

    region.undo_trailing_padding();

    let width = effective_width(surface, region, options.max_width)
        - placement.margins.horizontal()
        - placement.offsets.horizontal();

    let mut y = region.cursor_y();
    for (index, item) in items.iter().enumerate() {
        let text = format!("{}{}", item_prefix(&options.marker, index), item.as_ref());
        let height = text_height(surface, &text, width, size, Some(line_height));

        let page_break = advance_if_needed(surface, region, height)?;
        if index == 0 || page_break {
            y = resolve_y(placement.y, region, placement, size, options.line_height);
        }

        let x = if options.center {
            center_x(surface, &text, size, options.max_width)
        } else {
            let measured = text_width(surface, &text, size, options.max_width);
            resolve_x(
                placement.x + options.item_indent,
                region,
                placement,
                Some((options.align, measured)),
            )
        };

        surface.draw_text(
            &text,
            x,
            y,
            &TextDrawOptions {
                max_width: Some(width),
                align: options.align,
                line_height_factor: line_height,
            },
        )?;
        trace!("region {:?}: list item {index} at ({x}, {y})", region.id);

        y += height * line_height;
        region.set_cursor_y(y);
        region.add_element();
    }

    let cursor = region.cursor_y() + placement.margins.bottom + placement.offsets.bottom;
    region.set_cursor_y(cursor);

    surface.reset_font()
}
