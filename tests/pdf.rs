use pdf_flow::layout::{
    add_line, add_list, add_text, FontOptions, LineOptions, ListOptions, PageOptions, PageState,
    RegionOptions, RegionState, TextOptions,
};
use pdf_flow::surface::pdf::PdfSurface;
use pdf_flow::surface::{FontStyle, Surface, TextAlign, TextDrawOptions};
use pdf_flow::templates::oxford;
use pdf_flow::{pagesize, FlowError, Font, Info, PageContents, Pt, SpanLayout};

const REGULAR: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");
const BOLD: &[u8] = include_bytes!("../assets/DejaVuSansMono-Bold.ttf");

fn surface() -> PdfSurface {
    let mut surface = PdfSurface::new(pagesize::A4);
    surface.register_font(
        Font::load(REGULAR.to_vec()).unwrap(),
        "Mono",
        FontStyle::Normal,
    );
    surface.register_font(Font::load(BOLD.to_vec()).unwrap(), "Mono", FontStyle::Normal);
    surface
}

fn spans(surface: &PdfSurface, page_index: usize) -> Vec<SpanLayout> {
    let doc = surface.document();
    let id = doc.id_of_page_index(page_index).unwrap();
    doc.pages[id]
        .contents
        .iter()
        .filter_map(|content| match content {
            PageContents::Text(spans) => Some(spans.clone()),
            _ => None,
        })
        .flatten()
        .collect()
}

fn draw_options() -> TextDrawOptions {
    TextDrawOptions {
        max_width: None,
        align: TextAlign::Left,
        line_height_factor: 1.15,
    }
}

#[test]
fn fonts_are_picked_by_weight() {
    let mut surface = surface();
    let regular = surface.document().fonts.iter().next().unwrap().0;

    surface.set_font("mono", FontStyle::Normal, 700).unwrap();
    surface.draw_text("bold", Pt(0.0), Pt(0.0), &draw_options()).unwrap();
    // nearest weight
    surface.set_font("Mono", FontStyle::Normal, 600).unwrap();
    surface.draw_text("semibold", Pt(0.0), Pt(0.0), &draw_options()).unwrap();
    surface.set_font("Mono", FontStyle::Normal, 300).unwrap();
    surface.draw_text("light", Pt(0.0), Pt(0.0), &draw_options()).unwrap();
    // the default family falls back to the first registered font
    surface.set_font("Helvetica", FontStyle::Normal, 400).unwrap();
    surface.draw_text("default", Pt(0.0), Pt(0.0), &draw_options()).unwrap();

    let ids: Vec<bool> = spans(&surface, 0)
        .iter()
        .map(|span| span.font.id == regular)
        .collect();
    assert_eq!(ids, vec![false, false, true, true]);
}

#[test]
fn unregistered_families_are_errors() {
    let mut surface = surface();
    let err = surface
        .set_font("Garamond", FontStyle::Italic, 400)
        .unwrap_err();
    match err {
        FlowError::UnknownFont {
            family,
            style,
            weight,
        } => {
            assert_eq!(family, "Garamond");
            assert_eq!(style, FontStyle::Italic);
            assert_eq!(weight, 400);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn text_is_flipped_and_aligned_per_line() {
    let mut surface = surface();
    surface.set_font_size(Pt(10.0));
    let options = TextDrawOptions {
        max_width: None,
        align: TextAlign::Right,
        line_height_factor: 1.5,
    };
    surface
        .draw_text("ab\nabcd", Pt(200.0), Pt(100.0), &options)
        .unwrap();

    let doc = surface.document();
    let (_, font) = doc.fonts.iter().next().unwrap();
    let ascent = font.ascent(Pt(10.0));
    let spans = spans(&surface, 0);
    assert_eq!(spans.len(), 2);

    let (first, second) = (&spans[0], &spans[1]);
    assert_eq!(first.text, "ab");
    assert_eq!(
        first.coords.0,
        Pt(200.0) - font.width_of_text("ab", Pt(10.0))
    );
    assert_eq!(second.coords.0, Pt(200.0) - font.width_of_text("abcd", Pt(10.0)));
    assert_eq!(first.coords.1, pagesize::A4.1 - Pt(100.0) - ascent);
    assert!((first.coords.1 - second.coords.1 - Pt(15.0)).0.abs() < 1e-3);
}

#[test]
fn wraps_to_the_requested_width() {
    let mut surface = surface();
    surface.set_font_size(Pt(10.0));
    let lines = surface.split_text_to_size(&lipsum::lipsum(30), Pt(150.0));
    assert!(lines.len() > 1);

    let doc = surface.document();
    let (_, font) = doc.fonts.iter().next().unwrap();
    for line in &lines {
        assert!(font.width_of_text(line, Pt(10.0)) <= Pt(150.0), "{line}");
    }
}

#[test]
fn layout_pages_follow_the_document() {
    let mut surface = surface();
    let page = PageState::shared(PageOptions::default().padding(Pt(36.0)));
    let mut region = RegionState::new(&page, RegionOptions::default().id("body"));
    let text = TextOptions::default()
        .font(FontOptions::default().family("Mono").size(Pt(11.0)))
        .line_height(1.3);

    for _ in 0..20 {
        add_text(&mut surface, &mut region, &lipsum::lipsum(80), &text).unwrap();
        add_line(&mut surface, &mut region, &LineOptions::default()).unwrap();
    }
    add_list(
        &mut surface,
        &mut region,
        &["one", "two", "three"],
        &ListOptions::default().font(FontOptions::default().family("Mono")),
    )
    .unwrap();

    assert!(surface.page_count() > 1);
    assert_eq!(surface.page_count(), page.borrow().number_of_pages());
    for index in 0..surface.page_count() {
        assert!(!spans(&surface, index).is_empty(), "page {index} is empty");
    }
}

#[test]
fn renders_the_oxford_template() {
    let mut surface = PdfSurface::new(pagesize::A4);
    surface.set_info(Info::new().title("Resume").author("Lorem Ipsum"));
    surface.register_font(
        Font::load(REGULAR.to_vec()).unwrap(),
        oxford::FAMILY,
        FontStyle::Normal,
    );
    surface.register_font(
        Font::load(BOLD.to_vec()).unwrap(),
        oxford::FAMILY,
        FontStyle::Normal,
    );
    oxford::oxford(&mut surface).unwrap();
    assert_eq!(surface.page_count(), 1);

    let mut out: Vec<u8> = Vec::new();
    surface.write(&mut out).unwrap();
    assert!(out.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("/Count 1"));
    assert!(text.contains("/FontFile2"));
}
