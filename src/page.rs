use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::Font;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::FlowError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// The font and size a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single line of text placed on a page. `coords` is the start of the baseline, in PDF
/// space (origin at the bottom-left of the page).
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A straight stroked rule, in PDF space
#[derive(Clone, PartialEq, Debug)]
pub struct RuleLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub colour: Colour,
    pub width: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Rule(RuleLayout),
}

/// A single page and everything drawn on it
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Laid out content, in drawing order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::from_size(size.0, size.1),
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Add a line of text. Consecutive spans are grouped so they share one
    /// graphics state in the content stream.
    pub fn add_span(&mut self, span: SpanLayout) {
        if let Some(PageContents::Text(spans)) = self.contents.last_mut() {
            spans.push(span);
        } else {
            self.contents.push(PageContents::Text(vec![span]));
        }
    }

    pub fn add_rule(&mut self, rule: RuleLayout) {
        self.contents.push(PageContents::Rule(rule));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), FlowError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(FlowError::PageMissing)?;
        let page_tree = refs.get(RefType::PageTree).ok_or(FlowError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
