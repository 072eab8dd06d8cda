use crate::refs::{ObjectReferences, RefType};
use crate::{FlowError, Pt};
use id_arena::Id;
use owned_ttf_parser::{name_id, AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;

/// A parsed TrueType / OpenType font. Fonts are embedded in their entirety in the generated
/// PDF, so large fonts may dramatically increase the size of the output.
///
/// Fonts are registered with a [PdfSurface](crate::surface::pdf::PdfSurface) under a family
/// name and style, and are referred to by their [Id] within the [Document](crate::Document).
pub struct Font {
    pub face: OwnedFace,
}

/// One mapped glyph: its unicode source character and horizontal advance in font units
#[derive(Copy, Clone)]
struct GlyphEntry {
    ch: char,
    advance: u16,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FlowError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn find_name(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if it carries one
    pub fn name(&self) -> Option<String> {
        self.find_name(name_id::FULL_NAME)
    }

    /// The family name of the font, if it carries one
    pub fn family(&self) -> Option<String> {
        self.find_name(name_id::FAMILY)
    }

    /// Obtain the weight of the font (100 = thin, 400 = normal, 700 = bold, 900 = black)
    pub fn weight(&self) -> u16 {
        self.face().weight().to_number()
    }

    pub fn is_italic(&self) -> bool {
        self.face().is_italic()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().ascender() as f32
    }

    /// Distance from the baseline to the bottom of the font at the given size. Usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().descender() as f32
    }

    /// Default distance between two baselines at the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        let face = self.face();
        self.scaling(size) * (face.line_gap() + face.ascender() - face.descender()) as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph used to draw `ch`: its own glyph, else the replacement character, else a
    /// question mark, else `.notdef`
    pub fn glyph_or_fallback(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Width of a single line of `text` in em units, i.e. at a font size of 1
    pub fn string_unit_width(&self, text: &str) -> f32 {
        let face = self.face();
        let advance: u32 = text
            .chars()
            .filter(|ch| *ch != '\n')
            .map(|ch| {
                face.glyph_hor_advance(GlyphId(self.glyph_or_fallback(ch)))
                    .unwrap_or_default() as u32
            })
            .sum();
        advance as f32 / face.units_per_em() as f32
    }

    /// Width of a single line of `text` at the given size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        size * self.string_unit_width(text)
    }

    /// All glyphs reachable from a unicode cmap subtable, keyed by glyph id
    fn glyph_table(&self) -> BTreeMap<u16, GlyphEntry> {
        let face = self.face();
        let mut table: BTreeMap<u16, GlyphEntry> = BTreeMap::new();
        let Some(cmap) = face.tables().cmap else {
            return table;
        };

        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                let Some(gid) = subtable.glyph_index(codepoint).filter(|g| g.0 > 0) else {
                    return;
                };
                if let Some(advance) = face.glyph_hor_advance(gid) {
                    table.entry(gid.0).or_insert(GlyphEntry { ch, advance });
                }
            });
        }

        table
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let glyphs = self.glyph_table();

        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, GlyphEntry>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, glyphs, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(1000.0);

        // runs of consecutive glyph ids share one widths entry
        let mut widths = cid_font.widths();
        let mut run: Option<(u16, Vec<f32>)> = None;
        for (&gid, entry) in glyphs.iter() {
            let width = entry.advance as f32 * scaling;
            if let Some((start, run_widths)) = run.as_mut() {
                if *start as usize + run_widths.len() == gid as usize {
                    run_widths.push(width);
                    continue;
                }
                widths.consecutive(*start, run_widths.drain(..));
            }
            run = Some((gid, vec![width]));
        }
        if let Some((start, run_widths)) = run {
            widths.consecutive(start, run_widths);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, GlyphEntry>,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            self.face.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(data_id, compressed.as_slice())
            .filter(Filter::FlateDecode)
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let max_width = glyphs.values().map(|g| g.advance).max().unwrap_or_default() as f32;
        let avg_width = if glyphs.is_empty() {
            0.0
        } else {
            glyphs.values().map(|g| g.advance as f32).sum::<f32>() / glyphs.len() as f32
        };
        let bbox = face.global_bounding_box();

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));
        descriptor.name(Name(name.as_bytes()));
        if let Some(family) = self.family() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.weight(self.weight());

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(if face.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().unwrap_or(face.ascender());
        descriptor.cap_height(cap_height as f32 * scaling);
        descriptor.x_height(face.x_height().unwrap_or(cap_height) as f32 * scaling);
        // TrueType fonts carry no stem width; 80 is the conventional regular-weight guess
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width * scaling);
        descriptor.missing_width(max_width * scaling);
        descriptor.font_file2(data_id);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, GlyphEntry>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries sharing a high byte
        let entries: Vec<(u16, char)> = glyphs.iter().map(|(&gid, g)| (gid, g.ch)).collect();
        for block in entries.chunk_by(|a, b| a.0 >> 8 == b.0 >> 8) {
            for chunk in block.chunks(100) {
                map.push_str(&format!("{} beginbfchar\n", chunk.len()));
                for (gid, ch) in chunk {
                    let mut utf16 = [0u16; 2];
                    let encoded: String = ch
                        .encode_utf16(&mut utf16)
                        .iter()
                        .map(|unit| format!("{unit:04x}"))
                        .collect();
                    map.push_str(&format!("<{gid:04x}> <{encoded}>\n"));
                }
                map.push_str("endbfchar\n");
            }
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}
