//! A one-page resume: a centred header, a padded body, and two skill columns side by side.

use crate::error::FlowError;
use crate::layout::{
    add_line, add_text, FontOptions, LineOptions, Margins, PageOptions, PageState,
    RegionOptions, RegionState, TextOptions,
};
use crate::surface::{Surface, TextAlign};
use crate::units::Pt;

/// Family every piece of text in the template is set in
pub const FAMILY: &str = "Montserrat";

const LINE_HEIGHT: f32 = 1.5;
const BODY_SIZE: Pt = Pt(10.0);
const HEADING_SIZE: Pt = Pt(12.0);
const SUBHEADING_SIZE: Pt = Pt(10.0);
const BODY_PADDING: Pt = Pt(30.0);

const SUMMARY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Fusce sit amet \
    accumsan lorem. Praesent tincidunt, felis in sollicitudin blandit, ipsum libero vehicula \
    quam, sit amet accumsan dolor nulla in mi. Phasellus viverra, mi at ultrices tristique, \
    mauris dui ultrices ligula, sed elementum turpis lectus in arcu. Curabitur sed lacus et \
    lorem ultricies tincidunt. Nullam quis magna nec felis tempor scelerisque.";

const EXPERIENCE: &str = "Developed and implemented customized training programs tailored to \
    individual client needs. Ensured safe use of gym equipment, motivated clients, tracked \
    progress, and provided nutritional advice to enhance physical performance and body \
    composition.";

fn body() -> TextOptions {
    TextOptions::default()
        .font(FontOptions::default().family(FAMILY).size(BODY_SIZE))
        .line_height(LINE_HEIGHT)
}

fn spaced(bottom: Pt) -> TextOptions {
    body().margins(Margins::bottom(bottom))
}

fn heading() -> TextOptions {
    spaced(Pt(3.0)).size(HEADING_SIZE).weight(700)
}

fn subheading() -> TextOptions {
    spaced(Pt(4.0)).size(SUBHEADING_SIZE).weight(600)
}

fn separator(max_width: Option<Pt>) -> LineOptions {
    let options = LineOptions::default().margins(Margins::symmetric(Pt(10.0), Pt(0.0)));
    match max_width {
        Some(width) => options.max_width(width),
        None => options,
    }
}

/// Render the resume onto `surface`, starting at the top of its current page
pub fn oxford<S: Surface + ?Sized>(surface: &mut S) -> Result<(), FlowError> {
    let page = PageState::shared(PageOptions::default());
    let page_width = surface.page_width();
    let body_rule = Some(page_width - BODY_PADDING * 2.0);

    let mut header = RegionState::new(&page, RegionOptions::default().id("header"));
    add_text(
        surface,
        &mut header,
        "Lorem Ipsum Dolor Sit Amet",
        &body()
            .size(Pt(20.0))
            .weight(700)
            .centered()
            .align(TextAlign::Center)
            .margins(Margins::top(Pt(20.0))),
    )?;
    add_line(surface, &mut header, &separator(None))?;
    add_text(
        surface,
        &mut header,
        "1234 Ipsum St., Dolor City | +12 34567890 | loremipsum@example.com",
        &spaced(Pt(2.0)).centered(),
    )?;
    add_line(surface, &mut header, &separator(None))?;

    let mut main = RegionState::new(
        &page,
        RegionOptions::default()
            .id("body")
            .cursor_y(header.cursor_y())
            .padding_horizontal(BODY_PADDING),
    );

    add_text(surface, &mut main, "Summary", &heading())?;
    add_text(surface, &mut main, SUMMARY, &spaced(Pt(2.0)))?;
    add_line(surface, &mut main, &separator(body_rule))?;

    add_text(surface, &mut main, "Education", &heading())?;
    let education = [
        (
            "Certified Lorem Ipsum Specialist",
            "Lorem Ipsum Institute | January – June 2021",
        ),
        (
            "Advanced Ipsum Training Certificate",
            "Dolor Academy | July – December 2022",
        ),
    ];
    for (title, detail) in education {
        add_text(surface, &mut main, title, &subheading())?;
        add_text(surface, &mut main, detail, &spaced(Pt(3.0)))?;
    }
    add_text(surface, &mut main, "Bachelor of Ipsumology", &subheading())?;
    add_text(surface, &mut main, "Dolor University | 2016 - 2020", &body())?;
    add_line(surface, &mut main, &separator(body_rule))?;

    add_text(surface, &mut main, "Work Experience", &heading())?;
    add_text(
        surface,
        &mut main,
        "Lorem Ipsum Trainer at Ipsum Gym",
        &subheading(),
    )?;
    add_text(surface, &mut main, "January 2021 - Present", &spaced(Pt(4.0)))?;
    add_text(surface, &mut main, EXPERIENCE, &spaced(Pt(4.0)))?;
    add_line(surface, &mut main, &separator(body_rule))?;

    add_text(surface, &mut main, "Skills", &heading())?;

    let mut left = RegionState::new(
        &page,
        RegionOptions::default()
            .id("skills-left")
            .cursor_y(main.cursor_y())
            .padding_horizontal(BODY_PADDING),
    );
    for skill in ["Effective Communication", "Empathy", "Patience", "Motivation"] {
        add_text(surface, &mut left, skill, &spaced(Pt(4.0)))?;
    }

    let mut right = RegionState::new(
        &page,
        RegionOptions::default()
            .id("skills-right")
            .cursor_y(main.cursor_y())
            .x(page_width / 2.0)
            .max_width(page_width / 2.0 - BODY_PADDING * 2.0),
    );
    for skill in ["Adaptability", "Leadership", "Problem Solving", "Active Listening"] {
        add_text(surface, &mut right, skill, &spaced(Pt(4.0)))?;
    }

    let mut footer = RegionState::new(
        &page,
        RegionOptions::default()
            .id("languages")
            .cursor_y(left.cursor_y())
            .padding_horizontal(BODY_PADDING),
    );
    add_line(surface, &mut footer, &separator(body_rule))?;
    add_text(surface, &mut footer, "Languages", &heading())?;
    for language in ["English", "Spanish"] {
        add_text(surface, &mut footer, language, &spaced(Pt(4.0)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    #[test]
    fn lays_out_every_section() {
        let mut surface = RecordingSurface::new().with_known_families(&[FAMILY, "Helvetica"]);
        oxford(&mut surface).unwrap();

        let texts: Vec<&str> = surface.texts().into_iter().map(|(t, _, _)| t).collect();
        for heading in ["Summary", "Education", "Work Experience", "Skills", "Languages"] {
            assert!(texts.contains(&heading), "missing {heading}");
        }
        assert_eq!(surface.lines().len(), 6);
    }

    #[test]
    fn skill_columns_start_level() {
        let mut surface = RecordingSurface::new();
        oxford(&mut surface).unwrap();

        let texts = surface.texts();
        let y_of = |needle: &str| {
            texts
                .iter()
                .find(|(t, _, _)| *t == needle)
                .map(|(_, _, y)| *y)
        };
        assert_eq!(y_of("Effective Communication"), y_of("Adaptability"));
        assert_eq!(y_of("Motivation"), y_of("Active Listening"));
    }

    #[test]
    fn requires_the_template_family() {
        let mut surface = RecordingSurface::new().with_known_families(&["Helvetica"]);
        assert!(matches!(
            oxford(&mut surface),
            Err(FlowError::UnknownFont { .. })
        ));
    }
}
