use crate::engine::{Arc, Blit, Direction, Point, Rect, Style, Surface};
use anyhow::Result;
use std::f64::consts::PI;

/// One page of the canvas primer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lesson {
    Rectangles,
    ComplexPaths,
    Text,
    Colors,
    Images,
    Patterns,
    Transforms,
    SpriteSheet,
}

impl Lesson {
    pub const ALL: [Lesson; 8] = [
        Lesson::Rectangles,
        Lesson::ComplexPaths,
        Lesson::Text,
        Lesson::Colors,
        Lesson::Images,
        Lesson::Patterns,
        Lesson::Transforms,
        Lesson::SpriteSheet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Lesson::Rectangles => "rectangles",
            Lesson::ComplexPaths => "paths",
            Lesson::Text => "text",
            Lesson::Colors => "colors",
            Lesson::Images => "images",
            Lesson::Patterns => "patterns",
            Lesson::Transforms => "transforms",
            Lesson::SpriteSheet => "sprites",
        }
    }

    pub fn from_name(name: &str) -> Option<Lesson> {
        Lesson::ALL.into_iter().find(|lesson| lesson.name() == name)
    }

    /// Lessons that blit an image need one loaded first
    pub fn needs_image(&self) -> bool {
        matches!(
            self,
            Lesson::Images | Lesson::Patterns | Lesson::Transforms | Lesson::SpriteSheet
        )
    }
}

/// Draw `lessons` in order, white ink on whatever is behind the canvas
pub fn run_lessons<S: Surface>(
    surface: &S,
    lessons: &[Lesson],
    image: Option<&S::Image>,
) -> Result<()> {
    surface.set_fill_style(Style::Named("white"))?;
    surface.set_stroke_style(Style::Named("white"))?;

    for lesson in lessons {
        log::debug!("drawing lesson '{}'", lesson.name());
        match (lesson, image) {
            (Lesson::Rectangles, _) => drawing_rectangles(surface),
            (Lesson::ComplexPaths, _) => drawing_complex_paths(surface)?,
            (Lesson::Text, _) => drawing_text(surface)?,
            (Lesson::Colors, _) => drawing_colors(surface)?,
            (Lesson::Images, Some(image)) => drawing_images(surface, image)?,
            (Lesson::Patterns, Some(image)) => drawing_patterns(surface, image)?,
            (Lesson::Transforms, Some(image)) => drawing_transforms(surface, image)?,
            (Lesson::SpriteSheet, Some(image)) => drawing_sprite_sheet(surface, image)?,
            (lesson, None) => {
                log::warn!("skipping lesson '{}': no image loaded", lesson.name())
            }
        }
    }
    Ok(())
}

// ┌──────────────────────┬──────────────────────────────────────────┐
// │ fill_rect            │ solid rectangle                          │
// │ stroke_rect          │ rectangle outline                        │
// │ clear_rect           │ punch a fully transparent hole           │
// └──────────────────────┴──────────────────────────────────────────┘
pub fn drawing_rectangles<S: Surface>(surface: &S) {
    // filled
    surface.fill_rect(&Rect::new(200.0, 10.0, 100.0, 100.0));
    surface.fill_rect(&Rect::new(50.0, 70.0, 90.0, 30.0));

    // stroked
    surface.stroke_rect(&Rect::new(110.0, 10.0, 50.0, 50.0));
    surface.stroke_rect(&Rect::new(30.0, 10.0, 50.0, 50.0));

    // cleared, two windows in the first square
    surface.clear_rect(&Rect::new(210.0, 20.0, 30.0, 20.0));
    surface.clear_rect(&Rect::new(260.0, 20.0, 30.0, 20.0));
}

/// Paths are recorded first and painted afterwards:
/// 1. begin_path
/// 2. move_to / line_to / arc
/// 3. close_path (optional, fill closes on its own)
/// 4. fill or stroke
pub fn drawing_complex_paths<S: Surface>(surface: &S) -> Result<()> {
    // filled triangle
    surface.begin_path();
    surface.move_to(Point::new(10.0, 120.0));
    surface.line_to(Point::new(10.0, 180.0));
    surface.line_to(Point::new(110.0, 150.0));
    surface.fill();

    // stroked triangle
    surface.begin_path();
    surface.move_to(Point::new(140.0, 160.0));
    surface.line_to(Point::new(140.0, 220.0));
    surface.line_to(Point::new(40.0, 190.0));
    surface.close_path();
    surface.stroke();

    // polygon
    surface.begin_path();
    surface.move_to(Point::new(160.0, 160.0));
    surface.line_to(Point::new(170.0, 220.0));
    surface.line_to(Point::new(240.0, 210.0));
    surface.line_to(Point::new(260.0, 170.0));
    surface.line_to(Point::new(190.0, 140.0));
    surface.close_path();
    surface.stroke();

    // semicircle, PI radians = 180 degrees
    surface.begin_path();
    surface.arc(&Arc {
        center: Point::new(100.0, 300.0),
        radius: 40.0,
        start_angle: 0.0,
        end_angle: PI,
        direction: Direction::Anticlockwise,
    })?;
    surface.stroke();

    // full circle
    surface.begin_path();
    surface.arc(&Arc {
        center: Point::new(100.0, 300.0),
        radius: 30.0,
        start_angle: 0.0,
        end_angle: 2.0 * PI,
        direction: Direction::Anticlockwise,
    })?;
    surface.fill();

    // three-quarter arc
    surface.begin_path();
    surface.arc(&Arc {
        center: Point::new(200.0, 300.0),
        radius: 25.0,
        start_angle: 0.0,
        end_angle: 1.5 * PI,
        direction: Direction::Clockwise,
    })?;
    surface.stroke();

    Ok(())
}

pub fn drawing_text<S: Surface>(surface: &S) -> Result<()> {
    surface.set_font("10pt Arial");
    surface.fill_text("This is some text...", Point::new(330.0, 40.0))?;

    surface.set_font("bold 24pt Georgia");
    surface.stroke_text("Outlined text", Point::new(330.0, 80.0))?;
    Ok(())
}

pub fn drawing_colors<S: Surface>(surface: &S) -> Result<()> {
    surface.set_fill_style(Style::Named("red"))?;
    surface.fill_rect(&Rect::new(310.0, 160.0, 100.0, 50.0));

    surface.set_stroke_style(Style::Rgb(0, 0, 255))?;
    surface.stroke_rect(&Rect::new(310.0, 240.0, 100.0, 50.0));

    // 60% opaque, overlaps the red block
    surface.set_fill_style(Style::Rgba(0, 255, 0, 0.6))?;
    surface.fill_rect(&Rect::new(360.0, 180.0, 100.0, 50.0));

    surface.set_fill_style(Style::Named("white"))?;
    surface.set_stroke_style(Style::Named("white"))?;
    Ok(())
}

pub fn drawing_images<S: Surface>(surface: &S, image: &S::Image) -> Result<()> {
    // natural size
    surface.draw_image(image, &Blit::At(Point::new(0.0, 350.0)))?;
    // squeezed into 100x25
    surface.draw_image(image, &Blit::Scaled(Rect::new(0.0, 400.0, 100.0, 25.0)))?;
    // top-left 60x50 of the image, copied at 1:1
    surface.draw_image(
        image,
        &Blit::Cropped {
            frame: Rect::new(0.0, 0.0, 60.0, 50.0),
            destination: Rect::new(0.0, 440.0, 60.0, 50.0),
        },
    )?;
    Ok(())
}

pub fn drawing_patterns<S: Surface>(surface: &S, image: &S::Image) -> Result<()> {
    surface.set_fill_style(Style::Pattern(image))?;
    surface.fill_rect(&Rect::new(480.0, 10.0, 200.0, 150.0));
    surface.set_fill_style(Style::Named("white"))?;
    Ok(())
}

/// Every transform is bracketed by save/restore so the next lesson starts
/// from the identity matrix
pub fn drawing_transforms<S: Surface>(surface: &S, image: &S::Image) -> Result<()> {
    // move the origin, then draw at (0, 0)
    surface.save();
    surface.translate(250.0, 370.0)?;
    surface.draw_image(image, &Blit::At(Point::new(0.0, 0.0)))?;
    surface.restore();

    // rotate by PI/10 radians (18 degrees) around a translated origin
    surface.save();
    surface.translate(400.0, 370.0)?;
    surface.rotate(PI / 10.0)?;
    surface.draw_image(image, &Blit::At(Point::new(0.0, 0.0)))?;
    surface.restore();

    // flip horizontally, so x grows to the left
    surface.save();
    surface.translate(650.0, 370.0)?;
    surface.scale(-1.0, 1.0)?;
    surface.draw_image(image, &Blit::At(Point::new(0.0, 0.0)))?;
    surface.restore();

    Ok(())
}

/// Sprite sheet animation is not implemented yet: draws nothing.
pub fn drawing_sprite_sheet<S: Surface>(_surface: &S, _sheet: &S::Image) -> Result<()> {
    log::debug!("sprite sheet lesson is not implemented");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        FillRect(Rect),
        StrokeRect(Rect),
        ClearRect(Rect),
        BeginPath,
        MoveTo(Point),
        LineTo(Point),
        ClosePath,
        Fill,
        Stroke,
        Arc(Arc),
        Font(String),
        FillText(String, Point),
        StrokeText(String, Point),
        FillStyle(String),
        StrokeStyle(String),
        DrawImage(&'static str, Blit),
        Translate(f64, f64),
        Rotate(f64),
        Scale(f64, f64),
        Save,
        Restore,
    }

    /// Surface that writes down every call
    #[derive(Default)]
    struct Recorder {
        ops: RefCell<Vec<Op>>,
    }

    impl Recorder {
        fn push(&self, op: Op) {
            self.ops.borrow_mut().push(op);
        }

        fn ops(&self) -> Vec<Op> {
            self.ops.borrow().clone()
        }
    }

    fn describe(style: Style<'_, &'static str>) -> String {
        match style {
            Style::Pattern(name) => format!("pattern({})", name),
            color => color.css().unwrap_or_default(),
        }
    }

    impl Surface for Recorder {
        type Image = &'static str;

        fn fill_rect(&self, rect: &Rect) {
            self.push(Op::FillRect(*rect));
        }
        fn stroke_rect(&self, rect: &Rect) {
            self.push(Op::StrokeRect(*rect));
        }
        fn clear_rect(&self, rect: &Rect) {
            self.push(Op::ClearRect(*rect));
        }
        fn begin_path(&self) {
            self.push(Op::BeginPath);
        }
        fn move_to(&self, point: Point) {
            self.push(Op::MoveTo(point));
        }
        fn line_to(&self, point: Point) {
            self.push(Op::LineTo(point));
        }
        fn close_path(&self) {
            self.push(Op::ClosePath);
        }
        fn fill(&self) {
            self.push(Op::Fill);
        }
        fn stroke(&self) {
            self.push(Op::Stroke);
        }
        fn arc(&self, arc: &Arc) -> Result<()> {
            self.push(Op::Arc(*arc));
            Ok(())
        }
        fn set_font(&self, font: &str) {
            self.push(Op::Font(font.to_string()));
        }
        fn fill_text(&self, text: &str, at: Point) -> Result<()> {
            self.push(Op::FillText(text.to_string(), at));
            Ok(())
        }
        fn stroke_text(&self, text: &str, at: Point) -> Result<()> {
            self.push(Op::StrokeText(text.to_string(), at));
            Ok(())
        }
        fn set_fill_style(&self, style: Style<'_, &'static str>) -> Result<()> {
            self.push(Op::FillStyle(describe(style)));
            Ok(())
        }
        fn set_stroke_style(&self, style: Style<'_, &'static str>) -> Result<()> {
            self.push(Op::StrokeStyle(describe(style)));
            Ok(())
        }
        fn draw_image(&self, image: &&'static str, blit: &Blit) -> Result<()> {
            self.push(Op::DrawImage(*image, *blit));
            Ok(())
        }
        fn translate(&self, x: f64, y: f64) -> Result<()> {
            self.push(Op::Translate(x, y));
            Ok(())
        }
        fn rotate(&self, radians: f64) -> Result<()> {
            self.push(Op::Rotate(radians));
            Ok(())
        }
        fn scale(&self, x: f64, y: f64) -> Result<()> {
            self.push(Op::Scale(x, y));
            Ok(())
        }
        fn save(&self) {
            self.push(Op::Save);
        }
        fn restore(&self) {
            self.push(Op::Restore);
        }
    }

    #[test]
    fn rectangles_fill_then_stroke_then_clear() {
        let surface = Recorder::default();
        drawing_rectangles(&surface);
        assert_eq!(
            surface.ops(),
            vec![
                Op::FillRect(Rect::new(200.0, 10.0, 100.0, 100.0)),
                Op::FillRect(Rect::new(50.0, 70.0, 90.0, 30.0)),
                Op::StrokeRect(Rect::new(110.0, 10.0, 50.0, 50.0)),
                Op::StrokeRect(Rect::new(30.0, 10.0, 50.0, 50.0)),
                Op::ClearRect(Rect::new(210.0, 20.0, 30.0, 20.0)),
                Op::ClearRect(Rect::new(260.0, 20.0, 30.0, 20.0)),
            ]
        );
    }

    #[test]
    fn every_path_starts_with_begin_path() {
        let surface = Recorder::default();
        drawing_complex_paths(&surface).unwrap();
        let ops = surface.ops();

        assert_eq!(ops.first(), Some(&Op::BeginPath));
        let shapes = ops.iter().filter(|op| **op == Op::BeginPath).count();
        let paints = ops
            .iter()
            .filter(|op| matches!(op, Op::Fill | Op::Stroke))
            .count();
        assert_eq!(shapes, 6);
        assert_eq!(paints, 6);
    }

    #[test]
    fn arcs_cover_half_full_and_three_quarter_turns() {
        let surface = Recorder::default();
        drawing_complex_paths(&surface).unwrap();
        let arcs: Vec<Arc> = surface
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Arc(arc) => Some(arc),
                _ => None,
            })
            .collect();

        assert_eq!(arcs.len(), 3);
        assert_relative_eq!(arcs[0].end_angle.to_degrees(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(arcs[1].end_angle.to_degrees(), 360.0, epsilon = 1e-9);
        assert_relative_eq!(arcs[2].end_angle.to_degrees(), 270.0, epsilon = 1e-9);
        assert_eq!(arcs[0].direction, Direction::Anticlockwise);
        assert_eq!(arcs[2].direction, Direction::Clockwise);
    }

    #[test]
    fn text_sets_font_before_drawing() {
        let surface = Recorder::default();
        drawing_text(&surface).unwrap();
        let ops = surface.ops();
        assert_eq!(ops[0], Op::Font("10pt Arial".to_string()));
        assert!(matches!(ops[1], Op::FillText(_, _)));
        assert!(matches!(ops[3], Op::StrokeText(_, _)));
    }

    #[test]
    fn colors_use_every_style_and_reset_to_white() {
        let surface = Recorder::default();
        drawing_colors(&surface).unwrap();
        let ops = surface.ops();
        assert!(ops.contains(&Op::FillStyle("red".into())));
        assert!(ops.contains(&Op::StrokeStyle("rgb(0, 0, 255)".into())));
        assert!(ops.contains(&Op::FillStyle("rgba(0, 255, 0, 0.6)".into())));
        assert_eq!(
            ops[ops.len() - 2..],
            [
                Op::FillStyle("white".into()),
                Op::StrokeStyle("white".into())
            ]
        );
    }

    #[test]
    fn images_use_all_three_blits() {
        let surface = Recorder::default();
        drawing_images(&surface, &"castle.png").unwrap();
        let blits: Vec<Blit> = surface
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::DrawImage("castle.png", blit) => Some(blit),
                _ => None,
            })
            .collect();
        assert!(matches!(blits[..], [Blit::At(_), Blit::Scaled(_), Blit::Cropped { .. }]));
    }

    #[test]
    fn pattern_fills_then_restores_white() {
        let surface = Recorder::default();
        drawing_patterns(&surface, &"tile.png").unwrap();
        assert_eq!(
            surface.ops(),
            vec![
                Op::FillStyle("pattern(tile.png)".into()),
                Op::FillRect(Rect::new(480.0, 10.0, 200.0, 150.0)),
                Op::FillStyle("white".into()),
            ]
        );
    }

    #[test]
    fn transforms_are_balanced() {
        let surface = Recorder::default();
        drawing_transforms(&surface, &"castle.png").unwrap();

        let mut depth = 0i32;
        for op in surface.ops() {
            match op {
                Op::Save => depth += 1,
                Op::Restore => depth -= 1,
                Op::Translate(..) | Op::Rotate(_) | Op::Scale(..) | Op::DrawImage(..) => {
                    assert!(depth > 0, "{:?} outside save/restore", op)
                }
                _ => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn rotation_is_eighteen_degrees() {
        let surface = Recorder::default();
        drawing_transforms(&surface, &"castle.png").unwrap();
        let radians = surface
            .ops()
            .into_iter()
            .find_map(|op| match op {
                Op::Rotate(radians) => Some(radians),
                _ => None,
            })
            .unwrap();
        assert_relative_eq!(radians.to_degrees(), 18.0, epsilon = 1e-9);
    }

    #[test]
    fn sprite_sheet_draws_nothing() {
        let surface = Recorder::default();
        drawing_sprite_sheet(&surface, &"sheet.png").unwrap();
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn run_lessons_starts_with_white_ink() {
        let surface = Recorder::default();
        run_lessons(&surface, &[Lesson::Rectangles], None).unwrap();
        let ops = surface.ops();
        assert_eq!(ops[0], Op::FillStyle("white".into()));
        assert_eq!(ops[1], Op::StrokeStyle("white".into()));
        assert_eq!(ops.len(), 2 + 6);
    }

    #[test]
    fn run_lessons_skips_image_lessons_without_an_image() {
        let surface = Recorder::default();
        run_lessons(&surface, &[Lesson::Images, Lesson::Patterns], None).unwrap();
        assert_eq!(surface.ops().len(), 2);
    }

    #[test]
    fn lesson_names_round_trip() {
        for lesson in Lesson::ALL {
            assert_eq!(Lesson::from_name(lesson.name()), Some(lesson));
        }
        assert_eq!(Lesson::from_name("sierpinski"), None);
    }
}
