use anyhow::{anyhow, Result};
use wasm_bindgen::JsValue;
use web_sys::{CanvasPattern, CanvasRenderingContext2d, HtmlImageElement};

/// TABLE
/// ┌──────────────────────── Drawing Surface ─────────────────────────┐
/// │  Lesson (primer.rs)  ──►  Surface (trait)  ──►  Renderer         │
/// │                              │                  └─ canvas 2d ctx │
/// │                              └─────────────►  recording (tests)  │
/// └──────────────────────────────────────────────────────────────────┘
/// Lessons only ever see `Surface`, so they run the same against the
/// browser canvas and against the recorder the unit tests use.
pub trait Surface {
    type Image;

    fn fill_rect(&self, rect: &Rect);
    fn stroke_rect(&self, rect: &Rect);
    fn clear_rect(&self, rect: &Rect);

    fn begin_path(&self);
    fn move_to(&self, point: Point);
    fn line_to(&self, point: Point);
    fn close_path(&self);
    fn fill(&self);
    fn stroke(&self);
    fn arc(&self, arc: &Arc) -> Result<()>;

    fn set_font(&self, font: &str);
    fn fill_text(&self, text: &str, at: Point) -> Result<()>;
    fn stroke_text(&self, text: &str, at: Point) -> Result<()>;

    fn set_fill_style(&self, style: Style<'_, Self::Image>) -> Result<()>;
    fn set_stroke_style(&self, style: Style<'_, Self::Image>) -> Result<()>;

    fn draw_image(&self, image: &Self::Image, blit: &Blit) -> Result<()>;

    fn translate(&self, x: f64, y: f64) -> Result<()>;
    fn rotate(&self, radians: f64) -> Result<()>;
    fn scale(&self, x: f64, y: f64) -> Result<()>;
    fn save(&self);
    fn restore(&self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Clockwise,
    Anticlockwise,
}

/// Circular arc around `center`, angles in radians measured from the +x axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub direction: Direction,
}

/// Fill or stroke paint. `Pattern` tiles the image in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style<'a, I> {
    Named(&'a str),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
    Pattern(&'a I),
}

impl<I> Style<'_, I> {
    /// CSS color string, `None` for patterns
    pub fn css(&self) -> Option<String> {
        match self {
            Style::Named(name) => Some(name.to_string()),
            Style::Rgb(r, g, b) => Some(format!("rgb({}, {}, {})", r, g, b)),
            Style::Rgba(r, g, b, a) => Some(format!("rgba({}, {}, {}, {})", r, g, b, a)),
            Style::Pattern(_) => None,
        }
    }
}

/// The three ways of putting an image on the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blit {
    /// natural size at a position
    At(Point),
    /// scaled into a destination rectangle
    Scaled(Rect),
    /// a source region of the image scaled into a destination rectangle
    Cropped { frame: Rect, destination: Rect },
}

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    const REPEAT: &'static str = "repeat";

    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Renderer { context }
    }

    fn pattern(&self, image: &HtmlImageElement) -> Result<CanvasPattern> {
        self.context
            .create_pattern_with_html_image_element(image, Self::REPEAT)
            .map_err(js_error("create_pattern"))?
            .ok_or_else(|| anyhow!("Pattern image has not finished loading"))
    }
}

fn js_error(operation: &str) -> impl Fn(JsValue) -> anyhow::Error + '_ {
    move |err| anyhow!("Canvas {} failed : {:#?}", operation, err)
}

impl Surface for Renderer {
    type Image = HtmlImageElement;

    fn fill_rect(&self, rect: &Rect) {
        self.context
            .fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_rect(&self, rect: &Rect) {
        self.context
            .stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn clear_rect(&self, rect: &Rect) {
        self.context
            .clear_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn begin_path(&self) {
        self.context.begin_path();
    }

    fn move_to(&self, point: Point) {
        self.context.move_to(point.x, point.y);
    }

    fn line_to(&self, point: Point) {
        self.context.line_to(point.x, point.y);
    }

    fn close_path(&self) {
        self.context.close_path();
    }

    fn fill(&self) {
        self.context.fill();
    }

    fn stroke(&self) {
        self.context.stroke();
    }

    fn arc(&self, arc: &Arc) -> Result<()> {
        self.context
            .arc_with_anticlockwise(
                arc.center.x,
                arc.center.y,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                arc.direction == Direction::Anticlockwise,
            )
            .map_err(js_error("arc"))
    }

    fn set_font(&self, font: &str) {
        self.context.set_font(font);
    }

    fn fill_text(&self, text: &str, at: Point) -> Result<()> {
        self.context
            .fill_text(text, at.x, at.y)
            .map_err(js_error("fill_text"))
    }

    fn stroke_text(&self, text: &str, at: Point) -> Result<()> {
        self.context
            .stroke_text(text, at.x, at.y)
            .map_err(js_error("stroke_text"))
    }

    fn set_fill_style(&self, style: Style<'_, HtmlImageElement>) -> Result<()> {
        match style {
            Style::Pattern(image) => {
                let pattern = self.pattern(image)?;
                self.context.set_fill_style_canvas_pattern(&pattern);
            }
            color => {
                if let Some(css) = color.css() {
                    self.context.set_fill_style_str(&css);
                }
            }
        }
        Ok(())
    }

    fn set_stroke_style(&self, style: Style<'_, HtmlImageElement>) -> Result<()> {
        match style {
            Style::Pattern(image) => {
                let pattern = self.pattern(image)?;
                self.context.set_stroke_style_canvas_pattern(&pattern);
            }
            color => {
                if let Some(css) = color.css() {
                    self.context.set_stroke_style_str(&css);
                }
            }
        }
        Ok(())
    }

    fn draw_image(&self, image: &HtmlImageElement, blit: &Blit) -> Result<()> {
        let drawn = match blit {
            Blit::At(position) => self
                .context
                .draw_image_with_html_image_element(image, position.x, position.y),
            Blit::Scaled(destination) => self
                .context
                .draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    destination.x,
                    destination.y,
                    destination.width,
                    destination.height,
                ),
            Blit::Cropped { frame, destination } => self
                .context
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image,
                    frame.x,
                    frame.y,
                    frame.width,
                    frame.height,
                    destination.x,
                    destination.y,
                    destination.width,
                    destination.height,
                ),
        };
        drawn.map_err(js_error("draw_image"))
    }

    fn translate(&self, x: f64, y: f64) -> Result<()> {
        self.context.translate(x, y).map_err(js_error("translate"))
    }

    fn rotate(&self, radians: f64) -> Result<()> {
        self.context.rotate(radians).map_err(js_error("rotate"))
    }

    fn scale(&self, x: f64, y: f64) -> Result<()> {
        self.context.scale(x, y).map_err(js_error("scale"))
    }

    fn save(&self) {
        self.context.save();
    }

    fn restore(&self) {
        self.context.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_for_named_and_numeric_colors() {
        assert_eq!(Style::<()>::Named("white").css().as_deref(), Some("white"));
        assert_eq!(
            Style::<()>::Rgb(0, 0, 255).css().as_deref(),
            Some("rgb(0, 0, 255)")
        );
        assert_eq!(
            Style::<()>::Rgba(0, 255, 0, 0.6).css().as_deref(),
            Some("rgba(0, 255, 0, 0.6)")
        );
    }

    #[test]
    fn patterns_have_no_css() {
        let tile = ();
        assert_eq!(Style::Pattern(&tile).css(), None);
    }
}
