//! # Watch Face Rendering
//!
//! This module turns a [`DisplaySnapshot`] into draw calls. The drawing
//! surface is abstracted behind [`Canvas`] so the same frame logic can feed
//! an embedded-graphics display, an in-memory frame buffer, or a recording
//! used by tests and the `--stdout` development mode.
//!
//! ## Frame Layout
//! 1. **Background**: black in ambient mode, the configured color otherwise
//! 2. **Time**: centred horizontally on the `y_offset` baseline
//! 3. **Icon**: centred on the screen when the condition code has one
//! 4. **Temperatures**: `"<min> - <max>"` centred below the icon, or on the
//!    screen centre when there is no icon

use crate::config::Config;
use crate::icons::{IconBitmap, WeatherIcon};
use crate::snapshot::DisplaySnapshot;
use embedded_graphics::{
    image::Image,
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{BinaryColor, Rgb888, RgbColor},
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Text},
};
use std::fmt;

/// How a piece of text is drawn. Text is always centred on its anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Requested text size in pixels
    pub size: f32,
    pub color: Rgb888,
    pub anti_alias: bool,
}

/// A drawing surface the face renders into.
pub trait Canvas {
    /// Paint the whole surface.
    fn fill(&mut self, color: Rgb888);

    /// Draw `text` centred horizontally on `anchor`, with `anchor.y` as baseline.
    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle);

    /// Draw an icon with its top-left corner at `top_left`.
    fn draw_icon(&mut self, bitmap: &IconBitmap, top_left: Point);
}

/// Issues the draw calls for one frame.
#[derive(Clone, Debug)]
pub struct FrameRenderer {
    background: Rgb888,
    text_color: Rgb888,
}

impl FrameRenderer {
    pub fn new(background: Rgb888, text_color: Rgb888) -> Self {
        FrameRenderer {
            background,
            text_color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.background_color(), config.text_color())
    }

    /// Draw `snapshot` onto a surface of size `bounds`.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        snapshot: &DisplaySnapshot,
        canvas: &mut C,
        bounds: Size,
    ) {
        let width = bounds.width as i32;
        let height = bounds.height as i32;
        let geometry = &snapshot.geometry;

        if snapshot.ambient {
            canvas.fill(Rgb888::BLACK);
        } else {
            canvas.fill(self.background);
        }

        let center_x = width / 2;
        canvas.draw_text(
            &snapshot.time_text(),
            Point::new(center_x, geometry.y_offset as i32),
            &TextStyle {
                size: geometry.text_size,
                color: self.text_color,
                anti_alias: snapshot.anti_alias,
            },
        );

        let bitmap = snapshot.icon().map(WeatherIcon::bitmap);
        if let Some(bitmap) = bitmap {
            canvas.draw_icon(
                bitmap,
                Point::new(
                    center_x - bitmap.width() as i32 / 2,
                    height / 2 - bitmap.height() as i32 / 2,
                ),
            );
        }

        if let Some(text) = snapshot.temperature_text() {
            let mut baseline = height as f32 / 2.0;
            if let Some(bitmap) = bitmap {
                baseline += bitmap.height() as f32 / 2.0 + geometry.temp_text_y_offset;
            }
            canvas.draw_text(
                &text,
                Point::new(center_x, baseline as i32),
                &TextStyle {
                    size: geometry.temp_text_size,
                    color: self.text_color,
                    anti_alias: true,
                },
            );
        }
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill(Rgb888),
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
    Icon {
        icon: WeatherIcon,
        top_left: Point,
    },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Fill(color) => write!(
                f,
                "fill   #{:02X}{:02X}{:02X}",
                color.r(),
                color.g(),
                color.b()
            ),
            DrawOp::Text {
                text,
                anchor,
                style,
            } => write!(
                f,
                "text   {:?} at ({}, {}) size {}{}",
                text,
                anchor.x,
                anchor.y,
                style.size,
                if style.anti_alias { "" } else { " aliased" }
            ),
            DrawOp::Icon { icon, top_left } => {
                write!(f, "icon   {:?} at ({}, {})", icon, top_left.x, top_left.y)
            }
        }
    }
}

/// Canvas that keeps the draw calls instead of executing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Text of every draw_text call, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn icons(&self) -> Vec<WeatherIcon> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Icon { icon, .. } => Some(*icon),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill(&mut self, color: Rgb888) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            anchor,
            style: *style,
        });
    }

    fn draw_icon(&mut self, bitmap: &IconBitmap, top_left: Point) {
        self.ops.push(DrawOp::Icon {
            icon: bitmap.icon,
            top_left,
        });
    }
}

/// Largest built-in mono font not taller than the requested size.
fn font_for_size(size: f32) -> &'static MonoFont<'static> {
    if size >= 20.0 {
        &FONT_10X20
    } else if size >= 15.0 {
        &FONT_9X15
    } else {
        &FONT_6X10
    }
}

/// Canvas adapter over any embedded-graphics RGB draw target.
///
/// Mono fonts have no smoothing, so `anti_alias` has no visible effect here.
pub struct GraphicsCanvas<D> {
    target: D,
    icon_color: Rgb888,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: D, icon_color: Rgb888) -> Self {
        GraphicsCanvas { target, icon_color }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn fill(&mut self, color: Rgb888) {
        self.target.clear(color).ok();
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        let character_style = MonoTextStyle::new(font_for_size(style.size), style.color);
        Text::with_alignment(text, anchor, character_style, Alignment::Center)
            .draw(&mut self.target)
            .ok();
    }

    fn draw_icon(&mut self, bitmap: &IconBitmap, top_left: Point) {
        let mut ink = Ink {
            target: &mut self.target,
            color: self.icon_color,
        };
        Image::new(bitmap.raw(), top_left).draw(&mut ink).ok();
    }
}

/// Draws the set pixels of a 1-bit image in one color; clear pixels are
/// dropped so the background shows through.
struct Ink<'a, D> {
    target: &'a mut D,
    color: Rgb888,
}

impl<D> Dimensions for Ink<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D> DrawTarget for Ink<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let color = self.color;
        self.target.draw_iter(
            pixels
                .into_iter()
                .filter(|Pixel(_, bit)| bit.is_on())
                .map(|Pixel(point, _)| Pixel(point, color)),
        )
    }
}

/// Heap canvas sized at runtime from the configured bounds.
pub type FrameBuffer = embedded_canvas::Canvas<Rgb888>;

/// Coarse preview of `frame`: one character per cell, `#` where the cell
/// differs from the top-left (background) pixel. Cells are twice as tall as
/// wide to compensate for terminal glyph aspect.
pub fn to_ascii(frame: &FrameBuffer, columns: u32) -> String {
    let Size { width, height } = frame.size();
    let frame = frame.place_at(Point::zero());
    let columns = columns.clamp(1, width.max(1));
    let cell_w = (width / columns).max(1);
    let cell_h = cell_w * 2;
    let background = frame.get_pixel(Point::zero());

    let mut out = String::new();
    for row in 0..height.div_ceil(cell_h) {
        for col in 0..columns {
            let x0 = col * cell_w;
            let y0 = row * cell_h;
            let ink = (y0..(y0 + cell_h).min(height)).any(|y| {
                (x0..(x0 + cell_w).min(width))
                    .any(|x| frame.get_pixel(Point::new(x as i32, y as i32)) != background)
            });
            out.push(if ink { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out
}
