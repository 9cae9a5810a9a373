//! Drawing surface abstraction.
//!
//! The engine never talks to a concrete canvas. Hosts implement [`Surface`]
//! over whatever 2D raster target they have (a browser canvas in the web
//! front-end, a command recorder in tests).

use glam::Vec2;
use std::fmt;

/// Compositing used for subsequent draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SourceOver,
    /// Additive: overlapping strokes brighten instead of occluding.
    Lighter,
}

impl BlendMode {
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::SourceOver => "source-over",
            BlendMode::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({},{}%,{}%,{})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Rgba {
    pub fn from_rgb(rgb: [u8; 3], alpha: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            alpha,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Hsla,
    pub line_width: f32,
}

/// A canvas-like 2D raster target with a resizable pixel size.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32);
    /// Erase the whole surface. Callers pick the blend mode beforehand.
    fn clear(&mut self);
    fn set_blend(&mut self, mode: BlendMode);
    fn set_stroke(&mut self, style: &StrokeStyle);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn quadratic_curve_to(&mut self, ctrl: Vec2, end: Vec2);
    fn stroke(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}
