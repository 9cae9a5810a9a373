use anyhow::anyhow;
use glam::Vec2;
use std::f64::consts::TAU;
use trail_core::{BlendMode, Rgba, StrokeStyle, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas element's 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("not a 2d context: {:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Top-left of the canvas in client coordinates.
    pub fn client_origin(&self) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        Vec2::new(rect.left() as f32, rect.top() as f32)
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        // Assigning the backing size resets context state; callers restyle
        // every frame.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.color.to_string());
        self.ctx.set_line_width(style.line_width as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Vec2) {
        self.ctx.move_to(p.x as f64, p.y as f64);
    }

    fn quadratic_curve_to(&mut self, ctrl: Vec2, end: Vec2) {
        self.ctx
            .quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, end.x as f64, end.y as f64);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }
}
