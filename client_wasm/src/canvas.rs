//! `Surface` backed by a canvas 2D context.

use game_core::{Surface, SurfaceError};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn js_error(operation: &'static str) -> impl FnOnce(JsValue) -> SurfaceError {
    move |value| SurfaceError::new(operation, format!("{value:?}"))
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, min: Vec2, size: Vec2) -> Result<(), SurfaceError> {
        self.ctx
            .clear_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: &str) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(js_error("arc"))?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: &[f32],
        color: &str,
    ) -> Result<(), SurfaceError> {
        let pattern: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d as f64)).collect();
        self.ctx
            .set_line_dash(&pattern)
            .map_err(js_error("set_line_dash"))?;
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        font_px: f32,
        color: &str,
    ) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&format!("{font_px}px Arial"));
        self.ctx
            .fill_text(text, pos.x as f64, pos.y as f64)
            .map_err(js_error("fill_text"))
    }
}
