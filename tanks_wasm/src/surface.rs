use tanks_core::DrawSurface;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Browser canvas as a drawing target for the Tank renderer
pub struct CanvasSurface<'a>(pub &'a CanvasRenderingContext2d);

impl DrawSurface for CanvasSurface<'_> {
    type Error = JsValue;

    fn save(&mut self) {
        self.0.save();
    }

    fn restore(&mut self) {
        self.0.restore();
    }

    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn close_path(&mut self) {
        self.0.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.0.quadratic_curve_to(cpx, cpy, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        self.0.arc(x, y, radius, start, end)
    }

    fn fill(&mut self) {
        self.0.fill();
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.stroke_rect(x, y, w, h);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.0.translate(x, y)
    }

    fn rotate(&mut self, angle: f64) -> Result<(), JsValue> {
        self.0.rotate(angle)
    }

    fn set_fill_style(&mut self, color: &str) {
        self.0.set_fill_style(&color.into());
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.0.set_stroke_style(&color.into());
    }

    fn set_line_width(&mut self, width: f64) {
        self.0.set_line_width(width);
    }

    fn set_line_join(&mut self, join: &str) {
        self.0.set_line_join(join);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.0.set_global_alpha(alpha);
    }
}
