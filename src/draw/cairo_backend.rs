//! Cairo/Pango implementation of [`DrawingContext`].

use super::color::Color;
use super::context::DrawingContext;
use super::element::{Extent, Point};
use super::font::FontDescriptor;

/// Paints diagram primitives onto a Cairo context.
///
/// Cairo reports drawing failures through `Result`s that only signal a context
/// already in an error state; like the rest of the renderer we ignore them and
/// leave the surface as-is.
pub struct CairoContext {
    ctx: cairo::Context,
}

impl CairoContext {
    pub fn new(ctx: cairo::Context) -> Self {
        Self { ctx }
    }

    fn set_stroke(&self, color: Color, line_width: f64) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(line_width);
    }
}

impl DrawingContext for CairoContext {
    fn clear(&mut self) {
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Clear);
        let _ = self.ctx.paint();
        self.ctx.restore().ok();
    }

    fn stroke_rect(&mut self, origin: Point, extent: Extent, color: Color, line_width: f64) {
        self.set_stroke(color, line_width);
        self.ctx.set_line_join(cairo::LineJoin::Miter);

        // Normalize so a box dragged up or left strokes the same outline
        let (x, w) = if extent.width >= 0.0 {
            (origin.x, extent.width)
        } else {
            (origin.x + extent.width, -extent.width)
        };
        let (y, h) = if extent.height >= 0.0 {
            (origin.y, extent.height)
        } else {
            (origin.y + extent.height, -extent.height)
        };

        self.ctx.rectangle(x, y, w, h);
        let _ = self.ctx.stroke();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, line_width: f64) {
        self.set_stroke(color, line_width);
        self.ctx.new_sub_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
        let _ = self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, line_width: f64) {
        self.set_stroke(color, line_width);
        self.ctx.set_line_cap(cairo::LineCap::Butt);
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        let _ = self.ctx.stroke();
    }

    fn fill_text(&mut self, at: Point, text: &str, color: Color, font: &FontDescriptor) {
        if text.is_empty() {
            return;
        }

        // Keep font and antialias settings from leaking into later strokes
        self.ctx.save().ok();
        self.ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(&self.ctx);
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left; `at` is the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        self.ctx.move_to(at.x, at.y - baseline);
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        pangocairo::functions::show_layout(&self.ctx, &layout);

        self.ctx.restore().ok();
    }
}
