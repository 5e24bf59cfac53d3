use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PrimitiveLayer, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Frames are drawn either offscreen onto an owned image surface through
/// `Renderer::render`, or in place on an external context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in RenderFrame::DRAW_ORDER {
            match layer {
                PrimitiveLayer::Lines => stats.lines_drawn = draw_lines(context, frame)?,
                PrimitiveLayer::Texts => stats.texts_drawn = draw_texts(context, frame),
                PrimitiveLayer::Polylines => {
                    stats.polylines_drawn = draw_polylines(context, frame)?;
                }
                PrimitiveLayer::Circles => stats.circles_drawn = draw_circles(context, frame)?,
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_lines(context: &Context, frame: &RenderFrame) -> ChartResult<usize> {
    for line in &frame.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
    }
    Ok(frame.lines.len())
}

fn draw_texts(context: &Context, frame: &RenderFrame) -> usize {
    for text in &frame.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("Helvetica {}px", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);

        apply_color(context, text.color);
        context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(context, &layout);
    }
    frame.texts.len()
}

fn draw_polylines(context: &Context, frame: &RenderFrame) -> ChartResult<usize> {
    let mut drawn = 0;
    for polyline in &frame.polylines {
        let mut points = polyline.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        apply_color(context, polyline.color);
        context.set_line_width(polyline.stroke_width);
        context.move_to(first.x, first.y);
        for point in points {
            context.line_to(point.x, point.y);
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
        drawn += 1;
    }
    Ok(drawn)
}

fn draw_circles(context: &Context, frame: &RenderFrame) -> ChartResult<usize> {
    for circle in &frame.circles {
        context.new_sub_path();
        context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
        apply_color(context, circle.fill_color);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        apply_color(context, circle.stroke_color);
        context.set_line_width(circle.stroke_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
    }
    Ok(frame.circles.len())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
