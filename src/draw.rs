//! Stateless drawing routines: each call issues immediate stroke commands
//! against a `vello_cpu::RenderContext`.
//!
//! Paths are built with the crate-level `kurbo` and converted to the
//! renderer's bundled kurbo before submission.

use crate::config::Config;
use crate::foundation::core::{Affine, BezPath, Canvas, Point};
use crate::scale;

/// Stroke a straight segment between two points under the current
/// transform, stroke, and paint.
pub fn line(ctx: &mut vello_cpu::RenderContext, x1: f64, y1: f64, x2: f64, y2: f64) {
    let mut path = BezPath::new();
    path.move_to(Point::new(x1, y1));
    path.line_to(Point::new(x2, y2));
    ctx.stroke_path(&bezpath_to_cpu(&path));
}

/// Stroke an arc swept from 0° to `360 * scale` degrees around the current
/// transform origin, sampled point-by-point at 1-degree resolution.
///
/// `scale` outside `[0, 1]` is the caller's responsibility; sweeps past a
/// full turn are simply never reached by the loop bound.
pub fn animated_arc(ctx: &mut vello_cpu::RenderContext, radius: f64, scale: f64) {
    let sweep_deg = (360.0 * scale).floor() as i64;
    if sweep_deg < 1 {
        return;
    }
    let mut path = BezPath::new();
    for deg in 0..=sweep_deg {
        let a = (deg as f64).to_radians();
        let p = Point::new(radius * a.cos(), radius * a.sin());
        if deg == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    ctx.stroke_path(&bezpath_to_cpu(&path));
}

/// The composite figure for one node: a rotated radial line plus a swept
/// arc, all derived from a single driving scale.
///
/// The driving scale is first pulsed through [`scale::sinify`], then split
/// into three staggered sub-scales: arc sweep (segment 0), line growth
/// (segment 1), rotation offset (segment 2). The staggering makes the parts
/// reveal in sequence from one monotonic input.
///
/// The transform is scoped: the context is left on the identity transform on
/// exit.
pub fn arc_line(ctx: &mut vello_cpu::RenderContext, canvas: Canvas, cfg: &Config, scale: f64) {
    let sf = scale::sinify(scale);
    let sf1 = scale::divide_scale(sf, 0, cfg.parts);
    let sf2 = scale::divide_scale(sf, 1, cfg.parts);
    let sf3 = scale::divide_scale(sf, 2, cfg.parts);

    let size = canvas.min_dim() / cfg.size_factor;
    let tilt = cfg.rotation_half_angle * (2.0 * sf3 - 1.0);
    let transform = Affine::translate(canvas.center().to_vec2()) * Affine::rotate(tilt);
    ctx.set_transform(affine_to_cpu(transform));

    let x0 = size * cfg.start_length_factor;
    let x1 = x0 + size * cfg.diff_length_factor * sf2;
    line(ctx, x0, 0.0, x1, 0.0);
    animated_arc(ctx, size, sf1);

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

/// Stroke one palette node: round caps, stroke width from the canvas'
/// minimum dimension, paint from the palette entry at `index`.
pub fn node(ctx: &mut vello_cpu::RenderContext, canvas: Canvas, cfg: &Config, index: usize, scale: f64) {
    let color = cfg.palette[index];
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(canvas.min_dim() / cfg.stroke_factor)
            .with_caps(vello_cpu::kurbo::Cap::Round),
    );
    arc_line(ctx, canvas, cfg, scale);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
