//! SVG step plot.

use super::{legend_label, RenderConfig, PALETTE};
use crate::profile::{PerformanceProfile, ProfileCurve};
use std::fmt::Write as _;

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 220.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;
const X_TICKS: usize = 5;
const Y_TICKS: usize = 4;

/// Maps data coordinates onto the canvas.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x0: f64,
    x1: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Frame {
    fn new(config: &RenderConfig, (x0, x1): (f64, f64)) -> Self {
        let width = f64::from(config.width).max(MARGIN_LEFT + MARGIN_RIGHT + 1.0);
        let height = f64::from(config.height).max(MARGIN_TOP + MARGIN_BOTTOM + 1.0);
        Self {
            x0,
            x1,
            left: MARGIN_LEFT,
            right: width - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height - MARGIN_BOTTOM,
        }
    }

    fn px(&self, x: f64) -> f64 {
        self.left + (x - self.x0) / (self.x1 - self.x0) * (self.right - self.left)
    }

    fn py(&self, y: f64) -> f64 {
        self.bottom - y * (self.bottom - self.top)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Step polyline clipped to `[x0, x1]`.
///
/// Vertices left of the axis collapse onto it; the line stops at the first
/// vertex past the right edge.
fn clipped_polyline(curve: &ProfileCurve, x0: f64, x1: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    let mut last_y = 0.0;
    for (x, y) in curve.step_polyline(x1) {
        if x > x1 {
            out.push((x1, last_y));
            break;
        }
        out.push((x.max(x0), y));
        last_y = y;
    }
    out
}

/// Render the profile as a standalone SVG document.
///
/// One post-step polyline per solver, axes with ticks, and a legend that
/// carries each solver's failure count.
#[must_use]
pub fn render_svg(profile: &PerformanceProfile, config: &RenderConfig) -> String {
    let range = profile.tau_range();
    let frame = Frame::new(config, range);
    let mut svg = String::new();

    // write! into a String cannot fail
    let _ = writeln!(
        svg,
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <style>
    .title {{ font: bold 18px sans-serif; fill: #333; }}
    .axis {{ font: 12px sans-serif; fill: #333; }}
    .tick {{ font: 10px sans-serif; fill: #666; }}
    .legend {{ font: 12px sans-serif; fill: #333; }}
  </style>
  <rect width="{w}" height="{h}" fill="#fafafa"/>
  <text x="{cx:.1}" y="30" text-anchor="middle" class="title">{title}</text>"##,
        w = config.width,
        h = config.height,
        cx = f64::from(config.width) / 2.0,
        title = escape(&config.title),
    );

    write_axes(&mut svg, &frame, profile, config);

    for (i, curve) in profile.curves().iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<String> = clipped_polyline(curve, range.0, range.1)
            .into_iter()
            .map(|(x, y)| format!("{:.2},{:.2}", frame.px(x), frame.py(y)))
            .collect();
        let _ = writeln!(
            svg,
            r#"  <polyline class="curve" fill="none" stroke="{color}" stroke-width="2" points="{}"/>"#,
            points.join(" ")
        );

        let ly = frame.top + 20.0 * i as f64;
        let lx = frame.right + 20.0;
        let _ = writeln!(
            svg,
            r#"  <line x1="{lx:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{color}" stroke-width="2"/>"#,
            lx + 24.0
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" class="legend">{}</text>"#,
            lx + 30.0,
            ly + 4.0,
            escape(&legend_label(curve.solver(), curve.failures()))
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_axes(svg: &mut String, frame: &Frame, profile: &PerformanceProfile, config: &RenderConfig) {
    let _ = writeln!(
        svg,
        r##"  <line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="#333"/>
  <line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="#333"/>"##,
        l = frame.left,
        r = frame.right,
        t = frame.top,
        b = frame.bottom,
    );

    for k in 0..=X_TICKS {
        let x = frame.x0 + (frame.x1 - frame.x0) * k as f64 / X_TICKS as f64;
        let px = frame.px(x);
        let _ = writeln!(
            svg,
            r##"  <line x1="{px:.1}" y1="{b:.1}" x2="{px:.1}" y2="{:.1}" stroke="#333"/>
  <text x="{px:.1}" y="{:.1}" text-anchor="middle" class="tick">{x:.2}</text>"##,
            frame.bottom + 5.0,
            frame.bottom + 18.0,
            b = frame.bottom,
        );
    }

    for k in 0..=Y_TICKS {
        let y = k as f64 / Y_TICKS as f64;
        let py = frame.py(y);
        let _ = writeln!(
            svg,
            r##"  <line x1="{:.1}" y1="{py:.1}" x2="{l:.1}" y2="{py:.1}" stroke="#333"/>
  <text x="{:.1}" y="{:.1}" text-anchor="end" class="tick">{y:.2}</text>"##,
            frame.left - 5.0,
            frame.left - 8.0,
            py + 3.0,
            l = frame.left,
        );
    }

    let mid_x = (frame.left + frame.right) / 2.0;
    let mid_y = (frame.top + frame.bottom) / 2.0;
    let _ = writeln!(
        svg,
        r#"  <text x="{mid_x:.1}" y="{:.1}" text-anchor="middle" class="axis">{}</text>
  <text x="20" y="{mid_y:.1}" text-anchor="middle" class="axis" transform="rotate(-90 20 {mid_y:.1})">{}</text>"#,
        frame.bottom + 40.0,
        escape(&config.x_label_for(profile.log_scale())),
        escape(&config.y_label),
    );
}
