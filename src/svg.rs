//! SVG visualization of an arranged arc layout.
//!
//! Draws the final frame, the solved circle or ellipse around the arc
//! origin, and every item rectangle labelled with its index. Handy for
//! eyeballing solver output in tests and bug reports.
//!
//! # Example
//!
//! ```
//! use arclayout::{ArcSpan, CircularLayout, Size, svg::render_arrangement_svg};
//!
//! let layout = CircularLayout::new(ArcSpan::FULL_TURN).origin_at_centre(true);
//! let items = [Size::new(40.0, 20.0); 6];
//! let measured = layout.measure(Size::new(300.0, 200.0), &items).unwrap();
//! let arranged = layout.arrange(measured.desired, &items, &measured.state).unwrap();
//!
//! let svg = render_arrangement_svg(&arranged, &measured.state);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::engine::{Arranged, LayoutState};
use crate::geometry::Size;

/// Largest rendered width or height in pixels; bigger layouts are scaled down.
const MAX_PANEL: f64 = 400.0;
/// Margin around the frame.
const MARGIN: f64 = 20.0;
/// Height of the caption line.
const LABEL_H: f64 = 22.0;

/// Render `arranged` as a complete SVG document.
pub fn render_arrangement_svg(arranged: &Arranged, state: &LayoutState) -> String {
    let scale = scale_to_fit(arranged.size);
    let panel_w = arranged.size.width * scale;
    let panel_h = arranged.size.height * scale;
    let total_w = panel_w + 2.0 * MARGIN;
    let total_h = panel_h + 2.0 * MARGIN + LABEL_H;

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w.ceil() as u32,
        total_h.ceil() as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .index { font-size: 10px; fill: #fff; }
  .frame { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .path { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .item { fill: #6ba3d6; fill-opacity: 0.8; stroke: #2c6faa; stroke-width: 1.5; }
  .origin { fill: #c0392b; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .frame { fill: #2d2d2d; stroke: #555; }
    .item { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&caption(arranged, state))
    ));
    svg.push('\n');

    let left = MARGIN;
    let top = MARGIN + LABEL_H;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="frame"/>"#,
        left, top, panel_w, panel_h
    ));
    svg.push('\n');

    let cx = left + arranged.origin.x * scale;
    let cy = top + arranged.origin.y * scale;
    if state.radii.x > 0.0 || state.radii.y > 0.0 {
        svg.push_str(&format!(
            r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" class="path"/>"#,
            cx,
            cy,
            state.radii.x * scale,
            state.radii.y * scale
        ));
        svg.push('\n');
    }
    svg.push_str(&format!(
        r#"<circle cx="{:.1}" cy="{:.1}" r="2.5" class="origin"/>"#,
        cx, cy
    ));
    svg.push('\n');

    for (i, rect) in arranged.rects.iter().enumerate() {
        let x = left + rect.x * scale;
        let y = top + rect.y * scale;
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="item" rx="1"/>"#,
            x,
            y,
            rect.width * scale,
            rect.height * scale
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            x + rect.width * scale / 2.0,
            y + rect.height * scale / 2.0,
            i
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn caption(arranged: &Arranged, state: &LayoutState) -> String {
    let size = arranged.size;
    if state.radii.x == state.radii.y {
        format!(
            "{}×{}  r={:.1}  n={}",
            size.width,
            size.height,
            state.radii.x,
            arranged.rects.len()
        )
    } else {
        format!(
            "{}×{}  rx={:.1} ry={:.1}  n={}",
            size.width,
            size.height,
            state.radii.x,
            state.radii.y,
            arranged.rects.len()
        )
    }
}

/// Scale factor that fits `size` within `MAX_PANEL` on both axes.
fn scale_to_fit(size: Size) -> f64 {
    let longest = size.width.max(size.height);
    if longest <= 0.0 {
        return 1.0;
    }
    (MAX_PANEL / longest).min(1.0)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
