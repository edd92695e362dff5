//! SVG visualization of a grid layout.
//!
//! Draws the container outline, one rectangle per item placement labelled
//! with its index, and a caption with the measured content height.
//!
//! # Example
//!
//! ```
//! use zengrid::{AspectRatio, GridLayoutEngine, svg::render_grid_svg};
//!
//! let mut engine = GridLayoutEngine::new(AspectRatio::new(120.0, 214.0).unwrap(), 3.0, 2, 3).unwrap();
//! let svg = render_grid_svg(&mut engine, 363.0, 8);
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::geometry::usable_width;
use crate::grid::GridLayoutEngine;

/// Width of the drawn container in SVG pixels.
const PANEL_W: f64 = 300.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin, above the caption.
const MARGIN_TOP: f64 = 20.0;
/// Height of the caption area.
const LABEL_H: f64 = 22.0;

/// Render the placements of `item_count` items at `width` as a complete SVG document.
///
/// A degenerate width or zero items renders an empty 1×1 document.
pub fn render_grid_svg(engine: &mut GridLayoutEngine, width: f64, item_count: u64) -> String {
    let Some(width) = usable_width(Some(width)) else {
        return empty();
    };
    let height = engine.measure(width, item_count);
    if height <= 0.0 {
        return empty();
    }

    let scale = PANEL_W / width;
    let panel_h = height * scale;
    let total_w = PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + panel_h + MARGIN_TOP;

    let mut svg = String::with_capacity(256 + item_count.min(4096) as usize * 160);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .index { font-size: 9px; fill: #fff; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .cell { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 0.5; }
  .cell.first { fill: #3f7fb8; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .cell { fill: #3a72a4; stroke: #5a9fd4; }
    .cell.first { fill: #2a5680; }
  }
</style>
"##,
    );

    let first_count = u64::from(engine.layout().rows().first_row_item_count());
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN_TOP + 14.0,
        escape_xml(&format!("Grid  {width}×{height}  {item_count} items"))
    ));
    svg.push('\n');

    let panel_x = MARGIN_X;
    let panel_y = MARGIN_TOP + LABEL_H;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer"/>"#,
        panel_x, panel_y, PANEL_W, panel_h
    ));
    svg.push('\n');

    for (index, p) in engine.place_all(width, item_count) {
        let p = p.translate(panel_x / scale, panel_y / scale);
        let class = if index < first_count { "cell first" } else { "cell" };
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{class}" rx="1"/>"#,
            p.origin.x * scale,
            p.origin.y * scale,
            p.size.width * scale,
            p.size.height * scale
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index">{index}</text>"#,
            p.origin.x * scale + 3.0,
            p.origin.y * scale + 11.0
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

fn empty() -> String {
    String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
