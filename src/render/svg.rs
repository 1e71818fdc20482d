use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::RiverPolygon;
use crate::geometry::ViewTransform;
use crate::label::LabelPlacement;

/// Rendering knobs that do not affect placement
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Draw the dashed label safety box around the text extent
    pub safety_box: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            safety_box: false,
        }
    }
}

/// Escape the five XML special characters for element text and attributes
///
/// `&` must come first.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Build the SVG path data for the ring: a move, line segments, and a
/// closing `Z` so an unclosed input ring still renders closed
fn ring_path_data(points: &[(f64, f64)], view: &ViewTransform) -> String {
    let mut d = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        let (sx, sy) = view.project(x, y);
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {:.2} {:.2} ", command, sx, sy);
    }
    d.push('Z');
    d
}

/// Render the polygon outline and its label into a complete SVG document
///
/// The label text is emitted as-is (callers normalize it to uppercase
/// before placement) and anchored at the projected placement position.
pub fn render_svg(
    polygon: &RiverPolygon,
    placement: &LabelPlacement,
    label_text: &str,
    view: &ViewTransform,
    options: &SvgOptions,
) -> String {
    let mut svg = String::new();

    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = options.viewport_width,
        h = options.viewport_height,
    );
    let _ = writeln!(svg, "  <title>{}</title>", xml_escape(&polygon.name));

    let _ = writeln!(
        svg,
        r##"  <path d="{}" fill="#b8d8eb" stroke="#2d6a8f" stroke-width="2"/>"##,
        ring_path_data(&polygon.points, view),
    );

    let (anchor_x, anchor_y) = view.project(placement.position.0, placement.position.1);

    if options.safety_box {
        let _ = writeln!(
            svg,
            r##"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#c03030" stroke-width="1" stroke-dasharray="4 3"/>"##,
            anchor_x - placement.text_width / 2.0,
            anchor_y - placement.text_height / 2.0,
            placement.text_width,
            placement.text_height,
        );
    }

    let _ = writeln!(
        svg,
        r##"  <text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="middle" dominant-baseline="central" fill="#123a52">{}</text>"##,
        anchor_x,
        anchor_y,
        placement.font_size,
        xml_escape(label_text),
    );

    svg.push_str("</svg>\n");
    svg
}

/// Write an SVG document to disk through a buffered writer
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(svg.as_bytes())?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::place_label;
    use tempfile::tempdir;

    fn fixture() -> (RiverPolygon, LabelPlacement, ViewTransform) {
        let river = RiverPolygon::new(
            "danube",
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
        )
        .unwrap();
        let view = ViewTransform::fit(&river.bounds, 800.0, 600.0, 40.0);
        let placement = place_label(&river, "DANUBE", 24.0, &view);
        (river, placement, view)
    }

    #[test]
    fn test_render_contains_path_and_label() {
        let (river, placement, view) = fixture();
        let svg = render_svg(&river, &placement, "DANUBE", &view, &SvgOptions::default());

        assert!(svg.starts_with(r#"<?xml version="1.0""#));
        assert!(svg.contains("<path d=\"M "));
        assert!(svg.contains(">DANUBE</text>"));
        assert!(svg.contains("<title>danube</title>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_safety_box_only_when_enabled() {
        let (river, placement, view) = fixture();

        let plain = render_svg(&river, &placement, "DANUBE", &view, &SvgOptions::default());
        assert!(!plain.contains("<rect"));

        let options = SvgOptions {
            safety_box: true,
            ..SvgOptions::default()
        };
        let boxed = render_svg(&river, &placement, "DANUBE", &view, &options);
        assert!(boxed.contains("stroke-dasharray"));
    }

    #[test]
    fn test_label_text_is_escaped() {
        let (river, placement, view) = fixture();
        let svg = render_svg(&river, &placement, "R&D <CANAL>", &view, &SvgOptions::default());
        assert!(svg.contains(">R&amp;D &lt;CANAL&gt;</text>"));
    }

    #[test]
    fn test_write_svg() {
        let (river, placement, view) = fixture();
        let svg = render_svg(&river, &placement, "DANUBE", &view, &SvgOptions::default());

        let dir = tempdir().unwrap();
        let path = dir.path().join("danube.svg");
        write_svg(&path, &svg).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, svg);
    }
}
