// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of dashboard panels.
//!
//! Marks are written in `(z_index, id)` order. Marks that carry reveal geometry start at
//! their collapsed geometry and animate to the final one with SMIL `<animate>` elements.

use kurbo::{Point, Rect};
use peniko::Brush;
use unitdash_charts::{
    Mark, MarkPayload, Panel, PathPayload, RectPayload, Reveal, RingPayload, TextAnchor,
    TextBaseline, TextPayload,
};

/// Writes one panel as a standalone `<svg>` element.
pub(crate) fn panel_to_svg(panel: &Panel) -> String {
    let view = panel.view;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet""#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        panel.display.width,
        panel.display.height
    ));
    if let Some(title) = &panel.title {
        out.push_str(&format!(r#" role="img" aria-label="{}""#, escape_xml(title)));
    }
    out.push_str(">\n");

    for mark in panel.paint_order() {
        write_mark(&mut out, mark);
    }

    out.push_str("</svg>\n");
    out
}

fn write_mark(out: &mut String, mark: &Mark) {
    let mut children = String::new();
    if let Some(tooltip) = &mark.tooltip {
        children.push_str(&format!("<title>{}</title>", escape_xml(tooltip)));
    }

    match &mark.payload {
        MarkPayload::Rect(r) => write_rect(out, &mut children, r, mark.reveal),
        MarkPayload::Ring(r) => write_ring(out, r),
        MarkPayload::Path(p) => write_path(out, p),
        MarkPayload::Text(t) => {
            write_text(out, &mut children, t, mark.reveal);
            return;
        }
    }

    if children.is_empty() {
        out.push_str("/>\n");
    } else {
        out.push('>');
        out.push_str(&children);
        out.push_str(element_close(&mark.payload));
        out.push('\n');
    }
}

fn element_close(payload: &MarkPayload) -> &'static str {
    match payload {
        MarkPayload::Rect(_) => "</rect>",
        MarkPayload::Ring(_) => "</circle>",
        MarkPayload::Path(_) => "</path>",
        MarkPayload::Text(_) => "</text>",
    }
}

fn write_rect(out: &mut String, children: &mut String, r: &RectPayload, reveal: Option<Reveal>) {
    let start = r.grow_from.unwrap_or(r.rect);
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        start.x0,
        start.y0,
        start.width(),
        start.height(),
    ));
    if r.corner_radius > 0.0 {
        // rx never exceeds half the shorter side.
        let rx = r.corner_radius.min(r.rect.width() * 0.5).min(r.rect.height() * 0.5);
        out.push_str(&format!(r#" rx="{rx}""#));
    }
    write_paint_attr(out, "fill", &r.fill);
    write_opacity(out, r.opacity);

    if let (Some(from), Some(reveal)) = (r.grow_from, reveal) {
        write_rect_animation(children, from, r.rect, reveal);
    }
}

fn write_rect_animation(children: &mut String, from: Rect, to: Rect, reveal: Reveal) {
    let attrs = [
        ("x", from.x0, to.x0),
        ("y", from.y0, to.y0),
        ("width", from.width(), to.width()),
        ("height", from.height(), to.height()),
    ];
    for (name, from, to) in attrs {
        if from != to {
            write_animate(children, name, from, to, reveal);
        }
    }
}

fn write_animate(children: &mut String, name: &str, from: f64, to: f64, reveal: Reveal) {
    children.push_str(&format!(
        r#"<animate attributeName="{name}" from="{from}" to="{to}" begin="{}ms" dur="{}ms" fill="freeze"/>"#,
        reveal.delay_ms, reveal.duration_ms
    ));
}

fn write_ring(out: &mut String, r: &RingPayload) {
    out.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="none""#,
        r.center.x, r.center.y, r.radius
    ));
    write_paint_attr(out, "stroke", &r.stroke);
    out.push_str(&format!(r#" stroke-width="{}""#, r.stroke_width));
    if let Some((dash, gap)) = r.dash {
        out.push_str(&format!(
            r#" stroke-dasharray="{dash} {gap}" stroke-dashoffset="{}""#,
            r.dash_offset
        ));
    }
    if r.rotation_deg != 0.0 {
        out.push_str(&format!(
            r#" transform="rotate({} {} {})""#,
            r.rotation_deg, r.center.x, r.center.y
        ));
    }
    if r.round_caps {
        out.push_str(r#" stroke-linecap="round""#);
    }
    write_opacity(out, r.opacity);
}

fn write_path(out: &mut String, p: &PathPayload) {
    let d = p.path.to_svg();
    out.push_str(&format!(r#"<path d="{d}""#));
    write_paint_attr(out, "fill", &p.fill);
    if p.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &p.stroke);
        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
    }
    write_opacity(out, p.opacity);
}

fn write_text(out: &mut String, children: &mut String, t: &TextPayload, reveal: Option<Reveal>) {
    let start = t.slide_from.unwrap_or(t.pos);
    let baseline = match t.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
    };
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
        start.x, start.y, t.font_size, baseline
    ));
    out.push_str(match t.anchor {
        TextAnchor::Start => r#" text-anchor="start""#,
        TextAnchor::Middle => r#" text-anchor="middle""#,
        TextAnchor::End => r#" text-anchor="end""#,
    });
    if t.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    write_paint_attr(out, "fill", &t.fill);
    out.push('>');
    out.push_str(children);
    if let (Some(from), Some(reveal)) = (t.slide_from, reveal) {
        write_point_animation(out, from, t.pos, reveal);
    }
    out.push_str(&escape_xml(&t.text));
    out.push_str("</text>\n");
}

fn write_point_animation(out: &mut String, from: Point, to: Point, reveal: Reveal) {
    if from.x != to.x {
        write_animate(out, "x", from.x, to.x, reveal);
    }
    if from.y != to.y {
        write_animate(out, "y", from.y, to.y, reveal);
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn write_opacity(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        out.push_str(&format!(r#" opacity="{opacity}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use unitdash_charts::{MarkId, RectMarkSpec, RevealState, RingMarkSpec, TextMarkSpec};
    use unitdash_core::{ArcSegmenter, Segment};

    use super::*;

    fn panel_with(marks: Vec<Mark>) -> Panel {
        let mut panel = Panel::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_title("Test & Co");
        panel.extend(marks);
        panel
    }

    #[test]
    fn rings_carry_dash_and_rotation_attributes() {
        let arcs = ArcSegmenter::new(45.0).segments(&[
            Segment::new("A", 50.0, css::RED),
            Segment::new("B", 25.0, css::BLUE),
        ]);
        let mark = RingMarkSpec::segment(MarkId::from_raw(1), Point::new(50.0, 50.0), 45.0, &arcs[1])
            .with_stroke_width(8.0)
            .with_rotation(-90.0)
            .with_round_caps()
            .mark();
        let svg = panel_to_svg(&panel_with(vec![mark]));

        assert!(svg.contains(&format!(r#"stroke-dasharray="{} {}""#, arcs[1].dash, arcs[1].gap)));
        assert!(svg.contains(&format!(r#"stroke-dashoffset="{}""#, -arcs[0].dash)));
        assert!(svg.contains(r#"transform="rotate(-90 50 50)""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains(r##"stroke="#0000ff""##));
    }

    #[test]
    fn revealed_rects_start_collapsed_and_animate() {
        let mark = RectMarkSpec::new(MarkId::from_raw(1), Rect::new(0.0, 20.0, 10.0, 100.0))
            .with_reveal(
                Rect::new(0.0, 100.0, 10.0, 100.0),
                Reveal::default(),
                RevealState::Revealed,
            )
            .mark();
        let svg = panel_to_svg(&panel_with(vec![mark]));

        assert!(svg.contains(r#"<rect x="0" y="100" width="10" height="0""#), "{svg}");
        assert!(svg.contains(
            r#"<animate attributeName="y" from="100" to="20" begin="500ms" dur="1200ms" fill="freeze"/>"#
        ));
        assert!(svg.contains(r#"attributeName="height" from="0" to="80""#));
        assert!(!svg.contains(r#"attributeName="x""#));
        assert!(svg.contains("</rect>"));
    }

    #[test]
    fn tooltips_become_title_elements() {
        let mark = RectMarkSpec::new(MarkId::from_raw(1), Rect::new(0.0, 0.0, 10.0, 10.0))
            .mark()
            .with_tooltip("Tag odds <35%>");
        let svg = panel_to_svg(&panel_with(vec![mark]));
        assert!(svg.contains("<title>Tag odds &lt;35%&gt;</title></rect>"), "{svg}");
        assert!(svg.contains(r#"aria-label="Test &amp; Co""#));
    }

    #[test]
    fn marks_are_written_in_z_order() {
        let front = TextMarkSpec::new(MarkId::from_raw(1), Point::new(5.0, 5.0), "front")
            .bold()
            .mark();
        let back = RectMarkSpec::new(MarkId::from_raw(2), Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_z_index(-100)
            .mark();
        let svg = panel_to_svg(&panel_with(vec![front, back]));
        let rect_at = svg.find("<rect").expect("rect");
        let text_at = svg.find("<text").expect("text");
        assert!(rect_at < text_at);
        assert!(svg.contains(r#"font-weight="bold""#));
    }

    #[test]
    fn translucent_paint_gets_an_opacity_attribute() {
        let mark = RectMarkSpec::new(MarkId::from_raw(1), Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_fill(css::RED.with_alpha(0.2))
            .mark();
        let svg = panel_to_svg(&panel_with(vec![mark]));
        assert!(svg.contains(r#"fill-opacity="#), "{svg}");
    }
}
