// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static HTML page for an assembled dashboard.

use unitdash_charts::{Card, Dashboard, MapView};

use crate::svg::{escape_xml, panel_to_svg};

const STYLE: &str = r#"
body { margin: 0; background: #f3f4f6; font-family: system-ui, sans-serif; color: #1e293b; }
header { background: linear-gradient(90deg, #065f46, #047857, #059669); color: #fff; padding: 2.5rem; text-align: center; }
header h1 { margin: 0; font-size: 2.25rem; font-weight: 800; }
header p { margin: 0.25rem 0 0; font-size: 1.125rem; font-weight: 600; }
main { width: 90%; margin: 1rem auto; background: #fff; border-radius: 0.75rem; padding: 1.5rem; }
h2 { color: #334155; border-bottom: 1px solid #cbd5e1; padding: 1rem 0; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(28rem, 1fr)); gap: 1.5rem; }
.card { border-radius: 0.75rem; box-shadow: 0 10px 25px rgba(0,0,0,0.12); padding: 1.5rem; background: linear-gradient(135deg, #fff, #f8fafc); }
.card h3 { margin: 0; font-size: 1.25rem; }
.card .subtitle { margin: 0.25rem 0 1rem; font-size: 0.75rem; color: #475569; }
.panels { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: flex-start; justify-content: center; }
.panel figcaption { font-size: 0.875rem; font-weight: 600; text-align: center; color: #475569; }
.badges { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-top: 1rem; }
.badges .label { font-size: 0.875rem; color: #475569; margin-right: 0.5rem; }
.badge { display: inline-block; background: #dbeafe; color: #1d4ed8; border-radius: 9999px; padding: 0.125rem 0.625rem; font-size: 0.75rem; font-weight: 600; margin-right: 0.25rem; }
"#;

/// Renders the whole page.
pub(crate) fn render_page(dashboard: &Dashboard) -> String {
    let header = &dashboard.header;
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{} \u{2022} {}</title>\n",
        escape_xml(&header.unit),
        escape_xml(&header.species)
    ));
    out.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    out.push_str(&format!(
        "<header><h1>{}</h1><p>{} \u{2022} {}</p></header>\n<main>\n",
        escape_xml(&header.unit),
        escape_xml(&header.state),
        escape_xml(&header.species)
    ));

    for section in &dashboard.sections {
        out.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<div class=\"cards\">\n",
            escape_xml(&section.heading)
        ));
        for card in &section.cards {
            let map = dashboard.map.as_ref().filter(|_| card.holds_map);
            render_card(&mut out, card, map);
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn render_card(out: &mut String, card: &Card, map: Option<&MapView>) {
    out.push_str("<article class=\"card\"");
    if let Some(map) = map {
        // Hooks for a tile layer; the overlay SVG is drawn either way.
        if let Some(center) = map.center {
            out.push_str(&format!(" data-center=\"{},{}\"", center.lat, center.lng));
        }
        out.push_str(&format!(
            " data-zoom=\"{}\" data-tiles=\"{}\"",
            map.zoom,
            escape_xml(&map.tile_url)
        ));
    }
    out.push_str(">\n");
    out.push_str(&format!(
        "<h3>{}</h3>\n<p class=\"subtitle\">{}</p>\n<div class=\"panels\">\n",
        escape_xml(&card.title),
        escape_xml(&card.subtitle)
    ));
    for panel in &card.panels {
        out.push_str("<figure class=\"panel\">\n");
        if let Some(title) = &panel.title {
            out.push_str(&format!("<figcaption>{}</figcaption>\n", escape_xml(title)));
        }
        out.push_str(&panel_to_svg(panel));
        out.push_str("</figure>\n");
    }
    out.push_str("</div>\n");

    if !card.badges.is_empty() {
        out.push_str("<footer class=\"badges\">\n");
        for group in &card.badges {
            out.push_str(&format!(
                "<div><span class=\"label\">{}:</span>",
                escape_xml(&group.label)
            ));
            for badge in &group.badges {
                out.push_str(&format!("<span class=\"badge\">{}</span>", escape_xml(badge)));
            }
            out.push_str("</div>\n");
        }
        out.push_str("</footer>\n");
    }
    out.push_str("</article>\n");
}

#[cfg(test)]
mod tests {
    use unitdash_charts::{HeuristicTextMeasurer, MapOverlaySpec};
    use unitdash_core::LatLng;

    use super::*;
    use crate::profile::UnitProfile;

    fn page() -> String {
        let spec = UnitProfile::default().to_dashboard().expect("default profile is valid");
        render_page(&spec.build(&HeuristicTextMeasurer))
    }

    #[test]
    fn page_has_header_sections_and_badges() {
        let html = page();
        assert!(html.contains("<h1>GMU 551</h1>"));
        assert!(html.contains("<p>Colorado \u{2022} Elk</p>"));
        assert!(html.contains("<h2>Location &amp; Access</h2>"));
        assert!(html.contains("<h2>Odds and Statistics</h2>"));
        assert!(html.contains("<span class=\"badge\">5 preference points</span>"));
    }

    #[test]
    fn map_card_carries_tile_hooks() {
        let html = page();
        assert!(html.contains("data-zoom=\"12\""));
        assert!(html.contains("data-tiles=\"https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png\""));
        assert!(html.contains("data-center=\""));
        assert_eq!(html.matches("data-zoom=").count(), 1);
    }

    #[test]
    fn map_hooks_survive_non_finite_boundary_coordinates() {
        let mut spec = UnitProfile::default().to_dashboard().expect("default profile is valid");
        spec.map = Some(MapOverlaySpec::new(
            0,
            vec![
                LatLng::new(f64::NAN, -106.3),
                LatLng::new(37.65, -106.25),
                LatLng::new(37.7, -106.3),
            ],
        ));
        let html = render_page(&spec.build(&HeuristicTextMeasurer));
        assert_eq!(html.matches("data-zoom=\"12\"").count(), 1, "{html}");
    }

    #[test]
    fn every_panel_is_an_inline_svg() {
        let html = page();
        assert_eq!(
            html.matches("<figure class=\"panel\">").count(),
            html.matches("<svg ").count()
        );
        assert!(html.contains("<figcaption>Seasons and Odds</figcaption>"));
    }
}
