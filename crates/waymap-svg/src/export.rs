#![forbid(unsafe_code)]

//! Standalone SVG document export for a persona roadmap.
//!
//! [`SvgExporter`] runs the layout pass and assembles the full diagram:
//! background, spine connections, detail connections, node cards with
//! titles, and section labels. Connections are painted before nodes so
//! they sit behind the cards; spine edges are painted before detail edges.

use std::fmt::Write;

use waymap_layout::{
    Connection, ConnectionKind, LayoutConfig, NodeKind, NodePosition, calculate_node_positions,
    canvas_height, canvas_width, section_labels,
};
use waymap_model::Persona;

use crate::path::{PathStyle, curved_path, path_attributes, vertical_curved_path};

/// Rendered width of a main topic card.
const MAIN_CARD_WIDTH: f64 = 200.0;

/// Rendered width of a detail card.
const DETAIL_CARD_WIDTH: f64 = 180.0;

/// Configuration for SVG document export.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    /// Document width override. Defaults to the layout's canvas width.
    pub width: Option<f64>,
    /// Document height override. Defaults to the layout's canvas height.
    pub height: Option<f64>,
    /// Font family for card titles and section labels.
    pub font_family: String,
    /// Background fill, or `None` for a transparent document.
    pub background: Option<String>,
    /// Style applied to spine connections.
    pub spine_style: PathStyle,
    /// Style applied to detail connections.
    pub detail_style: PathStyle,
    /// Whether to render card titles and section labels.
    pub show_labels: bool,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            font_family: "system-ui, sans-serif".into(),
            background: None,
            spine_style: PathStyle {
                stroke: Some("#6366f1".into()),
                stroke_width: Some(3.0),
                ..PathStyle::default()
            },
            detail_style: PathStyle {
                stroke_dasharray: Some("6 4".into()),
                ..PathStyle::default()
            },
            show_labels: true,
        }
    }
}

impl SvgExporter {
    /// Export a persona to a complete `<svg>` document string.
    ///
    /// Deterministic: the same persona and config always produce the same
    /// document.
    #[must_use]
    pub fn export(&self, persona: &Persona, config: &LayoutConfig) -> String {
        let positions = calculate_node_positions(persona, config);
        let width = self.width.unwrap_or_else(|| canvas_width(config));
        let height = self.height.unwrap_or_else(|| canvas_height(persona, config));

        let mut out = String::with_capacity(4096);
        write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">"
        )
        .unwrap();

        if let Some(background) = &self.background {
            write!(
                out,
                "<rect width=\"100%\" height=\"100%\" fill=\"{background}\"/>"
            )
            .unwrap();
        }

        // Spine first, then detail, so the solid spine never paints over
        // the dashed branch lines' endpoints.
        for connection in &positions.connections {
            if connection.kind == ConnectionKind::Spine {
                self.write_connection(&mut out, connection);
            }
        }
        for connection in &positions.connections {
            if connection.kind == ConnectionKind::Detail {
                self.write_connection(&mut out, connection);
            }
        }

        write!(out, "<g font-family=\"{}\">", self.font_family).unwrap();

        if self.show_labels {
            for label in section_labels(persona, config) {
                write!(
                    out,
                    "<text class=\"section-label\" x=\"{}\" y=\"{}\" \
                     text-anchor=\"middle\" font-size=\"14\" letter-spacing=\"2\">",
                    config.center_x, label.y
                )
                .unwrap();
                xml_escape_into(&mut out, &label.label);
                out.push_str("</text>");
            }
        }

        let index = waymap_model::NodeIndex::new(persona);
        for node in positions
            .left
            .iter()
            .chain(&positions.center)
            .chain(&positions.right)
        {
            let title = index.get(&node.id).map(|n| n.title()).unwrap_or("");
            self.write_node(&mut out, node, config, title);
        }

        out.push_str("</g></svg>");
        out
    }

    fn write_connection(&self, out: &mut String, connection: &Connection) {
        let (d, style) = match connection.kind {
            ConnectionKind::Spine => (
                vertical_curved_path(connection.from, connection.to),
                &self.spine_style,
            ),
            ConnectionKind::Detail => (
                curved_path(connection.from, connection.to),
                &self.detail_style,
            ),
        };
        out.push_str("<path ");
        path_attributes(d, style).write_svg(out);
        out.push_str("/>");
    }

    fn write_node(
        &self,
        out: &mut String,
        node: &NodePosition,
        config: &LayoutConfig,
        title: &str,
    ) {
        let (card_width, card_height, class) = match node.kind {
            NodeKind::Main => (MAIN_CARD_WIDTH, config.main_node_height, "main-topic"),
            NodeKind::Detail => (DETAIL_CARD_WIDTH, config.detail_node_height, "detail-node"),
        };
        let x = node.x - card_width / 2.0;
        let y = node.y - card_height / 2.0;

        write!(
            out,
            "<rect class=\"{class}\" x=\"{x}\" y=\"{y}\" \
             width=\"{card_width}\" height=\"{card_height}\" rx=\"8\" \
             fill=\"none\" stroke=\"currentColor\"/>"
        )
        .unwrap();

        if self.show_labels && !title.is_empty() {
            write!(
                out,
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" \
                 dominant-baseline=\"middle\" font-size=\"13\">",
                node.x, node.y
            )
            .unwrap();
            xml_escape_into(out, title);
            out.push_str("</text>");
        }
    }
}

/// Escape text content for XML.
fn xml_escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymap_model::{DetailNode, MainTopic, ResourceBuckets, Section, Side};

    fn sample_persona() -> Persona {
        Persona {
            id: "p".into(),
            title: "P".into(),
            subtitle: String::new(),
            icon: String::new(),
            sections: vec![Section {
                id: "s1".into(),
                label: "Tools & <Agents>".into(),
                topics: vec![MainTopic {
                    id: "t1".into(),
                    title: "Prompting \"well\"".into(),
                    summary: String::new(),
                    children_side: Side::Left,
                    children: vec![
                        DetailNode {
                            id: "d1".into(),
                            title: "Context".into(),
                            summary: String::new(),
                            resources: ResourceBuckets::default(),
                        },
                        DetailNode {
                            id: "d2".into(),
                            title: "Tokens".into(),
                            summary: String::new(),
                            resources: ResourceBuckets::default(),
                        },
                    ],
                    resources: ResourceBuckets::default(),
                }],
            }],
        }
    }

    #[test]
    fn export_produces_complete_document() {
        let svg = SvgExporter::default().export(&sample_persona(), &LayoutConfig::DEFAULT);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</g></svg>"));
        // One path per detail connection (spine disabled by default).
        assert_eq!(svg.matches("<path ").count(), 2);
        // Three cards: one main topic, two details.
        assert_eq!(svg.matches("<rect class=").count(), 3);
    }

    #[test]
    fn export_escapes_text_content() {
        let svg = SvgExporter::default().export(&sample_persona(), &LayoutConfig::DEFAULT);
        assert!(svg.contains("Tools &amp; &lt;Agents&gt;"));
        assert!(svg.contains("Prompting &quot;well&quot;"));
        assert!(!svg.contains("<Agents>"));
    }

    #[test]
    fn export_with_spine_adds_spine_paths_first() {
        let config = LayoutConfig::DEFAULT.with_spine(true);
        let svg = SvgExporter::default().export(&sample_persona(), &config);
        // 2 detail + 1 spine (anchor to the only topic).
        assert_eq!(svg.matches("<path ").count(), 3);
        let spine_at = svg.find("#6366f1").unwrap();
        let dashed_at = svg.find("stroke-dasharray").unwrap();
        assert!(spine_at < dashed_at, "spine must be painted first");
    }

    #[test]
    fn export_background_and_size_overrides() {
        let exporter = SvgExporter {
            width: Some(800.0),
            height: Some(600.0),
            background: Some("#0b0b11".into()),
            ..SvgExporter::default()
        };
        let svg = exporter.export(&sample_persona(), &LayoutConfig::DEFAULT);
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert!(svg.contains("fill=\"#0b0b11\""));
    }

    #[test]
    fn export_without_labels_has_no_text() {
        let exporter = SvgExporter {
            show_labels: false,
            ..SvgExporter::default()
        };
        let svg = exporter.export(&sample_persona(), &LayoutConfig::DEFAULT);
        assert!(!svg.contains("<text"));
        // Cards still drawn.
        assert_eq!(svg.matches("<rect class=").count(), 3);
    }

    #[test]
    fn export_is_deterministic() {
        let persona = sample_persona();
        let config = LayoutConfig::DEFAULT.with_spine(true);
        let exporter = SvgExporter::default();
        assert_eq!(
            exporter.export(&persona, &config),
            exporter.export(&persona, &config)
        );
    }

    #[test]
    fn empty_persona_exports_empty_canvas() {
        let persona = Persona {
            id: "p".into(),
            title: "P".into(),
            subtitle: String::new(),
            icon: String::new(),
            sections: vec![],
        };
        let svg = SvgExporter::default().export(&persona, &LayoutConfig::DEFAULT);
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<rect class="));
    }
}
