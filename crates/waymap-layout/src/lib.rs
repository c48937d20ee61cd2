#![forbid(unsafe_code)]

//! Deterministic 3-column layout for roadmap diagrams.
//!
//! This crate turns a persona content tree into absolute coordinates:
//!
//! - [`calculate_node_positions`] - the layout pass (main topics in the
//!   center column, detail children in the left/right columns, plus the
//!   connection list)
//! - [`section_labels`] - y-positions for section headings
//! - [`canvas_width`] / [`canvas_height`] - viewport sizing for the
//!   rendered document
//!
//! The pass is pure and total: the same tree and config always produce
//! bit-identical output, zero sections yield empty output, and nothing is
//! thrown. Collision correction clamps each side-column node against the
//! last node placed in that column, so per-column placement is monotone
//! even when centering a topic's children would overlap a previous topic's.
//!
//! ```
//! use waymap_layout::{LayoutConfig, calculate_node_positions};
//! # use waymap_model::Persona;
//! # let persona = Persona {
//! #     id: "p".into(), title: "P".into(), subtitle: String::new(),
//! #     icon: String::new(), sections: vec![],
//! # };
//!
//! let config = LayoutConfig::DEFAULT.with_spine(true);
//! let positions = calculate_node_positions(&persona, &config);
//! assert!(positions.center.is_empty());
//! ```

use waymap_model::{Persona, Side};

/// A point in diagram space (pixels, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Configuration for the 3-column layout pass.
///
/// All distances are in pixels. The node heights are the assumed rendered
/// card heights used for collision math, not constraints on the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of each column.
    pub column_width: f64,
    /// X center of the left column.
    pub left_x: f64,
    /// X center of the center column.
    pub center_x: f64,
    /// X center of the right column.
    pub right_x: f64,
    /// Y of the first placed element.
    pub start_y: f64,
    /// Vertical space reserved for a section label.
    pub section_spacing: f64,
    /// Nominal vertical gap between detail nodes.
    pub detail_spacing: f64,
    /// Nominal vertical gap between main topics.
    pub topic_spacing: f64,
    /// Minimum clear pixels between adjacent node edges in a column.
    pub min_node_gap: f64,
    /// Assumed rendered height of a detail card.
    pub detail_node_height: f64,
    /// Assumed rendered height of a main topic card.
    pub main_node_height: f64,
    /// Emit spine connections between consecutive main topics.
    pub spine: bool,
}

impl LayoutConfig {
    /// Default layout values (tuned for an ~950px wide canvas).
    pub const DEFAULT: Self = Self {
        column_width: 300.0,
        left_x: 50.0,
        center_x: 400.0,
        right_x: 750.0,
        start_y: 100.0,
        section_spacing: 60.0,
        detail_spacing: 80.0,
        topic_spacing: 200.0,
        min_node_gap: 20.0,
        detail_node_height: 76.0,
        main_node_height: 64.0,
        spine: false,
    };

    /// Override the column center x-coordinates.
    #[must_use]
    pub const fn with_columns(mut self, left_x: f64, center_x: f64, right_x: f64) -> Self {
        self.left_x = left_x;
        self.center_x = center_x;
        self.right_x = right_x;
        self
    }

    /// Override the starting y.
    #[must_use]
    pub const fn with_start_y(mut self, start_y: f64) -> Self {
        self.start_y = start_y;
        self
    }

    /// Override the nominal topic spacing.
    #[must_use]
    pub const fn with_topic_spacing(mut self, topic_spacing: f64) -> Self {
        self.topic_spacing = topic_spacing;
        self
    }

    /// Override the nominal detail spacing.
    #[must_use]
    pub const fn with_detail_spacing(mut self, detail_spacing: f64) -> Self {
        self.detail_spacing = detail_spacing;
        self
    }

    /// Override the minimum node gap.
    #[must_use]
    pub const fn with_min_node_gap(mut self, min_node_gap: f64) -> Self {
        self.min_node_gap = min_node_gap;
        self
    }

    /// Enable or disable spine connections.
    #[must_use]
    pub const fn with_spine(mut self, spine: bool) -> Self {
        self.spine = spine;
        self
    }

    /// Detail spacing with the no-overlap floor applied.
    ///
    /// The floor guarantees two same-column siblings can never touch even
    /// with a small configured spacing.
    #[inline]
    #[must_use]
    pub fn effective_detail_spacing(&self) -> f64 {
        self.detail_spacing
            .max(self.detail_node_height + self.min_node_gap)
    }

    /// Topic spacing with the no-overlap floor applied.
    #[inline]
    #[must_use]
    pub fn effective_topic_spacing(&self) -> f64 {
        self.topic_spacing
            .max(self.main_node_height + self.min_node_gap)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which column family a placed node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Center-column main topic.
    Main,
    /// Side-column detail node.
    Detail,
}

/// The computed position of a single node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePosition {
    /// Id of the tree node this position belongs to.
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub kind: NodeKind,
}

/// Kind of connection between two placed nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Topic-to-child connection (horizontal curve).
    Detail,
    /// Topic-to-topic reading-order connection (vertical curve).
    Spine,
}

/// A visual connection between two placed nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Source node id (a main topic, or the persona/section for spine
    /// anchor edges).
    pub from_id: String,
    /// Destination node id.
    pub to_id: String,
    pub from: Point,
    pub to: Point,
    pub kind: ConnectionKind,
}

/// Complete layout output, organized by column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePositions {
    /// Detail nodes in the left column, in placement order.
    pub left: Vec<NodePosition>,
    /// Main topics in the center column, in placement order.
    pub center: Vec<NodePosition>,
    /// Detail nodes in the right column, in placement order.
    pub right: Vec<NodePosition>,
    /// Topic-to-child connections, followed by spine connections when
    /// enabled.
    pub connections: Vec<Connection>,
}

/// A section heading with its computed y-position.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLabel {
    pub label: String,
    pub y: f64,
}

/// Compute positions for every node in a persona's roadmap.
///
/// One running vertical cursor walks sections and topics in tree order.
/// Each section reserves `section_spacing` for its label, each topic lands
/// at the center column, and its children are centered around it in the
/// side column chosen by the topic's side affinity. Side-column placement
/// is clamped against the previously placed node in the same column so no
/// two nodes ever violate `min_node_gap`, even across topics.
///
/// When `config.spine` is set, additional spine connections are emitted:
/// one from a synthetic persona anchor at `y = 0` to the first topic, one
/// per consecutive topic pair, and one per later section from that
/// section's label anchor to its first topic. For a tree of `s` non-empty
/// sections and `t` topics that is `s + t - 1` spine edges.
#[must_use]
pub fn calculate_node_positions(persona: &Persona, config: &LayoutConfig) -> NodePositions {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "calculate_node_positions",
        persona = persona.id.as_str(),
        topics = persona.topic_count(),
        details = persona.detail_count(),
    );
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let effective_detail_spacing = config.effective_detail_spacing();
    let effective_topic_spacing = config.effective_topic_spacing();

    let mut left: Vec<NodePosition> = Vec::new();
    let mut center: Vec<NodePosition> = Vec::with_capacity(persona.topic_count());
    let mut right: Vec<NodePosition> = Vec::new();
    let mut connections: Vec<Connection> = Vec::with_capacity(persona.detail_count());
    let mut spine_edges: Vec<Connection> = Vec::new();

    let mut current_y = config.start_y;
    let mut prev_topic: Option<(String, Point)> = None;

    for section in &persona.sections {
        // Room for the section label before its first topic.
        let label_y = current_y + config.section_spacing / 2.0;
        current_y += config.section_spacing;

        let mut first_in_section = true;
        for topic in &section.topics {
            let topic_point = Point::new(config.center_x, current_y);
            center.push(NodePosition {
                id: topic.id.clone(),
                x: topic_point.x,
                y: topic_point.y,
                kind: NodeKind::Main,
            });

            if config.spine {
                match &prev_topic {
                    None => {
                        // Synthetic persona anchor above the diagram.
                        spine_edges.push(Connection {
                            from_id: persona.id.clone(),
                            to_id: topic.id.clone(),
                            from: Point::new(config.center_x, 0.0),
                            to: topic_point,
                            kind: ConnectionKind::Spine,
                        });
                    }
                    Some((prev_id, prev_point)) => {
                        spine_edges.push(Connection {
                            from_id: prev_id.clone(),
                            to_id: topic.id.clone(),
                            from: *prev_point,
                            to: topic_point,
                            kind: ConnectionKind::Spine,
                        });
                        if first_in_section {
                            // The spine visually re-enters at each later
                            // section's label row.
                            spine_edges.push(Connection {
                                from_id: section.id.clone(),
                                to_id: topic.id.clone(),
                                from: Point::new(config.center_x, label_y),
                                to: topic_point,
                                kind: ConnectionKind::Spine,
                            });
                        }
                    }
                }
                prev_topic = Some((topic.id.clone(), topic_point));
            }
            first_in_section = false;

            let (column, target_x) = match topic.children_side {
                Side::Left => (&mut left, config.left_x),
                Side::Right => (&mut right, config.right_x),
            };

            // Center the children block around the topic's y.
            let child_count = topic.children.len();
            let detail_start_y =
                current_y - ((child_count as f64 - 1.0) * effective_detail_spacing) / 2.0;

            for (index, child) in topic.children.iter().enumerate() {
                let mut proposed_y = detail_start_y + index as f64 * effective_detail_spacing;

                // Clamp against the last node already in this column,
                // including nodes from earlier topics on the same side.
                if let Some(last) = column.last() {
                    let min_y = last.y
                        + config.detail_node_height / 2.0
                        + config.min_node_gap
                        + config.detail_node_height / 2.0;
                    if proposed_y < min_y {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(
                            child = child.id.as_str(),
                            proposed = proposed_y,
                            clamped = min_y,
                            "collision clamp"
                        );
                        proposed_y = min_y;
                    }
                }

                column.push(NodePosition {
                    id: child.id.clone(),
                    x: target_x,
                    y: proposed_y,
                    kind: NodeKind::Detail,
                });
                connections.push(Connection {
                    from_id: topic.id.clone(),
                    to_id: child.id.clone(),
                    from: topic_point,
                    to: Point::new(target_x, proposed_y),
                    kind: ConnectionKind::Detail,
                });
            }

            current_y += effective_topic_spacing;
        }
    }

    connections.extend(spine_edges);

    NodePositions {
        left,
        center,
        right,
        connections,
    }
}

/// Compute section label y-positions.
///
/// Uses its own cursor over the configured (not effective) topic spacing,
/// mirroring the sizing math in [`canvas_height`]. Each label sits halfway
/// into the vertical space its section reserves.
#[must_use]
pub fn section_labels(persona: &Persona, config: &LayoutConfig) -> Vec<SectionLabel> {
    let mut labels = Vec::with_capacity(persona.sections.len());
    let mut current_y = config.start_y;

    for section in &persona.sections {
        labels.push(SectionLabel {
            label: section.label.clone(),
            y: current_y + config.section_spacing / 2.0,
        });
        current_y += config.section_spacing;
        current_y += section.topics.len() as f64 * config.topic_spacing;
    }

    labels
}

/// Total canvas height needed to display the whole roadmap.
///
/// Includes 100px of bottom padding.
#[must_use]
pub fn canvas_height(persona: &Persona, config: &LayoutConfig) -> f64 {
    let mut total = config.start_y;
    for section in &persona.sections {
        total += config.section_spacing;
        total += section.topics.len() as f64 * config.topic_spacing;
    }
    total + 100.0
}

/// Total canvas width implied by the column configuration.
#[must_use]
pub fn canvas_width(config: &LayoutConfig) -> f64 {
    config.right_x + config.column_width / 2.0 + 50.0
}
