#![forbid(unsafe_code)]

//! SVG path string builders for node connections.
//!
//! All builders are pure and total over finite inputs. Coordinates are
//! written with Rust's shortest `f64` formatting, so integral values print
//! without a fractional part (`225`, not `225.0`).

use waymap_layout::Point;

/// Horizontal inset applied to the destination of a curved path so the
/// line terminates at the card edge instead of its center. Approximates
/// half a rendered card width.
pub const CARD_OFFSET: f64 = 90.0;

/// Vertical inset applied to spine path endpoints so the curve stops
/// short of node edges.
pub const NODE_OFFSET: f64 = 40.0;

/// Horizontal control-point offset for the spine curve's lateral S-wave.
pub const CURVE_OFFSET: f64 = 30.0;

/// Cubic bezier from `from` to `to` with both control points at the
/// horizontal midpoint, each at its endpoint's y.
///
/// Produces a smooth S that leaves the topic horizontally and arrives at
/// the detail card horizontally. The destination x is pulled back by
/// [`CARD_OFFSET`] toward the source so the line meets the card edge.
///
/// ```
/// use waymap_svg::{Point, curved_path};
///
/// let d = curved_path(Point::new(400.0, 200.0), Point::new(50.0, 180.0));
/// assert_eq!(d, "M 400 200 C 225 200, 225 180, 140 180");
/// ```
#[must_use]
pub fn curved_path(from: Point, to: Point) -> String {
    let mid_x = (from.x + to.x) / 2.0;
    let direction = if to.x > from.x { -1.0 } else { 1.0 };
    let adjusted_to_x = to.x + direction * CARD_OFFSET;

    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        from.x, from.y, mid_x, from.y, mid_x, to.y, adjusted_to_x, to.y
    )
}

/// Cubic bezier for top-to-bottom spine connections.
///
/// Both endpoints are inset vertically by [`NODE_OFFSET`] to stop short of
/// node edges, except a source at `y == 0` (the synthetic persona anchor),
/// which starts exactly at the anchor. Control points sit at the 1/3 and
/// 2/3 marks of the inset height, offset horizontally by [`CURVE_OFFSET`]
/// in opposite directions for a gentle lateral S-wave.
#[must_use]
pub fn vertical_curved_path(from: Point, to: Point) -> String {
    let start_y = if from.y == 0.0 {
        from.y
    } else {
        from.y + NODE_OFFSET
    };
    let end_y = to.y - NODE_OFFSET;
    let height = end_y - start_y;

    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        from.x,
        start_y,
        from.x + CURVE_OFFSET,
        start_y + height / 3.0,
        from.x - CURVE_OFFSET,
        start_y + 2.0 * height / 3.0,
        to.x,
        end_y
    )
}

/// Straight line from `from` to `to`.
#[must_use]
pub fn straight_path(from: Point, to: Point) -> String {
    format!("M {} {} L {} {}", from.x, from.y, to.x, to.y)
}

/// Right-angle elbow: horizontal to the midpoint, vertical to align, then
/// horizontal to the endpoint.
#[must_use]
pub fn elbow_path(from: Point, to: Point) -> String {
    let mid_x = (from.x + to.x) / 2.0;
    format!(
        "M {} {} L {} {} L {} {} L {} {}",
        from.x, from.y, mid_x, from.y, mid_x, to.y, to.x, to.y
    )
}

/// Quadratic curve with a single control point at the segment midpoint.
///
/// Gentler than the cubic [`curved_path`]; no card-edge inset is applied.
#[must_use]
pub fn quadratic_path(from: Point, to: Point) -> String {
    let control_x = (from.x + to.x) / 2.0;
    let control_y = (from.y + to.y) / 2.0;
    format!(
        "M {} {} Q {} {}, {} {}",
        from.x, from.y, control_x, control_y, to.x, to.y
    )
}

/// Stroke line-cap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    /// SVG attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Optional styling overrides for a connection path.
///
/// Unset fields fall back to the defaults in [`path_attributes`]:
/// `stroke="currentColor"`, `fill="none"`, `stroke-width=2`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStyle {
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill: Option<String>,
    pub stroke_dasharray: Option<String>,
    pub stroke_linecap: Option<LineCap>,
}

/// A fully-populated attribute record for a `<path>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct PathAttributes {
    pub d: String,
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
    pub stroke_linecap: Option<LineCap>,
    pub stroke_dasharray: Option<String>,
}

impl PathAttributes {
    /// Append this record as SVG attribute text (`d="…" stroke="…" …`).
    pub fn write_svg(&self, out: &mut String) {
        out.push_str("d=\"");
        out.push_str(&self.d);
        out.push_str("\" stroke=\"");
        out.push_str(&self.stroke);
        out.push_str("\" fill=\"");
        out.push_str(&self.fill);
        out.push_str("\" stroke-width=\"");
        out.push_str(&format!("{}", self.stroke_width));
        out.push('"');
        if let Some(cap) = self.stroke_linecap {
            out.push_str(" stroke-linecap=\"");
            out.push_str(cap.as_str());
            out.push('"');
        }
        if let Some(dash) = &self.stroke_dasharray {
            out.push_str(" stroke-dasharray=\"");
            out.push_str(dash);
            out.push('"');
        }
    }
}

/// Combine a path data string with styling defaults into a complete
/// attribute record.
#[must_use]
pub fn path_attributes(d: impl Into<String>, style: &PathStyle) -> PathAttributes {
    PathAttributes {
        d: d.into(),
        stroke: style.stroke.clone().unwrap_or_else(|| "currentColor".into()),
        fill: style.fill.clone().unwrap_or_else(|| "none".into()),
        stroke_width: style.stroke_width.unwrap_or(2.0),
        stroke_linecap: style.stroke_linecap,
        stroke_dasharray: style.stroke_dasharray.clone(),
    }
}
