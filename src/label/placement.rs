use serde::Serialize;

use super::metrics::{TextMetrics, clamp_font_size};
use crate::domain::RiverPolygon;
use crate::geometry::{ViewTransform, ring_contains_box, vertex_mean};

/// How a label ended up where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementKind {
    /// Reserved for alignment along the river course; never produced yet
    FlowAligned,
    /// Anchored at the vertex mean, box fully inside the ring
    Centroid,
    /// Anchored at the vertex mean, but the box escapes the ring
    Outside,
}

impl PlacementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementKind::FlowAligned => "flow-aligned",
            PlacementKind::Centroid => "centroid",
            PlacementKind::Outside => "outside",
        }
    }
}

/// A computed label position for one polygon + text + font size combination
///
/// Recomputed from scratch whenever any input changes; no identity carries
/// across recomputations.
#[derive(Debug, Clone, Serialize)]
pub struct LabelPlacement {
    /// Anchor in world coordinates
    pub position: (f64, f64),
    /// Degrees; always 0 at present
    pub rotation_deg: f64,
    pub kind: PlacementKind,
    /// The font size actually used, after clamping to interface bounds
    pub font_size: f64,
    /// Heuristic text box, screen units
    pub text_width: f64,
    pub text_height: f64,
    /// Whether the text box lies entirely inside the polygon interior
    pub contained: bool,
}

/// Place a label at the polygon's vertex mean
///
/// The anchor is the unweighted mean of every parsed vertex (a duplicated
/// closing vertex counts). Containment is tested for real: the heuristic
/// text box around the projected anchor, mapped back to world units, must
/// sit entirely inside the ring, otherwise the placement is classified
/// [`PlacementKind::Outside`] and flagged uncontained.
pub fn place_label(
    polygon: &RiverPolygon,
    text: &str,
    font_size: f64,
    view: &ViewTransform,
) -> LabelPlacement {
    let metrics = TextMetrics::default();
    let fitted = clamp_font_size(font_size);

    // RiverPolygon guarantees a non-empty ring
    let position = vertex_mean(&polygon.points).unwrap();

    let text_width = metrics.text_width(text, fitted);
    let text_height = metrics.text_height(fitted);

    // The box is sized in screen units; the projection is uniform, so
    // dividing by the scale factor gives the same box in world units
    // around the anchor
    let world_width = text_width / view.scale_factor();
    let world_height = text_height / view.scale_factor();

    let contained = ring_contains_box(&polygon.points, position, world_width, world_height);
    let kind = if contained {
        PlacementKind::Centroid
    } else {
        PlacementKind::Outside
    };

    LabelPlacement {
        position,
        rotation_deg: 0.0,
        kind,
        font_size: fitted,
        text_width,
        text_height,
        contained,
    }
}
