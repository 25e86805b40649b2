// Copyright 2025 the Ringlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark identity, payloads and the mark builder.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable mark identity.
///
/// Ids are chosen by the chart layer and must stay the same across updates for marks that
/// represent the same thing (a given slice, a given legend row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an id for the `index`th child of a namespace.
    ///
    /// Namespaces are spaced 2^20 apart, which leaves room for a million children each.
    pub const fn child(namespace: u64, index: u64) -> Self {
        Self((namespace << 20) | (index & 0xF_FFFF))
    }
}

/// The kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Single line of unshaped text.
    Text,
    /// Arbitrary filled/stroked path.
    Path,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start of the text.
    #[default]
    Start,
    /// The position is the middle of the text.
    Middle,
    /// The position is the end of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical middle of the text.
    #[default]
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the hanging baseline (top).
    Hanging,
    /// The position is the ideographic baseline.
    Ideographic,
}

/// Resolved rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Unshaped text.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved path payload.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` disables stroking.
    pub stroke_width: f64,
}

/// A fully resolved mark payload.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A text run.
    Text(TextPayload),
    /// A path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns scene-space bounds, if they can be computed without text measurement.
    ///
    /// Text returns `None`; callers that need text bounds must measure it themselves.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect.abs()),
            Self::Text(_) => None,
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    return None;
                }
                let half = 0.5 * p.stroke_width.max(0.0);
                Some(p.path.bounding_box().inflate(half, half))
            }
        }
    }
}

/// A mark: stable id, paint order, and resolved payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Resolved geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark. The default kind is [`MarkKind::Rect`].
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

/// Builder for [`Mark`].
///
/// Setters that do not apply to the selected kind are ignored at [`MarkBuilder::build`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    path: BezPath,
    fill: Brush,
    stroke: Brush,
    stroke_width: f64,
    text: String,
    font_size: f64,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            path: BezPath::new(),
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 1.0,
            text: String::new(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
        }
    }

    /// Selects the rect kind.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Selects the text kind.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Selects the path kind.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Rect origin x, or text anchor x.
    pub fn x_const(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Rect origin y, or text anchor y.
    pub fn y_const(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Rect width.
    pub fn w_const(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Rect height.
    pub fn h_const(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Path geometry.
    pub fn path_const(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Fill paint.
    pub fn fill_brush_const(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Solid fill color.
    pub fn fill_const(self, color: Color) -> Self {
        self.fill_brush_const(color)
    }

    /// Stroke paint (paths only).
    pub fn stroke_brush_const(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Stroke width (paths only).
    pub fn stroke_width_const(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Text content.
    pub fn text_const(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Font size.
    pub fn font_size_const(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Text rotation in degrees.
    pub fn angle_const(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Horizontal text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Vertical text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Resolves the builder into a mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}
