// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capability handed to scenes when they paint their color keys.

use kurbo::{Affine, PathEl, Point, Shape};
use tiny_skia::{BlendMode, FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::key::ColorKey;

/// Tolerance used when flattening Kurbo shapes into paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Something that can paint itself into a hit raster.
///
/// A scene paints every visible shape back to front, each with its own key;
/// the last shape painted over a pixel owns it. A single shape paints just
/// itself, which is what [`HitRaster::point_in_shape`](crate::HitRaster::point_in_shape)
/// relies on.
pub trait HitDraw {
    /// Paint key-colored geometry with `painter`.
    fn draw_hit(&self, painter: &mut HitPainter<'_>);
}

impl<T: HitDraw + ?Sized> HitDraw for &T {
    fn draw_hit(&self, painter: &mut HitPainter<'_>) {
        (**self).draw_hit(painter);
    }
}

impl<T: HitDraw + ?Sized> HitDraw for Box<T> {
    fn draw_hit(&self, painter: &mut HitPainter<'_>) {
        (**self).draw_hit(painter);
    }
}

impl<T: HitDraw> HitDraw for [T] {
    fn draw_hit(&self, painter: &mut HitPainter<'_>) {
        for item in self {
            item.draw_hit(painter);
        }
    }
}

impl<T: HitDraw, const N: usize> HitDraw for [T; N] {
    fn draw_hit(&self, painter: &mut HitPainter<'_>) {
        self.as_slice().draw_hit(painter);
    }
}

impl<T: HitDraw> HitDraw for Vec<T> {
    fn draw_hit(&self, painter: &mut HitPainter<'_>) {
        self.as_slice().draw_hit(painter);
    }
}

/// Paints solid key colors into a hit raster.
///
/// Every operation paints the key at full opacity with anti-aliasing off and
/// the `Source` blend mode, so each covered pixel ends up holding exactly one
/// key and edges never mix two keys.
pub struct HitPainter<'a> {
    pixmap: &'a mut Pixmap,
    ops: usize,
}

impl core::fmt::Debug for HitPainter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HitPainter")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("ops", &self.ops)
            .finish_non_exhaustive()
    }
}

impl<'a> HitPainter<'a> {
    pub(crate) fn new(pixmap: &'a mut Pixmap) -> Self {
        Self { pixmap, ops: 0 }
    }

    /// Number of fill and stroke operations issued so far.
    pub fn ops(&self) -> usize {
        self.ops
    }

    /// Fill the interior of `shape`, transformed by `transform`, with `key`.
    pub fn fill(&mut self, key: ColorKey, transform: Affine, shape: &impl Shape) {
        let Some(path) = to_path(shape) else {
            return;
        };
        self.ops += 1;
        self.pixmap.fill_path(
            &path,
            &key_paint(key),
            FillRule::Winding,
            to_transform(transform),
            None,
        );
    }

    /// Stroke the outline of `shape`, transformed by `transform`, with `key`.
    ///
    /// `width` is in the shape's local units.
    pub fn stroke(
        &mut self,
        key: ColorKey,
        transform: Affine,
        shape: &impl Shape,
        width: f64,
    ) {
        let Some(path) = to_path(shape) else {
            return;
        };
        self.ops += 1;
        let stroke = Stroke {
            width: to_f32(width),
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &key_paint(key),
            &stroke,
            to_transform(transform),
            None,
        );
    }
}

/// A shape paired with its key, local transform and visibility.
///
/// This is the smallest [`HitDraw`] implementor; scenes usually keep a list of
/// these in paint order.
#[derive(Clone, Debug)]
pub struct KeyedShape<S> {
    /// The key painted for this shape.
    pub key: ColorKey,
    /// Geometry in local coordinates.
    pub shape: S,
    /// Local-to-raster transform.
    pub transform: Affine,
    /// Whether the interior is painted.
    pub fill: bool,
    /// Outline width, if the outline is painted.
    pub stroke_width: Option<f64>,
    /// Hidden shapes paint nothing and so can never be hit.
    pub visible: bool,
}

impl<S: Shape> KeyedShape<S> {
    /// A visible, filled shape with an identity transform.
    pub fn new(key: ColorKey, shape: S) -> Self {
        Self {
            key,
            shape,
            transform: Affine::IDENTITY,
            fill: true,
            stroke_width: None,
            visible: true,
        }
    }

    /// Replace the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Also paint the outline at `width`.
    #[must_use]
    pub fn with_stroke(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

impl<S: Shape> HitDraw for KeyedShape<S> {
    fn draw_hit(&self, painter: &mut HitPainter<'_>) {
        if !self.visible {
            return;
        }
        if self.fill {
            painter.fill(self.key, self.transform, &self.shape);
        }
        if let Some(width) = self.stroke_width {
            painter.stroke(self.key, self.transform, &self.shape, width);
        }
    }
}

fn key_paint(key: ColorKey) -> Paint<'static> {
    let [r, g, b] = key.rgb();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint.blend_mode = BlendMode::Source;
    paint
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "tiny-skia geometry is f32; raster coordinates fit comfortably."
)]
fn to_f32(v: f64) -> f32 {
    v as f32
}

fn xy(p: Point) -> (f32, f32) {
    (to_f32(p.x), to_f32(p.y))
}

fn to_path(shape: &impl Shape) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for el in shape.path_elements(PATH_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => {
                let (x, y) = xy(p);
                pb.move_to(x, y);
            }
            PathEl::LineTo(p) => {
                let (x, y) = xy(p);
                pb.line_to(x, y);
            }
            PathEl::QuadTo(p1, p2) => {
                let (x1, y1) = xy(p1);
                let (x, y) = xy(p2);
                pb.quad_to(x1, y1, x, y);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let (x1, y1) = xy(p1);
                let (x2, y2) = xy(p2);
                let (x, y) = xy(p3);
                pb.cubic_to(x1, y1, x2, y2, x, y);
            }
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

fn to_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(
        to_f32(a),
        to_f32(b),
        to_f32(c),
        to_f32(d),
        to_f32(e),
        to_f32(f),
    )
}
