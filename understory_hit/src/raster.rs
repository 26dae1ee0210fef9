// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen rasters holding color keys instead of visual content.

use kurbo::Point;
use tiny_skia::{Color, Pixmap};

use crate::key::{ColorKey, KeyRegistry};
use crate::painter::{HitDraw, HitPainter};

/// Errors from creating or resizing a [`HitRaster`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// A dimension was zero or the pixmap would be too large.
    #[error("invalid hit raster size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

/// A successful hit query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection<K> {
    /// The shape owning the pixel.
    pub shape: K,
    /// The key read from the pixel.
    pub key: ColorKey,
    /// The pixel as `[r, g, b, a]`.
    pub pixel: [u8; 4],
}

/// A color-key raster answering "which shape owns this pixel".
///
/// The raster does not track scene changes. Callers [`redraw`](Self::redraw)
/// it from the scene before querying whenever the scene may have changed since
/// the last redraw; a stale raster returns stale hits.
pub struct HitRaster {
    pixmap: Pixmap,
}

impl core::fmt::Debug for HitRaster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HitRaster")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl HitRaster {
    /// Create a cleared raster of `width` × `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Replace the backing pixmap with a cleared one of the new size.
    ///
    /// On error the raster keeps its previous size and contents.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RasterError> {
        self.pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The backing pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Make every pixel fully transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Clear the raster and paint `scene` into it.
    pub fn redraw(&mut self, scene: &(impl HitDraw + ?Sized)) {
        self.clear();
        let mut painter = HitPainter::new(&mut self.pixmap);
        scene.draw_hit(&mut painter);
        tracing::trace!(ops = painter.ops(), "hit raster redrawn");
    }

    /// Read the pixel under `point` as `[r, g, b, a]`.
    ///
    /// Coordinates are truncated toward zero. Points outside the raster (and
    /// NaN coordinates) read as `None`.
    pub fn pixel(&self, point: Point) -> Option<[u8; 4]> {
        let (x, y) = pixel_coords(point, self.width(), self.height())?;
        let px = self.pixmap.pixel(x, y)?;
        Some([px.red(), px.green(), px.blue(), px.alpha()])
    }

    /// The shape whose key is painted under `point`.
    ///
    /// Only fully opaque pixels whose key is live in `keys` match.
    pub fn query<K: Clone, R>(
        &self,
        keys: &KeyRegistry<K, R>,
        point: Point,
    ) -> Option<Intersection<K>> {
        let pixel = self.pixel(point)?;
        if pixel[3] != 255 {
            return None;
        }
        let key = ColorKey::from_pixel(pixel);
        let shape = keys.get(key)?.clone();
        Some(Intersection { shape, key, pixel })
    }

    /// Whether `shape` alone covers `point`.
    ///
    /// This clears the raster and paints only `shape`, so it discards whatever
    /// scene was painted before and costs a full clear per call. Prefer
    /// [`redraw`](Self::redraw) plus [`query`](Self::query) when testing many
    /// points or many shapes.
    pub fn point_in_shape(&mut self, shape: &(impl HitDraw + ?Sized), point: Point) -> bool {
        self.redraw(shape);
        self.pixel(point).is_some_and(|px| px[3] > 0)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Float to int casts saturate, and the result is bounds-checked."
)]
fn pixel_coords(point: Point, width: u32, height: u32) -> Option<(u32, u32)> {
    if !(point.x >= 0.0 && point.y >= 0.0) {
        return None;
    }
    let (x, y) = (point.x as u32, point.y as u32);
    (x < width && y < height).then_some((x, y))
}
