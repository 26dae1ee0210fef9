// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter resolving pointer hits through Understory Hit's color-key raster.
//!
//! ## Feature
//!
//! Enable with `hit_raster_adapter`.
//!
//! ## Notes
//!
//! [`RasterHits`] redraws the raster from the scene before every query, so
//! the router never reads a raster older than the scene. Hosts that know the
//! scene has not changed since the last redraw can implement
//! [`HitSource`] themselves and skip the redraw.

use kurbo::Point;
use understory_hit::{HitDraw, HitRaster, KeyRegistry};

use crate::types::{HitSource, PointerHit};

/// A [`HitSource`] over a color-key raster, a scene and its key registry.
///
/// Key colors are painted solid, and [`HitRaster::query`] only matches fully
/// opaque pixels, so every hit this reports is opaque.
pub struct RasterHits<'a, K, S: ?Sized, R> {
    /// Raster the scene is painted into.
    pub raster: &'a mut HitRaster,
    /// The scene, painted back to front.
    pub scene: &'a S,
    /// Keys the scene painted with.
    pub keys: &'a KeyRegistry<K, R>,
}

impl<K, S: ?Sized, R> core::fmt::Debug for RasterHits<'_, K, S, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RasterHits")
            .field("raster", &self.raster)
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

impl<'a, K, S: HitDraw + ?Sized, R> RasterHits<'a, K, S, R> {
    /// Bundle a raster, a scene and its keys.
    pub fn new(raster: &'a mut HitRaster, scene: &'a S, keys: &'a KeyRegistry<K, R>) -> Self {
        Self { raster, scene, keys }
    }
}

impl<K: Clone, S: HitDraw + ?Sized, R> HitSource<K> for RasterHits<'_, K, S, R> {
    fn hit_test(&mut self, point: Point) -> Option<PointerHit<K>> {
        self.raster.redraw(self.scene);
        let hit = self.raster.query(self.keys, point)?;
        Some(PointerHit::opaque(hit.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{PointerRouter, RouterConfig};
    use crate::types::{EventKind, NoDrag, RawKind, RawPointerEvent, ShapeEvent};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::time::Duration;
    use kurbo::Rect;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use understory_hit::KeyedShape;

    #[test]
    fn hits_are_opaque_and_misses_stay_inside_the_raster() {
        let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(5));
        let a = keys.allocate("a").unwrap();
        let scene = [KeyedShape::new(a, Rect::new(0.0, 0.0, 10.0, 100.0))];
        let mut raster = HitRaster::new(100, 100).unwrap();
        let mut hits = RasterHits::new(&mut raster, &scene, &keys);

        assert_eq!(
            hits.hit_test(Point::new(5.0, 50.0)),
            Some(PointerHit::opaque("a"))
        );
        assert_eq!(hits.hit_test(Point::new(105.0, 50.0)), None);
        assert_eq!(hits.hit_test(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn router_sees_scene_changes_without_manual_redraw() {
        let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(11));
        let a = keys.allocate("a").unwrap();
        let b = keys.allocate("b").unwrap();
        let mut scene = vec![KeyedShape::new(a, Rect::new(0.0, 0.0, 50.0, 50.0))];
        let mut raster = HitRaster::new(100, 100).unwrap();
        let mut router = PointerRouter::new(RouterConfig::DEFAULT);
        let mut events: Vec<ShapeEvent<&str>> = Vec::new();

        let at = |x: f64, t: u64| {
            RawPointerEvent::mouse(RawKind::MouseMove, (x, 10.0), Duration::from_millis(t))
        };

        let mut hits = RasterHits::new(&mut raster, &scene, &keys);
        router.route(&at(10.0, 0), &mut hits, &mut NoDrag, &mut events);

        // A shape added on top takes over without anyone redrawing the raster.
        scene.push(KeyedShape::new(b, Rect::new(0.0, 0.0, 20.0, 20.0)));
        let mut hits = RasterHits::new(&mut raster, &scene, &keys);
        router.route(&at(10.0, 16), &mut hits, &mut NoDrag, &mut events);

        let kinds: Vec<_> = events.iter().map(|e| (e.kind, e.target)).collect();
        assert_eq!(
            kinds,
            [
                (EventKind::MouseOver, "a"),
                (EventKind::MouseEnter, "a"),
                (EventKind::MouseOut, "a"),
                (EventKind::MouseLeave, "a"),
                (EventKind::MouseOver, "b"),
                (EventKind::MouseEnter, "b"),
            ]
        );
    }
}
