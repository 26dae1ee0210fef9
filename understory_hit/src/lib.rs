// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hit: pixel-exact hit testing with color keys.
//!
//! ## Overview
//!
//! Every shape gets a unique, randomly drawn [`ColorKey`]. To hit test, the
//! scene is painted into an off-screen [`HitRaster`] where each shape is filled
//! with its key color instead of its visual style, without anti-aliasing or
//! blending. Reading one pixel back and looking its color up in the
//! [`KeyRegistry`] yields the topmost shape at that point, whatever its
//! geometry, stroke or transform.
//!
//! ## Drawing
//!
//! The raster knows nothing about shape types. Scenes implement [`HitDraw`] and
//! paint through the fixed [`HitPainter`] capability (`fill` and `stroke` of any
//! Kurbo [`Shape`](kurbo::Shape) under an [`Affine`](kurbo::Affine)).
//! [`KeyedShape`] is a ready-made implementor for simple scenes.
//!
//! ## Freshness
//!
//! The raster does not observe the scene. Redraw it before querying whenever
//! the scene may have changed:
//!
//! ```
//! use kurbo::{Point, Rect};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use understory_hit::{HitRaster, KeyRegistry, KeyedShape};
//!
//! let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(1));
//! let back = keys.allocate("back").unwrap();
//! let front = keys.allocate("front").unwrap();
//!
//! let scene = [
//!     KeyedShape::new(back, Rect::new(0.0, 0.0, 80.0, 80.0)),
//!     KeyedShape::new(front, Rect::new(40.0, 40.0, 120.0, 120.0)),
//! ];
//!
//! let mut raster = HitRaster::new(128, 128).unwrap();
//! raster.redraw(&scene);
//!
//! let hit = raster.query(&keys, Point::new(60.0, 60.0)).unwrap();
//! assert_eq!(hit.shape, "front");
//! assert!(raster.query(&keys, Point::new(125.0, 5.0)).is_none());
//! ```
//!
//! ## Keys
//!
//! Keys are drawn uniformly at random from a [`KeySpace`] (all colors except
//! black by default) and redrawn on collision with a live key. Allocation gives
//! up with [`KeyError::Exhausted`] after a bounded number of draws, which only
//! happens when the live shape count approaches the size of the key space.
//! Released keys become eligible for reuse.

mod key;
mod layered;
mod painter;
mod raster;

pub use key::{ColorKey, KeyError, KeyRegistry, KeySpace};
pub use layered::LayeredRasters;
pub use painter::{HitDraw, HitPainter, KeyedShape};
pub use raster::{HitRaster, Intersection, RasterError};
