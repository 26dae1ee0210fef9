// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stack of hit rasters, one per layer, queried topmost first.

use kurbo::Point;

use crate::key::KeyRegistry;
use crate::raster::{HitRaster, Intersection, RasterError};

/// Hit rasters for a stack of layers sharing one key registry.
///
/// Layers are stored bottom to top. A query walks them from the top down and
/// returns the first intersection, so a shape on an upper layer shadows
/// anything below it even where the upper layer's own scene is sparse.
#[derive(Debug, Default)]
pub struct LayeredRasters {
    layers: Vec<HitRaster>,
}

impl LayeredRasters {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new topmost layer of `width` × `height` and return its index.
    pub fn push_layer(&mut self, width: u32, height: u32) -> Result<usize, RasterError> {
        self.layers.push(HitRaster::new(width, height)?);
        Ok(self.layers.len() - 1)
    }

    /// Resize every layer.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RasterError> {
        for layer in &mut self.layers {
            layer.resize(width, height)?;
        }
        Ok(())
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layer at `index` (0 is the bottom).
    pub fn layer(&self, index: usize) -> Option<&HitRaster> {
        self.layers.get(index)
    }

    /// Mutable access to the layer at `index`, for redrawing it.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut HitRaster> {
        self.layers.get_mut(index)
    }

    /// The first intersection under `point`, topmost layer first.
    ///
    /// Returns the layer index alongside the intersection.
    pub fn query<K: Clone, R>(
        &self,
        keys: &KeyRegistry<K, R>,
        point: Point,
    ) -> Option<(usize, Intersection<K>)> {
        self.layers
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, layer)| layer.query(keys, point).map(|hit| (i, hit)))
    }
}
