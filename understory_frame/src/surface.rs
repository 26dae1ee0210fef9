// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redraw targets: surfaces an animation asks to have repainted each frame.

use alloc::rc::Rc;
use alloc::vec::Vec;

/// Identity of a rasterizable surface.
///
/// Two surfaces are the same target exactly when their ids are equal; redraw
/// deduplication never compares surface contents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SurfaceId(pub u64);

/// A pixel target owned by the embedding toolkit (a layer, a canvas, ...).
pub trait Surface {
    /// Stable identity used for redraw deduplication.
    fn surface_id(&self) -> SurfaceId;

    /// Repaint the surface from its scene.
    fn redraw(&self);

    /// Size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);
}

/// The surfaces an animation redraws after its callback runs.
///
/// `Targets::none()` means "never redraw anything on my behalf", while an empty
/// list means "no surfaces yet". Both redraw nothing; [`is_none`](Self::is_none)
/// tells them apart.
#[derive(Clone, Default)]
pub struct Targets(Option<Vec<Rc<dyn Surface>>>);

impl core::fmt::Debug for Targets {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.0 {
            None => f.write_str("Targets::None"),
            Some(list) => f
                .debug_list()
                .entries(list.iter().map(|s| s.surface_id()))
                .finish(),
        }
    }
}

impl Targets {
    /// No redraw targets.
    pub const fn none() -> Self {
        Self(None)
    }

    /// A single redraw target.
    pub fn one(surface: Rc<dyn Surface>) -> Self {
        Self(Some(alloc::vec![surface]))
    }

    /// Several redraw targets. Duplicates by [`SurfaceId`] are dropped.
    pub fn many(surfaces: impl IntoIterator<Item = Rc<dyn Surface>>) -> Self {
        let mut targets = Self(Some(Vec::new()));
        for s in surfaces {
            targets.add(s);
        }
        targets
    }

    /// True if these are explicitly "no targets".
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Number of surfaces.
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, Vec::len)
    }

    /// True if there are no surfaces (either `none()` or an empty list).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the surfaces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Surface>> + '_ {
        self.0.iter().flatten()
    }

    /// Add `surface` unless a surface with the same id is already present.
    ///
    /// Returns `true` if it was added. Adding to `none()` turns it into a list.
    pub fn add(&mut self, surface: Rc<dyn Surface>) -> bool {
        let list = self.0.get_or_insert_with(Vec::new);
        let id = surface.surface_id();
        if list.iter().any(|s| s.surface_id() == id) {
            return false;
        }
        list.push(surface);
        true
    }
}

impl From<Rc<dyn Surface>> for Targets {
    fn from(surface: Rc<dyn Surface>) -> Self {
        Self::one(surface)
    }
}

impl From<Vec<Rc<dyn Surface>>> for Targets {
    fn from(surfaces: Vec<Rc<dyn Surface>>) -> Self {
        Self::many(surfaces)
    }
}

impl From<Option<Rc<dyn Surface>>> for Targets {
    fn from(surface: Option<Rc<dyn Surface>>) -> Self {
        surface.map_or_else(Self::none, Self::one)
    }
}
