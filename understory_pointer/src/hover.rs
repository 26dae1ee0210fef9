// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover target helper: compute leave/enter transitions when the shape under
//! the pointer changes.
//!
//! Shapes in a retained scene are flat hit targets: a point resolves to one
//! shape, not to a path. Moving between shapes therefore leaves the previous
//! shape completely before entering the next one.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pointer::hover::{HoverTarget, HoverTransition};
//! let mut h: HoverTarget<u32> = HoverTarget::new();
//! assert_eq!(
//!     h.enter(1),
//!     vec![HoverTransition::Enter { target: 1, related: None }]
//! );
//! assert_eq!(
//!     h.enter(2),
//!     vec![
//!         HoverTransition::Leave { target: 1, related: Some(2) },
//!         HoverTransition::Enter { target: 2, related: Some(1) },
//!     ]
//! );
//! assert!(h.enter(2).is_empty());
//! ```

use alloc::vec::Vec;

/// A hover transition.
///
/// The router turns `Leave` into `mouseout` + `mouseleave` and `Enter` into
/// `mouseover` + `mouseenter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverTransition<K> {
    /// The pointer left `target`; `related` is the shape it moved onto, if any.
    Leave {
        /// Shape being left.
        target: K,
        /// Shape being entered instead.
        related: Option<K>,
    },
    /// The pointer entered `target`; `related` is the shape it came from, if any.
    Enter {
        /// Shape being entered.
        target: K,
        /// Shape previously hovered.
        related: Option<K>,
    },
}

/// Tracks the shape currently under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverTarget<K> {
    current: Option<K>,
}

impl<K> Default for HoverTarget<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Clone + PartialEq> HoverTarget<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered shape, if any.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Move the hover to `shape`.
    ///
    /// Returns a leave for the previous shape (if any) followed by an enter for
    /// `shape`, or nothing if `shape` is already hovered.
    pub fn enter(&mut self, shape: K) -> Vec<HoverTransition<K>> {
        if self.current.as_ref() == Some(&shape) {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        let previous = self.current.take();
        if let Some(prev) = previous.clone() {
            out.push(HoverTransition::Leave {
                target: prev,
                related: Some(shape.clone()),
            });
        }
        out.push(HoverTransition::Enter {
            target: shape.clone(),
            related: previous,
        });
        self.current = Some(shape);
        out
    }

    /// Clear the hover, returning a leave for the previous shape (if any).
    pub fn clear(&mut self) -> Vec<HoverTransition<K>> {
        match self.current.take() {
            Some(target) => alloc::vec![HoverTransition::Leave {
                target,
                related: None
            }],
            None => Vec::new(),
        }
    }
}
