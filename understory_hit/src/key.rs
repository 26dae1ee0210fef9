// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color keys and the registry mapping them back to shapes.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A packed `0xRRGGBB` color identifying one shape in a hit raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorKey(u32);

impl ColorKey {
    /// Largest packed value.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Create a key from a packed `0xRRGGBB` value.
    ///
    /// Returns `None` if any bit above the low 24 is set.
    pub const fn new(packed: u32) -> Option<Self> {
        if packed > Self::MAX {
            None
        } else {
            Some(Self(packed))
        }
    }

    /// Create a key from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([0, r, g, b]))
    }

    /// Read the key painted into an RGBA pixel. Alpha is ignored.
    pub const fn from_pixel(pixel: [u8; 4]) -> Self {
        Self::from_rgb(pixel[0], pixel[1], pixel[2])
    }

    /// The packed `0xRRGGBB` value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The `[r, g, b]` channels.
    pub const fn rgb(self) -> [u8; 3] {
        let [_, r, g, b] = self.0.to_be_bytes();
        [r, g, b]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

impl core::fmt::Display for ColorKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Inclusive range of packed values keys are drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeySpace {
    min: u32,
    max: u32,
}

impl KeySpace {
    /// Every color except black, which stays free to mean "nothing here".
    pub const DEFAULT: Self = Self {
        min: 0x00_0001,
        max: ColorKey::MAX,
    };

    /// A key space over `min..=max`.
    ///
    /// Returns `None` if the range is empty or exceeds 24 bits.
    pub const fn new(min: u32, max: u32) -> Option<Self> {
        if min > max || max > ColorKey::MAX {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Smallest packed value.
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Largest packed value.
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Number of keys in the space.
    pub const fn len(self) -> u32 {
        self.max - self.min + 1
    }

    /// Always `false`; a key space holds at least one key.
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Whether `key` lies in the space.
    pub const fn contains(self, key: ColorKey) -> bool {
        key.0 >= self.min && key.0 <= self.max
    }
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors from [`KeyRegistry::allocate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// No free key was found.
    ///
    /// This means far more shapes are alive than the key space is meant to
    /// hold; it is not retried.
    #[error("no free color key after {attempts} attempts with {live} keys live")]
    Exhausted {
        /// Random draws made before giving up.
        attempts: u32,
        /// Keys live at the time of the failure.
        live: usize,
    },
}

/// Owns the live key → shape mapping and allocates fresh keys.
///
/// Keys are drawn uniformly at random from a [`KeySpace`] and redrawn on
/// collision with a live key, up to [`max_attempts`](Self::max_attempts) draws.
/// A released key may be handed out again; a live key never is.
///
/// The random source is injectable so tests get reproducible keys:
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use understory_hit::KeyRegistry;
///
/// let mut keys = KeyRegistry::with_rng(StdRng::seed_from_u64(7));
/// let a = keys.allocate("a").unwrap();
/// let b = keys.allocate("b").unwrap();
/// assert_ne!(a, b);
/// assert_eq!(keys.get(a), Some(&"a"));
/// assert_eq!(keys.release(a), Some("a"));
/// assert!(!keys.contains(a));
/// ```
pub struct KeyRegistry<K, R = StdRng> {
    shapes: HashMap<ColorKey, K>,
    rng: R,
    space: KeySpace,
    max_attempts: u32,
}

impl<K, R> core::fmt::Debug for KeyRegistry<K, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyRegistry")
            .field("live", &self.shapes.len())
            .field("space", &self.space)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

impl<K> KeyRegistry<K, StdRng> {
    /// A registry over the default key space, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<K> Default for KeyRegistry<K, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, R: Rng> KeyRegistry<K, R> {
    /// Default number of draws before [`KeyError::Exhausted`].
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 4096;

    /// A registry over the default key space using `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_space(KeySpace::DEFAULT, rng)
    }

    /// A registry over `space` using `rng`.
    pub fn with_space(space: KeySpace, rng: R) -> Self {
        Self {
            shapes: HashMap::new(),
            rng,
            space,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// The key space.
    pub fn space(&self) -> KeySpace {
        self.space
    }

    /// Draws per allocation before giving up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Set the draws per allocation before giving up (at least one).
    pub fn set_max_attempts(&mut self, attempts: u32) {
        self.max_attempts = attempts.max(1);
    }

    /// Allocate a fresh key for `shape`.
    pub fn allocate(&mut self, shape: K) -> Result<ColorKey, KeyError> {
        let live = self.shapes.len();
        if u32::try_from(live).is_ok_and(|live| live >= self.space.len()) {
            tracing::warn!(live, "color key space is full");
            return Err(KeyError::Exhausted { attempts: 0, live });
        }
        for attempt in 1..=self.max_attempts {
            let key = ColorKey(self.rng.gen_range(self.space.min..=self.space.max));
            if self.shapes.contains_key(&key) {
                continue;
            }
            tracing::trace!(key = %key, attempt, "color key allocated");
            self.shapes.insert(key, shape);
            return Ok(key);
        }
        tracing::warn!(
            attempts = self.max_attempts,
            live,
            "no free color key found"
        );
        Err(KeyError::Exhausted {
            attempts: self.max_attempts,
            live,
        })
    }
}

impl<K, R> KeyRegistry<K, R> {
    /// Release `key`, returning the shape it mapped to.
    ///
    /// Releasing an unknown key does nothing.
    pub fn release(&mut self, key: ColorKey) -> Option<K> {
        let shape = self.shapes.remove(&key);
        if shape.is_some() {
            tracing::debug!(key = %key, "color key released");
        }
        shape
    }

    /// The shape mapped to `key`.
    pub fn get(&self, key: ColorKey) -> Option<&K> {
        self.shapes.get(&key)
    }

    /// Whether `key` is live.
    pub fn contains(&self, key: ColorKey) -> bool {
        self.shapes.contains_key(&key)
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if no key is live.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterate live keys and their shapes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &K)> + '_ {
        self.shapes.iter().map(|(k, v)| (*k, v))
    }
}
