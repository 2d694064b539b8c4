//! Screen-space geometry.
//!
//! Coordinates are CSS-style pixels: origin at the top-left, `y` grows
//! downward, so gravity is a positive `y` acceleration and the floor is the
//! largest reachable `y`.

use crate::{MascotError, MascotResult, MascotRng};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or vector in screen pixels.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    #[inline]
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        (len > 0.0).then(|| Vec2::new(self.x / len, self.y / len))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned bounding box, e.g. a page element's client rect.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Visible on screen: positive size and a non-negative origin.
    #[inline]
    pub fn is_observable(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.x >= 0.0 && self.y >= 0.0
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// The area the character may occupy.
///
/// The sprite is `sprite_size` pixels square and positioned by its top-left
/// corner, so the reachable range is `[0, width - sprite_size]` horizontally
/// and `[0, height - sprite_size]` vertically.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Viewport {
    pub width:       f32,
    pub height:      f32,
    pub sprite_size: f32,
}

impl Viewport {
    /// Build a validated viewport.
    ///
    /// # Errors
    ///
    /// `MascotError::Config` if any dimension is non-positive or not finite.
    pub fn new(width: f32, height: f32, sprite_size: f32) -> MascotResult<Self> {
        let viewport = Self { width, height, sprite_size };
        viewport.validate()?;
        Ok(viewport)
    }

    /// Check the dimensions of a viewport built field by field (e.g. from
    /// deserialized config).
    pub fn validate(&self) -> MascotResult<()> {
        let dims = [self.width, self.height, self.sprite_size];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(MascotError::Config(format!(
                "viewport dimensions must be positive: {}x{} sprite {}",
                self.width, self.height, self.sprite_size
            )));
        }
        Ok(())
    }

    /// Rightmost reachable `x`.
    #[inline]
    pub fn max_x(&self) -> f32 {
        (self.width - self.sprite_size).max(0.0)
    }

    /// Lowest reachable `y`, i.e. the floor.
    #[inline]
    pub fn max_y(&self) -> f32 {
        (self.height - self.sprite_size).max(0.0)
    }

    /// Resting `y` for a grounded body.
    #[inline]
    pub fn floor(&self) -> f32 {
        self.max_y()
    }

    /// Uniformly random point in `[0, max_x) × [0, max_y)`.
    pub fn random_point(&self, rng: &mut MascotRng) -> Vec2 {
        let (max_x, max_y) = (self.max_x(), self.max_y());
        let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
        let y = if max_y > 0.0 { rng.gen_range(0.0..max_y) } else { 0.0 };
        Vec2::new(x, y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0, sprite_size: 100.0 }
    }
}
