//! # Squared Distance
//!
//! A distance value that keeps its squared magnitude and only takes the
//! square root when the true distance is actually read.

use macroquad::math::Vec3;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul};

/// A distance stored in squared space.
///
/// Ordering, equality, `*` and `/` all work on the squared value, so none of
/// them ever computes a square root. When the other operand is a plain `f32`
/// it is treated as a true distance and squared before the comparison, which
/// means a negative scalar compares like its magnitude.
///
/// `*` and `/` return squared-space results: `between(a, b) / 2.0` is the
/// ratio of the squared distance to `4.0`, not half the distance. Callers use
/// them for relative-magnitude checks.
///
/// `+` is the only operator that works in true space: it sums the two roots
/// and squares the result again.
///
/// # Examples
///
/// ```
/// use iteria::SqrDist;
/// use macroquad::math::Vec3;
///
/// let mut d = SqrDist::between(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
/// assert_eq!(d.square(), 25.0);
/// assert!(d > 4.0);
/// assert!(d < 6.0);
/// assert_eq!(d.root(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SqrDist {
    square: f32,
    #[serde(skip)]
    root: Option<f32>,
}

impl SqrDist {
    /// Zero distance.
    pub const ZERO: SqrDist = SqrDist {
        square: 0.0,
        root: Some(0.0),
    };

    /// Built from `f32::MAX`; its square overflows to `+inf`.
    pub const MAX: SqrDist = SqrDist {
        square: f32::MAX * f32::MAX,
        root: Some(f32::MAX),
    };

    /// Built from `f32::MIN`; its square overflows to `+inf`.
    pub const MIN: SqrDist = SqrDist {
        square: f32::MIN * f32::MIN,
        root: Some(f32::MIN),
    };

    /// Sentinel that compares greater than every finite distance.
    pub const INFINITY: SqrDist = SqrDist {
        square: f32::INFINITY,
        root: Some(f32::INFINITY),
    };

    /// Built from `-inf`. The square is `+inf`, the cached root keeps its sign.
    pub const NEG_INFINITY: SqrDist = SqrDist {
        square: f32::INFINITY,
        root: Some(f32::NEG_INFINITY),
    };

    /// Creates a squared distance from a true distance, caching it as the root.
    pub fn from_root(distance: f32) -> Self {
        Self {
            square: distance * distance,
            root: Some(distance),
        }
    }

    /// Wraps a value that is already squared. No root is cached.
    pub fn from_square(square: f32) -> Self {
        Self { square, root: None }
    }

    /// Squared euclidean distance between two points.
    pub fn between(a: Vec3, b: Vec3) -> Self {
        Self::from_square((a - b).length_squared())
    }

    /// Returns the squared magnitude.
    pub fn square(&self) -> f32 {
        self.square
    }

    /// Returns the root if it has already been computed or supplied.
    pub fn cached_root(&self) -> Option<f32> {
        self.root
    }

    /// Returns the true distance, computing and caching it on first use.
    pub fn root(&mut self) -> f32 {
        self.root_with(f32::sqrt)
    }

    /// Like [`SqrDist::root`] but with a caller-supplied square root.
    ///
    /// `sqrt` is invoked at most once per instance; later calls read the cache.
    pub fn root_with<F>(&mut self, sqrt: F) -> f32
    where
        F: FnOnce(f32) -> f32,
    {
        match self.root {
            Some(root) => root,
            None => {
                let root = sqrt(self.square);
                self.root = Some(root);
                root
            }
        }
    }

    /// Checks whether `a` and `b` are no further apart than `radius`.
    pub fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
        Self::between(a, b) <= radius
    }

    /// Finds the point closest to `origin`.
    ///
    /// Returns the index into `points` and its squared distance, or `None` for
    /// an empty slice. Ties keep the earliest point.
    pub fn nearest(origin: Vec3, points: &[Vec3]) -> Option<(usize, SqrDist)> {
        let mut best: Option<(usize, SqrDist)> = None;
        let mut best_distance = SqrDist::INFINITY;

        for (index, point) in points.iter().enumerate() {
            let distance = SqrDist::between(origin, *point);
            if best.is_none() || distance < best_distance {
                best_distance = distance;
                best = Some((index, distance));
            }
        }

        best
    }
}

impl Default for SqrDist {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for SqrDist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write!(f, "{root}"),
            None => write!(f, "sqrt({})", self.square),
        }
    }
}

impl PartialEq for SqrDist {
    fn eq(&self, other: &Self) -> bool {
        self.square == other.square
    }
}

impl PartialOrd for SqrDist {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.square.partial_cmp(&other.square)
    }
}

impl PartialEq<f32> for SqrDist {
    fn eq(&self, other: &f32) -> bool {
        self.square == other * other
    }
}

impl PartialOrd<f32> for SqrDist {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.square.partial_cmp(&(other * other))
    }
}

impl PartialEq<SqrDist> for f32 {
    fn eq(&self, other: &SqrDist) -> bool {
        self * self == other.square
    }
}

impl PartialOrd<SqrDist> for f32 {
    fn partial_cmp(&self, other: &SqrDist) -> Option<Ordering> {
        (self * self).partial_cmp(&other.square)
    }
}

impl Div<f32> for SqrDist {
    type Output = f32;

    fn div(self, rhs: f32) -> f32 {
        self.square / (rhs * rhs)
    }
}

impl Mul<f32> for SqrDist {
    type Output = f32;

    fn mul(self, rhs: f32) -> f32 {
        self.square * (rhs * rhs)
    }
}

impl Div for SqrDist {
    type Output = f32;

    fn div(self, rhs: SqrDist) -> f32 {
        self.square / rhs.square
    }
}

impl Mul for SqrDist {
    type Output = f32;

    fn mul(self, rhs: SqrDist) -> f32 {
        self.square * rhs.square
    }
}

impl Add for SqrDist {
    type Output = SqrDist;

    fn add(mut self, mut rhs: SqrDist) -> SqrDist {
        SqrDist::from_root(self.root() + rhs.root())
    }
}
