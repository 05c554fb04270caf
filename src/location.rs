//! One item's direction from the arc origin plus its measured size.
//!
//! Holds the pairwise formulas the solver is built from:
//!
//! - **separation**: smallest radius at which two items stop overlapping;
//! - **fit**: largest radius at which two items still fit in a box.
//!
//! Both are solved per axis. Overlap is avoided if *either* axis separates,
//! so the circular separation radius is the smaller of the two. Fitting needs
//! *both* axes to fit, so the circular fit radius is also the smaller of the
//! two. The elliptical solver keeps the axes apart and applies its own lock.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::geometry::{Point, Rect, Size};
use crate::solver::Radii;

/// Two locations whose cosines differ by less than this never constrain
/// each other's separation radius.
pub const CO_ANGULAR_EPSILON: f64 = 1e-5;

/// Positions diverging by less than this per unit radius are treated as
/// never diverging on that axis. Keeps `sin(π)`-sized noise out of divisors.
const DEGENERATE_SPREAD: f64 = 1e-9;

/// Cached direction and size of a single item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialLocation {
    sin: f64,
    cos: f64,
    size: Size,
}

impl RadialLocation {
    /// Location of an item of `size` at `angle` radians.
    pub fn new(angle: f64, size: Size) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos, size }
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Centre of the item at `radii`, in solver space (origin-centred,
    /// y pointing down).
    pub fn centre(&self, radii: Radii) -> Point {
        Point::new(radii.x * self.cos, -radii.y * self.sin)
    }

    /// Placement rectangle at `radii`, in solver space.
    pub fn placement(&self, radii: Radii) -> Rect {
        Rect::centred_at(self.centre(radii), self.size)
    }

    /// Whether the two cosines are too close to divide by.
    pub fn is_co_angular(&self, other: &Self) -> bool {
        (self.cos - other.cos).abs() < CO_ANGULAR_EPSILON
    }

    /// Per-axis radii at which the two items stop overlapping along x and
    /// along y. Either axis alone is enough to keep them apart.
    ///
    /// A co-angular pair yields `(0, 0)`. An axis along which the two never
    /// separate (sines equal) yields `+∞` for that axis.
    pub fn separation(&self, other: &Self) -> Radii {
        if self.is_co_angular(other) {
            return Radii::ZERO;
        }
        let dcos = (self.cos - other.cos).abs();
        let dsin = (self.sin - other.sin).abs();
        Radii::new(
            clearance(self.size.width + other.size.width, 2.0 * dcos),
            clearance(self.size.height + other.size.height, 2.0 * dsin),
        )
    }

    /// Smallest shared radius that keeps the two items from overlapping.
    pub fn separation_radius(&self, other: &Self) -> f64 {
        self.separation(other).min()
    }

    /// Per-axis radii at which the union of both items just fills
    /// `available`. Infinite available axes, and axes along which the two
    /// never move apart, yield `+∞`. Never negative.
    pub fn fit(&self, other: &Self, available: Size) -> Radii {
        let dcos = (self.cos - other.cos).abs();
        let dsin = (self.sin - other.sin).abs();
        Radii::new(
            room(
                available.width - (self.size.width + other.size.width) / 2.0,
                dcos,
            ),
            room(
                available.height - (self.size.height + other.size.height) / 2.0,
                dsin,
            ),
        )
    }

    /// Largest shared radius at which both items fit in `available`.
    pub fn fit_radius(&self, other: &Self, available: Size) -> f64 {
        self.fit(other, available).min()
    }

    /// Per-axis radii at which this item, mirrored through the origin, just
    /// touches the edges of a box of `available` centred on the origin.
    ///
    /// An item wider (or taller) than the box collapses that axis to 0.
    pub fn self_fit(&self, available: Size) -> Radii {
        Radii::new(
            room(
                available.width / 2.0 - self.size.width / 2.0,
                self.cos.abs(),
            ),
            room(
                available.height / 2.0 - self.size.height / 2.0,
                self.sin.abs(),
            ),
        )
    }

    /// Whether the item alone is larger than `available` on either axis.
    pub fn exceeds(&self, available: Size) -> bool {
        self.size.width > available.width || self.size.height > available.height
    }
}

/// Radius needed to open a gap of `extent` when the positions diverge by
/// `spread` per unit radius.
fn clearance(extent: f64, spread: f64) -> f64 {
    if extent <= 0.0 {
        0.0
    } else if spread < DEGENERATE_SPREAD {
        f64::INFINITY
    } else {
        extent / spread
    }
}

/// Radius that uses up `slack` when the positions diverge by `spread` per
/// unit radius. Negative slack means nothing fits: radius 0.
fn room(slack: f64, spread: f64) -> f64 {
    if slack == f64::INFINITY || spread < DEGENERATE_SPREAD {
        f64::INFINITY
    } else if slack <= 0.0 {
        0.0
    } else {
        slack / spread
    }
}
