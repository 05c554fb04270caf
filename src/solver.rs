//! Radius solving for circular and elliptical arc layouts.
//!
//! Three strategies, picked by the available size and centring:
//!
//! | Available      | Centred                | Uncentered                    |
//! |----------------|------------------------|-------------------------------|
//! | unbounded      | [`separation_radii`]   | [`separation_radii`]          |
//! | bounded        | [`centred_fit_radii`]  | [`incremental_fit_radii`]     |
//!
//! Every strategy produces a horizontal and a vertical radius. [`AxisLock`]
//! decides per constraint whether an axis is pulled down to the smaller of
//! the two; a circle is simply both axes locked.
//!
//! The pairwise strategies are O(n²) in the item count. Arc layouts hold tens
//! of items, and every pair has to be checked: items far apart in angle can
//! still collide once sizes differ.

use alloc::vec::Vec;

use crate::bounds::bounds_at;
use crate::geometry::{Rect, Size};
use crate::location::RadialLocation;

/// Slack allowed before a running bounding box counts as overflowing.
const FIT_TOLERANCE: f64 = 1e-7;

/// Horizontal and vertical radius. Equal for circular layouts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Radii {
    pub x: f64,
    pub y: f64,
}

impl Radii {
    pub const ZERO: Self = Self::uniform(0.0);

    /// Both axes unconstrained.
    pub const INFINITE: Self = Self::uniform(f64::INFINITY);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same radius on both axes.
    pub const fn uniform(r: f64) -> Self {
        Self { x: r, y: r }
    }

    /// The smaller of the two radii.
    pub fn min(self) -> f64 {
        self.x.min(self.y)
    }

    /// Component-wise minimum.
    pub fn min_each(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max_each(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Pull locked axes down to the smaller radius.
    pub fn lock(self, lock: AxisLock) -> Self {
        let m = self.min();
        Self::new(
            if lock.horizontal { m } else { self.x },
            if lock.vertical { m } else { self.y },
        )
    }

    /// Replace each infinite axis with the matching axis of `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self::new(
            if self.x.is_finite() { self.x } else { fallback.x },
            if self.y.is_finite() { self.y } else { fallback.y },
        )
    }

    /// Replace each infinite axis with zero.
    fn finite_or_zero(self) -> Self {
        self.or(Self::ZERO)
    }
}

/// Which axes are tied to the smaller radius of every constraint.
///
/// An unlocked axis is free to grow on its own, which stretches the circle
/// into an ellipse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AxisLock {
    pub horizontal: bool,
    pub vertical: bool,
}

impl AxisLock {
    /// Both axes locked: a circle.
    pub const CIRCULAR: Self = Self {
        horizontal: true,
        vertical: true,
    };

    /// Neither axis locked.
    pub const FREE: Self = Self {
        horizontal: false,
        vertical: false,
    };
}

/// What the bounded uncentered solver does with an item that is larger than
/// the available size on its own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Oversize {
    /// Keep it; fit radii that would go negative become zero.
    #[default]
    Clamp,
    /// Leave it out of the solve. It is still placed at the solved radius.
    Exclude,
}

/// Smallest radii at which no two items overlap.
///
/// Each pair contributes its per-axis separation radii after locking; an
/// axis the pair cannot separate along contributes nothing, since the other
/// axis already keeps them apart. Co-angular pairs contribute nothing.
pub fn separation_radii(locations: &[RadialLocation], lock: AxisLock) -> Radii {
    let mut radii = Radii::ZERO;
    for (i, a) in locations.iter().enumerate() {
        for b in &locations[i + 1..] {
            let pair = a.separation(b).lock(lock).finite_or_zero();
            radii = radii.max_each(pair);
        }
    }
    radii
}

/// Largest radii at which every item fits in a box of `available` centred
/// on the origin.
///
/// Centring makes the layout symmetric, so each item only has to fit against
/// its own reflection. An axis no item constrains stays infinite.
pub fn centred_fit_radii(locations: &[RadialLocation], available: Size, lock: AxisLock) -> Radii {
    locations.iter().fold(Radii::INFINITE, |radii, loc| {
        radii.min_each(loc.self_fit(available).lock(lock))
    })
}

/// Largest radii at which the items' tight bounding box fits in `available`,
/// found incrementally.
///
/// The first two items seed the radii from their pairwise fit. Each further
/// item is folded into a running bounding box; when that box would overflow,
/// the radii shrink to the tightest fit between the new item and every
/// earlier one, and the box is rebuilt at the new radii. Radii only ever
/// shrink, and a pair that fits at some radius fits at every smaller one, so
/// earlier items stay inside. Pairs among earlier items are not revisited.
///
/// Axes still unconstrained at the end stay infinite. While solving, such an
/// axis is placed at `fallback`.
pub fn incremental_fit_radii(
    locations: &[RadialLocation],
    available: Size,
    lock: AxisLock,
    oversize: Oversize,
    fallback: Radii,
) -> Radii {
    let candidates: Vec<RadialLocation> = match oversize {
        Oversize::Clamp => locations.to_vec(),
        Oversize::Exclude => locations
            .iter()
            .filter(|loc| !loc.exceeds(available))
            .copied()
            .collect(),
    };

    let mut radii = Radii::INFINITE;
    let mut running = Rect::EMPTY;
    for (i, loc) in candidates.iter().enumerate() {
        if i == 0 {
            continue;
        }
        if i > 1 && settled(radii, available) {
            let grown = running.union(loc.placement(radii.or(fallback)));
            if !overflows(grown, available) {
                running = grown;
                continue;
            }
        }
        let tightest = candidates[..i]
            .iter()
            .fold(Radii::INFINITE, |acc, prior| {
                acc.min_each(loc.fit(prior, available).lock(lock))
            });
        radii = radii.min_each(tightest);
        running = bounds_at(&candidates[..=i], radii.or(fallback));
        tracing::trace!(item = i, x = radii.x, y = radii.y, "fit radii shrunk");
    }
    radii
}

/// Solve the radii for `locations` in `available`.
///
/// An unbounded available size solves for separation only. A bounded one
/// fits the items to it; any axis the fit leaves unconstrained falls back to
/// its separation radius.
pub fn solve(
    locations: &[RadialLocation],
    available: Size,
    centred: bool,
    lock: AxisLock,
    oversize: Oversize,
) -> Radii {
    let separation = separation_radii(locations, lock);
    if available.is_unbounded() {
        return separation;
    }
    let fit = if centred {
        centred_fit_radii(locations, available, lock)
    } else {
        incremental_fit_radii(locations, available, lock, oversize, separation)
    };
    fit.or(separation)
}

/// Whether every bounded axis has a finite radius. Until then the running
/// box means nothing and each new item goes straight to the pairwise fit.
fn settled(radii: Radii, available: Size) -> bool {
    (radii.x.is_finite() || available.width == f64::INFINITY)
        && (radii.y.is_finite() || available.height == f64::INFINITY)
}

fn overflows(bounds: Rect, available: Size) -> bool {
    bounds.width > available.width + FIT_TOLERANCE
        || bounds.height > available.height + FIT_TOLERANCE
}
