//! Bounding boxes of items placed at a candidate radius.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::geometry::Rect;
use crate::location::RadialLocation;
use crate::solver::Radii;

/// Union of every item's placement rectangle at `radii`, in solver space.
///
/// Returns [`Rect::EMPTY`] for no items.
pub fn bounds_at<'a, I>(locations: I, radii: Radii) -> Rect
where
    I: IntoIterator<Item = &'a RadialLocation>,
{
    locations
        .into_iter()
        .fold(Rect::EMPTY, |acc, loc| acc.union(loc.placement(radii)))
}

/// Smallest box symmetric about the origin that covers `bounds`.
///
/// Keeps the origin, not the content centroid, at the middle of the layout.
pub fn centred_bounds(bounds: Rect) -> Rect {
    if bounds.is_empty() {
        return bounds;
    }
    let half_w = bounds.left().abs().max(bounds.right().abs());
    let half_h = bounds.top().abs().max(bounds.bottom().abs());
    Rect::from_edges(-half_w, -half_h, half_w, half_h)
}
