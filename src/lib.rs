//! Radial and elliptical arc layout: radius solving, bounds fitting, and a
//! two-phase measure/arrange protocol.
//!
//! Pure geometry. Items are rectangles spread by angle around a centre; the
//! solver picks the radius (or radii) so that items never overlap when space
//! is unconstrained, or so that they fill the available box when it isn't.
//! `no_std` compatible with `alloc`.
//!
//! # Modules
//!
//! - [`arc`]: Arc span and per-item angle allocation
//! - [`location`]: Item direction plus size, pairwise separation/fit formulas
//! - [`solver`]: Radius solving: separation, centred fit, incremental fit
//! - [`bounds`]: Bounding boxes at a candidate radius
//! - [`align`]: Alignment of solved content in the final frame
//! - [`engine`]: Circular and elliptical layouts, measure → arrange
//! - [`svg`]: SVG rendering of an arrangement (feature `svg`)
//!
//! # Example
//!
//! ```
//! use arclayout::{Alignment, ArcSpan, EllipticalLayout, Size};
//!
//! let layout = EllipticalLayout::new(ArcSpan::FULL_TURN)
//!     .include_full_ellipse(true)
//!     .horizontal_alignment(Alignment::Stretch)
//!     .vertical_alignment(Alignment::Stretch);
//! let items = [Size::new(20.0, 20.0); 8];
//! let available = Size::new(300.0, 150.0);
//!
//! let measured = layout.measure(available, &items).unwrap();
//! let arranged = layout.arrange(available, &items, &measured.state).unwrap();
//! assert!(arranged.rects.iter().all(|r| r.within(available, 1e-9)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod align;
pub mod arc;
pub mod bounds;
pub mod engine;
mod error;
pub mod geometry;
pub mod location;
pub mod solver;
#[cfg(feature = "svg")]
pub mod svg;

pub use align::Alignment;
pub use arc::{Angles, ArcSpan};
pub use engine::{
    Anchor, Arranged, CircularLayout, EllipticalLayout, LayoutChild, LayoutState, Measured,
};
pub use error::LayoutError;
pub use geometry::{Point, Rect, Size};
pub use location::{CO_ANGULAR_EPSILON, RadialLocation};
pub use solver::{AxisLock, Oversize, Radii};
