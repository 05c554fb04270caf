//! Two-phase measure/arrange protocol for circular and elliptical layouts.
//!
//! [`measure`](CircularLayout::measure) solves the radius and reports a
//! desired size plus a [`LayoutState`]. The caller threads that state into
//! [`arrange`](CircularLayout::arrange), which recomputes the same angles,
//! places every item at the stored radius, and translates the result into
//! the final frame. Nothing is kept inside the layout between calls, so
//! repeated or speculative measures are harmless.
//!
//! # Example
//!
//! ```
//! use arclayout::{ArcSpan, CircularLayout, Size};
//!
//! let layout = CircularLayout::new(ArcSpan::FULL_TURN);
//! let items = [Size::new(24.0, 24.0); 4];
//!
//! let measured = layout.measure(Size::INFINITE, &items).unwrap();
//! assert!((measured.desired.width - 72.0).abs() < 1e-9);
//!
//! let arranged = layout.arrange(measured.desired, &items, &measured.state).unwrap();
//! assert_eq!(arranged.rects.len(), 4);
//! ```

use alloc::vec::Vec;

use crate::align::{Alignment, axis_lock, resolve_translation};
use crate::arc::ArcSpan;
use crate::bounds::{bounds_at, centred_bounds};
use crate::error::LayoutError;
use crate::geometry::{Point, Rect, Size};
use crate::location::RadialLocation;
use crate::solver::{AxisLock, Oversize, Radii, solve};

/// How arrange maps solver space into the final frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor {
    /// Fixed translation, independent of the final size.
    Translate(Point),
    /// Put the arc origin at the middle of the final size.
    Centre,
    /// Align these solver-space content bounds inside the final size using
    /// the layout's alignments.
    Align(Rect),
}

/// Everything arrange needs from measure.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutState {
    /// Solved radii. Equal on both axes for circular layouts.
    pub radii: Radii,
    /// Translation rule for arrange.
    pub anchor: Anchor,
    /// Number of items the state was measured for.
    pub item_count: usize,
}

/// Result of the measure phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measured {
    /// Size the layout would like to occupy.
    pub desired: Size,
    /// State to pass to the matching arrange call.
    pub state: LayoutState,
}

/// Result of the arrange phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Arranged {
    /// Final size actually used.
    pub size: Size,
    /// Arc origin in the final frame.
    pub origin: Point,
    /// One rectangle per item, in input order.
    pub rects: Vec<Rect>,
}

/// A child hosted by an arc layout.
pub trait LayoutChild {
    /// Measure against `available` and return the desired size.
    fn measure(&mut self, available: Size) -> Size;

    /// Desired size from the most recent [`measure`](Self::measure).
    fn desired_size(&self) -> Size;

    /// Commit the final rectangle.
    fn arrange(&mut self, rect: Rect);
}

/// Items spread over an arc of a circle with a single shared radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CircularLayout {
    pub arc: ArcSpan,
    /// Keep the circle's centre at the middle of the layout. When false, the
    /// layout hugs the items' tight bounding box.
    pub origin_at_centre: bool,
}

impl CircularLayout {
    /// Uncentered layout over `arc`.
    pub fn new(arc: ArcSpan) -> Self {
        Self {
            arc,
            origin_at_centre: false,
        }
    }

    /// Set whether the circle's centre stays at the middle of the layout.
    pub fn origin_at_centre(mut self, centred: bool) -> Self {
        self.origin_at_centre = centred;
        self
    }

    /// Solve the radius for items of `sizes` within `available`.
    pub fn measure(&self, available: Size, sizes: &[Size]) -> Result<Measured, LayoutError> {
        let solved = Solved::new(
            self.arc,
            available,
            sizes,
            self.origin_at_centre,
            AxisLock::CIRCULAR,
            Oversize::Clamp,
        )?;
        let anchor = if self.origin_at_centre {
            Anchor::Centre
        } else if solved.content.is_empty() {
            Anchor::Translate(Point::ORIGIN)
        } else {
            Anchor::Translate(Point::new(-solved.content.x, -solved.content.y))
        };
        let measured = solved.into_measured(anchor);
        tracing::debug!(
            items = sizes.len(),
            radius = measured.state.radii.x,
            width = measured.desired.width,
            height = measured.desired.height,
            "circular measure"
        );
        Ok(measured)
    }

    /// Place items of `sizes` in a frame of `final_size`.
    pub fn arrange(
        &self,
        final_size: Size,
        sizes: &[Size],
        state: &LayoutState,
    ) -> Result<Arranged, LayoutError> {
        arrange(
            self.arc,
            final_size,
            sizes,
            state,
            Alignment::Center,
            Alignment::Center,
        )
    }

    /// Measure every child against `available`, then solve.
    pub fn measure_children<C: LayoutChild>(
        &self,
        available: Size,
        children: &mut [C],
    ) -> Result<Measured, LayoutError> {
        let sizes = measure_all(children, available);
        self.measure(available, &sizes)
    }

    /// Arrange every child, in order, and return the final size used.
    pub fn arrange_children<C: LayoutChild>(
        &self,
        final_size: Size,
        children: &mut [C],
        state: &LayoutState,
    ) -> Result<Size, LayoutError> {
        let sizes = desired_all(children);
        let arranged = self.arrange(final_size, &sizes, state)?;
        Ok(commit(arranged, children))
    }
}

/// Items spread over an arc of an ellipse whose horizontal and vertical radii
/// may differ.
///
/// The radii only diverge on axes aligned with [`Alignment::Stretch`]; any
/// other alignment ties that axis to the smaller radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EllipticalLayout {
    pub arc: ArcSpan,
    /// Keep the ellipse's centre at the middle of the content bounds. When
    /// false, the content bounds hug the items.
    pub include_full_ellipse: bool,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
}

impl EllipticalLayout {
    /// Uncentered, centre-aligned layout over `arc`.
    pub fn new(arc: ArcSpan) -> Self {
        Self {
            arc,
            include_full_ellipse: false,
            horizontal_alignment: Alignment::Center,
            vertical_alignment: Alignment::Center,
        }
    }

    /// Set whether the ellipse's centre stays at the middle of the content.
    pub fn include_full_ellipse(mut self, include: bool) -> Self {
        self.include_full_ellipse = include;
        self
    }

    /// Set the horizontal alignment.
    pub fn horizontal_alignment(mut self, alignment: Alignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical alignment.
    pub fn vertical_alignment(mut self, alignment: Alignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Solve the radii for items of `sizes` within `available`.
    ///
    /// In the bounded uncentered case, an item already larger than
    /// `available` is left out of the solve; it is still placed.
    pub fn measure(&self, available: Size, sizes: &[Size]) -> Result<Measured, LayoutError> {
        let solved = Solved::new(
            self.arc,
            available,
            sizes,
            self.include_full_ellipse,
            axis_lock(self.horizontal_alignment, self.vertical_alignment),
            Oversize::Exclude,
        )?;
        let anchor = Anchor::Align(solved.content);
        let measured = solved.into_measured(anchor);
        tracing::debug!(
            items = sizes.len(),
            radius_x = measured.state.radii.x,
            radius_y = measured.state.radii.y,
            width = measured.desired.width,
            height = measured.desired.height,
            "elliptical measure"
        );
        Ok(measured)
    }

    /// Place items of `sizes` in a frame of `final_size`.
    pub fn arrange(
        &self,
        final_size: Size,
        sizes: &[Size],
        state: &LayoutState,
    ) -> Result<Arranged, LayoutError> {
        arrange(
            self.arc,
            final_size,
            sizes,
            state,
            self.horizontal_alignment,
            self.vertical_alignment,
        )
    }

    /// Measure every child against `available`, then solve.
    pub fn measure_children<C: LayoutChild>(
        &self,
        available: Size,
        children: &mut [C],
    ) -> Result<Measured, LayoutError> {
        let sizes = measure_all(children, available);
        self.measure(available, &sizes)
    }

    /// Arrange every child, in order, and return the final size used.
    pub fn arrange_children<C: LayoutChild>(
        &self,
        final_size: Size,
        children: &mut [C],
        state: &LayoutState,
    ) -> Result<Size, LayoutError> {
        let sizes = desired_all(children);
        let arranged = self.arrange(final_size, &sizes, state)?;
        Ok(commit(arranged, children))
    }
}

/// Solver output shared by both layouts.
struct Solved {
    radii: Radii,
    /// Content bounds in solver space: symmetric about the origin when
    /// centred, tight otherwise. Empty when there are no items.
    content: Rect,
    item_count: usize,
}

impl Solved {
    fn new(
        arc: ArcSpan,
        available: Size,
        sizes: &[Size],
        centred: bool,
        lock: AxisLock,
        oversize: Oversize,
    ) -> Result<Self, LayoutError> {
        arc.validate()?;
        if !available.is_valid_available() {
            return Err(LayoutError::InvalidAvailableSize);
        }
        let locations = locations(arc, sizes)?;

        // A lone item or a collapsed arc stacks everything on the origin.
        let radii = if locations.len() <= 1 || arc.is_degenerate() {
            Radii::ZERO
        } else {
            solve(&locations, available, centred, lock, oversize)
        };

        let tight = bounds_at(&locations, radii);
        let content = if centred { centred_bounds(tight) } else { tight };
        Ok(Self {
            radii,
            content,
            item_count: sizes.len(),
        })
    }

    fn into_measured(self, anchor: Anchor) -> Measured {
        let desired = if self.content.is_empty() {
            Size::ZERO
        } else {
            self.content.size()
        };
        Measured {
            desired,
            state: LayoutState {
                radii: self.radii,
                anchor,
                item_count: self.item_count,
            },
        }
    }
}

fn locations(arc: ArcSpan, sizes: &[Size]) -> Result<Vec<RadialLocation>, LayoutError> {
    arc.angles(sizes.len())
        .zip(sizes)
        .enumerate()
        .map(|(index, (angle, &size))| {
            if size.is_valid_extent() {
                Ok(RadialLocation::new(angle, size))
            } else {
                Err(LayoutError::InvalidItemSize { index })
            }
        })
        .collect()
}

fn arrange(
    arc: ArcSpan,
    final_size: Size,
    sizes: &[Size],
    state: &LayoutState,
    horizontal: Alignment,
    vertical: Alignment,
) -> Result<Arranged, LayoutError> {
    arc.validate()?;
    if !final_size.is_valid_extent() {
        return Err(LayoutError::InvalidFinalSize);
    }
    if sizes.len() != state.item_count {
        return Err(LayoutError::StaleState {
            expected: state.item_count,
            actual: sizes.len(),
        });
    }
    let locations = locations(arc, sizes)?;

    let translation = match state.anchor {
        Anchor::Translate(by) => by,
        Anchor::Centre => Point::new(final_size.width / 2.0, final_size.height / 2.0),
        Anchor::Align(content) => resolve_translation(final_size, content, horizontal, vertical),
    };
    let rects = locations
        .iter()
        .map(|loc| loc.placement(state.radii).offset(translation))
        .collect();
    tracing::debug!(
        items = sizes.len(),
        dx = translation.x,
        dy = translation.y,
        "arrange"
    );
    Ok(Arranged {
        size: final_size,
        origin: translation,
        rects,
    })
}

fn measure_all<C: LayoutChild>(children: &mut [C], available: Size) -> Vec<Size> {
    children
        .iter_mut()
        .map(|child| child.measure(available))
        .collect()
}

fn desired_all<C: LayoutChild>(children: &[C]) -> Vec<Size> {
    children.iter().map(LayoutChild::desired_size).collect()
}

fn commit<C: LayoutChild>(arranged: Arranged, children: &mut [C]) -> Size {
    for (child, rect) in children.iter_mut().zip(arranged.rects) {
        child.arrange(rect);
    }
    arranged.size
}
