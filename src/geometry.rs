//! Size, point, and rectangle primitives in layout units.
//!
//! Coordinates are `f64`. The solver works in a frame centred on the arc
//! origin, so rectangles routinely carry negative `x`/`y`.

/// Width × height in layout units.
///
/// Available sizes may be `f64::INFINITY` on either axis to mean
/// "unconstrained". Item and final sizes are always finite.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Both axes unconstrained.
    pub const INFINITE: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both axes are finite.
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Whether both axes are unconstrained.
    pub fn is_unbounded(&self) -> bool {
        self.width == f64::INFINITY && self.height == f64::INFINITY
    }

    /// Valid as an available size: each axis non-negative, `+∞` allowed.
    pub(crate) fn is_valid_available(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Valid as a measured or final size: each axis finite and non-negative.
    pub(crate) fn is_valid_extent(&self) -> bool {
        self.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// A point, also used as a translation vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `x`/`y` at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The union identity: contains nothing, absorbed by any real rect.
    pub const EMPTY: Self = Self {
        x: f64::INFINITY,
        y: f64::INFINITY,
        width: f64::NEG_INFINITY,
        height: f64::NEG_INFINITY,
    };

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size centred on `centre`.
    pub fn centred_at(centre: Point, size: Size) -> Self {
        Self::new(
            centre.x - size.width / 2.0,
            centre.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Rect spanning two corner coordinates.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Whether this is [`Rect::EMPTY`] (or otherwise has a negative extent).
    pub fn is_empty(&self) -> bool {
        !(self.width >= 0.0 && self.height >= 0.0)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Centre point.
    pub fn centre(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest rect covering both. Empty rects are ignored.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Self::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Same rect moved by `by`.
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }

    /// Whether the interiors of the two rects intersect by more than
    /// `tolerance` on both axes. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Self, tolerance: f64) -> bool {
        let dx = self.right().min(other.right()) - self.left().max(other.left());
        let dy = self.bottom().min(other.bottom()) - self.top().max(other.top());
        dx > tolerance && dy > tolerance
    }

    /// Whether this rect lies inside `(0, 0, bounds)` give or take `tolerance`.
    pub fn within(&self, bounds: Size, tolerance: f64) -> bool {
        self.left() >= -tolerance
            && self.top() >= -tolerance
            && self.right() <= bounds.width + tolerance
            && self.bottom() <= bounds.height + tolerance
    }
}
