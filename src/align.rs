//! Alignment of solved content inside the final arrange size.

use core::str::FromStr;

use crate::error::LayoutError;
use crate::geometry::{Point, Rect, Size};
use crate::solver::AxisLock;

/// Where content sits along one axis of the final size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Near edge (left or top).
    Start,
    /// Centred.
    #[default]
    Center,
    /// Far edge (right or bottom).
    End,
    /// Centred, and the radius on this axis is solved independently.
    Stretch,
}

impl Alignment {
    /// Every alignment, in discriminant order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Center, Self::End, Self::Stretch];

    /// Whether this axis is tied to the other axis's radius.
    pub fn locks_axis(self) -> bool {
        self != Self::Stretch
    }

    /// Translation along one axis that moves content spanning
    /// `near..near + extent` into `0..available`.
    fn offset(self, near: f64, extent: f64, available: f64) -> f64 {
        match self {
            Self::Start => -near,
            Self::End => available - (near + extent),
            Self::Center | Self::Stretch => available / 2.0 - (near + extent / 2.0),
        }
    }
}

impl TryFrom<u8> for Alignment {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, LayoutError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LayoutError::InvalidAlignment)
    }
}

impl FromStr for Alignment {
    type Err = LayoutError;

    /// Accepts the variant names in any ASCII case, plus the usual
    /// per-axis synonyms (`left`, `top`, `right`, `bottom`, `centre`).
    fn from_str(s: &str) -> Result<Self, LayoutError> {
        const NAMES: [(&str, Alignment); 9] = [
            ("start", Alignment::Start),
            ("left", Alignment::Start),
            ("top", Alignment::Start),
            ("center", Alignment::Center),
            ("centre", Alignment::Center),
            ("end", Alignment::End),
            ("right", Alignment::End),
            ("bottom", Alignment::End),
            ("stretch", Alignment::Stretch),
        ];
        let s = s.trim();
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, alignment)| alignment)
            .ok_or(LayoutError::InvalidAlignment)
    }
}

/// Axis lock implied by a pair of alignments: only `Stretch` frees an axis.
pub fn axis_lock(horizontal: Alignment, vertical: Alignment) -> AxisLock {
    AxisLock {
        horizontal: horizontal.locks_axis(),
        vertical: vertical.locks_axis(),
    }
}

/// Translation mapping solver-space `content` into a box of `available`,
/// each axis aligned independently.
pub fn resolve_translation(
    available: Size,
    content: Rect,
    horizontal: Alignment,
    vertical: Alignment,
) -> Point {
    if content.is_empty() {
        return Point::ORIGIN;
    }
    Point::new(
        horizontal.offset(content.x, content.width, available.width),
        vertical.offset(content.y, content.height, available.height),
    )
}
