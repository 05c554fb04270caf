/// Layout computation error.
///
/// All variants describe caller input that can never produce a layout.
/// Degenerate but legal inputs (no items, a zero-length arc, items larger
/// than the available space) are not errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// An alignment name or discriminant outside `Start`/`Center`/`End`/`Stretch`.
    #[error("unknown alignment value")]
    InvalidAlignment,
    /// Arc start or end is NaN or infinite.
    #[error("arc endpoints must be finite")]
    NonFiniteArc,
    /// Available size is negative or NaN. `+∞` is allowed.
    #[error("available size must be non-negative")]
    InvalidAvailableSize,
    /// An item reported a negative, NaN, or infinite desired size.
    #[error("item {index} has an invalid desired size")]
    InvalidItemSize {
        /// Position of the item in the input list.
        index: usize,
    },
    /// Final size is negative or not finite.
    #[error("final size must be finite and non-negative")]
    InvalidFinalSize,
    /// Arrange was given a state measured for a different item count.
    #[error("layout state was measured for {expected} items, arrange got {actual}")]
    StaleState {
        /// Item count the state was measured for.
        expected: usize,
        /// Item count passed to arrange.
        actual: usize,
    },
}
