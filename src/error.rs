/// Errors returned when building a [`Tree`](crate::Tree).
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A tree holds the values `1..=n` so `n` must be at least 1.
    #[error("tree size must be positive, got {0}")]
    NonPositiveSize(i32),
}
