//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
///
/// A multi-deck shoe reshuffles itself when it runs dry mid-draw, so the
/// only way a draw can fail is a shoe configured with zero decks. That is a
/// fatal configuration error, not something callers retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The shoe holds no cards even after a reshuffle.
    #[error("cannot draw from an empty shoe")]
    Empty,
}
