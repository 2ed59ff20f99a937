use core::result::Result as CoreResult;

use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Result type used across the game library.
pub type Result<T> = CoreResult<T, Error>;

/// Everything that can stop a game from starting.
///
/// None of these are recoverable: a board is only shown once every card has
/// been fetched, decoded and laid out.
#[derive(Debug, Error)]
pub enum Error {
    /// An HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// A catalog entry could not be parsed.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// The catalog entry has no front sprite to show.
    #[error("No sprite available for {label}")]
    MissingSprite { label: String },

    /// More distinct cards were requested than the catalog holds.
    #[error("Requested {requested} cards but the catalog only has {available}")]
    CatalogTooSmall { requested: usize, available: usize },

    /// Two cards share a label, which would make pairs ambiguous.
    #[error("Duplicate card label: {0}")]
    DuplicateLabel(String),

    /// The number of cards does not fill the requested grid.
    #[error("Expected {expected} cards for this grid, got {actual}")]
    CardCount { expected: usize, actual: usize },

    /// A grid with no rows or no columns.
    #[error("Grid dimensions must be non-zero")]
    EmptyGrid,

    /// Image bytes could not be turned into a card face.
    #[error("Failed to decode image for {label}: {reason}")]
    Decode { label: String, reason: String },

    /// The background download task died before reporting back.
    #[error("Background task failed: {0}")]
    Worker(String),
}
