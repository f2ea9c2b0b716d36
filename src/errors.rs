/*!
 * Error types for the pagegen application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while building or writing a page
#[derive(Error, Debug)]
pub enum PageError {
    /// Configuration values that cannot produce a page
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A recipe entry that cannot be replayed
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Pinned banner index outside the configured range
    #[error("Banner index {index} is outside {min}..={max}")]
    BannerOutOfRange {
        /// Requested index
        index: u32,
        /// Smallest allowed index
        min: u32,
        /// Largest allowed index
        max: u32,
    },
}
