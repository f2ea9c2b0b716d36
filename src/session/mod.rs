/*!
 * Page-building session.
 *
 * This module provides:
 * - The session value accumulating rendered sections
 * - Handlers for selecting a content type, typing input, submitting and generating
 * - Section summaries for listing what has been added
 */

pub mod handlers;
pub mod models;

// Re-export main types
pub use models::{SectionSummary, Session, SubmitOutcome};
