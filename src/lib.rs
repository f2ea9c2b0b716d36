/*!
 * # pagegen - Next.js page generator
 *
 * A Rust library for assembling content sections into a static Next.js page.
 *
 * ## Features
 *
 * - Build pages from headings, paragraphs, bullet lists and code blocks
 * - Fill a fixed page skeleton with header, banner, footer and content
 * - Random banner selection with an injectable random source
 * - Optional escaping of form values against the template syntax
 * - Replay JSON recipes without the interactive form
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `section`: Content types and the fragment producer rules
 * - `session`: Session state and its command handlers
 * - `renderer`: Page template rendering and banner selection
 * - `recipe`: JSON recipes replayed through the session handlers
 * - `app_config`: Configuration management
 * - `app_controller`: Generation and output file handling
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod recipe;
pub mod renderer;
pub mod section;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, GenerateOutcome};
pub use errors::PageError;
pub use recipe::PageRecipe;
pub use renderer::{PageMeta, PageRenderer, RenderedPage};
pub use section::{ContentType, Fragment};
pub use session::Session;
