//! Response snapshotting and diagnostic extraction.
//!
//! - [`ApiResponse`] - Owned snapshot of a completed HTTP response
//! - [`extract_message`] - Best-effort diagnostic mining from a response
//!   body

mod diagnostic;
mod handle;

pub use diagnostic::extract_message;
pub use handle::ApiResponse;
