//! HTML rendering for the transcript viewer.
//!
//! Every renderer returns a complete document. Text that comes from the
//! database goes through [`escape_html`]; only markup written here is emitted
//! as-is.

mod instance;
mod landing;
mod page;
mod transcript;

pub use instance::render_instance;
pub use landing::render_landing;
pub use page::{SiteConfig, error_document, escape_html, format_timestamp};
pub use transcript::{CRASH_NOTICE, render_annotated_transcript, render_raw_transcript};
