//! Domain models for smarty-mcfly.
//!
//! - [`SourceKind`] / [`Source`]: where documentation comes from, as given by the caller.
//! - [`FetchPlan`]: a resolved source, ready for the fetcher.
//! - [`RawContent`]: fetched bytes tagged with the format the converter needs.
//! - [`FiledDocument`]: a document written into the `.smarts/` store.

mod document;
mod source;

pub use document::*;
pub use source::*;
