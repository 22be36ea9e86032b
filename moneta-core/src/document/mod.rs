//! Order-preserving target-document model.
//!
//! The target document is an ordered key→value mapping (`serde_json::Map`
//! with `preserve_order`). Merging and placement are pure functions from one
//! map to another, which keeps the merge step idempotent and trivially
//! testable; persistence goes through a canonical renderer so identical trees
//! always produce byte-identical files.
/// Pure merge of the economic sub-section into a document.
pub mod merge;
/// Canonical textual rendering.
pub mod render;
/// Whole-document load and save.
pub mod store;

pub use merge::{ANCHOR_KEY, ECONOMIC_DATA_KEY, economic_block, merge_economic_block};
pub use render::render;
pub use store::{read_document, write_document};
