//! Scanner module - recursive source file discovery.
//!
//! Walks the source root depth-first with `walkdir`, sorted by file name so
//! the visit order (and therefore last-write-wins on name collisions) is the
//! same on every platform.

pub mod language_detect;
pub mod walker;

pub use language_detect::Language;
pub use walker::SourceWalker;
