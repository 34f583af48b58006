//! Refguide Core: Topic trait, Runner and Data Model
//!
//! Ordered, single-threaded emitter. Every topic builds one [`Section`],
//! the runner lays it out through a [`SectionFormatter`] and writes it to
//! the output stream in catalog order.

pub mod topic;
pub mod runner;
pub mod data_model;
pub mod error;
pub mod context;

pub use topic::{Topic, TopicError};
pub use runner::{GuideRunner, SectionFormatter};
pub use data_model::{Block, Lines, Row, Section, SectionProof, Table};
pub use context::EmitContext;
pub use error::GuideError;

/// Version of the guide engine
pub const REFGUIDE_VERSION: &str = "1.0.0";

/// Build a row of cells from any `ToString` values.
///
/// ```
/// let cells = refguide_core::cells!["i8", i8::MAX, std::mem::size_of::<i8>()];
/// assert_eq!(cells, vec!["i8", "127", "1"]);
/// ```
#[macro_export]
macro_rules! cells {
    ($($cell:expr),* $(,)?) => {
        vec![$($cell.to_string()),*]
    };
}
