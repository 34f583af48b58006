//! Refguide Topics: the catalog of reference sections.
//!
//! Each topic computes a handful of example values with built-in
//! operators or the standard library and lays them out as a
//! [`Section`](refguide_core::Section). Topics are grouped into three
//! guides which always run in the same order.
//!
//! # Guide Flow
//!
//! ```text
//! Guide → [Topic, Topic, ...] → GuideRunner → SectionFormatter → stdout
//!                 ↓
//!              Section
//! ```

pub mod datatypes;
pub mod structures;
pub mod operators;
pub mod collections;
pub mod math;
pub mod worked;

pub use collections::lookup;
pub use datatypes::DynamicValue;
pub use math::truncate_to_int;
pub use operators::{bitwise, BitwiseResults};
pub use structures::{Address, Person};
pub use worked::{char_frequencies, even_numbers, mean};

use refguide_core::{EmitContext, GuideRunner, Topic, TopicError};
use std::fmt;
use std::slice::SliceIndex;

/// Printed wherever a `HashMap` is shown in iteration order
pub const UNORDERED_NOTE: &str =
    "Note: HashMap iteration order is unspecified and may differ between runs";

/// The three reference guides, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guide {
    DataTypes,
    DataStructures,
    Operations,
}

impl Guide {
    pub const ALL: [Guide; 3] = [Guide::DataTypes, Guide::DataStructures, Guide::Operations];

    pub fn title(&self) -> &'static str {
        match self {
            Guide::DataTypes => "RUST DATA TYPES REFERENCE GUIDE",
            Guide::DataStructures => "RUST DATA STRUCTURES REFERENCE GUIDE",
            Guide::Operations => "RUST OPERATIONS REFERENCE GUIDE",
        }
    }

    /// Topics of this guide, in print order
    pub fn topics(&self) -> Vec<Box<dyn Topic>> {
        match self {
            Guide::DataTypes => vec![
                Box::new(datatypes::SignedIntegers),
                Box::new(datatypes::UnsignedIntegers),
                Box::new(datatypes::FloatingPoint),
                Box::new(datatypes::Constants),
                Box::new(datatypes::Booleans),
                Box::new(datatypes::Text),
                Box::new(datatypes::ZeroValues),
                Box::new(datatypes::AbsenceAndDynamic),
                Box::new(datatypes::TypeAliases),
                Box::new(datatypes::DeclarationStyles),
            ],
            Guide::DataStructures => vec![
                Box::new(structures::FixedArrays),
                Box::new(structures::Vectors),
                Box::new(structures::Maps),
                Box::new(structures::Records),
                Box::new(structures::References),
            ],
            Guide::Operations => vec![
                Box::new(operators::Arithmetic),
                Box::new(operators::Relational),
                Box::new(operators::Logical),
                Box::new(operators::Bitwise),
                Box::new(operators::Strings),
                Box::new(collections::ArrayOperations),
                Box::new(collections::VectorOperations),
                Box::new(collections::MapOperations),
                Box::new(math::MathFunctions),
                Box::new(math::Conversions),
                Box::new(worked::WorkedExamples),
            ],
        }
    }

    pub fn runner(&self) -> GuideRunner {
        GuideRunner::new(self.topics())
    }

    pub fn context(&self) -> EmitContext {
        EmitContext::new(self.title())
    }
}

/// Indexed read that reports an out-of-range index as a topic error
pub(crate) fn element<T>(items: &[T], index: usize) -> Result<&T, TopicError> {
    items.get(index).ok_or_else(|| {
        TopicError::example(format!(
            "index {} out of range for length {}",
            index,
            items.len()
        ))
    })
}

/// Sub-range read that reports bad bounds as a topic error
pub(crate) fn span<T, R>(items: &[T], range: R) -> Result<&[T], TopicError>
where
    R: SliceIndex<[T], Output = [T]> + fmt::Debug,
{
    let label = format!("{:?}", range);
    items.get(range).ok_or_else(|| {
        TopicError::example(format!(
            "range {} out of bounds for length {}",
            label,
            items.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_ids_unique_and_prefixed() {
        let prefixes = ["datatypes.", "structures.", "operations."];
        let mut seen = std::collections::HashSet::new();
        for (guide, prefix) in Guide::ALL.iter().zip(prefixes) {
            for topic in guide.topics() {
                assert!(topic.id().starts_with(prefix), "{}", topic.id());
                assert!(seen.insert(topic.id()), "duplicate {}", topic.id());
            }
        }
    }

    #[test]
    fn test_every_topic_builds() {
        for guide in Guide::ALL {
            let ctx = guide.context();
            for topic in guide.topics() {
                let section = topic.build(&ctx).unwrap();
                assert_eq!(section.id, topic.id());
                assert_eq!(section.title, topic.title());
                assert!(section.row_count() > 0, "{} is empty", topic.id());
            }
        }
    }

    #[test]
    fn test_only_map_topics_are_nondeterministic() {
        let unordered: Vec<&str> = Guide::ALL
            .iter()
            .flat_map(|g| g.topics())
            .filter(|t| !t.deterministic())
            .map(|t| t.id())
            .collect();
        assert_eq!(unordered, vec!["structures.maps", "operations.map_operations"]);
    }

    #[test]
    fn test_element_and_span_bounds() {
        let items = [1, 2, 3];
        assert_eq!(element(&items, 2), Ok(&3));
        assert!(element(&items, 3).is_err());
        assert_eq!(span(&items, 1..), Ok(&items[1..]));
        let err = span(&items, 2..5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "TOPIC/EXAMPLE: range 2..5 out of bounds for length 3"
        );
    }
}
