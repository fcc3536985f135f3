//! Text renderings of an edit script
//!
//! - `plus_minus`: One line per entry, prefixed with `+`, `-` or a space
//! - `merge`: Git style conflict markers around every changed block
//!
//! Both walk a finished collector and index back into the compared lines, so
//! the collector must come from diffing exactly those lines.

pub mod merge;
pub mod plus_minus;

pub use merge::{merge, merge_with};
pub use plus_minus::{plus_minus, plus_minus_with};

#[cfg(test)]
pub(crate) mod fixtures {
    pub fn document_a() -> Vec<&'static str> {
        vec![
            "This part of the",
            "document has stayed the",
            "same from version to",
            "version.  It shouldn't",
            "be shown if it doesn't",
            "change.  Otherwise, that",
            "would not be helping to",
            "compress the size of the",
            "changes.",
            "",
            "This paragraph contains",
            "text that is outdated.",
            "It will be deleted in the",
            "near future.",
            "",
            "It is important to spell",
            "check this dokument. On",
            "the other hand, a",
            "misspelled word isn't",
            "the end of the world.",
            "Nothing in the rest of",
            "this paragraph needs to",
            "be changed. Things can",
            "be added after it.",
        ]
    }

    pub fn document_b() -> Vec<&'static str> {
        vec![
            "This is an important",
            "notice! It should",
            "therefore be located at",
            "the beginning of this",
            "document!",
            "",
            "This part of the",
            "document has stayed the",
            "same from version to",
            "version.  It shouldn't",
            "be shown if it doesn't",
            "change.  Otherwise, that",
            "would not be helping to",
            "compress anything.",
            "",
            "It is important to spell",
            "check this document. On",
            "the other hand, a",
            "misspelled word isn't",
            "the end of the world.",
            "Nothing in the rest of",
            "this paragraph needs to",
            "be changed. Things can",
            "be added after it.",
            "",
            "This paragraph contains",
            "important new additions",
            "to this document.",
        ]
    }

    pub fn shopping_before() -> Vec<&'static str> {
        vec!["Shopping List:", "Eggs", "Bacon", "Apples", "Oranges", "Milk"]
    }

    pub fn shopping_after() -> Vec<&'static str> {
        vec![
            "Shopping List:",
            "Yogurt",
            "Apples",
            "Oranges",
            "Bananas",
            "Milk",
            "Tea",
        ]
    }
}
