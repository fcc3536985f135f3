use crate::artifacts::comparable::Comparable;
use derive_new::new;

/// Compares the characters (Unicode scalar values) of two strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharComparable {
    a: Vec<char>,
    b: Vec<char>,
}

impl CharComparable {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.chars().collect(),
            b: b.chars().collect(),
        }
    }

    pub fn a_value(&self, a_index: usize) -> char {
        self.a[a_index]
    }

    pub fn b_value(&self, b_index: usize) -> char {
        self.b[b_index]
    }
}

impl Comparable for CharComparable {
    fn a_length(&self) -> usize {
        self.a.len()
    }

    fn b_length(&self) -> usize {
        self.b.len()
    }

    fn equals(&self, a_index: usize, b_index: usize) -> bool {
        self.a[a_index] == self.b[b_index]
    }
}

/// Compares two byte strings one byte at a time.
///
/// Multi-byte UTF-8 sequences are not treated as a unit here, use
/// `CharComparable` when that matters.
#[derive(Debug, Clone, Copy, new)]
pub struct ByteComparable<'a> {
    a: &'a [u8],
    b: &'a [u8],
}

impl ByteComparable<'_> {
    pub fn a_value(&self, a_index: usize) -> u8 {
        self.a[a_index]
    }

    pub fn b_value(&self, b_index: usize) -> u8 {
        self.b[b_index]
    }
}

impl Comparable for ByteComparable<'_> {
    fn a_length(&self) -> usize {
        self.a.len()
    }

    fn b_length(&self) -> usize {
        self.b.len()
    }

    fn equals(&self, a_index: usize, b_index: usize) -> bool {
        self.a[a_index] == self.b[b_index]
    }
}
