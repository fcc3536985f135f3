use crate::artifacts::comparable::Comparable;
use derive_new::new;

/// Compares two slices with the element type's own equality.
///
/// Covers lines (`&[String]`, `&[&str]`), integers, runes (`&[char]`) and
/// rune slices (`&[Vec<char>]`) alike.
#[derive(Debug, new)]
pub struct SliceComparable<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

impl<'a, T> SliceComparable<'a, T> {
    pub fn a_value(&self, a_index: usize) -> &'a T {
        &self.a[a_index]
    }

    pub fn b_value(&self, b_index: usize) -> &'a T {
        &self.b[b_index]
    }
}

impl<T: PartialEq> Comparable for SliceComparable<'_, T> {
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

/// Compares two slices of arbitrary values with a caller supplied equality.
#[derive(new)]
pub struct CustomComparable<'a, T, F> {
    a: &'a [T],
    b: &'a [T],
    eq: F,
}

impl<'a, T, F> CustomComparable<'a, T, F> {
    pub fn a_value(&self, a_index: usize) -> &'a T {
        &self.a[a_index]
    }

    pub fn b_value(&self, b_index: usize) -> &'a T {
        &self.b[b_index]
    }
}

impl<T, F> Comparable for CustomComparable<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn a_length(&self) -> usize {
        self.a.len()
    }

    fn b_length(&self) -> usize {
        self.b.len()
    }

    fn equals(&self, a_index: usize, b_index: usize) -> bool {
        (self.eq)(&self.a[a_index], &self.b[b_index])
    }
}
