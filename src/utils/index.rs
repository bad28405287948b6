//! # Index Wrapping
//!
//! Keeping a cursor inside a fixed-length container, either by wrapping
//! around or by clamping at the ends.
//!
//! Every function here takes the container length and panics when it is zero.

use rand::Rng;

/// What to do when an index steps past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Continue from the opposite end.
    #[default]
    Wrap,
    /// Stop at the first or last element.
    Clamp,
}

/// Maps any signed index into `0..len`, wrapping negatives from the end.
///
/// # Examples
///
/// ```
/// use iteria::wrap_index;
///
/// assert_eq!(wrap_index(5, 4), 1);
/// assert_eq!(wrap_index(-1, 4), 3);
/// ```
pub fn wrap_index(index: isize, len: usize) -> usize {
    assert!(len > 0, "cannot wrap an index into an empty container");
    let len = len as isize;
    (((index % len) + len) % len) as usize
}

/// Moves `index` forward by one.
pub fn increment_index(index: &mut usize, len: usize, mode: WrapMode) {
    offset_index(index, 1, len, mode);
}

/// Moves `index` back by one.
pub fn decrement_index(index: &mut usize, len: usize, mode: WrapMode) {
    offset_index(index, -1, len, mode);
}

/// Moves `index` by `offset` steps in either direction.
pub fn offset_index(index: &mut usize, offset: isize, len: usize, mode: WrapMode) {
    assert!(len > 0, "cannot move an index within an empty container");
    let target = *index as isize + offset;
    *index = match mode {
        WrapMode::Wrap => wrap_index(target, len),
        WrapMode::Clamp => target.clamp(0, len as isize - 1) as usize,
    };
}

/// Index helpers on slices (and so on arrays and `Vec`s).
pub trait IndexWrap<T> {
    /// [`wrap_index`] using the slice length.
    fn wrap_index(&self, index: isize) -> usize;

    /// Element at a wrapped index, or `None` for an empty slice.
    fn get_wrapped(&self, index: isize) -> Option<&T>;

    /// A uniformly chosen element, or `None` for an empty slice.
    fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T>;
}

impl<T> IndexWrap<T> for [T] {
    fn wrap_index(&self, index: isize) -> usize {
        wrap_index(index, self.len())
    }

    fn get_wrapped(&self, index: isize) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(wrap_index(index, self.len()))
    }

    fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.gen_range(0..self.len()))
    }
}
