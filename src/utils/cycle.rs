//! # Enum Cycling
//!
//! Stepping through the variants of a field-less enum, and turning variant
//! names into labels.

use std::fmt::Debug;

/// An enum whose variants can be stepped through in declaration order.
///
/// # Examples
///
/// ```
/// use iteria::Cycle;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Weapon {
///     Sword,
///     Bow,
///     Staff,
/// }
///
/// impl Cycle for Weapon {
///     const ALL: &'static [Self] = &[Weapon::Sword, Weapon::Bow, Weapon::Staff];
/// }
///
/// assert_eq!(Weapon::Staff.next(), Weapon::Sword);
/// assert_eq!(Weapon::Sword.prev(), Weapon::Staff);
/// ```
pub trait Cycle: Copy + PartialEq + 'static {
    /// Every variant, in order.
    const ALL: &'static [Self];

    /// Position of `self` in [`Cycle::ALL`].
    ///
    /// # Panics
    ///
    /// Panics if `ALL` is missing the variant.
    fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|variant| *variant == self)
            .unwrap_or_else(|| panic!("variant missing from Cycle::ALL"))
    }

    /// The following variant, wrapping from the last to the first.
    fn next(self) -> Self {
        let current = self.ordinal();
        let next = if current < Self::ALL.len() - 1 {
            current + 1
        } else {
            0
        };
        Self::ALL[next]
    }

    /// The preceding variant, wrapping from the first to the last.
    fn prev(self) -> Self {
        let current = self.ordinal();
        let prev = if current > 0 {
            current - 1
        } else {
            Self::ALL.len() - 1
        };
        Self::ALL[prev]
    }
}

/// Splits the `Debug` name of a value at its capitals.
///
/// Meant for unit enum variants: `MoveLeft` becomes `"Move Left"`.
pub fn display_name<T: Debug>(value: &T) -> String {
    split_words(&format!("{value:?}"))
}

/// Inserts a space before every uppercase letter except the first character.
pub fn split_words(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if index > 0 && ch.is_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}
