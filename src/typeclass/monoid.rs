//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element `empty` such that
//! combining with it on either side leaves a value unchanged. `Maybe` over a
//! semigroup is the canonical example: `Nothing` is the identity of
//! [`Maybe::concat`](crate::Maybe::concat).
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! // Nothing is the identity of the Maybe monoid
//! let value = Maybe::just(String::from("hello"));
//! assert_eq!(Maybe::empty().combine(value.clone()), value);
//! assert_eq!(value.clone().combine(Maybe::empty()), value);
//! ```

use super::semigroup::Semigroup;
use crate::maybe::Maybe;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use maybers::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert_eq!(Maybe::<String>::empty(), Maybe::nothing());
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity
    /// element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value (the
    /// identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let strings = vec![
    ///     String::from("a"),
    ///     String::from("b"),
    ///     String::from("c"),
    /// ];
    /// assert_eq!(String::combine_all(strings), "abc");
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::combine_all(empty), String::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert!(Maybe::<String>::nothing().is_empty_value());
    /// assert!(!Maybe::just(String::from("hello")).is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// Maybe forms a monoid when its inner type is a semigroup.
/// The identity element is `Nothing`.
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Nothing
    }
}

/// The unit type forms a trivial monoid with `()` as the identity.
impl Monoid for () {
    fn empty() -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_empty_is_the_empty_string() {
        assert_eq!(String::empty(), "");
    }

    #[rstest]
    fn maybe_empty_is_nothing() {
        assert_eq!(Maybe::<String>::empty(), Maybe::nothing());
    }

    #[rstest]
    fn combine_all_folds_from_the_identity() {
        let strings = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::combine_all(strings), "abc");
    }

    #[rstest]
    fn combine_all_of_an_empty_iterator_is_the_identity() {
        let empty: Vec<String> = vec![];
        assert_eq!(String::combine_all(empty), String::empty());
    }

    #[rstest]
    fn combine_all_over_maybe_values_skips_nothing() {
        let values = vec![
            Maybe::just(String::from("a")),
            Maybe::nothing(),
            Maybe::just(String::from("b")),
        ];
        assert_eq!(
            Maybe::combine_all(values),
            Maybe::just(String::from("ab"))
        );
    }

    #[rstest]
    fn is_empty_value_recognizes_the_identity() {
        assert!(Maybe::<String>::nothing().is_empty_value());
        assert!(!Maybe::just(String::from("x")).is_empty_value());
        assert!(String::empty().is_empty_value());
    }

    // Identity Laws: empty.combine(a) == a and a.combine(empty) == a

    #[rstest]
    #[case(Maybe::just(String::from("hello")))]
    #[case(Maybe::nothing())]
    fn maybe_identity_laws(#[case] value: Maybe<String>) {
        assert_eq!(Maybe::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Maybe::empty()), value);
    }

    #[rstest]
    fn string_identity_laws() {
        let value = String::from("hello");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }
}
