//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists an associative function
//! `combine: (T, T) -> T`. The bound `A: Semigroup` is what makes
//! [`Maybe::concat`](crate::Maybe::concat) callable: the capability the
//! inner type must supply is an explicit trait bound, so misuse is a
//! compile-time error.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybers::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let vec1 = vec![1, 2];
//! let vec2 = vec![3, 4];
//! assert_eq!(vec1.combine(vec2), vec![1, 2, 3, 4]);
//! ```

use crate::maybe::Maybe;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use maybers::typeclass::Semigroup;
///
/// let a = String::from("foo");
/// let b = String::from("bar");
/// assert_eq!(a.combine(b), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::typeclass::Semigroup;
    ///
    /// let result = String::from("Hello, ").combine(String::from("World!"));
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    /// Types can override this for more efficient implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// // Original values are still available
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `Nothing` if the iterator is empty. For a version that
    /// returns the identity element instead, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
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
    /// assert_eq!(String::reduce_all(strings), Maybe::just(String::from("abc")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), Maybe::nothing());
    /// ```
    fn reduce_all<I>(iterator: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        Maybe::from_nullable(
            iterator
                .into_iter()
                .reduce(|accumulator, element| accumulator.combine(element)),
        )
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Maybe Implementation
// =============================================================================

/// Maybe forms a semigroup when its inner type is a semigroup.
///
/// The combination is [`Maybe::concat`]:
/// - `Just(a).combine(Just(b))` = `Just(a.combine(b))`
/// - `Just(a).combine(Nothing)` = `Just(a)`
/// - `Nothing.combine(Just(b))` = `Just(b)`
/// - `Nothing.combine(Nothing)` = `Nothing`
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type forms a trivial semigroup.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Tuple Implementations
// =============================================================================

/// Tuples form a semigroup when all their elements are semigroups.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_maybe_string() -> impl Strategy<Value = Maybe<String>> {
        prop_oneof![
            1 => proptest::strategy::Just(Maybe::nothing()),
            3 => "[a-z]{0,8}".prop_map(|s| Maybe::just(s)),
        ]
    }

    proptest! {
        #[test]
        fn prop_string_associativity(a in "[a-z]{0,8}", b in "[a-z]{0,8}", c in "[a-z]{0,8}") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_maybe_associativity(
            a in any_maybe_string(),
            b in any_maybe_string(),
            c in any_maybe_string()
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
