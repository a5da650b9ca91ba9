//! Foldable type class - folding a structure to a summary value.
//!
//! A `Foldable` provides a way to traverse a structure and accumulate its
//! elements into a single result. For `Maybe` the structure has zero or one
//! element, so a fold either applies the folding function once or returns
//! the accumulator untouched.
//!
//! # Examples
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! let present = Maybe::just(10);
//! assert_eq!(present.fold_left(5, |accumulator, element| accumulator + element), 15);
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::maybe::Maybe;

/// A type class for structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
/// `fold_map`, `is_empty`, `length`, `to_list`, `find`, `exists`,
/// `for_all`.
///
/// # Examples
///
/// ```rust
/// use maybers::prelude::*;
///
/// let value = Maybe::just(3);
/// assert_eq!(value.fold_left(0, |accumulator, element| accumulator + element), 3);
/// assert_eq!(value.length(), 1);
/// assert_eq!(value.to_list(), vec![3]);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let value = Maybe::just(5);
    /// assert_eq!(value.fold_left(10, |accumulator, element| accumulator + element), 15);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// For a structure of at most one element this differs from
    /// `fold_left` only in the argument order of the folding function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let value = Maybe::just(5);
    /// assert_eq!(value.fold_right(10, |element, accumulator| element + accumulator), 15);
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines all results.
    ///
    /// For an empty structure this returns the monoid's identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let value = Maybe::just(5);
    /// let rendered: String = value.fold_map(|n| n.to_string());
    /// assert_eq!(rendered, "5");
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// let rendered: String = absent.fold_map(|n| n.to_string());
    /// assert_eq!(rendered, "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert!(!Maybe::just(5).is_empty());
    /// assert!(Maybe::<i32>::nothing().is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(5).length(), 1);
    /// assert_eq!(Maybe::<i32>::nothing().length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(42).to_list(), vec![42]);
    /// assert_eq!(Maybe::<i32>::nothing().to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(4).find(|element| *element > 3), Maybe::just(4));
    /// assert_eq!(Maybe::just(2).find(|element| *element > 3), Maybe::nothing());
    /// ```
    fn find<P>(self, mut predicate: P) -> Maybe<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Maybe::nothing(), |accumulator, element| {
            if accumulator.is_just() {
                accumulator
            } else if predicate(&element) {
                Maybe::just(element)
            } else {
                Maybe::nothing()
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert!(Maybe::just(5).exists(|element| *element > 3));
    /// assert!(!Maybe::<i32>::nothing().exists(|element| *element > 3));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_just()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` for an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert!(Maybe::just(4).for_all(|element| *element % 2 == 0));
    /// assert!(Maybe::<i32>::nothing().for_all(|element| *element > 100));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.reduce(|accumulator, element| function(accumulator, element), init)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.reduce(|accumulator, element| function(element, accumulator), init)
    }
}
