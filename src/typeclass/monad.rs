//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with the ability to sequence computations
//! where each step can depend on the result of the previous step, and where
//! each step can short-circuit to absence.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from_nullable(s.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! let result = Maybe::just("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::just(n * 2));
//! assert_eq!(result, Maybe::just(84));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use maybers::prelude::*;
///
/// let x = Maybe::just(5);
/// let y = x.flat_map(|n| Maybe::just(n * 2));
/// assert_eq!(y, Maybe::just(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    ///
    /// The result is whatever monad the function produces, with no
    /// re-wrapping. In Haskell this is `>>=` (bind); on `Option` and
    /// `Result` in std it is `and_then`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let x = Maybe::just(5);
    /// let y = x.flat_map(|n| if n > 10 { Maybe::just(n) } else { Maybe::nothing() });
    /// assert_eq!(y, Maybe::nothing());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let y = Maybe::just(5).and_then(|n| Maybe::just(n * 2));
    /// assert_eq!(y, Maybe::just(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent, the absence propagates and `next` is not
    /// returned. In Haskell this is the `>>` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(5).then(Maybe::just("hello")), Maybe::just("hello"));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.then(Maybe::just("hello")), Maybe::nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_left_identity(value in any::<i32>()) {
            let function = |n: i32| {
                if n % 2 == 0 {
                    Maybe::just(n.wrapping_mul(2))
                } else {
                    Maybe::nothing()
                }
            };

            let left: Maybe<i32> = Maybe::<()>::pure(value).flat_map(function);
            let right: Maybe<i32> = function(value);

            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_right_identity(value in any::<Option<i32>>()) {
            let monad = Maybe::from_nullable(value);
            let result = monad.flat_map(|x| Maybe::<()>::pure(x));
            prop_assert_eq!(result, monad);
        }

        #[test]
        fn prop_associativity(value in any::<Option<i32>>()) {
            let monad = Maybe::from_nullable(value);
            let function1 = |n: i32| Maybe::just(n.wrapping_add(1));
            let function2 = |n: i32| {
                if n % 3 == 0 {
                    Maybe::nothing()
                } else {
                    Maybe::just(n.wrapping_mul(2))
                }
            };

            let left = monad.flat_map(function1).flat_map(function2);
            let right = monad.flat_map(|x| function1(x).flat_map(function2));

            prop_assert_eq!(left, right);
        }
    }
}
