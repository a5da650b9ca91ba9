//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value inside a container while
//! preserving the container's structure: `Just` stays `Just`, `Nothing`
//! stays `Nothing`.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! `Maybe`'s `fmap` is derived from its monadic bind, so both laws follow
//! from the monad laws rather than needing a separate proof.
//!
//! # Examples
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! let present: Maybe<i32> = Maybe::just(5);
//! let transformed: Maybe<String> = present.fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::just("5".to_string()));
//!
//! // Nothing is preserved
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::nothing());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their
/// contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use maybers::prelude::*;
///
/// let x: Maybe<i32> = Maybe::just(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::just("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let x: Maybe<i32> = Maybe::just(5);
    /// assert_eq!(x.fmap(|n| n * 2), Maybe::just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor should not be consumed, or when the inner
    /// type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let x: Maybe<String> = Maybe::just("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::just(5));
    /// // x is still available here
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(5).replace("replaced"), Maybe::just("replaced"));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.replace("replaced"), Maybe::nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful when only the structure matters, not the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(5).void(), Maybe::just(()));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.void(), Maybe::nothing());
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        // Derived from chain via Maybe::map
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_transforms_just() {
        let x = Maybe::just(5);
        assert_eq!(x.fmap(|n| n * 2), Maybe::just(10));
    }

    #[rstest]
    fn fmap_preserves_nothing() {
        let x: Maybe<i32> = Maybe::nothing();
        assert_eq!(x.fmap(|n| n * 2), Maybe::nothing());
    }

    #[rstest]
    fn fmap_ref_does_not_consume() {
        let x = Maybe::just(String::from("hello"));
        assert_eq!(x.fmap_ref(|s| s.len()), Maybe::just(5));
        assert_eq!(x, Maybe::just(String::from("hello")));
    }

    #[rstest]
    fn replace_swaps_the_value() {
        assert_eq!(Maybe::just(5).replace("x"), Maybe::just("x"));
        assert_eq!(Maybe::<i32>::nothing().replace("x"), Maybe::nothing());
    }

    #[rstest]
    fn void_discards_the_value() {
        assert_eq!(Maybe::just(5).void(), Maybe::just(()));
        assert_eq!(Maybe::<i32>::nothing().void(), Maybe::nothing());
    }

    // Identity Law: fa.fmap(|x| x) == fa

    #[rstest]
    #[case(Maybe::just(42))]
    #[case(Maybe::nothing())]
    fn functor_identity_law(#[case] fa: Maybe<i32>) {
        assert_eq!(fa.fmap(|x| x), fa);
    }

    // Composition Law: fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))

    #[rstest]
    #[case(Maybe::just(5))]
    #[case(Maybe::nothing())]
    fn functor_composition_law(#[case] fa: Maybe<i32>) {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 2;

        let left = fa.fmap(f).fmap(g);
        let right = fa.fmap(|x| g(f(x)));

        assert_eq!(left, right);
    }
}
