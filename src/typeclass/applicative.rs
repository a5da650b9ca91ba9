//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to:
//!
//! - Lift pure values into the applicative context (`pure`)
//! - Combine multiple applicative values using a function (`map2`, `map3`)
//! - Apply a wrapped function to a wrapped argument (`apply`)
//!
//! This is what lets two independently-computed `Maybe` values combine
//! without explicit absence checks: if either side is `Nothing`, the result
//! is `Nothing`.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! // Lifting a pure value into the Maybe context
//! let x: Maybe<i32> = Maybe::<()>::pure(42);
//! assert_eq!(x, Maybe::just(42));
//!
//! // Combining two Maybe values
//! let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//!
//! // Creating a tuple of values
//! let pair = Maybe::just(1).product(Maybe::just("hello"));
//! assert_eq!(pair, Maybe::just((1, "hello")));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for types that support lifting values and combining
/// contexts.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// pure(|x| x).apply(v) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(f).apply(pure(x)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// ```text
/// u.apply(pure(y)) == pure(|f| f(y)).apply(u)
/// ```
///
/// # Examples
///
/// ```rust
/// use maybers::prelude::*;
///
/// let a = Maybe::just(3);
/// let b = Maybe::just(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Maybe::just(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let x: Maybe<i32> = Maybe::<()>::pure(42);
    /// assert_eq!(x, Maybe::just(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either computation is absent, the result is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
    /// assert_eq!(sum, Maybe::just(3));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// let sum = Maybe::just(1).map2(absent, |x, y| x + y);
    /// assert_eq!(sum, Maybe::nothing());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let sum = Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Maybe::just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Available when `Self` wraps a function type; applies the contained
    /// function to the value in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::just(5)), Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// let pair = Maybe::just(1).product(Maybe::just("hello"));
    /// assert_eq!(pair, Maybe::just((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(1).product_left(Maybe::just(2)), Maybe::just(1));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(Maybe::just(1).product_left(absent), Maybe::nothing());
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::prelude::*;
    ///
    /// assert_eq!(Maybe::just(1).product_right(Maybe::just(2)), Maybe::just(2));
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::of(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.chain(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.chain(|a| second.chain(|b| third.map(|c| function(a, b, c))))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        // Derived from chain via Maybe::ap
        self.ap(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pure_lifts_a_value() {
        let x: Maybe<i32> = Maybe::<()>::pure(42);
        assert_eq!(x, Maybe::just(42));
    }

    #[rstest]
    fn map2_combines_two_present_values() {
        let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
        assert_eq!(sum, Maybe::just(3));
    }

    #[rstest]
    fn map2_is_nothing_when_either_side_is_absent() {
        let absent: Maybe<i32> = Maybe::nothing();
        assert_eq!(Maybe::just(1).map2(absent, |x, y| x + y), Maybe::nothing());
        assert_eq!(absent.map2(Maybe::just(1), |x, y| x + y), Maybe::nothing());
    }

    #[rstest]
    fn map3_combines_three_present_values() {
        let sum = Maybe::just(1).map3(Maybe::just(2), Maybe::just(3), |x, y, z| x + y + z);
        assert_eq!(sum, Maybe::just(6));
    }

    #[rstest]
    fn map3_is_nothing_when_any_side_is_absent() {
        let absent: Maybe<i32> = Maybe::nothing();
        let sum = Maybe::just(1).map3(absent, Maybe::just(3), |x, y, z| x + y + z);
        assert_eq!(sum, Maybe::nothing());
    }

    #[rstest]
    fn apply_applies_a_wrapped_function() {
        let function: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
        assert_eq!(function.apply(Maybe::just(4)), Maybe::just(5));
    }

    #[rstest]
    fn apply_absent_function_is_nothing() {
        let function: Maybe<fn(i32) -> i32> = Maybe::nothing();
        assert_eq!(function.apply(Maybe::just(4)), Maybe::nothing());
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(
            Maybe::just(1).product(Maybe::just("hello")),
            Maybe::just((1, "hello"))
        );
    }

    #[rstest]
    fn product_left_and_right_select_sides() {
        assert_eq!(Maybe::just(1).product_left(Maybe::just(2)), Maybe::just(1));
        assert_eq!(Maybe::just(1).product_right(Maybe::just(2)), Maybe::just(2));
    }

    // Identity Law: pure(|x| x).apply(v) == v

    #[rstest]
    #[case(Maybe::just(42))]
    #[case(Maybe::nothing())]
    fn applicative_identity_law(#[case] v: Maybe<i32>) {
        let identity: Maybe<fn(i32) -> i32> = Maybe::<()>::pure(|x| x);
        assert_eq!(identity.apply(v), v);
    }

    // Homomorphism Law: pure(f).apply(pure(x)) == pure(f(x))

    #[rstest]
    fn applicative_homomorphism_law() {
        let f = |n: i32| n * 2;
        let x = 21;

        let left: Maybe<i32> = Maybe::<()>::pure(f).apply(Maybe::<()>::pure(x));
        let right: Maybe<i32> = Maybe::<()>::pure(f(x));

        assert_eq!(left, right);
        assert_eq!(left, Maybe::just(42));
    }

    // Interchange Law: u.apply(pure(y)) == pure(|f| f(y)).apply(u)

    #[rstest]
    fn applicative_interchange_law() {
        let u: Maybe<fn(i32) -> i32> = Maybe::just(|n| n + 1);
        let y = 4;

        let left = u.apply(Maybe::<()>::pure(y));
        let right = Maybe::<()>::pure(move |f: fn(i32) -> i32| f(y)).apply(u);

        assert_eq!(left, right);
        assert_eq!(left, Maybe::just(5));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_identity_law(value in any::<Option<i32>>()) {
            let v = Maybe::from_nullable(value);
            let identity: Maybe<fn(i32) -> i32> = Maybe::<()>::pure(|x| x);
            prop_assert_eq!(identity.apply(v), v);
        }

        #[test]
        fn prop_homomorphism_law(x in any::<i32>()) {
            let f = |n: i32| n.wrapping_mul(2);

            let left: Maybe<i32> = Maybe::<()>::pure(f).apply(Maybe::<()>::pure(x));
            let right: Maybe<i32> = Maybe::<()>::pure(f(x));

            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_map2_agrees_with_apply(
            left in any::<Option<i32>>(),
            right in any::<Option<i32>>()
        ) {
            let a = Maybe::from_nullable(left);
            let b = Maybe::from_nullable(right);

            let via_map2 = a.map2(b, |x, y| x.wrapping_add(y));
            let via_apply = a.map(|x| move |y: i32| x.wrapping_add(y)).apply(b);

            prop_assert_eq!(via_map2, via_apply);
        }
    }
}
