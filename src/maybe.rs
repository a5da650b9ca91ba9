//! The `Maybe` type - a value that may be absent.
//!
//! This module provides [`Maybe`], a closed sum type with exactly two
//! variants: `Just(value)` holding one present value, and `Nothing` holding
//! no value at all. It is the crate's one data type; everything else in the
//! crate is interface for it.
//!
//! Unlike a null sentinel, `Nothing` is a first-class value: it participates
//! in every operation, and the compiler guarantees that both variants are
//! handled everywhere. Unlike `Result`, absence carries no failure reason.
//!
//! The monadic bind ([`chain`](Maybe::chain)) is the primitive operation;
//! [`map`](Maybe::map) and [`ap`](Maybe::ap) are derived from it, so the
//! functor and applicative laws follow directly from the monad laws.
//!
//! # Examples
//!
//! ```rust
//! use maybers::Maybe;
//!
//! fn lookup_port(name: &str) -> Maybe<u16> {
//!     match name {
//!         "http" => Maybe::just(80),
//!         "https" => Maybe::just(443),
//!         _ => Maybe::nothing(),
//!     }
//! }
//!
//! let port = lookup_port("https").map(|p| p + 8000).fork(0);
//! assert_eq!(port, 8443);
//!
//! let port = lookup_port("gopher").map(|p| p + 8000).fork(0);
//! assert_eq!(port, 0);
//! ```
//!
//! ## Converting from nullable values
//!
//! [`Maybe::from_nullable`] is the single sanctioned boundary between
//! `Option` (the language's absence sentinel) and the `Maybe` world:
//!
//! ```rust
//! use maybers::Maybe;
//!
//! let present = Maybe::from_nullable(Some(5));
//! assert_eq!(present, Maybe::just(5));
//!
//! let absent: Maybe<i32> = Maybe::from_nullable(None);
//! assert_eq!(absent, Maybe::nothing());
//! ```

use crate::typeclass::Semigroup;

/// An optional value: either `Just(value)` or `Nothing`.
///
/// `Maybe<A>` is immutable after construction, holds no external resources,
/// and is `Send`/`Sync` whenever `A` is. A `Just` structurally cannot hold
/// "nothing": it owns an `A`, not an `Option<A>`, so the invariant that the
/// present variant always carries a real value is enforced by the type
/// system rather than by a runtime check.
///
/// # Operations
///
/// | operation | `Just(v)` | `Nothing` |
/// |---|---|---|
/// | [`chain(f)`](Self::chain) | `f(v)` | `Nothing`, `f` not invoked |
/// | [`map(f)`](Self::map) | `Just(f(v))` | `Nothing`, `f` not invoked |
/// | [`ap(that)`](Self::ap) | `that.map(v)` | `Nothing` |
/// | [`concat(that)`](Self::concat) | see [`concat`](Self::concat) | `that` |
/// | [`equals(&that)`](Self::equals) | `v == w` iff `that` is `Just(w)` | `that` is `Nothing` |
/// | [`fork(d)`](Self::fork) | `v` | `d` |
/// | [`reduce(f, x)`](Self::reduce) | `f(x, v)` | `x` |
///
/// # Examples
///
/// ```rust
/// use maybers::Maybe;
///
/// let doubled = Maybe::just(21).map(|n| n * 2);
/// assert_eq!(doubled.fork(0), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// The absent variant. Carries nothing.
    Nothing,
    /// The present variant. Owns exactly one value.
    Just(A),
}

impl<A> Maybe<A> {
    /// Wraps a value unconditionally in the present variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let wrapped = Maybe::just(42);
    /// assert!(wrapped.is_just());
    /// ```
    #[inline]
    pub const fn just(value: A) -> Self {
        Self::Just(value)
    }

    /// Returns the absent variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert!(absent.is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Applicative constructor - an alias of [`just`](Self::just).
    ///
    /// The name follows functional-programming convention so that
    /// `ap`/`chain`-based derivations read uniformly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// assert_eq!(Maybe::of(5), Maybe::just(5));
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::just(value)
    }

    /// Converts a nullable value, mapping `None` to `Nothing`.
    ///
    /// This is the single sanctioned boundary between `Option` values and
    /// the `Maybe` world. Useful for lifting nullable-returning functions
    /// into safer `Maybe`-returning ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let parsed = Maybe::from_nullable("42".parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::just(42));
    ///
    /// let unparsed = Maybe::from_nullable("x".parse::<i32>().ok());
    /// assert_eq!(unparsed, Maybe::nothing());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        match value {
            Some(inner) => Self::Just(inner),
            None => Self::Nothing,
        }
    }

    /// Returns `true` if this is the present variant.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is the absent variant.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let text = Maybe::just(String::from("hello"));
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::just(5));
    /// // text is still available here
    /// assert_eq!(text, Maybe::just(String::from("hello")));
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Monadic bind - the primitive operation of `Maybe`.
    ///
    /// On `Just(v)` this returns `function(v)` directly, with no
    /// re-wrapping: the result is whatever `Maybe` the function produces.
    /// On `Nothing` the function is never invoked and `Nothing` is returned.
    ///
    /// # Laws
    ///
    /// ```text
    /// Maybe::of(a).chain(f)          == f(a)                          (left identity)
    /// m.chain(Maybe::of)             == m                             (right identity)
    /// m.chain(f).chain(g)            == m.chain(|x| f(x).chain(g))    (associativity)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// fn positive(n: i32) -> Maybe<i32> {
    ///     if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
    /// }
    ///
    /// assert_eq!(Maybe::just(5).chain(positive), Maybe::just(5));
    /// assert_eq!(Maybe::just(-5).chain(positive), Maybe::nothing());
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Functor map, derived from [`chain`](Self::chain).
    ///
    /// The outer structure is preserved: `Just` stays `Just`, `Nothing`
    /// stays `Nothing`, and the function is invoked exactly once when a
    /// value is present. Because `map` is defined as
    /// `chain(|a| Maybe::of(f(a)))`, the functor identity and composition
    /// laws follow from the monad laws.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).map(|n| n * 2), Maybe::just(10));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.map(|n| n * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.chain(|value| Maybe::of(function(value)))
    }

    /// Applicative application, derived from [`chain`](Self::chain).
    ///
    /// The receiver wraps a function; `that` wraps its argument. If either
    /// side is `Nothing`, the result is `Nothing`. This lets two independent
    /// `Maybe`-wrapped computations combine without explicit absence checks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let add_one = Maybe::just(|n: i32| n + 1);
    /// assert_eq!(add_one.ap(Maybe::just(4)), Maybe::just(5));
    ///
    /// let absent: Maybe<fn(i32) -> i32> = Maybe::nothing();
    /// assert_eq!(absent.ap(Maybe::just(4)), Maybe::nothing());
    /// ```
    #[inline]
    pub fn ap<B, C>(self, that: Maybe<B>) -> Maybe<C>
    where
        A: FnOnce(B) -> C,
    {
        self.chain(|function| that.map(function))
    }

    /// Forks out of the `Maybe` world, with a default for `Nothing`.
    ///
    /// On `Just(v)` the default is ignored entirely and `v` is returned.
    /// This is the sole supported exit back to a plain value; it never
    /// fails. For defaults that are expensive to build, see
    /// [`fork_else`](Self::fork_else).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).fork(0), 5);
    /// assert_eq!(Maybe::<i32>::nothing().fork(0), 0);
    /// ```
    #[inline]
    pub fn fork(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Forks with a lazily computed default.
    ///
    /// The closure is invoked only on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let absent: Maybe<String> = Maybe::nothing();
    /// assert_eq!(absent.fork_else(|| "fallback".to_string()), "fallback");
    /// ```
    #[inline]
    pub fn fork_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Left fold over zero or one element.
    ///
    /// On `Just(v)` returns `function(initial, v)`; on `Nothing` returns
    /// the accumulator unchanged. Equivalent to folding a sequence of
    /// length zero or one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// assert_eq!(Maybe::just(5).reduce(|acc, n| acc + n, 10), 15);
    /// assert_eq!(Maybe::<i32>::nothing().reduce(|acc, n| acc + n, 10), 10);
    /// ```
    #[inline]
    pub fn reduce<X, F>(self, function: F, initial: X) -> X
    where
        F: FnOnce(X, A) -> X,
    {
        match self {
            Self::Just(value) => function(initial, value),
            Self::Nothing => initial,
        }
    }
}

impl<A: Semigroup> Maybe<A> {
    /// Semigroup concatenation of two `Maybe` values.
    ///
    /// Inner types must match and must form a [`Semigroup`]; the bound makes
    /// misuse a compile-time error rather than a runtime crash.
    ///
    /// | `self` | `that` | result |
    /// |---|---|---|
    /// | `Nothing` | `Nothing` | `Nothing` |
    /// | `Nothing` | `Just(b)` | `Just(b)` |
    /// | `Just(a)` | `Nothing` | `Just(a)` |
    /// | `Just(a)` | `Just(b)` | `Just(a.combine(b))` |
    ///
    /// When either side is `Nothing` the other side is returned unchanged;
    /// the inner `combine` runs only when both values are present, so it is
    /// never handed a sentinel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// let greeting = Maybe::just(String::from("Hello, "));
    /// let name = Maybe::just(String::from("World!"));
    /// assert_eq!(greeting.concat(name), Maybe::just(String::from("Hello, World!")));
    ///
    /// let kept = Maybe::just(String::from("kept")).concat(Maybe::nothing());
    /// assert_eq!(kept, Maybe::just(String::from("kept")));
    /// ```
    #[inline]
    pub fn concat(self, that: Self) -> Self {
        match (self, that) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(left), Self::Nothing) => Self::Just(left),
            (Self::Nothing, that) => that,
        }
    }
}

impl<A: PartialEq> Maybe<A> {
    /// Setoid comparison of two `Maybe` values.
    ///
    /// Two values are equal when both are `Nothing`, or both are `Just` and
    /// the inner values compare equal. The `PartialEq` bound on the inner
    /// type makes comparing incomparable payloads a compile-time error.
    /// Agrees with the derived `==` operator.
    ///
    /// | `self` | `that` | result |
    /// |---|---|---|
    /// | `Nothing` | `Nothing` | `true` |
    /// | `Nothing` | `Just(_)` | `false` |
    /// | `Just(_)` | `Nothing` | `false` |
    /// | `Just(a)` | `Just(b)` | `a == b` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybers::Maybe;
    ///
    /// assert!(Maybe::just(5).equals(&Maybe::just(5)));
    /// assert!(Maybe::<i32>::nothing().equals(&Maybe::nothing()));
    /// assert!(!Maybe::just(5).equals(&Maybe::nothing()));
    /// ```
    #[inline]
    pub fn equals(&self, that: &Self) -> bool {
        match (self, that) {
            (Self::Just(left), Self::Just(right)) => left == right,
            (Self::Nothing, Self::Nothing) => true,
            _ => false,
        }
    }
}

/// `Nothing` is the default, mirroring `Option`.
impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Just(inner) => Some(inner),
            Maybe::Nothing => None,
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_maybe() -> impl Strategy<Value = Maybe<i32>> {
        prop_oneof![
            1 => proptest::strategy::Just(Maybe::nothing()),
            3 => any::<i32>().prop_map(Maybe::just),
        ]
    }

    proptest! {
        #[test]
        fn prop_from_nullable_agrees_with_the_option_shape(value in any::<Option<i32>>()) {
            let converted = Maybe::from_nullable(value);
            prop_assert_eq!(converted.is_just(), value.is_some());
            prop_assert_eq!(Option::from(converted), value);
        }

        #[test]
        fn prop_fork_is_total(maybe in any_maybe(), default in any::<i32>()) {
            let expected = match maybe {
                Maybe::Just(value) => value,
                Maybe::Nothing => default,
            };
            prop_assert_eq!(maybe.fork(default), expected);
        }

        #[test]
        fn prop_reduce_matches_a_fold_of_length_zero_or_one(
            maybe in any_maybe(),
            initial in any::<i64>()
        ) {
            let folded = maybe.reduce(|accumulator, n| accumulator + i64::from(n), initial);
            let expected = match maybe {
                Maybe::Just(value) => initial + i64::from(value),
                Maybe::Nothing => initial,
            };
            prop_assert_eq!(folded, expected);
        }

        #[test]
        fn prop_equals_is_reflexive_and_symmetric(
            left in any_maybe(),
            right in any_maybe()
        ) {
            prop_assert!(left.equals(&left));
            prop_assert_eq!(left.equals(&right), right.equals(&left));
            prop_assert_eq!(left.equals(&right), left == right);
        }
    }
}
