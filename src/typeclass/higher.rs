//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly.
//! This module uses GAT to work around that limitation: a trait that names
//! the currently-applied inner type and can re-apply the constructor to a
//! different one. The [`Functor`](super::Functor) hierarchy is built on it.

use crate::maybe::Maybe;

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types, allowing the type class traits to speak about "the same container
/// with a different inner type" - for `Maybe<A>`, `WithType<B>` is
/// `Maybe<B>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use maybers::Maybe;
/// use maybers::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Maybe<i32>`, `WithType<String>` is `Maybe<String>`. The
    /// constraint `TypeConstructor<Inner = B>` keeps the resulting type a
    /// valid type constructor, so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
