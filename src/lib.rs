//! # maybers
//!
//! A law-abiding `Maybe` (optional value) type for Rust, together with the
//! type class traits it instantiates.
//!
//! ## Overview
//!
//! [`Maybe`] represents a value that may be absent without reaching for a
//! null sentinel: a computation either produced a `Just` holding exactly one
//! value, or it produced `Nothing`. Client code never branches on the variant
//! tag directly; it composes operations (`map`, `chain`, `ap`, `concat`,
//! `equals`, `fork`, `reduce`) and each variant's own behavior determines the
//! result.
//!
//! The operations are backed by the usual functional-programming
//! abstractions, exposed as traits:
//!
//! - **Type Classes**: [`Functor`], [`Applicative`], [`Monad`], [`Foldable`],
//!   [`Semigroup`], [`Monoid`]
//! - all satisfying their algebraic laws, verified by property-based tests.
//!
//! ## Example
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
//! }
//!
//! let result = Maybe::just(8).chain(half).chain(half);
//! assert_eq!(result, Maybe::just(2));
//!
//! // Absence short-circuits the rest of the pipeline.
//! let result = Maybe::just(8).chain(half).chain(half).chain(half);
//! assert_eq!(result.fork(-1), -1);
//! ```
//!
//! [`Functor`]: typeclass::Functor
//! [`Applicative`]: typeclass::Applicative
//! [`Monad`]: typeclass::Monad
//! [`Foldable`]: typeclass::Foldable
//! [`Semigroup`]: typeclass::Semigroup
//! [`Monoid`]: typeclass::Monoid

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the [`Maybe`] type and all type class traits.
///
/// # Usage
///
/// ```rust
/// use maybers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::Maybe;
    pub use crate::typeclass::*;
}

pub mod maybe;
pub mod typeclass;

pub use maybe::Maybe;

#[cfg(test)]
mod tests {
    use super::Maybe;
    use static_assertions::assert_impl_all;

    // Maybe values are immutable and hold no external resources; sharing
    // them across threads must stay safe without locking.
    assert_impl_all!(Maybe<String>: Send, Sync);
    assert_impl_all!(Maybe<i32>: Send, Sync, Copy);

    #[test]
    fn prelude_exposes_the_full_surface() {
        use crate::prelude::*;

        let value: Maybe<i32> = Maybe::of(1);
        assert_eq!(value.fmap(|n| n + 1), Maybe::just(2));
    }
}
