//! Type class traits instantiated by [`Maybe`](crate::Maybe).
//!
//! This module provides the fundamental type classes (traits) behind the
//! `Maybe` operations:
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Foldable`]: Folding the structure to a summary value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT behavior,
//! allowing traits like [`Functor`] and [`Monad`] to be defined generically
//! over the `Maybe` type constructor; see [`TypeConstructor`].
//!
//! ## Derivation order
//!
//! `Maybe`'s bind ([`chain`](crate::Maybe::chain)) is the primitive; its
//! [`Functor::fmap`] and [`Applicative::apply`] are derived from it, so the
//! functor and applicative laws hold automatically once the monad laws do.
//! Any further variant of the type would only need to implement `chain` to
//! get a law-abiding functor and applicative for free.
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use maybers::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! // Nothing is the identity element of the Maybe monoid
//! let value = Maybe::just(String::from("hello"));
//! assert_eq!(Maybe::empty().combine(value.clone()), value);
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use maybers::prelude::*;
//!
//! // Lifting a pure value
//! let x: Maybe<i32> = Maybe::<()>::pure(42);
//! assert_eq!(x, Maybe::just(42));
//!
//! // Combining two Maybe values
//! let sum = Maybe::just(1).map2(Maybe::just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::just(3));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
