#![warn(missing_docs)]
//! Backend-agnostic building blocks of on-policy loss terms.
//!
//! The tensor backend lives in separate crates; this crate provides the error
//! taxonomy, the [`Record`](record::Record) used to report diagnostics, the
//! rank-alignment primitive used for mask broadcasting and the
//! [`ActorCriticLoss`] interface implemented by loss terms.
pub mod error;
pub mod record;
pub mod shape;

mod configurable;
mod loss;
pub use configurable::Configurable;
pub use loss::ActorCriticLoss;
