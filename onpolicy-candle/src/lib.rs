//! On-policy loss terms implemented with [candle](https://crates.io/crates/candle-core).
//!
//! The training loop evaluates an actor-critic model on a [`RolloutBatch`]
//! and passes the resulting [`ActorCriticOutput`] to each loss term. The only
//! term provided here is [`Imitation`], which penalizes the policy for
//! assigning low probability to actions labeled by an expert.
mod batch;
pub mod distr;
pub mod imitation;
mod model;
pub mod util;
pub use batch::{Observations, RolloutBatch, Supervision};
pub use distr::{CategoricalDistr, Distribution};
pub use imitation::{Imitation, ImitationConfig};
pub use model::ActorCriticOutput;
