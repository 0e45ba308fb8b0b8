//! Interface of loss terms for actor-critic models.
use crate::record::Record;
use anyhow::Result;

/// A loss term of an actor-critic training loop.
///
/// A training step evaluates the model on a batch once and hands the output to
/// every loss term. Each term returns a scalar loss, on which the caller runs
/// backpropagation, and a [`Record`] of diagnostics. The diagnostics are only
/// for reporting and never take part in gradient computation.
pub trait ActorCriticLoss {
    /// Batch of rollouts the loss is computed on.
    type Batch;

    /// Output of the actor-critic model evaluated on [`ActorCriticLoss::Batch`].
    type Output;

    /// Scalar loss, typically a 0-dimensional tensor of the backend.
    type Loss;

    /// Computes the loss.
    ///
    /// `step_count` is the number of environment steps taken so far. Terms with
    /// a schedule depend on it; others ignore it.
    fn loss(
        &self,
        step_count: usize,
        batch: &Self::Batch,
        output: &Self::Output,
    ) -> Result<(Self::Loss, Record)>;
}
