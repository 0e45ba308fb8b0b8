//! Imitation loss implemented with candle.
use super::ImitationConfig;
use crate::{
    batch::{RolloutBatch, Supervision},
    distr::Distribution,
    model::ActorCriticOutput,
    util::align_to,
};
use anyhow::Result;
use candle_core::{shape::D, DType, Device, Tensor};
use log::trace;
use onpolicy_core::{error::OnPolicyError, record::Record, ActorCriticLoss, Configurable};
use std::marker::PhantomData;

/// Name of the metric reported by [`Imitation`].
pub const EXPERT_CROSS_ENTROPY: &str = "expert_cross_entropy";

/// Splits a packed expert action observation.
///
/// `packed` has shape `[..., 2]`, holding the index of the expert action and
/// its validity flag on the last axis. Returns `(expert_actions, masks)`, both
/// of shape `[..., 1]` and of the dtype of `packed`.
pub fn split_expert_action(packed: &Tensor) -> Result<(Tensor, Tensor)> {
    if packed.dims().last() != Some(&2) {
        return Err(OnPolicyError::ShapeContractViolation(format!(
            "the last dimension of expert actions must be 2, got shape {:?}",
            packed.dims()
        ))
        .into());
    }
    let expert_actions = packed.narrow(D::Minus1, 0, 1)?;
    let masks = packed.narrow(D::Minus1, 1, 1)?;
    Ok((expert_actions, masks))
}

/// Expert imitation loss.
///
/// The loss is the negative log-likelihood of expert actions under the
/// policy, averaged over the decision points for which an expert label is
/// available. `P` is the type of the action distribution of the policy.
///
/// The batch must contain the packed tensor of an expert action sensor, see
/// [`Supervision::ExpertAction`]. When no label in the batch is valid, the
/// loss is zero, its gradient vanishes and the returned [`Record`] is empty.
pub struct Imitation<P> {
    expert_action_key: String,
    phantom: PhantomData<fn() -> P>,
}

impl<P> Configurable for Imitation<P> {
    type Config = ImitationConfig;

    /// Constructs the imitation loss.
    fn build(config: Self::Config) -> Self {
        Self {
            expert_action_key: config.expert_action_key,
            phantom: PhantomData,
        }
    }
}

impl<P: Distribution> Imitation<P> {
    /// Computes the loss and its diagnostics.
    ///
    /// # Errors
    ///
    /// * [`OnPolicyError::UnsupportedSupervisionMode`] if the batch has no
    ///   expert action observation.
    /// * [`OnPolicyError::ShapeContractViolation`] if the last dimension of
    ///   the expert action observation is not 2, or if the leading dimensions
    ///   of the log-probabilities differ from those of the expert actions.
    pub fn compute(
        &self,
        batch: &RolloutBatch,
        output: &ActorCriticOutput<P>,
    ) -> Result<(Tensor, Record)> {
        let packed = match batch.observations.supervision(&self.expert_action_key) {
            Some(Supervision::ExpertAction(packed)) => packed,
            None => {
                return Err(OnPolicyError::UnsupportedSupervisionMode(format!(
                    "imitation loss requires `{}` observations of an expert action sensor",
                    self.expert_action_key
                ))
                .into())
            }
        };
        let (expert_actions, masks) = split_expert_action(packed)?;
        let n_valid = masks.to_dtype(DType::F32)?.sum_all()?.to_scalar::<f32>()?;
        let should_report = n_valid != 0f32;

        // Labels of invalid slots may be placeholders outside of the action space
        let expert_actions = (&expert_actions * &masks)?;
        let log_probs = output.distributions.log_prob(&expert_actions)?;
        trace!(
            "expert_actions: {:?}, log_probs: {:?}, n_valid: {}",
            expert_actions.dims(),
            log_probs.dims(),
            n_valid
        );

        // Masked slots may hold -inf log-probabilities
        let masks = align_to(&masks.to_dtype(DType::U8)?, &log_probs)?
            .broadcast_as(log_probs.shape())?;
        let total = masks
            .where_cond(&log_probs, &log_probs.zeros_like()?)?
            .sum_all()?
            .neg()?;

        if !should_report {
            // Every term is masked out; the sum is zero and stays in the graph.
            return Ok((total, Record::empty()));
        }

        let loss = total.affine(1.0 / n_valid as f64, 0.0)?;
        let value = loss
            .to_device(&Device::Cpu)?
            .to_dtype(DType::F32)?
            .to_scalar::<f32>()?;
        Ok((loss, Record::from_scalar(EXPERT_CROSS_ENTROPY, value)))
    }
}

impl<P: Distribution> ActorCriticLoss for Imitation<P> {
    type Batch = RolloutBatch;
    type Output = ActorCriticOutput<P>;
    type Loss = Tensor;

    fn loss(
        &self,
        _step_count: usize,
        batch: &Self::Batch,
        output: &Self::Output,
    ) -> Result<(Self::Loss, Record)> {
        self.compute(batch, output)
    }
}
