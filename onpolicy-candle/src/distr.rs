//! Action distributions produced by actor-critic models.
use anyhow::Result;
use candle_core::{shape::D, DType, Tensor};
use candle_nn::ops::{log_softmax, softmax};
use onpolicy_core::error::OnPolicyError;

/// A distribution over actions for every decision point of a batch.
pub trait Distribution {
    /// Returns log-probabilities of the given actions.
    ///
    /// The output shares the leading dimensions of `actions`. Distributions
    /// over structured actions may append trailing axes, one entry per
    /// component of the action.
    fn log_prob(&self, actions: &Tensor) -> Result<Tensor>;
}

/// Categorical distribution parameterized by unnormalized logits.
///
/// The logits have shape `[..., n_actions]`.
#[derive(Debug, Clone)]
pub struct CategoricalDistr {
    logits: Tensor,
}

impl CategoricalDistr {
    /// Constructs the distribution from logits.
    pub fn from_logits(logits: Tensor) -> Self {
        Self { logits }
    }

    /// Returns the logits.
    pub fn logits(&self) -> &Tensor {
        &self.logits
    }

    /// Returns log-probabilities of all actions, `[..., n_actions]`.
    pub fn log_probs_tensor(&self) -> Result<Tensor> {
        Ok(log_softmax(&self.logits, D::Minus1)?)
    }

    /// Returns probabilities of all actions, `[..., n_actions]`.
    pub fn probs_tensor(&self) -> Result<Tensor> {
        Ok(softmax(&self.logits, D::Minus1)?)
    }

    /// Returns the entropy for each decision point, `[...]`.
    pub fn entropy(&self) -> Result<Tensor> {
        let p_log_p = (self.probs_tensor()? * self.log_probs_tensor()?)?;
        Ok(p_log_p.sum(D::Minus1)?.neg()?)
    }

    /// Returns the most probable action, `[..., 1]`.
    pub fn mode(&self) -> Result<Tensor> {
        Ok(self.logits.argmax_keepdim(D::Minus1)?)
    }
}

impl Distribution for CategoricalDistr {
    /// Returns log-probabilities of action indices.
    ///
    /// `actions` is either `[..., 1]`, giving `[..., 1]`, or `[...]` without the
    /// trailing axis, giving `[...]`. Indices of any dtype are cast to `u32`.
    fn log_prob(&self, actions: &Tensor) -> Result<Tensor> {
        let squeeze = actions.rank() + 1 == self.logits.rank();
        let actions = if squeeze {
            actions.unsqueeze(D::Minus1)?
        } else {
            actions.clone()
        };

        // Actions and logits differ only on the last axis
        let rank = self.logits.rank();
        if rank == 0
            || actions.rank() != rank
            || actions.dims()[..rank - 1] != self.logits.dims()[..rank - 1]
        {
            return Err(OnPolicyError::ShapeContractViolation(format!(
                "actions of shape {:?} do not match logits of shape {:?}",
                actions.dims(),
                self.logits.dims()
            ))
            .into());
        }

        let ixs = actions.to_dtype(DType::U32)?.contiguous()?;
        let log_prob = self.log_probs_tensor()?.gather(&ixs, D::Minus1)?;

        if squeeze {
            Ok(log_prob.squeeze(D::Minus1)?)
        } else {
            Ok(log_prob)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use candle_core::Device;

    fn assert_close(x: &[f32], y: &[f32]) {
        assert_eq!(x.len(), y.len());
        for (a, b) in x.iter().zip(y.iter()) {
            assert!((a - b).abs() < 1e-5, "{:?} != {:?}", x, y);
        }
    }

    #[test]
    fn test_log_prob() -> Result<()> {
        // Uniform over 4 actions and a distribution concentrated on action 2.
        let logits = Tensor::new(&[[0f32, 0., 0., 0.], [0., 0., 10., 0.]], &Device::Cpu)?;
        let distr = CategoricalDistr::from_logits(logits);
        let actions = Tensor::new(&[[3i64], [2]], &Device::Cpu)?;
        let log_prob = distr.log_prob(&actions)?;
        assert_eq!(log_prob.dims(), &[2, 1]);

        let expected_2 = 10f32 - (10f32.exp() + 3.0).ln();
        assert_close(
            &log_prob.flatten_all()?.to_vec1::<f32>()?,
            &[-(4f32.ln()), expected_2],
        );

        // Without the trailing axis; float indices are accepted as well.
        let actions = Tensor::new(&[3f32, 2.], &Device::Cpu)?;
        let log_prob = distr.log_prob(&actions)?;
        assert_eq!(log_prob.dims(), &[2]);
        assert_close(&log_prob.to_vec1::<f32>()?, &[-(4f32.ln()), expected_2]);

        Ok(())
    }

    #[test]
    fn test_log_prob_shape_mismatch() -> Result<()> {
        // [time, rollout, agent, n_actions]
        let logits = Tensor::zeros((2, 1, 2, 3), DType::F32, &Device::Cpu)?;
        let distr = CategoricalDistr::from_logits(logits);

        // Labels without the agent axis, with and without the trailing axis.
        let bad_actions = vec![
            Tensor::zeros((2, 1, 1), DType::U32, &Device::Cpu)?,
            Tensor::zeros((2, 1, 1, 1, 1), DType::U32, &Device::Cpu)?,
            Tensor::zeros((2, 2, 2, 1), DType::U32, &Device::Cpu)?,
        ];
        for actions in bad_actions.iter() {
            let err = distr.log_prob(actions).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<OnPolicyError>(),
                Some(OnPolicyError::ShapeContractViolation(_))
            ));
        }

        let actions = Tensor::zeros((2, 1, 2, 1), DType::U32, &Device::Cpu)?;
        assert_eq!(distr.log_prob(&actions)?.dims(), &[2, 1, 2, 1]);
        Ok(())
    }

    #[test]
    fn test_entropy_and_mode() -> Result<()> {
        let logits = Tensor::new(&[[[0f32, 0.], [5., -5.]]], &Device::Cpu)?;
        let distr = CategoricalDistr::from_logits(logits);

        let entropy = distr.entropy()?;
        assert_eq!(entropy.dims(), &[1, 2]);
        let entropy = entropy.flatten_all()?.to_vec1::<f32>()?;
        assert!((entropy[0] - 2f32.ln()).abs() < 1e-5);
        assert!(entropy[1] < 1e-3);

        let mode = distr.mode()?.flatten_all()?.to_vec1::<u32>()?;
        assert_eq!(mode[1], 0);

        let probs = distr.probs_tensor()?.sum(D::Minus1)?;
        assert_close(&probs.flatten_all()?.to_vec1::<f32>()?, &[1.0, 1.0]);

        Ok(())
    }
}
