//! Output of actor-critic models.
use candle_core::Tensor;
use std::collections::HashMap;

/// Output of an actor-critic model evaluated on a batch.
///
/// `D` is the type of the action distribution.
#[derive(Debug, Clone)]
pub struct ActorCriticOutput<D> {
    /// Action distributions, one per decision point of the batch.
    pub distributions: D,

    /// State values, `[..., 1]`.
    pub values: Tensor,

    /// Extra named tensors produced by the model, e.g. auxiliary predictions.
    pub extras: HashMap<String, Tensor>,
}

impl<D> ActorCriticOutput<D> {
    /// Constructs the output without extras.
    pub fn new(distributions: D, values: Tensor) -> Self {
        Self {
            distributions,
            values,
            extras: HashMap::new(),
        }
    }

    /// Sets an extra tensor.
    pub fn with_extra(mut self, name: impl Into<String>, t: Tensor) -> Self {
        self.extras.insert(name.into(), t);
        self
    }

    /// Returns the extra tensor of the given name.
    pub fn extra(&self, name: &str) -> Option<&Tensor> {
        self.extras.get(name)
    }
}
