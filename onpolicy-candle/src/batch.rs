//! Batch of rollouts fed to loss terms.
use candle_core::Tensor;
use std::{collections::HashMap, iter::FromIterator};

/// Supervision attached to observations by an expert sensor.
#[derive(Debug, Clone, Copy)]
pub enum Supervision<'a> {
    /// Packed tensor of shape `[..., 2]`.
    ///
    /// The last axis holds the index of the expert action and a 0/1 flag
    /// telling whether the label is valid for that slot.
    ExpertAction(&'a Tensor),
}

/// Observations of a batch, keyed by the name of the sensor producing them.
///
/// Each tensor has leading dimensions `[time, rollout, (agent)]` followed by
/// dimensions specific to the sensor.
#[derive(Debug, Clone, Default)]
pub struct Observations(HashMap<String, Tensor>);

impl Observations {
    /// Creates an empty set of observations.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inserts an observation, returning the previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, obs: Tensor) -> Option<Tensor> {
        self.0.insert(name.into(), obs)
    }

    /// Sets an observation.
    pub fn with(mut self, name: impl Into<String>, obs: Tensor) -> Self {
        self.insert(name, obs);
        self
    }

    /// Returns the observation of the given name.
    pub fn get(&self, name: &str) -> Option<&Tensor> {
        self.0.get(name)
    }

    /// Returns `true` if an observation of the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the names of the observations.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the supervision found in the observations.
    ///
    /// `expert_action_key` is the name under which the expert action sensor
    /// stores its packed tensor.
    pub fn supervision(&self, expert_action_key: &str) -> Option<Supervision<'_>> {
        self.get(expert_action_key).map(Supervision::ExpertAction)
    }
}

impl<K: Into<String>> FromIterator<(K, Tensor)> for Observations {
    fn from_iter<I: IntoIterator<Item = (K, Tensor)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A batch of rollouts collected over a fixed number of steps.
#[derive(Debug, Clone, Default)]
pub struct RolloutBatch {
    /// Observations of the batch.
    pub observations: Observations,
}

impl RolloutBatch {
    /// Creates a batch from observations.
    pub fn new(observations: Observations) -> Self {
        Self { observations }
    }
}
