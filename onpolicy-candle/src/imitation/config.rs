//! Configuration of the imitation loss.
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Imitation`](super::Imitation).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ImitationConfig {
    /// Name of the observation holding packed expert actions.
    pub expert_action_key: String,
}

impl Default for ImitationConfig {
    fn default() -> Self {
        Self {
            expert_action_key: "expert_action".to_string(),
        }
    }
}

impl ImitationConfig {
    /// Sets the name of the observation holding packed expert actions.
    pub fn expert_action_key(mut self, v: impl Into<String>) -> Self {
        self.expert_action_key = v.into();
        self
    }

    /// Loads [`ImitationConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load config of imitation loss from {:?}", path_);
        Ok(b)
    }

    /// Saves [`ImitationConfig`] to YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of imitation loss into {:?}", path_);
        Ok(())
    }
}
