//! Imitation loss against expert actions.
mod base;
mod config;

pub use base::{split_expert_action, Imitation, EXPERT_CROSS_ENTROPY};
pub use config::ImitationConfig;
