//! Diagnostics reported by loss terms.
//!
//! A loss term returns its scalar loss together with a [`Record`], a map from
//! metric name to [`RecordValue`]. The training loop merges the records of all
//! loss terms of a step and forwards them to its logger. A loss term leaves a
//! metric out of its record when the value is not meaningful for the step, so
//! that the aggregate is not polluted by placeholder values.
//!
//! ```rust
//! use onpolicy_core::record::{Record, RecordValue};
//!
//! let mut record = Record::from_scalar("expert_cross_entropy", 0.7);
//! record.insert("value_loss", RecordValue::Scalar(1.5));
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get_scalar("value_loss").unwrap(), 1.5);
//! ```
mod base;

pub use base::{Record, RecordValue};
