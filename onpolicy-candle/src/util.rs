//! Utilities.
use anyhow::Result;
use candle_core::Tensor;
use onpolicy_core::shape::{pad_to_rank, rank_align};

/// Appends singleton axes to `t` until it has the given rank.
pub fn pad_trailing(t: &Tensor, rank: usize) -> Result<Tensor> {
    let shape = pad_to_rank(t.dims(), rank)?;
    Ok(t.reshape(shape)?)
}

/// Reshapes `t` so that it broadcasts over `target`.
///
/// The shape of `t` must equal the leading dimensions of `target`. Singleton
/// axes are appended to `t`; `target` is not modified.
pub fn align_to(t: &Tensor, target: &Tensor) -> Result<Tensor> {
    let shape = rank_align(t.dims(), target.dims())?;
    Ok(t.reshape(shape)?)
}
