//! Shape utilities for broadcasting masks over structured outputs.
//!
//! A mask built from per-step labels has shape `[leading..., 1]`, while the
//! log-probabilities of a structured action may carry extra trailing axes,
//! e.g. `[leading..., 1, k]`. The mask is applied to the whole group by
//! appending singleton axes to it; the other operand is left untouched.
use crate::error::OnPolicyError;

/// Right-pads `shape` with singleton dimensions up to `rank`.
///
/// Fails if `shape` already has more than `rank` dimensions.
///
/// ```rust
/// use onpolicy_core::shape::pad_to_rank;
///
/// assert_eq!(pad_to_rank(&[4, 2, 1], 5).unwrap(), vec![4, 2, 1, 1, 1]);
/// ```
pub fn pad_to_rank(shape: &[usize], rank: usize) -> Result<Vec<usize>, OnPolicyError> {
    if shape.len() > rank {
        return Err(OnPolicyError::ShapeContractViolation(format!(
            "cannot pad shape {:?} of rank {} to lower rank {}",
            shape,
            shape.len(),
            rank
        )));
    }
    let mut padded = shape.to_vec();
    padded.resize(rank, 1);
    Ok(padded)
}

/// Checks that `shape` equals the leading dimensions of `target`.
pub fn check_leading(shape: &[usize], target: &[usize]) -> Result<(), OnPolicyError> {
    if shape.len() > target.len() || target[..shape.len()] != *shape {
        return Err(OnPolicyError::ShapeContractViolation(format!(
            "leading dimensions of {:?} do not match {:?}",
            target, shape
        )));
    }
    Ok(())
}

/// Aligns `shape` to `target` for broadcasting.
///
/// `shape` must equal the leading dimensions of `target`. The returned shape is
/// `shape` right-padded with singleton dimensions to the rank of `target`, so
/// that an element of `shape` scales the whole trailing group of `target`.
///
/// ```rust
/// use onpolicy_core::shape::rank_align;
///
/// assert_eq!(rank_align(&[3, 2, 1], &[3, 2, 1, 4]).unwrap(), vec![3, 2, 1, 1]);
/// assert!(rank_align(&[3, 2, 1], &[3, 5, 1]).is_err());
/// ```
pub fn rank_align(shape: &[usize], target: &[usize]) -> Result<Vec<usize>, OnPolicyError> {
    check_leading(shape, target)?;
    pad_to_rank(shape, target.len())
}
