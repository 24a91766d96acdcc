// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Errors are reserved for caller mistakes in how arrays are supplied.
//! Mathematically degenerate parameters (a scale `<= 0`) are not errors:
//! they evaluate to a zero density so one bad element never aborts a batch.

use core::fmt;
use std::error::Error;

/// Error type for the array kernels.
///
/// Each variant carries a message naming the kernel and the offending argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// An operand array or output buffer does not match the length of `x`.
    LengthMismatch(String),

    /// Null mask and null count disagree, or the mask is too short.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_variant() {
        let e = KernelError::LengthMismatch(log_length_mismatch("landau_pdf", 4, 3));
        assert_eq!(
            e.to_string(),
            "Length mismatch: landau_pdf => Length mismatch: LHS 4 RHS 3"
        );
        let e = KernelError::InvalidArguments("landau: null_count > 0 requires null_mask".into());
        assert!(e.to_string().starts_with("Invalid arguments: landau:"));
    }
}
