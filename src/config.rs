// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Compile-time tunables for the rayon-backed `*_par` kernels.

/// Number of elements handed to one rayon task.
///
/// A multiple of 8 so every chunk of a 64-byte aligned `f64` buffer stays aligned.
pub const PARALLEL_CHUNK_SIZE: usize = 4096;

/// Inputs shorter than this run on the calling thread.
///
/// Each element costs a branch, a few divisions and at most three transcendental calls,
/// so small arrays finish before the pool would pick the work up.
pub const PARALLEL_MIN_LEN: usize = 16_384;
