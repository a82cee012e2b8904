// Copyright (c) 2024 Steven Rosenthal smr@dt3.org
// See LICENSE file in root directory for license terms.

pub mod astro_util;
pub mod orbit;
pub mod phase_space;
pub mod potential;
pub mod value_stats;

use thiserror::Error;

/// Errors raised by the coordinate and dynamics helpers. All of them are
/// caused by inputs the caller should not have passed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
