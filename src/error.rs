/// Errors for operations that take loosely typed caller input.
///
/// The numeric core itself never fails: positions clamp, channels clamp,
/// colors mask and malformed hashes decode best-effort.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("unknown colorspace '{0}' (expected rgb, hsv, hsl, xyz, luv or hlc_uv)")]
    UnknownColorSpace(String),

    #[error("axis {0} out of range (a colorspace view has 3 components)")]
    InvalidAxis(usize),

    #[error("stop index {index} out of range for gradient with {len} stops")]
    StopIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GradientError>;
