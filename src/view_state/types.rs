//! Core view-state newtypes

/// Error returned when a geometry value cannot describe a list.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Item extent was zero, negative, NaN or infinite.
    ///
    /// A non-positive extent would divide by zero and produce NaN/Infinity
    /// offsets, so it is rejected at configuration time.
    #[error("item extent must be finite and > 0 (got {0})")]
    InvalidItemExtent(f64),
}

/// Extent of a single item along the scroll axis. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ItemExtent(f64);

impl ItemExtent {
    /// Smart constructor that validates the extent is finite and positive.
    pub fn new(extent: f64) -> Result<Self, WindowError> {
        if extent.is_finite() && extent > 0.0 {
            Ok(Self(extent))
        } else {
            Err(WindowError::InvalidItemExtent(extent))
        }
    }

    /// Get the raw extent.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ItemExtent {
    type Error = WindowError;

    fn try_from(extent: f64) -> Result<Self, Self::Error> {
        Self::new(extent)
    }
}

/// Sanitize a host-reported extent: NaN and negatives become 0.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}
