//! Responsive scaling of pixel magnitudes.
//!
//! Raw magnitudes are interpolated halfway between their unscaled value and
//! a value proportional to the device width against a 350-unit reference
//! viewport. The device width is process-wide state: the host reads it from
//! its viewport-metrics source once at startup and publishes it here.

use once_cell::sync::OnceCell;

/// Reference viewport width the scaling formula is anchored to
pub const REFERENCE_WIDTH: f32 = 350.0;

static DEVICE_WIDTH: OnceCell<f32> = OnceCell::new();

/// Publish the device width. The first write wins; returns `false` when a
/// width was already set.
pub fn set_device_width(width: f32) -> bool {
    DEVICE_WIDTH.set(width).is_ok()
}

/// The published device width, or [`REFERENCE_WIDTH`] when none was set
pub fn device_width() -> f32 {
    DEVICE_WIDTH.get().copied().unwrap_or(REFERENCE_WIDTH)
}

/// Maps raw pixel magnitudes to device-width-adjusted magnitudes.
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    device_width: f32,
}

impl Scaler {
    /// Create a scaler for an explicit device width
    pub fn new(device_width: f32) -> Self {
        Self { device_width }
    }

    /// Create a scaler for the process-wide device width
    pub fn from_device() -> Self {
        Self::new(device_width())
    }

    /// Interpolate halfway between `value` and its proportional rescale to
    /// the reference width: `v + ((w / 350 * v) - v) * 0.5`
    pub fn scale(&self, value: f32) -> f32 {
        value + ((self.device_width / REFERENCE_WIDTH * value) - value) * 0.5
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self::from_device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_reference_width() {
        let scaler = Scaler::new(REFERENCE_WIDTH);
        for value in [0.0, 1.0, 4.0, 10.0, 16.5, 240.0] {
            assert_eq!(scaler.scale(value), value);
        }
    }

    #[test]
    fn test_scales_halfway_toward_proportional() {
        // At double the reference width the proportional value is 2v, so the
        // halfway interpolation lands at 1.5v.
        let scaler = Scaler::new(2.0 * REFERENCE_WIDTH);
        assert_eq!(scaler.scale(10.0), 15.0);
        assert_eq!(scaler.scale(4.0), 6.0);
    }

    #[test]
    fn test_narrow_device_scales_down() {
        let scaler = Scaler::new(REFERENCE_WIDTH / 2.0);
        assert_eq!(scaler.scale(10.0), 7.5);
    }

    #[test]
    fn test_unset_device_width_falls_back_to_reference() {
        // Tests never publish the process-wide width, so the fallback holds.
        assert_eq!(Scaler::from_device().scale(12.0), 12.0);
    }
}
