/// Window opacity stored as a whole percentage so repeated wheel steps
/// never accumulate floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    pub const MIN: u8 = 30;
    pub const MAX: u8 = 100;
    pub const STEP: u8 = 5;

    /// Builds an opacity from a percentage, clamped to the legal range
    /// and snapped down to the step.
    pub fn from_percent(percent: i32) -> Self {
        let clamped = percent.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u8;
        Self(clamped - clamped % Self::STEP)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Opacity as a 0.0–1.0 fraction.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Alpha byte for `UpdateLayeredWindow`'s constant alpha.
    pub fn alpha(self) -> u8 {
        (u16::from(self.0) * 255 / 100) as u8
    }

    /// Applies one mouse-wheel notch. Positive deltas raise opacity,
    /// negative deltas lower it, zero leaves it unchanged.
    pub fn scrolled(self, wheel_delta: i32) -> Self {
        let next = match wheel_delta.signum() {
            1 => self.0.saturating_add(Self::STEP),
            -1 => self.0.saturating_sub(Self::STEP),
            _ => self.0,
        };
        Self(next.clamp(Self::MIN, Self::MAX))
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(Self::MAX)
    }
}
