//! Sample-to-visual mapping for the two ring gauges.
//!
//! Everything here is pure: the window layer calls [`present`] once per
//! tick and paints whatever comes back.

use crate::color::Color;
use crate::usage::UsageSample;

/// Usage below this percentage is drawn green.
pub const MODERATE_THRESHOLD: f32 = 50.0;

/// Usage at or above this percentage is drawn red.
pub const HIGH_THRESHOLD: f32 = 80.0;

/// Severity bucket for a usage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    /// Below 50%.
    Low,
    /// 50% up to (not including) 80%.
    Moderate,
    /// 80% and above.
    High,
}

impl UsageLevel {
    /// Classifies a percentage. The same rule applies to both gauges.
    pub fn from_percent(percent: f32) -> Self {
        if percent < MODERATE_THRESHOLD {
            Self::Low
        } else if percent < HIGH_THRESHOLD {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

/// Stroke colors for each usage level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub low: Color,
    pub moderate: Color,
    pub high: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            low: Color::new(0x32, 0xcd, 0x32),
            moderate: Color::new(0xff, 0xd7, 0x00),
            high: Color::new(0xff, 0x00, 0x00),
        }
    }
}

impl Palette {
    pub fn color_for(&self, level: UsageLevel) -> Color {
        match level {
            UsageLevel::Low => self.low,
            UsageLevel::Moderate => self.moderate,
            UsageLevel::High => self.high,
        }
    }
}

/// Center and radius of a ring, in widget client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Outer ring: CPU usage.
pub const OUTER_GAUGE: GaugeGeometry = GaugeGeometry {
    cx: 75.0,
    cy: 75.0,
    radius: 70.0,
};

/// Inner ring: RAM usage.
pub const INNER_GAUGE: GaugeGeometry = GaugeGeometry {
    cx: 75.0,
    cy: 75.0,
    radius: 55.0,
};

/// Converts a percentage into a sweep angle in degrees.
pub fn sweep_angle(percent: f32) -> f64 {
    f64::from(percent.clamp(0.0, 100.0)) / 100.0 * 360.0
}

/// An arc starting at 12 o'clock and sweeping clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub angle: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub is_large_arc: bool,
}

impl GaugeGeometry {
    /// Projects `angle` (degrees) onto the ring and returns the arc.
    pub fn arc(&self, angle: f64) -> ArcSegment {
        let radians = angle.to_radians();
        ArcSegment {
            angle,
            end_x: self.cx + self.radius * radians.sin(),
            end_y: self.cy - self.radius * radians.cos(),
            is_large_arc: angle > 180.0,
        }
    }

    /// Angle (degrees, clockwise from 12 o'clock, 0–360) of a point
    /// relative to the ring center.
    pub fn angle_of(&self, x: f64, y: f64) -> f64 {
        let deg = (x - self.cx).atan2(self.cy - y).to_degrees();
        if deg < 0.0 { deg + 360.0 } else { deg }
    }

    /// Distance of a point from the ring center.
    pub fn distance_of(&self, x: f64, y: f64) -> f64 {
        (x - self.cx).hypot(y - self.cy)
    }
}

/// One ring's drawable state: where the arc ends and how it is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeVisual {
    pub geometry: GaugeGeometry,
    pub arc: ArcSegment,
    pub level: UsageLevel,
    pub color: Color,
}

impl GaugeVisual {
    pub fn new(geometry: GaugeGeometry, percent: f32, palette: &Palette) -> Self {
        let level = UsageLevel::from_percent(percent);
        Self {
            geometry,
            arc: geometry.arc(sweep_angle(percent)),
            level,
            color: palette.color_for(level),
        }
    }

    /// Whether the pixel at (x, y) lies on the colored sweep, given the
    /// ring's stroke width.
    pub fn covers(&self, x: f64, y: f64, stroke: f64) -> bool {
        if self.arc.angle <= 0.0 {
            return false;
        }
        let half = stroke / 2.0;
        let dist = self.geometry.distance_of(x, y);
        if (dist - self.geometry.radius).abs() <= half
            && self.geometry.angle_of(x, y) <= self.arc.angle
        {
            return true;
        }
        // Round cap at the arc end.
        (x - self.arc.end_x).hypot(y - self.arc.end_y) <= half
    }
}

/// Everything one tick writes to the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// CPU ring.
    pub outer: GaugeVisual,
    /// RAM ring.
    pub inner: GaugeVisual,
    pub cpu_text: String,
    pub ram_text: String,
    pub detail: String,
}

/// Maps a sample onto both gauges and their labels.
pub fn present(sample: &UsageSample, palette: &Palette) -> Presentation {
    Presentation {
        outer: GaugeVisual::new(OUTER_GAUGE, sample.cpu_percent(), palette),
        inner: GaugeVisual::new(INNER_GAUGE, sample.ram_percent(), palette),
        cpu_text: sample.cpu_text(),
        ram_text: sample.ram_text(),
        detail: sample.ram_detail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn level_boundaries() {
        assert_eq!(UsageLevel::from_percent(0.0), UsageLevel::Low);
        assert_eq!(UsageLevel::from_percent(49.999), UsageLevel::Low);
        assert_eq!(UsageLevel::from_percent(50.0), UsageLevel::Moderate);
        assert_eq!(UsageLevel::from_percent(79.999), UsageLevel::Moderate);
        assert_eq!(UsageLevel::from_percent(80.0), UsageLevel::High);
        assert_eq!(UsageLevel::from_percent(100.0), UsageLevel::High);
    }

    #[test]
    fn large_arc_only_past_half_circle() {
        for tenth in 0..3600 {
            let angle = f64::from(tenth) / 10.0;
            let arc = OUTER_GAUGE.arc(angle);
            assert_eq!(arc.is_large_arc, angle > 180.0, "angle {angle}");
        }
    }

    #[test]
    fn quarter_arc_ends_at_three_oclock() {
        let arc = OUTER_GAUGE.arc(90.0);
        assert!((arc.end_x - 145.0).abs() < EPS);
        assert!((arc.end_y - 75.0).abs() < EPS);
    }

    #[test]
    fn zero_arc_ends_at_twelve_oclock() {
        let arc = INNER_GAUGE.arc(0.0);
        assert!((arc.end_x - 75.0).abs() < EPS);
        assert!((arc.end_y - 20.0).abs() < EPS);
        assert!(!arc.is_large_arc);
    }

    #[test]
    fn angle_of_is_clockwise_from_top() {
        assert!((OUTER_GAUGE.angle_of(75.0, 0.0) - 0.0).abs() < EPS);
        assert!((OUTER_GAUGE.angle_of(150.0, 75.0) - 90.0).abs() < EPS);
        assert!((OUTER_GAUGE.angle_of(75.0, 150.0) - 180.0).abs() < EPS);
        assert!((OUTER_GAUGE.angle_of(0.0, 75.0) - 270.0).abs() < EPS);
    }

    #[test]
    fn half_ram_is_amber_half_circle() {
        // Arrange
        let sample = UsageSample::new(0.0, 4096.0, 8192.0);

        // Act
        let p = present(&sample, &Palette::default());

        // Assert
        assert_eq!(sample.ram_used_gb(), 4.0);
        assert_eq!(sample.ram_percent(), 50.0);
        assert_eq!(p.inner.level, UsageLevel::Moderate);
        assert_eq!(p.inner.color, Palette::default().moderate);
        assert!((p.inner.arc.angle - 180.0).abs() < EPS);
        assert!(!p.inner.arc.is_large_arc);
        assert_eq!(p.ram_text, "RAM: 4.0 GB");
    }

    #[test]
    fn busy_cpu_is_red_large_arc() {
        // Arrange
        let sample = UsageSample::new(85.0, 4096.0, 8192.0);

        // Act
        let p = present(&sample, &Palette::default());

        // Assert
        assert!((p.outer.arc.angle - 306.0).abs() < EPS);
        assert!(p.outer.arc.is_large_arc);
        assert_eq!(p.outer.level, UsageLevel::High);
        assert_eq!(p.outer.color, Color::new(0xff, 0, 0));
        assert_eq!(p.cpu_text, "CPU: 85.0%");
    }

    #[test]
    fn out_of_range_cpu_is_clamped_for_the_arc() {
        let sample = UsageSample::new(130.0, 0.0, 8192.0);
        let p = present(&sample, &Palette::default());
        assert!((p.outer.arc.angle - 360.0).abs() < EPS);
    }

    #[test]
    fn covers_pixels_inside_the_sweep_only() {
        // Arrange: 25% => sweep to 3 o'clock.
        let visual = GaugeVisual::new(OUTER_GAUGE, 25.0, &Palette::default());

        // Act / Assert
        // On the ring at ~45 degrees.
        let (x, y) = (75.0 + 70.0 * 0.7071, 75.0 - 70.0 * 0.7071);
        assert!(visual.covers(x, y, 8.0));
        // On the ring at 9 o'clock, outside the sweep.
        assert!(!visual.covers(5.0, 75.0, 8.0));
        // Center of the widget is never on the ring.
        assert!(!visual.covers(75.0, 75.0, 8.0));
    }

    #[test]
    fn empty_gauge_covers_nothing() {
        let visual = GaugeVisual::new(INNER_GAUGE, 0.0, &Palette::default());
        assert!(!visual.covers(75.0, 20.0, 8.0));
    }
}
