//! HDI banding.
//!
//! | Band      | Range              | Style  |
//! |-----------|--------------------|--------|
//! | Very High | `hdi >= 0.80`      | green  |
//! | High      | `0.70 <= hdi < 0.80` | blue |
//! | Medium    | `0.55 <= hdi < 0.70` | yellow |
//! | Low       | `hdi < 0.55`       | red    |
//!
//! Lower bounds are inclusive. Values outside `[0, 1]` classify by the same
//! rule; NaN compares false everywhere and lands in `Low`.

use serde::Serialize;

pub const VERY_HIGH_MIN: f64 = 0.80;
pub const HIGH_MIN: f64 = 0.70;
pub const MEDIUM_MIN: f64 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Low => "Low",
            Band::Medium => "Medium",
            Band::High => "High",
            Band::VeryHigh => "Very High",
        }
    }

    pub fn style(&self) -> StyleKey {
        match self {
            Band::Low => StyleKey::Red,
            Band::Medium => StyleKey::Yellow,
            Band::High => StyleKey::Blue,
            Band::VeryHigh => StyleKey::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKey {
    Red,
    Yellow,
    Blue,
    Green,
}

impl StyleKey {
    /// Utility classes used by the web card.
    pub fn css_classes(&self) -> &'static str {
        match self {
            StyleKey::Red => "bg-red-100 border-red-400 text-red-800",
            StyleKey::Yellow => "bg-yellow-100 border-yellow-400 text-yellow-800",
            StyleKey::Blue => "bg-blue-100 border-blue-400 text-blue-800",
            StyleKey::Green => "bg-green-100 border-green-400 text-green-800",
        }
    }

    /// SGR foreground colour for the terminal surface.
    pub fn ansi(&self) -> &'static str {
        match self {
            StyleKey::Red => "\x1b[31m",
            StyleKey::Yellow => "\x1b[33m",
            StyleKey::Blue => "\x1b[34m",
            StyleKey::Green => "\x1b[32m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub band: Band,
    pub style: StyleKey,
}

pub fn band_of(hdi: f64) -> Band {
    if hdi >= VERY_HIGH_MIN {
        Band::VeryHigh
    } else if hdi >= HIGH_MIN {
        Band::High
    } else if hdi >= MEDIUM_MIN {
        Band::Medium
    } else {
        Band::Low
    }
}

pub fn classify(hdi: f64) -> Classification {
    let band = band_of(hdi);
    Classification { band, style: band.style() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bounds_are_inclusive() {
        assert_eq!(band_of(0.80), Band::VeryHigh);
        assert_eq!(band_of(0.7999), Band::High);
        assert_eq!(band_of(0.70), Band::High);
        assert_eq!(band_of(0.6999), Band::Medium);
        assert_eq!(band_of(0.55), Band::Medium);
        assert_eq!(band_of(0.5499), Band::Low);
    }

    #[test]
    fn out_of_range_values_still_classify() {
        assert_eq!(band_of(1.3), Band::VeryHigh);
        assert_eq!(band_of(-0.2), Band::Low);
        assert_eq!(band_of(f64::NAN), Band::Low);
    }

    #[test]
    fn bands_are_monotone_over_unit_interval() {
        let mut prev = Band::Low;
        for i in 0..=1000 {
            let band = band_of(i as f64 / 1000.0);
            assert!(band as u8 >= prev as u8, "band went down at {}", i);
            prev = band;
        }
        assert_eq!(prev, Band::VeryHigh);
    }

    #[test]
    fn style_follows_band() {
        let c = classify(0.838);
        assert_eq!(c.band, Band::VeryHigh);
        assert_eq!(c.style, StyleKey::Green);
        assert!(c.style.css_classes().contains("green"));
        assert_eq!(classify(0.6).style, StyleKey::Yellow);
        assert_eq!(Band::VeryHigh.label(), "Very High");
    }
}
