use std::{fmt::Display, ops::Deref};

use anyhow::anyhow;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Percentage {
    pub fn new_opt(value: f64) -> Option<Percentage> {
        if value < 0. {
            None
        } else {
            Some(Percentage(value))
        }
    }

    /// `value / whole` expressed in percents. Negative ratios collapse to 0.
    pub fn from_ratio(value: f64, whole: f64) -> Percentage {
        Percentage::new_opt(value / whole * 100.).unwrap_or_default()
    }

    /// Rounds to the given number of decimals, halves going up. The decision is made on the exact
    /// value, so `0.35` (stored slightly below) becomes `0.3` while `12.25` becomes `12.3`.
    pub fn rounded(self, decimals: i32) -> Percentage {
        let scale = 10f64.powi(decimals);
        let scaled = self.0 * scale;
        let rounded = if scaled.fract() == 0.5 {
            // Remainder of the multiplication, zero when the product is exact.
            if self.0.mul_add(scale, -scaled) < 0. {
                scaled.floor()
            } else {
                scaled.ceil()
            }
        } else {
            scaled.round()
        };
        Percentage(rounded / scale)
    }
}

impl TryFrom<f64> for Percentage {
    type Error = anyhow::Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Percentage::new_opt(value).ok_or_else(|| anyhow!("{value} is not a valid percentage"))
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Percentage;

    #[test]
    fn test_rejects_negative() {
        assert!(Percentage::new_opt(-0.5).is_none());
        assert!(Percentage::try_from(-1.).is_err());
        assert_eq!(*Percentage::try_from(12.5).unwrap(), 12.5);
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(*Percentage::from_ratio(1., 4.), 25.);
        assert_eq!(*Percentage::from_ratio(-1., 4.), 0.);
    }

    #[test]
    fn test_rounded() {
        let value = Percentage::from_ratio(364., 365.).rounded(2);
        assert_eq!(*value, 99.73);
        assert_eq!(*Percentage(12.25).rounded(1), 12.3);
        assert_eq!(*Percentage(0.25).rounded(1), 0.3);
        assert_eq!(*Percentage(0.35).rounded(1), 0.3);
        assert_eq!(*Percentage(99.95).rounded(1), 100.);
        assert_eq!(*Percentage(2.675).rounded(2), 2.67);
        assert_eq!(*Percentage(12.24).rounded(1), 12.2);
    }

    #[test]
    fn test_deserialize() {
        let value: Percentage = serde_json::from_str("41.37").unwrap();
        assert_eq!(*value, 41.37);
        assert!(serde_json::from_str::<Percentage>("-3").is_err());
    }
}
