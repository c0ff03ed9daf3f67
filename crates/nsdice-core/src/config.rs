use serde::Serialize;
use tracing::debug;

use crate::die::Face;
use crate::error::ConfigError;
use crate::generate::DieGenerator;

/// Default lowest face value.
pub const DEFAULT_MIN_VALUE: Face = 0;
/// Default highest face value.
pub const DEFAULT_MAX_VALUE: Face = 4;
/// Default number of faces per die.
pub const DEFAULT_SIDES: usize = 4;
/// Largest accepted number of faces per die.
pub const MAX_SIDES: usize = 1_024;

/// The three parameters that define a family of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiceConfig {
    pub min_value: Face,
    pub max_value: Face,
    pub sides: usize,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            sides: DEFAULT_SIDES,
        }
    }
}

impl DiceConfig {
    /// Validate and build a configuration.
    ///
    /// `min_value > max_value` is accepted and describes an empty family.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroSides`] when `sides` is zero.
    /// - [`ConfigError::TooManySides`] when `sides` exceeds [`MAX_SIDES`].
    /// - [`ConfigError::FamilyTooLarge`] when the die count overflows `u64`.
    pub fn new(min_value: Face, max_value: Face, sides: usize) -> Result<Self, ConfigError> {
        if sides == 0 {
            return Err(ConfigError::ZeroSides);
        }
        if sides > MAX_SIDES {
            return Err(ConfigError::TooManySides {
                sides,
                max: MAX_SIDES,
            });
        }

        let config = Self {
            min_value,
            max_value,
            sides,
        };
        if config.expected_die_count().is_none() {
            return Err(ConfigError::FamilyTooLarge {
                min_value,
                max_value,
                sides,
            });
        }
        Ok(config)
    }

    /// Returns `true` when no face value satisfies `min_value..=max_value`.
    #[must_use]
    pub const fn is_empty_range(&self) -> bool {
        self.min_value > self.max_value
    }

    /// A fresh generator over every die in this family.
    ///
    /// Each call restarts the enumeration from the beginning.
    #[must_use]
    pub fn dice(&self) -> DieGenerator {
        debug!(
            min = self.min_value,
            max = self.max_value,
            sides = self.sides,
            "starting die enumeration"
        );
        DieGenerator::new(self.min_value, self.max_value, self.sides)
    }

    /// Number of dice in this family: `C(max - min + sides, sides)`.
    ///
    /// Returns `None` if the count does not fit in a `u64`.
    #[must_use]
    pub fn expected_die_count(&self) -> Option<u64> {
        if self.is_empty_range() {
            return Some(0);
        }
        let values = u64::from(self.max_value - self.min_value) + 1;
        let sides = u64::try_from(self.sides).ok()?;
        // Multisets of size `sides` over `values` symbols.
        binomial(values.checked_add(sides)?.checked_sub(1)?, sides)
    }
}

/// `n choose k` with overflow reported as `None`.
fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return None;
        }
    }
    u64::try_from(acc).ok()
}
