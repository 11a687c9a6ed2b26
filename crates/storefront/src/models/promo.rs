//! The currently applied promo code.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A promo code applied to the cart. At most one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPromo {
    /// Uppercased registry code.
    pub code: String,
    /// Discount fraction in [0, 1).
    pub discount: Decimal,
}

impl AppliedPromo {
    /// The discount as a whole percentage, for display ("10% off").
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.discount * Decimal::from(100))
            .round()
            .to_u32()
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let promo = AppliedPromo {
            code: "NUBIAN10".to_owned(),
            discount: "0.10".parse().unwrap(),
        };
        assert_eq!(promo.percent(), 10);

        let promo = AppliedPromo {
            code: "WELCOME15".to_owned(),
            discount: "0.15".parse().unwrap(),
        };
        assert_eq!(promo.percent(), 15);
    }
}
