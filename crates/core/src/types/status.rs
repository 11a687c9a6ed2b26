//! Status enums and product categories.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// Statuses advance monotonically along [`OrderStatus::ALL`] in the nominal
/// lifecycle; nothing in this crate advances a stored status automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// All statuses in lifecycle order, for rendering fulfillment timelines.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Processing, Self::Shipped, Self::Delivered];

    /// Position of this status within the lifecycle.
    #[must_use]
    pub fn step(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Product gender category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Men => write!(f, "Men"),
            Self::Women => write!(f, "Women"),
            Self::Unisex => write!(f, "Unisex"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "unisex" => Ok(Self::Unisex),
            _ => Err(format!("invalid gender category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str_case_insensitive() {
        assert_eq!("shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!("SHIPPED".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("returned".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_display_roundtrip() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_steps_are_ordered() {
        assert_eq!(OrderStatus::Pending.step(), 0);
        assert_eq!(OrderStatus::Processing.step(), 1);
        assert_eq!(OrderStatus::Shipped.step(), 2);
        assert_eq!(OrderStatus::Delivered.step(), 3);
    }

    #[test]
    fn test_status_serde_uses_display_names() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("unisex".parse::<Gender>().unwrap(), Gender::Unisex);
        assert!("other".parse::<Gender>().is_err());
    }
}
