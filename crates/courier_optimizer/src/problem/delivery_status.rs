use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    Pending,
    Assigned,
    PickedUp,
    InTransit,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    /// Statuses of deliveries still waiting on the courier's run.
    pub const ACTIVE: [DeliveryStatus; 3] = [
        DeliveryStatus::Assigned,
        DeliveryStatus::PickedUp,
        DeliveryStatus::InTransit,
    ];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DeliveryStatus::Pending => "pending",
                DeliveryStatus::Assigned => "assigned",
                DeliveryStatus::PickedUp => "picked-up",
                DeliveryStatus::InTransit => "in-transit",
                DeliveryStatus::Delivered => "delivered",
                DeliveryStatus::Failed => "failed",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(DeliveryStatus::Assigned.is_active());
        assert!(DeliveryStatus::PickedUp.is_active());
        assert!(DeliveryStatus::InTransit.is_active());
        assert!(!DeliveryStatus::Pending.is_active());
        assert!(!DeliveryStatus::Delivered.is_active());
        assert!(!DeliveryStatus::Failed.is_active());
    }

    #[test]
    fn test_wire_format() {
        let status: DeliveryStatus = serde_json::from_str("\"picked-up\"").unwrap();
        assert_eq!(status, DeliveryStatus::PickedUp);
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::InTransit).unwrap(),
            "\"in-transit\""
        );
    }
}
