use serde::{Deserialize, Serialize};

/// Canonical order statuses.
///
/// New orders are always created `Pending`. The status-update operation
/// accepts free text and is not constrained to this set, so rows read back
/// from storage may carry labels outside it; this enum covers the labels
/// the application itself writes and aggregates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    /// Label as stored in the `status` column.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(OrderStatus::Pending),
            "In Progress" => Some(OrderStatus::InProgress),
            "Completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Completed,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(OrderStatus::from_label("Shipped"), None);
    }
}
