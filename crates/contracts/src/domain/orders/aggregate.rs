use serde::{Deserialize, Serialize};

/// One production order row.
///
/// `quantity` travels as the text stored in the database; the backend
/// validates it as an integer on input but the column keeps TEXT affinity.
/// `created_at` is a `YYYY-MM-DD HH:MM:SS` timestamp string whose
/// lexicographic order equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub item: String,
    pub quantity: String,
    pub status: String,
    pub created_at: String,
}
