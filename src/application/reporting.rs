use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, Cents};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub year: i64,
    pub month: i64,
    pub total: Cents,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category_id: CategoryId,
    pub category: String,
    pub total: Cents,
    pub count: usize,
}
