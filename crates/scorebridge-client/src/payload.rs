//! Split-orient table encoding of the scoring request.
//!
//! The remote model server expects tabular input as separate `columns`,
//! `index`, and `data` arrays (pandas "split" orientation), wrapped in an
//! `input_data` object:
//!
//! ```json
//! {"input_data": {"columns": [...], "index": [0], "data": [[...]]}}
//! ```
//!
//! The column names and their order are a compatibility contract with the
//! model's input schema and must not be altered or reordered.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column names expected by the forecasting model, in wire order.
pub const COLUMNS: [&str; 2] = ["ShipToDistributorOrgRefId", "ScheduledDeliveryDate"];

/// Tabular data in split orientation: ordered column names, ordered row
/// index, and one list of row values per row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitTable {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Ordered row index.
    pub index: Vec<u64>,
    /// Row values, one inner list per row.
    pub data: Vec<Vec<Value>>,
}

/// Request body for the scoring endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// The tabular model input.
    pub input_data: SplitTable,
}

impl ScoreRequest {
    /// Build the one-row payload for a single prediction.
    ///
    /// The distributor ID is carried as a float even though it is
    /// semantically an integer reference; the remote model's schema types
    /// it that way. The delivery date is transmitted as given, without
    /// format validation.
    pub fn single_row(distributor_id: f64, delivery_date: &str) -> Self {
        Self {
            input_data: SplitTable {
                columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
                index: vec![0],
                data: vec![vec![
                    Value::from(distributor_id),
                    Value::from(delivery_date),
                ]],
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
