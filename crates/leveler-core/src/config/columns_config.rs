//! Column display names the engine resolves against the active table.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ACTUAL_COLUMN, DEFAULT_OT_NET_COLUMN, DEFAULT_PAYABLE_COLUMN};

/// The three display names. Each must match a column name exactly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Column being adjusted. Default: "Payable".
    pub payable: Option<String>,
    /// Target column. Default: "Actual".
    pub actual: Option<String>,
    /// Gating column. Default: "OT Net".
    pub ot_net: Option<String>,
}

impl ColumnsConfig {
    pub fn new(
        payable: impl Into<String>,
        actual: impl Into<String>,
        ot_net: impl Into<String>,
    ) -> Self {
        Self {
            payable: Some(payable.into()),
            actual: Some(actual.into()),
            ot_net: Some(ot_net.into()),
        }
    }

    pub fn effective_payable(&self) -> &str {
        self.payable.as_deref().unwrap_or(DEFAULT_PAYABLE_COLUMN)
    }

    pub fn effective_actual(&self) -> &str {
        self.actual.as_deref().unwrap_or(DEFAULT_ACTUAL_COLUMN)
    }

    pub fn effective_ot_net(&self) -> &str {
        self.ot_net.as_deref().unwrap_or(DEFAULT_OT_NET_COLUMN)
    }

    /// `(role, name)` pairs in resolution order.
    pub fn roles(&self) -> [(&'static str, &str); 3] {
        [
            ("payable", self.effective_payable()),
            ("actual", self.effective_actual()),
            ("ot_net", self.effective_ot_net()),
        ]
    }
}
