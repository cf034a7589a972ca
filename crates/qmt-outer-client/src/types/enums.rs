/*
[INPUT]:  API schema definitions
[OUTPUT]: Enum types shared across requests and endpoints
[POS]:    Data layer - enum definitions
[UPDATE]: When API schema changes
*/

use serde::{Deserialize, Serialize};

/// Direction of a trade operation; selects the endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Path segment used in `/qmt/trade/api/outer/trade/{segment}`.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path_segment())
    }
}
