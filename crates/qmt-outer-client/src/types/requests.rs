/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Single-order request for `/qmt/trade/api/outer/trade/{buy|sell}`.
///
/// Field order here is irrelevant on the wire: bodies are serialized
/// through the canonical sorted-key form before signing and sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Index of the server-side trader account to execute against
    pub trader_index: u32,
    pub symbol: String,
    pub trade_price: f64,
    /// Target position as a fraction of the portfolio (0.1 = 10%)
    pub position_pct: f64,
    pub strategy_name: String,
    /// Server-side price type; defaults to 0 on the server when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<u32>,
}

/// Batch-order request for `/qmt/trade/api/outer/trade/batch/{buy|sell}`.
///
/// Same shape as [`OrderRequest`] minus `trader_index`; the server fans
/// the order out to every configured trader account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOrderRequest {
    pub symbol: String,
    pub trade_price: f64,
    pub position_pct: f64,
    pub strategy_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<u32>,
}
