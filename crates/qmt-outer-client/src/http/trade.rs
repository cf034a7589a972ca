/*
[INPUT]:  Order requests and a trade side
[OUTPUT]: ApiResponse from the outer trade endpoints
[POS]:    HTTP layer - trading endpoints (signed POST)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{QmtClient, Result};
use crate::types::{ApiResponse, BatchOrderRequest, OrderRequest, TradeSide};

const OUTER_TRADE_PATH: &str = "/qmt/trade/api/outer/trade";

impl QmtClient {
    /// Place a single order against one trader account.
    ///
    /// POST /qmt/trade/api/outer/trade/{buy|sell}
    pub async fn trade(&self, side: TradeSide, req: &OrderRequest) -> Result<ApiResponse> {
        let path = format!("{OUTER_TRADE_PATH}/{}", side.as_path_segment());
        self.send_signed(&path, req).await
    }

    /// Place a batch order; the server fans it out to all trader accounts.
    ///
    /// POST /qmt/trade/api/outer/trade/batch/{buy|sell}
    pub async fn trade_batch(
        &self,
        side: TradeSide,
        req: &BatchOrderRequest,
    ) -> Result<ApiResponse> {
        let path = format!("{OUTER_TRADE_PATH}/batch/{}", side.as_path_segment());
        self.send_signed(&path, req).await
    }
}
