/*
[INPUT]:  QMT_* environment variables and order parameters
[OUTPUT]: Signed trade requests against a running server
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use qmt_outer_client::{BatchOrderRequest, OrderRequest, QmtClient, TradeSide};

/// Example: place a single order and a batch order.
///
/// Requires a running QMT server plus:
///   QMT_BASE_URL   e.g. http://localhost:9091
///   QMT_CLIENT_ID  e.g. outer_client_002
///   QMT_SECRET_KEY the shared secret for that client id
#[tokio::main]
async fn main() {
    println!("=== QMT Outer Trade Example ===\n");

    let client = match QmtClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let order = OrderRequest {
        trader_index: 0,
        symbol: "000001".to_string(),
        trade_price: 10.5,
        position_pct: 0.1,
        strategy_name: "外部策略测试".to_string(),
        price_type: None,
    };

    println!("\nPlacing single buy order: {:?}", order);
    match client.trade(TradeSide::Buy, &order).await {
        Ok(response) => {
            println!("  status: {}", response.status);
            println!("  body:   {:?}", response.body);
        }
        Err(e) => eprintln!("  request failed: {}", e),
    }

    let batch = BatchOrderRequest {
        symbol: "000001".to_string(),
        trade_price: 10.5,
        position_pct: 0.1,
        strategy_name: "外部批量策略测试".to_string(),
        price_type: None,
    };

    println!("\nPlacing batch sell order: {:?}", batch);
    match client.trade_batch(TradeSide::Sell, &batch).await {
        Ok(response) => {
            println!("  status: {}", response.status);
            println!("  body:   {:?}", response.body);
        }
        Err(e) => eprintln!("  request failed: {}", e),
    }
}
