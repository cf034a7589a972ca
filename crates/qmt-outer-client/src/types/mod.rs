/*
[INPUT]:  API schema definitions
[OUTPUT]: Typed requests, responses and enums
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod requests;
pub mod responses;

pub use enums::TradeSide;
pub use requests::{BatchOrderRequest, OrderRequest};
pub use responses::{ApiResponse, ResponseBody};
