/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public QMT outer trade client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod canonical;
pub mod config;
pub mod http;
pub mod types;

pub use canonical::to_canonical_string;
pub use config::ApiConfig;

// Re-export commonly used types from http
pub use http::{
    QmtClient,
    QmtError,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
