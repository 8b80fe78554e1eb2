//! Provider common helpers
//!
//! Module structure:
//! - `config` - API key and endpoint extraction
//! - `request` - single-shot HTTP request sending with error classification
//! - `response` - commit message cleaning and error previews

pub mod config;
pub mod request;
pub mod response;

pub use config::*;
pub use request::send_llm_request;
pub use response::*;
