//! Storage module for navgate
//!
//! - `json`: JSON - 설정/레지스트리 문서 저장/로드

mod json;

pub use json::JsonStore;
