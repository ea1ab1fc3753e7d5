//! Infrastructure layer - External service implementations

pub mod attachment;
pub mod catalog;
pub mod llm;
pub mod logging;
pub mod services;
pub mod storage;
