//! Application service layer - quote use case, request types, config

pub mod config;
pub mod quote_service;
pub mod request;

pub use config::Config;
pub use quote_service::QuoteService;
pub use request::QuoteRequest;
