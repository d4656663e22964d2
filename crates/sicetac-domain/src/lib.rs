//! Domain layer for SICETAC freight cost estimation

pub mod model;
pub mod repository;
pub mod service;
