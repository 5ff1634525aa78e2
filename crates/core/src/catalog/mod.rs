//! Game catalog lookups

pub mod ports;
pub mod service;

pub use service::CatalogService;
