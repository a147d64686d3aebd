//! Sales: input model, derivation, persistence gateway and application service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::SaleService;
