//! Service layer for the orders and sales microservices.
//! - Input models and the derivation of computed fields live in each `domain` module.
//! - Persistence goes through repository traits with SeaORM and in-memory implementations.
//! - Application services tie both together and map misses to `ServiceError::NotFound`.

pub mod errors;
pub mod pagination;
pub mod orders;
pub mod sales;
#[cfg(test)]
pub mod test_support;
