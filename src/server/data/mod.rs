//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. They are generic over the connection
//! so the same queries run against the pool or inside a transaction.

pub mod airplane;
pub mod user;
