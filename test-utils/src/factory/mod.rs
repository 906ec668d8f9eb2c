//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let airplane = factory::airplane::create_airplane(&db, 1).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airplane = factory::airplane::AirplaneFactory::new(&db, 7)
//!     .no_of_passengers(120)
//!     .updated_at(Utc::now() - Duration::hours(1))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `airplane` - Create airplane entities
//! - `user` - Create user entities
//! - `helpers` - Unique id generation shared by factories

pub mod airplane;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use airplane::create_airplane;
pub use user::create_user;
