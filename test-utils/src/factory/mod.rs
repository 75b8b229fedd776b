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
//!     let user = factory::create_user(&db).await?;
//!     let question = factory::create_question(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let question = factory::question::QuestionFactory::new(&db)
//!     .name("Two Sum")
//!     .difficulty("Easy")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `question` - Create question entities
//! - `helpers` - Unique value generation shared by the factories

pub mod helpers;
pub mod question;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use question::create_question;
pub use user::create_user;
