//! # Storage Module
//!
//! Handles all data persistence for the training center back-office.
//!
//! The domain layer only sees the traits in `traits`; the SQLite
//! repositories are wired in by `initialize_backend` and share a single
//! `DbConnection` pool.
//!
//! ## Components
//!
//! - **connection.rs** - pool construction and schema setup
//! - **traits.rs** - `CourseStorage`, `RegistrationStorage`, `StorageError`
//! - **sqlite/** - SQLite repository implementations

pub mod connection;
pub mod sqlite;
pub mod traits;

pub use connection::DbConnection;
pub use sqlite::{CourseRepository, RegistrationRepository};
pub use traits::{CourseStorage, RegistrationStorage, StorageError, StorageResult};
