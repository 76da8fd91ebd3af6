//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for avenger table.
pub mod avenger;
