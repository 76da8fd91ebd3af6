//! This module contains the API endpoints for the server.
pub mod avengers;
pub mod routes;
pub mod state;
