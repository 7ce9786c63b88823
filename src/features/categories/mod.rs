//! Trivia categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | All categories as an id to label map |
//! | GET | `/categories/{category_id}/questions` | Questions filed under one category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
