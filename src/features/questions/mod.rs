//! Question bank management.
//!
//! Listing is paginated ten at a time, ordered by id. Search is a
//! case-insensitive substring match on the question text.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | One page of questions |
//! | POST | `/questions/search` | Search question text |
//! | POST | `/questionsPost` | Create a question |
//! | DELETE | `/questionsDelete/{id}` | Delete a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
