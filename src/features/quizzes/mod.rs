//! Quiz play.
//!
//! The client tracks which questions it has already asked and sends them with
//! every draw; the server keeps no quiz state.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Draw the next unseen question |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
