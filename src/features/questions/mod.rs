//! Trivia questions: paginated listing, search, create and delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of questions (10 per page) |
//! | POST | `/questions` | Create a question, or search when `searchTerm` is given |
//! | DELETE | `/questions/{id}` | Delete a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
