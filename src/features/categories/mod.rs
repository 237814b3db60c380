//! Question categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | List category labels |
//! | POST | `/categories` | Create a category |
//! | DELETE | `/categories/{id}` | Delete a category |
//! | GET | `/categories/{id}/questions` | Questions in a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
