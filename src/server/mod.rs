//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Middleware** (`middleware/`) - Viewer privileges and target user resolution
//! - **Service Layer** (`service/`) - Search orchestration and relation loading
//! - **Data Layer** (`data/`) - Database queries returning entity or domain models
//! - **Model Layer** (`model/`) - Domain models, search parameters and pagination
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. **Router** routes `/api/users/{user}/modding/...` to a controller action
//! 2. **Middleware** resolves the viewer and the target user, or short-circuits with
//!    a 404 or a redirect
//! 3. **Service** runs the search and attaches relations through the data layer
//! 4. **Controller** converts the domain models to DTOs and responds with JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
