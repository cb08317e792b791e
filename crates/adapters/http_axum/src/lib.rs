//! # bayanchor-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for the tracking page and the homepage
//!   (`/api/shipments`, `/api/shipments/{number}/details`, `/api/stats`)
//! - Serve the compiled **Leptos dashboard** (static files, SPA fallback to
//!   `index.html`) when a dashboard directory is configured
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `bayanchor-app` (for port traits and services) and
//! `bayanchor-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
