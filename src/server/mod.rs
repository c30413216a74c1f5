//! HTTP server exposing the landing page widgets.
//!
//! The form validator, the chatbot and the preference toggles are served as
//! JSON endpoints so the static page (or any other client) can drive them.
//!
//! # Endpoints
//!
//! - `GET  /health`  — Liveness probe
//! - `POST /form/*`  — Field and form validation, phone mask
//! - `POST /contact` — Simulated contact submission
//! - `POST /chat`    — Wisdom AI chat
//! - `/preferences`  — Theme and accessibility mode

pub mod routes;

pub use routes::{app_router, AppState};
