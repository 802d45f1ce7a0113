// src/api/mod.rs
// HTTP API: routers, extractors, and handlers

pub mod http;

pub use http::create_router;
