//! HTTP handlers for the replacement documentation routes.

pub mod openapi;
pub mod redoc;
pub mod swagger;
