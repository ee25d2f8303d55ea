//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! Two kinds of clients talk to it: parent apps, which authenticate with a
//! bearer token and manage children and zones, and child devices, which
//! push GPS fixes without a credential.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: Axum handlers for every operation
//! - **Error Translation**: Domain errors to HTTP status codes and JSON bodies
//! - **Authentication**: Resolving `Authorization: Bearer` to a parent identity
//! - **Mapping**: Converting between `shared` DTOs and domain types

pub mod rest;

pub use rest::*;
