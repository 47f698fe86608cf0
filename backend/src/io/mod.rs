//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services. Handlers
//! translate JSON into domain commands and domain errors into status codes
//! and response envelopes; no business rules live here.

pub mod rest;
