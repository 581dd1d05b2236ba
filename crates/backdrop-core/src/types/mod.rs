//! Core request and response types.

pub mod request;
pub mod response;
