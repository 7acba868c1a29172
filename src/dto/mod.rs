//! DTO modules describing the two HTTP APIs this service bridges.

pub mod notion;
pub mod slack;
