//! Shared API contracts for the Otaku Corner catalog.
//!
//! Everything that crosses the wire between the backend and the admin or
//! public front ends lives here: the response envelope, pagination metadata,
//! catalog enums, and the domain DTOs. The crate is pure data: no I/O, no
//! transport, no ambient configuration.

pub mod domain;
pub mod enums;
pub mod envelope;
