//! Catalog Module
//!
//! Menu-facing logic that sits above the repositories, currently the
//! ingredient availability check.

pub mod availability;

pub use availability::AvailabilityService;
