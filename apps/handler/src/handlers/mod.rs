//! Handler modules
//!
//! The Lambda serves a single route: every API Gateway proxy event is a
//! search proxy request.

pub mod search;


pub use search::handle_search;
