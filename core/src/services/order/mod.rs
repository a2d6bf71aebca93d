//! Order service module
//!
//! Use cases behind the order API. Every operation is scoped to the user id
//! from verified claims.

mod service;

#[cfg(test)]
mod tests;

pub use service::OrderService;
