pub mod order;

pub use order::{InMemoryOrderRepository, OrderRepository};
