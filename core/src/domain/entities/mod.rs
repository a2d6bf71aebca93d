//! Domain entities representing core business objects.

pub mod order;
pub mod token;

pub use order::{
    Address, Consignment, Country, NewOrder, Order, OrderDetails, OrderStatus, OrderUpdate,
    Package, ServiceResult, TotalCost,
};
pub use token::Claims;
