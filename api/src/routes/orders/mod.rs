//! Order API handlers
//!
//! Every handler runs behind the gate and takes the owner from the verified
//! [`AuthContext`](crate::middleware::auth::AuthContext), never from the body.

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_order;
pub use get::get_order;
pub use list::list_orders;
pub use update::update_order;

use uuid::Uuid;

/// Parses a path id; malformed ids are treated as unknown orders
pub(crate) fn parse_order_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
