pub mod auth;
pub mod cors;
pub mod gate;
pub mod security;

pub use auth::*;
pub use cors::*;
pub use gate::*;
pub use security::*;
