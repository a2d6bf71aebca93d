//! Session endpoints used by the client session store
//!
//! - `GET /api/auth/me`: who is signed in
//! - `POST /api/auth/logout`: drop the session cookie

pub mod logout;
pub mod me;

pub use logout::logout;
pub use me::me;
