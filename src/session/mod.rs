//! Session state: in-memory token storage and lifecycle notifications.
//!
//! The access token lives only in process memory; the durable refresh
//! credential is a server-set cookie owned by the HTTP transport and is
//! never read or written here.

mod events;
mod token;

pub use events::{SessionEvent, SessionEvents};
pub use token::TokenStore;
