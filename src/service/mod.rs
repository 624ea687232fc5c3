//! Service layer
//!
//! Business logic between the HTTP handlers and the data layer.

mod account;
mod message;

pub use account::AccountService;
pub use message::MessageService;
