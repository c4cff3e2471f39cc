//! Seams between the relay and the two external services it talks to.
//!
//! The relay only depends on [`IdentityResolver`] and [`MessageSender`];
//! concrete HTTP implementations live in the integration crates and tests
//! substitute in-memory fakes.

pub mod error;
pub mod resolver;
pub mod sender;

pub use error::{DeliveryError, ResolveError};
pub use resolver::IdentityResolver;
pub use sender::MessageSender;
