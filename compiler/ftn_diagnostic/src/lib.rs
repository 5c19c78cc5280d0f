//! Diagnostics for the Fortran token layer.
//!
//! Parsers never abort on a lexical problem. They attach a [`Message`] to
//! the per-unit [`Messages`] sink and then either return a best-effort value
//! or report absence. The host decides later whether any of it is fatal.
//!
//! Every message carries:
//! - an [`ErrorCode`] for searchability
//! - a [`MessageKind`] whose `Display` is the message text
//! - a [`Span`] locating it in the prescanned source

mod error_code;
mod message;
mod messages;
mod span;
pub mod span_utils;

pub use error_code::ErrorCode;
pub use message::{Message, MessageKind};
pub use messages::Messages;
pub use span::Span;
