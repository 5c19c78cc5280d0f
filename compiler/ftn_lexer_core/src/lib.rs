//! Low-level character cursor for the Fortran token layer.
//!
//! The prescanner hands this layer a fully materialized character stream.
//! [`Cursor`] walks it one `char` at a time and is [`Copy`], so a saved
//! cursor is a complete backtracking snapshot.

mod cursor;

pub use cursor::Cursor;
