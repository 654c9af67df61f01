//! Secret handling utilities.
//!
//! Parameter values are carried as [`SecretString`] from the moment the
//! store returns them until the script text is assembled.

pub use secrecy::{ExposeSecret, SecretString};
