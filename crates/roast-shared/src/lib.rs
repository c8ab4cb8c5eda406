//! # roast-shared
//!
//! Storage-free building blocks shared by the Roast Arena store and its
//! front-ends: record identifiers, invite codes and links, roast templates
//! and the input checks performed by presentation surfaces.

pub mod constants;
pub mod error;
pub mod invite;
pub mod templates;
pub mod types;
pub mod validation;

pub use error::{InviteLinkError, ValidationError};
pub use types::{IdGenerator, RecordId};
