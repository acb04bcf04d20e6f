//! CLI operation handlers.
//!
//! - [`generate_name`]: request a name suggestion for the selection and
//!   insert it as a comment
//!
//! Output formatting utilities are in [`output`].

pub mod generate_name;
pub mod output;
