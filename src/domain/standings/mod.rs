//! Live league table: ranked rows rebuilt from every pushed snapshot.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
