//! Domain Layer - Gate rules and value objects
//!
//! This layer contains:
//! - Gate policy (which paths need a viewer session)
//! - Value objects (ViewerPassword)

pub mod gate;
pub mod value_object;
