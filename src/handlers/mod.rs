//! HTTP handlers: parse, validate, delegate to the store, translate the result.

pub mod home;
pub mod product;
pub use home::*;
pub use product::*;
