//! Typed variables and their type-erased dynamic view.
//!
//! [`Var`] is the statically-typed variable native code works with;
//! [`DynVar`] is the closed, total interface reflective code sees. Every
//! `Var` implements `DynVar`, so a `&mut dyn DynVar` can read and write any
//! attribute through any of the supported representations.

mod dyn_var;
mod var;

pub use dyn_var::DynVar;
pub use var::Var;
