#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod access;
pub mod impls;
pub mod registry;
pub mod serde;
pub mod ty;
pub mod var;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use ty::{EnumValue, EnumValues, FlagValue, FlagValues, VarType, VarTypeId};
pub use var::{DynVar, Var};
