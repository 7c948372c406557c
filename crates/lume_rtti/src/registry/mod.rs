//! Runtime type descriptors and the registry that indexes them.
//!
//! ## Menu
//!
//! - [`VarTypeDesc`]: identity plus factories for one value type.
//! - [`TypeRegistry`]: name- and id-keyed store of descriptors.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] .
//!
//! Static registration is backed by the [`inventory`] crate behind the
//! `auto_register` feature. The built-in value types submit themselves;
//! declared enumeration and flag types are registered explicitly with
//! [`TypeRegistry::register`].

// -----------------------------------------------------------------------------
// Modules

mod type_desc;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_desc::VarTypeDesc;
pub use type_registry::TypeRegistry;
