//! Value type descriptors: the per-type half of the conversion registry.
//!
//! - [`VarType`]: the compile-time conversion entry a [`Var`](crate::Var)
//!   binds to.
//! - [`VarTypeId`]: stable numeric identifier of a value category.
//! - [`EnumValue`] / [`FlagValue`]: name-table restricted value types,
//!   declared with [`enum_values!`](crate::enum_values) and
//!   [`flag_values!`](crate::flag_values).

mod enums;
mod type_id;
mod value_type;

pub use enums::{EnumValue, EnumValues, FlagValue, FlagValues};
pub use type_id::VarTypeId;
pub use value_type::VarType;
