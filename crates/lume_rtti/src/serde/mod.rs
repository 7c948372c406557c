//! Serialization and deserialization support for variables.
//!
//! Variables serialize as their canonical text form, which is total and
//! round-trips exactly for every value type. That keeps the wire format
//! human-readable and independent of the native type: a `float32` written
//! as `"12.5"` can be read back into a `float64`, a `string`, or a declared
//! enumeration, through the same parse chains the dynamic interface uses.
//!
//! - [`Serialize`] is implemented for every [`Var`] and for `dyn DynVar`.
//! - [`VarSeed`]: builds a fresh boxed variable of a registry-resolved type.
//! - [`VarAssignSeed`]: assigns the deserialized text into an existing
//!   variable, honoring its access policy.
//!
//! # Example
//!
//! ```
//! use serde_core::de::DeserializeSeed;
//!
//! use lume_rtti::registry::TypeRegistry;
//! use lume_rtti::serde::VarSeed;
//! use lume_rtti::Var;
//!
//! let var = Var::<i32>::new(57);
//! let json = serde_json::to_string(&var).unwrap();
//! assert_eq!(json, "\"57\"");
//!
//! let registry = TypeRegistry::new();
//! let seed = VarSeed::new(registry.get_with_name("int32").unwrap());
//! let mut de = serde_json::Deserializer::from_str(&json);
//! let restored = seed.deserialize(&mut de).unwrap();
//! assert_eq!(restored.get_i32(), 57);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use serde_core::de::{DeserializeSeed, Deserializer, Visitor};
use serde_core::{Serialize, Serializer};

use crate::access::{AccessMode, VarStorage};
use crate::registry::VarTypeDesc;
use crate::ty::VarType;
use crate::var::{DynVar, Var};

// -----------------------------------------------------------------------------
// Serialize

impl<T: VarType, A: AccessMode, S: VarStorage<T>> Serialize for Var<T, A, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.get_text())
    }
}

impl Serialize for dyn DynVar {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.get_text())
    }
}

// -----------------------------------------------------------------------------
// VarSeed

/// A [`DeserializeSeed`] that builds a boxed variable of the described
/// type from its serialized text form.
///
/// The descriptor usually comes from a
/// [`TypeRegistry`](crate::registry::TypeRegistry) lookup, resolving a
/// type name stored alongside the value.
pub struct VarSeed {
    desc: &'static VarTypeDesc,
}

impl VarSeed {
    pub fn new(desc: &'static VarTypeDesc) -> Self {
        Self { desc }
    }
}

impl<'de> DeserializeSeed<'de> for VarSeed {
    type Value = Box<dyn DynVar>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let text = deserializer.deserialize_str(TextVisitor)?;
        Ok(self.desc.parse(&text))
    }
}

// -----------------------------------------------------------------------------
// VarAssignSeed

/// A [`DeserializeSeed`] that assigns the deserialized text into an
/// existing variable through [`DynVar::set_text`].
///
/// Assignment goes through the variable's access policy like any other
/// write, so deserializing into a read-only variable is a silent no-op.
pub struct VarAssignSeed<'a> {
    var: &'a mut dyn DynVar,
}

impl<'a> VarAssignSeed<'a> {
    pub fn new(var: &'a mut dyn DynVar) -> Self {
        Self { var }
    }
}

impl<'de> DeserializeSeed<'de> for VarAssignSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        let text = deserializer.deserialize_str(TextVisitor)?;
        self.var.set_text(&text);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// TextVisitor

struct TextVisitor;

impl Visitor<'_> for TextVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a variable value in text form")
    }

    fn visit_str<E: serde_core::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(String::from(value))
    }

    fn visit_string<E: serde_core::de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(value)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use serde_core::de::DeserializeSeed;

    use crate::access::ReadOnly;
    use crate::registry::TypeRegistry;
    use crate::serde::{VarAssignSeed, VarSeed};
    use crate::var::{DynVar, Var};

    #[test]
    fn variables_serialize_as_text() {
        let var = Var::<f32>::new(12.5);
        assert_eq!(serde_json::to_string(&var).unwrap(), "\"12.5\"");

        let var = Var::<bool>::new(true);
        let dynamic: &dyn DynVar = &var;
        assert_eq!(serde_json::to_string(dynamic).unwrap(), "\"true\"");
    }

    #[test]
    fn seed_builds_a_registry_resolved_variable() {
        let registry = TypeRegistry::new();
        let seed = VarSeed::new(registry.get_with_name("int64").unwrap());

        let mut de = serde_json::Deserializer::from_str("\"-99\"");
        let var = seed.deserialize(&mut de).unwrap();
        assert_eq!(var.get_i64(), -99);
        assert_eq!(var.type_name(), "int64");
    }

    #[test]
    fn assign_seed_writes_through_the_access_policy() {
        let mut var = Var::<i32>::new(200);
        let mut de = serde_json::Deserializer::from_str("\"57\"");
        VarAssignSeed::new(&mut var).deserialize(&mut de).unwrap();
        assert_eq!(var.get(), 57);

        let mut frozen = Var::<i32, ReadOnly>::new(10);
        let mut de = serde_json::Deserializer::from_str("\"57\"");
        VarAssignSeed::new(&mut frozen).deserialize(&mut de).unwrap();
        assert_eq!(frozen.get(), 10);
    }

    #[test]
    fn cross_type_restore_goes_through_text() {
        let source = Var::<f64>::new(2.5);
        let json = serde_json::to_string(&source).unwrap();

        let registry = TypeRegistry::new();
        let seed = VarSeed::new(registry.get_with_name("string").unwrap());
        let mut de = serde_json::Deserializer::from_str(&json);
        let var = seed.deserialize(&mut de).unwrap();
        assert_eq!(var.get_text(), "2.5");
        assert_eq!(var.get_f32(), 2.5);
    }

    #[test]
    fn ron_round_trip() {
        let var = Var::<String>::new(String::from("hello"));
        let text = ron::to_string(&var).unwrap();
        assert_eq!(text, "\"hello\"");

        let registry = TypeRegistry::new();
        let seed = VarSeed::new(registry.get_with_name("string").unwrap());
        let mut de = ron::Deserializer::from_str(&text).unwrap();
        let var = seed.deserialize(&mut de).unwrap();
        assert_eq!(var.get_text(), "hello");
    }
}
