//! JSON registry snapshots
//!
//! A snapshot is a serialized copy of a runtime's registration tables, typically exported by
//! the host application once its bindings are registered. Loading one yields a [`Registry`]
//! that tooling can walk without linking against the host.
//!
//! Tables are registered in the order primitives, enums, object types, functions, properties,
//! typedefs, so properties and typedefs may refer to any enum or object type in the snapshot.

use serde::{Deserialize, Serialize};

use crate::engine::{Behaviour, Engine};
use crate::error::RegistrationError;
use crate::registry::{FunctionEntry, ObjectTypeEntry, Param, PropertyEntry, Registry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrySnapshot {
    /// Extra value types (e.g. `string`) beyond the built-in primitives.
    pub primitives: Vec<String>,
    pub enums: Vec<EnumSnapshot>,
    pub object_types: Vec<ObjectTypeSnapshot>,
    pub functions: Vec<FunctionSnapshot>,
    pub properties: Vec<GlobalPropertySnapshot>,
    pub typedefs: Vec<TypedefSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSnapshot {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValueSnapshot>,
}

/// Either a bare value name or `{ "name": .., "value": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValueSnapshot {
    Name(String),
    Valued { name: String, value: i64 },
}

impl EnumValueSnapshot {
    pub fn name(&self) -> &str {
        match self {
            EnumValueSnapshot::Name(name) | EnumValueSnapshot::Valued { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectTypeSnapshot {
    pub namespace: String,
    pub name: String,
    pub sub_types: Vec<String>,
    pub behaviours: Vec<BehaviourSnapshot>,
    pub methods: Vec<FunctionSnapshot>,
    pub properties: Vec<PropertySnapshot>,
    pub funcdefs: Vec<FunctionSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviourSnapshot {
    pub kind: Behaviour,
    /// Defaults to the type name (`~Name` for destructors).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionSnapshot {
    pub namespace: String,
    pub name: String,
    pub return_type: Option<String>,
    pub params: Vec<ParamSnapshot>,
    #[serde(rename = "const")]
    pub is_const: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSnapshot {
    #[serde(rename = "type")]
    pub type_decl: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySnapshot {
    #[serde(rename = "type")]
    pub type_decl: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalPropertySnapshot {
    #[serde(default)]
    pub namespace: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedefSnapshot {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    pub target: String,
}

impl RegistrySnapshot {
    pub fn from_json(json: &str) -> Result<Self, RegistrationError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<ParamSnapshot> for Param {
    fn from(param: ParamSnapshot) -> Self {
        Param {
            type_decl: param.type_decl,
            name: param.name,
            default_value: param.default,
        }
    }
}

impl From<FunctionSnapshot> for FunctionEntry {
    fn from(func: FunctionSnapshot) -> Self {
        FunctionEntry {
            name: func.name,
            namespace: func.namespace,
            object_name: None,
            return_type: func.return_type,
            params: func.params.into_iter().map(Param::from).collect(),
            is_const: func.is_const,
        }
    }
}

impl From<ObjectTypeSnapshot> for ObjectTypeEntry {
    fn from(object: ObjectTypeSnapshot) -> Self {
        let behaviours = object
            .behaviours
            .into_iter()
            .map(|b| {
                let mut func = FunctionEntry::new(b.return_type.as_deref(), b.name);
                func.params = b.params.into_iter().map(Param::from).collect();
                (b.kind, func)
            })
            .collect();

        ObjectTypeEntry {
            namespace: object.namespace,
            name: object.name,
            sub_types: object.sub_types,
            behaviours,
            methods: object.methods.into_iter().map(FunctionEntry::from).collect(),
            properties: object
                .properties
                .into_iter()
                .map(|p| PropertyEntry::new(p.type_decl, p.name))
                .collect(),
            funcdefs: object.funcdefs.into_iter().map(FunctionEntry::from).collect(),
        }
    }
}

impl Registry {
    /// Build a registry from a snapshot, starting from the built-in primitives.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Result<Self, RegistrationError> {
        let mut registry = Registry::with_primitives();

        for name in &snapshot.primitives {
            registry.register_primitive(name)?;
        }
        for e in snapshot.enums {
            registry.register_enum(&e.namespace, &e.name, e.values.iter().map(EnumValueSnapshot::name))?;
        }
        for object in snapshot.object_types {
            registry.register_object_type(object.into())?;
        }
        for func in snapshot.functions {
            registry.register_global_function(func.into())?;
        }
        for prop in &snapshot.properties {
            registry.register_global_property(&prop.namespace, &prop.name, &prop.type_name)?;
        }
        for typedef in &snapshot.typedefs {
            registry.register_typedef(&typedef.namespace, &typedef.name, &typedef.target)?;
        }

        tracing::debug!(
            enums = registry.enum_count(),
            object_types = registry.object_type_count(),
            functions = registry.global_function_count(),
            "loaded registry snapshot"
        );
        Ok(registry)
    }

    /// Parse and load a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, RegistrationError> {
        Self::from_snapshot(RegistrySnapshot::from_json(json)?)
    }
}
