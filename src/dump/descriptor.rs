//! Entity descriptors
//!
//! Plain snapshots of what the walker read from the runtime. Declaration strings are stored
//! exactly as the runtime rendered them.

use super::EntityKind;

/// Something the orchestrator can group by namespace.
pub trait Entity {
    const KIND: EntityKind;

    fn namespace(&self) -> &str;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub namespace: String,
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectTypeDescriptor {
    pub namespace: String,
    pub name: String,
    /// Template parameter names; empty for non-generic types.
    pub sub_types: Vec<String>,
    /// Constructor and destructor declarations.
    pub special_members: Vec<String>,
    pub methods: Vec<String>,
    /// Property declarations, `<Type> <Name>`.
    pub properties: Vec<String>,
    /// Signatures of child funcdefs.
    pub child_signatures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalFunctionDescriptor {
    pub namespace: String,
    pub name: String,
    pub declaration: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalPropertyDescriptor {
    pub namespace: String,
    pub name: String,
    /// Never empty; unresolvable properties are not described at all.
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDescriptor {
    pub namespace: String,
    pub name: String,
    pub target: String,
}

impl Entity for EnumDescriptor {
    const KIND: EntityKind = EntityKind::Enums;

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for ObjectTypeDescriptor {
    const KIND: EntityKind = EntityKind::ObjectTypes;

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for GlobalFunctionDescriptor {
    const KIND: EntityKind = EntityKind::GlobalFunctions;

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for GlobalPropertyDescriptor {
    const KIND: EntityKind = EntityKind::GlobalProperties;

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for TypeAliasDescriptor {
    const KIND: EntityKind = EntityKind::TypeAliases;

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }
}
