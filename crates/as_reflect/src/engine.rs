//! Runtime capability traits
//!
//! These traits mirror how a scripting engine enumerates its own registration tables: a count
//! plus a get-by-index accessor per table, and per-entity accessors on the returned handles.
//! All queries are read-only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a registered type, as handed out by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a special member registered on an object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behaviour {
    Construct,
    ListConstruct,
    Destruct,
    Factory,
    ListFactory,
    AddRef,
    Release,
    GetWeakRefFlag,
    TemplateCallback,
    GetRefCount,
    SetGcFlag,
    GetGcFlag,
    EnumReferences,
    ReleaseReferences,
}

impl Behaviour {
    /// Constructors and destructors; the only behaviours that read like members in a header.
    pub fn is_special_member(self) -> bool {
        matches!(self, Behaviour::Construct | Behaviour::Destruct)
    }
}

/// Switches for the runtime's function declaration renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeclarationOptions {
    /// Prefix the function name with its owning object type (`Obj::name`).
    pub include_object_name: bool,
    /// Prefix the function name with its namespace (`ns::name`).
    pub include_namespace: bool,
    /// Emit parameter names after parameter types.
    pub include_param_names: bool,
}

impl DeclarationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object_name(mut self, include: bool) -> Self {
        self.include_object_name = include;
        self
    }

    pub fn with_namespace(mut self, include: bool) -> Self {
        self.include_namespace = include;
        self
    }

    pub fn with_param_names(mut self, include: bool) -> Self {
        self.include_param_names = include;
        self
    }
}

/// A global property row as reported by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalProperty<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub type_id: TypeId,
}

/// A registered function: global function, method, behaviour or funcdef signature.
pub trait FunctionInfo {
    fn name(&self) -> &str;

    fn namespace(&self) -> &str;

    /// Render the function's declaration, e.g. `void update(int dt)`.
    fn declaration(&self, options: DeclarationOptions) -> String;
}

/// A registered type.
///
/// One trait covers every type kind, the same way the runtime hands out a single type-info
/// handle. Accessors that do not apply to a kind report zero / `None`, which is what the
/// default implementations do.
pub trait TypeInfo {
    fn name(&self) -> &str;

    fn namespace(&self) -> &str;

    fn enum_value_count(&self) -> usize {
        0
    }

    fn enum_value_by_index(&self, _index: usize) -> Option<&str> {
        None
    }

    fn sub_type_count(&self) -> usize {
        0
    }

    fn sub_type(&self, _index: usize) -> Option<&dyn TypeInfo> {
        None
    }

    fn behaviour_count(&self) -> usize {
        0
    }

    /// `None` when the runtime has no function bound at this behaviour slot.
    fn behaviour_by_index(&self, _index: usize) -> Option<(Behaviour, &dyn FunctionInfo)> {
        None
    }

    fn method_count(&self) -> usize {
        0
    }

    fn method_by_index(&self, _index: usize) -> Option<&dyn FunctionInfo> {
        None
    }

    fn property_count(&self) -> usize {
        0
    }

    /// Property declaration text, e.g. `int x`.
    fn property_declaration(&self, _index: usize) -> Option<String> {
        None
    }

    fn child_funcdef_count(&self) -> usize {
        0
    }

    fn child_funcdef(&self, _index: usize) -> Option<&dyn TypeInfo> {
        None
    }

    /// Signature of a funcdef type.
    fn funcdef_signature(&self) -> Option<&dyn FunctionInfo> {
        None
    }

    /// Target of a typedef type.
    fn typedef_type_id(&self) -> Option<TypeId> {
        None
    }
}

/// Read-only view of a scripting runtime's registration tables.
///
/// Index order is the runtime's registration order.
pub trait Engine {
    fn enum_count(&self) -> usize;

    fn enum_by_index(&self, index: usize) -> Option<&dyn TypeInfo>;

    fn object_type_count(&self) -> usize;

    fn object_type_by_index(&self, index: usize) -> Option<&dyn TypeInfo>;

    fn global_function_count(&self) -> usize;

    fn global_function_by_index(&self, index: usize) -> Option<&dyn FunctionInfo>;

    fn global_property_count(&self) -> usize;

    fn global_property_by_index(&self, index: usize) -> Option<GlobalProperty<'_>>;

    fn typedef_count(&self) -> usize;

    fn typedef_by_index(&self, index: usize) -> Option<&dyn TypeInfo>;

    fn type_info_by_id(&self, type_id: TypeId) -> Option<&dyn TypeInfo>;

    /// Declaration text of a type, optionally namespace-qualified. `None` when the id is
    /// unknown to the runtime.
    fn type_declaration(&self, type_id: TypeId, include_namespace: bool) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_members_are_construct_and_destruct() {
        assert!(Behaviour::Construct.is_special_member());
        assert!(Behaviour::Destruct.is_special_member());
        assert!(!Behaviour::Factory.is_special_member());
        assert!(!Behaviour::ListConstruct.is_special_member());
        assert!(!Behaviour::AddRef.is_special_member());
        assert!(!Behaviour::TemplateCallback.is_special_member());
    }

    #[test]
    fn test_declaration_options_builder() {
        let options = DeclarationOptions::new().with_namespace(true).with_param_names(true);
        assert!(!options.include_object_name);
        assert!(options.include_namespace);
        assert!(options.include_param_names);
    }

    #[test]
    fn test_behaviour_serde_names() {
        let kind: Behaviour = serde_json::from_str("\"list_factory\"").unwrap();
        assert_eq!(kind, Behaviour::ListFactory);
        assert_eq!(serde_json::to_string(&Behaviour::Destruct).unwrap(), "\"destruct\"");
    }

    #[test]
    fn test_type_id_display() {
        assert_eq!(TypeId(42).to_string(), "#42");
    }
}
