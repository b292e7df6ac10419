//! In-memory scripting runtime
//!
//! [`Registry`] keeps registration tables in registration order and implements [`Engine`], so
//! it can stand in for a live engine: it is what snapshot files load into and what tests walk.
//!
//! # Example
//!
//! ```
//! use as_reflect::{Engine, Registry};
//!
//! let mut registry = Registry::with_primitives();
//! registry.register_enum("Graphics", "Color", ["RED", "GREEN", "BLUE"]).unwrap();
//! registry.register_global_property("", "background", "Graphics::Color").unwrap();
//!
//! assert_eq!(registry.enum_count(), 1);
//! assert_eq!(registry.global_property_count(), 1);
//! ```

use std::collections::HashMap;

use crate::declaration;
use crate::engine::{Behaviour, DeclarationOptions, Engine, FunctionInfo, GlobalProperty, TypeId, TypeInfo};
use crate::error::RegistrationError;

/// Built-in value types every runtime knows about.
pub const PRIMITIVES: &[&str] = &[
    "void", "bool", "int8", "int16", "int", "int64", "uint8", "uint16", "uint", "uint64", "float", "double",
];

// ============================================================================
// Entries
// ============================================================================

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Full type text including modifiers, e.g. `const string &in`.
    pub type_decl: String,
    pub name: Option<String>,
    pub default_value: Option<String>,
}

impl Param {
    pub fn new(type_decl: impl Into<String>) -> Self {
        Self {
            type_decl: type_decl.into(),
            name: None,
            default_value: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// A registered function of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub namespace: String,
    /// Owning object type for methods and behaviours.
    pub object_name: Option<String>,
    /// `None` for constructors and destructors.
    pub return_type: Option<String>,
    pub params: Vec<Param>,
    pub is_const: bool,
}

impl FunctionEntry {
    pub fn new(return_type: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            object_name: None,
            return_type: return_type.map(str::to_string),
            params: Vec::new(),
            is_const: false,
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn on_object(mut self, object: impl Into<String>) -> Self {
        self.object_name = Some(object.into());
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }
}

impl FunctionInfo for FunctionEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn declaration(&self, options: DeclarationOptions) -> String {
        declaration::function_declaration(self, options)
    }
}

/// A property of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    pub type_decl: String,
    pub name: String,
}

impl PropertyEntry {
    pub fn new(type_decl: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_decl: type_decl.into(),
            name: name.into(),
        }
    }
}

/// Registration payload for an object type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectTypeEntry {
    pub namespace: String,
    pub name: String,
    /// Template parameter names, e.g. `T` for `array<T>`.
    pub sub_types: Vec<String>,
    pub behaviours: Vec<(Behaviour, FunctionEntry)>,
    pub methods: Vec<FunctionEntry>,
    pub properties: Vec<PropertyEntry>,
    /// Signatures of funcdefs declared as children of this type.
    pub funcdefs: Vec<FunctionEntry>,
}

impl ObjectTypeEntry {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_type(mut self, name: impl Into<String>) -> Self {
        self.sub_types.push(name.into());
        self
    }

    /// Add a behaviour. Constructors and destructors should be registered without a return
    /// type; their name defaults to the type name (`~Name` for destructors) when left empty.
    pub fn with_behaviour(mut self, kind: Behaviour, func: FunctionEntry) -> Self {
        self.behaviours.push((kind, func));
        self
    }

    pub fn with_method(mut self, func: FunctionEntry) -> Self {
        self.methods.push(func);
        self
    }

    pub fn with_property(mut self, property: PropertyEntry) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_funcdef(mut self, signature: FunctionEntry) -> Self {
        self.funcdefs.push(signature);
        self
    }
}

// ============================================================================
// Type table
// ============================================================================

#[derive(Debug, Clone)]
enum TypeKind {
    Primitive,
    TemplateParam,
    Enum { values: Vec<String> },
    Object(ObjectData),
    Typedef { target: TypeId },
    Funcdef { signature: FunctionEntry },
}

#[derive(Debug, Clone)]
struct ObjectData {
    sub_types: Vec<TypeEntry>,
    behaviours: Vec<(Behaviour, FunctionEntry)>,
    methods: Vec<FunctionEntry>,
    properties: Vec<PropertyEntry>,
    child_funcdefs: Vec<TypeEntry>,
}

#[derive(Debug, Clone)]
struct TypeEntry {
    name: String,
    namespace: String,
    kind: TypeKind,
}

impl TypeEntry {
    fn object(&self) -> Option<&ObjectData> {
        match &self.kind {
            TypeKind::Object(data) => Some(data),
            _ => None,
        }
    }
}

impl TypeInfo for TypeEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn enum_value_count(&self) -> usize {
        match &self.kind {
            TypeKind::Enum { values } => values.len(),
            _ => 0,
        }
    }

    fn enum_value_by_index(&self, index: usize) -> Option<&str> {
        match &self.kind {
            TypeKind::Enum { values } => values.get(index).map(String::as_str),
            _ => None,
        }
    }

    fn sub_type_count(&self) -> usize {
        self.object().map_or(0, |o| o.sub_types.len())
    }

    fn sub_type(&self, index: usize) -> Option<&dyn TypeInfo> {
        let sub = self.object()?.sub_types.get(index)?;
        Some(sub)
    }

    fn behaviour_count(&self) -> usize {
        self.object().map_or(0, |o| o.behaviours.len())
    }

    fn behaviour_by_index(&self, index: usize) -> Option<(Behaviour, &dyn FunctionInfo)> {
        let (kind, func) = self.object()?.behaviours.get(index)?;
        let func: &dyn FunctionInfo = func;
        Some((*kind, func))
    }

    fn method_count(&self) -> usize {
        self.object().map_or(0, |o| o.methods.len())
    }

    fn method_by_index(&self, index: usize) -> Option<&dyn FunctionInfo> {
        let method = self.object()?.methods.get(index)?;
        Some(method)
    }

    fn property_count(&self) -> usize {
        self.object().map_or(0, |o| o.properties.len())
    }

    fn property_declaration(&self, index: usize) -> Option<String> {
        self.object()?.properties.get(index).map(declaration::property_declaration)
    }

    fn child_funcdef_count(&self) -> usize {
        self.object().map_or(0, |o| o.child_funcdefs.len())
    }

    fn child_funcdef(&self, index: usize) -> Option<&dyn TypeInfo> {
        let child = self.object()?.child_funcdefs.get(index)?;
        Some(child)
    }

    fn funcdef_signature(&self) -> Option<&dyn FunctionInfo> {
        match &self.kind {
            TypeKind::Funcdef { signature } => Some(signature),
            _ => None,
        }
    }

    fn typedef_type_id(&self) -> Option<TypeId> {
        match &self.kind {
            TypeKind::Typedef { target } => Some(*target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct GlobalPropertyEntry {
    name: String,
    namespace: String,
    type_id: TypeId,
}

// ============================================================================
// Registry
// ============================================================================

/// Registration tables of a scripting runtime, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Every registered type, indexed by `TypeId`.
    types: Vec<TypeEntry>,
    /// Qualified name to id.
    type_by_name: HashMap<String, TypeId>,
    enums: Vec<TypeId>,
    object_types: Vec<TypeId>,
    typedefs: Vec<TypeId>,
    functions: Vec<FunctionEntry>,
    properties: Vec<GlobalPropertyEntry>,
}

fn qualified_name(namespace: &str, name: &str) -> String {
    declaration::type_declaration(namespace, name, true)
}

fn require_name(name: &str, kind: &'static str) -> Result<(), RegistrationError> {
    if name.is_empty() {
        return Err(RegistrationError::EmptyName { kind });
    }
    Ok(())
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with [`PRIMITIVES`] pre-registered.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        for name in PRIMITIVES {
            registry.insert_type(String::new(), (*name).to_string(), TypeKind::Primitive);
        }
        registry
    }

    /// Look up a type id by qualified name (`ns::Name`).
    pub fn type_id(&self, qualified: &str) -> Option<TypeId> {
        self.type_by_name.get(qualified).copied()
    }

    fn insert_type(&mut self, namespace: String, name: String, kind: TypeKind) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.type_by_name.insert(qualified_name(&namespace, &name), id);
        self.types.push(TypeEntry { name, namespace, kind });
        id
    }

    fn check_new_type(&self, namespace: &str, name: &str, kind: &'static str) -> Result<(), RegistrationError> {
        require_name(name, kind)?;
        let qualified = qualified_name(namespace, name);
        if self.type_by_name.contains_key(&qualified) {
            return Err(RegistrationError::DuplicateType(qualified));
        }
        Ok(())
    }

    /// Resolve a type name as seen from `namespace`: the namespace-relative name wins, then the
    /// name as written.
    fn resolve_type(&self, namespace: &str, type_name: &str, referenced_by: &str) -> Result<TypeId, RegistrationError> {
        if !namespace.is_empty() {
            if let Some(id) = self.type_id(&qualified_name(namespace, type_name)) {
                return Ok(id);
            }
        }
        self.type_id(type_name).ok_or_else(|| RegistrationError::UnknownType {
            name: type_name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    /// Register a value type such as `string` that has no members worth describing.
    pub fn register_primitive(&mut self, name: &str) -> Result<TypeId, RegistrationError> {
        self.check_new_type("", name, "primitive")?;
        Ok(self.insert_type(String::new(), name.to_string(), TypeKind::Primitive))
    }

    pub fn register_enum<I, S>(&mut self, namespace: &str, name: &str, values: I) -> Result<TypeId, RegistrationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check_new_type(namespace, name, "enum")?;
        let values = values.into_iter().map(Into::into).collect();
        let id = self.insert_type(namespace.to_string(), name.to_string(), TypeKind::Enum { values });
        self.enums.push(id);
        tracing::trace!(namespace, name, %id, "registered enum");
        Ok(id)
    }

    pub fn register_object_type(&mut self, entry: ObjectTypeEntry) -> Result<TypeId, RegistrationError> {
        self.check_new_type(&entry.namespace, &entry.name, "object type")?;
        let ObjectTypeEntry {
            namespace,
            name,
            sub_types,
            behaviours,
            methods,
            properties,
            funcdefs,
        } = entry;

        let sub_types = sub_types
            .into_iter()
            .map(|sub| TypeEntry {
                name: sub,
                namespace: String::new(),
                kind: TypeKind::TemplateParam,
            })
            .collect();

        let behaviours = behaviours
            .into_iter()
            .map(|(kind, mut func)| {
                if func.name.is_empty() {
                    func.name = match kind {
                        Behaviour::Destruct => format!("~{}", name),
                        _ => name.clone(),
                    };
                }
                func.object_name = Some(name.clone());
                (kind, func)
            })
            .collect();

        let methods = methods
            .into_iter()
            .map(|method| method.on_object(name.clone()))
            .collect::<Vec<_>>();
        for method in &methods {
            require_name(&method.name, "method")?;
        }

        let child_funcdefs = funcdefs
            .into_iter()
            .map(|signature| TypeEntry {
                name: signature.name.clone(),
                namespace: namespace.clone(),
                kind: TypeKind::Funcdef { signature },
            })
            .collect();

        let data = ObjectData {
            sub_types,
            behaviours,
            methods,
            properties,
            child_funcdefs,
        };
        tracing::trace!(namespace = %namespace, name = %name, "registered object type");
        let id = self.insert_type(namespace, name, TypeKind::Object(data));
        self.object_types.push(id);
        Ok(id)
    }

    pub fn register_global_function(&mut self, func: FunctionEntry) -> Result<(), RegistrationError> {
        require_name(&func.name, "global function")?;
        tracing::trace!(namespace = %func.namespace, name = %func.name, "registered global function");
        self.functions.push(func);
        Ok(())
    }

    /// Register a global property whose type is named by `type_name`, resolved from `namespace`.
    pub fn register_global_property(
        &mut self,
        namespace: &str,
        name: &str,
        type_name: &str,
    ) -> Result<(), RegistrationError> {
        require_name(name, "global property")?;
        let type_id = self.resolve_type(namespace, type_name, &format!("global property `{}`", name))?;
        self.register_global_property_by_id(namespace, name, type_id);
        Ok(())
    }

    /// Register a global property with a raw type id. The id is not validated, matching how a
    /// runtime may report properties whose type it can no longer describe.
    pub fn register_global_property_by_id(&mut self, namespace: &str, name: &str, type_id: TypeId) {
        self.properties.push(GlobalPropertyEntry {
            name: name.to_string(),
            namespace: namespace.to_string(),
            type_id,
        });
    }

    pub fn register_typedef(&mut self, namespace: &str, name: &str, target: &str) -> Result<TypeId, RegistrationError> {
        self.check_new_type(namespace, name, "typedef")?;
        let target = self.resolve_type(namespace, target, &format!("typedef `{}`", name))?;
        let id = self.insert_type(namespace.to_string(), name.to_string(), TypeKind::Typedef { target });
        self.typedefs.push(id);
        Ok(id)
    }

    fn type_at(&self, id: TypeId) -> Option<&TypeEntry> {
        self.types.get(id.0 as usize)
    }
}

impl Engine for Registry {
    fn enum_count(&self) -> usize {
        self.enums.len()
    }

    fn enum_by_index(&self, index: usize) -> Option<&dyn TypeInfo> {
        let entry = self.type_at(*self.enums.get(index)?)?;
        Some(entry)
    }

    fn object_type_count(&self) -> usize {
        self.object_types.len()
    }

    fn object_type_by_index(&self, index: usize) -> Option<&dyn TypeInfo> {
        let entry = self.type_at(*self.object_types.get(index)?)?;
        Some(entry)
    }

    fn global_function_count(&self) -> usize {
        self.functions.len()
    }

    fn global_function_by_index(&self, index: usize) -> Option<&dyn FunctionInfo> {
        let func = self.functions.get(index)?;
        Some(func)
    }

    fn global_property_count(&self) -> usize {
        self.properties.len()
    }

    fn global_property_by_index(&self, index: usize) -> Option<GlobalProperty<'_>> {
        self.properties.get(index).map(|p| GlobalProperty {
            name: &p.name,
            namespace: &p.namespace,
            type_id: p.type_id,
        })
    }

    fn typedef_count(&self) -> usize {
        self.typedefs.len()
    }

    fn typedef_by_index(&self, index: usize) -> Option<&dyn TypeInfo> {
        let entry = self.type_at(*self.typedefs.get(index)?)?;
        Some(entry)
    }

    fn type_info_by_id(&self, type_id: TypeId) -> Option<&dyn TypeInfo> {
        let entry = self.type_at(type_id)?;
        Some(entry)
    }

    fn type_declaration(&self, type_id: TypeId, include_namespace: bool) -> Option<String> {
        self.type_at(type_id)
            .map(|t| declaration::type_declaration(&t.namespace, &t.name, include_namespace))
    }
}
