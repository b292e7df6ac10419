//! Test double for runtimes that report holes in their tables

use std::collections::HashMap;

use as_reflect::{Behaviour, DeclarationOptions, Engine, FunctionInfo, GlobalProperty, TypeId, TypeInfo};

/// Function whose declaration is `ret name(type name, ...)`.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFn {
    pub name: String,
    pub namespace: String,
    pub ret: Option<String>,
    pub params: Vec<(String, String)>,
}

impl FakeFn {
    pub fn new(ret: &str, name: &str, params: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            namespace: String::new(),
            ret: (!ret.is_empty()).then(|| ret.to_string()),
            params: params.iter().map(|(t, n)| (t.to_string(), n.to_string())).collect(),
        }
    }

    pub fn in_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }
}

impl FunctionInfo for FakeFn {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn declaration(&self, options: DeclarationOptions) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|(t, n)| if options.include_param_names { format!("{} {}", t, n) } else { t.clone() })
            .collect();
        match &self.ret {
            Some(ret) => format!("{} {}({})", ret, self.name, params.join(", ")),
            None => format!("{}({})", self.name, params.join(", ")),
        }
    }
}

/// Type whose member tables may contain `None` slots.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeType {
    pub name: String,
    pub namespace: String,
    pub values: Vec<Option<String>>,
    pub sub_types: Vec<Option<FakeType>>,
    pub behaviours: Vec<Option<(Behaviour, FakeFn)>>,
    pub methods: Vec<Option<FakeFn>>,
    pub properties: Vec<Option<String>>,
    pub children: Vec<Option<FakeType>>,
    pub signature: Option<FakeFn>,
    pub target: Option<TypeId>,
}

impl FakeType {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            ..Self::default()
        }
    }
}

impl TypeInfo for FakeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn enum_value_count(&self) -> usize {
        self.values.len()
    }

    fn enum_value_by_index(&self, index: usize) -> Option<&str> {
        self.values.get(index)?.as_deref()
    }

    fn sub_type_count(&self) -> usize {
        self.sub_types.len()
    }

    fn sub_type(&self, index: usize) -> Option<&dyn TypeInfo> {
        let sub = self.sub_types.get(index)?.as_ref()?;
        Some(sub)
    }

    fn behaviour_count(&self) -> usize {
        self.behaviours.len()
    }

    fn behaviour_by_index(&self, index: usize) -> Option<(Behaviour, &dyn FunctionInfo)> {
        let (kind, func) = self.behaviours.get(index)?.as_ref()?;
        let func: &dyn FunctionInfo = func;
        Some((*kind, func))
    }

    fn method_count(&self) -> usize {
        self.methods.len()
    }

    fn method_by_index(&self, index: usize) -> Option<&dyn FunctionInfo> {
        let method = self.methods.get(index)?.as_ref()?;
        Some(method)
    }

    fn property_count(&self) -> usize {
        self.properties.len()
    }

    fn property_declaration(&self, index: usize) -> Option<String> {
        self.properties.get(index)?.clone()
    }

    fn child_funcdef_count(&self) -> usize {
        self.children.len()
    }

    fn child_funcdef(&self, index: usize) -> Option<&dyn TypeInfo> {
        let child = self.children.get(index)?.as_ref()?;
        Some(child)
    }

    fn funcdef_signature(&self) -> Option<&dyn FunctionInfo> {
        let signature = self.signature.as_ref()?;
        Some(signature)
    }

    fn typedef_type_id(&self) -> Option<TypeId> {
        self.target
    }
}

/// Engine whose tables may contain `None` slots.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeEngine {
    pub enums: Vec<Option<FakeType>>,
    pub object_types: Vec<Option<FakeType>>,
    pub functions: Vec<Option<FakeFn>>,
    pub properties: Vec<Option<(String, String, TypeId)>>,
    pub typedefs: Vec<Option<FakeType>>,
    pub types: HashMap<TypeId, FakeType>,
}

impl FakeEngine {
    pub fn with_type(mut self, id: u32, namespace: &str, name: &str) -> Self {
        self.types.insert(TypeId(id), FakeType::new(namespace, name));
        self
    }

    pub fn with_property(mut self, namespace: &str, name: &str, type_id: u32) -> Self {
        self.properties
            .push(Some((namespace.to_string(), name.to_string(), TypeId(type_id))));
        self
    }
}

impl Engine for FakeEngine {
    fn enum_count(&self) -> usize {
        self.enums.len()
    }

    fn enum_by_index(&self, index: usize) -> Option<&dyn TypeInfo> {
        let e = self.enums.get(index)?.as_ref()?;
        Some(e)
    }

    fn object_type_count(&self) -> usize {
        self.object_types.len()
    }

    fn object_type_by_index(&self, index: usize) -> Option<&dyn TypeInfo> {
        let t = self.object_types.get(index)?.as_ref()?;
        Some(t)
    }

    fn global_function_count(&self) -> usize {
        self.functions.len()
    }

    fn global_function_by_index(&self, index: usize) -> Option<&dyn FunctionInfo> {
        let f = self.functions.get(index)?.as_ref()?;
        Some(f)
    }

    fn global_property_count(&self) -> usize {
        self.properties.len()
    }

    fn global_property_by_index(&self, index: usize) -> Option<GlobalProperty<'_>> {
        let (namespace, name, type_id) = self.properties.get(index)?.as_ref()?;
        Some(GlobalProperty {
            name,
            namespace,
            type_id: *type_id,
        })
    }

    fn typedef_count(&self) -> usize {
        self.typedefs.len()
    }

    fn typedef_by_index(&self, index: usize) -> Option<&dyn TypeInfo> {
        let t = self.typedefs.get(index)?.as_ref()?;
        Some(t)
    }

    fn type_info_by_id(&self, type_id: TypeId) -> Option<&dyn TypeInfo> {
        let t = self.types.get(&type_id)?;
        Some(t)
    }

    fn type_declaration(&self, type_id: TypeId, include_namespace: bool) -> Option<String> {
        let t = self.types.get(&type_id)?;
        if include_namespace && !t.namespace.is_empty() {
            Some(format!("{}::{}", t.namespace, t.name))
        } else {
            Some(t.name.clone())
        }
    }
}
