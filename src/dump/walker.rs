//! Metadata walker
//!
//! Reads the runtime's registration tables by index, in the runtime's own order, and turns each
//! entry into a descriptor. Nothing is sorted. Entries the runtime cannot produce (a `None`
//! handle, an empty declaration, a type that does not resolve) are skipped and logged at
//! `debug`; the walk itself never fails.

use as_reflect::{Engine, TypeInfo};

use super::descriptor::{
    EnumDescriptor, GlobalFunctionDescriptor, GlobalPropertyDescriptor, ObjectTypeDescriptor, TypeAliasDescriptor,
};
use super::profile::FormatProfile;

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// Enums in registration order.
#[tracing::instrument(skip_all, fields(count = engine.enum_count()))]
pub fn list_enums(engine: &dyn Engine) -> Vec<EnumDescriptor> {
    let mut enums = Vec::new();
    for i in 0..engine.enum_count() {
        let Some(info) = engine.enum_by_index(i) else {
            tracing::debug!(index = i, "skipping missing enum");
            continue;
        };
        let values = (0..info.enum_value_count())
            .filter_map(|j| {
                let value = info.enum_value_by_index(j).filter(|v| !v.is_empty());
                if value.is_none() {
                    tracing::debug!(enum_name = info.name(), index = j, "skipping missing enum value");
                }
                value.map(str::to_string)
            })
            .collect();
        enums.push(EnumDescriptor {
            namespace: info.namespace().to_string(),
            name: info.name().to_string(),
            values,
        });
    }
    enums
}

/// Object types in registration order.
#[tracing::instrument(skip_all, fields(count = engine.object_type_count()))]
pub fn list_object_types(engine: &dyn Engine, profile: &FormatProfile) -> Vec<ObjectTypeDescriptor> {
    let mut types = Vec::new();
    for i in 0..engine.object_type_count() {
        match engine.object_type_by_index(i) {
            Some(info) => types.push(describe_object_type(info, profile)),
            None => tracing::debug!(index = i, "skipping missing object type"),
        }
    }
    types
}

fn describe_object_type(info: &dyn TypeInfo, profile: &FormatProfile) -> ObjectTypeDescriptor {
    let name = info.name();
    let options = profile.member_declaration();

    let sub_types = (0..info.sub_type_count())
        .filter_map(|j| info.sub_type(j).map(|t| t.name().to_string()))
        .collect();

    let mut special_members = Vec::new();
    for j in 0..info.behaviour_count() {
        match info.behaviour_by_index(j) {
            Some((kind, func)) if kind.is_special_member() => {
                if let Some(decl) = non_empty(func.declaration(options)) {
                    special_members.push(decl);
                }
            }
            Some((kind, _)) => tracing::trace!(owner = name, ?kind, "behaviour not rendered"),
            None => tracing::debug!(owner = name, index = j, "skipping missing behaviour"),
        }
    }

    let methods = (0..info.method_count())
        .filter_map(|j| {
            let decl = info.method_by_index(j).and_then(|m| non_empty(m.declaration(options)));
            if decl.is_none() {
                tracing::debug!(owner = name, index = j, "skipping missing method");
            }
            decl
        })
        .collect();

    let properties = (0..info.property_count())
        .filter_map(|j| {
            let decl = info.property_declaration(j).and_then(non_empty);
            if decl.is_none() {
                tracing::debug!(owner = name, index = j, "skipping missing property");
            }
            decl
        })
        .collect();

    // Funcdef signatures never carry parameter names.
    let child_signatures = (0..info.child_funcdef_count())
        .filter_map(|j| {
            let signature = info.child_funcdef(j)?.funcdef_signature()?;
            non_empty(signature.declaration(Default::default()))
        })
        .collect();

    ObjectTypeDescriptor {
        namespace: info.namespace().to_string(),
        name: name.to_string(),
        sub_types,
        special_members,
        methods,
        properties,
        child_signatures,
    }
}

/// Global functions in registration order.
#[tracing::instrument(skip_all, fields(count = engine.global_function_count()))]
pub fn list_global_functions(engine: &dyn Engine, profile: &FormatProfile) -> Vec<GlobalFunctionDescriptor> {
    let options = profile.global_declaration();
    let mut functions = Vec::new();
    for i in 0..engine.global_function_count() {
        let Some(func) = engine.global_function_by_index(i) else {
            tracing::debug!(index = i, "skipping missing global function");
            continue;
        };
        let Some(declaration) = non_empty(func.declaration(options)) else {
            tracing::debug!(index = i, name = func.name(), "skipping global function without declaration");
            continue;
        };
        functions.push(GlobalFunctionDescriptor {
            namespace: func.namespace().to_string(),
            name: func.name().to_string(),
            declaration,
        });
    }
    functions
}

/// Global properties in registration order, minus those whose type does not resolve.
///
/// With default decoration the type is the runtime's namespace-qualified type declaration;
/// without it, the bare name of the resolved type.
#[tracing::instrument(skip_all, fields(count = engine.global_property_count()))]
pub fn list_global_properties(engine: &dyn Engine, profile: &FormatProfile) -> Vec<GlobalPropertyDescriptor> {
    let mut properties = Vec::new();
    for i in 0..engine.global_property_count() {
        let Some(prop) = engine.global_property_by_index(i) else {
            tracing::debug!(index = i, "skipping missing global property");
            continue;
        };
        let type_name = if profile.include_default_decoration {
            engine.type_declaration(prop.type_id, true)
        } else {
            engine.type_info_by_id(prop.type_id).map(|t| t.name().to_string())
        };
        let Some(type_name) = type_name.and_then(non_empty) else {
            tracing::debug!(name = prop.name, type_id = %prop.type_id, "dropping global property with unresolvable type");
            continue;
        };
        properties.push(GlobalPropertyDescriptor {
            namespace: prop.namespace.to_string(),
            name: prop.name.to_string(),
            type_name,
        });
    }
    properties
}

/// Typedefs in registration order, minus those whose target does not resolve.
#[tracing::instrument(skip_all, fields(count = engine.typedef_count()))]
pub fn list_type_aliases(engine: &dyn Engine) -> Vec<TypeAliasDescriptor> {
    let mut aliases = Vec::new();
    for i in 0..engine.typedef_count() {
        let Some(info) = engine.typedef_by_index(i) else {
            tracing::debug!(index = i, "skipping missing typedef");
            continue;
        };
        let target = info
            .typedef_type_id()
            .and_then(|id| engine.type_declaration(id, false))
            .and_then(non_empty);
        let Some(target) = target else {
            tracing::debug!(name = info.name(), "dropping typedef with unresolvable target");
            continue;
        };
        aliases.push(TypeAliasDescriptor {
            namespace: info.namespace().to_string(),
            name: info.name().to_string(),
            target,
        });
    }
    aliases
}
