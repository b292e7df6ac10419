//! Declaration rendering for registry entries
//!
//! This is the runtime side of the boundary: the text a scripting engine would produce when
//! asked for a function, property or type declaration. Tooling consumes these strings verbatim.

use crate::engine::DeclarationOptions;
use crate::registry::{FunctionEntry, Param, PropertyEntry};

/// Render `[ret ]ns::Obj::name(params)[ const]`.
pub fn function_declaration(func: &FunctionEntry, options: DeclarationOptions) -> String {
    let mut out = String::new();

    // Constructors and destructors carry no return type.
    if let Some(return_type) = &func.return_type {
        out.push_str(return_type);
        out.push(' ');
    }

    if options.include_namespace && !func.namespace.is_empty() {
        out.push_str(&func.namespace);
        out.push_str("::");
    }
    if options.include_object_name {
        if let Some(object) = &func.object_name {
            out.push_str(object);
            out.push_str("::");
        }
    }
    out.push_str(&func.name);

    out.push('(');
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&param_declaration(param, options.include_param_names));
    }
    out.push(')');

    if func.is_const {
        out.push_str(" const");
    }
    out
}

fn param_declaration(param: &Param, include_name: bool) -> String {
    let mut out = param.type_decl.clone();
    if include_name {
        if let Some(name) = param.name.as_deref().filter(|n| !n.is_empty()) {
            out.push(' ');
            out.push_str(name);
        }
    }
    if let Some(default) = &param.default_value {
        out.push_str(" = ");
        out.push_str(default);
    }
    out
}

/// Render `type name` for an object property.
pub fn property_declaration(property: &PropertyEntry) -> String {
    format!("{} {}", property.type_decl, property.name)
}

/// Render a type name, optionally qualified with its namespace.
pub fn type_declaration(namespace: &str, name: &str, include_namespace: bool) -> String {
    if include_namespace && !namespace.is_empty() {
        format!("{}::{}", namespace, name)
    } else {
        name.to_string()
    }
}
