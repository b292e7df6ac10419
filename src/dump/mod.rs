//! Declaration dump
//!
//! Walks a runtime's registration tables and renders them as an `as.predefined` header:
//! - enums, object types, global functions, global properties, typedefs, in that order
//! - registration order within each kind, never sorted
//! - one `namespace` wrapper per run of equal namespaces
//!
//! The whole dump is built in one pass and returned as a single string. Entities the runtime
//! cannot describe are skipped; nothing here fails.

pub mod descriptor;
pub mod formatter;
pub mod grouper;
mod profile;
pub mod walker;
mod writer;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

use as_reflect::Engine;

pub use formatter::Formatter;
pub use grouper::WrapStyle;
pub use profile::{FormatProfile, IndentStyle};

use descriptor::Entity;

/// The entity kinds of a dump, in dump order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Enums,
    ObjectTypes,
    GlobalFunctions,
    GlobalProperties,
    TypeAliases,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Enums,
        EntityKind::ObjectTypes,
        EntityKind::GlobalFunctions,
        EntityKind::GlobalProperties,
        EntityKind::TypeAliases,
    ];

    /// Namespace wrapper layout used for this kind.
    pub fn wrap_style(self) -> WrapStyle {
        match self {
            EntityKind::Enums | EntityKind::ObjectTypes => WrapStyle::Block,
            EntityKind::GlobalFunctions | EntityKind::GlobalProperties | EntityKind::TypeAliases => {
                WrapStyle::Inline
            }
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Enums => "enums",
            EntityKind::ObjectTypes => "object types",
            EntityKind::GlobalFunctions => "global functions",
            EntityKind::GlobalProperties => "global properties",
            EntityKind::TypeAliases => "typedefs",
        };
        f.write_str(label)
    }
}

/// Dump every kind the profile covers
pub fn dump(engine: &dyn Engine, profile: &FormatProfile) -> String {
    dump_kinds(engine, profile, &profile.kinds())
}

/// Dump a subset of kinds; the output keeps the fixed kind order regardless of `kinds` order
#[tracing::instrument(skip_all, fields(kinds = kinds.len()))]
pub fn dump_kinds(engine: &dyn Engine, profile: &FormatProfile, kinds: &[EntityKind]) -> String {
    let formatter = Formatter::new(profile);
    let mut out = String::new();
    for kind in EntityKind::ALL {
        if kinds.contains(&kind) {
            out.push_str(&dump_kind(engine, &formatter, kind));
        }
    }
    out
}

fn dump_kind(engine: &dyn Engine, formatter: &Formatter<'_>, kind: EntityKind) -> String {
    let profile = formatter.profile();
    match kind {
        EntityKind::Enums => render(&walker::list_enums(engine), |e| formatter.format_enum(e)),
        EntityKind::ObjectTypes => render(&walker::list_object_types(engine, profile), |t| {
            formatter.format_object_type(t)
        }),
        EntityKind::GlobalFunctions => render(&walker::list_global_functions(engine, profile), |f| {
            formatter.format_global_function(f)
        }),
        EntityKind::GlobalProperties => render(&walker::list_global_properties(engine, profile), |p| {
            formatter.format_global_property(p)
        }),
        EntityKind::TypeAliases => render(&walker::list_type_aliases(engine), |a| formatter.format_type_alias(a)),
    }
}

fn render<D: Entity>(descriptors: &[D], format: impl Fn(&D) -> String) -> String {
    tracing::debug!(kind = %D::KIND, count = descriptors.len(), "rendering declarations");
    grouper::group(
        descriptors.iter().map(|d| {
            tracing::trace!(namespace = d.namespace(), name = d.name(), "formatting declaration");
            (d.namespace(), format(d))
        }),
        D::KIND.wrap_style(),
    )
}

/// Check whether `existing` already matches a fresh dump
pub fn check_dump(engine: &dyn Engine, profile: &FormatProfile, existing: &str) -> bool {
    dump(engine, profile) == existing
}

/// Get the diff between `existing` and a fresh dump
pub fn dump_diff(engine: &dyn Engine, profile: &FormatProfile, existing: &str) -> Option<String> {
    text_diff(existing, &dump(engine, profile))
}

/// Line-by-line diff of `old` against `new`; `None` when the texts are byte-identical.
///
/// Lines keep their terminators when compared, so line-ending and final-newline changes show
/// up: a trailing `\r` is printed as `\r` and a missing final newline gets a marker line.
pub fn text_diff(old: &str, new: &str) -> Option<String> {
    if old == new {
        return None;
    }

    let mut diff = String::new();
    let old_lines: Vec<&str> = old.split_inclusive('\n').collect();
    let new_lines: Vec<&str> = new.split_inclusive('\n').collect();

    for i in 0..old_lines.len().max(new_lines.len()) {
        let old = old_lines.get(i).copied();
        let new = new_lines.get(i).copied();
        if old == new {
            continue;
        }
        if let Some(old) = old {
            diff.push_str(&format!("-{:4} | {}\n", i + 1, display_line(old)));
        }
        if let Some(new) = new {
            diff.push_str(&format!("+{:4} | {}\n", i + 1, display_line(new)));
        }
    }

    Some(diff)
}

fn display_line(line: &str) -> String {
    let Some(body) = line.strip_suffix('\n') else {
        return format!("{}\n\\ No newline at end of file", line);
    };
    match body.strip_suffix('\r') {
        Some(body) => format!("{}\\r", body),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use as_reflect::{Behaviour, FunctionEntry, ObjectTypeEntry, Param, PropertyEntry, Registry};

    use super::testing::{FakeEngine, FakeFn, FakeType};
    use super::*;

    fn registry() -> Registry {
        let mut registry = Registry::with_primitives();
        registry.register_enum("Graphics", "Color", ["RED", "GREEN", "BLUE"]).unwrap();
        registry
            .register_object_type(
                ObjectTypeEntry::new("", "Point")
                    .with_property(PropertyEntry::new("int", "x"))
                    .with_property(PropertyEntry::new("int", "y")),
            )
            .unwrap();
        registry
            .register_object_type(
                ObjectTypeEntry::new("", "array")
                    .with_sub_type("T")
                    .with_method(
                        FunctionEntry::new(Some("void"), "insertLast").with_param(Param::new("const T&in").named("value")),
                    )
                    .with_funcdef(FunctionEntry::new(Some("bool"), "less").with_param(Param::new("const T&in").named("a"))),
            )
            .unwrap();
        registry
            .register_global_function(FunctionEntry::new(Some("void"), "update").with_param(Param::new("int").named("dt")))
            .unwrap();
        registry.register_global_property("", "score", "int").unwrap();
        registry.register_typedef("", "real", "double").unwrap();
        registry
    }

    // ========================================
    // Examples
    // ========================================

    #[test]
    fn test_enum_in_namespace() {
        let mut registry = Registry::new();
        registry.register_enum("Graphics", "Color", ["RED", "GREEN", "BLUE"]).unwrap();
        let text = dump(&registry, &FormatProfile::verbose());
        assert_eq!(text, "namespace Graphics {\nenum Color {\n\tRED,\n\tGREEN,\n\tBLUE\n}\n}\n");
    }

    #[test]
    fn test_plain_class() {
        let mut registry = Registry::new();
        registry
            .register_object_type(
                ObjectTypeEntry::new("", "Point")
                    .with_property(PropertyEntry::new("int", "x"))
                    .with_property(PropertyEntry::new("int", "y")),
            )
            .unwrap();
        let text = dump(&registry, &FormatProfile::condensed());
        assert_eq!(text, "class Point{\n\tint x;\n\tint y;\n}\n");
    }

    #[test]
    fn test_condensed_global_function() {
        let mut registry = Registry::new();
        registry
            .register_global_function(FunctionEntry::new(Some("void"), "update").with_param(Param::new("int").named("dt")))
            .unwrap();
        assert_eq!(dump(&registry, &FormatProfile::condensed()), "void update(int);\n");
        assert_eq!(dump(&registry, &FormatProfile::verbose()), "void update(int dt);\n");
    }

    // ========================================
    // Orchestration tests
    // ========================================

    #[test]
    fn test_kind_order() {
        let text = dump(&registry(), &FormatProfile::verbose());
        let positions: Vec<usize> = ["enum Color", "class Point", "void update", "int score", "typedef double real"]
            .iter()
            .map(|needle| text.find(needle).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_profile_difference() {
        let registry = registry();
        let verbose = dump(&registry, &FormatProfile::verbose());
        let condensed = dump(&registry, &FormatProfile::condensed());

        assert!(verbose.contains("\tvoid insertLast(const T&in value);\n"));
        assert!(verbose.contains("\tfuncdef bool less(const T&in);\n"));
        assert!(verbose.contains("typedef double real;\n"));

        assert!(condensed.contains("\tvoid insertLast(const T&in);\n"));
        assert!(!condensed.contains("funcdef"));
        assert!(!condensed.contains("typedef"));
    }

    #[test]
    fn test_dump_kinds_subset_keeps_fixed_order() {
        let registry = registry();
        let profile = FormatProfile::verbose();
        let text = dump_kinds(&registry, &profile, &[EntityKind::TypeAliases, EntityKind::Enums]);
        assert!(text.starts_with("namespace Graphics {\nenum Color {"));
        assert!(text.ends_with("typedef double real;\n"));
        assert!(!text.contains("class"));
    }

    #[test]
    fn test_condensed_with_type_aliases_reenabled() {
        let profile = FormatProfile::condensed().with_type_aliases(true);
        assert!(dump(&registry(), &profile).ends_with("typedef double real;\n"));
    }

    #[test]
    fn test_empty_runtime_dumps_nothing() {
        assert_eq!(dump(&Registry::with_primitives(), &FormatProfile::verbose()), "");
    }

    #[test]
    fn test_dump_is_idempotent() {
        let registry = registry();
        let profile = FormatProfile::verbose();
        assert_eq!(dump(&registry, &profile), dump(&registry, &profile));
    }

    #[test]
    fn test_global_namespaces_inline() {
        let engine = FakeEngine {
            functions: vec![
                Some(FakeFn::new("void", "a", &[]).in_namespace("game")),
                Some(FakeFn::new("void", "b", &[]).in_namespace("game")),
                Some(FakeFn::new("void", "c", &[])),
                Some(FakeFn::new("void", "d", &[]).in_namespace("game")),
            ],
            ..FakeEngine::default()
        };
        let text = dump(&engine, &FormatProfile::condensed());
        assert_eq!(text, "namespace game { void a(); void b(); }\nvoid c();\nnamespace game { void d(); }\n");
    }

    #[test]
    fn test_graceful_skip_through_dump() {
        let mut obj = FakeType::new("", "Obj");
        obj.behaviours = vec![
            None,
            Some((Behaviour::Construct, FakeFn::new("", "Obj", &[]))),
            Some((Behaviour::Factory, FakeFn::new("Obj@", "f", &[]))),
        ];
        let engine = FakeEngine {
            enums: vec![None],
            object_types: vec![None, Some(obj)],
            ..FakeEngine::default()
        }
        .with_property("", "lost", 404);

        assert_eq!(dump(&engine, &FormatProfile::verbose()), "class Obj{\n\tObj();\n}\n");
    }

    // ========================================
    // check / diff tests
    // ========================================

    #[test]
    fn test_check_dump() {
        let registry = registry();
        let profile = FormatProfile::condensed();
        let current = dump(&registry, &profile);
        assert!(check_dump(&registry, &profile, &current));
        assert!(!check_dump(&registry, &profile, "stale\n"));
    }

    #[test]
    fn test_dump_diff_none_when_current() {
        let registry = registry();
        let profile = FormatProfile::verbose();
        let current = dump(&registry, &profile);
        assert!(dump_diff(&registry, &profile, &current).is_none());
    }

    #[test]
    fn test_dump_diff_reports_changed_lines() {
        let mut registry = Registry::new();
        registry.register_enum("", "Mode", ["ON", "OFF"]).unwrap();
        let existing = "enum Mode {\n\tON\n}\n";
        let diff = dump_diff(&registry, &FormatProfile::verbose(), existing).unwrap();
        assert_eq!(diff, "-   2 | \tON\n+   2 | \tON,\n-   3 | }\n+   3 | \tOFF\n+   4 | }\n");
    }

    #[test]
    fn test_dump_diff_missing_final_newline() {
        let mut registry = Registry::new();
        registry.register_enum("", "Mode", ["ON"]).unwrap();
        let profile = FormatProfile::verbose();
        let existing = "enum Mode {\n\tON\n}";

        assert!(!check_dump(&registry, &profile, existing));
        let diff = dump_diff(&registry, &profile, existing).unwrap();
        assert_eq!(diff, "-   3 | }\n\\ No newline at end of file\n+   3 | }\n");
    }

    #[test]
    fn test_dump_diff_crlf_line_endings() {
        let mut registry = Registry::new();
        registry.register_enum("", "Mode", ["ON"]).unwrap();
        let profile = FormatProfile::verbose();
        let existing = "enum Mode {\r\n\tON\r\n}\r\n";

        assert!(!check_dump(&registry, &profile, existing));
        let diff = dump_diff(&registry, &profile, existing).unwrap();
        assert_eq!(
            diff,
            "-   1 | enum Mode {\\r\n+   1 | enum Mode {\n\
             -   2 | \tON\\r\n+   2 | \tON\n\
             -   3 | }\\r\n+   3 | }\n"
        );
    }

    #[test]
    fn test_text_diff_never_empty_when_texts_differ() {
        for (old, new) in [("a\n", "a"), ("a", "a\n"), ("a\r\n", "a\n"), ("", "a\n")] {
            let diff = text_diff(old, new).unwrap();
            assert!(!diff.is_empty(), "{:?} vs {:?}", old, new);
        }
        assert!(text_diff("a\n", "a\n").is_none());
    }

    // ========================================
    // EntityKind tests
    // ========================================

    #[test]
    fn test_wrap_styles() {
        assert_eq!(EntityKind::Enums.wrap_style(), WrapStyle::Block);
        assert_eq!(EntityKind::ObjectTypes.wrap_style(), WrapStyle::Block);
        assert_eq!(EntityKind::GlobalFunctions.wrap_style(), WrapStyle::Inline);
        assert_eq!(EntityKind::GlobalProperties.wrap_style(), WrapStyle::Inline);
        assert_eq!(EntityKind::TypeAliases.wrap_style(), WrapStyle::Inline);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::ObjectTypes.to_string(), "object types");
        assert_eq!(EntityKind::TypeAliases.to_string(), "typedefs");
    }
}
