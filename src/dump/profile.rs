//! Formatting profiles
//!
//! A profile is the single configuration value threaded through the walker, the formatter and
//! the orchestrator. Two presets reproduce the two established `as.predefined` shapes:
//! [`FormatProfile::verbose`] and [`FormatProfile::condensed`].

use as_reflect::DeclarationOptions;

use super::EntityKind;

/// Formatting profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatProfile {
    /// Emit parameter names in function, method and behaviour declarations
    pub include_parameter_names: bool,
    /// Render global property types through the runtime's full, namespace-qualified type
    /// declaration instead of the bare type name
    pub include_default_decoration: bool,
    /// Emit `funcdef` lines for child funcdefs of object types
    pub include_child_signatures: bool,
    /// Emit the typedef section
    pub include_type_aliases: bool,
    /// Indentation of members inside `enum` and `class` bodies
    pub indent: IndentStyle,
}

/// Indentation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Tab,
    Spaces(usize),
}

impl IndentStyle {
    /// One level of indentation as text
    pub fn unit(self) -> String {
        match self {
            IndentStyle::Tab => "\t".to_string(),
            IndentStyle::Spaces(width) => " ".repeat(width),
        }
    }
}

impl Default for FormatProfile {
    fn default() -> Self {
        Self::verbose()
    }
}

impl FormatProfile {
    /// Create a new profile with default settings (the verbose preset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameter names, decorated types, funcdefs and typedefs
    pub fn verbose() -> Self {
        Self {
            include_parameter_names: true,
            include_default_decoration: true,
            include_child_signatures: true,
            include_type_aliases: true,
            indent: IndentStyle::Tab,
        }
    }

    /// Bare signatures only; no funcdefs, no typedefs
    pub fn condensed() -> Self {
        Self {
            include_parameter_names: false,
            include_default_decoration: false,
            include_child_signatures: false,
            include_type_aliases: false,
            indent: IndentStyle::Tab,
        }
    }

    pub fn with_parameter_names(mut self, include: bool) -> Self {
        self.include_parameter_names = include;
        self
    }

    pub fn with_default_decoration(mut self, include: bool) -> Self {
        self.include_default_decoration = include;
        self
    }

    pub fn with_child_signatures(mut self, include: bool) -> Self {
        self.include_child_signatures = include;
        self
    }

    pub fn with_type_aliases(mut self, include: bool) -> Self {
        self.include_type_aliases = include;
        self
    }

    /// Set the indentation unit
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Entity kinds this profile dumps, in dump order
    pub fn kinds(&self) -> Vec<EntityKind> {
        EntityKind::ALL
            .iter()
            .copied()
            .filter(|kind| *kind != EntityKind::TypeAliases || self.include_type_aliases)
            .collect()
    }

    /// Renderer switches for behaviours and methods of object types
    pub(crate) fn member_declaration(&self) -> DeclarationOptions {
        DeclarationOptions::new()
            .with_namespace(true)
            .with_param_names(self.include_parameter_names)
    }

    /// Renderer switches for global functions; the namespace comes from the wrapper instead
    pub(crate) fn global_declaration(&self) -> DeclarationOptions {
        DeclarationOptions::new().with_param_names(self.include_parameter_names)
    }
}
