//! Declaration formatter
//!
//! Renders one descriptor into declaration text. Block entities (`enum`, `class`) end with a
//! newline; single-line entities do not, the grouper decides how lines are joined.

use super::descriptor::{
    EnumDescriptor, GlobalFunctionDescriptor, GlobalPropertyDescriptor, ObjectTypeDescriptor, TypeAliasDescriptor,
};
use super::profile::FormatProfile;
use super::writer::DeclWriter;

/// Formatter that turns descriptors into declaration text
pub struct Formatter<'p> {
    profile: &'p FormatProfile,
}

impl<'p> Formatter<'p> {
    /// Create a new formatter for the given profile
    pub fn new(profile: &'p FormatProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &FormatProfile {
        self.profile
    }

    fn writer(&self) -> DeclWriter {
        DeclWriter::new(self.profile.indent)
    }

    // ========================================================================
    // Block entities
    // ========================================================================

    /// ```text
    /// enum Color {
    ///     RED,
    ///     BLUE
    /// }
    /// ```
    pub fn format_enum(&self, e: &EnumDescriptor) -> String {
        let mut w = self.writer();
        w.writeln(&format!("enum {} {{", e.name));
        w.indent();
        w.write_list(&e.values, ",", "");
        w.dedent();
        w.writeln("}");
        w.finish()
    }

    /// ```text
    /// class array<T>{
    ///     array();
    ///     uint length() const;
    ///     int capacity;
    ///     funcdef bool less(const T&in, const T&in);
    /// }
    /// ```
    pub fn format_object_type(&self, t: &ObjectTypeDescriptor) -> String {
        let mut w = self.writer();
        w.write("class ");
        w.write(&t.name);
        if !t.sub_types.is_empty() {
            w.write("<");
            w.write(&t.sub_types.join(", "));
            w.write(">");
        }
        w.writeln("{");

        w.indent();
        w.write_list(&t.special_members, ";", ";");
        w.write_list(&t.methods, ";", ";");
        w.write_list(&t.properties, ";", ";");
        if self.profile.include_child_signatures {
            for signature in &t.child_signatures {
                w.writeln(&format!("funcdef {};", signature));
            }
        }
        w.dedent();

        w.writeln("}");
        w.finish()
    }

    // ========================================================================
    // Single-line entities
    // ========================================================================

    pub fn format_global_function(&self, f: &GlobalFunctionDescriptor) -> String {
        format!("{};", f.declaration)
    }

    pub fn format_global_property(&self, p: &GlobalPropertyDescriptor) -> String {
        format!("{} {};", p.type_name, p.name)
    }

    pub fn format_type_alias(&self, a: &TypeAliasDescriptor) -> String {
        format!("typedef {} {};", a.target, a.name)
    }
}
