#![forbid(unsafe_code)]
//! `as.predefined` generator
//!
//! Walks an AngelScript-style runtime through the [`as_reflect::Engine`] traits and renders
//! every registered enum, object type, global function, global property and typedef as a
//! declaration header that script editors and language servers can consume.
//!
//! ```
//! use as_predefined::{FormatProfile, dump};
//! use as_reflect::Registry;
//!
//! let mut registry = Registry::with_primitives();
//! registry.register_enum("Graphics", "Color", ["RED", "GREEN"]).unwrap();
//!
//! let text = dump(&registry, &FormatProfile::verbose());
//! assert_eq!(text, "namespace Graphics {\nenum Color {\n\tRED,\n\tGREEN\n}\n}\n");
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! The dump itself never fails: entities the runtime cannot describe are skipped.

pub mod cli;
pub mod dump;

pub use dump::{EntityKind, FormatProfile, IndentStyle, check_dump, dump, dump_diff, dump_kinds, text_diff};
