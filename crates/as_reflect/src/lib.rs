#![forbid(unsafe_code)]
//! Reflection boundary for AngelScript-style scripting runtimes.
//!
//! A scripting runtime exposes its registration tables (enums, object types, global
//! functions, global properties, typedefs) through count + get-by-index accessors. This crate
//! captures that capability set as the [`Engine`], [`TypeInfo`] and [`FunctionInfo`] traits so
//! tooling can walk any runtime that implements them.
//!
//! It also ships [`Registry`], an in-memory runtime that can be populated from Rust or loaded
//! from a JSON snapshot (see [`snapshot`]). Hosts that embed a real engine implement the traits
//! directly over their engine handle instead.
//!
//! ## Absence
//!
//! Every index-based accessor returns `Option`. A runtime may legitimately report a count and
//! then fail to produce an entity for some index; callers must treat `None` as "skip this one".

pub mod declaration;
pub mod engine;
pub mod error;
pub mod registry;
pub mod snapshot;

pub use engine::{Behaviour, DeclarationOptions, Engine, FunctionInfo, GlobalProperty, TypeId, TypeInfo};
pub use error::RegistrationError;
pub use registry::{FunctionEntry, ObjectTypeEntry, Param, PropertyEntry, Registry};
pub use snapshot::RegistrySnapshot;
