//! autointerface - project annotated C# classes into generated interfaces
//!
//! This crate provides functionality to:
//! - Walk a class and its base classes into filtered, deduplicated member facts
//! - Render types with nullability and forward references to interfaces of the same pass
//! - Assemble an ordered interface model and emit it as standalone C# source
//! - Drive a whole compilation pass with per-candidate isolation and cancellation
pub mod builder;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generator;
pub mod projection;
pub mod render;
pub mod symbols;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use builder::InterfaceModelBuilder;
pub use config::{Config, DocumentationMode};
pub use emit::render_interface;
pub use extract::FactExtractor;
pub use generator::{
    CollectingSink, Diagnostic, GeneratedSource, InterfaceGenerator, Severity, SourceSink,
};
pub use render::{InterfaceNameUniverse, TypeRenderer};
pub use symbols::{CSharpDisplay, Compilation, SymbolDisplay, TypeRef};

pub use tokio_util::sync::CancellationToken;
