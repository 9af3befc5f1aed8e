//! Batch driver: one compilation pass in, one source unit per candidate out

use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::{
    builder::InterfaceModelBuilder,
    config::Config,
    emit::{generation_attribute_source, ignore_attribute_source, render_interface},
    error::{Error, Result},
    extract::{FactExtractor, GenerationOptions, extract_documentation},
    render::{InterfaceNameUniverse, TypeRenderer},
    symbols::{CSharpDisplay, Compilation, SymbolDisplay, TypeKind, TypeSymbol, has_attribute},
    types::{GenericParameterFact, InterfaceModel},
};

/// Identifier of the diagnostic reported when a pass aborts
pub const DIAGNOSTIC_ID: &str = "AI0001";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn fatal(err: &Error) -> Self {
        Self {
            id: DIAGNOSTIC_ID.to_string(),
            severity: Severity::Error,
            message: format!("AutomaticInterface failed to generate interfaces: {err}"),
        }
    }
}

/// One unit of generated source, keyed uniquely within a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub key: String,
    pub text: String,
}

/// Receives what a pass produces; the host folds sources into its compilation
pub trait SourceSink {
    fn add_source(&mut self, source: GeneratedSource);
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that keeps everything in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl SourceSink for CollectingSink {
    fn add_source(&mut self, source: GeneratedSource) {
        self.sources.push(source);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

pub struct InterfaceGenerator {
    config: Config,
    display: Arc<dyn SymbolDisplay>,
}

impl InterfaceGenerator {
    pub fn new(config: Config) -> Self {
        Self::with_display(config, Arc::new(CSharpDisplay))
    }

    pub fn with_display(config: Config, display: Arc<dyn SymbolDisplay>) -> Self {
        Self { config, display }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one pass, handing every generated unit and any fatal diagnostic to `sink`.
    ///
    /// Candidates that cannot be resolved are skipped. Any other failure is
    /// reported once as a diagnostic and aborts the whole pass.
    pub fn run(
        &self,
        compilation: &Compilation,
        sink: &mut dyn SourceSink,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if self.config.emit_marker_attributes {
            for source in self.marker_attribute_sources() {
                sink.add_source(source);
            }
        }

        let models = match self.build_models(compilation, cancel) {
            Ok(models) => models,
            Err(Error::Cancelled) => {
                info!("Generation pass cancelled");
                return Err(Error::Cancelled);
            }
            Err(err) => {
                error!("Interface generation failed: {}", err);
                sink.report(Diagnostic::fatal(&err));
                return Err(err);
            }
        };

        let mut used_keys = HashSet::new();
        for model in models {
            let key = unique_key(&model, &mut used_keys);
            info!(
                "Generated {} for {} with {} members",
                key,
                model.source_class,
                model.members.len()
            );
            sink.add_source(GeneratedSource {
                key,
                text: render_interface(&model),
            });
        }

        Ok(())
    }

    /// Convenience wrapper around [`run`](Self::run) without cancellation
    pub fn generate(&self, compilation: &Compilation) -> Result<Vec<GeneratedSource>> {
        let mut sink = CollectingSink::default();
        self.run(compilation, &mut sink, &CancellationToken::new())?;
        Ok(sink.sources)
    }

    /// Source of the two marker attributes, named after the configuration
    pub fn marker_attribute_sources(&self) -> Vec<GeneratedSource> {
        vec![
            GeneratedSource {
                key: format!("{}.Attribute", self.config.attribute_name),
                text: generation_attribute_source(&self.config.attribute_name),
            },
            GeneratedSource {
                key: format!("{}.Attribute", self.config.ignore_attribute_name),
                text: ignore_attribute_source(&self.config.ignore_attribute_name),
            },
        ]
    }

    /// Project every candidate of the pass into an interface model, in candidate order
    pub fn build_models(
        &self,
        compilation: &Compilation,
        cancel: &CancellationToken,
    ) -> Result<Vec<InterfaceModel>> {
        let candidates = self.discover_candidates(compilation);
        let universe = self.interface_universe(&candidates);
        debug!(
            "Projecting {} candidates, {} interface names in this pass",
            candidates.len(),
            universe.len()
        );

        let project = |symbol: &&TypeSymbol| -> Result<InterfaceModel> {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            self.project(compilation, symbol, &universe)
        };

        if self.config.parallel {
            candidates.par_iter().map(project).collect()
        } else {
            candidates.iter().map(project).collect()
        }
    }

    /// Candidate classes: the host's list when it sent one, otherwise every
    /// class carrying the generation marker
    pub fn discover_candidates<'c>(&self, compilation: &'c Compilation) -> Vec<&'c TypeSymbol> {
        let found: Vec<&TypeSymbol> = match &compilation.candidates {
            Some(names) => names
                .iter()
                .filter_map(|name| {
                    let symbol = compilation.get_type(name);
                    if symbol.is_none() {
                        warn!("Skipping candidate {}: no such type in the compilation", name);
                    }
                    symbol
                })
                .collect(),
            None => compilation
                .types
                .iter()
                .filter(|symbol| has_attribute(&symbol.attributes, &self.config.attribute_name))
                .collect(),
        };

        found
            .into_iter()
            .filter(|symbol| {
                if symbol.kind != TypeKind::Class {
                    warn!(
                        "Skipping candidate {}: a {:?} cannot be projected",
                        symbol.metadata_name(),
                        symbol.kind
                    );
                    return false;
                }
                if symbol.syntax.is_none() {
                    warn!(
                        "Skipping candidate {}: no declaring class syntax",
                        symbol.metadata_name()
                    );
                    return false;
                }
                true
            })
            .collect()
    }

    /// Qualified names of the interfaces this pass is about to generate
    pub fn interface_universe(&self, candidates: &[&TypeSymbol]) -> InterfaceNameUniverse {
        candidates
            .iter()
            .map(|symbol| {
                let options = GenerationOptions::from_symbol(symbol, &self.config.attribute_name);
                let namespace = options.namespace_for(symbol);
                let name = options.interface_name_for(symbol);
                if namespace.is_empty() {
                    name
                } else {
                    format!("{namespace}.{name}")
                }
            })
            .collect()
    }

    fn project(
        &self,
        compilation: &Compilation,
        symbol: &TypeSymbol,
        universe: &InterfaceNameUniverse,
    ) -> Result<InterfaceModel> {
        let options = GenerationOptions::from_symbol(symbol, &self.config.attribute_name);
        let display = self.display.as_ref();

        let extractor = FactExtractor::new(compilation, display, &self.config.ignore_attribute_name);
        let facts = extractor.extract(symbol)?;

        let no_substitution = HashMap::new();
        let generics = symbol
            .type_parameters
            .iter()
            .map(|parameter| GenericParameterFact::from_symbol(parameter, &no_substitution))
            .collect();
        let documentation = symbol
            .syntax
            .as_ref()
            .map(|syntax| extract_documentation(&syntax.leading_trivia))
            .unwrap_or_default();

        let mut renderer = TypeRenderer::new(display, universe);
        InterfaceModelBuilder::new(
            options.namespace_for(symbol),
            options.interface_name_for(symbol),
            options.access(),
        )
        .source_class(symbol.metadata_name())
        .documentation(&documentation)
        .generics(generics)
        .members(facts)
        .documentation_mode(self.config.documentation)
        .build(&mut renderer)
    }
}

/// `Namespace.IName` (`global.IName` outside any namespace), made unique
/// with a hash of the source class when two candidates collide
fn unique_key(model: &InterfaceModel, used: &mut HashSet<String>) -> String {
    let base = if model.is_global_namespace() {
        format!("global.{}", model.name)
    } else {
        model.qualified_name()
    };
    if used.insert(base.clone()) {
        return base;
    }

    let digest = format!("{:x}", md5::compute(model.source_class.as_bytes()));
    let key = format!("{base}.{}", &digest[..8]);
    warn!("Interface key {} is taken, using {} for {}", base, key, model.source_class);
    used.insert(key.clone());
    key
}
