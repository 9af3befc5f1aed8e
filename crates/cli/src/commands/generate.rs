use anyhow::{Context, Result, bail};
use autointerface_core::{
    CancellationToken, CollectingSink, Compilation, Config, GeneratedSource, InterfaceGenerator,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::display::{GenerationSummary, format_diagnostic, print_summary};
use crate::utils::{collect_inputs, source_file_name, unique_output_key, write_source};

pub fn generate_command(inputs: &[PathBuf], out: Option<&Path>, config: Config) -> Result<()> {
    let files = collect_inputs(inputs)?;
    if files.is_empty() {
        bail!("No compilation files found");
    }

    // marker attributes are shared by every compilation, emit them once
    let emit_attributes = config.emit_marker_attributes;
    let generator = InterfaceGenerator::new(Config {
        emit_marker_attributes: false,
        ..config
    });

    let mut summary = GenerationSummary {
        compilations: files.len(),
        ..Default::default()
    };
    let mut emitted = Vec::new();
    if emit_attributes {
        let attributes = generator.marker_attribute_sources();
        summary.attributes = attributes.len();
        emitted.extend(attributes);
    }

    let mut used_keys: HashSet<String> = emitted.iter().map(|source| source.key.clone()).collect();
    let cancel = CancellationToken::new();
    for file in &files {
        info!("Generating interfaces for {}", file.display());
        let compilation = Compilation::load_from_file(file)
            .with_context(|| format!("Failed to load compilation {}", file.display()))?;

        let mut sink = CollectingSink::default();
        let result = generator.run(&compilation, &mut sink, &cancel);
        for diagnostic in &sink.diagnostics {
            eprintln!("{}", format_diagnostic(diagnostic));
        }
        result.with_context(|| format!("Generation failed for {}", file.display()))?;

        summary.interfaces += sink.sources.len();
        for mut source in sink.sources {
            source.key = unique_output_key(&source.key, file, &mut used_keys);
            emitted.push(source);
        }
    }

    match out {
        Some(dir) => {
            for source in &emitted {
                summary.written.push(write_source(dir, source)?);
            }
            print_summary(&summary);
        }
        None => print_sources(&emitted),
    }

    Ok(())
}

fn print_sources(sources: &[GeneratedSource]) {
    for source in sources {
        println!("// {}", source_file_name(&source.key));
        print!("{}", source.text);
        println!();
    }
}
