use anyhow::{Context, Result, bail};
use autointerface_core::{CancellationToken, Compilation, Config, InterfaceGenerator, InterfaceModel};
use std::path::Path;

pub fn inspect_command(input: &Path, class: Option<&str>, config: Config) -> Result<()> {
    let compilation = Compilation::load_from_file(input)
        .with_context(|| format!("Failed to load compilation {}", input.display()))?;

    let generator = InterfaceGenerator::new(config);
    let models = generator
        .build_models(&compilation, &CancellationToken::new())
        .context("Failed to build interface models")?;

    let selected: Vec<&InterfaceModel> = models
        .iter()
        .filter(|model| class.is_none_or(|name| is_source_class(model, name)))
        .collect();

    if let Some(name) = class {
        if selected.is_empty() {
            bail!("No interface is generated from class '{}'", name);
        }
    }

    println!("{}", serde_json::to_string_pretty(&selected)?);
    Ok(())
}

/// Match on the metadata name or on the bare class name
fn is_source_class(model: &InterfaceModel, name: &str) -> bool {
    model.source_class == name || model.source_class.rsplit('.').next() == Some(name)
}
