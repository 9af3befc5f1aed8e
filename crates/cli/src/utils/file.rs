use anyhow::{Context, Result, bail};
use autointerface_core::GeneratedSource;
use autointerface_core::config::CONFIG_FILE_NAMES;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Compilation files named by `inputs`: files as given, directories
/// searched recursively for `*.json`, configuration files excluded
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_compilation_file(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect();
            found.sort();
            files.extend(found);
        } else {
            bail!("Input {} does not exist", input.display());
        }
    }

    Ok(files)
}

fn is_compilation_file(path: &Path) -> bool {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    file_name.ends_with(".json") && !CONFIG_FILE_NAMES.contains(&file_name)
}

/// `Shop.IOrder` -> `Shop.IOrder.g.cs`
pub fn source_file_name(key: &str) -> String {
    format!("{key}.g.cs")
}

/// Keep output keys unique across compilations: a key already taken by an
/// earlier compilation gets the hash of the compilation file appended
pub fn unique_output_key(key: &str, origin: &Path, used: &mut HashSet<String>) -> String {
    if used.insert(key.to_string()) {
        return key.to_string();
    }

    let digest = format!("{:x}", md5::compute(origin.to_string_lossy().as_bytes()));
    let unique = format!("{key}.{}", &digest[..8]);
    warn!(
        "Output {} is already taken, writing {} for {}",
        key,
        unique,
        origin.display()
    );
    used.insert(unique.clone());
    unique
}

/// Write one generated unit into `dir`, creating it when needed
pub fn write_source(dir: &Path, source: &GeneratedSource) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(source_file_name(&source.key));
    fs::write(&path, &source.text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_inputs_walks_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("b.json"), "{}").unwrap();
        fs::write(nested.join("a.json"), "{}").unwrap();
        fs::write(temp.path().join(".autointerface.json"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();

        let files = collect_inputs(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![temp.path().join("b.json"), nested.join("a.json")]);
    }

    #[test]
    fn test_collect_inputs_rejects_missing_path() {
        let temp = TempDir::new().unwrap();
        assert!(collect_inputs(&[temp.path().join("missing.json")]).is_err());
    }

    #[test]
    fn test_unique_output_key_across_compilations() {
        let mut used = HashSet::new();
        let first = unique_output_key("Demo.IPerson", Path::new("a.json"), &mut used);
        let second = unique_output_key("Demo.IPerson", Path::new("b.json"), &mut used);

        assert_eq!(first, "Demo.IPerson");
        assert!(second.starts_with("Demo.IPerson."));
        assert_eq!(second.len(), "Demo.IPerson.".len() + 8);
        assert_eq!(
            unique_output_key("Demo.IPerson", Path::new("b.json"), &mut HashSet::from([first])),
            second
        );
    }

    #[test]
    fn test_write_source() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("generated");
        let source = GeneratedSource {
            key: "Shop.IOrder".to_string(),
            text: "interface".to_string(),
        };

        let path = write_source(&out, &source).unwrap();
        assert_eq!(path, out.join("Shop.IOrder.g.cs"));
        assert_eq!(fs::read_to_string(path).unwrap(), "interface");
    }
}
