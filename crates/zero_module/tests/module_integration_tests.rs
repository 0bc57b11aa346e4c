//! Integration tests for module loading and stack registries.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use zero_module::{LocalModuleLoader, ModuleError, ModuleLoader, ModuleRegistry};

fn write_module(root: &Path, locator: &str, manifest: &str) {
    let dir = root.join(locator);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("zero-module.yml"), manifest).unwrap();
}

const BACKEND_MANIFEST: &str = r#"
name: zero-deployable-backend
parameters:
  - field: productionHost
    label: Production API host
    default: api.example.com
  - field: stagingHost
    label: Staging API host
"#;

#[tokio::test]
async fn test_fetch_module_from_root() {
    let temp = tempdir().unwrap();
    write_module(
        temp.path(),
        "github.com/commitdev/zero-deployable-backend",
        BACKEND_MANIFEST,
    );

    let loader = LocalModuleLoader::new(temp.path());
    let module = loader
        .fetch_module("github.com/commitdev/zero-deployable-backend")
        .await
        .unwrap();

    assert_eq!(module.name, "zero-deployable-backend");
    assert_eq!(
        module.fields().collect::<Vec<_>>(),
        vec!["productionHost", "stagingHost"]
    );
}

#[tokio::test]
async fn test_fetch_is_idempotent() {
    let temp = tempdir().unwrap();
    write_module(temp.path(), "backend", BACKEND_MANIFEST);
    let loader = LocalModuleLoader::new(temp.path());

    let first = loader.fetch_module("backend").await.unwrap();
    let second = loader.fetch_module("backend").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_by_direct_path() {
    let temp = tempdir().unwrap();
    let module_dir = temp.path().join("local-module");
    fs::create_dir_all(&module_dir).unwrap();
    fs::write(module_dir.join("zero-module.yaml"), "name: local\n").unwrap();

    let loader = LocalModuleLoader::new("/nonexistent");
    let module = loader
        .fetch_module(module_dir.to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(module.name, "local");
}

#[tokio::test]
async fn test_invalid_manifest_is_an_error() {
    let temp = tempdir().unwrap();
    write_module(temp.path(), "broken", "parameters: [");
    let loader = LocalModuleLoader::new(temp.path());

    let err = loader.fetch_module("broken").await.unwrap_err();
    assert!(matches!(err, ModuleError::InvalidManifest { .. }));
}

#[test]
fn test_load_registry_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("stacks.yml");
    fs::write(
        &path,
        r#"
"Serverless + Node":
  - github.com/acme/lambda-stack
  - github.com/acme/node-api
Custom: []
"#,
    )
    .unwrap();

    let registry = ModuleRegistry::load(&path).unwrap();
    assert_eq!(registry.available_labels(), vec!["Custom", "Serverless + Node"]);
    assert_eq!(registry.lookup("Serverless + Node").unwrap().len(), 2);
    assert!(registry.lookup("Custom").unwrap().is_empty());
}

#[test]
fn test_load_registry_parse_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("stacks.yml");
    fs::write(&path, "- not\n- a\n- mapping\n").unwrap();

    let err = ModuleRegistry::load(&path).unwrap_err();
    assert!(matches!(err, ModuleError::RegistryParse { .. }));
}
