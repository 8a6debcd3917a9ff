// file: tests/integration_test.rs
// version: 1.0.0
// guid: 197bed15-02c6-4b9a-8629-6ff0a4229360

//! Integration tests for the Docker command reference

use docker_reference::{
    config::loader::ConfigLoader, CommandDescription, CommandListView, CommandRegistry,
    ReferenceError, RenderedCard, Result,
};
use std::thread;
use tempfile::TempDir;

fn card(title: &str, snippet: &str) -> RenderedCard {
    RenderedCard {
        title: title.to_string(),
        description: String::new(),
        snippet: snippet.to_string(),
        category: None,
    }
}

#[test]
fn test_build_record_renders_with_empty_description() -> Result<()> {
    let registry = CommandRegistry::from_records(vec![CommandDescription::new(
        "Build",
        "docker build -t app .",
    )]);

    let list = CommandListView::new().render(&registry)?;

    assert_eq!(list.into_cards(), vec![card("Build", "docker build -t app .")]);
    Ok(())
}

#[test]
fn test_empty_registry_renders_nothing() -> Result<()> {
    let list = CommandListView::new().render(&CommandRegistry::from_records(Vec::new()))?;
    assert!(list.is_empty());
    Ok(())
}

#[test]
fn test_blank_title_aborts_render() {
    let registry = CommandRegistry::from_records(vec![CommandDescription::new("", "docker ps")]);

    let result = CommandListView::new().render(&registry);

    assert!(matches!(
        result,
        Err(ReferenceError::InvalidRecord { index: Some(0), field: "title" })
    ));
}

#[test]
fn test_identical_records_render_as_separate_cards() -> Result<()> {
    let record = CommandDescription::new("List", "docker ps");
    let registry = CommandRegistry::from_records(vec![record.clone(), record]);

    let list = CommandListView::new().render(&registry)?;

    assert_eq!(
        list.into_cards(),
        vec![card("List", "docker ps"), card("List", "docker ps")]
    );
    Ok(())
}

#[test]
fn test_builtin_render_preserves_length_order_and_snippets() -> Result<()> {
    let registry = CommandRegistry::builtin();
    let list = CommandListView::new().render(&registry)?;

    assert_eq!(list.len(), registry.len());
    for (record, card) in registry.all().zip(list.iter()) {
        assert_eq!(card.title, record.title());
        assert_eq!(card.snippet.as_bytes(), record.snippet().as_bytes());
    }
    Ok(())
}

#[test]
fn test_concurrent_renders_share_one_registry() -> Result<()> {
    let registry = CommandRegistry::builtin();
    let expected = CommandListView::new().render(&registry)?;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                scope.spawn(move || CommandListView::new().render(&registry))
            })
            .collect();

        for handle in handles {
            let list = handle.join().expect("render thread panicked").unwrap();
            assert_eq!(list, expected);
        }
    });
    Ok(())
}

#[test]
fn test_yaml_file_loads_in_order() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commands.yml");
    std::fs::write(
        &path,
        r#"
commands:
  - title: Build
    snippet: docker build -t app .
    category: Images
  - title: Multi-line run
    description: Publish and mount
    command: |-
      docker run \
        -p 5173:5173 \
        -v "$(pwd)":/app app
    category: Containers
"#,
    )?;

    let registry = ConfigLoader::new().load_registry(&path)?;
    let list = CommandListView::new().render(&registry)?;

    assert_eq!(list.len(), 2);
    assert_eq!(list.cards()[0].title, "Build");
    assert_eq!(
        list.cards()[1].snippet,
        "docker run \\\n  -p 5173:5173 \\\n  -v \"$(pwd)\":/app app"
    );
    assert_eq!(registry.categories(), vec![("Images", 1), ("Containers", 1)]);
    Ok(())
}

#[test]
fn test_record_without_snippet_fails_whole_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commands.json");
    std::fs::write(
        &path,
        r#"[{"title":"Ps","snippet":"docker ps"},{"title":"Images"}]"#,
    )
    .unwrap();

    let result = ConfigLoader::new().load_registry(&path);

    match result {
        Err(ReferenceError::Configuration(msg)) => {
            assert!(msg.contains("record 1"));
            assert!(msg.contains("snippet"));
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_unsupported_extension_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("commands.txt");
    std::fs::write(&path, "docker ps").unwrap();

    let result = ConfigLoader::new().load_registry(&path);

    assert!(matches!(result, Err(ReferenceError::Configuration(_))));
}
