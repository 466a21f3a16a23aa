use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run(command: Commands, config: &AppConfig) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = execute_command_with_writer(command, config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn config_with_graph(dir: &Path, manifest: &str) -> AppConfig {
    let path = dir.join("targets.toml");
    fs::write(&path, manifest).unwrap();
    AppConfig {
        graph: Some(path),
        ..AppConfig::default()
    }
}

const CYCLIC_MANIFEST: &str = r#"
[[target]]
name = "app"
deps = ["lib"]

[[target]]
name = "lib"
deps = ["app"]
"#;

mod handle_resolve_tests {
    use super::*;

    #[test]
    fn it_prints_sample_order_as_text() {
        let (result, output) = run(Commands::default(), &AppConfig::default());

        assert!(result.is_ok());
        assert_eq!(output, "Build Order:\nA\nB\nC\nD\nE\n");
    }

    #[test]
    fn it_prints_json() {
        let command = Commands::Resolve {
            format: OutputFormat::Json,
            prerequisites_first: false,
        };
        let (result, output) = run(command, &AppConfig::default());

        assert!(result.is_ok());
        let order: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn it_prints_prerequisites_first() {
        let command = Commands::Resolve {
            format: OutputFormat::Text,
            prerequisites_first: true,
        };
        let (result, output) = run(command, &AppConfig::default());

        assert!(result.is_ok());
        assert_eq!(output, "Build Order:\nE\nD\nC\nB\nA\n");
    }

    #[test]
    fn it_reports_cycle_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_graph(temp_dir.path(), CYCLIC_MANIFEST);

        let (result, output) = run(Commands::default(), &config);

        let err = result.unwrap_err();
        assert!(output.is_empty(), "No partial order should be printed");
        assert_eq!(err.to_string(), "Cycle: app → lib → app");
        assert!(
            err.chain()
                .any(|cause| cause.to_string()
                    == "Cyclic dependency detected. Build cannot be resolved.")
        );
    }

    #[test]
    fn it_reports_manifest_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_graph(temp_dir.path(), "[[target]\n");

        let (result, _) = run(Commands::default(), &config);

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to load graph from"));
    }
}

mod handle_check_tests {
    use super::*;

    #[test]
    fn it_accepts_acyclic_graph() {
        let (result, output) = run(Commands::Check, &AppConfig::default());

        assert!(result.is_ok());
        assert_eq!(output, "No cycles found (5 targets, 6 dependencies)\n");
    }

    #[test]
    fn it_rejects_cyclic_graph() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_graph(temp_dir.path(), CYCLIC_MANIFEST);

        let (result, _) = run(Commands::Check, &config);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Cycle detected: app → lib → app"
        );
    }
}

mod handle_version_tests {
    use super::*;

    #[test]
    fn it_displays_version_information() {
        let (result, output) = run(Commands::Version, &AppConfig::default());

        assert!(result.is_ok());
        assert!(output.starts_with("buildorder "));
    }
}
