/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_utilities::dtb_builder::sample_board;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a working directory holding `board.dtb`.
fn create_test_board(dir: &Path) {
    fs::write(dir.join("board.dtb"), sample_board().to_dtb()).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    cargo_bin_cmd!("dtgraph")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());
        write_config(&dir.path().join("dtgraph.config.yml"), "format: markdown\n");

        let output = run(dir.path(), &["-f", "board.dtb"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Device Tree Graph"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_layout_and_style() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());
        fs::write(
            dir.path().join("board-style.json"),
            r#"[{"selector": "edge", "style": {"width": 3}}]"#,
        )
        .unwrap();
        write_config(
            &dir.path().join("dtgraph.config.yml"),
            r#"
layout: concentric
style: board-style.json
"#,
        );

        let output = run(dir.path(), &["-f", "board.dtb"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["layout"]["name"], "concentric");
        assert_eq!(json["style"][0]["style"]["width"], 3);
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());

        let output = run(dir.path(), &["-f", "board.dtb"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is JSON
        assert!(stdout.contains("\"elements\""));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("config file"));
    }

    #[test]
    fn test_unknown_fields_warn_but_run() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());
        write_config(
            &dir.path().join("dtgraph.config.yml"),
            r#"
format: json
theme: dark
"#,
        );

        let output = run(dir.path(), &["-f", "board.dtb"]);

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'theme' will be ignored"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());

        // Place config at a custom path (not auto-discovery name)
        let config_path = dir.path().join("custom-config.yml");
        write_config(&config_path, "format: md\n");

        let output = run(
            dir.path(),
            &["-f", "board.dtb", "-c", config_path.to_str().unwrap()],
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Device Tree Graph"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());

        cargo_bin_cmd!("dtgraph")
            .current_dir(dir.path())
            .args(["-f", "board.dtb", "-c", "nonexistent-config.yml"])
            .assert()
            .code(3); // ApplicationError
    }

    #[test]
    fn test_invalid_config_is_an_application_error() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());
        write_config(&dir.path().join("dtgraph.config.yml"), "dtc: \"\"\n");

        let output = run(dir.path(), &["-f", "board.dtb"]);

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("dtc must not be empty"));
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());
        write_config(&dir.path().join("dtgraph.config.yml"), "format: markdown\n");

        let output = run(dir.path(), &["-f", "board.dtb", "-F", "json"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(json["elements"].is_array());
    }

    #[test]
    fn test_cli_layout_overrides_config() {
        let dir = TempDir::new().unwrap();
        create_test_board(dir.path());
        write_config(&dir.path().join("dtgraph.config.yml"), "layout: grid\n");

        let output = run(dir.path(), &["-f", "board.dtb", "-l", "circle"]);

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["layout"]["name"], "circle");
    }

    #[test]
    fn test_cli_dtc_overrides_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("board.dts"), "/dts-v1/;\n/ { };\n").unwrap();
        write_config(
            &dir.path().join("dtgraph.config.yml"),
            "dtc: /nonexistent/config/dtc\n",
        );

        let output = run(
            dir.path(),
            &["-f", "board.dts", "--dtc", "/nonexistent/cli/dtc"],
        );

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("/nonexistent/cli/dtc"));
        assert!(!stderr.contains("/nonexistent/config/dtc"));
    }
}
