//! Integration tests for error handling

mod integration_test_helpers;

use integration_test_helpers::*;

#[test]
fn test_generate_missing_root() {
    let repo = TestRepo::sample();

    let output = repo.run_command_failure(&["generate", "--root", "does/not/exist"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("✗ Generation failed"));
    assert!(stderr.contains("Root directory not found"));
}

#[test]
fn test_generate_missing_config_file() {
    let repo = TestRepo::sample();
    std::fs::remove_file(repo.path("atlantis.yaml")).unwrap();

    let output = repo.run_command_failure(&["generate"]);
    assert!(stderr_of(&output).contains("Failed to read config file"));
    assert!(!repo.path("atlantis.yaml").exists());
}

#[test]
fn test_generate_invalid_config_file() {
    let repo = TestRepo::sample();
    repo.write_file("atlantis.yaml", "version: [3\n");

    let output = repo.run_command_failure(&["generate"]);
    assert!(stderr_of(&output).contains("Invalid YAML"));
    assert_eq!(repo.read_file("atlantis.yaml"), "version: [3\n");
}

#[test]
fn test_syntax_error_leaves_config_untouched() {
    let repo = TestRepo::sample();
    repo.write_file(
        "project2/broken.tf",
        "module \"oops\" {\n  source = \"../modules/module1\n}\n",
    );

    let output = repo.run_command_failure(&["generate"]);
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Syntax error"));
    assert!(stderr.contains("broken.tf"));

    assert_eq!(repo.read_file("atlantis.yaml"), BASE_ATLANTIS_YAML);
}

#[test]
fn test_duplicate_module_call() {
    let repo = TestRepo::sample();
    repo.write_file(
        "project2/extra.tf",
        "module \"m0\" {\n  source = \"../modules/module1\"\n}\n",
    );

    let output = repo.run_command_failure(&["generate"]);
    assert!(stderr_of(&output).contains("Duplicate module call \"m0\""));
}

#[test]
fn test_invalid_json_module_file() {
    let repo = TestRepo::sample();
    repo.write_file("project2/broken.tf.json", "{ \"module\": ");

    let output = repo.run_command_failure(&["generate"]);
    assert!(stderr_of(&output).contains("Invalid JSON"));
}

#[test]
fn test_dependency_cycle() {
    let repo = TestRepo::new();
    repo.write_file("app/main.tf", &backend_module(&["../a"]));
    repo.write_file("a/main.tf", &plain_module(&["../b"]));
    repo.write_file("b/main.tf", &plain_module(&["../a"]));

    let output = repo.run_command_failure(&["generate"]);
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Dependency cycle detected"));
    assert!(stderr.contains("/a -> "));

    assert_eq!(repo.read_file("atlantis.yaml"), BASE_ATLANTIS_YAML);
}

#[test]
fn test_check_propagates_planning_errors() {
    let repo = TestRepo::sample();
    repo.write_file("project1/bad.tf", "terraform {\n");

    let output = repo.run_command_failure(&["check"]);
    assert!(stderr_of(&output).contains("✗ Check failed"));
}

#[test]
fn test_graph_unsupported_format() {
    let repo = TestRepo::sample();

    let output = repo.run_command_failure(&["graph", "--format", "dot"]);
    assert!(stderr_of(&output).contains("Unsupported format: dot"));
}

#[test]
fn test_completion_unsupported_shell() {
    let repo = TestRepo::new();

    let output = repo.run_command_failure(&["completion", "tcsh"]);
    assert!(stderr_of(&output).contains("Unsupported shell: tcsh"));
}

#[test]
fn test_unknown_subcommand() {
    let repo = TestRepo::new();

    let output = repo.run_command_failure(&["plan"]);
    assert_eq!(output.status.code(), Some(2));
}
