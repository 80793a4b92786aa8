//! End-to-end tests running the `pebble` binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pebble(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pebble"))
        .args(args)
        .current_dir(dir)
        .env_remove("PEBBLE_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run pebble")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_arguments_prints_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    for name in ["new", "generate", "server", "routes", "version", "help"] {
        assert!(out.contains(name), "help should list {name}");
    }
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_exits_1_and_suggests_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["foo"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Unknown command: foo"));
    assert!(err.contains("pebble help"));
}

#[test]
fn test_help_for_unknown_command_lists_commands() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["help", "deploy"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("No such command: deploy"));
    for name in ["new", "generate", "server", "routes", "version"] {
        assert!(out.contains(name), "help should list {name}");
    }
}

#[test]
fn test_new_prints_paths_and_next_steps() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["new", "blog"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("blog/lib/Blog/Controller"));
    assert!(out.contains("blog/app.psgi"));
    assert!(out.contains("Next steps:"));
    assert!(out.contains("5678"));
}

#[test]
fn test_new_twice_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(pebble(temp_dir.path(), &["new", "blog"]).status.code(), Some(0));

    let output = pebble(temp_dir.path(), &["new", "blog"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
}

#[test]
fn test_new_without_name_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["new"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_generate_controller_in_named_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("bar");
    fs::create_dir(&root).unwrap();

    let output = pebble(&root, &["generate", "controller", "Foo"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("lib/Bar/Controller/Foo.pm"));
    assert!(stdout(&output).contains("use Bar::Controller::Foo;"));

    let source = fs::read_to_string(root.join("lib/Bar/Controller/Foo.pm")).unwrap();
    assert!(source.contains("Hello from Foo controller"));
}

#[test]
fn test_path_like_names_exit_1_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let work = temp_dir.path().join("work");
    fs::create_dir(&work).unwrap();

    let output = pebble(&work, &["new", "../escaped"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("escaped").exists());

    let output = pebble(&work, &["generate", "template", "../../outside"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid artifact name"));
    assert_eq!(fs::read_dir(&work).unwrap().count(), 0);
}

#[test]
fn test_generate_unknown_type_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["generate", "widget", "Foo"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown type: widget"));
}

#[test]
fn test_server_without_entry_point_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    let output = pebble(temp_dir.path(), &["server"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("app.psgi"));
}

#[cfg(unix)]
#[test]
fn test_server_prints_binding_and_forwards_exit_status() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("app.psgi"), "").unwrap();
    fs::write(
        temp_dir.path().join("pebble.toml"),
        "[server]\nrunner = \"true\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pebble"))
        .args(["server", "--port", "9100", "-h", "127.0.0.1"])
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    let out = stdout(&output);
    assert!(out.contains("127.0.0.1"));
    assert!(out.contains("9100"));
    // `true` ignores its arguments; its status becomes ours
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_routes_requires_entry_point() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(pebble(temp_dir.path(), &["routes"]).status.code(), Some(1));

    fs::write(temp_dir.path().join("app.psgi"), "").unwrap();
    let output = pebble(temp_dir.path(), &["routes"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("not implemented"));
}
