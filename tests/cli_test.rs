//! Integration tests for the pystrap binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PYENV_LISTING: &str = "system\n3.9.1\n3.10.0\n3.9.12\nmy_cool_app-3.10\n";

/// A sandbox with a project directory, a fake HOME and an isolated PATH.
struct Sandbox {
    _temp: TempDir,
    project: PathBuf,
    home: PathBuf,
    bin: PathBuf,
}

impl Sandbox {
    fn new(project_name: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join(project_name);
        let home = temp.path().join("home");
        let bin = temp.path().join("bin");
        for dir in [&project, &home, &bin] {
            fs::create_dir_all(dir).unwrap();
        }
        Self {
            _temp: temp,
            project,
            home,
            bin,
        }
    }

    fn with_gitconfig(self, contents: &str) -> Self {
        fs::write(self.home.join(".gitconfig"), contents).unwrap();
        self
    }

    fn with_remote(self, url: &str) -> Self {
        let git = self.project.join(".git");
        fs::create_dir_all(&git).unwrap();
        fs::write(
            git.join("config"),
            format!("[remote \"origin\"]\n\turl = {url}\n\tfetch = +refs/heads/*:refs/remotes/origin/*\n"),
        )
        .unwrap();
        self
    }

    /// Install an executable shell script named `name` that prints `stdout`.
    #[cfg(unix)]
    fn with_tool(self, name: &str, stdout: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.join(name);
        let escaped = stdout.replace('\'', "'\\''");
        fs::write(&path, format!("#!/bin/sh\nprintf '%s' '{escaped}'\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    fn path(&self, relative: &str) -> PathBuf {
        self.project.join(relative)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("pystrap"));
        cmd.current_dir(&self.project)
            .env("HOME", &self.home)
            .env("USER", "sandbox-user")
            .env("PATH", &self.bin)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PYSTRAP_VERSION_MANAGER")
            .env_remove("PYSTRAP_COMMAND_TIMEOUT")
            .env_remove("PYSTRAP_LEGACY_EXIT");
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pystrap"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("create_pyproject"))
        .stdout(predicate::str::contains("latest_venv"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pystrap"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_action() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");
    sandbox.cmd().assert().failure().code(2);
    Ok(())
}

#[test]
fn cli_rejects_unknown_action() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");
    sandbox
        .cmd()
        .arg("create_everything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("create_everything"));
    Ok(())
}

#[test]
fn cli_prints_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pystrap"));
    cmd.args(["--completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pystrap"));
    Ok(())
}

#[test]
fn create_basic_files_writes_skeleton() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("my_cool_app");

    sandbox
        .cmd()
        .arg("create_basic_files")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote Makefile"));

    for file in ["Makefile", ".gitignore", ".flake8", "my_cool_app/__init__.py"] {
        assert!(sandbox.path(file).is_file(), "{file} missing");
    }
    assert!(sandbox.path("tests/__init__.py").is_file());
    assert!(read(&sandbox.path("Makefile")).contains("my_cool_app"));
    Ok(())
}

#[test]
fn create_basic_files_quiet_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("my_cool_app");

    sandbox
        .cmd()
        .args(["--quiet", "create_basic_files"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn project_flag_selects_directory() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("runner");
    let other = TempDir::new()?;
    let target = other.path().join("other-app");
    fs::create_dir_all(&target)?;

    sandbox
        .cmd()
        .arg("--project")
        .arg(&target)
        .arg("create_basic_files")
        .assert()
        .success();

    assert!(target.join("other_app/__init__.py").is_file());
    assert!(!sandbox.path("Makefile").exists());
    Ok(())
}

#[test]
fn project_flag_dot_uses_directory_basename() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("my_cool_app");

    let output = sandbox.cmd().args(["--project", ".", "show_identity"]).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["project"], "my-cool-app");
    assert_eq!(value["package"], "my_cool_app");

    sandbox
        .cmd()
        .args(["--project", ".", "create_basic_files"])
        .assert()
        .success();

    assert!(sandbox.path("my_cool_app/__init__.py").is_file());
    assert!(!sandbox.path("__init__.py").exists());
    Ok(())
}

#[test]
fn project_flag_missing_directory_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");

    sandbox
        .cmd()
        .args(["--project", "does-not-exist", "get_dev_packages"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn get_dev_packages_prints_one_line() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");

    sandbox
        .cmd()
        .arg("get_dev_packages")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("black flake8=4.0.1 coverage"))
        .stdout(predicate::str::contains(
            "git+https://github.com/tetutaro/sphinx_pyproject_poetry.git",
        ));
    Ok(())
}

#[test]
fn get_dev_packages_includes_configured_extras() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");
    fs::write(
        sandbox.path(".pystrap.yml"),
        "extra_dev_packages:\n  - name: ruff\n    version: 0.4.0\n",
    )?;

    sandbox
        .cmd()
        .arg("get_dev_packages")
        .assert()
        .success()
        .stdout(predicate::str::contains("python-lsp-server ruff=0.4.0"));
    Ok(())
}

#[test]
fn invalid_settings_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");
    fs::write(sandbox.path(".pystrap.yml"), "unknown_key: 1\n")?;

    sandbox
        .cmd()
        .arg("get_dev_packages")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(".pystrap.yml"));
    Ok(())
}

#[test]
fn legacy_exit_flag_reports_invalid_settings_on_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");
    fs::write(sandbox.path(".pystrap.yml"), "unknown_key: 1\n")?;

    sandbox
        .cmd()
        .args(["--legacy-exit", "get_dev_packages"])
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Failed to parse config at"))
        .stdout(predicate::str::contains(".pystrap.yml"));
    Ok(())
}

#[test]
fn get_sphinx_command_prints_quickstart() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("my_cool_app");

    sandbox
        .cmd()
        .arg("get_sphinx_command")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sphinx-quickstart --quiet --sep --no-batchfile --ext-autodoc --project my-cool-app --author dummy",
        ));

    assert!(sandbox.path("docs").is_dir());
    Ok(())
}

#[test]
fn show_identity_uses_repository_and_gitconfig() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("checkout")
        .with_remote("git@github.com:jane/fancy_tool.git")
        .with_gitconfig("[user]\n\tname = Jane Doe\n\temail = jane@example.com\n");

    let output = sandbox.cmd().arg("show_identity").output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["project"], "fancy-tool");
    assert_eq!(value["package"], "fancy_tool");
    assert_eq!(value["author"], "Jane Doe<jane@example.com>");
    assert_eq!(value["repository"], "https://github.com/jane/fancy_tool");
    assert_eq!(value["source"], "repository");
    Ok(())
}

#[test]
fn show_identity_falls_back_to_user() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("my_cool_app");

    let output = sandbox.cmd().arg("show_identity").output()?;
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(value["project"], "my-cool-app");
    assert_eq!(value["author"], "sandbox-user");
    assert_eq!(value["repository"], "");
    assert_eq!(value["source"], "working_directory");
    Ok(())
}

#[test]
fn missing_version_manager_fails() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");

    sandbox
        .cmd()
        .arg("latest_venv")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("pyenv is not installed"));
    Ok(())
}

#[test]
fn legacy_exit_reports_error_on_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");

    sandbox
        .cmd()
        .args(["--legacy-exit", "latest_venv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyenv is not installed"));
    Ok(())
}

#[test]
fn legacy_exit_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("demo");

    sandbox
        .cmd()
        .env("PYSTRAP_LEGACY_EXIT", "1")
        .arg("project_python")
        .assert()
        .success()
        .stdout(predicate::str::contains("pyenv is not installed"));
    Ok(())
}

#[cfg(unix)]
mod with_stub_tools {
    use super::*;

    #[test]
    fn latest_venv_prints_numeric_maximum() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("demo").with_tool("pyenv", PYENV_LISTING);

        sandbox
            .cmd()
            .arg("latest_venv")
            .assert()
            .success()
            .stdout("3.10.0\n");
        Ok(())
    }

    #[test]
    fn latest_venv_without_python3_fails() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("demo").with_tool("pyenv", "system\n2.7.18\n");

        sandbox
            .cmd()
            .arg("latest_venv")
            .assert()
            .failure()
            .stderr(predicate::str::contains("python3 virtualenv is not found"));
        Ok(())
    }

    #[test]
    fn project_python_prints_matching_environment() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("my_cool_app")
            .with_tool("pyenv", "3.10.0\nmy-cool-app-3.10\nmy-cool-app-3.11\n");

        sandbox
            .cmd()
            .arg("project_python")
            .assert()
            .success()
            .stdout("my-cool-app-3.10\n");
        Ok(())
    }

    #[test]
    fn get_project_python_alias_works() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("tool").with_tool("pyenv", "tool-env\n");

        sandbox
            .cmd()
            .arg("get_project_python")
            .assert()
            .success()
            .stdout("tool-env\n");
        Ok(())
    }

    #[test]
    fn create_pyproject_writes_series_constraint() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("my_cool_app")
            .with_tool("pyenv", PYENV_LISTING)
            .with_gitconfig("[user]\n\tname = Jane\n");

        sandbox
            .cmd()
            .arg("create_pyproject")
            .assert()
            .success()
            .stdout("3.10.0\n");

        let pyproject = read(&sandbox.path("pyproject.toml"));
        assert!(pyproject.contains("name = \"my-cool-app\""));
        assert!(pyproject.contains("authors = [\"Jane\"]"));
        assert!(pyproject.contains("python = \"^3.10\""));
        assert!(pyproject.contains("{include = \"my_cool_app\"}"));
        assert!(!pyproject.contains("${"));
        Ok(())
    }

    #[test]
    fn settings_file_selects_version_manager() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("demo").with_tool("lister", "3.8.0\n3.12.2\n");
        fs::write(sandbox.path(".pystrap.yml"), "version_manager: lister --all\n")?;

        sandbox
            .cmd()
            .arg("latest_venv")
            .assert()
            .success()
            .stdout("3.12.2\n");
        Ok(())
    }

    #[test]
    fn setup_sphinx_runs_quickstart_and_writes_docs() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("my_cool_app")
            .with_remote("https://gitlab.com/jane/my_cool_app.git")
            .with_tool("sphinx-quickstart", "Finished\n");

        sandbox.cmd().arg("setup_sphinx").assert().success();

        let conf = read(&sandbox.path("docs/source/conf.py"));
        assert!(conf.contains("../../my_cool_app"));
        assert!(conf.contains("-/tree/main"));
        assert!(sandbox.path("docs/Makefile").is_file());
        Ok(())
    }

    #[test]
    fn setup_sphinx_without_quickstart_fails() -> Result<(), Box<dyn std::error::Error>> {
        let sandbox = Sandbox::new("my_cool_app");

        sandbox
            .cmd()
            .arg("setup_sphinx")
            .assert()
            .failure()
            .stderr(predicate::str::contains("sphinx-quickstart is not installed"));

        assert!(!sandbox.path("docs/Makefile").exists());
        Ok(())
    }

    #[test]
    fn timeout_kills_slow_version_manager() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let sandbox = Sandbox::new("demo");
        let script = sandbox.bin.join("pyenv");
        fs::write(&script, "#!/bin/sh\nwhile :; do :; done\n")?;
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

        sandbox
            .cmd()
            .args(["--timeout", "1", "latest_venv"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("timed out"));
        Ok(())
    }
}
