//! Test environment builder for isolated viewc testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the developer's shell
const SCRUBBED_VARS: &[&str] = &[
    "RUST_LOG",
    "VIEWC_SOURCE_ROOT",
    "VIEWC_CACHE_ROOT",
    "VIEWC_CACHE",
    "VIEWC_CACHE_LAYOUT",
    "VIEWC_LOG",
    "XDG_CONFIG_HOME",
];

/// Result of running a viewc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project (cwd of every run)
    pub project_root: TempDir,
    /// Temporary directory standing in for the user config home
    pub config_home: TempDir,
    viewc_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Default cache root (`storage/views`)
    pub fn cache_root(&self) -> PathBuf {
        self.project_path("storage/views")
    }

    /// Run viewc in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run viewc from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.viewc_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("VIEWC_TEST_CONFIG_HOME", self.config_home.path());

        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute viewc");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        write_file(
            &self.config_home.path().join("viewc").join("config.toml"),
            content,
        );
    }

    /// Set a file's modification time relative to now
    pub fn touch_project_file(&self, relative_path: &str, offset_secs: i64) {
        let path = self.project_path(relative_path);
        let now = SystemTime::now();
        let time = if offset_secs >= 0 {
            now + Duration::from_secs(offset_secs as u64)
        } else {
            now - Duration::from_secs(offset_secs.unsigned_abs())
        };
        let file = std::fs::File::options()
            .write(true)
            .open(&path)
            .expect("Failed to open file for touch");
        file.set_modified(time).expect("Failed to set mtime");
    }

    /// Every regular file under the cache root, relative to it
    pub fn cached_files(&self) -> Vec<String> {
        let root = self.cache_root();
        let mut files: Vec<String> = crate::common::list_all_files(&root)
            .into_iter()
            .map(|p| {
                Path::new(&p)
                    .strip_prefix(&root)
                    .map(|rel| rel.display().to_string())
                    .unwrap_or(p)
            })
            .collect();
        files.sort();
        files
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    templates: Vec<(String, String)>,
    project_config: Option<String>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    /// Add a template under `views/`
    pub fn with_template(mut self, name: &str, content: &str) -> Self {
        self.templates.push((name.to_string(), content.to_string()));
        self
    }

    /// Write `viewc.toml` in the project root
    pub fn with_project_config(mut self, content: &str) -> Self {
        self.project_config = Some(content.to_string());
        self
    }

    /// Write `viewc/config.toml` in the isolated config home
    pub fn with_user_config(mut self, content: &str) -> Self {
        self.user_config = Some(content.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            viewc_bin: PathBuf::from(env!("CARGO_BIN_EXE_viewc")),
        };

        std::fs::create_dir_all(env.project_path("views")).expect("Failed to create views");
        for (name, content) in &self.templates {
            env.write_project_file(&format!("views/{}", name), content);
        }
        if let Some(config) = &self.project_config {
            env.write_project_file("viewc.toml", config);
        }
        if let Some(config) = &self.user_config {
            env.write_user_config(config);
        }
        env
    }
}
