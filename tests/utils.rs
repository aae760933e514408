use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use jollof::command::{CommandOutput, CommandRunner};
use jollof::error::Result;

/// A `CommandRunner` that records every invocation and fakes the on-disk
/// side effects of the external generators, so whole scaffold runs can be
/// exercised without Django, pip, Node.js, or npm installed.
pub struct FakeGeneratorRunner {
    pub node_version: &'static str,
    calls: RefCell<Vec<RecordedCall>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl FakeGeneratorRunner {
    pub fn new() -> Self {
        Self { node_version: "v20.11.1", calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Fakes `django-admin startproject backend`: the generated layout the
    /// backend scaffold mutates afterwards.
    fn fake_django_project(cwd: &Path) {
        let settings_dir = cwd.join("backend").join("backend");
        fs::create_dir_all(&settings_dir).unwrap();
        fs::write(
            settings_dir.join("settings.py"),
            "INSTALLED_APPS = []\nMIDDLEWARE = []\n",
        )
        .unwrap();
        fs::write(
            settings_dir.join("urls.py"),
            "from django.contrib import admin\n\nurlpatterns = []\n",
        )
        .unwrap();
        fs::write(cwd.join("backend").join("manage.py"), "#!/usr/bin/env python\n")
            .unwrap();
    }

    /// Fakes `npm create vite`: the default files the frontend scaffold
    /// replaces or deletes.
    fn fake_vite_project(cwd: &Path) {
        let frontend_dir = cwd.join("frontend");
        fs::create_dir_all(frontend_dir.join("src")).unwrap();
        fs::write(
            frontend_dir.join("package.json"),
            r#"{"name":"frontend","private":true,"version":"0.0.0","dependencies":{"react":"^18.2.0","react-dom":"^18.2.0"}}"#,
        )
        .unwrap();
        fs::write(frontend_dir.join("index.html"), "<title>Vite + React</title>\n")
            .unwrap();
        fs::write(frontend_dir.join(".gitignore"), "node_modules\n").unwrap();
        fs::write(frontend_dir.join(".eslintrc.cjs"), "module.exports = {}\n")
            .unwrap();
        fs::write(frontend_dir.join("src").join("App.css"), "").unwrap();
        fs::write(frontend_dir.join("src").join("index.css"), "").unwrap();
    }
}

impl CommandRunner for FakeGeneratorRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        });

        let stdout = match (program, args.first().copied()) {
            ("node", Some("--version")) => format!("{}\n", self.node_version),
            ("django-admin", Some("startproject")) => {
                Self::fake_django_project(cwd);
                String::new()
            }
            ("npm", Some("create")) => {
                Self::fake_vite_project(cwd);
                String::new()
            }
            _ => String::new(),
        };

        Ok(CommandOutput { stdout, stderr: String::new() })
    }
}
