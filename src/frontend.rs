use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::auth::{write_env_file, Secrets};
use crate::choices::{Frontend, SocialLogin};
use crate::command::CommandRunner;
use crate::constants::{
    FRONTEND_TEMPLATES, HELPER_FILES, NODE_MIN_MAJOR, PROJECT_NAME_PLACEHOLDER,
};
use crate::error::{Error, Result};
use crate::ioutils::{copy_file, delete_file};
use crate::manifest::update_manifest;
use crate::templates::{copy_templates, replace_placeholder};

/// Manifest update merged into the generated `package.json`, serialized to
/// JSON before the merge.
#[derive(Serialize)]
struct DependencyUpdates {
    dependencies: IndexMap<&'static str, &'static str>,
}

/// npm packages required by the chosen styling framework.
pub fn framework_dependencies(frontend: Frontend) -> Result<Map<String, Value>> {
    let dependencies = match frontend {
        Frontend::Bootstrap => IndexMap::from([
            ("react-bootstrap", "^2.7.4"),
            ("bootstrap", "^5.2.3"),
        ]),
        Frontend::Material => IndexMap::from([
            ("@mui/material", "^5.11.6"),
            ("@emotion/react", "^11.10.6"),
            ("@emotion/styled", "^11.10.6"),
            ("@mui/icons-material", "^5.16.13"),
        ]),
    };

    match serde_json::to_value(DependencyUpdates { dependencies })? {
        Value::Object(updates) => Ok(updates),
        _ => unreachable!(),
    }
}

/// Sets up the React frontend: checks Node.js, runs the Vite generator,
/// materializes templates, merges framework dependencies, installs the
/// navbar and auth components, and writes the frontend env file.
///
/// # Arguments
/// * `runner` - Executor for the external generator and installer commands
/// * `template_dir` - Root of the shipped template tree
/// * `project_dir` - Project directory the frontend is generated into
/// * `frontend` - Selected styling framework
/// * `social_login` - Selected social login provider
/// * `project_name` - Name substituted into generated files
/// * `secrets` - Credentials collected for the provider
pub fn scaffold_frontend(
    runner: &dyn CommandRunner,
    template_dir: &Path,
    project_dir: &Path,
    frontend: Frontend,
    social_login: SocialLogin,
    project_name: &str,
    secrets: &Secrets,
) -> Result<()> {
    log::info!("Checking Node.js version...");
    check_node_version(runner, project_dir)?;

    log::info!("Setting up React frontend with Vite...");
    runner.run(
        "npm",
        &["create", "vite@4.4.0", "frontend", "--", "--template", "react"],
        project_dir,
    )?;
    let frontend_dir = project_dir.join("frontend");

    log::info!("Copying frontend templates...");
    copy_templates(&template_dir.join(FRONTEND_TEMPLATES), &frontend_dir)?;

    // Remove generator defaults the templates replace.
    delete_file(frontend_dir.join(".gitignore"))?;
    delete_file(frontend_dir.join(".eslintrc.cjs"))?;
    delete_file(frontend_dir.join("src").join("App.css"))?;
    delete_file(frontend_dir.join("src").join("index.css"))?;

    log::info!("Updating package.json with framework dependencies...");
    update_manifest(
        frontend_dir.join("package.json"),
        &framework_dependencies(frontend)?,
    )?;

    log::info!("Installing frontend dependencies...");
    runner.run("npm", &["install"], &frontend_dir)?;

    log::info!("Generating Navbar for the selected frontend framework...");
    install_navbar(template_dir, &frontend_dir, frontend, project_name)?;

    if frontend == Frontend::Material {
        install_material_files(template_dir, &frontend_dir)?;
    }

    write_frontend_env(&frontend_dir, social_login, secrets)?;

    if social_login != SocialLogin::None {
        install_auth_buttons(template_dir, &frontend_dir, social_login)?;
    } else {
        log::info!("No social login selected. Skipping auth buttons creation.");
    }

    replace_placeholder(
        &frontend_dir.join("index.html"),
        PROJECT_NAME_PLACEHOLDER,
        project_name,
    )?;

    install_project_files(template_dir, project_dir, project_name)?;

    log::info!("React frontend set up successfully.");
    Ok(())
}

/// Ensures Node.js is installed and at least the required major version.
fn check_node_version(runner: &dyn CommandRunner, cwd: &Path) -> Result<()> {
    let output = runner.run("node", &["--version"], cwd)?;
    let version = output.stdout.trim().trim_start_matches('v').to_string();

    let major: u32 = version
        .split('.')
        .next()
        .and_then(|part| part.parse().ok())
        .ok_or_else(|| Error::NodeVersionError { version: version.clone() })?;

    if major < NODE_MIN_MAJOR {
        return Err(Error::NodeVersionError { version });
    }
    Ok(())
}

/// Installs the framework's navbar template as `src/components/Navbar.jsx`
/// and substitutes the project name into it.
fn install_navbar(
    template_dir: &Path,
    frontend_dir: &Path,
    frontend: Frontend,
    project_name: &str,
) -> Result<()> {
    let navbar_template = template_dir
        .join(HELPER_FILES)
        .join("navbar")
        .join(frontend.navbar_template());
    if !navbar_template.is_file() {
        return Err(Error::FileMissingError {
            path: navbar_template.display().to_string(),
        });
    }

    let dest_navbar =
        frontend_dir.join("src").join("components").join("Navbar.jsx");
    copy_file(&navbar_template, &dest_navbar)?;
    replace_placeholder(&dest_navbar, PROJECT_NAME_PLACEHOLDER, project_name)
}

/// Installs the Material entrypoint, stylesheet, and auth pages.
fn install_material_files(template_dir: &Path, frontend_dir: &Path) -> Result<()> {
    let mui_dir = template_dir.join(HELPER_FILES).join("mui");
    let src = frontend_dir.join("src");

    let installs = [
        ("mui_main.jsx", src.join("main.jsx")),
        ("mui_main.css", src.join("styles").join("main.css")),
        ("Login.jsx", src.join("pages").join("Login.jsx")),
        ("Register.jsx", src.join("pages").join("Register.jsx")),
    ];

    for (template_name, dest) in installs {
        let template = mui_dir.join(template_name);
        if !template.is_file() {
            return Err(Error::FileMissingError {
                path: template.display().to_string(),
            });
        }
        copy_file(&template, &dest)?;
        log::info!("Generated '{}'.", dest.display());
    }
    Ok(())
}

/// Writes the frontend `.env` with the social login choice and, when
/// present, `VITE_`-prefixed copies of the collected secrets.
fn write_frontend_env(
    frontend_dir: &Path,
    social_login: SocialLogin,
    secrets: &Secrets,
) -> Result<()> {
    let mut entries = Secrets::new();
    entries.insert("VITE_SOCIAL_LOGIN".to_string(), social_login.to_string());
    for (key, value) in secrets {
        entries.insert(format!("VITE_{key}"), value.clone());
    }
    write_env_file(frontend_dir, &entries)
}

/// Installs the shared auth button component plus the provider's login
/// button under `src/components/auth_buttons/`.
fn install_auth_buttons(
    template_dir: &Path,
    frontend_dir: &Path,
    social_login: SocialLogin,
) -> Result<()> {
    log::info!("Setting up authentication buttons...");
    let auth_buttons_dir = template_dir.join(HELPER_FILES).join("auth_buttons");
    let dest_dir =
        frontend_dir.join("src").join("components").join("auth_buttons");

    let mut button_files = vec!["AuthButtons.jsx"];
    if let Some(login_button) = social_login.login_button_template() {
        button_files.push(login_button);
    }

    for file_name in button_files {
        let template = auth_buttons_dir.join(file_name);
        if !template.is_file() {
            return Err(Error::FileMissingError {
                path: template.display().to_string(),
            });
        }
        copy_file(&template, &dest_dir.join(file_name))?;
    }
    Ok(())
}

/// Installs the project-root files kept outside the generated subprojects:
/// `.gitignore`, `LICENSE`, `README.md`, and the frontend ESLint config.
fn install_project_files(
    template_dir: &Path,
    project_dir: &Path,
    project_name: &str,
) -> Result<()> {
    log::info!("Generating .gitignore, LICENSE, and README.md files...");
    let helper_files_dir = template_dir.join(HELPER_FILES);

    let installs = [
        ("gitignore.txt", project_dir.join(".gitignore")),
        ("LICENSE", project_dir.join("LICENSE")),
        ("README.md", project_dir.join("README.md")),
        ("eslintrc.json", project_dir.join("frontend").join(".eslintrc.json")),
    ];

    for (template_name, dest) in installs {
        let template = helper_files_dir.join(template_name);
        if !template.is_file() {
            return Err(Error::FileMissingError {
                path: template.display().to_string(),
            });
        }
        copy_file(&template, &dest)?;
        log::info!("Generated '{}'.", dest.display());
    }

    replace_placeholder(
        &project_dir.join("README.md"),
        PROJECT_NAME_PLACEHOLDER,
        project_name,
    )
}
