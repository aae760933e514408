use std::path::Path;

use crate::auth::{write_env_file, Secrets};
use crate::choices::SocialLogin;
use crate::command::CommandRunner;
use crate::constants::BACKEND_TEMPLATES;
use crate::error::{Error, Result};
use crate::ioutils::{map_io_error, write_file};
use crate::templates::copy_templates;

/// Python packages installed into the generated backend.
pub const BACKEND_DEPENDENCIES: &[&str] = &[
    "djangorestframework",
    "djangorestframework-simplejwt",
    "django-cors-headers",
    "django-allauth",
    "python-decouple",
];

/// Replacement for the generated `urls.py`, routing the admin and the users
/// API.
const URLS_MODULE: &str = r#"from django.contrib import admin
from django.urls import path, include

urlpatterns = [
    path("admin/", admin.site.urls),
    path("api/", include("users.urls")),  # Added by jollof
]
"#;

/// Configuration appended to the generated `settings.py` regardless of the
/// social login choice.
const COMMON_SETTINGS: &str = r#"
# Set by jollof

import os

# Installed apps
INSTALLED_APPS += [
    "corsheaders",
    "rest_framework",
    "allauth",
    "allauth.account",
    "allauth.socialaccount",
]

# Authentication backends
AUTHENTICATION_BACKENDS = [
    "allauth.account.auth_backends.AuthenticationBackend",
]

# Site ID
SITE_ID = 1

# Django Allauth configuration
ACCOUNT_EMAIL_REQUIRED = True
ACCOUNT_USERNAME_REQUIRED = False
ACCOUNT_AUTHENTICATION_METHOD = "email"
ACCOUNT_EMAIL_VERIFICATION = "none"

# Middleware for CORS
MIDDLEWARE.insert(0, "corsheaders.middleware.CorsMiddleware")
MIDDLEWARE.append("allauth.account.middleware.AccountMiddleware")

# REST Framework Configuration
REST_FRAMEWORK = {
    "DEFAULT_AUTHENTICATION_CLASSES": [
        "rest_framework_simplejwt.authentication.JWTAuthentication",
    ],
    "DEFAULT_PERMISSION_CLASSES": [
        "rest_framework.permissions.IsAuthenticated",
    ],
}

# CORS Configuration
CORS_ALLOWED_ORIGINS = [
    "http://localhost:5173",  # React frontend
]
"#;

/// Google provider block appended when Google login is selected.
const GOOGLE_PROVIDER_SETTINGS: &str = r#"
# Social account providers
SOCIALACCOUNT_PROVIDERS = {
    "google": {
        "SCOPE": [
            "profile",
            "email",
        ],
        "AUTH_PARAMS": {
            "access_type": "online",
        },
        "OAUTH_PKCE_ENABLED": True,
        "APP": {
            "client_id": os.getenv("GOOGLE_CLIENT_ID", ""),
            "secret": os.getenv("GOOGLE_CLIENT_SECRET", ""),
            "key": "",
        },
    },
}
"#;

/// Sets up the Django backend: runs the project generator, installs
/// dependencies, rewrites urls, materializes templates, applies the social
/// login configuration, and runs migrations.
///
/// # Arguments
/// * `runner` - Executor for the external generator and installer commands
/// * `template_dir` - Root of the shipped template tree
/// * `project_dir` - Project directory the backend is generated into
/// * `social_login` - Selected social login provider
/// * `secrets` - Credentials collected for the provider
pub fn scaffold_backend(
    runner: &dyn CommandRunner,
    template_dir: &Path,
    project_dir: &Path,
    social_login: SocialLogin,
    secrets: &Secrets,
) -> Result<()> {
    log::info!("Setting up Django backend...");
    runner.run("django-admin", &["startproject", "backend"], project_dir)?;
    let backend_dir = project_dir.join("backend");

    install_backend_dependencies(runner, &backend_dir)?;

    log::info!("Modifying backend URLs...");
    write_urls(&backend_dir)?;

    log::info!("Copying backend templates...");
    copy_templates(&template_dir.join(BACKEND_TEMPLATES), &backend_dir)?;

    if social_login != SocialLogin::None {
        write_env_file(&backend_dir, secrets)?;
        update_settings(&backend_dir, social_login)?;
    }

    log::info!("Running migrations...");
    runner.run("python", &["manage.py", "migrate"], &backend_dir)?;

    log::info!("Django backend set up successfully.");
    Ok(())
}

/// Upgrades pip, installs the backend dependency set, and records it in
/// `requirements.txt`.
fn install_backend_dependencies(
    runner: &dyn CommandRunner,
    backend_dir: &Path,
) -> Result<()> {
    log::info!("Installing backend dependencies...");
    runner.run("pip", &["install", "--upgrade", "pip"], backend_dir)?;

    let mut args = vec!["install"];
    args.extend_from_slice(BACKEND_DEPENDENCIES);
    runner.run("pip", &args, backend_dir)?;

    write_file(
        &format!("{}\n", BACKEND_DEPENDENCIES.join("\n")),
        backend_dir.join("requirements.txt"),
    )
}

/// Rewrites the generated `backend/urls.py` with the fixed module routing
/// the admin and the users API.
fn write_urls(backend_dir: &Path) -> Result<()> {
    let urls_path = backend_dir.join("backend").join("urls.py");
    if !urls_path.is_file() {
        return Err(Error::FileMissingError { path: urls_path.display().to_string() });
    }
    write_file(URLS_MODULE, &urls_path)
}

/// Appends the auth/CORS/REST configuration to the generated `settings.py`,
/// plus the provider block for the selected social login.
fn update_settings(backend_dir: &Path, social_login: SocialLogin) -> Result<()> {
    let settings_path = backend_dir.join("backend").join("settings.py");
    if !settings_path.is_file() {
        return Err(Error::FileMissingError {
            path: settings_path.display().to_string(),
        });
    }

    let mut content = std::fs::read_to_string(&settings_path)
        .map_err(|e| map_io_error(&settings_path, e))?;
    content.push_str(COMMON_SETTINGS);
    if social_login == SocialLogin::Google {
        content.push_str(GOOGLE_PROVIDER_SETTINGS);
    }
    write_file(&content, &settings_path)?;

    log::info!("Updated '{}' with the selected configurations.", settings_path.display());
    Ok(())
}
