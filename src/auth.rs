use std::path::Path;

use dialoguer::{Input, Password};
use indexmap::IndexMap;

use crate::choices::SocialLogin;
use crate::error::Result;
use crate::ioutils::write_file;

/// Client IDs and secrets collected for social login, in prompt order.
pub type Secrets = IndexMap<String, String>;

/// Prompts for the client credentials of the selected social login provider.
///
/// # Arguments
/// * `social_login` - Provider selected by the user
///
/// # Returns
/// * `Result<Secrets>` - Collected credentials; empty when no provider is
///   selected. Empty answers are accepted and filtered out later when env
///   files are written.
pub fn prompt_client_secrets(social_login: SocialLogin) -> Result<Secrets> {
    let mut secrets = Secrets::new();

    if social_login == SocialLogin::Google {
        let client_id: String = Input::new()
            .with_prompt("Enter Google Client ID")
            .allow_empty(true)
            .interact_text()?;
        let client_secret = Password::new()
            .with_prompt("Enter Google Client Secret")
            .allow_empty_password(true)
            .interact()?;

        secrets.insert("GOOGLE_CLIENT_ID".to_string(), client_id);
        secrets.insert("GOOGLE_CLIENT_SECRET".to_string(), client_secret);
    }

    Ok(secrets)
}

/// Writes entries to a `.env` file in the given directory as newline
/// separated `KEY=VALUE` lines. Entries with empty values are omitted.
pub fn write_env_file<P: AsRef<Path>>(dir: P, entries: &Secrets) -> Result<()> {
    let mut content = String::new();
    for (key, value) in entries {
        if !value.is_empty() {
            content.push_str(&format!("{key}={value}\n"));
        }
    }

    let env_path = dir.as_ref().join(".env");
    write_file(&content, &env_path)?;
    log::info!("Wrote '{}'.", env_path.display());
    Ok(())
}
