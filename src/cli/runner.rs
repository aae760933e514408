use std::path::PathBuf;

use dialoguer::Input;

use crate::{
    auth::{prompt_client_secrets, Secrets},
    backend::scaffold_backend,
    choices::{validate_choice, Frontend, SocialLogin},
    cli::CookArgs,
    command::SystemRunner,
    constants::{TEMPLATES_DIR_NAME, TEMPLATES_ENV_VAR},
    error::{Error, Result},
    frontend::scaffold_frontend,
    ioutils::create_dir_all,
};

const FRONTEND_PROMPT: &str = "Choose the frontend framework for your project:\n  1. Bootstrap (default)\n  2. Material Design\nSelect 1 or 2";

const SOCIAL_LOGIN_PROMPT: &str = "Select the social login provider you want to integrate:\n  1. Google\n  2. No social login (default)\nSelect 1 or 2";

/// Main CLI runner that orchestrates a whole scaffold run.
pub struct Runner {
    args: CookArgs,
}

impl Runner {
    pub fn new(args: CookArgs) -> Self {
        Self { args }
    }

    /// Executes the complete scaffold workflow: collect and validate the
    /// choices, then generate the backend and the frontend into the project
    /// directory. Any step failure aborts the run.
    pub fn run(self) -> Result<()> {
        let name = match &self.args.name {
            Some(name) => name.clone(),
            None => Input::new()
                .with_prompt("Please enter your project name")
                .interact_text()?,
        };

        let frontend_raw = self.choice_input(&self.args.frontend, FRONTEND_PROMPT, "1")?;
        let frontend = parse_frontend(&frontend_raw)?;

        let social_login_raw =
            self.choice_input(&self.args.social_login, SOCIAL_LOGIN_PROMPT, "2")?;
        let social_login = parse_social_login(&social_login_raw)?;

        let template_dir = resolve_template_dir(self.args.templates.clone())?;

        log::info!(
            "Creating project '{name}' with {frontend} frontend and {social_login} social login..."
        );

        let project_dir = std::env::current_dir()?.join(&name);
        create_dir_all(&project_dir)?;

        let secrets = if social_login != SocialLogin::None {
            prompt_client_secrets(social_login)?
        } else {
            Secrets::new()
        };

        let runner = SystemRunner;
        scaffold_backend(&runner, &template_dir, &project_dir, social_login, &secrets)?;
        scaffold_frontend(
            &runner,
            &template_dir,
            &project_dir,
            frontend,
            social_login,
            &name,
            &secrets,
        )?;

        println!("Project '{name}' created successfully!");
        Ok(())
    }

    /// Returns the flag value when given, otherwise prompts with a default.
    fn choice_input(
        &self,
        flag: &Option<String>,
        prompt: &str,
        default: &str,
    ) -> Result<String> {
        match flag {
            Some(value) => Ok(value.clone()),
            None => Ok(Input::new()
                .with_prompt(prompt)
                .default(default.to_string())
                .interact_text()?),
        }
    }
}

fn parse_frontend(raw: &str) -> Result<Frontend> {
    if !validate_choice(raw, Frontend::CHOICES) {
        return Err(Error::ValidationError(format!(
            "'{raw}' is not a valid frontend choice"
        )));
    }
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(Frontend::from_choice)
        .ok_or_else(|| {
            Error::ValidationError(format!("'{raw}' is not a valid frontend choice"))
        })
}

fn parse_social_login(raw: &str) -> Result<SocialLogin> {
    if !validate_choice(raw, SocialLogin::CHOICES) {
        return Err(Error::ValidationError(format!(
            "'{raw}' is not a valid social login choice"
        )));
    }
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(SocialLogin::from_choice)
        .ok_or_else(|| {
            Error::ValidationError(format!(
                "'{raw}' is not a valid social login choice"
            ))
        })
}

/// Resolves the template directory: the `--templates` flag wins, then the
/// environment override, then the `templates` directory shipped next to the
/// executable.
pub fn resolve_template_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let candidate = if let Some(dir) = explicit {
        dir
    } else if let Some(dir) = std::env::var_os(TEMPLATES_ENV_VAR) {
        PathBuf::from(dir)
    } else {
        let exe = std::env::current_exe()?;
        match exe.parent() {
            Some(parent) => parent.join(TEMPLATES_DIR_NAME),
            None => PathBuf::from(TEMPLATES_DIR_NAME),
        }
    };

    if !candidate.is_dir() {
        return Err(Error::TemplateDirMissingError {
            template_dir: candidate.display().to_string(),
        });
    }
    Ok(candidate)
}

/// Main entry point for the `cook` subcommand.
pub fn run(args: CookArgs) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_frontend_choices() {
        assert_eq!(parse_frontend("1").unwrap(), Frontend::Bootstrap);
        assert_eq!(parse_frontend("2").unwrap(), Frontend::Material);
        assert_eq!(parse_frontend(" 2 ").unwrap(), Frontend::Material);
    }

    #[test]
    fn rejects_invalid_frontend_choices() {
        assert!(matches!(parse_frontend("3"), Err(Error::ValidationError(_))));
        assert!(matches!(
            parse_frontend("bootstrap"),
            Err(Error::ValidationError(_))
        ));
    }

    #[test]
    fn parses_valid_social_login_choices() {
        assert_eq!(parse_social_login("1").unwrap(), SocialLogin::Google);
        assert_eq!(parse_social_login("2").unwrap(), SocialLogin::None);
    }

    #[test]
    fn rejects_invalid_social_login_choices() {
        assert!(matches!(
            parse_social_login("0"),
            Err(Error::ValidationError(_))
        ));
        assert!(matches!(
            parse_social_login("google"),
            Err(Error::ValidationError(_))
        ));
    }

    #[test]
    fn explicit_template_dir_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let resolved = resolve_template_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());

        let missing = dir.path().join("not_there");
        let result = resolve_template_dir(Some(missing));
        assert!(matches!(result, Err(Error::TemplateDirMissingError { .. })));
    }
}
