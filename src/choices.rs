use std::fmt::Display;

/// Validates a raw numeric choice against the set of accepted options.
///
/// # Arguments
/// * `raw` - The user's input as typed
/// * `allowed` - The accepted integer options
///
/// # Returns
/// * `bool` - Whether the input names one of the accepted options
///
/// # Behavior
/// Emits a human-readable diagnostic and returns false for non-numeric input
/// or for a number outside the accepted set. Never panics.
pub fn validate_choice(raw: &str, allowed: &[i64]) -> bool {
    let choice = match raw.trim().parse::<i64>() {
        Ok(choice) => choice,
        Err(_) => {
            log::error!(
                "Invalid input! '{raw}' is not a number. Please choose a valid option."
            );
            return false;
        }
    };

    if !allowed.contains(&choice) {
        log::error!("Invalid choice '{choice}'! Please choose a valid number option.");
        return false;
    }
    true
}

/// Frontend framework offered by `cook`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    Bootstrap,
    Material,
}

impl Frontend {
    /// Accepted numeric options for the frontend prompt.
    pub const CHOICES: &'static [i64] = &[1, 2];

    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Frontend::Bootstrap),
            2 => Some(Frontend::Material),
            _ => None,
        }
    }

    /// File name of this framework's navbar template under
    /// `helper_files/navbar/`.
    pub fn navbar_template(&self) -> &'static str {
        match self {
            Frontend::Bootstrap => "BootstrapNavbar.jsx",
            Frontend::Material => "MaterialNavbar.jsx",
        }
    }
}

impl Display for Frontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frontend::Bootstrap => "bootstrap",
            Frontend::Material => "material",
        };
        write!(f, "{s}")
    }
}

/// Social login provider offered by `cook`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLogin {
    Google,
    None,
}

impl SocialLogin {
    /// Accepted numeric options for the social login prompt.
    pub const CHOICES: &'static [i64] = &[1, 2];

    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(SocialLogin::Google),
            2 => Some(SocialLogin::None),
            _ => None,
        }
    }

    /// File name of this provider's login button template under
    /// `helper_files/auth_buttons/`.
    pub fn login_button_template(&self) -> Option<&'static str> {
        match self {
            SocialLogin::Google => Some("GoogleLoginButton.jsx"),
            SocialLogin::None => None,
        }
    }
}

impl Display for SocialLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SocialLogin::Google => "google",
            SocialLogin::None => "none",
        };
        write!(f, "{s}")
    }
}
