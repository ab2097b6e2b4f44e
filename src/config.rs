//! Environment selection and client defaults.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Base URL used for [`Environment::Sandbox`].
pub const SANDBOX_BASE_URL: &str = "https://sandbox.api.ecraspay.com";

/// Base URL used for [`Environment::Live`].
pub const LIVE_BASE_URL: &str = "https://api.ecraspay.com";

/// Request timeout applied when the builder does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deployment target of the gateway.
///
/// The selector is deliberately lenient: `"live"` (any casing) means
/// production, every other string falls back to the sandbox. Credentials are
/// environment-specific, so a typo'd selector fails authentication rather
/// than silently charging real money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Live,
}

impl Environment {
    /// Get the environment identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Live => "live",
        }
    }

    /// Base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Live => LIVE_BASE_URL,
        }
    }

    /// Resolve an environment by name. `"live"` selects production;
    /// anything else selects the sandbox.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("live") {
            Environment::Live
        } else {
            Environment::Sandbox
        }
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
