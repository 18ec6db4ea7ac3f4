/// API credential for the completion service, supplied fresh per session and
/// passed explicitly into the client constructor. Never written to disk.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub const ENV_VAR: &'static str = "OPENAI_API_KEY";

    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    /// Reads the credential from the environment. `None` when the variable is
    /// unset or blank, which the pipeline surfaces as a missing-credential
    /// error before any extraction runs.
    pub fn from_env() -> Option<Self> {
        std::env::var(Self::ENV_VAR).ok().and_then(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keep the key out of logs and error messages.
impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}
