/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and call `Config::from_env()` at
/// startup. A `.env` file in the working directory is read first when present;
/// variables already set in the process environment take precedence.
///
/// # Panics
///
/// Panics if any required env var is missing or cannot be deserialized.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_vars(std::env::vars())
    }

    /// Build the configuration from an explicit variable list.
    fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).expect("failed to load config from environment")
    }
}
