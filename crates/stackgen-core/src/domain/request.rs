//! The generation request value object.
//!
//! [`GenerationRequest`] holds every generator input. Construction goes
//! through [`GenerationRequestBuilder`], which carries the sample defaults
//! and validates on `build()`. A constructed request is always valid, so
//! the application layer never re-checks fields.

use std::path::{Path, PathBuf};

use crate::domain::{DomainError, TemplateSelector};

/// Default published port for the database service.
pub const DEFAULT_DATABASE_PORT: u16 = 27017;
/// Default published port for the HTTP service.
pub const DEFAULT_HTTP_PORT: u16 = 8080;
/// Sample database user, intended to be replaced for real deployments.
pub const DEFAULT_DATABASE_USER: &str = "admin";
/// Sample database password, intended to be replaced for real deployments.
pub const DEFAULT_DATABASE_PASSWORD: &str = "p455w0rd";
/// Sample API key seeded into the generated environment file.
pub const DEFAULT_API_KEY: &str = "sample-abcdef";

/// All inputs to one generation run.
///
/// The two ports are distinct by convention but not enforced distinct;
/// credential values are inserted verbatim into the generated env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    target_path: PathBuf,
    template: TemplateSelector,
    database_port: u16,
    http_port: u16,
    database_user: String,
    database_password: String,
    api_key: String,
}

impl GenerationRequest {
    /// Start building a request for the given target directory and template.
    pub fn builder(
        target_path: impl Into<PathBuf>,
        template: TemplateSelector,
    ) -> GenerationRequestBuilder {
        GenerationRequestBuilder {
            target_path: target_path.into(),
            template,
            database_port: DEFAULT_DATABASE_PORT,
            http_port: DEFAULT_HTTP_PORT,
            database_user: DEFAULT_DATABASE_USER.into(),
            database_password: DEFAULT_DATABASE_PASSWORD.into(),
            api_key: DEFAULT_API_KEY.into(),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn template(&self) -> &TemplateSelector {
        &self.template
    }

    pub fn database_port(&self) -> u16 {
        self.database_port
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn database_user(&self) -> &str {
        &self.database_user
    }

    pub fn database_password(&self) -> &str {
        &self.database_password
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Builder for [`GenerationRequest`].
///
/// Every optional field starts at its sample default; `build()` validates
/// the final state.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    target_path: PathBuf,
    template: TemplateSelector,
    database_port: u16,
    http_port: u16,
    database_user: String,
    database_password: String,
    api_key: String,
}

impl GenerationRequestBuilder {
    pub fn database_port(mut self, port: u16) -> Self {
        self.database_port = port;
        self
    }

    pub fn http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    pub fn database_user(mut self, user: impl Into<String>) -> Self {
        self.database_user = user.into();
        self
    }

    pub fn database_password(mut self, password: impl Into<String>) -> Self {
        self.database_password = password.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Validate and produce the request.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        validate_port(self.database_port, "database_port")?;
        validate_port(self.http_port, "http_port")?;
        validate_value(&self.database_user, "database_user")?;
        validate_value(&self.database_password, "database_password")?;
        validate_value(&self.api_key, "api_key")?;

        Ok(GenerationRequest {
            target_path: self.target_path,
            template: self.template,
            database_port: self.database_port,
            http_port: self.http_port,
            database_user: self.database_user,
            database_password: self.database_password,
            api_key: self.api_key,
        })
    }
}

fn validate_port(port: u16, field: &'static str) -> Result<(), DomainError> {
    if port == 0 {
        return Err(DomainError::InvalidPort { field });
    }
    Ok(())
}

fn validate_value(value: &str, field: &'static str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    // Env-file lines are KEY=VALUE with no quoting; a line break in a value
    // would silently corrupt the artifact.
    if value.contains('\n') || value.contains('\r') {
        return Err(DomainError::UnsafeValue { field });
    }
    Ok(())
}
