use arbitrary::Arbitrary;
use azure_core::auth::TokenCredential;
use azure_identity::AzureCliCredential;
use azure_identity::ClientSecretCredential;
use azure_identity::DefaultAzureCredentialBuilder;
use azure_identity::VirtualMachineManagedIdentityCredential;
use azure_identity::TokenCredentialOptions;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub const TENANT_ID_VAR: &str = "AZURE_TENANT_ID";
pub const CLIENT_ID_VAR: &str = "AZURE_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "AZURE_CLIENT_SECRET";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unknown credential provider: {0}")]
    UnknownProvider(String),
    #[error("missing required environment variable {0}")]
    MissingEnvVar(&'static str),
    #[error("failed to construct credential: {0}")]
    Credential(#[source] azure_core::error::Error),
}

/// How a command obtains its Azure credential.
///
/// Adding a mode means adding a variant here; there is no runtime
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum CredentialMode {
    /// The SDK's ambient chain: environment, managed identity, az CLI.
    Default,
    /// IMDS managed identity, for workloads running on Azure compute.
    Managed,
    /// The local `az login` session.
    Cli,
    /// Client-secret service principal from environment variables.
    ServicePrincipal,
}

impl CredentialMode {
    pub const ALL: [CredentialMode; 4] = [
        CredentialMode::Default,
        CredentialMode::Managed,
        CredentialMode::Cli,
        CredentialMode::ServicePrincipal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CredentialMode::Default => "default",
            CredentialMode::Managed => "managed",
            CredentialMode::Cli => "cli",
            CredentialMode::ServicePrincipal => "service_principal",
        }
    }

    /// Construct the credential for this mode.
    ///
    /// No network traffic happens here; the SDK exchanges tokens lazily on
    /// first use. `ServicePrincipal` reads its three environment variables
    /// eagerly and reports the first one missing.
    pub fn resolve(self) -> Result<Arc<dyn TokenCredential>, AuthError> {
        match self {
            CredentialMode::Default => {
                let credential = DefaultAzureCredentialBuilder::new()
                    .build()
                    .map_err(AuthError::Credential)?;
                Ok(Arc::new(credential))
            }
            CredentialMode::Managed => Ok(Arc::new(VirtualMachineManagedIdentityCredential::new(
                TokenCredentialOptions::default(),
            ))),
            CredentialMode::Cli => Ok(Arc::new(AzureCliCredential::new())),
            CredentialMode::ServicePrincipal => {
                let tenant_id = require_env(TENANT_ID_VAR)?;
                let client_id = require_env(CLIENT_ID_VAR)?;
                let client_secret = require_env(CLIENT_SECRET_VAR)?;
                let options = TokenCredentialOptions::default();
                let authority_host = options.authority_host().map_err(AuthError::Credential)?;
                Ok(Arc::new(ClientSecretCredential::new(
                    azure_core::new_http_client(),
                    authority_host,
                    tenant_id,
                    client_id,
                    client_secret,
                )))
            }
        }
    }
}

impl fmt::Display for CredentialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CredentialMode {
    type Err = AuthError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "service-principal" {
            return Ok(CredentialMode::ServicePrincipal);
        }
        CredentialMode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| AuthError::UnknownProvider(name.to_owned()))
    }
}

fn require_env(name: &'static str) -> Result<String, AuthError> {
    std::env::var(name).map_err(|_| AuthError::MissingEnvVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn every_canonical_name_parses_back_to_its_mode() {
        for mode in CredentialMode::ALL {
            assert_eq!(mode.name().parse::<CredentialMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "kerberos".parse::<CredentialMode>().unwrap_err();
        assert!(matches!(err, AuthError::UnknownProvider(name) if name == "kerberos"));
    }

    #[test]
    fn hyphenated_service_principal_is_accepted() {
        assert_eq!(
            "service-principal".parse::<CredentialMode>().unwrap(),
            CredentialMode::ServicePrincipal
        );
    }

    #[test]
    fn ambient_modes_resolve_without_configuration() {
        for mode in [CredentialMode::Default, CredentialMode::Managed, CredentialMode::Cli] {
            assert!(mode.resolve().is_ok(), "mode {mode} failed to resolve");
        }
    }

    #[test]
    #[serial]
    fn service_principal_reports_the_first_missing_variable() {
        unsafe {
            std::env::remove_var(TENANT_ID_VAR);
            std::env::set_var(CLIENT_ID_VAR, "client");
            std::env::set_var(CLIENT_SECRET_VAR, "secret");
        }
        let err = CredentialMode::ServicePrincipal.resolve().unwrap_err();
        assert!(matches!(err, AuthError::MissingEnvVar(name) if name == TENANT_ID_VAR));
    }

    #[test]
    #[serial]
    fn service_principal_resolves_once_the_environment_is_complete() {
        unsafe {
            std::env::set_var(TENANT_ID_VAR, "tenant");
            std::env::set_var(CLIENT_ID_VAR, "client");
            std::env::set_var(CLIENT_SECRET_VAR, "secret");
        }
        assert!(CredentialMode::ServicePrincipal.resolve().is_ok());
        unsafe {
            std::env::remove_var(TENANT_ID_VAR);
            std::env::remove_var(CLIENT_ID_VAR);
            std::env::remove_var(CLIENT_SECRET_VAR);
        }
    }
}
