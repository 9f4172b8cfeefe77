//! Credential validation for the AtomSphere API.
//!
//! Validity is recomputed on every call; the credential set is immutable for
//! the process lifetime, so there is nothing to cache. When the set is
//! incomplete a diagnostic marker file is written best-effort: a failure to
//! write it is logged and swallowed, never raised.

use std::path::Path;

use tracing::{error, info, warn};

use crate::core::config::BoomiConfig;

/// Names of the environment variables backing each credential field, used in
/// the diagnostic marker so an operator knows what to set.
const FIELD_VARS: [(&str, fn(&BoomiConfig) -> &str); 4] = [
    ("BOOMI_USER", |c| &c.user),
    ("BOOMI_TOKEN", |c| &c.token),
    ("BOOMI_ACCOUNT_ID", |c| &c.account_id),
    ("BOOMI_ENVIRONMENT_ID", |c| &c.environment_id),
];

/// Return the env var names of all empty credential fields.
pub fn missing_fields(boomi: &BoomiConfig) -> Vec<&'static str> {
    FIELD_VARS
        .iter()
        .filter(|(_, get)| get(boomi).is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Check whether all four credential fields are non-empty.
pub fn is_valid(boomi: &BoomiConfig) -> bool {
    missing_fields(boomi).is_empty()
}

/// Validate the credential set, writing a diagnostic marker when incomplete.
///
/// Returns `true` when all four fields are populated. When any field is
/// empty, exactly one marker write is attempted at `diagnostics_path`
/// listing the missing variables.
pub fn validate(boomi: &BoomiConfig, diagnostics_path: &Path) -> bool {
    let missing = missing_fields(boomi);

    if missing.is_empty() {
        info!("Boomi credentials validated successfully");
        return true;
    }

    let message = format!("Missing required Boomi credentials: {}", missing.join(", "));
    error!("{}", message);

    let contents = format!("{message}\nPlease verify these configuration values.\n");
    if let Err(err) = std::fs::write(diagnostics_path, contents) {
        warn!(
            "Could not write credential diagnostics to {}: {}",
            diagnostics_path.display(),
            err
        );
    }

    false
}
