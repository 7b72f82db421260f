//! Credential resolution for the Bankwest login.
//!
//! Resolution order for each field: system keyring, then environment
//! (which covers a local `.env` file loaded at startup), then an
//! interactive prompt. The password prompt never echoes. Resolved values
//! live in process memory only; nothing is written back to the keyring.

use std::io::Write;

use keyring::Entry;
use log::{debug, warn};

/// Service name used for keyring entries.
pub const SERVICE_NAME: &str = "retrieve-bankmail";

/// Keyring/environment key for the account identifier.
pub const PAN_KEY: &str = "PAN";

/// Environment key for the password.
pub const PASSWORD_KEY: &str = "PASSWORD";

/// Error type for credential resolution.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Terminal interaction failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),

    /// A required field is still empty after prompting.
    #[error("{0} must not be empty")]
    Missing(&'static str),
}

pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// A resolved login credential pair.
#[derive(Clone)]
pub struct Credential {
    pub pan: String,
    pub password: String,
}

impl Credential {
    /// Builds a credential pair, rejecting empty fields.
    pub fn new(pan: String, password: String) -> CredentialResult<Self> {
        if pan.trim().is_empty() {
            return Err(CredentialError::Missing("PAN"));
        }
        if password.is_empty() {
            return Err(CredentialError::Missing("password"));
        }
        Ok(Credential { pan, password })
    }
}

/// Resolves the credential pair, prompting only for the fields no
/// non-interactive source provides.
pub fn resolve() -> CredentialResult<Credential> {
    let pan = match stored_pan() {
        Some(pan) => pan,
        None => {
            warn!("no credentials available");
            prompt_pan()?
        }
    };

    let password = match stored_password(&pan) {
        Some(password) => password,
        None => {
            warn!("no password available for the PAN provided");
            prompt_password()?
        }
    };

    Credential::new(pan, password)
}

/// Looks up the account identifier in the non-interactive sources.
pub fn stored_pan() -> Option<String> {
    keyring_get(PAN_KEY).or_else(|| env_get(PAN_KEY))
}

/// Looks up the password for a PAN in the non-interactive sources.
pub fn stored_password(pan: &str) -> Option<String> {
    keyring_get(&password_key(pan)).or_else(|| env_get(PASSWORD_KEY))
}

/// Removes the stored keyring entries so the next run prompts afresh.
/// Called after a failed login; stale stored values would otherwise keep
/// failing on every run.
pub fn clear_stored(pan: &str) {
    for key in [password_key(pan), PAN_KEY.to_string()] {
        match Entry::new(SERVICE_NAME, &key).and_then(|entry| entry.delete_credential()) {
            Ok(()) => debug!("removed keyring entry {}", key),
            Err(keyring::Error::NoEntry) => {}
            Err(e) => warn!("unable to remove keyring entry {}: {}", key, e),
        }
    }
}

/// Keyring key holding the password for a given PAN.
fn password_key(pan: &str) -> String {
    format!("{}_{}", PAN_KEY, pan)
}

/// Reads a keyring entry. A missing or unreachable keyring degrades to
/// the next source instead of aborting the run.
fn keyring_get(key: &str) -> Option<String> {
    let entry = match Entry::new(SERVICE_NAME, key) {
        Ok(entry) => entry,
        Err(e) => {
            warn!("keyring unavailable: {}", e);
            return None;
        }
    };

    match entry.get_password() {
        Ok(value) => Some(value),
        Err(keyring::Error::NoEntry) => {
            debug!("no keyring entry for {}", key);
            None
        }
        Err(e) => {
            warn!("unable to read keyring entry {}: {}", key, e);
            None
        }
    }
}

fn env_get(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn prompt_pan() -> CredentialResult<String> {
    print!("Enter your Bankwest PAN: ");
    std::io::stdout().flush()?;

    let mut pan = String::new();
    std::io::stdin().read_line(&mut pan)?;
    Ok(pan.trim().to_string())
}

/// Prompts for the password without echoing, until the user confirms it.
fn prompt_password() -> CredentialResult<String> {
    loop {
        let password = rpassword::prompt_password("Enter your Bankwest online banking password: ")?;

        print!("Are you happy with the password you entered? [y]es or [n]o: ");
        std::io::stdout().flush()?;

        let mut confirm = String::new();
        std::io::stdin().read_line(&mut confirm)?;
        if confirm.trim().to_lowercase().starts_with('y') {
            return Ok(password);
        }
    }
}
