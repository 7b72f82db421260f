use retrieve_bankmail::credentials::{self, Credential, CredentialError};

#[test]
fn test_credential_rejects_empty_fields() {
    let result = Credential::new("".to_string(), "hunter2".to_string());
    assert!(matches!(result, Err(CredentialError::Missing("PAN"))));

    let result = Credential::new("  ".to_string(), "hunter2".to_string());
    assert!(matches!(result, Err(CredentialError::Missing("PAN"))));

    let result = Credential::new("12345678".to_string(), "".to_string());
    assert!(matches!(result, Err(CredentialError::Missing("password"))));
}

#[test]
fn test_credential_accepts_complete_pair() {
    let creds = Credential::new("12345678".to_string(), "hunter2".to_string())
        .expect("Failed to build a complete credential pair");
    assert_eq!(creds.pan, "12345678");
    assert_eq!(creds.password, "hunter2");
}

#[test]
fn test_environment_provides_both_fields() {
    // A single test mutates the environment to avoid races between
    // parallel test threads
    std::env::remove_var("PAN");
    std::env::remove_var("PASSWORD");

    assert_eq!(credentials::stored_pan(), None);

    std::env::set_var("PAN", "12345678");
    std::env::set_var("PASSWORD", "hunter2");

    // Both fields resolved without any prompt
    let pan = credentials::stored_pan().expect("PAN should come from the environment");
    assert_eq!(pan, "12345678");
    let password =
        credentials::stored_password(&pan).expect("password should come from the environment");
    assert_eq!(password, "hunter2");

    // Empty values do not count as provided
    std::env::set_var("PAN", "   ");
    assert_eq!(credentials::stored_pan(), None);

    std::env::remove_var("PAN");
    std::env::remove_var("PASSWORD");
}

#[test]
#[ignore = "Interacts with the system keyring"]
fn test_clear_stored_is_idempotent() {
    // Clearing entries that do not exist must not fail the run
    credentials::clear_stored("99999999");
    credentials::clear_stored("99999999");
}
