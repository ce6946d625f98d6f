//! Constant-time credential comparison for the login endpoint.

use secrecy::ExposeSecret;
use subtle::ConstantTimeEq;

use super::AdminConfig;

/// Compare a submitted value against the expected secret.
///
/// Length is not treated as secret and may return early; the byte comparison
/// itself does not depend on where the inputs first differ.
#[must_use]
pub fn compare(submitted: &str, expected: &str) -> bool {
    let submitted = submitted.as_bytes();
    let expected = expected.as_bytes();
    if submitted.len() != expected.len() {
        return false;
    }
    submitted.ct_eq(expected).into()
}

/// Check login credentials against the configured admin identity.
///
/// Fails closed when either expected value is unset. Both fields are always
/// compared so timing does not reveal which one was wrong.
#[must_use]
pub fn credentials_match(config: &AdminConfig, email: &str, password: &str) -> bool {
    let expected_email = config.admin_email().expose_secret();
    let expected_password = config.admin_password().expose_secret();
    if expected_email.is_empty() || expected_password.is_empty() {
        return false;
    }

    let email_ok = compare(email, expected_email);
    let password_ok = compare(password, expected_password);
    email_ok & password_ok
}
