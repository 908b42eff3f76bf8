use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

const MIN_PASSWORD_CHARS: usize = 6;

/// Failures from the auth service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_CHARS} characters")]
    WeakPassword,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The signed-in identity, as exposed to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
}

/// A registered account. The password is stored as a salted SHA-256
/// digest, never in clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Account {
    uid: String,
    email: String,
    salt: String,
    password_hash: String,
}

fn accounts_path(dir: &Path) -> PathBuf {
    dir.join("accounts.json")
}

fn session_path(dir: &Path) -> PathBuf {
    dir.join("session.json")
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn load_accounts(dir: &Path) -> Result<Vec<Account>, StoreError> {
    let content = match fs::read_to_string(accounts_path(dir)) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content)?)
}

fn save_accounts(dir: &Path, accounts: &[Account]) -> Result<(), StoreError> {
    fs::create_dir_all(dir)?;
    let path = accounts_path(dir);
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_string_pretty(accounts)?)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

fn write_session(dir: &Path, user: &AuthUser) -> Result<(), StoreError> {
    fs::create_dir_all(dir)?;
    let path = session_path(dir);
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_string_pretty(user)?)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

/// The currently signed-in user, if any. An absent or unreadable session
/// document means signed out.
pub fn current_user(dir: &Path) -> Option<AuthUser> {
    let content = fs::read_to_string(session_path(dir)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Register a new account and sign it in.
pub fn sign_up(dir: &Path, email: &str, password: &str) -> Result<AuthUser, AuthError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AuthError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::WeakPassword);
    }

    let mut accounts = load_accounts(dir)?;
    if accounts.iter().any(|a| a.email.eq_ignore_ascii_case(email)) {
        return Err(AuthError::EmailTaken);
    }

    let salt = Uuid::new_v4().to_string();
    let account = Account {
        uid: Uuid::new_v4().to_string(),
        email: email.to_string(),
        password_hash: hash_password(&salt, password),
        salt,
    };
    let user = AuthUser {
        uid: account.uid.clone(),
        email: account.email.clone(),
    };
    accounts.push(account);
    save_accounts(dir, &accounts)?;
    write_session(dir, &user)?;
    Ok(user)
}

/// Verify credentials and sign the account in.
pub fn sign_in(dir: &Path, email: &str, password: &str) -> Result<AuthUser, AuthError> {
    let email = email.trim();
    let accounts = load_accounts(dir)?;
    let account = accounts
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email))
        .ok_or(AuthError::InvalidCredentials)?;
    if hash_password(&account.salt, password) != account.password_hash {
        return Err(AuthError::InvalidCredentials);
    }

    let user = AuthUser {
        uid: account.uid.clone(),
        email: account.email.clone(),
    };
    write_session(dir, &user)?;
    Ok(user)
}

/// Sign out by removing the session document. Signing out while already
/// signed out is not an error.
pub fn sign_out(dir: &Path) -> Result<(), AuthError> {
    match fs::remove_file(session_path(dir)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AuthError::Store(e.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> tempfile::TempDir {
        tempfile::tempdir().expect("tempdir")
    }

    #[test]
    fn sign_up_then_current_user() {
        let dir = scratch();
        let user = sign_up(dir.path(), "a@example.com", "secret1").unwrap();
        assert_eq!(user.email, "a@example.com");
        assert_eq!(current_user(dir.path()), Some(user));
    }

    #[test]
    fn sign_up_rejects_bad_email() {
        let dir = scratch();
        assert!(matches!(
            sign_up(dir.path(), "", "secret1"),
            Err(AuthError::InvalidEmail)
        ));
        assert!(matches!(
            sign_up(dir.path(), "not-an-email", "secret1"),
            Err(AuthError::InvalidEmail)
        ));
    }

    #[test]
    fn sign_up_rejects_short_password() {
        let dir = scratch();
        assert!(matches!(
            sign_up(dir.path(), "a@example.com", "short"),
            Err(AuthError::WeakPassword)
        ));
    }

    #[test]
    fn sign_up_rejects_duplicate_email_case_insensitively() {
        let dir = scratch();
        sign_up(dir.path(), "a@example.com", "secret1").unwrap();
        assert!(matches!(
            sign_up(dir.path(), "A@Example.COM", "secret2"),
            Err(AuthError::EmailTaken)
        ));
    }

    #[test]
    fn sign_in_round_trip() {
        let dir = scratch();
        let created = sign_up(dir.path(), "a@example.com", "secret1").unwrap();
        sign_out(dir.path()).unwrap();
        assert_eq!(current_user(dir.path()), None);

        let user = sign_in(dir.path(), "a@example.com", "secret1").unwrap();
        assert_eq!(user.uid, created.uid);
        assert_eq!(current_user(dir.path()), Some(user));
    }

    #[test]
    fn sign_in_wrong_password_rejected() {
        let dir = scratch();
        sign_up(dir.path(), "a@example.com", "secret1").unwrap();
        assert!(matches!(
            sign_in(dir.path(), "a@example.com", "wrong-1"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn sign_in_unknown_email_rejected() {
        let dir = scratch();
        assert!(matches!(
            sign_in(dir.path(), "ghost@example.com", "secret1"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn sign_out_is_idempotent() {
        let dir = scratch();
        sign_out(dir.path()).unwrap();
        sign_up(dir.path(), "a@example.com", "secret1").unwrap();
        sign_out(dir.path()).unwrap();
        sign_out(dir.path()).unwrap();
        assert_eq!(current_user(dir.path()), None);
    }

    #[test]
    fn password_digest_is_salted() {
        let dir = scratch();
        sign_up(dir.path(), "a@example.com", "secret1").unwrap();
        let raw = fs::read_to_string(accounts_path(dir.path())).unwrap();
        assert!(!raw.contains("secret1"));

        // Same password, different salt, different digest.
        assert_ne!(
            hash_password("salt-a", "secret1"),
            hash_password("salt-b", "secret1")
        );
    }
}
