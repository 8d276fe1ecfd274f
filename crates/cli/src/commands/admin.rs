//! Admin user provisioning commands.
//!
//! # Usage
//!
//! ```bash
//! # Print the hash and the INSERT statement to paste into the SQL editor
//! catalog-cli admin hash-password -e admin@example.com -p 'correct horse battery'
//!
//! # Insert the row directly
//! catalog-cli admin hash-password -e admin@example.com -p '...' --apply
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_PASSWORD` - Password, when `--password` is not given
//! - `DATABASE_URL` - `PostgreSQL` connection string (only for `--apply`)

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use catalog_core::{Email, EmailError};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password does not meet requirements.
    #[error("Weak password: {0}")]
    WeakPassword(String),

    /// Argon2 failed to produce a hash.
    #[error("Password hashing failed")]
    PasswordHash,

    /// Stored hash is not a valid PHC string.
    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    /// Password does not match the hash.
    #[error("Password does not match hash")]
    PasswordMismatch,

    /// User already exists.
    #[error("Admin user already exists with email: {0}")]
    UserExists(String),
}

/// A validated admin email with its password hash, ready to be stored.
#[derive(Debug, Clone)]
pub struct AdminRegistration {
    pub email: Email,
    pub password_hash: String,
}

impl AdminRegistration {
    /// SQL that registers this admin in `admin_users`.
    #[must_use]
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO admin_users (email, password_hash) VALUES ({}, {});",
            sql_literal(self.email.as_str()),
            sql_literal(&self.password_hash)
        )
    }
}

/// Validate the inputs and hash the password.
///
/// # Errors
///
/// Returns `AdminError::InvalidEmail` or `AdminError::WeakPassword` for bad
/// input, and `AdminError::PasswordHash` if hashing fails.
pub fn prepare(email: &str, password: &str) -> Result<AdminRegistration, AdminError> {
    let email = Email::parse(email)?;
    validate_password(password)?;
    let password_hash = hash_password(password)?;

    Ok(AdminRegistration {
        email,
        password_hash,
    })
}

/// Print the registration details for an operator to copy.
#[allow(clippy::print_stdout)]
pub fn print_registration(admin: &AdminRegistration) {
    println!("Admin email:   {}", admin.email);
    println!("Password hash: {}", admin.password_hash);
    println!();
    println!("Run this SQL to create the admin user:");
    println!("{}", admin.insert_statement());
}

/// Verify a password and print the outcome for the operator.
///
/// # Errors
///
/// Same as [`verify_password`]; a mismatch is printed before it is returned.
#[allow(clippy::print_stdout)]
pub fn check_password(password: &str, hash: &str) -> Result<(), AdminError> {
    match verify_password(password, hash) {
        Ok(()) => {
            println!("Password matches hash");
            Ok(())
        }
        Err(AdminError::PasswordMismatch) => {
            println!("Password does not match hash");
            Err(AdminError::PasswordMismatch)
        }
        Err(e) => Err(e),
    }
}

/// Insert the admin row using `DATABASE_URL`.
///
/// # Errors
///
/// Returns `AdminError::UserExists` if the email is already registered,
/// `AdminError::MissingEnvVar` without `DATABASE_URL`, and
/// `AdminError::Database` for connection or query failures.
pub async fn insert(admin: &AdminRegistration) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let database_url: SecretString = std::env::var("DATABASE_URL")
        .map_err(|_| AdminError::MissingEnvVar("DATABASE_URL"))?
        .into();

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Creating admin user: {}", admin.email);

    sqlx::query("INSERT INTO admin_users (email, password_hash) VALUES ($1, $2)")
        .bind(admin.email.as_str())
        .bind(&admin.password_hash)
        .execute(&pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return AdminError::UserExists(admin.email.to_string());
            }
            AdminError::Database(e)
        })?;

    tracing::info!("Admin user created: {}", admin.email);
    Ok(())
}

/// Hash a password with Argon2id and a random salt.
///
/// # Errors
///
/// Returns `AdminError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AdminError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AdminError::PasswordHash)
}

/// Verify a password against a PHC hash string.
///
/// # Errors
///
/// Returns `AdminError::InvalidHash` if `hash` cannot be parsed and
/// `AdminError::PasswordMismatch` if the password is wrong.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AdminError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AdminError::InvalidHash(e.to_string()))?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AdminError::PasswordMismatch)
}

fn validate_password(password: &str) -> Result<(), AdminError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AdminError::WeakPassword(format!(
            "must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if password.trim() != password {
        return Err(AdminError::WeakPassword(
            "must not start or end with whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Quote a value as a SQL string literal.
fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_produces_verifiable_hash() {
        let admin = prepare("Owner@Example.com", "correct horse battery").unwrap();

        assert_eq!(admin.email.as_str(), "owner@example.com");
        assert!(admin.password_hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery", &admin.password_hash).is_ok());
        assert!(matches!(
            verify_password("wrong horse battery", &admin.password_hash),
            Err(AdminError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_hash_uses_fresh_salt() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_prepare_rejects_bad_email() {
        assert!(matches!(
            prepare("not-an-email", "correct horse battery"),
            Err(AdminError::InvalidEmail(EmailError::MissingAtSymbol))
        ));
    }

    #[test]
    fn test_prepare_rejects_weak_password() {
        assert!(matches!(
            prepare("admin@example.com", "short"),
            Err(AdminError::WeakPassword(_))
        ));
        assert!(matches!(
            prepare("admin@example.com", " padded password "),
            Err(AdminError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_check_password_reports_outcome() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(check_password("correct horse battery", &hash).is_ok());
        assert!(matches!(
            check_password("wrong horse battery", &hash),
            Err(AdminError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("whatever", "plaintext-not-a-hash"),
            Err(AdminError::InvalidHash(_))
        ));
    }

    #[test]
    fn test_insert_statement() {
        let admin = AdminRegistration {
            email: Email::parse("admin@example.com").unwrap(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        };

        assert_eq!(
            admin.insert_statement(),
            "INSERT INTO admin_users (email, password_hash) VALUES \
             ('admin@example.com', '$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA');"
        );
    }

    #[test]
    fn test_sql_literal_escapes_quotes() {
        assert_eq!(sql_literal("o'brien@example.com"), "'o''brien@example.com'");
        assert_eq!(sql_literal(""), "''");
    }
}
