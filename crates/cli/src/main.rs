//! Catalog CLI - Admin user provisioning tools.
//!
//! # Usage
//!
//! ```bash
//! # Hash a password and print the SQL to register an admin
//! catalog-cli admin hash-password -e admin@example.com -p 'correct horse battery'
//!
//! # Same, but insert the row directly (uses DATABASE_URL)
//! ADMIN_PASSWORD='correct horse battery' catalog-cli admin hash-password -e admin@example.com --apply
//!
//! # Check a password against a stored hash
//! catalog-cli admin verify-password --hash '$argon2id$v=19$...' -p 'correct horse battery'
//! ```
//!
//! # Commands
//!
//! - `admin hash-password` - Hash a password, print the hash and `INSERT` statement
//! - `admin verify-password` - Verify a password against a PHC hash string

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(author, version, about = "Service catalog CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Hash a password and print the SQL that registers the admin user
    HashPassword {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Plaintext password
        #[arg(short, long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Insert the row into `admin_users` instead of only printing the SQL
        #[arg(long)]
        apply: bool,
    },
    /// Verify a password against a stored hash
    VerifyPassword {
        /// PHC-format hash as stored in `admin_users.password_hash`
        #[arg(long)]
        hash: String,

        /// Plaintext password
        #[arg(short, long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::HashPassword {
                email,
                password,
                apply,
            } => {
                let admin = commands::admin::prepare(&email, &password)?;
                commands::admin::print_registration(&admin);
                if apply {
                    commands::admin::insert(&admin).await?;
                }
            }
            AdminAction::VerifyPassword { hash, password } => {
                commands::admin::check_password(&password, &hash)?;
            }
        },
    }
    Ok(())
}
