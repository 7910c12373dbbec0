use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use playdeck::cli::{issue_temporary, load_hasher, parse_temporary_length, verify};
use playdeck_core::password::DEFAULT_TEMPORARY_PASSWORD_LENGTH;

#[derive(Parser)]
#[command(name = "playdeck-cli")]
#[command(about = "Playdeck CLI - Credential tools for Playdeck operators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a password with the configured pepper and cost
    HashPassword {
        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Check a password against a stored hash
    VerifyPassword {
        /// Stored hash to check against
        #[arg(long)]
        hash: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Report whether a stored hash uses an outdated cost
    NeedsRehash {
        /// Stored hash to inspect
        hash: String,
    },
    /// Generate a temporary password and the hash to store for it
    TempPassword {
        /// Number of characters (1-39)
        #[arg(
            short = 'l',
            long,
            default_value_t = DEFAULT_TEMPORARY_PASSWORD_LENGTH,
            value_parser = parse_temporary_length
        )]
        length: usize,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let hasher = match load_hasher() {
        Ok(hasher) => hasher,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::HashPassword { password } => {
            let password = password.unwrap_or_else(|| {
                Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .expect("Failed to read password")
            });

            match hasher.hash_blocking(&password) {
                Ok(hash) => println!("{}", hash),
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::VerifyPassword { hash, password } => {
            let hash = hash.unwrap_or_else(|| {
                Input::<String>::new()
                    .with_prompt("Stored hash")
                    .interact_text()
                    .expect("Failed to read hash")
            });
            let password = password.unwrap_or_else(|| {
                Password::new()
                    .with_prompt("Password")
                    .interact()
                    .expect("Failed to read password")
            });

            match verify(&hasher, &password, &hash) {
                Ok(report) => {
                    println!("{}", report);
                    if !report.valid {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
            }
        }
        Commands::NeedsRehash { hash } => match hasher.needs_rehash(&hash) {
            Ok(true) => println!("yes (configured cost is {})", hasher.cost()),
            Ok(false) => println!("no"),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(2);
            }
        },
        Commands::TempPassword { length } => match issue_temporary(&hasher, length) {
            Ok(credential) => {
                println!("Password: {}", credential.password);
                println!("Hash:     {}", credential.hash);
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
    }
}
