//! Console router CLI.
//!
//! Inspects the monitor console's route table and replays navigations
//! through the authentication guard.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use clap::{Parser, Subcommand};

use console_router::config::load_or_default;
use console_router::navigation::resolve_location;
use console_router::observability::logging;
use console_router::session::AccessToken;
use console_router::{console_routes, Router, SessionAuth, TokenStore};

#[derive(Parser)]
#[command(name = "console-router")]
#[command(about = "Route table and navigation guard for the monitor console", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Resolve a path to its route
    Resolve { path: String },
    /// Run navigations through the guard, in order
    Navigate {
        #[arg(required = true)]
        locations: Vec<String>,
        /// Navigate with a fresh in-memory session
        #[arg(long, conflicts_with = "session")]
        authenticated: bool,
        /// Navigate with the remembered session from the token file
        #[arg(long)]
        session: bool,
    },
    /// Remember an access token
    Login {
        #[arg(long)]
        token: String,
        /// Token lifetime in seconds
        #[arg(long, default_value_t = 3600)]
        expires_in: i64,
    },
    /// Forget the remembered access token
    Logout,
    /// Show the remembered session
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init(&config.observability.log_level);
    tracing::debug!(
        token_path = %config.session.token_path,
        auth_failure = ?config.guard.auth_failure,
        max_redirects = config.guard.max_redirects,
        "Configuration loaded"
    );

    let table = Arc::new(console_routes()?);

    match cli.command {
        Commands::Routes => {
            for entry in table.iter() {
                let indent = "  ".repeat(entry.depth);
                println!("{indent}{:<28} {}", entry.full_path, entry.name);
            }
        }
        Commands::Resolve { path } => match resolve_location(&table, &path) {
            Ok((_, route)) => {
                let chain: Vec<&str> = route.matched_names().collect();
                println!("{} -> {} [{}]", path, route.name, chain.join(" > "));
            }
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        },
        Commands::Navigate {
            locations,
            authenticated,
            session,
        } => {
            let store = if session {
                TokenStore::open(&config.session.token_path)
            } else {
                let store = TokenStore::in_memory();
                if authenticated {
                    store.store(AccessToken::expires_in("cli-session", Duration::hours(1))?, false)?;
                }
                store
            };
            let auth = SessionAuth::new(Arc::new(store));
            let mut router = Router::from_config(table.clone(), auth, &config.guard);

            for location in &locations {
                match router.push(location).await {
                    Ok(nav) if nav.was_redirected() => println!(
                        "{location} -> {} ({}) via {}",
                        nav.to.full_path,
                        nav.to.name,
                        nav.redirects.join(", ")
                    ),
                    Ok(nav) => println!("{location} -> {} ({})", nav.to.full_path, nav.to.name),
                    Err(e) => eprintln!("{location}: {e}"),
                }
            }
        }
        Commands::Login { token, expires_in } => {
            let store = TokenStore::open(&config.session.token_path);
            let token = AccessToken::expires_in_seconds(token, expires_in)?;
            let expire = token.expire;
            store.store(token, true)?;
            println!("session remembered until {expire}");
        }
        Commands::Logout => {
            TokenStore::open(&config.session.token_path).clear()?;
            println!("session cleared");
        }
        Commands::Status => match TokenStore::open(&config.session.token_path).take()? {
            Some(token) => println!("authenticated until {}", token.expire),
            None => println!("unauthorized"),
        },
    }

    Ok(())
}
