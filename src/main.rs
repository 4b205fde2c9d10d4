//! # Conserje CLI
//!
//! Command-line interface for the hotel TV interface builder.
//!
//! ## Usage
//!
//! ```bash
//! # Start the editor server
//! conserje serve --listen 0.0.0.0:8080
//!
//! # Start read-only (viewers cannot mutate pages)
//! conserje serve --role viewer
//!
//! # Render a stored page document to HTML
//! conserje render page.json --out page.html
//!
//! # List the built-in template presets
//! conserje templates
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use conserje::ConserjeError;
use conserje::cms::{Role, Session};
use conserje::library::{built_in_tv_templates, built_in_web_templates};
use conserje::page;
use conserje::server::{ServerConfig, serve};

/// Conserje - Hotel TV interface builder
#[derive(Parser, Debug)]
#[command(name = "conserje")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the editor HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Operator name for the session
        #[arg(long, default_value = "Admin")]
        operator: String,

        /// Operator role: admin, editor or viewer
        #[arg(long, default_value = "admin")]
        role: String,
    },

    /// Render a stored page document to static HTML
    Render {
        /// Page document file (the JSON the editor saves)
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List the built-in template presets
    Templates,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ConserjeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conserje=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            operator,
            role,
        } => {
            let session = Session::new(operator, Role::parse(&role)?);
            let config = ServerConfig {
                listen_addr: listen,
            };
            serve(config, session).await?;
        }

        Commands::Render { input, out } => {
            let raw = std::fs::read_to_string(&input)?;
            let html = page::deserialize(&raw).render();

            match out {
                Some(path) => {
                    std::fs::write(&path, &html)?;
                    println!("Saved to {}", path.display());
                }
                None => println!("{}", html),
            }
        }

        Commands::Templates => {
            println!("TV templates:");
            for template in built_in_tv_templates() {
                println!("  {} - {} ({})", template.id, template.name, template.description);
            }
            println!("\nWeb templates:");
            for template in built_in_web_templates() {
                let pages: Vec<_> = template.html_pages().iter().map(|f| f.name.clone()).collect();
                println!(
                    "  {} - {} [{}]",
                    template.id,
                    template.name,
                    pages.join(", ")
                );
            }
        }
    }

    Ok(())
}
