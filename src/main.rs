use clap::{Parser, Subcommand};
use photogal::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "photogal")]
#[command(about = "Static gallery builder for JSON album documents")]
#[command(long_about = "\
Static gallery builder for JSON album documents

Two JSON documents drive the site: a navigation descriptor shared by every
page, and one album document per gallery page. Each album becomes one HTML
page with navigation, a hero header, a PhotoSwipe-ready image grid, and a
footer. index.html aliases the configured default page.

Site structure:

  site/
  ├── config.toml                  # Site config (optional)
  ├── config/
  │   ├── nav.json                 # Navigation descriptor
  │   └── albums/
  │       ├── nature.json          # Album document → nature.html
  │       └── urban.json           # Album document → urban.html
  └── assets/                      # Static files → copied to output root

Failure policy: a broken nav.json builds the site with empty navigation; a
broken album document becomes a static error page for that route only.

Run 'photogal gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site: one page per album document, plus assets
    Build,
    /// Validate the site documents without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = generate::check(&cli.source)?;
            output::print_build_output(&report);
            println!("==> Site is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
