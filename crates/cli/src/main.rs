use clap::{Parser, Subcommand};
use tcr_core::ContentService;
use tcr_types::Slug;

#[derive(Parser)]
#[command(name = "tcr")]
#[command(about = "Treatment content resolver CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every routing slug in the catalogue
    List,
    /// Resolve a slug and print the detail record as JSON
    Show {
        /// Raw slug, as it appears in the page URL
        slug: String,
        /// Compact output instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },
    /// Check catalogue, alias and registry consistency
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            let service = ContentService::new();
            for slug in service.list_slugs() {
                println!("{slug}");
            }
        }
        Some(Commands::Show { slug, compact }) => {
            let service = ContentService::new();
            let slug = Slug::new(&slug)?;
            match service.resolve(&slug) {
                Some(detail) => {
                    let json = if compact {
                        serde_json::to_string(&detail)?
                    } else {
                        serde_json::to_string_pretty(&detail)?
                    };
                    println!("{json}");
                }
                None => {
                    eprintln!("No catalogue entry routes {slug}");
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Check) => {
            tcr_core::verify()?;
            println!("Catalogue, aliases and registry are consistent.");
        }
        None => {
            println!("Use --help to see available commands.");
        }
    }

    Ok(())
}
