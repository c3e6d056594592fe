use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::LicenseCatalog;
use crate::cli::OutputFormat;
use crate::core::types::LicenseId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all licenses in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by tag (e.g. "permissive", "copyleft")
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show details of a specific license
    Show {
        /// License short name
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the full reference text
        #[arg(long)]
        full_text: bool,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or the output cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, tag } => {
            let catalog = load(catalog.as_deref())?;
            list(&catalog, tag.as_deref(), format)
        }
        CatalogCommands::Show {
            id,
            catalog,
            full_text,
        } => {
            let catalog = load(catalog.as_deref())?;
            show(&catalog, &id, full_text)
        }
        CatalogCommands::Export { output, catalog } => {
            let catalog = load(catalog.as_deref())?;
            std::fs::write(&output, catalog.to_json()?)?;
            eprintln!("Exported {} licenses to {}", catalog.len(), output.display());
            Ok(())
        }
    }
}

fn load(path: Option<&Path>) -> anyhow::Result<LicenseCatalog> {
    Ok(match path {
        Some(path) => LicenseCatalog::load_from_file(path)?,
        None => LicenseCatalog::load_embedded()?,
    })
}

fn list(catalog: &LicenseCatalog, tag: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let licenses: Vec<_> = catalog
        .licenses
        .iter()
        .filter(|l| tag.map_or(true, |t| l.has_tag(t)))
        .collect();

    match format {
        OutputFormat::Text => {
            println!("{} licenses:", licenses.len());
            for license in licenses {
                println!("  {:<16} {}", license.shortname.as_str(), license.fullname);
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = licenses
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "shortname": l.shortname.as_str(),
                        "fullname": l.fullname,
                        "tags": l.tags,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn show(catalog: &LicenseCatalog, id: &str, full_text: bool) -> anyhow::Result<()> {
    let license = catalog
        .get(&LicenseId::new(id))
        .ok_or_else(|| anyhow::anyhow!("license '{id}' not found in catalog"))?;

    println!("{} ({})", license.shortname, license.fullname);
    if let Some(url) = &license.spdx_url {
        println!("SPDX: {url}");
    }
    if !license.tags.is_empty() {
        println!("Tags: {}", license.tags.join(", "));
    }
    println!("Text: {} tokens", license.tokens.len());

    if full_text {
        println!("\n{}", license.text);
    }

    Ok(())
}
