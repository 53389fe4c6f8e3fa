mod render;

use std::cell::RefCell;
use std::io::{BufRead, Write};

use anyhow::Context;
use chargefinder_core::{load_sites, load_zip_locations, AppConfig, Site};
use chargefinder_search::{
    summarize, summarize_cluster, SiteSearchIndex, ZipDirectory, ZipLookup,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chargefinder-cli")]
#[command(about = "Search charging sites by name or zip code")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a single query and print the result list.
    Search { query: String },
    /// Print the summary card for one site.
    Site { id: String },
    /// Print the combined summary for a group of sites.
    Cluster {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Read queries from stdin, one per line. `:select <key>` picks a result.
    Interactive,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("chargefinder-cli: try `search <QUERY>` or `--help`");
        return Ok(());
    };

    let config = chargefinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let sites = load_sites(&config.sites_path)
        .with_context(|| format!("loading sites from {}", config.sites_path.display()))?;

    match command {
        Commands::Search { query } => {
            let directory = load_directory(&config)?;
            let mut index = SiteSearchIndex::new(&sites, directory);
            index.on_query_change(&query)?;
            write_rows(&mut std::io::stdout().lock(), &index)?;
        }
        Commands::Site { id } => {
            let site = find_site(&sites, &id)?;
            println!("{}", render::summary_card(&site.name, &summarize(&site.chargers)));
        }
        Commands::Cluster { ids } => {
            let members = ids
                .iter()
                .map(|id| find_site(&sites, id))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let title = format!("{} sites", members.len());
            println!("{}", render::summary_card(&title, &summarize_cluster(&members)));
        }
        Commands::Interactive => {
            let directory = load_directory(&config)?;
            run_interactive(
                &sites,
                directory,
                std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )?;
        }
    }

    Ok(())
}

fn load_directory(config: &AppConfig) -> anyhow::Result<ZipDirectory> {
    let locations = load_zip_locations(&config.zipcodes_path).with_context(|| {
        format!(
            "loading zip directory from {}",
            config.zipcodes_path.display()
        )
    })?;
    Ok(ZipDirectory::new(locations))
}

fn find_site<'a>(sites: &'a [Site], id: &str) -> anyhow::Result<&'a Site> {
    sites
        .iter()
        .find(|site| site.id == id)
        .ok_or_else(|| anyhow::anyhow!("site '{id}' not found"))
}

fn write_rows<W: Write, L: ZipLookup>(
    out: &mut W,
    index: &SiteSearchIndex<'_, L>,
) -> std::io::Result<()> {
    let rows = index.rows();
    if rows.is_empty() {
        return writeln!(out, "no results for \"{}\"", index.query());
    }
    for row in &rows {
        writeln!(out, "{}", render::result_row(row))?;
    }
    Ok(())
}

/// Treat each input line as a query; `:select <key>` picks from the
/// current results instead.
fn run_interactive<L, R, W>(
    sites: &[Site],
    lookup: L,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    L: ZipLookup,
    R: BufRead,
    W: Write,
{
    let selected: RefCell<Option<String>> = RefCell::new(None);
    let mut index = SiteSearchIndex::new(sites, lookup).with_on_select(|result| {
        *selected.borrow_mut() = Some(format!("selected {:?} {}", result.kind(), result.key()));
    });

    for line in input.lines() {
        let line = line.context("reading input")?;
        if let Some(key) = line.strip_prefix(":select ") {
            let key = key.trim();
            if index.select(key) {
                if let Some(message) = selected.take() {
                    writeln!(out, "{message}")?;
                }
            } else {
                writeln!(out, "no result with key \"{key}\"")?;
            }
            continue;
        }
        let outcome = index.on_query_change(&line).map(|_| ());
        match outcome {
            Ok(()) => write_rows(out, &index)?,
            Err(e) => writeln!(out, "search failed: {e}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
