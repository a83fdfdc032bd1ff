use clap::Parser;

use ferret::{normalize, search_pages, Catalog};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            query,
            catalog,
            limit,
            json,
        } => run_search(&query, catalog.as_deref(), limit, json),
        Commands::Inspect { catalog } => run_inspect(catalog.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&str>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::from_file(path),
        None => Ok(Catalog::bundled().clone()),
    }
}

fn run_search(query: &str, catalog: Option<&str>, limit: usize, json: bool) -> Result<(), String> {
    let catalog = load_catalog(catalog)?;
    let query = normalize(query);
    let results = search_pages(&catalog, &query, limit);

    if json {
        let serialized = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", serialized);
    } else {
        display::render_results(&query, &results);
    }

    Ok(())
}

fn run_inspect(catalog: Option<&str>) -> Result<(), String> {
    let catalog = load_catalog(catalog)?;
    display::render_inspect(&catalog);
    Ok(())
}
