use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use link_routes::config::{load_config, ConfigError, ConfigWatcher};
use link_routes::observability::logging::{effective_level, init_logging};
use link_routes::{RouteRegistry, SharedRegistry, Variables};

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Inspect and expand a named route table", long_about = None)]
struct Cli {
    /// Route table file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Log level when RUST_LOG is unset [default: the file's observability.log_level]
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes in table order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single route definition
    Show { name: String },
    /// Expand a route into a URL
    Url {
        name: String,
        /// Template variables as NAME=VALUE; repeat a name to build a list
        vars: Vec<String>,
    },
    /// Validate the route table and report every problem
    Check,
    /// Reload the route table whenever the file changes
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let loaded = load_config(&cli.config);

    let configured = loaded.as_ref().ok().map(|config| &config.observability);
    let level = effective_level(cli.log_level.as_deref(), configured).to_string();
    init_logging(&level)?;

    match cli.command {
        Commands::List { json } => {
            let routes = loaded?.into_registry()?;
            if json {
                println!("{}", serde_json::to_string_pretty(routes.routes())?);
            } else {
                print_table(&routes);
            }
        }
        Commands::Show { name } => {
            let routes = loaded?.into_registry()?;
            let route = routes.find_strict(&name)?;
            println!("name:      {}", route.name());
            println!("path:      {}", route.path());
            println!("templated: {}", route.is_templated());
        }
        Commands::Url { name, vars } => {
            let routes = loaded?.into_registry()?;
            let variables = parse_vars(&vars)?;
            println!("{}", routes.url_for(&name, &variables)?);
        }
        Commands::Check => match loaded {
            Ok(config) => {
                let routes = config.into_registry()?;
                println!("OK: {} routes", routes.len());
            }
            Err(ConfigError::Validation(errors)) => {
                for error in &errors {
                    eprintln!("error: {}", error);
                }
                let problems = format!("{} problems in {}", errors.len(), cli.config.display());
                return Err(problems.into());
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Watch => {
            let routes = loaded?.into_registry()?;
            watch(cli.config, routes).await?;
        }
    }

    Ok(())
}

async fn watch(
    path: PathBuf,
    routes: RouteRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let shared = Arc::new(SharedRegistry::new(routes));
    print_table(&shared.load());

    let (watcher, mut updates) = ConfigWatcher::new(&path, shared);
    let _watcher = watcher.run()?;

    while let Some(routes) = updates.recv().await {
        print_table(&routes);
    }

    Ok(())
}

fn print_table(routes: &RouteRegistry) {
    let width = routes.names().map(str::len).max().unwrap_or(0);
    for route in routes {
        let marker = if route.is_templated() { " (templated)" } else { "" };
        println!("{:width$}  {}{}", route.name(), route.path(), marker, width = width);
    }
}

fn parse_vars(pairs: &[String]) -> Result<Variables, String> {
    let mut variables = Variables::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, got {pair:?}"))?;
        variables.push(name, value);
    }
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use link_routes::VarValue;

    #[test]
    fn test_parse_vars() {
        let vars = parse_vars(&["q=rust".into(), "tag=a".into(), "tag=b".into()]).unwrap();

        assert_eq!(vars.get("q"), Some(&VarValue::String("rust".into())));
        assert_eq!(vars.get("tag"), Some(&VarValue::List(vec!["a".into(), "b".into()])));
    }

    #[test]
    fn test_parse_vars_keeps_equals_in_value() {
        let vars = parse_vars(&["filter=a=b".into()]).unwrap();
        assert_eq!(vars.get("filter"), Some(&VarValue::String("a=b".into())));
    }

    #[test]
    fn test_parse_vars_rejects_bare_name() {
        assert!(parse_vars(&["q".into()]).is_err());
    }
}
