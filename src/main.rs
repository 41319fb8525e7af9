//! dictc - DICT protocol dictionary client.
//!
//! A thin command-line front end over the dictc library: connect, run
//! one command, print the result, close.

use dictc::config::{Config, ConfigError};
use dictc::{Database, DictConnection, MatchingStrategy};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: dictc <databases | strategies | match <pattern> [strategy] | define <word> [database]>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        anyhow::bail!(USAGE);
    };

    debug!(host = %config.server.host, port = config.server.port, "connecting");
    let conn = DictConnection::connect_with_port(&config.server.host, config.server.port).await?;

    // One command per invocation, closed whatever the outcome
    let outcome = run(&conn, command, rest, &config).await;
    conn.close().await;
    outcome
}

/// Load configuration from `DICTC_CONFIG`, falling back to `dictc.toml`
/// in the working directory, falling back to defaults.
fn load_config() -> Result<Config, ConfigError> {
    let path = std::env::var("DICTC_CONFIG").unwrap_or_else(|_| "dictc.toml".to_string());
    if std::path::Path::new(&path).exists() {
        Config::load(&path)
    } else {
        Ok(Config::default())
    }
}

async fn run(
    conn: &DictConnection,
    command: &str,
    args: &[String],
    config: &Config,
) -> anyhow::Result<()> {
    match command {
        "databases" => {
            let databases = conn.databases().await?;
            let mut names: Vec<&String> = databases.keys().collect();
            names.sort();
            for name in names {
                println!("{}\t{}", name, databases[name].description());
            }
        }
        "strategies" => {
            for strategy in conn.strategies().await? {
                println!("{}\t{}", strategy.name(), strategy.description());
            }
        }
        "match" => {
            let Some(pattern) = args.first() else {
                anyhow::bail!(USAGE);
            };
            let strategy = match args.get(1) {
                Some(name) => MatchingStrategy::new(name.as_str(), ""),
                None => MatchingStrategy::new(config.lookup.strategy.as_str(), ""),
            };
            let database = Database::new(config.lookup.database.as_str(), "");
            for headword in conn.match_words(pattern, &strategy, &database).await? {
                println!("{headword}");
            }
        }
        "define" => {
            let Some(word) = args.first() else {
                anyhow::bail!(USAGE);
            };
            let database = match args.get(1) {
                Some(name) => Database::new(name.as_str(), ""),
                None => Database::new(config.lookup.database.as_str(), ""),
            };
            let definitions = conn.definitions(word, &database).await?;
            if definitions.is_empty() {
                println!("no definitions found for {word:?}");
            }
            for definition in &definitions {
                println!("From {} [{}]:", definition.word(), definition.database());
                println!();
                println!("{}", definition.body());
                println!();
            }
        }
        _ => anyhow::bail!(USAGE),
    }
    Ok(())
}
