use clap::{Parser, Subcommand};
use linkfeed_server::app;
use linkfeed_server::link::handlers::memory_handler::new_store;
use linkfeed_server::link::schema::build_schema;
use linkfeed_server::shared::util::config::Config;
use std::process::exit;

#[derive(Parser)]
#[command(version, about = "GraphQL server for a feed of bookmarked links")]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "config.toml")]
    config: String,
    /// Overrides server.port from the config file
    #[arg(short, long)]
    port: Option<u16>,
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Print the GraphQL schema in SDL form
    Sdl,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Sdl => {
            println!("{}", build_schema(new_store()).sdl());
            Ok(())
        }
        Commands::Serve => {
            let mut config = match Config::load(&cli.config) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("{}", err);
                    exit(1);
                }
            };
            if let Some(port) = cli.port {
                config.server.port = port;
            }
            app::start(config).await
        }
    }
}
