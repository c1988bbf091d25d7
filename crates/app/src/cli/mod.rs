use clap::{Parser, Subcommand};

mod evaluate;
mod migrate;
mod plugin;

#[derive(Debug, Parser)]
#[command(
    name = "has-one-product",
    about = "Has-one-product discount requirement CLI",
    long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a product list against cart lines without touching the database
    Evaluate(evaluate::EvaluateArgs),

    /// Apply the bundled host schema migrations
    Migrate(migrate::MigrateArgs),

    /// Register the rule's display strings
    Install(plugin::PluginArgs),

    /// Remove the rule's requirements, settings and display strings
    Uninstall(plugin::PluginArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Evaluate(args) => evaluate::run(&args),
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Install(args) => plugin::install(args).await,
            Commands::Uninstall(args) => plugin::uninstall(args).await,
        }
    }
}
