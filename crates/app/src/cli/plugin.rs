use clap::Args;
use has_one_product_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct PluginArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn install(args: PluginArgs) -> Result<(), String> {
    let context = connect(&args).await?;

    let report = context
        .lifecycle
        .install()
        .await
        .map_err(|error| format!("failed to install: {error}"))?;

    println!("resources_installed: {}", report.resources_installed);

    Ok(())
}

pub(crate) async fn uninstall(args: PluginArgs) -> Result<(), String> {
    let context = connect(&args).await?;

    let report = context
        .lifecycle
        .uninstall()
        .await
        .map_err(|error| format!("failed to uninstall: {error}"))?;

    println!("requirements_removed: {}", report.requirements_removed);
    println!("settings_removed: {}", report.settings_removed);
    println!("resources_removed: {}", report.resources_removed);

    Ok(())
}

async fn connect(args: &PluginArgs) -> Result<AppContext, String> {
    AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
