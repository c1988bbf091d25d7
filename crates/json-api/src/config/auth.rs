//! Auth Config

use clap::Args;

/// Admin authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Bearer token required on every admin route
    #[arg(long, env = "ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: String,

    /// Path the admin surface is mounted under, used to build configuration links
    #[arg(long, env = "ADMIN_BASE_PATH", default_value = "/admin")]
    pub admin_base_path: String,
}
