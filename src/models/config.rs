use aws_credential_types::Credentials;
use clap::Parser;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Command-line arguments. Credential and region flags fall back to the
/// usual AWS environment variables before the hard default applies.
#[derive(Debug, Parser)]
#[command(name = "s3tui", version, about = "AWS S3 Terminal UI - Browse S3 buckets and objects")]
pub struct Cli {
    /// AWS Access Key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    /// AWS Secret Access Key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// AWS Session Token
    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,

    /// AWS Region
    #[arg(long, env = "AWS_DEFAULT_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// AWS Profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Limit objects per bucket listing
    #[arg(long, default_value_t = 1000)]
    pub limit: i32,
}

/// Resolved session configuration handed to the client and the event loop.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    pub region: String,
    pub profile: Option<String>,
    pub no_color: bool,
    pub limit: i32,
}

impl From<Cli> for SessionConfig {
    fn from(cli: Cli) -> Self {
        Self {
            access_key_id: cli.access_key_id,
            secret_access_key: cli.secret_access_key,
            session_token: cli.session_token,
            region: cli.region,
            profile: cli.profile,
            no_color: cli.no_color,
            limit: cli.limit,
        }
    }
}

impl SessionConfig {
    /// Static credentials when both id and secret were given; otherwise
    /// credential resolution is left to the ambient provider chain.
    pub fn explicit_credentials(&self) -> Option<Credentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(id), Some(secret)) => Some(Credentials::new(
                id,
                secret,
                self.session_token.clone(),
                None,
                "CommandLine",
            )),
            _ => None,
        }
    }
}
