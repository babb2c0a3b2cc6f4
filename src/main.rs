//! text2jira - outline to Jira tickets
//!
//! CLI binary for turning a `-`/`+`/`*` outline into Jira tasks and sub-tasks.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use text2jira::auth::CredentialArgs;
use text2jira::profile::default_path;
use text2jira::submit::{SubmitOptions, DEFAULT_MAX_RESULTS};

mod cli;

#[derive(Parser)]
#[command(name = "text2jira")]
#[command(about = "Create Jira tickets from an indented text outline")]
#[command(version)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Profile store location (defaults to the user config directory)
    #[arg(long, global = true, env = "TEXT2JIRA_PROFILES")]
    profiles_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Server connection flags
#[derive(Args)]
struct ConnectionArgs {
    /// Jira server URL
    #[arg(long)]
    server: Option<String>,

    /// Jira user name
    #[arg(long)]
    user: Option<String>,

    /// Jira password or API token
    #[arg(long)]
    password: Option<String>,

    /// Saved profile ID to take the connection from
    #[arg(long)]
    profile: Option<String>,
}

impl ConnectionArgs {
    fn split(self) -> (CredentialArgs, Option<String>) {
        (
            CredentialArgs {
                server: self.server,
                user: self.user,
                password: self.password,
            },
            self.profile,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create tickets from an outline file
    Submit {
        /// Outline file
        #[arg(long)]
        src: PathBuf,

        #[command(flatten)]
        connection: ConnectionArgs,

        /// Board to file tickets against
        #[arg(long, env = "JIRA_BOARD")]
        board_name: String,

        /// Assignee for issues without a `[name]` tag
        #[arg(long)]
        assignee: Option<String>,

        /// Components applied to every ticket
        #[arg(long, num_args = 1..)]
        components: Vec<String>,

        /// Page size when looking up sprints
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: u32,

        /// Dry run - show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse an outline and print the resulting issues
    Parse {
        /// Outline file
        src: PathBuf,

        /// Print the issue tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Saved server profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Save a server login
    Add {
        /// Server URL
        url: String,
        /// User name
        user: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// List saved logins
    List,
    /// Remove a saved login
    Remove {
        /// Profile ID (or unique prefix)
        id: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

/// Initialize tracing on stderr so command output stays clean
fn init_tracing(verbose: bool) {
    let level = if verbose { "text2jira=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("TEXT2JIRA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let profiles_file = cli.profiles_file;
    let resolve_profiles_path = || profiles_file.clone().map_or_else(default_path, Ok);

    match cli.command {
        Commands::Submit {
            src,
            connection,
            board_name,
            assignee,
            components,
            max_results,
            dry_run,
        } => {
            let (credentials, profile) = connection.split();
            let profiles_path = resolve_profiles_path()?;
            let options = SubmitOptions {
                board_name,
                default_assignee: assignee,
                components,
                max_results,
            };
            cli::run_submit(
                &src,
                credentials,
                profile.as_deref(),
                &profiles_path,
                &options,
                dry_run,
            )
            .await?;
        }
        Commands::Parse { src, json } => {
            cli::run_parse(&src, json)?;
        }
        Commands::Profile { action } => {
            let profiles_path = resolve_profiles_path()?;
            match action {
                ProfileAction::Add {
                    url,
                    user,
                    password,
                } => cli::run_profile_add(&profiles_path, &url, &user, password)?,
                ProfileAction::List => cli::run_profile_list(&profiles_path)?,
                ProfileAction::Remove { id } => cli::run_profile_remove(&profiles_path, &id)?,
            }
        }
        Commands::Auth { action } => match action {
            AuthAction::Test { connection } => {
                let (credentials, profile) = connection.split();
                let profiles_path = resolve_profiles_path()?;
                cli::run_auth_test(credentials, profile.as_deref(), &profiles_path).await?;
            }
        },
    }

    Ok(())
}
