pub mod preview;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use preview::{process_preview_command, PreviewCommand};
use tracing::{debug, level_filters::LevelFilter};

use crate::{
    config::{Config, GistConfig},
    github::DEFAULT_GITHUB_URL,
    updater::run_update,
    utils::{clock::DefaultClock, logging::enable_logging},
    wakatime::{StatsRange, DEFAULT_WAKATIME_URL},
};

#[derive(Parser)]
#[command(name = "waka-box", version, long_about = None)]
#[command(about = "Renders weekly WakaTime language stats into a GitHub gist", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Option<Commands>,
    #[command(flatten)]
    config: ConfigArgs,
    #[arg(long, global = true, value_enum, default_value_t = StatsRange::Last7Days, help = "Stats range requested from WakaTime")]
    range: StatsRange,
    #[arg(long, help = "Enable trace logging")]
    log: bool,
    #[arg(long = "log-dir", help = "Also write logs into daily rotated files in this directory")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Fetch stats and overwrite the gist. Used when no command is given")]
    Update,
    #[command(about = "Print the report to stdout without touching the gist")]
    Preview {
        #[command(flatten)]
        command: PreviewCommand,
    },
}

#[derive(clap::Args)]
struct ConfigArgs {
    #[arg(long = "wakatime-key", env = "WAKATIME_API_KEY", hide_env_values = true)]
    wakatime_api_key: String,
    #[arg(long = "wakatime-url", env = "WAKATIME_API_URL", default_value = DEFAULT_WAKATIME_URL)]
    wakatime_url: String,
    #[arg(long = "github-url", env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_URL)]
    github_url: String,
    #[arg(long = "gist-id", env = "GIST_ID")]
    gist_id: Option<String>,
    #[arg(long = "gh-token", env = "GH_TOKEN", hide_env_values = true)]
    github_token: Option<String>,
}

impl From<ConfigArgs> for Config {
    fn from(value: ConfigArgs) -> Self {
        let gist = match (value.gist_id, value.github_token) {
            (Some(gist_id), Some(github_token)) => Some(GistConfig {
                gist_id,
                github_token,
            }),
            _ => None,
        };
        Config {
            wakatime_api_key: value.wakatime_api_key,
            wakatime_url: value.wakatime_url,
            github_url: value.github_url,
            gist,
        }
    }
}

/// Values from `.env` are loaded before parsing so that they act like regular environment
/// variables. Variables that are already set win.
fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub async fn run_cli() -> Result<()> {
    load_dotenv()?;
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(args.log_dir.as_deref(), logging_level)?;

    let config = Config::from(args.config);
    debug!("Running with {config:?}");
    let http = reqwest::Client::new();

    match args.commands.unwrap_or(Commands::Update) {
        Commands::Update => {
            let (Some(gist), Some(store)) = (&config.gist, config.github_client(http.clone()))
            else {
                return Err(Args::command()
                    .error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "Updating requires both GIST_ID and GH_TOKEN",
                    )
                    .into());
            };
            let stats = config.wakatime_client(http);
            run_update(&stats, &store, &gist.gist_id, args.range, &DefaultClock).await
        }
        Commands::Preview { command } => {
            process_preview_command(command, &config, args.range, http).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Args, Commands, ConfigArgs};
    use crate::{
        config::Config,
        wakatime::{StatsRange, DEFAULT_WAKATIME_URL},
    };

    #[test]
    fn test_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_update() {
        let args = Args::try_parse_from(["waka-box", "--wakatime-key", "key"]).unwrap();
        assert!(args.commands.is_none());
        assert_eq!(args.range, StatsRange::Last7Days);
    }

    fn config_args(gist_id: Option<&str>, github_token: Option<&str>) -> ConfigArgs {
        ConfigArgs {
            wakatime_api_key: "key".into(),
            wakatime_url: DEFAULT_WAKATIME_URL.into(),
            github_url: "http://localhost:1".into(),
            gist_id: gist_id.map(String::from),
            github_token: github_token.map(String::from),
        }
    }

    #[test]
    fn test_gist_needs_both_values() {
        let config = Config::from(config_args(Some("abc"), None));
        assert_eq!(config.github_url, "http://localhost:1");
        assert!(config.gist.is_none());

        assert!(Config::from(config_args(None, Some("token"))).gist.is_none());

        let gist = Config::from(config_args(Some("abc"), Some("token")))
            .gist
            .unwrap();
        assert_eq!(gist.gist_id, "abc");
        assert_eq!(gist.github_token, "token");
    }

    #[test]
    fn test_range_before_and_after_command() {
        let args = Args::try_parse_from([
            "waka-box",
            "--wakatime-key",
            "key",
            "--range",
            "last_30_days",
            "preview",
            "--date",
            "yesterday",
        ])
        .unwrap();
        assert_eq!(args.range, StatsRange::Last30Days);
        assert!(matches!(args.commands, Some(Commands::Preview { .. })));

        let args = Args::try_parse_from([
            "waka-box",
            "--wakatime-key",
            "key",
            "preview",
            "--range",
            "last_year",
        ])
        .unwrap();
        assert_eq!(args.range, StatsRange::LastYear);

        let args = Args::try_parse_from([
            "waka-box",
            "--wakatime-key",
            "key",
            "update",
            "--range",
            "all_time",
        ])
        .unwrap();
        assert_eq!(args.range, StatsRange::AllTime);
        assert!(matches!(args.commands, Some(Commands::Update)));
    }
}
