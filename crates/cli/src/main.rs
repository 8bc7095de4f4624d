mod render_commands;

use std::path::PathBuf;

use {
    clap::{Parser, Subcommand},
    tracing::debug,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use crate::render_commands::{RenderArgs, ScanArgs};

#[derive(Parser)]
#[command(name = "botmux", about = "botmux: render chat-bot replies for messaging channels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// TOML file with render settings (a `[telegram]` table or top-level keys).
    #[arg(long, global = true, env = "BOTMUX_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a message and deliver its chunks to stdout.
    Render(RenderArgs),
    /// Print the markup spans found in a message as JSON lines.
    Scan(ScanArgs),
}

/// Logs go to stderr so stdout only carries rendered output.
fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(&cli);

    debug!(version = env!("CARGO_PKG_VERSION"), "botmux starting");

    match cli.command {
        Commands::Render(args) => render_commands::handle_render(args, cli.config.as_deref()).await,
        Commands::Scan(args) => render_commands::handle_scan(args),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::render_commands::ParseModeArg};

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["botmux", "render", "--message", "*hi*"]).unwrap();
        assert_eq!(cli.log_level, "info");
        assert!(!cli.json_logs);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.message.as_deref(), Some("*hi*"));
        assert_eq!(args.channel, "telegram");
        assert_eq!(args.chat_id, "stdout");
        assert!(args.parse_mode.is_none());
        assert!(!args.json);
    }

    #[test]
    fn render_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "botmux",
            "render",
            "--parse-mode",
            "html",
            "--max-len",
            "100",
            "--boundary",
            " ",
            "--reply-to",
            "9876",
            "--json",
            "--log-level",
            "debug",
            "--json-logs",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(cli.json_logs);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.parse_mode, Some(ParseModeArg::Html));
        assert_eq!(args.max_len, Some(100));
        assert_eq!(args.boundary.as_deref(), Some(" "));
        assert_eq!(args.reply_to.as_deref(), Some("9876"));
        assert!(args.json);
    }

    #[test]
    fn parse_mode_accepts_markdown_v2() {
        let cli = Cli::try_parse_from(["botmux", "render", "--parse-mode", "markdown-v2"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.parse_mode, Some(ParseModeArg::MarkdownV2));
    }

    #[test]
    fn unknown_parse_mode_is_rejected() {
        assert!(Cli::try_parse_from(["botmux", "render", "--parse-mode", "rtf"]).is_err());
    }

    #[test]
    fn scan_takes_message() {
        let cli = Cli::try_parse_from(["botmux", "scan", "-m", "_x_"]).unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.message.as_deref(), Some("_x_"));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["botmux"]).is_err());
    }
}
