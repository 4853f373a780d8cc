//! Logging setup for the command line tool. Hands and verdicts go to
//! stdout, everything logged goes to stderr.

use tracing_subscriber::EnvFilter;

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    /// More logging: -v for info, -vv for debug, -vvv for trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// How log lines are written
    #[arg(long = "log-format", value_enum, default_value_t, global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogArgs {
    /// The level asked for on the command line. Warnings are on by default
    /// so a short custom deck gets reported.
    pub fn level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// `RUST_LOG` when it's set and valid, otherwise the flag level for
    /// this crate and warnings for everything else.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,poker_hands={}", self.level())))
    }

    pub fn init(&self) {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(self.filter());
        match self.log_format {
            LogFormat::Compact => builder.compact().init(),
            LogFormat::Pretty => builder.pretty().init(),
            LogFormat::Json => builder.json().init(),
        }
    }
}
