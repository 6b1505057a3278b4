mod report;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use tincture_drawing::Culture;
use tincture_drawing::logging::{LoggingConfig, init_logging};

/// Inspect and convert color and geometry strings.
#[derive(Debug, Parser)]
#[command(name = "tincture", version)]
struct Cli {
    /// Culture for list and decimal separators, e.g. `de-DE`.
    /// Defaults to TINCTURE_CULTURE / LC_ALL / LC_NUMERIC / LANG.
    #[arg(long, global = true)]
    culture: Option<String>,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a color: a name, `#RRGGBB`, `#AARRGGBB`, or `R, G, B`.
    Color { text: String },
    /// Parse `Width, Height`.
    Size {
        text: String,
        #[arg(long)]
        float: bool,
    },
    /// Parse `X, Y`.
    Point {
        text: String,
        #[arg(long)]
        float: bool,
    },
    /// Parse `X, Y, Width, Height`.
    Rect { text: String },
    /// List the known colors with their ARGB values.
    Known {
        /// Include the system colors.
        #[arg(long)]
        system: bool,
    },
}

fn resolve_culture(name: Option<&str>) -> Result<Culture> {
    match name {
        Some(name) => Culture::from_name(name).ok_or_else(|| anyhow!("unknown culture {name:?}")),
        None => Ok(Culture::current()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig::from_option(cli.log.as_deref()));

    let culture = resolve_culture(cli.culture.as_deref())?;
    log::debug!("using culture {culture}");

    let out = match &cli.command {
        Command::Color { text } => report::color(text, culture)?,
        Command::Size { text, float } => report::size(text, culture, *float)?,
        Command::Point { text, float } => report::point(text, culture, *float)?,
        Command::Rect { text } => report::rect(text, culture)?,
        Command::Known { system } => report::known(*system),
    };
    print!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tincture", "color", "1; 2; 3", "--culture", "de-DE"]).unwrap();
        assert_eq!(cli.culture.as_deref(), Some("de-DE"));
        assert!(matches!(cli.command, Command::Color { ref text } if text == "1; 2; 3"));
    }

    #[test]
    fn culture_resolution() {
        assert_eq!(resolve_culture(Some("fr_FR.UTF-8")).unwrap(), Culture::FR_FR);
        assert!(resolve_culture(Some("xx-YY")).is_err());
    }
}
