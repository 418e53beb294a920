//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Content-addressed asset loader with dark-mode variant pairing
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Asset files to load
    #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, default_value = "dusk.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Root context (default: config file's directory, else current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Output directory for emitted assets (relative to root)
    #[arg(short, long, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,

    /// Compute references only, write nothing
    #[arg(long)]
    pub no_emit: bool,

    /// Generate `module.exports =` instead of `export default`
    #[arg(long)]
    pub commonjs: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dusk", "logo.png"]).unwrap();
        assert_eq!(cli.files, [PathBuf::from("logo.png")]);
        assert_eq!(cli.config, PathBuf::from("dusk.toml"));
        assert_eq!(cli.output, PathBuf::from("dist"));
        assert!(cli.root.is_none());
        assert!(!cli.no_emit && !cli.commonjs && !cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "dusk", "-C", "cfg.toml", "-r", "site", "-o", "out", "--no-emit", "--commonjs", "-v",
            "--color", "never", "a.png", "b.png",
        ])
        .unwrap();
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.config, PathBuf::from("cfg.toml"));
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert!(cli.no_emit && cli.commonjs && cli.verbose);
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["dusk", "-v"]).is_err());
    }
}
