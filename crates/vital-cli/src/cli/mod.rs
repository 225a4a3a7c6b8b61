use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `vital` binary.
#[derive(Debug, Parser)]
#[command(name = "vital", version, about = "Vital - health content snapshot pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Artifact directory (overrides `artifacts.dir`)
    #[arg(long, global = true)]
    pub artifacts_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            artifacts_dir: self.artifacts_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use vital_core::CollectionKind;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "vital", "--format", "table", "--limit", "10", "--verbose", "status",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["vital", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn list_accepts_singular_and_plural_kinds() {
        for value in ["biomarkers", "Biomarker"] {
            let cli = Cli::try_parse_from(["vital", "list", value, "--search", "vit"])
                .expect("cli should parse");
            let Commands::List(args) = cli.command else {
                panic!("expected list");
            };
            assert_eq!(args.kind, CollectionKind::Biomarkers);
            assert_eq!(args.search.as_deref(), Some("vit"));
        }
    }

    #[test]
    fn unknown_collection_is_rejected() {
        assert!(Cli::try_parse_from(["vital", "list", "diseases"]).is_err());
    }

    #[test]
    fn show_takes_ids_with_spaces() {
        let cli = Cli::try_parse_from(["vital", "show", "symptoms", "Joint Pain"])
            .expect("cli should parse");
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.kind, CollectionKind::Symptoms);
        assert_eq!(args.id, "Joint Pain");
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["vital", "--format", "xml", "status"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["vital", "--artifacts-dir", "/tmp/data", "generate"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.artifacts_dir.as_deref(), Some("/tmp/data"));
        assert!(matches!(cli.command, Commands::Generate(ref a) if !a.require_warehouse));
    }
}
