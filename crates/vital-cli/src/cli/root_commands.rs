use clap::{Args, Subcommand};
use vital_core::CollectionKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract a snapshot from the warehouse and publish the artifacts.
    Generate(GenerateArgs),
    /// List records of one collection from the published artifacts.
    List(ListArgs),
    /// Show one record by id.
    Show(ShowArgs),
    /// Report artifact presence, manifest, and warehouse configuration.
    Status,
    /// Look a biomarker up directly in the warehouse.
    FindBiomarker(FindBiomarkerArgs),
    /// Serve the artifacts as a read-only JSON API.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Fail instead of writing placeholders when no warehouse is configured.
    #[arg(long)]
    pub require_warehouse: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Collection: biomarkers, symptoms, or remedies.
    pub kind: CollectionKind,

    /// Case-insensitive filter on name and description.
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Collection: biomarkers, symptoms, or remedies.
    pub kind: CollectionKind,

    /// Record id (a symptom or remedy id is its name).
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct FindBiomarkerArgs {
    /// Biomarker id, e.g. `12-vitamin-d`.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Bind address (defaults to `server.host:server.port`).
    #[arg(long)]
    pub addr: Option<String>,
}
