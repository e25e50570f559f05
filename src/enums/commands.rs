use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample config file
    Init,
    /// Print the report definition and where it would be stored
    Show {
        #[clap(short, long)]
        definition: Option<String>,
        #[clap(long)]
        customer: Option<String>,
    },
    /// Check a report definition without uploading it
    Validate {
        #[clap(short, long)]
        definition: Option<String>,
    },
    /// Upload the report definition to object storage
    Seed {
        #[clap(short, long)]
        definition: Option<String>,
        #[clap(long)]
        customer: Option<String>,
        #[clap(short, long)]
        bucket: Option<String>,
        #[clap(long)]
        dry_run: bool,
    },
    /// Run the row-level-security diagnostics against DATABASE_URL
    Audit {
        /// Impersonate this user id so row-level security applies (defaults to audit.impersonate_user)
        #[clap(long)]
        as_user: Option<String>,
        #[clap(long)]
        json: bool,
        /// Exit with status 2 on any failing check or drifted policy
        #[clap(long)]
        strict: bool,
    },
    /// Print the diagnostics as an annotated SQL script
    AuditSql,
}
