use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::{validate_customer_id, ConfigManager};
use crate::config::constants::DATABASE_URL_ENV;
use crate::enums::commands::Commands;
use crate::errors::{ReportOpsError, ReportOpsResult};
use crate::helpers::env_helper::{process_env, require};
use crate::logger::audit_logger::AuditLogger;
use crate::services::pg_diagnostics::PgDiagnostics;
use crate::services::policy_auditor::PolicyAuditor;
use crate::services::report_seeder::seed_from_env;
use crate::services::report_validator::ReportValidator;
use crate::services::supabase_storage::SupabaseStorage;
use crate::structs::config::config::Config;
use crate::structs::report::report_definition::ReportDefinition;
use crate::structs::seed_options::SeedOptions;
use crate::structs::seed_outcome::SeedOutcome;

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    env: EnvLookup,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<String>) -> Self {
        Self::with_env(config_path, process_env)
    }

    /// Runner that resolves secrets through `env` instead of the process environment.
    pub fn with_env<F>(config_path: Option<String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            config_path: config_path.map(PathBuf::from),
            env: Box::new(env),
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReportOpsResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Show { definition, customer } => self.show_command(definition, customer),
            Commands::Validate { definition } => self.validate_command(definition),
            Commands::Seed { definition, customer, bucket, dry_run } => {
                self.seed_command(definition, customer, bucket, dry_run).await.map(|_| ())
            }
            Commands::Audit { as_user, json, strict } => self.audit_command(as_user, json, strict).await,
            Commands::AuditSql => {
                print!("{}", PolicyAuditor::with_default_catalog().render_script());
                Ok(())
            }
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> ReportOpsResult<Config> {
        match &self.config_path {
            Some(path) => ConfigManager::load_from(path),
            None => ConfigManager::load(),
        }
    }

    fn load_definition(config: &Config, flag: Option<String>) -> ReportOpsResult<ReportDefinition> {
        let path = flag.or_else(|| config.storage.definition_path.clone());
        ReportDefinition::load(path.as_deref().map(Path::new))
    }

    fn init_command(&self) -> ReportOpsResult<()> {
        log::info!("🚀 Initializing report-ops configuration...");

        let path = match &self.config_path {
            Some(path) => {
                ConfigManager::create_sample_config_at(path)?;
                path.clone()
            }
            None => ConfigManager::create_sample_config()?,
        };

        log::info!("📝 Edit {} to set the bucket and customer.", path.display());
        log::info!("🔧 Run 'report-ops validate' to check the report definition.");
        Ok(())
    }

    fn show_command(&self, definition: Option<String>, customer: Option<String>) -> ReportOpsResult<()> {
        let config = self.load_config()?;
        let definition = Self::load_definition(&config, definition)?;
        let customer_id = customer.unwrap_or(config.storage.customer_id);
        validate_customer_id(&customer_id)
            .map_err(|reason| ReportOpsError::config_error(&format!("customer id {reason}"), Some("customer_id"), None))?;
        ReportValidator::validate(&definition).into_result(&definition.id)?;

        println!("📍 Target: {}/{}.json", config.storage.bucket, customer_id);
        println!("{}", serde_json::to_string_pretty(&definition)?);
        Ok(())
    }

    fn validate_command(&self, definition: Option<String>) -> ReportOpsResult<()> {
        let config = self.load_config()?;
        let definition = Self::load_definition(&config, definition)?;

        log::info!("🔍 Validating report '{}'...", definition.id);
        let result = ReportValidator::validate(&definition);
        result.print_summary();
        result.into_result(&definition.id)
    }

    pub async fn seed_command(
        &self,
        definition: Option<String>,
        customer: Option<String>,
        bucket: Option<String>,
        dry_run: bool,
    ) -> ReportOpsResult<SeedOutcome> {
        let config = self.load_config()?;
        let mut options = SeedOptions::from_config(&config.storage);
        if let Some(customer) = customer {
            options.customer_id = customer;
        }
        if let Some(bucket) = bucket {
            options.bucket = bucket;
        }
        options.dry_run = dry_run;

        let definition = Self::load_definition(&config, definition)?;
        let timeout_secs = config.storage.timeout_secs;

        match seed_from_env(&self.env, &definition, &options, |settings| {
            SupabaseStorage::new(&settings.endpoint, settings.service_key.clone(), timeout_secs)
        })
        .await
        {
            Ok(outcome) if outcome.receipt.is_none() => {
                log::info!("🧪 Dry run complete for report '{}', nothing uploaded", definition.id);
                Ok(outcome)
            }
            Ok(outcome) => {
                log::info!("🎉 Report '{}' seeded for customer {}", definition.id, options.customer_id);
                Ok(outcome)
            }
            Err(e) => {
                log::error!("❌ Failed to seed report '{}': {}", definition.id, e);
                Err(e)
            }
        }
    }

    async fn audit_command(&self, as_user: Option<String>, json: bool, strict: bool) -> ReportOpsResult<()> {
        let config = self.load_config()?;
        let database_url = require(&self.env, DATABASE_URL_ENV)?;
        // without a user's claims every admin check evaluates against nobody
        let impersonate = as_user.or(config.audit.impersonate_user).ok_or_else(|| {
            ReportOpsError::config_error(
                "the audit needs a user to run the checks as",
                Some("as_user"),
                Some("pass --as-user <admin-user-uuid> or set audit.impersonate_user"),
            )
        })?;
        let strict = strict || config.audit.strict;

        log::info!("🔍 Running policy audit...");
        let mut diagnostics = PgDiagnostics::connect(
            &database_url,
            config.audit.acquire_timeout_secs,
            Some(impersonate.as_str()),
        )
        .await?;

        let auditor = PolicyAuditor::with_default_catalog();
        let report = auditor.run(&mut diagnostics).await;
        let finished = diagnostics.finish().await;
        let report = report?;
        finished?;

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            AuditLogger::print_report(&report);
        }

        if strict && !report.is_clean() {
            return Err(ReportOpsError::AuditFailed {
                failed: report.failed_count(),
                drifted: report.drift.len(),
            });
        }

        Ok(())
    }
}
