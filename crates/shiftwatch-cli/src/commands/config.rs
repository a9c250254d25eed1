//! Config command - View and validate ShiftWatch configuration
//!
//! Provides the `shiftwatch config` CLI command which:
//! 1. Shows the effective configuration (YAML or JSON)
//! 2. Validates the configuration file and reports errors

use anyhow::{bail, Context as _, Result};
use clap::Subcommand;
use tracing::info;

use crate::{
    output::{get_formatter, OutputFormat},
    Context,
};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display effective configuration
    Show,
    /// Validate configuration file
    Validate,
}

impl ConfigCommand {
    /// Execute the config command
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        match self {
            ConfigCommand::Show => self.execute_show(ctx).await,
            ConfigCommand::Validate => self.execute_validate(ctx).await,
        }
    }

    async fn execute_show(&self, ctx: &Context) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        info!(config_path = %ctx.config_path.display(), "Showing configuration");

        if matches!(ctx.format, OutputFormat::Json) {
            let json = serde_json::to_value(&ctx.config)
                .context("Failed to serialize configuration to JSON")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", ctx.config_path.display()));
            formatter.info("");

            let yaml = serde_yaml::to_string(&ctx.config)
                .context("Failed to serialize configuration to YAML")?;

            for line in yaml.lines() {
                formatter.info(line);
            }
        }

        Ok(())
    }

    async fn execute_validate(&self, ctx: &Context) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        // Load strictly here: a parse error must be reported, not defaulted
        let config = if ctx.config_path.exists() {
            shiftwatch_core::config::Config::load(&ctx.config_path).with_context(|| {
                format!("Failed to parse {}", ctx.config_path.display())
            })?
        } else {
            formatter.info(&format!(
                "{} not found, validating defaults",
                ctx.config_path.display()
            ));
            ctx.config.clone()
        };

        let errors = config.validate();
        info!(errors = errors.len(), "Validated configuration");

        if matches!(ctx.format, OutputFormat::Json) {
            let json = serde_json::json!({
                "valid": errors.is_empty(),
                "path": ctx.config_path.display().to_string(),
                "errors": errors
                    .iter()
                    .map(|e| serde_json::json!({"field": e.field, "message": e.message}))
                    .collect::<Vec<_>>(),
            });
            formatter.print_json(&json);
        } else if errors.is_empty() {
            formatter.success("Configuration is valid");
        } else {
            for error in &errors {
                formatter.error(&error.to_string());
            }
        }

        if !errors.is_empty() {
            bail!(
                "configuration has {} error{}",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }
}
