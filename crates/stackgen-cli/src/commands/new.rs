//! Implementation of the `stackgen new` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, call
//! the core generate service, and display results. No generation logic
//! lives here.

use tracing::{debug, info, instrument};

use stackgen_adapters::{BundledTemplates, LocalFilesystem};
use stackgen_core::{
    application::GenerateService,
    domain::{GenerationRequest, TemplateSelector, paths},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stackgen new` command.
///
/// Dispatch sequence:
/// 1. Merge CLI flags with config-file defaults into a request
/// 2. Confirm with user unless `--yes` or `--quiet`
/// 3. Early-exit if `--dry-run`
/// 4. Execute generation via `GenerateService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(target = %args.target.display()))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build request (flags win over config defaults; builder validates)
    let request = build_request(&args, &config)?;

    debug!(
        template = %request.template(),
        db_port = request.database_port(),
        http_port = request.http_port(),
        "Request resolved"
    );

    // 2. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&request, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would generate into {}",
            request.target_path().display(),
        ))?;
        for rel in [
            paths::ORCHESTRATION_FILE,
            paths::ENV_FILE,
            paths::BUILD_FILE,
            paths::DEPENDENCY_MANIFEST,
            paths::PACKAGE_MARKER,
            paths::APPLICATION_ENTRY,
        ] {
            output.info(&format!("  {rel}"))?;
        }
        return Ok(());
    }

    // 4. Create adapters and generate
    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BundledTemplates::new()),
    );

    output.header(&format!(
        "Generating skeleton in {}...",
        request.target_path().display()
    ))?;
    info!("Generation started");

    service.generate(&request).map_err(CliError::Core)?;

    info!("Generation completed");

    // 5. Success + next steps
    output.success("Deployment skeleton generated!")?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", request.target_path().display()))?;
        output.print("  # Review .env and replace the sample credentials")?;
        output.print("  docker-compose up")?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

/// Merge CLI flags with config-file defaults; unspecified fields fall back
/// to the config, which itself defaults to the sample values.
fn build_request(args: &NewArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let selector = TemplateSelector::parse(
        args.template.as_deref().unwrap_or(&config.defaults.template),
    );

    GenerationRequest::builder(args.target.clone(), selector)
        .database_port(args.db_port.unwrap_or(config.defaults.db_port))
        .http_port(args.http_port.unwrap_or(config.defaults.http_port))
        .database_user(args.db_user.as_deref().unwrap_or(&config.defaults.db_user))
        .database_password(args.db_pass.as_deref().unwrap_or(&config.defaults.db_pass))
        .api_key(args.api_key.as_deref().unwrap_or(&config.defaults.api_key))
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(request: &GenerationRequest, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Target:    {}", request.target_path().display()))?;
    out.print(&format!("  Template:  {}", request.template()))?;
    out.print(&format!("  DB port:   {}", request.database_port()))?;
    out.print(&format!("  HTTP port: {}", request.http_port()))?;
    out.print(&format!("  DB user:   {}", request.database_user()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use stackgen_core::domain::BuiltinTemplate;

    fn new_args(target: &str) -> NewArgs {
        NewArgs {
            target: PathBuf::from(target),
            template: None,
            db_port: None,
            http_port: None,
            db_user: None,
            db_pass: None,
            api_key: None,
            yes: true,
            dry_run: false,
        }
    }

    #[test]
    fn unspecified_flags_fall_back_to_config_defaults() {
        let request = build_request(&new_args("./x"), &AppConfig::default()).unwrap();
        assert_eq!(
            request.template(),
            &TemplateSelector::Builtin(BuiltinTemplate::Simple)
        );
        assert_eq!(request.database_port(), 27017);
        assert_eq!(request.http_port(), 8080);
        assert_eq!(request.database_user(), "admin");
    }

    #[test]
    fn flags_win_over_config_defaults() {
        let mut args = new_args("./x");
        args.template = Some("default:multiple".into());
        args.db_port = Some(27018);
        args.api_key = Some("k1".into());

        let mut config = AppConfig::default();
        config.defaults.db_port = 40000;
        config.defaults.api_key = "from-config".into();

        let request = build_request(&args, &config).unwrap();
        assert_eq!(
            request.template(),
            &TemplateSelector::Builtin(BuiltinTemplate::Multiple)
        );
        assert_eq!(request.database_port(), 27018);
        assert_eq!(request.api_key(), "k1");
    }

    #[test]
    fn config_defaults_apply_when_no_flag_given() {
        let mut config = AppConfig::default();
        config.defaults.db_user = "ops".into();

        let request = build_request(&new_args("./x"), &config).unwrap();
        assert_eq!(request.database_user(), "ops");
    }

    #[test]
    fn empty_flag_value_is_rejected_by_the_builder() {
        let mut args = new_args("./x");
        args.api_key = Some(String::new());

        assert!(matches!(
            build_request(&args, &AppConfig::default()),
            Err(CliError::Core(_))
        ));
    }
}
