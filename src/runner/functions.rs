// Standard library
use std::path::Path;

// 3rd party crates
use tracing::{debug, error, info, warn};

// Project imports
use crate::notifier::traits::Notifier;
use crate::notifier::types::SmtpNotifier;
use crate::providers::functions::build_update_records;
use crate::providers::hetzner::types::Hetzner;
use crate::providers::traits::DnsProvider;
use crate::providers::types::{BulkUpdateResponse, UpdateRecord};
use crate::settings::types::Settings;

// Current module imports
use super::errors::RunError;
use super::types::{Outcome, RunContext};

/// Runs once against the configuration at `config_path` and terminates.
pub async fn run(config_path: &Path) -> Outcome {
    info!("Executing run...");

    let settings: Settings = match Settings::load(config_path) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}. Terminating run!", e);
            return terminate(Outcome::HardFailure, &SmtpNotifier::new(None)).await;
        }
    };

    let notifier = SmtpNotifier::new(Some(settings.clone()));
    let ctx = RunContext::from_settings(settings);

    let outcome: Outcome = execute(&ctx).await;
    terminate(outcome, &notifier).await
}

/// Resolves the public IP, submits the bulk update and evaluates the answer.
pub async fn execute(ctx: &RunContext) -> Outcome {
    match submit_update(ctx).await {
        Ok(response) => evaluate_response(&response),
        Err(e) => {
            error!("{}", e);
            Outcome::HardFailure
        }
    }
}

async fn submit_update(ctx: &RunContext) -> Result<BulkUpdateResponse, RunError> {
    let ip: String = ctx.ip_source.public_ip().await?;
    info!("Public IP is {} ✓", ip);

    let records: Vec<UpdateRecord> =
        build_update_records(ctx.settings.records()?, ctx.settings.zone_id()?, &ip);

    let hetzner: Hetzner;
    let provider: &dyn DnsProvider = match &ctx.provider {
        Some(provider) => provider.as_ref(),
        None => {
            hetzner = ctx.hetzner()?;
            &hetzner
        }
    };

    let response: BulkUpdateResponse = provider.bulk_update(&records).await?;
    debug!(
        provider = provider.get_name(),
        updated = response.records.len(),
        failed = response.failed_records.len(),
        "Bulk update answered"
    );

    Ok(response)
}

/// Logs each record the provider rejected and classifies the run.
pub fn evaluate_response(response: &BulkUpdateResponse) -> Outcome {
    for failed in &response.failed_records {
        warn!(
            "Failed to update record '{}' with ID '{}'",
            failed.name, failed.id
        );
    }

    if response.failed_records.is_empty() {
        info!("All records updated successfully! ✓");
        Outcome::Success
    } else {
        Outcome::PartialFailure
    }
}

/// Single exit point of a run: summarises, alerts on failure, signs off.
///
/// A failed alert is logged and otherwise ignored; the outcome is returned
/// unchanged.
pub async fn terminate(outcome: Outcome, notifier: &dyn Notifier) -> Outcome {
    info!("Run has ended with {}.", outcome.summary());

    if outcome.requires_notification() {
        match notifier.send_warning(outcome.summary()).await {
            Ok(()) => info!("Successfully sent out a warning mail ✓"),
            Err(e) => error!("Failed to send email: {}", e),
        }
    }

    info!(severity = outcome.severity(), "All done ✓");
    outcome
}
