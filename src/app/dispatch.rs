use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::info;

use crate::Config;
use crate::api::{HealthApi, MetricKind, MockHealthApi};
use crate::app::sample::sample_failure_rate;
use crate::cli::{Cli, Commands};
use crate::dialog::{Scope, use_dialog, use_toast};
use crate::forms::{EditEntryInitial, open_add_entry, open_edit_entry};
use crate::ui::style;
use crate::widgets::{Dashboard, HistoryTable, RecentActivityWidget};

/// Print whatever the overlay hosts currently show.
fn print_overlays(scope: &Scope) -> Result<()> {
    if let Some(dialog) = use_dialog(scope)?.render() {
        println!("{dialog}");
    }
    if let Some(toast) = use_toast(scope)?.render() {
        println!("{toast}");
    }
    Ok(())
}

async fn run_add(
    api: Arc<dyn HealthApi>,
    stat_type: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let scope = Scope::app();
    let handle = open_add_entry(&scope, api, None)?;
    if let Some(stat_type) = stat_type {
        handle.set_stat_type(stat_type);
    }
    if let Some(value) = value {
        handle.set_value(value);
    }

    let outcome = handle.submit().await;
    print_overlays(&scope)?;
    Ok(match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            info!(error = %err, "add-entry not saved");
            ExitCode::FAILURE
        }
    })
}

/// Resolve what `edit` should open: a recent-activity record by id, or a
/// history row by kind and date.
async fn edit_target(
    api: &dyn HealthApi,
    id: Option<String>,
    stat_type: Option<MetricKind>,
    date: Option<NaiveDate>,
) -> Result<EditEntryInitial> {
    match (id, stat_type, date) {
        (Some(id), _, _) => {
            let records = api
                .fetch_recent_activity()
                .await
                .context("loading recent activity")?;
            match records.iter().find(|record| record.id == id) {
                Some(record) => Ok(EditEntryInitial::from_record(record)),
                None => bail!("no recent activity with id '{id}'"),
            }
        }
        (None, Some(kind), Some(date)) => match HistoryTable::for_kind(kind).find(date) {
            Some(entry) => Ok(EditEntryInitial::from_history(kind, entry)),
            None => bail!("no {kind} history entry on {date}"),
        },
        _ => bail!("edit needs --id, or --type together with --date"),
    }
}

fn run_edit(initial: EditEntryInitial, value: String) -> Result<ExitCode> {
    let unit = initial.unit.clone();
    let scope = Scope::app();
    let handle = open_edit_entry(&scope, initial, |entry| {
        info!(date = %entry.date, kind = %entry.stat_type, value = entry.value, "entry edited");
    })?;
    handle.set_value(value);

    let outcome = handle.submit();
    print_overlays(&scope)?;
    Ok(match outcome {
        Ok(entry) => {
            println!(
                "{} {} {} {}",
                style::success("✓"),
                entry.date,
                entry.stat_type.label(),
                crate::ui::format_value(entry.value, &unit)
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            info!(error = %err, "edit not saved");
            ExitCode::FAILURE
        }
    })
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<ExitCode> {
    let api: Arc<dyn HealthApi> = Arc::new(MockHealthApi::new(config.api.clone()));
    info!(backend = api.name(), "data service ready");

    match cli.command {
        Commands::Dashboard { json } => {
            let dashboard = Dashboard::load(api.as_ref()).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard.to_json())?);
            } else {
                println!("{}", dashboard.render());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Activity => {
            println!("{}", RecentActivityWidget::load(api.as_ref()).await.render());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Add { stat_type, value } => run_add(api, stat_type, value).await,

        Commands::History { stat_type } => {
            println!("{}", HistoryTable::for_kind(stat_type).render());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Edit {
            id,
            stat_type,
            date,
            value,
        } => {
            let initial = edit_target(api.as_ref(), id, stat_type, date).await?;
            run_edit(initial, value)
        }

        Commands::Sample {
            operation,
            runs,
            no_latency,
            seed,
        } => {
            let mut api_config = config.api.clone();
            if no_latency {
                api_config = api_config.with_latency_ms(0);
            }
            if let Some(seed) = seed {
                api_config = api_config.with_seed(seed);
            }
            let sampler = MockHealthApi::new(api_config);
            let report = sample_failure_rate(&sampler, operation, runs).await;
            println!("{}", style::header(t!("sample.title")));
            println!("  {report}");
            if report.mismatches > 0 {
                println!(
                    "  {}",
                    style::yellow(t!("sample.mismatches", count = report.mismatches))
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
