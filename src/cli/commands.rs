//! One-shot command handlers.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;

use crate::client::{HttpRegistry, LinkRegistry};
use crate::config::DashConfig;
use crate::flows::{
    CreateLinkFlow, DeleteLinkFlow, EmptyState, LinkCollection, Navigator, Notifier,
    RedirectOutcome, RedirectResolver, Severity, StatsState, StatsView, SubmitOutcome,
};
use crate::utils::validator::Field;

use super::{CliError, Commands};

/// Prints toasts to the terminal; the CLI's notification sink.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        match severity {
            Severity::Success => println!("{} {}", title.green().bold(), message),
            Severity::Error => eprintln!("{} {}", title.red().bold(), message),
        }
    }
}

/// "Navigation" in a shell: print the destination for the caller to follow.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, target: &str) {
        println!("{}", target);
    }
}

pub async fn run(command: Commands, config: &DashConfig) -> Result<(), CliError> {
    let registry: Arc<dyn LinkRegistry> = Arc::new(
        HttpRegistry::new(config).map_err(|e| CliError::CommandError(e.format_simple()))?,
    );

    match command {
        Commands::List { search } => list_links(registry, config, search).await,
        Commands::Add { target_url, code } => add_link(registry, target_url, code).await,
        Commands::Delete { code, yes } => delete_link(registry, code, yes).await,
        Commands::Stats { code } => show_stats(registry, &code).await,
        Commands::Resolve { code } => resolve_code(registry, &code).await,
        Commands::Health => show_health(registry).await,
    }
}

async fn list_links(
    registry: Arc<dyn LinkRegistry>,
    config: &DashConfig,
    search: Option<String>,
) -> Result<(), CliError> {
    let mut collection = LinkCollection::new(registry);
    collection.reload().await;

    if let Some(err) = collection.error() {
        return Err(CliError::CommandError(err.to_string()));
    }
    if let Some(query) = search {
        collection.set_search(query);
    }

    match collection.empty_state() {
        Some(EmptyState::NoLinksYet) => {
            println!("No links yet. Create your first short link to get started.");
            return Ok(());
        }
        Some(EmptyState::NoMatches) => {
            println!(
                "No links found matching \"{}\"",
                collection.search_text()
            );
            return Ok(());
        }
        None => {}
    }

    let now = Utc::now();
    println!(
        "{:<10} {:<50} {:>7}  {}",
        "CODE".bold(),
        "TARGET URL".bold(),
        "CLICKS".bold(),
        "LAST CLICKED".bold()
    );
    for link in collection.visible() {
        println!(
            "{:<10} {:<50} {:>7}  {}",
            link.code.cyan(),
            truncate(&link.target_url, 50),
            link.total_clicks,
            crate::utils::format_relative(link.last_clicked_at, now)
        );
    }
    println!();
    println!("Short URLs are served at {}/<code>", config.base_url);
    Ok(())
}

async fn add_link(
    registry: Arc<dyn LinkRegistry>,
    target_url: String,
    code: Option<String>,
) -> Result<(), CliError> {
    let mut collection = LinkCollection::new(registry.clone());
    let mut flow = CreateLinkFlow::new(registry);
    flow.open();
    flow.set_field(Field::TargetUrl, target_url);
    if let Some(code) = code {
        flow.set_field(Field::CustomCode, code);
    }

    match flow.submit(&mut collection, &ConsoleNotifier).await {
        SubmitOutcome::Created => Ok(()),
        SubmitOutcome::Invalid => {
            let mut lines = Vec::new();
            for field in [Field::TargetUrl, Field::CustomCode] {
                if let Some(message) = flow.field_error(field) {
                    lines.push(message);
                }
            }
            Err(CliError::CommandError(lines.join("; ")))
        }
        SubmitOutcome::CodeTaken => Err(CliError::CommandError(
            "This code is already taken".to_string(),
        )),
        SubmitOutcome::Failed => Err(CliError::Reported),
        SubmitOutcome::AlreadySubmitting => unreachable!("one-shot command"),
    }
}

async fn delete_link(
    registry: Arc<dyn LinkRegistry>,
    code: String,
    yes: bool,
) -> Result<(), CliError> {
    let mut collection = LinkCollection::new(registry.clone());
    let mut flow = DeleteLinkFlow::new(registry);
    flow.request(code);

    if !yes {
        let code = flow.pending_code().unwrap_or_default().to_string();
        print!(
            "Delete link {}? This action cannot be undone. [y/N] ",
            code.cyan().bold()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        if !matches!(answer.trim(), "y" | "Y") {
            flow.decline();
            println!("Cancelled.");
            return Ok(());
        }
    }

    match flow.confirm(&mut collection, &ConsoleNotifier).await {
        crate::flows::DeleteOutcome::Deleted => Ok(()),
        crate::flows::DeleteOutcome::Failed => Err(CliError::Reported),
        crate::flows::DeleteOutcome::NotPending => unreachable!("request precedes confirm"),
    }
}

async fn show_stats(registry: Arc<dyn LinkRegistry>, code: &str) -> Result<(), CliError> {
    let mut view = StatsView::new(registry);
    view.load(code).await;

    match view.state() {
        StatsState::Loaded(link) => {
            let now = Utc::now();
            println!("{}", link.code.cyan().bold());
            println!("  Target URL:   {}", link.target_url);
            println!("  Total clicks: {}", link.total_clicks);
            print!(
                "  Last clicked: {}",
                view.last_clicked_relative(now).unwrap_or_default()
            );
            match view.last_clicked_absolute() {
                Some(absolute) => println!(" ({})", absolute),
                None => println!(),
            }
            println!(
                "  Created:      {} ({})",
                view.created_relative(now).unwrap_or_default(),
                view.created_absolute().unwrap_or_default()
            );
            Ok(())
        }
        StatsState::NotFound => Err(CliError::CommandError(format!(
            "Link not found: {} does not exist or has been deleted",
            code
        ))),
        StatsState::Failed(message) => Err(CliError::CommandError(message.clone())),
        StatsState::Idle | StatsState::Loading => unreachable!("load() has completed"),
    }
}

async fn resolve_code(registry: Arc<dyn LinkRegistry>, code: &str) -> Result<(), CliError> {
    let resolver = RedirectResolver::new(registry);
    match resolver.resolve(code, &ConsoleNavigator).await {
        RedirectOutcome::Redirected(_) => Ok(()),
        RedirectOutcome::NotFound => Err(CliError::CommandError(format!(
            "Link not found: {} does not exist or may have expired",
            code
        ))),
    }
}

async fn show_health(registry: Arc<dyn LinkRegistry>) -> Result<(), CliError> {
    let health = registry
        .health()
        .await
        .map_err(|e| CliError::CommandError(e.format_simple()))?;

    let status = if health.ok {
        "Healthy".green().bold()
    } else {
        "Unhealthy".red().bold()
    };
    println!("Status:     {}", status);
    println!("Version:    {}", health.version);
    println!("Uptime:     {}", health.format_uptime());
    println!("Checked at: {}", health.checked_at);

    if let Ok(raw) = serde_json::to_string_pretty(&health) {
        println!("\n{}", raw.dimmed());
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
