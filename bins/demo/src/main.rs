//! Caderneta reporting demo.
//!
//! Seeds an in-memory record store with a few weeks of sales and expenses,
//! then prints the available weeks, one report per reporting mode, and the
//! weekly dashboard snapshot.
//!
//! Usage: cargo run --bin demo

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caderneta_core::period::{ReportingMode, default_week};
use caderneta_core::record::{ExpenseCategory, FinancialRecord, SaleChannel};
use caderneta_core::report::ReportService;
use caderneta_core::store::InMemoryRecordStore;
use caderneta_core::summary::SummaryService;
use caderneta_shared::AppConfig;
use caderneta_shared::types::{RecordId, TenantId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caderneta=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("Failed to load configuration");
    let now = Local::now().naive_local();

    let store = Arc::new(InMemoryRecordStore::new());
    let tenant = TenantId::new();
    seed_records(&store, tenant, now);
    info!(%tenant, "store seeded");

    let reports = ReportService::new(Arc::clone(&store));

    println!("Semanas disponíveis:");
    let weeks = reports.available_weeks(tenant, now).await?;
    for week in &weeks {
        println!("  {}", week.label);
    }

    for mode in [
        ReportingMode::RollingWeek,
        ReportingMode::RollingMonth,
        ReportingMode::RollingYear,
    ] {
        let report = reports.build_report(tenant, mode, now).await?;
        println!("\n=== {} ===", report.label);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    // Default selection: the most recent week.
    if let Some(week) = default_week(&weeks) {
        let report = reports
            .build_report(tenant, ReportingMode::SpecificWeek(week.number), now)
            .await?;
        println!("\n=== {} ===", report.label);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    // The dashboard snapshot runs Monday through Sunday, unlike the
    // Sunday-start weeks above.
    let summaries =
        SummaryService::with_recent_limit(store, config.reporting.recent_activity_limit);
    let snapshot = summaries.weekly_snapshot(tenant, now).await?;
    println!("\n=== Resumo semanal ===");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

/// Seeds a month of alternating sales and expenses ending today.
fn seed_records(store: &InMemoryRecordStore, tenant: TenantId, now: NaiveDateTime) {
    for days_back in 0..30i64 {
        let occurred_at = now - Duration::days(days_back) - Duration::hours(2);

        store.insert(
            tenant,
            FinancialRecord::sale(
                RecordId::new(),
                Decimal::new(2500 + days_back * 35, 2),
                occurred_at,
                Some("Venda direta".to_string()),
                if days_back % 3 == 0 {
                    SaleChannel::DeliveryPartner
                } else {
                    SaleChannel::Direct
                },
            ),
        );

        if days_back % 2 == 0 {
            store.insert(
                tenant,
                FinancialRecord::expense(
                    RecordId::new(),
                    Decimal::new(800 + days_back * 10, 2),
                    occurred_at,
                    "Insumos da semana",
                    if days_back % 10 == 0 {
                        ExpenseCategory::Emergency
                    } else {
                        ExpenseCategory::Fixed
                    },
                ),
            );
        }
    }
}
