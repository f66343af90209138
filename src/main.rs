use anyhow::Context;
use clap::Parser;
use std::io::Write;
use pet_checkin::utils::error::ErrorSeverity;
use pet_checkin::utils::{logger, validation::Validate};
use pet_checkin::{CheckInError, CheckInSession, CliConfig, ConsoleInput, FacilityConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pet-checkin");
    tracing::debug!("CLI config: {:?}", config);

    let facility = match load_facility(&config) {
        Ok(facility) => facility,
        Err(e) => exit_with(&e),
    };
    tracing::info!("🏠 Facility: {}", facility.facility_name());

    let options = config.apply_overrides(facility.prompts);
    if config.legacy {
        tracing::warn!("Legacy prompt behaviour enabled: cats are recorded as dogs");
    }

    let mut session = CheckInSession::new(
        facility.initial_record(),
        ConsoleInput::stdin(),
        std::io::stdout().lock(),
        options,
    );

    if let Err(e) = session.run() {
        exit_with(&e);
    }

    let (record, _input, out) = session.into_parts();
    drop(out);

    let rendered = if config.json {
        serde_json::to_string_pretty(&record).map_err(CheckInError::from)
    } else {
        Ok(record.summary())
    };
    let text = match rendered {
        Ok(text) => text,
        Err(e) => exit_with(&e),
    };

    writeln!(std::io::stdout(), "{}", text).context("Failed to write record to stdout")?;

    Ok(())
}

fn load_facility(config: &CliConfig) -> pet_checkin::Result<FacilityConfig> {
    let facility = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            FacilityConfig::from_file(path)?
        }
        None => FacilityConfig::default(),
    };

    facility.validate()?;
    Ok(facility)
}

fn exit_with(e: &CheckInError) -> ! {
    tracing::error!(
        "❌ Check-in failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
