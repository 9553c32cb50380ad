//! RxGuard drug interaction checker CLI
//!
//! Checks a medication list against the interaction corpus and prints a
//! summary or the full JSON report. Also exposes the corpus itself and the
//! built-in seed scenarios.
//!
//! Usage:
//!   cargo run -p demo -- analyze Warfarin Aspirin
//!   cargo run -p demo -- analyze "Phenelzine (MAOI)" "Sertraline (Zoloft)" --json
//!   cargo run -p demo -- classes "Sertraline (Zoloft)"
//!   cargo run -p demo -- rules
//!   cargo run -p demo -- scenarios

use std::{borrow::Cow, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rxguard_contracts::{error::RxGuardResult, report::InteractionReport};
use rxguard_core::{EngineConfig, InteractionEngine};
use rxguard_rules::RuleCorpus;

// ── CLI definition ────────────────────────────────────────────────────────────

/// RxGuard: rule-based drug interaction checker.
#[derive(Parser)]
#[command(
    name = "rxguard",
    about = "RxGuard drug interaction checker",
    long_about = "Checks a medication list against an authored interaction corpus,\n\
                  reporting matched interactions, risk level, recommendations and ROI."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a medication list.
    Analyze {
        /// Medication names, e.g. "Sertraline (Zoloft)".
        #[arg(required = true)]
        medications: Vec<String>,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
        /// Engine configuration TOML.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Interaction corpus TOML to use instead of the built-in one.
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Show the drug classes a medication name resolves to.
    Classes {
        drug: String,
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// List every rule in the corpus.
    Rules {
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Run the seed scenarios and report pass/fail for each.
    Scenarios {
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for matcher and corpus output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Analyze {
            medications,
            json,
            config,
            rules,
        } => run_analyze(&medications, json, config, rules),
        Command::Classes { drug, rules } => run_classes(&drug, rules),
        Command::Rules { rules } => run_rules(rules),
        Command::Scenarios { rules } => run_scenarios(rules),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("rxguard error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

fn load_corpus(path: Option<PathBuf>) -> RxGuardResult<Cow<'static, RuleCorpus>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading interaction corpus");
            Ok(Cow::Owned(RuleCorpus::from_file(&path)?))
        }
        None => Ok(Cow::Borrowed(RuleCorpus::builtin())),
    }
}

fn load_config(path: Option<PathBuf>) -> RxGuardResult<EngineConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading engine configuration");
            EngineConfig::from_file(&path)
        }
        None => Ok(EngineConfig::default()),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_analyze(
    medications: &[String],
    json: bool,
    config: Option<PathBuf>,
    rules: Option<PathBuf>,
) -> RxGuardResult<bool> {
    let corpus = load_corpus(rules)?;
    let config = load_config(config)?;

    let mut engine = InteractionEngine::with_config(&*corpus, config);
    let report = engine.set_medications(medications).generate_report();

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_summary(&report);
    }
    Ok(true)
}

fn run_classes(drug: &str, rules: Option<PathBuf>) -> RxGuardResult<bool> {
    let corpus = load_corpus(rules)?;
    let classes = corpus.registry().classes_of(drug);

    if classes.is_empty() {
        println!("{}: no known drug classes", drug);
    } else {
        println!("{}: {}", drug, classes.join(", "));
    }
    Ok(true)
}

fn run_rules(rules: Option<PathBuf>) -> RxGuardResult<bool> {
    let corpus = load_corpus(rules)?;

    for rule in corpus.rules() {
        println!(
            "{:<34} {:>2} {:<16} {:<40} {}",
            rule.id,
            rule.severity,
            rule.severity.bucket().label(),
            rule.pair.describe(),
            rule.risk
        );
    }
    println!();
    println!(
        "{} rule(s) over {} drug class(es)",
        corpus.rules().len(),
        corpus.registry().classes().len()
    );
    Ok(true)
}

fn run_scenarios(rules: Option<PathBuf>) -> RxGuardResult<bool> {
    let corpus = load_corpus(rules)?;
    let outcomes = rxguard_scenarios::run_all(&*corpus);

    for outcome in &outcomes {
        println!(
            "  [{}] {:<28} {}",
            if outcome.passed { "PASS" } else { "FAIL" },
            outcome.name,
            outcome.detail
        );
    }

    let failed = outcomes.iter().filter(|o| !o.passed).count();
    println!();
    println!("{} scenario(s), {} failed", outcomes.len(), failed);
    Ok(failed == 0)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_summary(report: &InteractionReport) {
    let analysis = &report.analysis;

    println!();
    println!("Medications: {}", analysis.medications.join(", "));
    println!(
        "Risk level:  {}",
        analysis.risk_level.as_str().to_uppercase()
    );
    println!();

    if analysis.interactions.is_empty() {
        println!("No interactions found.");
    } else {
        println!("Interactions ({}):", analysis.interactions.len());
        for interaction in &analysis.interactions {
            println!(
                "  [{:>2} {}] {}: {} ({})",
                interaction.severity,
                interaction.severity.bucket().label(),
                interaction.pair_label(),
                interaction.risk,
                interaction.rule_id
            );
            println!("      {}", interaction.clinical_significance);
        }
    }
    println!();

    println!("Recommendations:");
    for rec in &analysis.recommendations {
        println!(
            "  [{}] {}",
            format!("{:?}", rec.priority).to_uppercase(),
            rec.title
        );
        println!("      {}", rec.action);
    }

    if !report.alternatives.is_empty() {
        println!();
        println!("Alternatives:");
        for group in &report.alternatives {
            for suggestion in &group.suggestions {
                println!(
                    "  {} -> {}: {} ({})",
                    group.from, suggestion.to, suggestion.reason, suggestion.pair
                );
            }
        }
    }

    let roi = &report.roi;
    println!();
    println!(
        "ROI: {} of {} adverse event(s) prevented, net savings {:.0}, ROI {}%",
        roi.events_prevented, roi.total_adverse_events, roi.net_savings, roi.roi
    );
    println!();
}
