//! Command Line Interface for the fixed-income comparison client.
mod chart_file;
mod payload;
mod render;

use anyhow::Result;
use chart_file::JsonFileTarget;
use chrono::Local;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use payload::{CommonArgs, InvestmentChoice, SimulationArgs};
use rendafixa_data::{
    CancelToken, ClientConfig, HttpCalculationService, ServiceError, SimulationRunner,
};
use rendafixa_domain::{GlossaryTerm, InvestmentType, YieldType};
use rendafixa_report::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rendafixa")]
#[command(about = "Comparador de investimentos de renda fixa", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate every investment option and rank the results
    Simular {
        #[command(flatten)]
        args: SimulationArgs,

        /// Write the evolution chart (Chart.js line config) to this file
        #[arg(short, long, default_value = "grafico-evolucao.json")]
        grafico: PathBuf,
    },
    /// Compare two single investments side by side
    Comparar {
        #[command(flatten)]
        common: CommonArgs,

        /// First investment type (e.g. cdb, lci, tesouro_ipca)
        #[arg(long, default_value = "cdb")]
        tipo_a: InvestmentType,

        /// First yield type (prefixado, cdi, ipca_mais)
        #[arg(long, default_value = "cdi")]
        indexador_a: YieldType,

        /// First yield value (% a.a., % do CDI or spread over IPCA)
        #[arg(long, default_value = "")]
        taxa_a: String,

        /// Second investment type
        #[arg(long, default_value = "lci")]
        tipo_b: InvestmentType,

        /// Second yield type
        #[arg(long, default_value = "cdi")]
        indexador_b: YieldType,

        /// Second yield value
        #[arg(long, default_value = "")]
        taxa_b: String,
    },
    /// Show glossary definitions
    Glossario {
        /// Term to look up (e.g. cdb, ipca_mais); all terms when omitted
        termo: Option<GlossaryTerm>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Glossario { termo } => {
            print!("{}", render::glossary_text(termo));
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Simular { args, grafico } => simulate(&args, grafico)
            .await
            .map_err(|e| e.user_message()),
        Commands::Comparar {
            common,
            tipo_a,
            indexador_a,
            taxa_a,
            tipo_b,
            indexador_b,
            taxa_b,
        } => {
            let first = InvestmentChoice {
                investment_type: tipo_a,
                yield_type: indexador_a,
                yield_value: taxa_a,
            };
            let second = InvestmentChoice {
                investment_type: tipo_b,
                yield_type: indexador_b,
                yield_value: taxa_b,
            };
            compare(&common, &first, &second)
                .await
                .map_err(|e| render::comparison_error(&e))
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(message) => {
            eprintln!("❌ {message}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn runner() -> Result<SimulationRunner<HttpCalculationService>, ServiceError> {
    let config = ClientConfig::from_env()?;
    info!(base_url = %config.base_url, timeout = ?config.timeout, "Using calculation service");
    let service = HttpCalculationService::new(&config)?;
    Ok(SimulationRunner::new(service, config.timeout))
}

/// Cancels the token on Ctrl-C.
fn cancel_on_interrupt() -> CancelToken {
    let token = CancelToken::new();
    let handle = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            handle.cancel();
        }
    });
    token
}

async fn simulate(args: &SimulationArgs, chart_path: PathBuf) -> Result<(), ServiceError> {
    let request = args.to_request();
    request.validate()?;

    let runner = runner()?;
    let cancel = cancel_on_interrupt();

    println!("📡 Simulando {} meses...", request.months);
    let results = runner.simulate(&request, &cancel).await?;

    let summary = summarize(&results);
    println!();
    print!("{}", render::summary_text(&summary));

    if !results.is_empty() {
        println!();
        to_pretty_table(&table_rows(&results)).printstd();
    }

    let target = JsonFileTarget::new(chart_path);
    let mut slot = match target.stale_handle() {
        Some(handle) => ChartSlot::with_existing(target, handle),
        None => ChartSlot::new(target),
    };
    match slot.update(&results, Local::now().date_naive()) {
        Ok(true) => println!(
            "\n📈 Gráfico de evolução salvo em {}",
            slot.target().path().display()
        ),
        Ok(false) => println!("\nSem dados de evolução mensal para o gráfico."),
        Err(e) => warn!(error = %e, "Could not write evolution chart"),
    }
    // The chart file outlives the process.
    slot.detach();
    Ok(())
}

async fn compare(
    common: &CommonArgs,
    first: &InvestmentChoice,
    second: &InvestmentChoice,
) -> Result<(), ServiceError> {
    let first_request = common.to_calculation(first);
    let second_request = common.to_calculation(second);
    first_request.validate()?;
    second_request.validate()?;

    let runner = runner()?;
    let cancel = cancel_on_interrupt();

    println!(
        "📡 Calculando {} e {}...",
        first.investment_type.display_name(),
        second.investment_type.display_name()
    );
    let (a, b) = runner.compare(&first_request, &second_request, &cancel).await?;

    println!();
    print!(
        "{}",
        detail_card(&format!("Investimento A: {}", first.investment_type.display_name()), &a)
    );
    println!();
    print!(
        "{}",
        detail_card(&format!("Investimento B: {}", second.investment_type.display_name()), &b)
    );
    Ok(())
}
