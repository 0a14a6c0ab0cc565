//! Contract generator binary

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use contract_cli::{
    clause_text, extract_file, parse_assignment, parse_issue_date, render_contract,
    templates_json, RecordSource,
};
use shared_types::{ContractField, ContractType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "contract-cli")]
#[command(version, about = "Real-estate contract generator (La Pampa, es-AR)")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract known fields from the text of a prior contract
    Extract {
        file: PathBuf,

        /// Declared MIME type (guessed from the extension otherwise)
        #[arg(long)]
        mime: Option<String>,
    },

    /// Render a contract
    Render {
        /// locacion, compraventa or comercial
        #[arg(short = 't', long = "type")]
        contract_type: ContractType,

        /// Record values as a camelCase JSON object
        #[arg(long)]
        record: Option<String>,

        /// Prior contract to pre-fill from
        #[arg(long)]
        from: Option<PathBuf>,

        /// Declared MIME type of --from
        #[arg(long)]
        mime: Option<String>,

        /// Field override, e.g. --set tenantName="Ana Ruiz"
        #[arg(long = "set", value_parser = parse_set)]
        set: Vec<(ContractField, String)>,

        /// Signing date (defaults to today)
        #[arg(long, value_parser = parse_issue_date)]
        date: Option<NaiveDate>,

        /// Write the .txt export here instead of printing
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// List the available templates
    Templates,

    /// Print the rent adjustment clause for a code
    Clause { code: String },
}

fn parse_set(input: &str) -> Result<(ContractField, String), String> {
    parse_assignment(input).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries contract text and JSON, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Extract { file, mime } => {
            let report = extract_file(&file, mime.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Render {
            contract_type,
            record,
            from,
            mime,
            set,
            date,
            out_dir,
        } => {
            let source = RecordSource {
                json: record,
                from,
                mime,
                assignments: set,
            };
            let export = render_contract(contract_type, &source, date)?;
            match out_dir {
                Some(dir) => {
                    let path = export.save_to(&dir)?;
                    println!("{}", path.display());
                }
                None => println!("{}", export.content),
            }
        }
        Command::Templates => println!("{}", templates_json()?),
        Command::Clause { code } => println!("{}", clause_text(&code)?),
    }

    Ok(())
}
