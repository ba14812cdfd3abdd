use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use rbatis_gen::{
    cli::Cli,
    config::{Config, OutputMode, Source},
    ddl,
    error::GenError,
    generator::{check_input_collision, generate_file, print_success_message},
    json_sample,
    logging::init_logging,
    prompt::{read_input, DDL_PLACEHOLDER, DDL_PROMPT, JSON_PLACEHOLDER},
    render::GeneratedStruct,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    debug!("Configuration: {:?}", config);

    let generated = match &config.source {
        Source::Ddl(provided) => {
            let Some(input) = read_input(provided.clone(), DDL_PROMPT, DDL_PLACEHOLDER)? else {
                info!("No DDL entered, nothing generated");
                return Ok(());
            };

            if let (OutputMode::Write, Some(dir)) = (config.output_mode, &config.target_dir) {
                check_input_collision(dir, &input)?;
            }

            let schema = ddl::parse(&input, config.dialect)?;
            debug!(
                "Parsed table {} with {} columns",
                schema.name,
                schema.columns.len()
            );

            if config.output_mode == OutputMode::Schema {
                let json = serde_json::to_string_pretty(&schema)
                    .context("Failed to serialize table schema")?;
                println!("{}", json);
                return Ok(());
            }

            GeneratedStruct::from_schema(&schema)
        }
        Source::Json { name, sample } => {
            let prompt = format!("Please input {} json content", name);
            let Some(input) = read_input(sample.clone(), &prompt, JSON_PLACEHOLDER)? else {
                info!("No JSON entered, nothing generated");
                return Ok(());
            };

            json_sample::from_json(name, &input)?
        }
    };

    match (config.output_mode, &config.target_dir) {
        (OutputMode::Write, Some(dir)) => {
            let path = generate_file(dir, &generated)?;
            print_success_message(&path, &generated);
        }
        (OutputMode::Write, None) => return Err(GenError::MissingTarget.into()),
        _ => print!("{}", generated.render()),
    }

    Ok(())
}
