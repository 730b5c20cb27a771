/*!
 * cpu-sched - Main Entry Point
 *
 * Reads a process table, schedules it with the chosen algorithm and prints
 * the timeline with per-process statistics.
 */

use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, info};

use cpu_sched::config::USAGE;
use cpu_sched::{
    init_tracing, parse_input, render_error_json, render_json, render_text, AppError, AppResult,
    Command, Engine, InputSource, OutputFormat, Process, RunConfig, SerializableError,
};

fn main() -> ExitCode {
    // Initialize structured tracing
    init_tracing();

    let config = match Command::from_env_args() {
        Ok(Command::Help) => {
            print!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Command::Run(config)) => config,
        Err(err) => return fail(err, OutputFormat::Text),
    };

    let format = config.format;
    match run(config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => fail(err, format),
    }
}

fn run(config: RunConfig) -> AppResult<String> {
    let processes = load_processes(&config.input)?;
    info!(
        algorithm = config.algorithm.as_str(),
        processes = processes.len(),
        "Scheduling process table"
    );

    let schedule = Engine::with_config(config.engine).schedule(&processes, config.algorithm)?;
    match config.format {
        OutputFormat::Text => Ok(render_text(&schedule)),
        OutputFormat::Json => render_json(&schedule, &processes).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

fn load_processes(source: &InputSource) -> AppResult<Vec<Process>> {
    let text = match source {
        InputSource::Preset(preset) => {
            debug!(preset = preset.as_str(), "Using preset process table");
            return Ok(preset.processes());
        }
        InputSource::File(path) => {
            debug!(path = %path.display(), "Reading process table");
            std::fs::read_to_string(path)
                .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e).into()))?
        }
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    Ok(parse_input(&text)?)
}

fn fail(err: AppError, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Json => match render_error_json(&SerializableError::from(&err)) {
            Ok(json) => println!("{}", json),
            Err(_) => eprintln!("{:?}", miette::Report::new(err)),
        },
        OutputFormat::Text => eprintln!("{:?}", miette::Report::new(err)),
    }
    ExitCode::FAILURE
}
