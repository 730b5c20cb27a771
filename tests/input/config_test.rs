/*!
 * Configuration Tests
 * Environment-driven engine and run configuration
 */

use cpu_sched::config::{ALGORITHM_ENV, FORMAT_ENV, MAX_TICKS_ENV, QUANTUM_ENV};
use cpu_sched::{Algorithm, AppError, Command, EngineConfig, OutputFormat};
use serial_test::serial;

fn clear_env() {
    for key in [MAX_TICKS_ENV, ALGORITHM_ENV, QUANTUM_ENV, FORMAT_ENV] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_engine_config_from_env() {
    clear_env();
    assert_eq!(EngineConfig::from_env().unwrap(), EngineConfig::default());

    std::env::set_var(MAX_TICKS_ENV, "1234");
    assert_eq!(EngineConfig::from_env().unwrap().max_ticks, 1234);

    std::env::set_var(MAX_TICKS_ENV, "-5");
    assert!(matches!(
        EngineConfig::from_env(),
        Err(AppError::Configuration(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_run_config_reads_process_env() {
    clear_env();
    std::env::set_var(ALGORITHM_ENV, "rr");
    std::env::set_var(QUANTUM_ENV, "5");
    std::env::set_var(FORMAT_ENV, "json");

    let command = Command::parse(["--preset", "convoy"], |key| std::env::var(key).ok()).unwrap();
    match command {
        Command::Run(config) => {
            assert_eq!(config.algorithm, Algorithm::round_robin(5).unwrap());
            assert_eq!(config.format, OutputFormat::Json);
        }
        Command::Help => panic!("expected a run"),
    }
    clear_env();
}
