use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tmtrace::{
    CatalogManager, ConfigLoader, Machine, SimulationConfig, SimulatorError, TransitionTable,
    DEFAULT_STEP_BUDGET,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine configuration file (YAML) to simulate
    #[clap(short, long)]
    config: Option<String>,

    /// Run an embedded example machine by name
    #[clap(short, long)]
    builtin: Option<String>,

    /// List the embedded example machines
    #[clap(short, long)]
    list: bool,

    /// Additional input strings, appended to the configuration's inputs
    #[clap(short, long)]
    input: Vec<String>,

    /// Maximum number of steps per run
    #[clap(short, long, default_value_t = DEFAULT_STEP_BUDGET)]
    steps: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SimulatorError> {
    if cli.list {
        for name in CatalogManager::list_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    let table = TransitionTable::build(&config.mt)?;

    print_summary(&config, &table);

    let inputs = config.inputs.iter().chain(cli.input.iter());
    for input in inputs {
        simulate(&table, input, cli.steps);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<SimulationConfig, SimulatorError> {
    match (&cli.config, &cli.builtin) {
        (Some(path), _) => ConfigLoader::load_config(Path::new(path)),
        (None, Some(name)) => CatalogManager::get_by_name(name),
        (None, None) => Err(SimulatorError::FileError(
            "No machine given: pass --config <file> or --builtin <name>".to_string(),
        )),
    }
}

fn print_summary(config: &SimulationConfig, table: &TransitionTable) {
    println!("{}", "=".repeat(70));
    println!("TURING MACHINE SIMULATOR");
    println!("{}", "=".repeat(70));
    if !config.name.is_empty() {
        println!("Machine: {}", config.name);
    }
    println!("States: {:?}", config.mt.states);
    println!("Input alphabet: {:?}", config.mt.input_alphabet);
    println!("Tape alphabet: {:?}", config.mt.tape_alphabet);
    println!("Initial state: {}", config.mt.initial_state);
    println!("Accepting states: {:?}", config.mt.accept_states);
    println!("Transitions: {}", table.rule_count());
}

/// Runs a fresh machine on one input and prints the trace and verdict.
fn simulate(table: &TransitionTable, input: &str, steps: usize) {
    println!("\n{}", "=".repeat(70));
    println!("Simulating input: '{input}'");
    println!("{}", "=".repeat(70));

    let result = Machine::new(table, input).run(steps);

    println!("\nInstantaneous descriptions:");
    println!("{}", "-".repeat(70));
    for (i, id) in result.trace.iter().enumerate() {
        println!("Step {i}: {id}");
    }
    println!("{}", "-".repeat(70));

    if result.accepted {
        println!("INPUT ACCEPTED");
    } else {
        println!("INPUT REJECTED");
    }
    println!("Final state: {}", result.final_state);
    println!("Final tape content: {}", result.final_tape);
    println!("{}\n", "=".repeat(70));
}
