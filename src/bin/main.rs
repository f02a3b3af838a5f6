use std::io::Write;

use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;

use puzzle_search::problems::eight_puzzle::EightPuzzleProblem;
use puzzle_search::problems::eight_puzzle::EightPuzzleState;
use puzzle_search::report::Strategy;
use puzzle_search::report::write_summary;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Solves an 8-puzzle with several search strategies
#[derive(Parser, Debug)]
#[clap(long_version = puzzle_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Initial board as 9 row-major digits, 0 being the blank
    #[arg(
        short,
        long,
        env = "PUZZLE_BOARD",
        default_value = "182043765",
        value_parser = parse_board
    )]
    pub board: EightPuzzleState,

    /// Strategies to run, all of them by default
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<Strategy>,

    /// Print the moves of each solution
    #[arg(long)]
    pub show_path: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn parse_board(s: &str) -> Result<EightPuzzleState, String> {
    EightPuzzleState::try_from(s).map_err(|e| e.to_string())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    args.color.write_global();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let problem = EightPuzzleProblem::new(args.board);
    log::info!("Solving\n{problem}");
    if !args.board.is_solvable() {
        log::warn!(
            "Board {} can't reach the goal, every search will exhaust",
            args.board.to_digits()
        );
        println!("{}", "Unsolvable board".yellow());
    }

    let strategies = if args.strategies.is_empty() {
        Strategy::ALL.to_vec()
    } else {
        args.strategies
    };

    let mut out = anstream::stdout().lock();
    for strategy in strategies {
        let outcome = strategy.run(problem.clone());
        write_summary(&mut out, strategy, &outcome, args.show_path)?;
    }
    out.flush()
}
