mod self_play;
mod solver_config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::{
    Board, BotType, SessionRng, analyze, current_player, is_terminal, log, logger, status,
};
use self_play::{SelfPlayOptions, run_self_play};
use solver_config::{MAX_SELF_PLAY_GAMES, SolverConfig, get_config_manager};

#[derive(Parser)]
#[command(name = "tictactoe_solver", about = "Exhaustive minimax solver for 3x3 tic-tac-toe")]
struct Args {
    /// YAML config file; defaults to tictactoe_solver_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log the minimax value and visited node count for every engine move
    #[arg(long)]
    stats: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the optimal move for the side to play
    BestMove {
        /// Nine cells in row-major order, e.g. "X.O/.X./..." ('.', '_' or ' ' for empty)
        #[arg(long)]
        board: String,
    },
    /// Play the engine against an opponent from the empty board
    SelfPlay {
        #[arg(long)]
        games: Option<u32>,

        #[arg(long, value_enum, default_value_t = Opponent::Minimax)]
        opponent: Opponent,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Opponent {
    Minimax,
    Random,
}

impl From<Opponent> for BotType {
    fn from(opponent: Opponent) -> Self {
        match opponent {
            Opponent::Minimax => BotType::Minimax,
            Opponent::Random => BotType::Random,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: SolverConfig = get_config_manager(args.config).get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some(config.log_prefix.clone())
    } else {
        None
    };
    logger::init_logger(prefix);

    let show_search_stats = args.stats || config.show_search_stats;

    match args.command {
        Command::BestMove { board } => {
            let board: Board = board.parse()?;
            report_best_move(&board, config.show_board, show_search_stats);
        }
        Command::SelfPlay { games, opponent, seed } => {
            let games = games.unwrap_or(config.self_play_games);
            if games == 0 || games > MAX_SELF_PLAY_GAMES {
                return Err(format!("--games must be between 1 and {}", MAX_SELF_PLAY_GAMES).into());
            }
            let session_rng = SessionRng::from_optional_seed(seed.or(config.random_seed));
            let options = SelfPlayOptions {
                games,
                opponent: opponent.into(),
                show_board: config.show_board,
                show_search_stats,
            };
            run_self_play(&options, &session_rng)?;
        }
    }

    Ok(())
}

fn report_best_move(board: &Board, show_board: bool, show_search_stats: bool) {
    if show_board {
        log!("{}", board);
    }

    if is_terminal(board) {
        log!("Position is terminal ({}), no move to make", status(board));
        return;
    }

    log!("{:?} to move", current_player(board));
    if let Some(report) = analyze(board) {
        if show_search_stats {
            log!("Search value {}, {} nodes visited", report.value, report.nodes_visited);
        }
        println!("{}", report.best_move);
    }
}
