use tictactoe_engine::{
    Board, BotType, GameStatus, Mark, Position, SessionRng, analyze, apply_action,
    calculate_move, check_win_with_line, current_player, is_terminal, log, status,
};

pub struct SelfPlayOptions {
    pub games: u32,
    pub opponent: BotType,
    pub show_board: bool,
    pub show_search_stats: bool,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub engine_mark: Mark,
    pub moves: Vec<(Mark, Position)>,
    pub final_board: Board,
    pub status: GameStatus,
}

impl GameRecord {
    pub fn engine_won(&self) -> bool {
        matches!(
            (self.engine_mark, self.status),
            (Mark::X, GameStatus::XWon) | (Mark::O, GameStatus::OWon)
        )
    }

    pub fn engine_lost(&self) -> bool {
        matches!(
            (self.engine_mark, self.status),
            (Mark::X, GameStatus::OWon) | (Mark::O, GameStatus::XWon)
        )
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl SelfPlaySummary {
    fn record(&mut self, game: &GameRecord) {
        if game.engine_won() {
            self.wins += 1;
        } else if game.engine_lost() {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
    }
}

/// The engine takes X in even-numbered games and O in odd-numbered ones.
pub fn engine_mark_for_game(game_index: u32) -> Mark {
    if game_index % 2 == 0 { Mark::X } else { Mark::O }
}

pub fn play_game(
    engine_mark: Mark,
    opponent: BotType,
    rng: &mut SessionRng,
    show_search_stats: bool,
) -> Result<GameRecord, String> {
    let mut board = Board::initial();
    let mut moves = Vec::new();

    while !is_terminal(&board) {
        let mark = current_player(&board);
        let bot_type = if mark == engine_mark {
            BotType::Minimax
        } else {
            opponent
        };

        let action = match bot_type {
            BotType::Minimax if show_search_stats => {
                let report = analyze(&board)
                    .ok_or_else(|| format!("No move available for {:?} on a live board", mark))?;
                log!(
                    "{:?} search: value {}, {} nodes visited",
                    mark, report.value, report.nodes_visited
                );
                report.best_move
            }
            _ => calculate_move(bot_type, &board, rng)
                .ok_or_else(|| format!("No move available for {:?} on a live board", mark))?,
        };
        board = apply_action(&board, action).map_err(|e| e.to_string())?;
        moves.push((mark, action));
    }

    Ok(GameRecord {
        engine_mark,
        moves,
        final_board: board,
        status: status(&board),
    })
}

pub fn run_self_play(options: &SelfPlayOptions, session_rng: &SessionRng) -> Result<SelfPlaySummary, String> {
    let mut summary = SelfPlaySummary::default();
    log!(
        "Self-play: {} game(s) against {:?}, seed {}",
        options.games,
        options.opponent,
        session_rng.seed()
    );

    for game_index in 0..options.games {
        let engine_mark = engine_mark_for_game(game_index);
        let mut rng = session_rng.for_game(game_index as u64);
        let game = play_game(engine_mark, options.opponent, &mut rng, options.show_search_stats)?;

        for (mark, action) in &game.moves {
            log!("Game {}: {:?} plays {}", game_index + 1, mark, action);
        }
        if options.show_board {
            log!("{}", game.final_board);
        }
        match check_win_with_line(&game.final_board) {
            Some(line) => log!(
                "Game {}: {} (line {} -> {}), engine played {:?}",
                game_index + 1,
                game.status,
                line.start,
                line.end,
                engine_mark
            ),
            None => log!(
                "Game {}: {}, engine played {:?}",
                game_index + 1,
                game.status,
                engine_mark
            ),
        }

        summary.record(&game);
    }

    log!(
        "Engine results: {} won, {} lost, {} drawn",
        summary.wins,
        summary.losses,
        summary.draws
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_alternates_sides() {
        assert_eq!(engine_mark_for_game(0), Mark::X);
        assert_eq!(engine_mark_for_game(1), Mark::O);
        assert_eq!(engine_mark_for_game(2), Mark::X);
    }

    #[test]
    fn test_minimax_against_itself_draws() {
        let mut rng = SessionRng::new(1);
        let game = play_game(Mark::X, BotType::Minimax, &mut rng, false).unwrap();
        assert_eq!(game.status, GameStatus::Draw);
        assert_eq!(game.moves.len(), 9);
        assert_eq!(game.moves[0].0, Mark::X);
    }

    #[test]
    fn test_random_opponent_never_beats_engine() {
        let session = SessionRng::new(2024);
        for game_index in 0..6 {
            let mut rng = session.for_game(game_index as u64);
            let game = play_game(
                engine_mark_for_game(game_index),
                BotType::Random,
                &mut rng,
                false,
            )
            .unwrap();
            assert!(!game.engine_lost(), "game {}", game_index);
            assert!(game.status.is_over());
        }
    }

    #[test]
    fn test_summary_tallies_results() {
        let mut summary = SelfPlaySummary::default();
        let draw = GameRecord {
            engine_mark: Mark::X,
            moves: Vec::new(),
            final_board: Board::initial(),
            status: GameStatus::Draw,
        };
        let win = GameRecord {
            status: GameStatus::OWon,
            engine_mark: Mark::O,
            ..draw.clone()
        };
        summary.record(&draw);
        summary.record(&win);
        assert_eq!(
            summary,
            SelfPlaySummary {
                wins: 1,
                losses: 0,
                draws: 1
            }
        );
    }
}
