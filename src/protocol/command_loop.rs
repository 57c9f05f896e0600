//! Line protocol front-end and command loop.
//!
//! One command per input line. The first whitespace-delimited token decides
//! what happens: `white`/`black` are acknowledged with `skip`, a playable move
//! is answered with the agent's counter-move, `quit` (or end of input) stops
//! the loop, blank lines and `#` comments are ignored, and anything else is
//! reported as an unknown command. Commands run strictly one after another.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::{AgentConfig, Side};
use crate::engines::engine_capture_random::CaptureRandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::AgentResult;
use crate::game_state::game_state::{AgentGame, GameState};
use crate::move_generation::chess_core::ChessCore;
use crate::move_generation::move_generator::EngineCore;
use crate::utils::long_algebraic::long_algebraic_to_move;

pub fn run_stdio_loop(config: AgentConfig) -> AgentResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = AgentSession::new(AgentGame::from_config(&config)?);

    session.start(config.side, &mut stdout)?;
    session.run(stdin.lock(), &mut stdout)
}

pub type AgentSession = Session<ChessCore, CaptureRandomEngine>;

pub struct Session<C: EngineCore, E: Engine> {
    game: GameState<C, E>,
}

impl<C: EngineCore, E: Engine> Session<C, E> {
    pub fn new(game: GameState<C, E>) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &GameState<C, E> {
        &self.game
    }

    /// Play the first move when the agent has white.
    pub fn start(&mut self, side: Side, out: &mut impl Write) -> AgentResult<()> {
        if side.moves_first() {
            let mv = self.game.play_opening_move()?;
            writeln!(out, "{}", self.game.encode(mv))?;
            out.flush()?;
        }
        Ok(())
    }

    /// Read and dispatch lines until `quit` or end of input.
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> AgentResult<()> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input, stopping");
                return Ok(());
            }

            let text = String::from_utf8_lossy(&buffer);
            let line = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if self.handle_command(line, out)? {
                return Ok(());
            }
            out.flush()?;
        }
    }

    /// Dispatch one line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> AgentResult<bool> {
        let token = line.split_whitespace().next().unwrap_or_default();
        debug!(token, "command");

        match token {
            "" => {}
            _ if token.starts_with('#') => {}
            "quit" => return Ok(true),
            "white" | "black" => writeln!(out, "skip")?,
            _ => {
                let opponent_move = long_algebraic_to_move(token, self.game.position());
                if opponent_move.is_none() {
                    writeln!(out, "Unknown command: '{line}'")?;
                } else {
                    let reply = self.game.apply_opponent_then_counter(opponent_move)?;
                    writeln!(out, "{}", self.game.encode(reply))?;
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::AgentSession;
    use crate::config::{AgentConfig, Side};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::contains;
    use crate::game_state::game_state::AgentGame;
    use crate::move_generation::chess_core::ChessCore;
    use crate::move_generation::move_generator::EngineCore;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    fn session(fen: &str) -> AgentSession {
        let config = AgentConfig::new(Side::Black).with_seed(17).with_start_fen(fen);
        AgentSession::new(AgentGame::from_config(&config).expect("game should build"))
    }

    fn lines_of(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .expect("output should be UTF-8")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn run(session: &mut AgentSession, input: &str) -> Vec<String> {
        let mut out = Vec::new();
        session
            .run(Cursor::new(input.as_bytes().to_vec()), &mut out)
            .expect("loop should succeed");
        lines_of(out)
    }

    #[test]
    fn white_opens_with_a_legal_move() {
        let mut s = session(STARTING_POSITION_FEN);
        let mut out = Vec::new();
        s.start(Side::White, &mut out).expect("start should succeed");
        let lines = lines_of(out);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 4);
        let start = ChessCore::default();
        let opening = long_algebraic_to_move(&lines[0], &start);
        assert!(contains(&start.legal_moves(), opening));
    }

    #[test]
    fn black_waits_for_the_opponent() {
        let mut s = session(STARTING_POSITION_FEN);
        let mut out = Vec::new();
        s.start(Side::Black, &mut out).expect("start should succeed");
        assert!(out.is_empty());
        assert_eq!(s.game().state_count(), 1);
    }

    #[test]
    fn side_tokens_are_acknowledged() {
        let mut s = session(STARTING_POSITION_FEN);
        let lines = run(&mut s, "white\nblack extra words\n");
        assert_eq!(lines, vec!["skip", "skip"]);
        assert_eq!(s.game().current_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn opponent_move_gets_a_counter_move() {
        let mut s = session(STARTING_POSITION_FEN);
        let lines = run(&mut s, "e2e4\n");
        assert_eq!(lines.len(), 1);

        let mut after = ChessCore::default();
        after
            .apply_move(long_algebraic_to_move("e2e4", &after))
            .expect("e2e4 should apply");
        let reply = long_algebraic_to_move(&lines[0], &after);
        assert!(contains(&after.legal_moves(), reply));
        assert_eq!(s.game().plies_since_reset(), 2);
    }

    #[test]
    fn unplayable_move_is_unknown_command() {
        // Black to move: no move encodes to e2e4.
        let mut s = session(AFTER_E4);
        let lines = run(&mut s, "e2e4\n");
        assert_eq!(lines, vec!["Unknown command: 'e2e4'"]);
        assert_eq!(s.game().current_fen(), AFTER_E4);
    }

    #[test]
    fn unknown_text_echoes_raw_line() {
        let mut s = session(STARTING_POSITION_FEN);
        let lines = run(&mut s, "  go depth 3\r\n");
        assert_eq!(lines, vec!["Unknown command: '  go depth 3'"]);
    }

    #[test]
    fn blank_lines_and_comments_are_silent() {
        let mut s = session(STARTING_POSITION_FEN);
        let lines = run(&mut s, "\n   \n# comment\n#e2e4\n");
        assert!(lines.is_empty());
        assert_eq!(s.game().current_fen(), STARTING_POSITION_FEN);
        assert_eq!(s.game().state_count(), 1);
    }

    #[test]
    fn quit_stops_without_output() {
        let mut s = session(STARTING_POSITION_FEN);
        let lines = run(&mut s, "quit now\ne2e4\n");
        assert!(lines.is_empty());
        assert_eq!(s.game().current_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn end_of_input_without_newline() {
        let mut s = session(STARTING_POSITION_FEN);
        let lines = run(&mut s, "white");
        assert_eq!(lines, vec!["skip"]);
    }

    #[test]
    fn forced_capture_is_answered() {
        let mut s = session(AFTER_E4);
        let lines = run(&mut s, "d7d5\n");
        assert_eq!(lines, vec!["e4d5"]);
    }

    #[test]
    fn terminal_position_prints_none() {
        let mut s = session("8/8/8/8/8/1k6/3q4/K7 b - - 0 1");
        let lines = run(&mut s, "d2c2\n");
        assert_eq!(lines, vec!["(none)"]);
    }

    #[test]
    fn uppercase_promotion_letter_is_accepted() {
        let mut s = session("k7/8/8/8/8/8/p7/7K b - - 0 1");
        let lines = run(&mut s, "a2a1Q\n");
        assert_eq!(lines.len(), 1);
        assert_ne!(lines[0], "Unknown command: 'a2a1Q'");
        assert_eq!(s.game().plies_since_reset(), 2);
    }
}
