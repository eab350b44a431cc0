//! Plain-text board rendering.
//!
//! Cells show the top piece (`?` when face-down, upper case for Red, lower
//! case for Black) followed by the stack height when it is above one.

use std::fmt;

use banqi_core::{GameConfig, GameState, GameStatus, Position, Seat};

pub fn render_board(state: &GameState) -> String {
    BoardView(state).to_string()
}

/// Display adapter drawing the grid, both hands and the status line.
struct BoardView<'a>(&'a GameState);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        write!(f, "   ")?;
        for col in 0..GameConfig::COLS {
            write!(f, "{col:>4}")?;
        }
        writeln!(f)?;

        for row in 0..GameConfig::ROWS {
            write!(f, "{row:>3}")?;
            for col in 0..GameConfig::COLS {
                let cell = match state.board.get(Position::new(row, col)) {
                    None => ".".to_string(),
                    Some(stack) if stack.weight() > 1 => {
                        format!("{}{}", stack.top(), stack.weight())
                    }
                    Some(stack) => stack.top().to_string(),
                };
                write!(f, "{cell:>4}")?;
            }
            writeln!(f)?;
        }

        for seat in Seat::ALL {
            let player = state.player(seat);
            let color = player
                .color
                .map_or_else(|| "unassigned".to_string(), |color| color.to_string());
            let hand: String = player.hand.pieces().iter().map(ToString::to_string).collect();
            writeln!(f, "{seat} ({color}) hand: [{hand}]")?;
        }

        match state.status {
            GameStatus::InProgress => {
                write!(f, "turn {}: {} to act", state.turn.number, state.active_seat())?;
                if let Some(at) = state.pending_chain() {
                    write!(f, ", chain pending at {at}")?;
                }
                writeln!(f)
            }
            GameStatus::Finished { winner, reason } => {
                writeln!(f, "finished: {winner} wins ({reason:?})")
            }
        }
    }
}
