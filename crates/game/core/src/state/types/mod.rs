pub mod board;
pub mod common;
pub mod piece;
pub mod player;
pub mod stack;
pub mod turn;

pub use board::Board;
pub use common::{PieceId, Position};
pub use piece::{Color, Piece, PieceKind};
pub use player::{Hand, Player, Seat};
pub use stack::{Stack, StackPieces, base_kind_of};
pub use turn::{ChainState, TurnState};
