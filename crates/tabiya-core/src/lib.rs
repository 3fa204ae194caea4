//! Core chess rules: board representation, pieces, moves, and legality.

mod board;
mod builder;
mod castle_rights;
mod chess_move;
mod color;
mod counting;
mod direction;
mod error;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod zobrist;

pub use board::{Board, PrettyBoard};
pub use builder::BoardBuilder;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use counting::Counting;
pub use direction::Direction;
pub use error::BoardError;
pub use movegen::MoveList;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use zobrist::position_key;
