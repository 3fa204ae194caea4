use anyhow::{Context, Result};
use tabiya_core::{Move, Position};
use tabiya_game::GameState;
use tracing::info;

const SCHOLARS_MATE: [(&str, &str); 7] = [
    ("e2", "e4"),
    ("e7", "e5"),
    ("f1", "c4"),
    ("b8", "c6"),
    ("d1", "h5"),
    ("g8", "f6"),
    ("h5", "f7"),
];

fn square(name: &str) -> Result<Position> {
    Position::from_algebraic(name).with_context(|| format!("bad square {name:?}"))
}

/// Pick the generated move from `from` to `to`.
fn select(game: &GameState, from: &str, to: &str) -> Result<Move> {
    let (from, to) = (square(from)?, square(to)?);
    game.legal_moves_for_piece(from)
        .iter()
        .copied()
        .find(|mv| mv.to() == to)
        .with_context(|| format!("no legal move {from}{to}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("tabiya starting");

    let mut game = GameState::new();
    for (from, to) in SCHOLARS_MATE {
        let mv = select(&game, from, to)?;
        game.make_move(mv)?;
        info!(%mv, "played");
    }

    println!("{}", game.board().pretty());
    match game.result() {
        Some(result) => println!("{result}"),
        None => println!("{} to move", game.current_player()),
    }
    Ok(())
}
