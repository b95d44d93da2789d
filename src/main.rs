use floodcell::board::Grid;
use floodcell::core::Palette;
use floodcell::session::{GameSession, DEFAULT_SIDE};

fn main() {
    env_logger::init();

    println!("floodcell — flood-fill puzzle engine");
    println!("====================================\n");

    demo_fill();
    demo_undo_restart();
    demo_rotate();
    demo_random();
}

fn fixture_session() -> GameSession {
    let palette = Palette::standard();
    let rows: Vec<Vec<String>> = [
        ["white", "white", "black"],
        ["black", "white", "white"],
        ["black", "black", "white"],
    ]
    .iter()
    .map(|row| row.iter().map(|n| n.to_string()).collect())
    .collect();
    let grid = Grid::from_names(&rows, &palette).expect("fixture grid is valid");
    GameSession::with_grid(grid)
}

fn demo_fill() {
    println!("--- Fill ---");
    let mut session = fixture_session();
    let names: Vec<&str> = session.palette().names().collect();
    println!("palette: {}", names.join(", "));
    println!("start:\n{}", session.grid());
    session.select_color("red").expect("red is in the palette");
    session.apply_at(0, 0);
    println!("after filling (0,0) with red:\n{}", session.grid());
    println!("score: {} / {}\n", session.score(), session.side() * session.side());
}

fn demo_undo_restart() {
    println!("--- Undo / Restart ---");
    let mut session = fixture_session();
    session.select_color("blue").expect("blue is in the palette");
    session.apply_at(0, 0);
    session.apply_at(2, 0);
    println!("after two fills: history depth {}", session.history_len());
    session.undo();
    println!("after undo: history depth {}", session.history_len());
    session.restart();
    println!(
        "after restart: history depth {}, score back to {}\n",
        session.history_len(),
        session.score()
    );
}

fn demo_rotate() {
    println!("--- Rotate ---");
    let mut session = fixture_session();
    println!("before:\n{}", session.grid());
    session.rotate();
    println!("transposed:\n{}", session.grid());
}

fn demo_random() {
    println!("--- Random board ---");
    let mut session = GameSession::new(DEFAULT_SIDE).expect("standard palette is non-empty");
    session.subscribe(|grid, score| {
        println!("renderer sees a {}x{} board, score {}", grid.side(), grid.side(), score);
    });
    session.select_color("green").expect("green is in the palette");
    session.apply_at(4, 4);
    session.apply_at(4, 4); // redundant: same color again, no notification
    println!("moves committed: {}", session.moves());
}
