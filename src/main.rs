use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_core::game::{DropResult, Game};
use connect4_core::WIDTH;

mod render;

fn main() -> Result<()> {
    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        render::draw(game.board()).expect("Failed to draw board!");

        if let Some(message) = game.state().announcement() {
            println!("{}", message);
            break;
        }

        print!("{}, column (1-{}) > ", game.current_player(), WIDTH);
        stdout().flush().expect("failed to flush to stdout!");

        let mut input_str = String::new();
        stdin.read_line(&mut input_str)?;

        let column = match input_str.trim().parse::<usize>() {
            Ok(column) if (1..=WIDTH).contains(&column) => column - 1,
            Ok(column) => {
                println!(
                    "Column {} out of range, columns must be between 1 and {}",
                    column, WIDTH
                );
                continue;
            }
            Err(_) => {
                println!("Invalid number: {}", input_str.trim());
                continue;
            }
        };

        if let DropResult::Ignored = game.drop_piece(column)? {
            println!("Column {} is full, pick another", column + 1);
        }
    }
    Ok(())
}
