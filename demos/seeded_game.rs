//! Plays a seeded game and prints each player's cards with their points.

use fourhands::{Game, GameOptions};

fn main() {
    let options = GameOptions::default().with_starting_player("Player 1");
    let mut game = match Game::new(["Ada", "Grace"], options, 2024) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Setup error: {err}");
            return;
        }
    };

    for name in game.names() {
        if let Some(player) = game.player(name) {
            let hand = player.hand();
            println!("{name}: {} cards, {} points", hand.len(), hand.points());
        }
    }

    match game.play() {
        Ok(record) => {
            for round in &record.rounds {
                let line: Vec<String> = round
                    .plays
                    .iter()
                    .map(|play| format!("{}: {:3}", play.player, play.card))
                    .collect();
                println!("{:>2}  {}", round.number, line.join(" "));
            }
            println!("{} cards played", record.cards_played());
        }
        Err(err) => eprintln!("Play error: {err}"),
    }
}
