//! Terminal rendering tests.

#![cfg(feature = "color")]

use fourhands::render;
use fourhands::{Card, GameRecord, Play, Rank, Round, Suit};

fn play(player: &str, suit: Suit, rank: Rank) -> Play {
    Play {
        player: player.to_string(),
        card: Card::new(suit, rank),
    }
}

#[test]
fn renders_rounds_with_and_without_color() {
    let round = Round {
        number: 1,
        plays: vec![
            play("Ada", Suit::Spades, Rank::Two),
            play("Grace", Suit::Hearts, Rank::Ten),
            play("Linus", Suit::Diamonds, Rank::Queen),
            play("Ken", Suit::Clubs, Rank::Ace),
        ],
    };

    // Both cases share one test since the color override is process-wide.
    render::set_color(false);
    assert_eq!(
        render::round(&round),
        "Ada: ♠2  Grace: ♡10 Linus: ♢Q  Ken: ♣A "
    );

    let second = Round {
        number: 2,
        plays: vec![
            play("Ada", Suit::Clubs, Rank::Three),
            play("Grace", Suit::Spades, Rank::Queen),
        ],
    };
    let record = GameRecord {
        starting_player: "Ada".to_string(),
        order: vec!["Ada".to_string(), "Grace".to_string()],
        rounds: vec![round.clone(), second],
    };
    assert_eq!(
        render::game(&record),
        "Ada: ♠2  Grace: ♡10 Linus: ♢Q  Ken: ♣A \n\nAda: ♣3  Grace: ♠Q \n\n"
    );
    assert_eq!(render::game(&GameRecord { rounds: vec![], ..record }), "");

    render::set_color(true);
    let hearts = render::card(&Card::new(Suit::Hearts, Rank::Ten)).to_string();
    assert!(hearts.starts_with("\u{1b}["));
    assert!(hearts.contains("♡10"));
    assert!(hearts.ends_with("\u{1b}[0m"));

    let spades = render::card(&Card::new(Suit::Spades, Rank::Two)).to_string();
    assert_eq!(spades, "♠2 ");

    let line = render::round(&round);
    assert!(line.contains("Ada: ♠2  Grace: \u{1b}["));
}
