//! Card, deck and player tests.

use std::collections::HashSet;

use fourhands::{Card, DECK_SIZE, DealError, Deck, PlayError, Player, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn card_set(cards: &[Card]) -> HashSet<Card> {
    cards.iter().copied().collect()
}

#[test]
fn card_points() {
    assert_eq!(card(Suit::Spades, Rank::Queen).points(), 13);
    assert_eq!(card(Suit::Hearts, Rank::Two).points(), 1);
    assert_eq!(card(Suit::Hearts, Rank::Queen).points(), 1);
    assert_eq!(card(Suit::Clubs, Rank::Ace).points(), 0);
    assert_eq!(card(Suit::Diamonds, Rank::Queen).points(), 0);
    assert_eq!(card(Suit::Spades, Rank::King).points(), 0);
}

#[test]
fn card_ordering_ignores_suit() {
    assert!(card(Suit::Spades, Rank::Two).is_below(&card(Suit::Hearts, Rank::Three)));
    assert!(!card(Suit::Spades, Rank::Ace).is_below(&card(Suit::Hearts, Rank::Two)));

    let spade = card(Suit::Spades, Rank::Nine);
    let club = card(Suit::Clubs, Rank::Nine);
    assert_eq!(spade.cmp_value(&club), core::cmp::Ordering::Equal);
    assert!(!spade.is_below(&club));
    assert!(!club.is_below(&spade));
    assert_ne!(spade, club);

    assert_eq!(card(Suit::Diamonds, Rank::Two).value(), 0);
    assert_eq!(card(Suit::Diamonds, Rank::Ace).value(), 12);
}

#[test]
fn card_equality_is_structural() {
    assert_eq!(card(Suit::Hearts, Rank::Ten), card(Suit::Hearts, Rank::Ten));
    assert_ne!(card(Suit::Hearts, Rank::Ten), card(Suit::Diamonds, Rank::Ten));
    assert_ne!(card(Suit::Hearts, Rank::Ten), card(Suit::Hearts, Rank::Jack));
}

#[test]
fn card_display_is_fixed_width() {
    assert_eq!(card(Suit::Spades, Rank::Two).to_string(), "♠2");
    assert_eq!(format!("{:3}", card(Suit::Spades, Rank::Two)), "♠2 ");
    assert_eq!(format!("{:3}", card(Suit::Hearts, Rank::Ten)), "♡10");
    assert_eq!(format!("{:3}", card(Suit::Diamonds, Rank::King)), "♢K ");
    assert_eq!(format!("{:3}", card(Suit::Clubs, Rank::Ace)), "♣A ");
}

#[test]
fn standard_deck_is_full_product() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique = card_set(deck.cards());
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)));
        }
    }

    // Rank-major, suit-minor.
    assert_eq!(&deck.cards()[..5], &[
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Three),
    ]);
    assert_eq!(deck.points(), 26);
}

#[test]
fn create_without_shuffle_matches_standard() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert_eq!(Deck::create(false, &mut rng), Deck::standard());
}

#[test]
fn shuffle_preserves_cards_and_is_seeded() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let shuffled = Deck::create(true, &mut rng);
    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(card_set(shuffled.cards()), card_set(Deck::standard().cards()));
    assert_ne!(shuffled, Deck::standard());

    let mut again = ChaCha8Rng::seed_from_u64(11);
    assert_eq!(Deck::create(true, &mut again), shuffled);

    let mut other = ChaCha8Rng::seed_from_u64(12);
    assert_ne!(Deck::create(true, &mut other), shuffled);
}

#[test]
fn deal_round_robin_into_four() {
    let deck = Deck::standard();
    let original = deck.cards().to_vec();
    let hands = deck.deal(4).unwrap();

    assert_eq!(hands.len(), 4);
    assert!(hands.iter().all(|hand| hand.len() == 13));

    for (hand_index, hand) in hands.iter().enumerate() {
        for (position, dealt) in hand.cards().iter().enumerate() {
            assert_eq!(*dealt, original[position * 4 + hand_index]);
        }
    }

    let mut union = HashSet::new();
    for hand in &hands {
        for dealt in hand.cards() {
            assert!(union.insert(*dealt), "{dealt} dealt twice");
        }
    }
    assert_eq!(union, card_set(&original));
}

#[test]
fn deal_rejects_uneven_split() {
    assert_eq!(Deck::standard().deal(0), Err(DealError::ZeroHands));
    assert_eq!(
        Deck::standard().deal(5),
        Err(DealError::Uneven {
            cards: 52,
            hands: 5
        })
    );

    let single = Deck::standard().deal(1).unwrap();
    assert_eq!(single, vec![Deck::standard()]);

    let empty = Deck::default().deal(3).unwrap();
    assert!(empty.iter().all(Deck::is_empty));
}

#[test]
fn take_keeps_remaining_order() {
    let mut deck = Deck::new(vec![
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
    ]);

    assert_eq!(deck.take(1), Some(card(Suit::Hearts, Rank::Five)));
    assert_eq!(deck.cards(), &[
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::Nine)
    ]);
    assert_eq!(deck.take(2), None);
    assert!(!deck.contains(&card(Suit::Hearts, Rank::Five)));
}

#[test]
fn play_card_removes_a_held_card() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let hand = Deck::standard().deal(4).unwrap().remove(0);
    let held = card_set(hand.cards());
    let mut player = Player::new("Ada", hand);

    for remaining in (0..13).rev() {
        let played = player.play_card(&mut rng).unwrap();
        assert!(held.contains(&played));
        assert!(!player.hand().contains(&played));
        assert_eq!(player.cards_left(), remaining);
    }

    assert!(!player.has_cards());
    assert_eq!(
        player.play_card(&mut rng),
        Err(PlayError::EmptyHand("Ada".to_string()))
    );
}
