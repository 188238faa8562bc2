//! Property tests for card piles.

mod common;

use pandemic_sim::zones::{recycle_onto, seed_epidemics, CardPile};
use pandemic_sim::GameRng;
use proptest::prelude::*;

proptest! {
    #![proptest_config(common::proptest_config())]

    /// Splitting then merging loses and duplicates nothing, and keeps order.
    #[test]
    fn prop_split_merge_conserves_cards(
        cards in proptest::collection::vec(any::<u16>(), 0..120),
        n in 1usize..12,
    ) {
        let pile = CardPile::from_cards(cards.clone());
        let parts = pile.split(n).unwrap();

        prop_assert_eq!(parts.len(), n);
        let total: usize = parts.iter().map(CardPile::len).sum();
        prop_assert_eq!(total, cards.len());

        let chunk = cards.len().div_ceil(n);
        for part in &parts {
            prop_assert!(part.len() <= chunk);
        }

        let merged = CardPile::merge(parts);
        prop_assert_eq!(merged.cards(), cards.as_slice());
    }

    /// Shuffling permutes: same multiset, same length.
    #[test]
    fn prop_shuffle_is_permutation(
        cards in proptest::collection::vec(any::<u8>(), 0..80),
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut pile = CardPile::from_cards(cards.clone());
        pile.shuffle(&mut rng);

        let mut expected = cards;
        expected.sort_unstable();
        let mut actual = pile.cards().to_vec();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    /// Drawing never yields more than asked or more than the pile held.
    #[test]
    fn prop_draw_is_bounded(
        len in 0usize..60,
        n in 0usize..80,
    ) {
        let mut pile: CardPile<usize> = (0..len).collect();
        let drawn = pile.draw(n);

        prop_assert_eq!(drawn.len(), n.min(len));
        prop_assert_eq!(pile.len(), len - drawn.len());
        // Topmost first
        for pair in drawn.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    /// Each deck segment carries exactly one epidemic when the deck divides
    /// evenly.
    #[test]
    fn prop_seeded_epidemics_one_per_segment(
        segments in 4usize..=6,
        per_segment in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        // 0 marks an epidemic
        let pile: CardPile<u32> = (1..=(segments * per_segment) as u32).collect();
        let seeded = seed_epidemics(pile, vec![0; segments], &mut rng).unwrap();

        prop_assert_eq!(seeded.len(), segments * (per_segment + 1));
        for segment in seeded.cards().chunks(per_segment + 1) {
            prop_assert_eq!(segment.iter().filter(|&&c| c == 0).count(), 1);
        }
    }

    /// Recycling keeps both piles' cards and empties the discard pile.
    #[test]
    fn prop_recycle_conserves_cards(
        draw in proptest::collection::vec(0u16..500, 0..40),
        discard in proptest::collection::vec(500u16..1000, 0..40),
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut draw_pile = CardPile::from_cards(draw.clone());
        let mut discard_pile = CardPile::from_cards(discard.clone());

        recycle_onto(&mut draw_pile, &mut discard_pile, &mut rng);

        prop_assert!(discard_pile.is_empty());
        prop_assert_eq!(draw_pile.len(), draw.len() + discard.len());
        prop_assert_eq!(&draw_pile.cards()[..draw.len()], draw.as_slice());
        prop_assert!(draw_pile.cards()[draw.len()..].iter().all(|&c| c >= 500));
    }
}

#[test]
fn split_into_zero_piles_is_rejected() {
    let pile: CardPile<u8> = (0..4).collect();
    assert!(pile.split(0).is_err());
}
