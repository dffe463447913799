//! Dealing a shuffled board of paired cards.

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{
    card::Card,
    config::LayoutConfig,
    error::SetupError,
    geometry::Point,
    layout,
    models::{Difficulty, Logo},
};

/// The cards of one session, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    difficulty: Difficulty,
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh board: pick distinct logos, pair them, shuffle, and lay
    /// them out on the centred grid.
    pub fn deal<R: Rng + ?Sized>(
        difficulty: Difficulty,
        layout: &LayoutConfig,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let preset = difficulty.preset();
        let cells = preset.card_count();
        if cells % 2 != 0 {
            return Err(SetupError::OddGrid { difficulty, cells });
        }
        let pairs = preset.pair_count();
        if pairs > Logo::ALL.len() {
            return Err(SetupError::NotEnoughLogos {
                difficulty,
                needed: pairs,
                available: Logo::ALL.len(),
            });
        }

        let chosen: Vec<Logo> = Logo::ALL.choose_multiple(rng, pairs).copied().collect();
        let mut logos: Vec<Logo> = chosen.iter().chain(chosen.iter()).copied().collect();
        logos.shuffle(rng);

        let cards: Vec<Card> = layout::card_rects(preset, layout)
            .into_iter()
            .zip(logos)
            .map(|(rect, logo)| Card::new(rect, logo))
            .collect();
        debug!(%difficulty, cards = cards.len(), "Board dealt");

        Ok(Self { difficulty, cards })
    }

    /// Difficulty the board was dealt for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// All cards, row-major.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable access to a single card.
    pub fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Mutable access to every card.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Index of the selectable card under `point`.
    pub fn selectable_at(&self, point: Point) -> Option<usize> {
        self.cards.iter().position(|card| card.accepts_click(point))
    }

    /// Number of pairs already found.
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// Every card has been matched.
    pub fn is_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn logo_counts(board: &Board) -> HashMap<Logo, usize> {
        let mut counts = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.logo()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_logo_appears_exactly_twice() {
        let layout = LayoutConfig::default();
        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for difficulty in Difficulty::ALL {
                let board = Board::deal(difficulty, &layout, &mut rng).expect("preset deals");
                let preset = difficulty.preset();
                assert_eq!(board.cards().len(), preset.card_count());
                let counts = logo_counts(&board);
                assert_eq!(counts.len(), preset.pair_count());
                assert!(counts.values().all(|&count| count == 2), "seed {seed}: {counts:?}");
            }
        }
    }

    #[test]
    fn same_seed_deals_same_board() {
        let layout = LayoutConfig::default();
        let a = Board::deal(Difficulty::Hard, &layout, &mut ChaCha8Rng::seed_from_u64(7));
        let b = Board::deal(Difficulty::Hard, &layout, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffles_vary_between_seeds() {
        let layout = LayoutConfig::default();
        let first = Board::deal(Difficulty::Medium, &layout, &mut ChaCha8Rng::seed_from_u64(1))
            .expect("deal");
        let differs = (2..32).any(|seed| {
            let other =
                Board::deal(Difficulty::Medium, &layout, &mut ChaCha8Rng::seed_from_u64(seed))
                    .expect("deal");
            other != first
        });
        assert!(differs);
    }

    #[test]
    fn fresh_board_is_face_down_and_unmatched() {
        let layout = LayoutConfig::default();
        let board = Board::deal(Difficulty::Easy, &layout, &mut ChaCha8Rng::seed_from_u64(3))
            .expect("deal");
        assert!(board.cards().iter().all(Card::is_selectable));
        assert_eq!(board.matched_pairs(), 0);
        assert!(!board.is_cleared());
    }

    #[test]
    fn selectable_at_finds_the_card_under_the_pointer() {
        let layout = LayoutConfig::default();
        let mut board = Board::deal(Difficulty::Easy, &layout, &mut ChaCha8Rng::seed_from_u64(3))
            .expect("deal");
        let center = board.cards()[5].rect().center();
        assert_eq!(board.selectable_at(center), Some(5));

        board.card_mut(5).expect("card 5").reveal();
        assert_eq!(board.selectable_at(center), None);
        assert_eq!(board.selectable_at(Point::new(0, 0)), None);
    }
}
