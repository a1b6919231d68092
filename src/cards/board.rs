//! The board: card collection, grid layout, and the pair shuffle.
//!
//! ## Layout
//!
//! Cards are laid out on an `N x N` grid of cells, centered on the origin,
//! one cell per card in row-major order. When `N` is odd the cell count is
//! odd too, which would break pairing — so the board holds `N² - 1` cards
//! and the card that would sit on the center cell claims the vacant far
//! corner `(N-1, N-1)` instead, leaving the center empty. Which cell a
//! given `CardId` occupies is part of the engine contract (it decides what
//! the player can click); the exact pixel positions are a courtesy for the
//! presentation layer.
//!
//! ## Shuffle
//!
//! `shuffle_faces` is deliberately not a uniform shuffle. Faces are drawn
//! one at a time, and a draw that collides with an already-chosen face is
//! bumped forward (wrapping around the pool) until it is distinct. The
//! initial draw also never lands on the last face of the pool; only bumps
//! reach it. This reproduces the historical assignment behavior: biased,
//! but always a valid pairing with every chosen face on exactly two cards.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, FaceId, GameRng, RoundConfig};

use super::card::Card;

/// A card's grid cell and normalized on-screen position.
///
/// Positions are centered on the origin with the panel spanning roughly one
/// unit; the shell scales them to its viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
}

/// Owns the cards for one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid_size: usize,
    cards: Vec<Card>,
    /// Cell per card, indexed by `CardId`.
    layout: Vec<CellPos>,
}

impl Board {
    /// Build the card collection and layout for a validated configuration.
    ///
    /// Every card gets a stable `CardId` equal to its index, no face, and
    /// starts face-up for the opening reveal.
    #[must_use]
    pub fn build(config: &RoundConfig) -> Self {
        let count = config.card_count();
        let cards = (0..count).map(|i| Card::new(CardId::new(i as u16))).collect();
        let layout = compute_layout(config.grid_size, count);

        Self {
            grid_size: config.grid_size,
            cards,
            layout,
        }
    }

    /// Grid dimension N.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of cards on the board. Always even.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// All cards, in `CardId` order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Mutable card lookup.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// The grid cell a card occupies.
    #[must_use]
    pub fn cell(&self, id: CardId) -> Option<CellPos> {
        self.layout.get(id.index()).copied()
    }

    /// Iterate over all card ids.
    pub fn card_ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len()).map(|i| CardId::new(i as u16))
    }

    /// Assign each of `card_count / 2` faces to exactly two random cards.
    ///
    /// Draws one face per pair with the bump-on-collision rule described in
    /// the module docs, then places each face on two randomly chosen
    /// still-unassigned slots, walking forward from a random start until a
    /// free slot is found.
    ///
    /// The face pool must cover every pair; configuration validates this
    /// before a board exists.
    pub fn shuffle_faces(&mut self, face_pool: usize, rng: &mut GameRng) {
        let pairs = self.cards.len() / 2;
        assert!(face_pool >= pairs, "face pool must cover every pair");

        let mut chosen: Vec<usize> = Vec::with_capacity(pairs);
        for _ in 0..pairs {
            // The initial draw leaves out the pool's last face.
            let mut pick = rng.gen_range_usize(0..face_pool - 1);
            loop {
                let mut bumped = false;
                for &prev in chosen.iter().rev() {
                    if prev == pick {
                        pick = (pick + 1) % face_pool;
                        bumped = true;
                    }
                }
                if !bumped {
                    break;
                }
            }
            chosen.push(pick);
        }

        let count = self.cards.len();
        for &face in &chosen {
            for _ in 0..2 {
                let mut slot = rng.gen_range_usize(0..count - 1);
                while self.cards[slot].face().is_some() {
                    slot = (slot + 1) % count;
                }
                self.cards[slot].assign_face(FaceId::new(face as u16));
            }
        }
    }
}

/// Compute the cell and position for every card id.
fn compute_layout(n: usize, count: usize) -> Vec<CellPos> {
    let odd = n % 2 == 1;
    let x_step = 1.0 / n as f32;
    let y_step = 1.0 / n as f32;

    let mut start_x = -x_step * (n / 2) as f32;
    let mut y = -y_step * (n / 2) as f32;
    if !odd {
        start_x += x_step / 2.0;
        y += y_step / 2.0;
    }

    let mut layout = vec![CellPos::default(); count];
    for row in 0..n {
        let mut x = start_x;
        for col in 0..n {
            let id = if odd && row == n - 1 && col == n - 1 {
                // Vacant far corner: claimed by the card from the center
                // cell, which moves there.
                (n / 2) * n + n / 2
            } else {
                row * n + col
            };
            layout[id] = CellPos { row, col, x, y };
            x += x_step / 1.3;
        }
        y += y_step * 1.2;
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: usize) -> Board {
        let pairs = (n * n - n % 2) / 2;
        let config = RoundConfig::new(n, 150.0, pairs).unwrap();
        Board::build(&config)
    }

    fn face_counts(board: &Board) -> std::collections::HashMap<FaceId, usize> {
        let mut counts = std::collections::HashMap::new();
        for card in board.cards() {
            if let Some(face) = card.face() {
                *counts.entry(face).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn test_card_count_even_grid() {
        assert_eq!(board(4).card_count(), 16);
        assert_eq!(board(6).card_count(), 36);
    }

    #[test]
    fn test_card_count_odd_grid() {
        assert_eq!(board(3).card_count(), 8);
        assert_eq!(board(5).card_count(), 24);
    }

    #[test]
    fn test_cards_start_face_up_unassigned() {
        let board = board(4);
        for (i, card) in board.cards().iter().enumerate() {
            assert_eq!(card.unique_id(), CardId::new(i as u16));
            assert!(card.is_face_up());
            assert_eq!(card.face(), None);
        }
    }

    #[test]
    fn test_even_grid_layout_is_row_major() {
        let board = board(4);
        for id in board.card_ids() {
            let cell = board.cell(id).unwrap();
            assert_eq!(cell.row, id.index() / 4);
            assert_eq!(cell.col, id.index() % 4);
        }
    }

    #[test]
    fn test_odd_grid_center_card_claims_corner() {
        let board = board(5);
        // Card 12 would sit at the center cell (2, 2); it occupies the
        // vacant corner instead.
        let cell = board.cell(CardId::new(12)).unwrap();
        assert_eq!((cell.row, cell.col), (4, 4));

        // No card occupies the center cell
        for id in board.card_ids() {
            let cell = board.cell(id).unwrap();
            assert_ne!((cell.row, cell.col), (2, 2));
        }
    }

    #[test]
    fn test_odd_grid_other_cards_row_major() {
        let board = board(5);
        for id in board.card_ids() {
            if id.index() == 12 {
                continue;
            }
            let cell = board.cell(id).unwrap();
            assert_eq!(cell.row, id.index() / 5);
            assert_eq!(cell.col, id.index() % 5);
        }
    }

    #[test]
    fn test_every_cell_occupied_once() {
        for n in [2, 3, 4, 5, 6, 7] {
            let board = board(n);
            let mut seen = std::collections::HashSet::new();
            for id in board.card_ids() {
                let cell = board.cell(id).unwrap();
                assert!(seen.insert((cell.row, cell.col)), "duplicate cell in {n}x{n}");
            }
            assert_eq!(seen.len(), board.card_count());
        }
    }

    #[test]
    fn test_shuffle_assigns_every_card() {
        let mut board = board(4);
        let mut rng = GameRng::new(42);
        board.shuffle_faces(8, &mut rng);

        for card in board.cards() {
            assert!(card.face().is_some());
        }
    }

    #[test]
    fn test_shuffle_every_face_on_exactly_two_cards() {
        for seed in 0..20 {
            let mut b = board(4);
            let mut rng = GameRng::new(seed);
            b.shuffle_faces(8, &mut rng);

            let counts = face_counts(&b);
            assert_eq!(counts.len(), 8);
            for (&face, &count) in &counts {
                assert_eq!(count, 2, "face {face} appears {count} times");
            }
        }
    }

    #[test]
    fn test_shuffle_with_surplus_faces() {
        for seed in 0..20 {
            let mut b = board(4);
            let mut rng = GameRng::new(seed);
            b.shuffle_faces(30, &mut rng);

            let counts = face_counts(&b);
            // 8 distinct faces drawn from a pool of 30
            assert_eq!(counts.len(), 8);
            for (&face, &count) in &counts {
                assert!(face.raw() < 30);
                assert_eq!(count, 2);
            }
        }
    }

    #[test]
    fn test_shuffle_minimum_pool_uses_every_face() {
        // With exactly as many faces as pairs, distinctness forces every
        // face into play, including the last one the draw itself skips.
        let mut b = board(4);
        let mut rng = GameRng::new(7);
        b.shuffle_faces(8, &mut rng);

        let counts = face_counts(&b);
        for raw in 0..8 {
            assert_eq!(counts.get(&FaceId::new(raw)), Some(&2));
        }
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut b1 = board(6);
        let mut b2 = board(6);
        b1.shuffle_faces(20, &mut GameRng::new(99));
        b2.shuffle_faces(20, &mut GameRng::new(99));

        let faces1: Vec<_> = b1.cards().iter().map(|c| c.face()).collect();
        let faces2: Vec<_> = b2.cards().iter().map(|c| c.face()).collect();
        assert_eq!(faces1, faces2);
    }

    #[test]
    #[should_panic(expected = "face pool must cover every pair")]
    fn test_shuffle_rejects_small_pool() {
        let mut b = board(4);
        b.shuffle_faces(7, &mut GameRng::new(0));
    }
}
