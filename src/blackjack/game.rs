use super::hand::Hand;
use super::state::State;
use crate::DEALER_THRESHOLD;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Deck;
use crate::learning::Simulator;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Single-player Blackjack against a fixed-rule dealer.
///
/// Every episode starts from a fresh 52-card deck. The player sees their
/// own hard total, whether they hold a usable ace, and the dealer's
/// upcard. Standing hands the table to the dealer, who draws to 17.
#[derive(Debug, Clone)]
pub struct Blackjack {
    rng: SmallRng,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    upcard: Card,
    stood: bool,
}

impl Blackjack {
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }

    pub fn player(&self) -> Hand {
        self.player
    }
    pub fn dealer(&self) -> Hand {
        self.dealer
    }

    fn deal(&mut self) {
        let ref mut rng = self.rng;
        let mut deck = Deck::new();
        let player = Hand::from((deck.draw(rng), deck.draw(rng)));
        let upcard = deck.draw(rng);
        let dealer = Hand::from((upcard, deck.draw(rng)));
        self.deck = deck;
        self.player = player;
        self.dealer = dealer;
        self.upcard = upcard;
        self.stood = false;
    }
    fn play_dealer(&mut self) {
        while self.dealer.best() < DEALER_THRESHOLD {
            self.dealer = self.dealer.add(self.deck.draw(&mut self.rng));
        }
        log::trace!(
            "dealer finishes on {} against player {}",
            self.dealer.best(),
            self.player.best()
        );
    }
}

impl Default for Blackjack {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SmallRng> for Blackjack {
    fn from(rng: SmallRng) -> Self {
        let mut game = Self {
            rng,
            deck: Deck::new(),
            player: Hand::default(),
            dealer: Hand::default(),
            upcard: Card::default(),
            stood: false,
        };
        game.deal();
        game
    }
}

impl Simulator for Blackjack {
    fn reset(&mut self) {
        self.deal();
    }
    fn state(&self) -> State {
        State::new(
            self.player.hard(),
            self.player.usable(),
            self.upcard.pips(),
            self.over(),
        )
        .expect("dealt hands stay inside the state space")
    }
    fn hit(&mut self) {
        if !self.over() {
            self.player = self.player.add(self.deck.draw(&mut self.rng));
        }
    }
    fn stand(&mut self) {
        if !self.over() {
            self.stood = true;
            self.play_dealer();
        }
    }
    fn over(&self) -> bool {
        self.stood || self.player.bust()
    }
    /// +1 win, 0 push, -1 loss. Zero while the hand is still live.
    fn reward(&self) -> Utility {
        use std::cmp::Ordering;
        match (self.over(), self.player.bust(), self.dealer.bust()) {
            (false, _, _) => 0.,
            (true, true, _) => -1.,
            (true, false, true) => 1.,
            (true, false, false) => match self.player.best().cmp(&self.dealer.best()) {
                Ordering::Greater => 1.,
                Ordering::Equal => 0.,
                Ordering::Less => -1.,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deal_is_live() {
        let ref mut game = Blackjack::seeded(0);
        for _ in 0..256 {
            game.reset();
            let state = game.state();
            assert!(!game.over());
            assert!(!state.over());
            assert_eq!(game.reward(), 0.);
            assert_eq!(game.deck.size(), 48);
        }
    }

    #[test]
    fn standing_finishes_the_hand() {
        let ref mut game = Blackjack::seeded(1);
        game.stand();
        assert!(game.over());
        assert!(game.state().over());
        assert!(game.dealer().best() >= DEALER_THRESHOLD || game.dealer().bust());
        assert!([-1., 0., 1.].contains(&game.reward()));
    }

    #[test]
    fn hitting_eventually_busts() {
        let ref mut game = Blackjack::seeded(2);
        while !game.over() {
            game.hit();
        }
        assert!(game.player().bust());
        assert_eq!(game.reward(), -1.);
        assert!(game.state().total() > 21);
    }

    #[test]
    fn finished_hands_ignore_actions() {
        let ref mut game = Blackjack::seeded(3);
        game.stand();
        let state = game.state();
        let dealer = game.dealer();
        game.hit();
        game.stand();
        assert_eq!(game.state(), state);
        assert_eq!(game.dealer(), dealer);
    }

    #[test]
    fn seeded_games_repeat() {
        let ref mut a = Blackjack::seeded(11);
        let ref mut b = Blackjack::seeded(11);
        for _ in 0..64 {
            a.reset();
            b.reset();
            assert_eq!(a.state(), b.state());
        }
    }
}
