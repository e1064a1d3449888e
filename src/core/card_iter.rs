use super::{Card, Deck, Hand};

/// Iterate every unordered set of `num_cards` cards drawn from
/// `possible_cards`. Sets come out in lexicographic order of
/// position in `possible_cards`.
#[derive(Debug)]
pub struct CardIter {
    // All the possible cards that can be dealt
    possible_cards: Vec<Card>,

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    done: bool,
}

impl CardIter {
    pub fn new(possible_cards: Vec<Card>, num_cards: usize) -> CardIter {
        let done = num_cards == 0 || num_cards > possible_cards.len();
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            done,
        }
    }

    fn current(&self) -> Vec<Card> {
        self.idx.iter().map(|i| self.possible_cards[*i]).collect()
    }

    // Move the offsets to the next set. Returns false once exhausted.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.num_cards;
        // Rightmost offset that can still move forward.
        let Some(level) = (0..k).rev().find(|&i| self.idx[i] != i + n - k) else {
            return false;
        };
        self.idx[level] += 1;
        for j in level + 1..k {
            self.idx[j] = self.idx[j - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        let result = self.current();
        self.done = !self.advance();
        Some(result)
    }
}

/// Iterate every ordering of `num_cards` cards drawn from
/// `possible_cards`. With `num_cards == possible_cards.len()` this is
/// every way to play a hand.
#[derive(Debug)]
pub struct PermutationIter {
    possible_cards: Vec<Card>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    num_cards: usize,
    first: bool,
    done: bool,
}

impl PermutationIter {
    pub fn new(possible_cards: Vec<Card>, num_cards: usize) -> PermutationIter {
        let n = possible_cards.len();
        let done = num_cards > n;
        PermutationIter {
            indices: (0..n).collect(),
            cycles: (0..num_cards).map(|i| n - i).collect(),
            possible_cards,
            num_cards,
            first: true,
            done,
        }
    }

    fn current(&self) -> Vec<Card> {
        self.indices[..self.num_cards]
            .iter()
            .map(|i| self.possible_cards[*i])
            .collect()
    }
}

impl Iterator for PermutationIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.current());
        }

        let n = self.indices.len();
        for i in (0..self.num_cards).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // Rotate the tail left by one and reset this cycle.
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.current());
            }
        }
        self.done = true;
        None
    }
}

impl Deck {
    /// Every set of `num_cards` cards that can be dealt from the deck.
    pub fn hands(&self, num_cards: usize) -> CardIter {
        CardIter::new(self.cards().to_vec(), num_cards)
    }
}

impl Hand {
    /// Every order the cards of this hand can be played in.
    pub fn permutations(&self) -> PermutationIter {
        PermutationIter::new(self.cards().to_vec(), self.len())
    }
}
