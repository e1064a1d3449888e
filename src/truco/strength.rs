use crate::core::{Card, Deck, Hand, RSTrucoError};

/// Play two hands card by card, in the order they are held.
///
/// Returns `1` if `mine` wins, `-1` if `theirs` wins, `0` for a tie.
///
/// - A tie in the first round goes to the winner of the second round,
///   or of the third if the second ties too.
/// - A later tie goes to whoever won the first round.
/// - Winning the first two rounds wins outright.
/// - Otherwise the third round decides.
///
/// # Examples
///
/// ```
/// use rs_truco::core::Hand;
/// use rs_truco::truco::truco_beats;
///
/// let mine = Hand::new_from_str("1e 4c 4b").unwrap();
/// let theirs = Hand::new_from_str("3e 5c 5b").unwrap();
/// assert_eq!(-1, truco_beats(&mine, &theirs).unwrap());
/// ```
pub fn truco_beats(mine: &Hand, theirs: &Hand) -> Result<i8, RSTrucoError> {
    Ok(beats_by_rank(ranks(mine.cards())?, ranks(theirs.cards())?))
}

/// Brute force strength of a hand against every hand the rest of the
/// deck could hold.
///
/// Every order of `hand` is played against every ordered three card
/// hand dealt from `deck` without the cards of `hand`. The summed
/// outcome is normalised to `[0, 1]`: 1 always wins, 0 always loses.
/// A deck too small to deal an opponent gives 0.5.
pub fn hand_strength(hand: &Hand, deck: &Deck) -> Result<f64, RSTrucoError> {
    ranks(hand.cards())?;
    let rest: Vec<u8> = deck
        .excluding(hand.cards())
        .iter()
        .map(Card::truco_rank)
        .collect();

    let mut score: i64 = 0;
    let mut plays: i64 = 0;
    for perm in hand.permutations() {
        let mine = ranks(&perm)?;
        for (a, &ra) in rest.iter().enumerate() {
            for (b, &rb) in rest.iter().enumerate() {
                if b == a {
                    continue;
                }
                for (c, &rc) in rest.iter().enumerate() {
                    if c == a || c == b {
                        continue;
                    }
                    score += i64::from(beats_by_rank(mine, [ra, rb, rc]));
                    plays += 1;
                }
            }
        }
    }

    if plays == 0 {
        return Ok(0.5);
    }
    Ok((score as f64 / plays as f64 + 1.0) / 2.0)
}

fn ranks(cards: &[Card]) -> Result<[u8; 3], RSTrucoError> {
    match cards {
        [a, b, c] => Ok([a.truco_rank(), b.truco_rank(), c.truco_rank()]),
        _ => Err(RSTrucoError::WrongHandSize(cards.len())),
    }
}

fn round(m: u8, o: u8) -> i8 {
    match m.cmp(&o) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

fn beats_by_rank(mine: [u8; 3], theirs: [u8; 3]) -> i8 {
    let s0 = round(mine[0], theirs[0]);
    let s1 = round(mine[1], theirs[1]);
    let s2 = round(mine[2], theirs[2]);

    if s0 == 0 {
        if s1 == 0 { s2 } else { s1 }
    } else if s1 == 0 || s0 == s1 || s2 == 0 {
        s0
    } else {
        s2
    }
}
