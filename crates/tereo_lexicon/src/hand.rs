//! Dealing a hand of cards for a challenge.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use tereo_foundation::{Card, Challenge};

use crate::catalog::Catalog;

/// Deals the challenge's required cards plus up to `decoys` variation cards.
///
/// Decoys share a word type with some required card but are not required
/// themselves. Unknown required ids become placeholder cards. The hand is
/// shuffled with `rng`.
pub fn deal<R: Rng + ?Sized>(
    catalog: &Catalog,
    challenge: &Challenge,
    decoys: usize,
    rng: &mut R,
) -> Vec<Card> {
    let mut hand: Vec<Card> = challenge
        .required_cards
        .iter()
        .map(|id| catalog.card_or_placeholder(id))
        .collect();

    let candidates: Vec<_> = catalog
        .words()
        .iter()
        .filter(|w| !challenge.required_cards.contains(&w.id))
        .filter(|w| hand.iter().any(|c| !c.is_placeholder() && c.word_type == w.word_type))
        .collect();

    let extra: Vec<Card> = candidates
        .choose_multiple(rng, decoys)
        .map(|w| Card::from(*w).into_variation())
        .collect();
    hand.extend(extra);
    hand.shuffle(rng);
    hand
}

/// [`deal`] with a fresh `ChaCha8Rng` seeded from `seed`.
#[must_use]
pub fn deal_seeded(
    catalog: &Catalog,
    challenge: &Challenge,
    decoys: usize,
    seed: u64,
) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal(catalog, challenge, decoys, &mut rng)
}
