pub mod pokeapi;

use crate::error::Result;
use crate::game::Card;

pub use pokeapi::PokeApiProvider;

/// Undecoded card face as downloaded.
pub type RawCard = Card<Vec<u8>>;

/// Source of card faces. Implementations must return exactly `count` cards
/// with distinct labels, or fail.
pub trait CardImageProvider {
    fn fetch_cards(&self, count: usize) -> Result<Vec<RawCard>>;
}

/// Converts every raw card with `decode`, stopping at the first failure.
pub fn decode_cards<I, F>(raw: Vec<RawCard>, mut decode: F) -> Result<Vec<Card<I>>>
where
    F: FnMut(&str, &[u8]) -> Result<I>,
{
    raw.into_iter()
        .map(|card| {
            let image = decode(&card.label, &card.image)?;
            Ok(Card::new(card.label, image))
        })
        .collect()
}
