use rand::Rng;
use rand::seq::index;
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{CardImageProvider, RawCard};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::game::Card;
use crate::game::grid::ensure_unique_labels;

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

/// Fetches cards from PokéAPI: one request for the entry, one for its sprite.
pub struct PokeApiProvider {
    client: Client,
    base_url: String,
    catalog_size: usize,
}

impl PokeApiProvider {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base.clone(),
            catalog_size: config.catalog_size,
        }
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    fn pokemon_url(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    fn fetch_entry(&self, id: u32) -> Result<RawCard> {
        let url = self.pokemon_url(id);
        tracing::debug!(%url, "fetching catalog entry");
        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        let (label, sprite_url) = parse_entry(&body)?;

        let bytes = self
            .client
            .get(&sprite_url)
            .send()?
            .error_for_status()?
            .bytes()?;
        tracing::debug!(%label, size = bytes.len(), "fetched sprite");
        Ok(Card::new(label, bytes.to_vec()))
    }
}

impl CardImageProvider for PokeApiProvider {
    fn fetch_cards(&self, count: usize) -> Result<Vec<RawCard>> {
        let ids = sample_catalog_ids(&mut rand::rng(), self.catalog_size, count)?;
        let cards = ids
            .into_iter()
            .map(|id| self.fetch_entry(id))
            .collect::<Result<Vec<_>>>()?;
        ensure_unique_labels(&cards)?;
        Ok(cards)
    }
}

/// Picks `count` distinct ids in `1..=catalog_size`.
pub fn sample_catalog_ids<R: Rng + ?Sized>(
    rng: &mut R,
    catalog_size: usize,
    count: usize,
) -> Result<Vec<u32>> {
    if count > catalog_size {
        return Err(Error::CatalogTooSmall {
            requested: count,
            available: catalog_size,
        });
    }
    Ok(index::sample(rng, catalog_size, count)
        .into_iter()
        .map(|idx| idx as u32 + 1)
        .collect())
}

/// Pulls the card label and sprite URL out of a `/pokemon/{id}` body.
fn parse_entry(body: &str) -> Result<(String, String)> {
    let entry: PokemonResponse = serde_json::from_str(body)?;
    match entry.sprites.front_default {
        Some(url) if !url.is_empty() => Ok((entry.name, url)),
        _ => Err(Error::MissingSprite { label: entry.name }),
    }
}
