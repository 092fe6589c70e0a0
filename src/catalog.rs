//! Shop catalog: purchasable ranks and coin packages.

use serde::{Deserialize, Serialize};

use crate::Price;

/// A purchasable server rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub name: String,
    pub price: Price,
    /// Hex color the rank renders with in chat and on its shop card.
    pub color: String,
}

/// A bundle of in-game coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinPackage {
    pub coins: u32,
    pub price: Price,
}

/// Anything the shop sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogItem {
    Rank(Rank),
    Coins(CoinPackage),
}

impl CatalogItem {
    pub fn price(&self) -> Price {
        match self {
            CatalogItem::Rank(rank) => rank.price,
            CatalogItem::Coins(package) => package.price,
        }
    }

    /// Label recorded on orders and receipts.
    pub fn label(&self) -> String {
        match self {
            CatalogItem::Rank(rank) => rank.name.clone(),
            CatalogItem::Coins(package) => format!("{} coins", package.coins),
        }
    }
}

/// The four ranks sold on the ranks page.
pub fn builtin_ranks() -> Vec<Rank> {
    [
        ("Knight", 3, "#8B4513"),
        ("Titan", 6, "#4169E1"),
        ("Zeus", 9, "#FFD700"),
        ("Devil", 12, "#DC143C"),
    ]
    .into_iter()
    .map(|(name, dollars, color)| Rank {
        name: name.to_string(),
        price: Price::new(dollars),
        color: color.to_string(),
    })
    .collect()
}

/// Coin bundles: 1000 coins per two dollars, up to 6000.
pub fn builtin_coin_packages() -> Vec<CoinPackage> {
    (1u32..=6)
        .map(|step| CoinPackage {
            coins: step * 1000,
            price: Price::new(step * 2),
        })
        .collect()
}
