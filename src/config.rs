//! Site configuration and seed data.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CoinPackage, Rank};
use crate::model::Account;

/// Everything a deployment can tune. Defaults reproduce the demo site's
/// seed data so a bare [`Store::new`](crate::Store::new) behaves like the
/// live page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Pre-registered accounts the directory starts with.
    pub accounts: Vec<Account>,
    pub ranks: Vec<Rank>,
    pub coin_packages: Vec<CoinPackage>,
    /// Promo code that arms the 50%-off slot, matched case-insensitively.
    pub discount_code: String,
    /// Secret required to open an admin session. The default is a
    /// development placeholder; deployments override it.
    pub admin_secret: String,
    /// Game-server address players connect to.
    pub server_address: String,
    /// Community invite link.
    pub community_invite: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            accounts: vec![
                Account::new("steve123", "password123"),
                Account::new("alex456", "mypass456"),
                Account::new("notch", "minecraft"),
                Account::admin("admin", "admin123"),
            ],
            ranks: catalog::builtin_ranks(),
            coin_packages: catalog::builtin_coin_packages(),
            discount_code: "nightermc".to_string(),
            admin_secret: "admin123".to_string(),
            server_address: "cookiemc.vaulthosting.in".to_string(),
            community_invite: "https://discord.gg/r9km3pQV".to_string(),
        }
    }
}
