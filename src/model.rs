//! Core domain types for the storefront.

use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Price;
use crate::catalog::CatalogItem;
use crate::skins;

/// Order identifier.
pub type OrderId = u64;

/// Session identifier.
pub type SessionId = u64;

const ADMIN_RANK: &str = "Admin";
const ADMIN_RANK_COLOR: &str = "#FF0000";
const VIP_RANK: &str = "VIP";
const VIP_RANK_COLOR: &str = "#FFD700";
const MEMBER_RANK: &str = "Member";
const MEMBER_RANK_COLOR: &str = "#90EE90";

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// A registered account. Credentials are stored as a salted hash, never as
/// the password itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub is_admin: bool,
}

impl Account {
    /// Create a regular account, hashing the password with a fresh salt.
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        let mut salt = [0u8; 16];
        OsRng.fill_bytes(&mut salt);
        let salt = hex::encode(salt);
        let password_hash = hash_password(&salt, password);
        Self {
            username: username.into(),
            password_hash,
            salt,
            is_admin: false,
        }
    }

    /// Create an account with the admin flag set.
    pub fn admin(username: impl Into<String>, password: &str) -> Self {
        Self {
            is_admin: true,
            ..Self::new(username, password)
        }
    }

    /// Check a password attempt against the stored hash.
    pub fn verify_password(&self, attempt: &str) -> bool {
        hash_password(&self.salt, attempt) == self.password_hash
    }
}

/// The signed-in player. At most one session exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub username: String,
    pub avatar_url: String,
    /// Coin balance shown in the header. Purchases never deduct it.
    pub coin_balance: u32,
    pub rank_name: String,
    pub rank_color: String,
    pub is_admin: bool,
}

impl Session {
    /// Coins granted when an existing account signs in.
    pub const LOGIN_COINS: u32 = 2500;
    /// Coins granted on fresh registration.
    pub const REGISTRATION_COINS: u32 = 100;

    /// Session opened by a returning player. Always starts on the default
    /// avatar regardless of any earlier skin selection.
    pub fn for_login(id: SessionId, username: String, admin: bool) -> Self {
        let (rank_name, rank_color) = if admin {
            (ADMIN_RANK, ADMIN_RANK_COLOR)
        } else {
            (VIP_RANK, VIP_RANK_COLOR)
        };
        Self {
            id,
            username,
            avatar_url: skins::DEFAULT_AVATAR.to_string(),
            coin_balance: Self::LOGIN_COINS,
            rank_name: rank_name.to_string(),
            rank_color: rank_color.to_string(),
            is_admin: admin,
        }
    }

    /// Session opened by a fresh registration, wearing the chosen skin.
    pub fn for_registration(
        id: SessionId,
        username: String,
        avatar_url: String,
        admin: bool,
    ) -> Self {
        let (rank_name, rank_color) = if admin {
            (ADMIN_RANK, ADMIN_RANK_COLOR)
        } else {
            (MEMBER_RANK, MEMBER_RANK_COLOR)
        };
        Self {
            id,
            username,
            avatar_url,
            coin_balance: Self::REGISTRATION_COINS,
            rank_name: rank_name.to_string(),
            rank_color: rank_color.to_string(),
            is_admin: admin,
        }
    }
}

/// Fulfillment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Mock checkout settles instantly, so every new order lands here.
    #[default]
    Completed,
    Pending,
    Failed,
}

/// A settled purchase as shown in the admin panel and the recent-orders
/// sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Charged amount, after any discount.
    pub amount: Price,
    pub item_label: String,
    /// Human date string for receipts (M/D/YYYY).
    pub display_date: String,
    pub status: OrderStatus,
    /// `"Guest"` when nobody was signed in at checkout.
    pub buyer_name: String,
    pub buyer_avatar_url: String,
    /// Creation instant the recency window is evaluated against.
    pub created_at: DateTime<Utc>,
    /// Listed price, recorded only when a discount was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    #[serde(default)]
    pub discount_applied: bool,
}

/// The single promotion slot.
///
/// Armed by a valid code, consumed by the next purchase, cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountState {
    pub code: String,
    pub applied: bool,
}

impl DiscountState {
    pub fn is_armed(&self) -> bool {
        self.applied
    }

    pub fn arm(&mut self, code: String) {
        self.code = code;
        self.applied = true;
    }

    pub fn clear(&mut self) {
        self.code.clear();
        self.applied = false;
    }
}

/// Pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Landing page, also the fallback for unauthorized panel requests.
    #[default]
    Home,
    Coins,
    Ranks,
    AdminTickets,
}

/// A command representing the possible inputs of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Sign in to an existing account. `admin_secret` carries the admin
    /// toggle together with the secret the player typed.
    Login {
        username: String,
        password: String,
        admin_secret: Option<String>,
    },
    /// Create an account and sign in as it, wearing the chosen skin.
    Register {
        username: String,
        password: String,
        admin_secret: Option<String>,
        avatar_url: String,
    },
    /// Mock checkout for a catalog item; always settles.
    Purchase { item: CatalogItem },
    /// Remove an order from the book. Admin only.
    DeleteOrder { order: OrderId },
    /// Arm the 50%-off slot with a promo code.
    ApplyDiscountCode { code: String },
    /// Drop the session, the armed discount, and return to home.
    Logout,
    /// Pick a preset skin by URL.
    SelectSkin { url: String },
    /// Look up a player's skin by name and select it.
    SearchSkin { username: String },
    /// Navigate to a page.
    SelectPage { page: Page },
    /// Put the game-server address on the clipboard.
    CopyServerAddress,
    /// Put the community invite link on the clipboard.
    CopyInviteLink,
    /// Open the community invite in the browser.
    OpenCommunityInvite,
}

impl Command {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Register { .. } => "register",
            Command::Purchase { .. } => "purchase",
            Command::DeleteOrder { .. } => "delete_order",
            Command::ApplyDiscountCode { .. } => "apply_discount_code",
            Command::Logout => "logout",
            Command::SelectSkin { .. } => "select_skin",
            Command::SearchSkin { .. } => "search_skin",
            Command::SelectPage { .. } => "select_page",
            Command::CopyServerAddress => "copy_server_address",
            Command::CopyInviteLink => "copy_invite_link",
            Command::OpenCommunityInvite => "open_community_invite",
        }
    }
}
