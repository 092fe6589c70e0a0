//! Minecraft skin lookup and the preset picker.

use serde::{Deserialize, Serialize};

/// Head-render service the site pulls avatars from.
const AVATAR_SERVICE: &str = "https://mc-heads.net/avatar";

/// Avatar shown before anyone picks a skin, and for guest buyers.
pub const DEFAULT_AVATAR: &str = "https://mc-heads.net/avatar/steve/64";

/// Avatar URL for a player name, as a 64px head render.
///
/// The service falls back to a placeholder render for unknown names, so
/// lookup never fails.
pub fn avatar_url(username: &str) -> String {
    format!("{AVATAR_SERVICE}/{username}/64")
}

/// A ready-made skin offered in the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSkin {
    pub name: String,
    pub url: String,
}

/// Well-known skins shown as one-click choices during registration.
pub fn preset_skins() -> Vec<PresetSkin> {
    [
        ("Steve", "steve"),
        ("Alex", "alex"),
        ("Herobrine", "herobrine"),
        ("Notch", "notch"),
        ("Jeb", "jeb_"),
        ("Dinnerbone", "dinnerbone"),
    ]
    .into_iter()
    .map(|(name, account)| PresetSkin {
        name: name.to_string(),
        url: avatar_url(account),
    })
    .collect()
}
