//! Storefront state machine.
//!
//! The store owns every piece of page state: the account directory, the
//! signed-in session, the order book, the promotion slot, and the current
//! page and skin selection. Commands go through [`Store::apply`], which
//! mutates state and returns the side effects for the shell to interpret.
//! Also supports an async stream of commands.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info};

use crate::catalog::CatalogItem;
use crate::config::StoreConfig;
use crate::effect::{Effect, Notice};
use crate::model::{
    Account, Command, DiscountState, Order, OrderId, OrderStatus, Page, Session, SessionId,
};
use crate::skins;

mod error;
pub use error::{AuthError, CommandError};

mod view;
pub use view::{PriceTag, RECENT_ORDER_LIMIT, RECENT_WINDOW_DAYS};

/// The storefront state machine.
///
/// Holds the directory, session, order book, and page state behind a single
/// command entry point.
pub struct Store {
    config: StoreConfig,
    /// Registered accounts in insertion order, seeded from the config;
    /// lookup is first match by name. Registrations append here, never to
    /// the config.
    directory: Vec<Account>,
    session: Option<Session>,
    /// Order book, newest first.
    orders: VecDeque<Order>,
    discount: DiscountState,
    /// Page the player asked for. What actually renders is decided by
    /// [`Store::active_page`].
    page: Page,
    selected_skin: String,
    next_order_id: OrderId,
    next_session_id: SessionId,
}

/// Public API
impl Store {
    /// Store seeded with the default site data.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Store seeded from an explicit configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let directory = config.accounts.clone();
        Self {
            config,
            directory,
            session: None,
            orders: VecDeque::new(),
            discount: DiscountState::default(),
            page: Page::default(),
            selected_skin: skins::DEFAULT_AVATAR.to_string(),
            next_order_id: 1,
            next_session_id: 1,
        }
    }

    /// Drive the store from a command stream, forwarding effects to the
    /// shell.
    ///
    /// Rejected commands become error notices; nothing stops the loop short
    /// of the stream ending or the shell dropping its receiver.
    pub async fn run(
        &mut self,
        mut commands: impl Stream<Item = Command> + Unpin,
        effects: mpsc::Sender<Effect>,
    ) {
        while let Some(command) = commands.next().await {
            let emitted = match self.apply(command) {
                Ok(emitted) => emitted,
                Err(rejection) => vec![Effect::Notify(Notice::error(rejection.to_string()))],
            };
            for effect in emitted {
                if effects.send(effect).await.is_err() {
                    // receiver dropped, nobody is rendering anymore
                    return;
                }
            }
        }
    }

    /// Apply a single command on top of the current state, stamping new
    /// orders with the ambient clock.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Effect>, CommandError> {
        self.apply_at(command, Utc::now())
    }

    /// Apply a single command with an explicit clock.
    pub fn apply_at(
        &mut self,
        command: Command,
        now: DateTime<Utc>,
    ) -> Result<Vec<Effect>, CommandError> {
        let kind = command.kind();
        let result = match command {
            Command::Login {
                username,
                password,
                admin_secret,
            } => self
                .login(&username, &password, admin_secret.as_deref())
                .map_err(CommandError::from),
            Command::Register {
                username,
                password,
                admin_secret,
                avatar_url,
            } => self
                .register(&username, &password, admin_secret.as_deref(), avatar_url)
                .map_err(CommandError::from),
            Command::Purchase { item } => Ok(self.purchase(item, now)),
            Command::DeleteOrder { order } => self.delete_order(order),
            Command::ApplyDiscountCode { code } => self.apply_discount_code(&code),
            Command::Logout => Ok(self.logout()),
            Command::SelectSkin { url } => Ok(self.select_skin(url)),
            Command::SearchSkin { username } => Ok(self.search_skin(&username)),
            Command::SelectPage { page } => Ok(self.select_page(page)),
            Command::CopyServerAddress => Ok(self.copy_server_address()),
            Command::CopyInviteLink => Ok(self.copy_invite_link()),
            Command::OpenCommunityInvite => Ok(self.open_community_invite()),
        };
        Self::log_outcome(kind, &result);
        result
    }
}

/// Private API
impl Store {
    /// Small helper to log `apply` outcomes
    fn log_outcome(kind: &str, result: &Result<Vec<Effect>, CommandError>) {
        match result {
            Ok(effects) => {
                info!(command = kind, effects = effects.len(), "command applied");
            }
            Err(reason) => {
                info!(command = kind, reason = %reason, "command rejected");
            }
        }
    }

    fn fresh_session_id(&mut self) -> SessionId {
        let id = self.next_session_id;
        self.next_session_id += 1;
        id
    }

    fn fresh_order_id(&mut self) -> OrderId {
        let id = self.next_order_id;
        self.next_order_id += 1;
        id
    }

    /// Sign in to an existing account:
    /// - Look the username up in the directory (first match wins)
    /// - Check the password against the stored hash
    /// - For admin logins, check the secret and then the account flag
    /// - Replace the session; the previous one, if any, is dropped
    /// - Rank and admin status come from the account flag, with or without
    ///   the admin toggle
    fn login(
        &mut self,
        username: &str,
        password: &str,
        admin_secret: Option<&str>,
    ) -> Result<Vec<Effect>, AuthError> {
        let account = self
            .directory
            .iter()
            .find(|account| account.username == username)
            .ok_or(AuthError::AccountNotFound)?;

        if !account.verify_password(password) {
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(secret) = admin_secret {
            if secret != self.config.admin_secret {
                return Err(AuthError::InvalidAdminPassword);
            }
            if !account.is_admin {
                return Err(AuthError::NotAnAdminAccount);
            }
        }

        let username = account.username.clone();
        let admin = account.is_admin;

        let id = self.fresh_session_id();
        self.session = Some(Session::for_login(id, username.clone(), admin));

        let suffix = if admin { " (Admin)" } else { "" };
        Ok(vec![Effect::Notify(Notice::success(format!(
            "Welcome back, {username}!{suffix}"
        )))])
    }

    /// Create an account and sign in as it:
    /// - Empty fields never reach this far through the page form, so a
    ///   direct call with them is ignored the same way
    /// - For admin registrations, check the secret before touching anything
    /// - Append the account to the directory; duplicate names are allowed,
    ///   and first-match lookup means the older entry keeps shadowing this
    ///   one
    fn register(
        &mut self,
        username: &str,
        password: &str,
        admin_secret: Option<&str>,
        avatar_url: String,
    ) -> Result<Vec<Effect>, AuthError> {
        if username.is_empty() || password.is_empty() {
            debug!("registration with empty credentials ignored");
            return Ok(Vec::new());
        }

        let admin = admin_secret.is_some();
        if let Some(secret) = admin_secret {
            if secret != self.config.admin_secret {
                return Err(AuthError::InvalidAdminPassword);
            }
        }

        let account = if admin {
            Account::admin(username, password)
        } else {
            Account::new(username, password)
        };
        self.directory.push(account);

        let id = self.fresh_session_id();
        self.session = Some(Session::for_registration(
            id,
            username.to_string(),
            avatar_url,
            admin,
        ));

        let suffix = if admin { " (Admin)" } else { "" };
        Ok(vec![Effect::Notify(Notice::success(format!(
            "Account created! Welcome, {username}!{suffix}"
        )))])
    }

    /// Mock checkout:
    /// - Always settles; there is no balance check and no payment gateway
    /// - An armed discount halves the charged amount and is consumed
    /// - The order is prepended so the book stays newest first
    fn purchase(&mut self, item: CatalogItem, now: DateTime<Utc>) -> Vec<Effect> {
        let price = item.price();
        let discounted = self.discount.is_armed();
        let amount = if discounted { price.half_off() } else { price };

        let (buyer_name, buyer_avatar_url) = match &self.session {
            Some(session) => (session.username.clone(), session.avatar_url.clone()),
            None => ("Guest".to_string(), skins::DEFAULT_AVATAR.to_string()),
        };

        let order = Order {
            id: self.fresh_order_id(),
            amount,
            item_label: item.label(),
            display_date: now.format("%-m/%-d/%Y").to_string(),
            status: OrderStatus::Completed,
            buyer_name,
            buyer_avatar_url,
            created_at: now,
            original_price: discounted.then_some(price),
            discount_applied: discounted,
        };
        self.orders.push_front(order);

        if discounted {
            self.discount.clear();
        }

        vec![Effect::Notify(
            Notice::success(
                "Purchase successful! Go to Discord and make a ticket to get your rank/coins!",
            )
            .lasting(5000),
        )]
    }

    /// Remove an order from the book. Admin only; unknown ids are a silent
    /// no-op, but the panel reports success either way.
    fn delete_order(&mut self, order: OrderId) -> Result<Vec<Effect>, CommandError> {
        let admin = self
            .session
            .as_ref()
            .is_some_and(|session| session.is_admin);
        if !admin {
            return Err(CommandError::Unauthorized);
        }

        let before = self.orders.len();
        self.orders.retain(|candidate| candidate.id != order);
        if self.orders.len() == before {
            debug!(order, "delete for unknown order id");
        }

        Ok(vec![Effect::Notify(Notice::success(
            "Payment deleted successfully!",
        ))])
    }

    /// Arm the promotion slot. Codes match case-insensitively; re-arming
    /// while already armed is an idempotent no-op.
    fn apply_discount_code(&mut self, code: &str) -> Result<Vec<Effect>, CommandError> {
        if !code.eq_ignore_ascii_case(&self.config.discount_code) {
            return Err(CommandError::InvalidDiscountCode);
        }

        self.discount.arm(code.to_string());
        Ok(vec![Effect::Notify(
            Notice::success("Discount code applied! 50% off your next purchase!").lasting(3000),
        )])
    }

    fn logout(&mut self) -> Vec<Effect> {
        self.session = None;
        self.discount.clear();
        self.page = Page::Home;
        vec![Effect::Notify(Notice::success("Logged out successfully!"))]
    }

    fn select_skin(&mut self, url: String) -> Vec<Effect> {
        self.selected_skin = url;
        Vec::new()
    }

    /// Look up a skin by player name. The head service renders a
    /// placeholder for unknown names, so this always succeeds.
    fn search_skin(&mut self, username: &str) -> Vec<Effect> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            debug!("blank skin search ignored");
            return Vec::new();
        }

        // only the lookup url is trimmed; the notice echoes the raw input
        self.selected_skin = skins::avatar_url(trimmed);
        vec![Effect::Notify(Notice::success(format!(
            "Skin loaded for {username}!"
        )))]
    }

    fn select_page(&mut self, page: Page) -> Vec<Effect> {
        self.page = page;
        Vec::new()
    }

    fn copy_server_address(&self) -> Vec<Effect> {
        vec![
            Effect::CopyToClipboard {
                text: self.config.server_address.clone(),
            },
            Effect::Notify(Notice::success("Server IP copied to clipboard!")),
        ]
    }

    fn copy_invite_link(&self) -> Vec<Effect> {
        vec![
            Effect::CopyToClipboard {
                text: self.config.community_invite.clone(),
            },
            Effect::Notify(Notice::success("Discord invite copied to clipboard!")),
        ]
    }

    fn open_community_invite(&self) -> Vec<Effect> {
        vec![Effect::OpenUrl {
            url: self.config.community_invite.clone(),
        }]
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
