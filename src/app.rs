use crate::ai::InsightClient;
use crate::auth::password;
use crate::auth::token::{Claims, decode_token, encode_token};
use crate::collections::Collection;
use crate::config::Config;
use crate::error::AppError;
use crate::models::{Activity, Contact, Deal, StoredUser, Task, User, fresh_id};
use crate::state::AppState;
use crate::store::{TokenStore, UserStore};
use crate::views::{DashboardStats, View};

/// Top-level controller owning the application state, the durable
/// stores, and the AI gateway. All state transitions run synchronously
/// on the caller's thread; only the AI calls are async.
///
/// Runtime operations never fail: per the demo's semantics, anything
/// that goes wrong degrades to a safe default (seed data, cleared
/// session, boolean false) and is logged.
pub struct App {
    config: Config,
    state: AppState,
    user_store: UserStore,
    token_store: TokenStore,
    insight: InsightClient,
}

impl App {
    /// Load the user store (seeding and persisting it on first run),
    /// seed the demo collections, then try to restore a prior session
    /// from the stored token.
    pub fn bootstrap(config: Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.data_dir)
            .map_err(|e| AppError::Io(config.data_dir.clone(), e))?;

        let user_store = UserStore::new(&config.data_dir);
        let token_store = TokenStore::new(&config.data_dir);
        let insight = InsightClient::new(config.gemini.clone());

        let users = user_store.load();
        let state = AppState::seeded(users);

        let mut app = Self {
            config,
            state,
            user_store,
            token_store,
            insight,
        };
        // Write-through so a seeded store survives the first run.
        app.persist_users();
        app.restore_session();
        Ok(app)
    }

    // ── Session & accounts ──────────────────────────────────────────

    /// Exact, case-sensitive email match plus password verification.
    /// On success mints a signed token with the configured TTL, stores
    /// it, and activates the session.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let Some(user) = self.state.users.iter().find(|u| u.email == email) else {
            return false;
        };

        match password::verify(password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                tracing::warn!("Unreadable password hash for {email}: {e}");
                return false;
            }
        }

        let profile = user.profile();
        let claims = Claims::new(&profile.id, self.config.session_ttl_hours);
        match encode_token(&claims, &self.config.token_secret) {
            Ok(token) => {
                if let Err(e) = self.token_store.store(&token) {
                    tracing::warn!("Failed to store session token: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to mint session token: {e}"),
        }

        self.state.session = Some(profile);
        true
    }

    /// Decode the stored token and re-activate the matching user.
    /// Expired or unparseable tokens, and tokens for users that no
    /// longer exist, are discarded along with their stored copy.
    pub fn restore_session(&mut self) {
        let Some(token) = self.token_store.load() else {
            return;
        };

        let claims = match decode_token(&token, &self.config.token_secret) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Discarding stored session token: {e}");
                self.token_store.clear();
                return;
            }
        };

        match self.state.users.iter().find(|u| u.id == claims.sub) {
            Some(user) => self.state.session = Some(user.profile()),
            None => {
                tracing::debug!("Stored session token references an unknown user");
                self.token_store.clear();
            }
        }
    }

    pub fn logout(&mut self) {
        self.token_store.clear();
        self.state.session = None;
        self.state.view = View::default();
    }

    /// Create a new account unless the email is already taken
    /// (case-sensitive exact match). Returns false on duplicate — the
    /// only explicit error signal in the session module.
    pub fn create_account(&mut self, email: &str, password: &str) -> bool {
        if self.state.users.iter().any(|u| u.email == email) {
            return false;
        }

        let password_hash = match password::hash(password) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!("Failed to hash password for new account: {e}");
                return false;
            }
        };

        let name = email.split('@').next().unwrap_or(email).to_string();
        self.state.users.push(StoredUser {
            id: fresh_id(),
            name,
            email: email.to_string(),
            role: "Sales Rep".to_string(),
            avatar: format!("https://ui-avatars.com/api/?background=random&name={email}"),
            password_hash,
        });
        self.persist_users();
        true
    }

    /// Rename the active user, in the live session and the backing
    /// store. No-op when logged out.
    pub fn update_profile(&mut self, name: &str) {
        let Some(session) = self.state.session.as_mut() else {
            return;
        };
        session.name = name.to_string();
        let id = session.id.clone();

        if let Some(user) = self.state.users.iter_mut().find(|u| u.id == id) {
            user.name = name.to_string();
        }
        self.persist_users();
    }

    /// Re-hash and store a new password for the active user. No-op
    /// when logged out.
    pub fn update_password(&mut self, new_password: &str) {
        let Some(session) = self.state.session.as_ref() else {
            return;
        };
        let id = session.id.clone();

        let password_hash = match password::hash(new_password) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!("Failed to hash updated password: {e}");
                return;
            }
        };

        if let Some(user) = self.state.users.iter_mut().find(|u| u.id == id) {
            user.password_hash = password_hash;
        }
        self.persist_users();
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.session.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.session.as_ref()
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub fn set_view(&mut self, view: View) {
        self.state.view = view;
    }

    pub fn current_view(&self) -> View {
        self.state.view
    }

    // ── CRUD collections ────────────────────────────────────────────

    pub fn add_contact(&mut self, contact: Contact) -> String {
        self.state.contacts.add(contact)
    }

    pub fn update_contact(&mut self, contact: Contact) {
        self.state.contacts.update(contact);
    }

    pub fn delete_contact(&mut self, id: &str) {
        self.state.contacts.delete(id);
    }

    pub fn add_deal(&mut self, deal: Deal) -> String {
        self.state.deals.add(deal)
    }

    pub fn update_deal(&mut self, deal: Deal) {
        self.state.deals.update(deal);
    }

    pub fn delete_deal(&mut self, id: &str) {
        self.state.deals.delete(id);
    }

    pub fn add_task(&mut self, task: Task) -> String {
        self.state.tasks.add(task)
    }

    pub fn update_task(&mut self, task: Task) {
        self.state.tasks.update(task);
    }

    pub fn delete_task(&mut self, id: &str) {
        self.state.tasks.delete(id);
    }

    pub fn contacts(&self) -> &Collection<Contact> {
        &self.state.contacts
    }

    pub fn deals(&self) -> &Collection<Deal> {
        &self.state.deals
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.state.tasks
    }

    pub fn activities(&self) -> &[Activity] {
        &self.state.activities
    }

    // ── Dashboard ───────────────────────────────────────────────────

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.state.deals, &self.state.contacts, &self.state.tasks)
    }

    // ── AI assistant ────────────────────────────────────────────────

    /// Render the deal into the analysis context and ask the gateway
    /// for a probability / risk / next-steps readout.
    pub async fn analyze_deal(&self, deal: &Deal) -> String {
        let details = format!(
            "Deal Title: {}\nValue: ${}\nStage: {}\nContact: {}\nExpected Close: {}\nCurrent Probability: {}%",
            deal.title,
            deal.value,
            deal.stage,
            deal.contact_name,
            deal.expected_close_date,
            deal.probability,
        );
        self.insight.analyze_deal(&details).await
    }

    /// Draft a short persuasive email to the given recipient.
    pub async fn draft_email(&self, recipient_name: &str, context: &str) -> String {
        self.insight.draft_email(recipient_name, context).await
    }

    fn persist_users(&mut self) {
        if let Err(e) = self.user_store.persist(&self.state.users) {
            tracing::warn!("Failed to persist user store: {e}");
        }
    }
}
