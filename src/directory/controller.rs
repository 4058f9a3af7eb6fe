use crate::models::user::User;
use crate::services::ApiError;

/// The only message the view ever shows for a failed load.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load users. Please try again later.";

/// Lifecycle of the user list. Selection and deletions are sub-state of
/// `Loaded`, not transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Errored(String),
    Loaded,
}

/// Permission to complete the one fetch in flight. Not `Clone`, so a load
/// can be finished at most once.
#[derive(Debug)]
pub struct LoadTicket(());

/// Per-session state: lifecycle, the displayed list and the modal selection.
#[derive(Debug)]
pub struct DirectoryController {
    state: LoadState,
    users: Vec<User>,
    selected_id: Option<i64>,
    modal_open: bool,
    in_flight: bool,
}

impl Default for DirectoryController {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryController {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            users: Vec::new(),
            selected_id: None,
            modal_open: false,
            in_flight: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// `Loading` with no fetch running: the initial state before mount.
    pub fn needs_load(&self) -> bool {
        self.is_loading() && !self.in_flight
    }

    /// Enter `Loading` and hand out a ticket for the fetch.
    /// Returns `None` while another fetch is still in flight.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.in_flight {
            log::debug!("Load already in flight, not starting another");
            return None;
        }
        self.in_flight = true;
        self.state = LoadState::Loading;
        Some(LoadTicket(()))
    }

    /// Re-enter `Loading` from `Errored`. Any other state ignores the call.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        match self.state {
            LoadState::Errored(_) => self.begin_load(),
            _ => {
                log::warn!("Retry ignored in state {:?}", self.state);
                None
            }
        }
    }

    /// Apply the outcome of the fetch `ticket` was issued for.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<User>, ApiError>) {
        let LoadTicket(()) = ticket;
        self.in_flight = false;
        match result {
            Ok(users) => {
                log::info!("Loaded {} users", users.len());
                self.users = users;
                self.selected_id = None;
                self.modal_open = false;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("Error loading users: {e}");
                self.state = LoadState::Errored(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Open the modal on a user from the current list.
    pub fn select_user(&mut self, id: i64) -> bool {
        if self.state != LoadState::Loaded {
            return false;
        }
        if !self.users.iter().any(|u| u.id == id) {
            log::debug!("Select ignored, user {id} not in list");
            return false;
        }
        self.selected_id = Some(id);
        self.modal_open = true;
        true
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected_id = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The user shown in the modal, resolved against the current list.
    pub fn selected_user(&self) -> Option<&User> {
        if !self.modal_open {
            return None;
        }
        let id = self.selected_id?;
        self.users.iter().find(|u| u.id == id)
    }

    /// Session-local removal. An absent id is a no-op. Removing the user
    /// the modal is showing also closes the modal.
    pub fn delete_user(&mut self, id: i64) -> Option<User> {
        let pos = self.users.iter().position(|u| u.id == id)?;
        let removed = self.users.remove(pos);
        if self.selected_id == Some(id) {
            self.close_modal();
        }
        log::info!("Removed user {} ({}) from session list", removed.id, removed.name);
        Some(removed)
    }

    pub fn count_label(&self) -> String {
        count_label(self.users.len())
    }
}

/// "1 user found", "0 users found", "10 users found".
pub fn count_label(n: usize) -> String {
    format!("{n} {} found", if n == 1 { "user" } else { "users" })
}
