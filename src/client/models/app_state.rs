use iced::Command;

use crate::client::config::ClientConfig;
use crate::client::models::endpoint::EndpointDescriptor;
use crate::client::models::messages::Message;
use crate::client::services::fetch_service;
use crate::client::utils::cache_store::CacheStore;

pub const THEME_KEY: &str = "theme";
pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

/// What a result slot currently shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotDisplay {
    #[default]
    Empty,
    /// Last run's value, rendered with a `[Cached]` prefix until a fresh
    /// result replaces it.
    Cached(String),
    Fetching,
    Fresh(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct SlotState {
    pub endpoint: EndpointDescriptor,
    pub display: SlotDisplay,
}

impl SlotState {
    /// The text rendered into this slot's display target.
    pub fn display_line(&self) -> String {
        match &self.display {
            SlotDisplay::Empty => format!("No {} yet.", self.endpoint.label.to_lowercase()),
            SlotDisplay::Cached(value) => {
                format!("[Cached] {}: {}", self.endpoint.label, value)
            }
            SlotDisplay::Fetching => "Fetching...".to_string(),
            SlotDisplay::Fresh(value) => value.clone(),
            SlotDisplay::Error(text) => text.clone(),
        }
    }
}

/// The presenter: owns the result slots, the joint-fetch counter, the theme
/// flag and the cache store. Created once at startup, torn down never.
pub struct WhimAppState {
    pub slots: Vec<SlotState>,
    /// Requests still in flight; the trigger control is enabled iff zero.
    pub pending_fetches: usize,
    pub dark_mode: bool,
    pub store: CacheStore,
}

impl WhimAppState {
    /// Apply the saved theme preference and surface any cached values before
    /// the first fetch resolves.
    pub fn load_initial(config: &ClientConfig) -> Self {
        let store = CacheStore::new(&config.data_dir);
        let dark_mode = matches!(store.load(THEME_KEY).as_deref(), Some(THEME_DARK));
        let slots = config
            .endpoints()
            .into_iter()
            .map(|endpoint| {
                let display = match store.load(&endpoint.cache_key) {
                    Some(value) => SlotDisplay::Cached(value),
                    None => SlotDisplay::Empty,
                };
                SlotState { endpoint, display }
            })
            .collect();
        Self {
            slots,
            pending_fetches: 0,
            dark_mode,
            store,
        }
    }

    pub fn controls_enabled(&self) -> bool {
        self.pending_fetches == 0
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::FetchAll => {
                if self.pending_fetches > 0 {
                    return Command::none();
                }
                self.pending_fetches = self.slots.len();
                let mut commands = Vec::with_capacity(self.slots.len());
                for (index, slot) in self.slots.iter_mut().enumerate() {
                    // A cached value stays on screen until its fresh result lands.
                    if !matches!(slot.display, SlotDisplay::Cached(_)) {
                        slot.display = SlotDisplay::Fetching;
                    }
                    let endpoint = slot.endpoint.clone();
                    commands.push(Command::perform(
                        async move {
                            match fetch_service::fetch_field(&endpoint).await {
                                Ok(value) => Message::FetchFinished {
                                    slot: index,
                                    result: Ok(value),
                                },
                                Err(e) => {
                                    log::warn!("fetch failed for {}: {}", endpoint.label, e);
                                    Message::FetchFinished {
                                        slot: index,
                                        result: Err(format!(
                                            "Error loading {}.",
                                            endpoint.json_field
                                        )),
                                    }
                                }
                            }
                        },
                        |msg| msg,
                    ));
                }
                return Command::batch(commands);
            }
            Message::FetchFinished { slot, result } => {
                // Every branch of a joint fetch reports back exactly once,
                // success or failure, so the counter always drains to zero and
                // the trigger control cannot stay disabled.
                self.pending_fetches = self.pending_fetches.saturating_sub(1);
                let Some(slot_state) = self.slots.get_mut(slot) else {
                    log::error!("fetch finished for unknown slot {}", slot);
                    return Command::none();
                };
                match result {
                    Ok(value) => {
                        if let Err(e) = self.store.save(&slot_state.endpoint.cache_key, &value) {
                            log::warn!(
                                "cache write failed for {}: {}",
                                slot_state.endpoint.cache_key,
                                e
                            );
                        }
                        slot_state.display = SlotDisplay::Fresh(value);
                    }
                    Err(text) => {
                        slot_state.display = SlotDisplay::Error(text);
                    }
                }
            }
            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                let flag = if self.dark_mode { THEME_DARK } else { THEME_LIGHT };
                if let Err(e) = self.store.save(THEME_KEY, flag) {
                    log::warn!("failed to persist theme preference: {}", e);
                }
            }
        }
        Command::none()
    }
}
