//! Session actor implementation with async message handling.

use super::messages::{PlayerEntry, SessionMessage, SessionSnapshot};
use crate::clock::{ClockEvent, TournamentClock};
use crate::config::{snapshot, ConfigStore};
use crate::players::StackRegistry;
use tokio::{
    sync::{broadcast, mpsc, oneshot},
    time::{interval, Duration, MissedTickBehavior},
};

const INBOX_CAPACITY: usize = 100;
const NOTIFICATION_CAPACITY: usize = 100;

/// Session handle for sending messages and subscribing to notifications
#[derive(Clone)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    notifications: broadcast::Sender<ClockEvent>,
}

impl SessionHandle {
    /// Send a message to the session
    pub async fn send(&self, message: SessionMessage) -> Result<(), String> {
        self.sender
            .send(message)
            .await
            .map_err(|_| "Session is closed".to_string())
    }

    /// Subscribe to clock notifications (warnings, level-ups, expiry)
    pub fn subscribe(&self) -> broadcast::Receiver<ClockEvent> {
        self.notifications.subscribe()
    }

    /// Fetch an immutable snapshot of the session
    pub async fn snapshot(&self) -> Result<SessionSnapshot, String> {
        let (response, receiver) = oneshot::channel();
        self.send(SessionMessage::GetSnapshot { response }).await?;
        receiver.await.map_err(|_| "Session is closed".to_string())
    }
}

/// Session actor owning the configuration store, the tournament clock and
/// the stack registry.
///
/// All state transitions are applied by the actor task itself, including the
/// one-second tick: the tick interval is polled only while the clock is
/// ticking and is reset whenever ticking resumes, so pausing discards the
/// pending tick and resuming waits a full second. At most one tick is ever
/// outstanding.
pub struct SessionActor {
    store: ConfigStore,
    clock: TournamentClock,
    registry: StackRegistry,
    inbox: mpsc::Receiver<SessionMessage>,
    notifications: broadcast::Sender<ClockEvent>,
    is_closed: bool,
}

impl SessionActor {
    /// Create a session actor over a configuration store.
    ///
    /// The clock and the registry are initialized against the store's active
    /// configuration, with the conventional three player slots.
    pub fn new(store: ConfigStore) -> (Self, SessionHandle) {
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);

        let clock = TournamentClock::new(store.active());
        let registry =
            StackRegistry::with_default_slots(&store.active().chips, clock.current_big_blind());

        let actor = Self {
            store,
            clock,
            registry,
            inbox,
            notifications: notifications.clone(),
            is_closed: false,
        };

        let handle = SessionHandle {
            sender,
            notifications,
        };

        (actor, handle)
    }

    /// Run the session actor event loop
    pub async fn run(mut self) {
        log::info!("session '{}' starting", self.store.active().name);

        let mut tick_interval = interval(Duration::from_secs(1));
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                Some(message) = self.inbox.recv() => {
                    let was_ticking = self.clock.is_ticking();
                    self.handle_message(message);

                    if self.is_closed {
                        break;
                    }

                    // A resume waits a full second before its first tick.
                    if !was_ticking && self.clock.is_ticking() {
                        tick_interval.reset();
                    }
                }

                _ = tick_interval.tick(), if self.clock.is_ticking() => {
                    self.apply_tick();
                }

                else => break,
            }
        }

        log::info!("session closed");
    }

    /// Apply one scheduled second and fan out the resulting events
    fn apply_tick(&mut self) {
        for event in self.clock.tick() {
            match event {
                ClockEvent::LevelAdvanced { level } => {
                    log::info!("blinds up: level {level}");
                    self.registry
                        .recompute_for_big_blind(self.clock.current_big_blind());
                }
                ClockEvent::Expired => {
                    log::info!("blind schedule expired");
                }
                ClockEvent::TimeWarning { .. } => {}
            }
            // Nobody listening is fine.
            let _ = self.notifications.send(event);
        }
    }

    /// Handle a session message
    fn handle_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Start => self.clock.start(),

            SessionMessage::Pause => self.clock.pause(),

            SessionMessage::ResetLevel => self.clock.reset(),

            SessionMessage::AdvanceLevel => {
                self.clock.advance();
                self.registry
                    .recompute_for_big_blind(self.clock.current_big_blind());
            }

            SessionMessage::SetManualMode(enabled) => self.clock.set_manual_mode(enabled),

            SessionMessage::SetAutoAdvance(enabled) => self.clock.set_auto_advance(enabled),

            SessionMessage::SetSoundEnabled(enabled) => self.clock.set_sound_enabled(enabled),

            SessionMessage::UpdateManualBlind { field, value } => {
                if self.clock.update_manual_blind(field, value) {
                    // Keep the store's active configuration in step with the
                    // clock's edited schedule.
                    let mut config = self.store.active().clone();
                    config.blind_structure = self.clock.schedule().to_vec();
                    self.store.replace_active(config);
                    self.registry
                        .recompute_for_big_blind(self.clock.current_big_blind());
                }
            }

            SessionMessage::SetInventory {
                player_id,
                inventory,
            } => self.registry.set_inventory(&player_id, inventory),

            SessionMessage::AdjustChips {
                player_id,
                denomination,
                delta,
            } => self.registry.adjust(&player_id, denomination, delta),

            SessionMessage::SetChipCount {
                player_id,
                denomination,
                count,
            } => self.registry.set_count(&player_id, denomination, count),

            SessionMessage::ClearStack { player_id } => self.registry.clear(&player_id),

            SessionMessage::SwitchConfig { name, response } => {
                let result = self.store.switch_to(&name).map(|_| ());
                if result.is_ok() {
                    self.reset_to_active();
                    log::info!("switched to configuration '{name}'");
                }
                let _ = response.send(result);
            }

            SessionMessage::SaveConfig { config } => self.store.save(config),

            SessionMessage::ReplaceActiveConfig { config } => {
                // Live edit: the clock keeps its position and players keep
                // their (possibly stale) inventories.
                self.clock.set_schedule(config.blind_structure.clone());
                self.registry.set_denominations(&config.chips);
                self.store.replace_active(config);
                self.registry
                    .recompute_for_big_blind(self.clock.current_big_blind());
            }

            SessionMessage::ImportConfig {
                snapshot: text,
                response,
            } => {
                let result = snapshot::parse_snapshot(&text).map(|config| {
                    log::info!("imported configuration '{}'", config.name);
                    self.store.save(config.clone());
                    self.store.replace_active(config);
                    self.reset_to_active();
                });
                let _ = response.send(result);
            }

            SessionMessage::ExportConfig { response } => {
                let _ = response.send(snapshot::render_snapshot(self.store.active()));
            }

            SessionMessage::GetSnapshot { response } => {
                let _ = response.send(self.snapshot());
            }

            SessionMessage::Shutdown => {
                self.is_closed = true;
            }
        }
    }

    /// Reset the clock and the registry against the store's active
    /// configuration (configuration switch or import).
    fn reset_to_active(&mut self) {
        let config = self.store.active().clone();
        self.clock.reset_to_config(&config);
        self.registry.reset_all(&config.chips);
        self.registry
            .recompute_for_big_blind(self.clock.current_big_blind());
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config_name: self.store.active().name.clone(),
            saved_config_names: self.store.saved().iter().map(|c| c.name.clone()).collect(),
            clock: self.clock.state(),
            current_level: self.clock.current_level().clone(),
            players: self
                .registry
                .players()
                .map(|(id, stack)| PlayerEntry {
                    id: id.clone(),
                    stack: stack.clone(),
                })
                .collect(),
        }
    }
}
