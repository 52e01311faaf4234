//! Wave sequencer
//!
//! Cooperative state machine that plays a list of waves over time. Every
//! wait is a [`Delay`] resumed from the tick's time budget, so a long tick
//! catches up on several short waits in order. Cancelling (stop, skip,
//! restart) replaces the pending phase outright, so no spawn scheduled by
//! the old phase can happen afterwards.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::SpawnerConfig;
use super::prototype::{PrototypeId, PrototypeLibrary};
use super::registry::{PoolHandle, PoolRegistry, Released, Transform};
use super::resolver::{SpawnEnvironment, SpawnPositionResolver};
use super::wave::{WaveDefinition, WaveEvent};
use crate::core::{Delay, Error, Observers, Result, SubscriptionId};

/// Externally visible sequencer state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Running,
    Complete,
}

/// Pending step of the running sequence
#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    WaitingBeforeWave { delay: Delay },
    Spawning { pair: usize, spawned: u32, cooldown: Option<Delay> },
    LoopDelay { delay: Delay },
    Complete,
}

/// A spawn that happened during a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRecord {
    pub handle: PoolHandle,
    pub prototype: PrototypeId,
    pub wave: usize,
    pub position: Vec3,
}

/// Plays waves of pooled entities
pub struct WaveSequencer {
    config: SpawnerConfig,
    waves: Vec<WaveDefinition>,
    pools: PoolRegistry,
    resolver: SpawnPositionResolver,
    rng: ChaCha8Rng,
    phase: Phase,
    current_wave: usize,
    active: Vec<PoolHandle>,
    events: Observers<WaveEvent>,
}

impl WaveSequencer {
    /// Create a sequencer, warming pools for every prototype the waves use.
    ///
    /// Waves naming a prototype missing from `library` are rejected. When
    /// `auto_start` is set the first wave's delay begins immediately.
    pub fn new(config: SpawnerConfig, waves: Vec<WaveDefinition>, library: PrototypeLibrary) -> Result<Self> {
        config.validate()?;
        for (i, wave) in waves.iter().enumerate() {
            if !(wave.delay_before_wave >= 0.0) {
                return Err(Error::config(format!(
                    "wave {} ('{}') has a negative delay_before_wave",
                    i, wave.name
                )));
            }
            if let Some(unknown) = wave.spawns.iter().find(|s| !library.contains(s.prototype)) {
                return Err(Error::UnknownPrototype(unknown.prototype));
            }
        }

        let mut pools = PoolRegistry::new(library, config.use_object_pooling);
        if config.use_object_pooling {
            let mut prototypes: Vec<PrototypeId> = waves
                .iter()
                .flat_map(|w| w.spawns.iter().map(|s| s.prototype))
                .collect();
            prototypes.sort_unstable();
            prototypes.dedup();
            for prototype in prototypes {
                pools.warm(prototype, config.initial_pool_size)?;
            }
        }

        let rng = ChaCha8Rng::seed_from_u64(config.rng_seed.unwrap_or_else(rand::random));
        let resolver = SpawnPositionResolver::new(config.origin, config.spawn_areas.clone());

        let mut sequencer = Self {
            config,
            waves,
            pools,
            resolver,
            rng,
            phase: Phase::Idle,
            current_wave: 0,
            active: Vec::new(),
            events: Observers::new(),
        };
        if sequencer.config.auto_start {
            sequencer.start_waves();
        }
        Ok(sequencer)
    }

    /// Restart from the first wave, cancelling anything in flight
    pub fn start_waves(&mut self) {
        self.start_waves_from(0);
    }

    /// Restart from `index` (clamped to the wave list), cancelling anything in flight
    pub fn start_waves_from(&mut self, index: usize) {
        if self.waves.is_empty() {
            log::warn!("No waves configured");
            self.phase = Phase::Complete;
            self.current_wave = 0;
            self.events.notify(&WaveEvent::AllWavesCompleted);
            return;
        }

        self.current_wave = index.min(self.waves.len() - 1);
        self.enter_wave();
        log::info!("Starting waves at {}/{}", self.current_wave + 1, self.waves.len());
    }

    /// Abandon the current wave and move to the next one.
    ///
    /// Only acts while running. The abandoned wave does not report completion.
    pub fn skip_to_next_wave(&mut self) {
        if self.state() != SequencerState::Running {
            return;
        }

        self.current_wave += 1;
        if self.current_wave >= self.waves.len() {
            if self.config.loop_waves {
                self.current_wave = 0;
            } else {
                self.finish();
                return;
            }
        }
        log::debug!("Skipped to wave {}", self.current_wave);
        self.enter_wave();
    }

    /// Halt the sequence without notifying anyone
    pub fn stop_waves(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Advance by `dt` seconds, spawning whatever falls due
    pub fn tick(&mut self, dt: f32, env: &SpawnEnvironment<'_>) -> Vec<SpawnRecord> {
        let mut budget = dt.max(0.0);
        let mut spawned = Vec::new();
        let mut restarted = false;

        loop {
            match self.phase {
                Phase::Idle | Phase::Complete => break,

                Phase::WaitingBeforeWave { mut delay } => {
                    if !delay.advance(&mut budget) {
                        self.phase = Phase::WaitingBeforeWave { delay };
                        break;
                    }
                    let wave = &self.waves[self.current_wave];
                    log::info!("Wave {} '{}' started", self.current_wave, wave.name);
                    self.events.notify(&WaveEvent::WaveStarted {
                        index: self.current_wave,
                        name: wave.name.clone(),
                    });
                    self.phase = Phase::Spawning { pair: 0, spawned: 0, cooldown: None };
                }

                Phase::Spawning { mut pair, spawned: mut count, cooldown } => {
                    if let Some(mut cooldown) = cooldown {
                        if !cooldown.advance(&mut budget) {
                            self.phase = Phase::Spawning { pair, spawned: count, cooldown: Some(cooldown) };
                            break;
                        }
                    }

                    let spawns = &self.waves[self.current_wave].spawns;
                    while pair < spawns.len() && count >= spawns[pair].count {
                        pair += 1;
                        count = 0;
                    }

                    if pair >= spawns.len() {
                        self.complete_wave();
                        continue;
                    }

                    let prototype = spawns[pair].prototype;
                    match self.spawn_one(prototype, env) {
                        Ok(record) => spawned.push(record),
                        Err(e) => log::error!("Failed to spawn {}: {}", prototype, e),
                    }
                    self.phase = Phase::Spawning {
                        pair,
                        spawned: count + 1,
                        cooldown: Some(Delay::new(self.config.time_between_spawns)),
                    };
                }

                Phase::LoopDelay { mut delay } => {
                    if restarted || !delay.advance(&mut budget) {
                        self.phase = Phase::LoopDelay { delay };
                        break;
                    }
                    restarted = true;
                    log::info!("Looping waves");
                    self.enter_wave();
                }
            }
        }

        spawned
    }

    /// Hand a spawned entity back to its pool (or despawn it without pooling)
    pub fn return_to_pool(&mut self, handle: PoolHandle) -> Result<Released> {
        let released = self.pools.release(handle)?;
        self.active.retain(|&h| h != handle);
        Ok(released)
    }

    pub fn state(&self) -> SequencerState {
        match self.phase {
            Phase::Idle => SequencerState::Idle,
            Phase::Complete => SequencerState::Complete,
            Phase::WaitingBeforeWave { .. } | Phase::Spawning { .. } | Phase::LoopDelay { .. } => {
                SequencerState::Running
            }
        }
    }

    pub fn current_wave_index(&self) -> usize {
        self.current_wave
    }

    pub fn total_wave_count(&self) -> usize {
        self.waves.len()
    }

    pub fn active_entity_count(&self) -> usize {
        self.active.len()
    }

    /// Entities spawned and not yet returned, oldest first
    pub fn active_entities(&self) -> &[PoolHandle] {
        &self.active
    }

    pub fn pools(&self) -> &PoolRegistry {
        &self.pools
    }

    pub fn waves(&self) -> &[WaveDefinition] {
        &self.waves
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&WaveEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    pub fn events_mut(&mut self) -> &mut Observers<WaveEvent> {
        &mut self.events
    }

    fn enter_wave(&mut self) {
        let delay = Delay::new(self.waves[self.current_wave].delay_before_wave);
        self.phase = Phase::WaitingBeforeWave { delay };
    }

    fn complete_wave(&mut self) {
        let wave = &self.waves[self.current_wave];
        log::info!("Wave {} '{}' complete", self.current_wave, wave.name);
        self.events.notify(&WaveEvent::WaveCompleted {
            index: self.current_wave,
            name: wave.name.clone(),
        });

        self.current_wave += 1;
        if self.current_wave < self.waves.len() {
            self.enter_wave();
        } else if self.config.loop_waves {
            self.current_wave = 0;
            self.phase = Phase::LoopDelay { delay: Delay::new(self.config.loop_delay) };
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Complete;
        log::info!("All waves complete");
        self.events.notify(&WaveEvent::AllWavesCompleted);
    }

    fn spawn_one(&mut self, prototype: PrototypeId, env: &SpawnEnvironment<'_>) -> Result<SpawnRecord> {
        let wave = &self.waves[self.current_wave];
        let (position, rotation) = self.resolver.resolve(wave, &mut self.rng, env);

        let handle = self.pools.acquire(prototype)?;
        self.pools.set_transform(handle, Transform::new(position, rotation))?;
        self.active.push(handle);

        log::trace!("Spawned {} as {:?} at {:?}", prototype, handle.entity(), position);
        Ok(SpawnRecord {
            handle,
            prototype,
            wave: self.current_wave,
            position,
        })
    }
}

impl std::fmt::Debug for WaveSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveSequencer")
            .field("phase", &self.phase)
            .field("current_wave", &self.current_wave)
            .field("waves", &self.waves.len())
            .field("active", &self.active.len())
            .field("pools", &self.pools)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NoGround, NoNavigation};
    use std::cell::RefCell;
    use std::rc::Rc;

    const ENV: SpawnEnvironment<'static> = SpawnEnvironment { ground: &NoGround, navigation: &NoNavigation };

    fn library() -> (PrototypeLibrary, PrototypeId, PrototypeId) {
        let mut library = PrototypeLibrary::new();
        let a = library.register("Tank");
        let b = library.register("Drone");
        (library, a, b)
    }

    fn config() -> SpawnerConfig {
        SpawnerConfig {
            auto_start: false,
            time_between_spawns: 0.0,
            initial_pool_size: 2,
            rng_seed: Some(1),
            ..Default::default()
        }
    }

    fn record_events(sequencer: &mut WaveSequencer) -> Rc<RefCell<Vec<WaveEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        sequencer.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        log
    }

    #[test]
    fn test_single_wave_runs_to_completion() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("One").with_spawn(a, 2).with_delay(0.0)];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();
        let events = record_events(&mut sequencer);

        assert_eq!(sequencer.state(), SequencerState::Idle);
        sequencer.start_waves();
        let spawned = sequencer.tick(0.016, &ENV);

        assert_eq!(spawned.len(), 2);
        assert_eq!(sequencer.active_entity_count(), 2);
        assert_eq!(sequencer.state(), SequencerState::Complete);
        assert_eq!(
            *events.borrow(),
            vec![
                WaveEvent::WaveStarted { index: 0, name: "One".into() },
                WaveEvent::WaveCompleted { index: 0, name: "One".into() },
                WaveEvent::AllWavesCompleted,
            ]
        );
    }

    #[test]
    fn test_delays_pace_spawns() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Paced").with_spawn(a, 3).with_delay(1.0)];
        let config = SpawnerConfig { time_between_spawns: 0.5, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        sequencer.start_waves();

        assert!(sequencer.tick(0.75, &ENV).is_empty());
        // Delay expires at 1.0, first spawn happens immediately
        assert_eq!(sequencer.tick(0.5, &ENV).len(), 1);
        // 0.25 carried into the cooldown; another 0.25 finishes it
        assert_eq!(sequencer.tick(0.25, &ENV).len(), 1);
        assert_eq!(sequencer.tick(0.5, &ENV).len(), 1);
        // Still waiting after the last spawn
        assert_eq!(sequencer.state(), SequencerState::Running);
        sequencer.tick(0.5, &ENV);
        assert_eq!(sequencer.state(), SequencerState::Complete);
    }

    #[test]
    fn test_long_tick_catches_up() {
        let (library, a, b) = library();
        let waves = vec![
            WaveDefinition::new("First").with_spawn(a, 2).with_delay(1.0),
            WaveDefinition::new("Second").with_spawn(b, 3).with_delay(1.0),
        ];
        let config = SpawnerConfig { time_between_spawns: 0.2, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        sequencer.start_waves();

        let spawned = sequencer.tick(10.0, &ENV);
        assert_eq!(spawned.len(), 5);
        assert_eq!(spawned[0].prototype, a);
        assert_eq!(spawned[4].prototype, b);
        assert_eq!(spawned[4].wave, 1);
        assert_eq!(sequencer.state(), SequencerState::Complete);
    }

    #[test]
    fn test_zero_count_pairs_skipped() {
        let (library, a, b) = library();
        let waves = vec![WaveDefinition::new("Sparse")
            .with_spawn(a, 0)
            .with_spawn(b, 1)
            .with_delay(0.0)];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();
        sequencer.start_waves();

        let spawned = sequencer.tick(0.1, &ENV);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].prototype, b);
    }

    #[test]
    fn test_looping_restarts_after_loop_delay() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Loop").with_spawn(a, 1).with_delay(0.0)];
        let config = SpawnerConfig { loop_waves: true, loop_delay: 2.0, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        let events = record_events(&mut sequencer);
        sequencer.start_waves();

        assert_eq!(sequencer.tick(0.1, &ENV).len(), 1);
        assert_eq!(sequencer.state(), SequencerState::Running);
        assert_eq!(sequencer.current_wave_index(), 0);

        assert!(sequencer.tick(1.5, &ENV).is_empty());
        assert_eq!(sequencer.tick(1.0, &ENV).len(), 1);
        assert!(!events.borrow().contains(&WaveEvent::AllWavesCompleted));
    }

    #[test]
    fn test_zero_delay_loop_is_bounded_per_tick() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Spin").with_spawn(a, 1).with_delay(0.0)];
        let config = SpawnerConfig { loop_waves: true, loop_delay: 0.0, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        sequencer.start_waves();

        // Initial pass plus one restart
        assert_eq!(sequencer.tick(1.0, &ENV).len(), 2);
        assert_eq!(sequencer.tick(1.0, &ENV).len(), 1);
    }

    #[test]
    fn test_skip_prevents_pending_spawns() {
        let (library, a, b) = library();
        let waves = vec![
            WaveDefinition::new("First").with_spawn(a, 5).with_delay(0.0),
            WaveDefinition::new("Second").with_spawn(b, 1).with_delay(1.0),
        ];
        let config = SpawnerConfig { time_between_spawns: 1.0, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        let events = record_events(&mut sequencer);
        sequencer.start_waves();

        assert_eq!(sequencer.tick(0.1, &ENV).len(), 1);
        sequencer.skip_to_next_wave();
        assert_eq!(sequencer.current_wave_index(), 1);

        let spawned = sequencer.tick(5.0, &ENV);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].prototype, b);
        assert!(!events
            .borrow()
            .contains(&WaveEvent::WaveCompleted { index: 0, name: "First".into() }));
    }

    #[test]
    fn test_skip_past_last_wave_completes() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Only").with_spawn(a, 3)];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();
        let events = record_events(&mut sequencer);
        sequencer.start_waves();

        sequencer.skip_to_next_wave();
        assert_eq!(sequencer.state(), SequencerState::Complete);
        assert_eq!(*events.borrow(), vec![WaveEvent::AllWavesCompleted]);
        assert!(sequencer.tick(10.0, &ENV).is_empty());
    }

    #[test]
    fn test_skip_ignored_when_not_running() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("A").with_spawn(a, 1), WaveDefinition::new("B")];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();

        sequencer.skip_to_next_wave();
        assert_eq!(sequencer.current_wave_index(), 0);
        assert_eq!(sequencer.state(), SequencerState::Idle);
    }

    #[test]
    fn test_stop_is_silent() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Stopped").with_spawn(a, 3).with_delay(0.5)];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();
        let events = record_events(&mut sequencer);
        sequencer.start_waves();

        sequencer.stop_waves();
        assert!(sequencer.tick(10.0, &ENV).is_empty());
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_stop_mid_wave_cancels_pending_spawns() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Column").with_spawn(a, 4).with_delay(0.0)];
        let config = SpawnerConfig { time_between_spawns: 1.0, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        let events = record_events(&mut sequencer);
        sequencer.start_waves();

        // First spawn lands, the rest wait on the cooldown
        assert_eq!(sequencer.tick(0.5, &ENV).len(), 1);
        sequencer.stop_waves();

        assert!(sequencer.tick(30.0, &ENV).is_empty());
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.active_entity_count(), 1);
        assert_eq!(
            *events.borrow(),
            vec![WaveEvent::WaveStarted { index: 0, name: "Column".into() }]
        );
    }

    #[test]
    fn test_restart_mid_run_resets_to_first_wave() {
        let (library, a, b) = library();
        let waves = vec![
            WaveDefinition::new("First").with_spawn(a, 1).with_delay(0.5),
            WaveDefinition::new("Second").with_spawn(b, 4).with_delay(0.0),
        ];
        let config = SpawnerConfig { time_between_spawns: 1.0, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        let events = record_events(&mut sequencer);
        sequencer.start_waves();

        // Wave 0 spawns and cools down, wave 1 spawns once with 0.5s of cooldown left
        let spawned = sequencer.tick(2.0, &ENV);
        assert_eq!(spawned.len(), 2);
        assert_eq!(sequencer.current_wave_index(), 1);

        sequencer.start_waves();
        assert_eq!(sequencer.current_wave_index(), 0);
        assert_eq!(sequencer.state(), SequencerState::Running);

        // The old cooldown would have fired here; the new run is still in its delay
        assert!(sequencer.tick(0.25, &ENV).is_empty());
        let spawned = sequencer.tick(0.5, &ENV);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].prototype, a);
        assert_eq!(spawned[0].wave, 0);
        assert!(!events
            .borrow()
            .contains(&WaveEvent::WaveCompleted { index: 1, name: "Second".into() }));
    }

    #[test]
    fn test_start_from_clamps() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("A").with_spawn(a, 1), WaveDefinition::new("B").with_spawn(a, 1)];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();

        sequencer.start_waves_from(42);
        assert_eq!(sequencer.current_wave_index(), 1);
        assert_eq!(sequencer.state(), SequencerState::Running);
    }

    #[test]
    fn test_auto_start() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Auto").with_spawn(a, 1).with_delay(0.0)];
        let config = SpawnerConfig { auto_start: true, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();

        assert_eq!(sequencer.state(), SequencerState::Running);
        assert_eq!(sequencer.tick(0.0, &ENV).len(), 1);
    }

    #[test]
    fn test_pools_warmed_and_reused() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Pool").with_spawn(a, 3).with_delay(0.0)];
        let mut sequencer = WaveSequencer::new(config(), waves, library).unwrap();
        assert_eq!(sequencer.pools().pooled_count(a), 2);

        sequencer.start_waves();
        let spawned = sequencer.tick(1.0, &ENV);
        assert_eq!(spawned.len(), 3);
        assert_eq!(sequencer.pools().pooled_count(a), 0);

        for record in &spawned {
            assert_eq!(sequencer.return_to_pool(record.handle).unwrap(), Released::Pooled);
        }
        assert_eq!(sequencer.active_entity_count(), 0);
        // The grown entity joins the pool too
        assert_eq!(sequencer.pools().pooled_count(a), 3);
    }

    #[test]
    fn test_pooling_disabled_despawns() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("NoPool").with_spawn(a, 1).with_delay(0.0)];
        let config = SpawnerConfig { use_object_pooling: false, ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        assert_eq!(sequencer.pools().world().len(), 0);

        sequencer.start_waves();
        let handle = sequencer.tick(1.0, &ENV)[0].handle;
        assert_eq!(sequencer.return_to_pool(handle).unwrap(), Released::Despawned);
        assert!(!sequencer.pools().world().contains(handle.entity()));
        assert!(sequencer.return_to_pool(handle).is_err());
    }

    #[test]
    fn test_unknown_prototype_rejected() {
        let (library, _, _) = library();
        let waves = vec![WaveDefinition::new("Bad").with_spawn(PrototypeId(9), 1)];
        assert!(matches!(
            WaveSequencer::new(config(), waves, library),
            Err(Error::UnknownPrototype(PrototypeId(9)))
        ));
    }

    #[test]
    fn test_no_waves_completes_immediately() {
        let (library, _, _) = library();
        let mut sequencer = WaveSequencer::new(config(), Vec::new(), library).unwrap();
        let events = record_events(&mut sequencer);

        sequencer.start_waves();
        assert_eq!(sequencer.state(), SequencerState::Complete);
        assert_eq!(*events.borrow(), vec![WaveEvent::AllWavesCompleted]);
    }

    #[test]
    fn test_spawns_placed_at_origin_without_areas() {
        let (library, a, _) = library();
        let waves = vec![WaveDefinition::new("Origin").with_spawn(a, 1).with_delay(0.0)];
        let config = SpawnerConfig { origin: Vec3::new(3.0, 1.0, 3.0), ..config() };
        let mut sequencer = WaveSequencer::new(config, waves, library).unwrap();
        sequencer.start_waves();

        let record = sequencer.tick(0.0, &ENV)[0];
        assert_eq!(record.position, Vec3::new(3.0, 1.0, 3.0));
        let transform = sequencer.pools().transform(record.handle).unwrap();
        assert_eq!(transform.position, record.position);
    }
}
