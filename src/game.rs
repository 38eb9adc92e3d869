//! The game world and its per-frame schedule.

use std::time::Duration;

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::prelude::*;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::board::{SpawnPoints, Viewport};
use crate::clock::GameClock;
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::events::{AudioEvent, DamageEvent, GameCommand, GameEvent, LogRecord, ScoreEvent};
use crate::systems::{
    audio_system, click_system, control_system, event_log_system, lifecycle_system, prune_system,
    scoring_system, snapshot_system, spawner_system, AudioOutput, AudioSink, EventLog,
    FrameSnapshot, GameStage, GlobalState, ModeFlags, NullSink, Scoreboard, SpawnCounter, SpawnRng,
    SpawnTimers,
};

/// A complete game session: one ECS world and the schedule that advances it.
///
/// The embedding application feeds input through [`Game::click`],
/// [`Game::command`] and [`Game::resize`], then calls [`Game::tick`] once per
/// frame with the elapsed wall time.
pub struct Game {
    pub world: World,
    schedule: Schedule,
}

impl Game {
    pub fn new(config: GameConfig) -> GameResult<Game> {
        config.validate()?;

        let mut world = World::default();

        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<ScoreEvent>(&mut world);
        EventRegistry::register_event::<DamageEvent>(&mut world);
        EventRegistry::register_event::<AudioEvent>(&mut world);
        EventRegistry::register_event::<LogRecord>(&mut world);

        let viewport = Viewport::default();
        let scoreboard = Scoreboard::new(&config);
        world.insert_resource(SpawnPoints::for_viewport(&viewport));
        world.insert_resource(viewport);
        world.insert_resource(GameClock::default());
        world.insert_resource(scoreboard);
        world.insert_resource(GameStage::default());
        world.insert_resource(ModeFlags::default());
        world.insert_resource(SpawnTimers::default());
        world.insert_resource(SpawnCounter::default());
        world.insert_resource(GlobalState::default());
        // Seeded so a frontend drawn before the first tick sees real lives
        world.insert_resource(FrameSnapshot {
            scoreboard,
            ..Default::default()
        });

        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        world.insert_resource(SpawnRng(rng));

        let log = match &config.log_path {
            Some(path) => EventLog::open(path)?,
            None => EventLog::disabled(),
        };
        world.insert_resource(log);

        world.insert_non_send_resource(AudioOutput(Box::new(NullSink)));
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                control_system,
                spawner_system,
                lifecycle_system,
                click_system,
                scoring_system,
                prune_system,
                snapshot_system,
                audio_system,
                event_log_system,
            )
                .chain(),
        );

        info!("Game world initialized");
        Ok(Game { world, schedule })
    }

    /// Queue a click at a viewport position for the next tick.
    pub fn click(&mut self, position: Vec2) {
        self.world.send_event(GameEvent::Click { position });
    }

    /// Queue a control command for the next tick.
    pub fn command(&mut self, command: GameCommand) {
        self.world.send_event(GameEvent::from(command));
    }

    /// Queue a viewport size change for the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.send_event(GameEvent::Resized { width, height });
    }

    /// Install a sound sink. Cues route through it unless muted.
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.world.insert_non_send_resource(AudioOutput(sink));
    }

    /// Advance the simulation by one frame. Returns `true` when the
    /// application should exit.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let paused = self
            .world
            .resource::<ModeFlags>()
            .contains(ModeFlags::PAUSED);
        let playing = *self.world.resource::<GameStage>() == GameStage::Playing;
        if playing && !paused {
            self.world.resource_mut::<GameClock>().advance(dt);
        }

        self.schedule.run(&mut self.world);

        // Swap event buffers; this frame's events stay readable for one more
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<ScoreEvent>>().update();
        self.world.resource_mut::<Events<DamageEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();
        self.world.resource_mut::<Events<LogRecord>>().update();

        self.world.resource::<GlobalState>().exit
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        self.world.resource::<FrameSnapshot>()
    }

    pub fn scoreboard(&self) -> Scoreboard {
        *self.world.resource::<Scoreboard>()
    }
}
