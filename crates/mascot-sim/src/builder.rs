//! Fluent builder for constructing a [`Mascot`].

use mascot_anim::{AllAssets, AnimationStateMachine, AssetLoader};
use mascot_behavior::{Behavior, BehaviorScheduler, DialogueSink, EmptyPage, NoDialogue, PageProbe};
use mascot_core::{Cadence, MascotRng, Millis, TimerQueue, Vec2, VirtualClock};
use mascot_physics::PhysicsIntegrator;

use crate::{Mascot, MascotConfig, SimResult};

/// Fluent builder for [`Mascot`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                            |
/// |--------------------|------------------------------------|
/// | `.assets(l)`       | `AllAssets` (every load succeeds)  |
/// | `.page(p)`         | `EmptyPage`                        |
/// | `.dialogue(d)`     | `NoDialogue`                       |
/// | `.behavior(b)`     | built-ins only                     |
/// | `.position(x, y)`  | left edge, on the floor            |
///
/// # Example
///
/// ```rust,ignore
/// let mut mascot = MascotBuilder::new(MascotConfig { seed: Some(7), ..Default::default() })
///     .page(StaticPage::new(elements))
///     .dialogue(RecordingDialogue::new())
///     .build()?;
/// mascot.start();
/// mascot.advance_by(60_000, &mut NoopObserver);
/// ```
pub struct MascotBuilder {
    config:    MascotConfig,
    assets:    Option<Box<dyn AssetLoader>>,
    page:      Option<Box<dyn PageProbe>>,
    dialogue:  Option<Box<dyn DialogueSink>>,
    behaviors: Vec<Box<dyn Behavior>>,
    position:  Option<Vec2>,
}

impl MascotBuilder {
    pub fn new(config: MascotConfig) -> Self {
        Self {
            config,
            assets:    None,
            page:      None,
            dialogue:  None,
            behaviors: Vec::new(),
            position:  None,
        }
    }

    /// Supply the asset loader consulted on every state change.
    pub fn assets(mut self, loader: impl AssetLoader + 'static) -> Self {
        self.assets = Some(Box::new(loader));
        self
    }

    /// Supply the page Observe looks at.
    pub fn page(mut self, page: impl PageProbe + 'static) -> Self {
        self.page = Some(Box::new(page));
        self
    }

    /// Supply the dialogue hook.
    pub fn dialogue(mut self, sink: impl DialogueSink + 'static) -> Self {
        self.dialogue = Some(Box::new(sink));
        self
    }

    /// Register an extra behavior; a built-in with the same name is replaced.
    /// Give it a weight in `config.scheduler.weights` to have it selected.
    pub fn behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    /// Initial top-left position of the sprite.
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Vec2::new(x, y));
        self
    }

    /// Validate the config and assemble a stopped [`Mascot`] at time zero.
    pub fn build(self) -> SimResult<Mascot> {
        let config = self.config;
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => MascotRng::new(seed),
            None       => MascotRng::from_entropy(),
        };

        let mut physics = PhysicsIntegrator::new(config.physics, config.viewport)?;
        if let Some(p) = self.position {
            physics.set_position(p.x, p.y);
        }

        let loader = self.assets.unwrap_or_else(|| Box::new(AllAssets));
        let mut animation = AnimationStateMachine::new(config.states, loader)?;
        animation.set_orientation(physics.facing());

        let mut scheduler = BehaviorScheduler::new(config.scheduler)?;
        for behavior in self.behaviors {
            scheduler.register(behavior)?;
        }

        Ok(Mascot {
            clock:        VirtualClock::new(),
            physics_tick: Cadence::new(config.physics_tick_ms, Millis::ZERO)?,
            frame_tick:   Cadence::new(config.frame_tick_ms, Millis::ZERO)?,
            timers:       TimerQueue::new(),
            rng,
            physics,
            animation,
            scheduler,
            page:         self.page.unwrap_or_else(|| Box::new(EmptyPage)),
            dialogue:     self.dialogue.unwrap_or_else(|| Box::new(NoDialogue)),
            started:      Vec::new(),
        })
    }
}
