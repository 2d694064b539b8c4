//! The per-tick integrator and the drag/steering control surface.

use futures::channel::oneshot;
use mascot_core::{Facing, Vec2, Viewport};

use crate::{MoveCompletion, PhysicsBody, PhysicsConfig, PhysicsResult};

/// What happened during one [`PhysicsIntegrator::update`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The body came within `arrival_radius` of its target this tick.
    pub arrived: bool,

    /// A jump ended on the floor this tick.
    pub landed: bool,
}

/// Owns the [`PhysicsBody`] and advances it one render tick at a time.
pub struct PhysicsIntegrator {
    config:   PhysicsConfig,
    body:     PhysicsBody,
    viewport: Viewport,
    /// Senders for outstanding `wait_for_arrival` handles.
    waiters:  Vec<oneshot::Sender<()>>,
}

impl PhysicsIntegrator {
    /// Validate `config` and place the body at rest on the floor, left edge.
    pub fn new(config: PhysicsConfig, viewport: Viewport) -> PhysicsResult<Self> {
        config.validate()?;
        let start = Vec2::new(0.0, viewport.floor());
        Ok(Self {
            config,
            body: PhysicsBody::at_rest(start),
            viewport,
            waiters: Vec::new(),
        })
    }

    #[inline]
    pub fn body(&self) -> &PhysicsBody {
        &self.body
    }

    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.body.facing
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.body.is_moving
    }

    // ── Host / drag surface ───────────────────────────────────────────────────

    /// Teleport the body.  Used by drag-move and initial placement; no clamp.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.body.position = Vec2::new(x, y);
    }

    /// Grab the body: suspends gravity and cancels any steering.
    pub fn start_drag(&mut self) {
        self.body.is_dragging = true;
        self.clear_target();
    }

    /// Release the body.  Velocity is left as it was when grabbed.
    pub fn stop_drag(&mut self) {
        self.body.is_dragging = false;
    }

    /// Resize the reachable area and pull the body back inside it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let p = &mut self.body.position;
        p.x = p.x.clamp(0.0, viewport.max_x());
        p.y = p.y.clamp(0.0, viewport.max_y());
    }

    // ── Steering ──────────────────────────────────────────────────────────────

    /// Start steering toward `target`.
    ///
    /// Ignored while dragging, since the host owns the position; returns
    /// whether the target was accepted.
    pub fn set_target(&mut self, target: Vec2) -> bool {
        if self.body.is_dragging {
            tracing::debug!(%target, "set_target ignored while dragging");
            return false;
        }
        self.body.target = Some(target);
        self.body.is_moving = true;
        true
    }

    /// Stop steering.  Fires every outstanding [`MoveCompletion`].
    pub fn clear_target(&mut self) {
        self.body.target = None;
        self.body.is_moving = false;
        self.notify_waiters();
    }

    /// A handle that completes once `is_moving` is false.
    ///
    /// Already complete if the body is not steering right now.
    pub fn wait_for_arrival(&mut self) -> MoveCompletion {
        if !self.body.is_moving {
            return MoveCompletion::ready();
        }
        let (tx, rx) = oneshot::channel();
        self.waiters.push(tx);
        MoveCompletion::pending(rx)
    }

    // ── Impulses ──────────────────────────────────────────────────────────────

    /// Apply the jump impulse.  No double jump: returns `false` if airborne.
    pub fn jump(&mut self) -> bool {
        if self.body.is_jumping {
            return false;
        }
        self.body.is_jumping = true;
        self.body.velocity.y = self.config.jump_height;
        true
    }

    /// Overwrite horizontal velocity (friction decays it afterwards).
    pub fn nudge_velocity_x(&mut self, vx: f32) {
        self.body.velocity.x = vx;
    }

    pub fn flip_facing(&mut self) {
        self.body.facing = self.body.facing.flipped();
    }

    // ── Tick ──────────────────────────────────────────────────────────────────

    /// Advance the body by one tick.
    pub fn update(&mut self) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let was_jumping = self.body.is_jumping;

        if self.body.is_moving {
            if let Some(target) = self.body.target {
                outcome.arrived = self.steer(target);
            }
        }

        if !self.body.is_dragging {
            let cfg = &self.config;
            let v = &mut self.body.velocity;
            v.y += cfg.gravity;
            v.x *= cfg.friction;
            self.body.position = self.body.position + *v;
            self.clamp_to_viewport();
        }

        let vx = self.body.velocity.x;
        if vx > self.config.facing_deadband {
            self.body.facing = Facing::Right;
        } else if vx < -self.config.facing_deadband {
            self.body.facing = Facing::Left;
        }

        outcome.landed = was_jumping && !self.body.is_jumping;
        outcome
    }

    /// Point velocity at `target`, or clear it if within the arrival radius.
    fn steer(&mut self, target: Vec2) -> bool {
        let delta = target - self.body.position;
        if delta.length() < self.config.arrival_radius {
            self.clear_target();
            return true;
        }
        if let Some(dir) = delta.normalized() {
            self.body.velocity = dir * self.config.walk_speed;
        }
        false
    }

    fn clamp_to_viewport(&mut self) {
        let (max_x, max_y) = (self.viewport.max_x(), self.viewport.max_y());
        let damping = self.config.bounce_damping;
        let body = &mut self.body;

        if body.position.x < 0.0 {
            body.position.x = 0.0;
            body.velocity.x = body.velocity.x.abs() * damping;
        } else if body.position.x > max_x {
            body.position.x = max_x;
            body.velocity.x = -body.velocity.x.abs() * damping;
        }

        if body.position.y < 0.0 {
            body.position.y = 0.0;
            body.velocity.y = 0.0;
        } else if body.position.y >= max_y {
            // Resting on the floor counts as landed even without overshoot.
            body.position.y = max_y;
            body.velocity.y = 0.0;
            body.is_jumping = false;
        }
    }

    fn notify_waiters(&mut self) {
        for tx in self.waiters.drain(..) {
            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(());
        }
    }
}
