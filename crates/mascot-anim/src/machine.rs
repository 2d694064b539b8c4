//! `AnimationStateMachine`: state transitions, frame ticking, and the
//! emotion overlay.
//!
//! # Emotion overlay
//!
//! `show_emotion` switches to the emotion state and arms a revert timer on the
//! caller's [`TimerQueue`].  Each request gets a fresh [`EmotionToken`]; the
//! revert only applies if the overlay still carries that token, so a
//! superseded request's timer is a no-op.  A request that supersedes a
//! still-showing overlay inherits that overlay's pre-emotion state, so a
//! burst of emotions always returns to where the character was before the
//! first one.
//!
//! Once something else changes the state, the overlay is stale: it is no
//! longer reported by [`emotion`][AnimationStateMachine::emotion], the next
//! request starts from the newer state, and its own timer is a no-op.

use mascot_core::{EmotionToken, Facing, Millis, TimerId, TimerQueue};

use crate::{AnimResult, AssetLoader, StateTable, IDLE};

/// How long an emotion overlay stays up before reverting.
pub const EMOTION_DISPLAY_MS: u64 = 2_000;

/// Timer payloads armed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimTimer {
    EmotionRevert(EmotionToken),
}

/// Rendering view of the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSnapshot {
    pub state:       String,
    pub frame_index: u32,
    pub orientation: Facing,
    /// The emotion overlay currently showing, if any.
    pub emotion:     Option<String>,
}

struct EmotionOverlay {
    token:        EmotionToken,
    /// State actually entered for the emotion, after fallback.
    shown:        String,
    /// State to return to on revert.
    previous:     String,
    revert_timer: TimerId,
}

pub struct AnimationStateMachine {
    table:           StateTable,
    loader:          Box<dyn AssetLoader>,
    current:         String,
    frame_index:     u32,
    last_successful: Option<String>,
    emotion:         Option<EmotionOverlay>,
    next_token:      EmotionToken,
    orientation:     Facing,
}

impl AnimationStateMachine {
    /// Start in `idle`, loading its asset once.
    pub fn new(table: StateTable, mut loader: Box<dyn AssetLoader>) -> AnimResult<Self> {
        table.validate()?;
        let last_successful = match loader.load(IDLE) {
            Ok(()) => Some(IDLE.to_owned()),
            Err(err) => {
                tracing::warn!(error = %err, "initial idle asset failed to load");
                None
            }
        };
        Ok(Self {
            table,
            loader,
            current: IDLE.to_owned(),
            frame_index: 0,
            last_successful,
            emotion: None,
            next_token: EmotionToken(0),
            orientation: Facing::default(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn current_state(&self) -> &str {
        &self.current
    }

    #[inline]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn last_successful(&self) -> Option<&str> {
        self.last_successful.as_deref()
    }

    /// Name of the showing emotion overlay.
    pub fn emotion(&self) -> Option<&str> {
        self.showing_overlay().map(|o| o.shown.as_str())
    }

    fn showing_overlay(&self) -> Option<&EmotionOverlay> {
        self.emotion.as_ref().filter(|o| o.shown == self.current)
    }

    pub fn table(&self) -> &StateTable {
        &self.table
    }

    #[inline]
    pub fn orientation(&self) -> Facing {
        self.orientation
    }

    /// Mirror the body's facing for rendering.
    #[inline]
    pub fn set_orientation(&mut self, facing: Facing) {
        self.orientation = facing;
    }

    pub fn snapshot(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            state:       self.current.clone(),
            frame_index: self.frame_index,
            orientation: self.orientation,
            emotion:     self.emotion().map(str::to_owned),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    /// Switch to `name` and return the state actually entered.
    ///
    /// Unknown names degrade to `idle`.  Re-entering the current state does
    /// nothing: no frame reset, no asset reload.
    pub fn set_state(&mut self, name: &str) -> &str {
        let name = if self.table.contains(name) {
            name
        } else {
            tracing::warn!(state = name, "unknown animation state, defaulting to idle");
            IDLE
        };
        if name != self.current {
            self.enter(name.to_owned());
        }
        &self.current
    }

    /// Enter `requested`, walking the fallback chain on asset failure.
    fn enter(&mut self, requested: String) {
        let mut tried: Vec<String> = Vec::new();
        let mut candidate = requested;
        loop {
            self.current.clone_from(&candidate);
            self.frame_index = 0;

            let err = match self.loader.load(&candidate) {
                Ok(()) => {
                    self.last_successful = Some(candidate);
                    return;
                }
                Err(err) => err,
            };
            tracing::warn!(state = %candidate, error = %err, "animation asset failed to load");
            if candidate == IDLE {
                // Terminal: stay in idle without an asset.
                return;
            }
            tried.push(candidate);

            let failed = tried.last().map(String::as_str).unwrap_or(IDLE);
            candidate = if let Some(similar) = self.table.similar_to(failed, &tried) {
                tracing::info!(state = similar, "falling back to similar state");
                similar.to_owned()
            } else if let Some(last) = self.last_successful.as_ref().filter(|s| !tried.contains(*s)) {
                tracing::info!(state = %last, "falling back to last successful state");
                last.clone()
            } else {
                tracing::info!("falling back to idle state");
                IDLE.to_owned()
            };
        }
    }

    /// Show `emotion` as a transient overlay for [`EMOTION_DISPLAY_MS`].
    pub fn show_emotion<E>(&mut self, emotion: &str, now: Millis, timers: &mut TimerQueue<E>) -> EmotionToken
    where
        E: From<AnimTimer>,
    {
        let previous = match self.emotion.take() {
            Some(overlay) => {
                timers.cancel(overlay.revert_timer);
                if overlay.shown == self.current {
                    overlay.previous
                } else {
                    self.current.clone()
                }
            }
            None => self.current.clone(),
        };
        self.set_state(emotion);

        let token = self.next_token;
        self.next_token = token.next();
        let revert_timer = timers.arm(now + EMOTION_DISPLAY_MS, AnimTimer::EmotionRevert(token));
        self.emotion = Some(EmotionOverlay {
            token,
            shown: self.current.clone(),
            previous,
            revert_timer,
        });
        token
    }

    /// Handle a fired [`AnimTimer`].  Returns `true` if the state changed.
    pub fn on_timer<E>(&mut self, timer: AnimTimer, timers: &mut TimerQueue<E>) -> bool {
        match timer {
            AnimTimer::EmotionRevert(token) => {
                if self.emotion.as_ref().is_some_and(|o| o.token == token) {
                    self.revert_emotion(timers)
                } else {
                    tracing::debug!(%token, "stale emotion revert ignored");
                    false
                }
            }
        }
    }

    /// Drop the overlay and its revert timer, leaving the state as it is.
    pub fn cancel_emotion<E>(&mut self, timers: &mut TimerQueue<E>) {
        if let Some(overlay) = self.emotion.take() {
            timers.cancel(overlay.revert_timer);
        }
    }

    fn revert_emotion<E>(&mut self, timers: &mut TimerQueue<E>) -> bool {
        let Some(overlay) = self.emotion.take() else {
            return false;
        };
        timers.cancel(overlay.revert_timer);
        if self.current != overlay.shown {
            tracing::debug!(emotion = %overlay.shown, "emotion overlay already replaced");
            return false;
        }
        let before = self.current.clone();
        self.set_state(&overlay.previous);
        self.current != before
    }

    // ── Frame tick ────────────────────────────────────────────────────────────

    /// Advance one frame.  Looping states wrap; others hold the last frame,
    /// and a held emotion overlay reverts early.
    pub fn advance_frame<E>(&mut self, timers: &mut TimerQueue<E>) -> u32 {
        let Some(desc) = self.table.get(&self.current) else {
            return self.frame_index;
        };
        self.frame_index += 1;
        if self.frame_index >= desc.frame_count {
            if desc.loops {
                self.frame_index = 0;
            } else {
                self.frame_index = desc.frame_count - 1;
                if self.showing_overlay().is_some() {
                    self.revert_emotion(timers);
                }
            }
        }
        self.frame_index
    }
}
