//! The garden controller.
//!
//! [`Garden`] owns everything one visit needs: the session state (name,
//! phase, first-petal flag, easter-egg counter), the [`Surface`] the
//! front-end renders, the timeline of pending cosmetic steps and the RNG
//! behind the ambient particles.
//!
//! ## Scene sequence
//!
//! ```text
//! submit_name ──► card receding ──400ms──► garden revealed, night backdrop,
//!                                          particles, seed label
//!                                              │
//!                                            100ms
//!                                              ▼
//!                                          seed planting ──3500ms──► stem growing
//! ```
//!
//! Nothing here sleeps. The owner calls [`Garden::advance`] with elapsed
//! time and [`Garden::tick_frame`] once per rendered frame.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GardenConfig;
use crate::effects::{spawn_burst, spawn_particles, Bounds, Point, SparkleState};
use crate::error::{GardenError, GardenResult};
use crate::messages::{bonus_message, personalized_message, PetalIndex};
use crate::name::{validate, Name};
use crate::phase::ScenePhase;
use crate::surface::{Backdrop, CardState, PromptState, Surface};
use crate::timeline::Timeline;

/// Centre activations needed to trigger the bonus message.
pub const EASTER_EGG_CLICKS: u8 = 3;

/// Deferred surface changes.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    DismissLoading,
    RevealGarden,
    PlantSeed,
    GrowStem,
    ClearShake,
    RemovePrompt,
    ShowMessage(String),
    SettleGlow,
    RestartPulse,
    SparkleBurst(Point),
}

/// Mutable per-visit state.
#[derive(Debug, Default)]
struct Session {
    /// Set once, when the first valid name is submitted
    name: Option<Name>,
    phase: ScenePhase,
    first_petal_seen: bool,
    center_clicks: u8,
}

/// One garden visit.
#[derive(Debug)]
pub struct Garden {
    config: GardenConfig,
    session: Session,
    surface: Surface,
    timeline: Timeline<Step>,
    rng: StdRng,
    viewport_width: f64,
    next_sparkle_id: u64,
}

impl Garden {
    /// Start a session with an OS-seeded RNG.
    pub fn new(config: GardenConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a session with a fixed RNG seed, for reproducible particles.
    pub fn with_seed(config: GardenConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GardenConfig, rng: StdRng) -> Self {
        let mut timeline = Timeline::new();
        timeline.schedule(config.loading(), Step::DismissLoading);

        Self {
            viewport_width: config.viewport_width,
            config,
            session: Session::default(),
            surface: Surface::default(),
            timeline,
            rng,
            next_sparkle_id: 0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> ScenePhase {
        self.session.phase
    }

    /// The accepted name, or `""` before one is accepted.
    pub fn name(&self) -> &str {
        self.session.name.as_ref().map(Name::as_str).unwrap_or("")
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn center_clicks(&self) -> u8 {
        self.session.center_clicks
    }

    pub fn first_petal_seen(&self) -> bool {
        self.session.first_petal_seen
    }

    /// Whether a timed step or a sparkle is still in flight.
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle() || !self.surface.sparkles.is_empty()
    }

    /// Tell the garden how wide the viewport is. Only affects particles
    /// spawned afterwards.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// Handle the entry form being submitted (button or Enter).
    ///
    /// On an empty name the input shakes and the session stays on the entry
    /// card. On success the scene sequence starts.
    pub fn submit_name(&mut self, raw: &str) -> GardenResult<()> {
        if self.session.name.is_some() {
            tracing::warn!("Ignoring name submission after the seed was planted");
            return Err(GardenError::AlreadyPlanted);
        }

        let name = match validate(raw) {
            Ok(name) => name,
            Err(e) => {
                self.shake_input();
                return Err(e);
            }
        };

        tracing::info!(name = %name, "Planting seed");
        self.session.name = Some(name);
        self.session.phase.advance_to(ScenePhase::Planting);
        self.surface.card = CardState::Receding;
        self.timeline
            .schedule(self.config.card_recede(), Step::RevealGarden);
        Ok(())
    }

    /// Handle a petal being clicked or keyboard-activated.
    ///
    /// `anchor` is the petal's on-screen rectangle; without it the sparkle
    /// burst is skipped and everything else still happens.
    pub fn activate_petal(&mut self, index: usize, anchor: Option<Bounds>) -> GardenResult<()> {
        let index = PetalIndex::try_from(index)?;
        self.ensure_garden_open()?;

        if !self.session.first_petal_seen {
            self.session.first_petal_seen = true;
            self.surface.prompt = PromptState::Fading;
            self.timeline
                .schedule(self.config.prompt_fade(), Step::RemovePrompt);
        }

        let message = personalized_message(index, self.name());
        tracing::debug!(petal = index.get(), "Petal activated");
        self.display_message(message);

        if let Some(anchor) = anchor {
            self.burst_at(anchor.center());
        }
        self.pulse_center();
        Ok(())
    }

    /// Handle the flower centre being activated. Returns true when this
    /// activation triggered the bonus message.
    pub fn activate_center(&mut self, anchor: Option<Bounds>) -> GardenResult<bool> {
        self.ensure_garden_open()?;

        self.session.center_clicks += 1;
        if self.session.center_clicks < EASTER_EGG_CLICKS {
            return Ok(false);
        }
        self.session.center_clicks = 0;

        tracing::info!("Easter egg found");
        self.display_message(bonus_message(self.name()));

        if let Some(anchor) = anchor {
            let center = anchor.center();
            let first = self.config.message_swap();
            for i in 0..self.config.bonus_bursts {
                let delay = first + self.config.bonus_stagger() * i as u32;
                self.timeline.schedule(delay, Step::SparkleBurst(center));
            }
        }
        Ok(true)
    }

    /// Swap the message panel to `text`: hide, then after a short gap show
    /// the new text with a glow that settles shortly after.
    pub fn display_message(&mut self, text: impl Into<String>) {
        self.surface.message.visible = false;
        self.timeline
            .schedule(self.config.message_swap(), Step::ShowMessage(text.into()));
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// Move the clock forward by `delta`, running every step that comes due.
    /// Returns how many steps ran.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let until = self.timeline.now() + delta;
        let mut ran = 0;
        while let Some(step) = self.timeline.pop_due(until) {
            self.apply(step);
            ran += 1;
        }
        self.timeline.settle(until);
        ran
    }

    /// Step every live sparkle once, dropping the ones that faded out.
    /// Returns how many were removed.
    pub fn tick_frame(&mut self) -> usize {
        let before = self.surface.sparkles.len();
        self.surface
            .sparkles
            .retain_mut(|s| s.step() == SparkleState::Alive);
        before - self.surface.sparkles.len()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure_garden_open(&self) -> GardenResult<()> {
        if self.session.phase.garden_open() {
            Ok(())
        } else {
            Err(GardenError::GardenDormant)
        }
    }

    fn shake_input(&mut self) {
        let input = &mut self.surface.input;
        input.shaking = true;
        input.invalid = true;
        input.generation += 1;
        self.timeline.schedule(self.config.shake(), Step::ClearShake);
    }

    fn pulse_center(&mut self) {
        self.surface.pulse.active = false;
        self.timeline
            .schedule(self.config.pulse_restart(), Step::RestartPulse);
    }

    fn burst_at(&mut self, center: Point) {
        let count = self.config.sparkle_count;
        let burst = spawn_burst(center, count, self.next_sparkle_id);
        self.next_sparkle_id += count as u64;
        self.surface.sparkles.extend(burst);
    }

    fn apply(&mut self, step: Step) {
        tracing::trace!(?step, at = ?self.timeline.now(), "Running step");
        match step {
            Step::DismissLoading => self.surface.loading_visible = false,
            Step::RevealGarden => {
                self.surface.card = CardState::Hidden;
                self.surface.garden_visible = true;
                self.surface.backdrop = Backdrop::Night;

                let count = self.config.particle_count(self.viewport_width);
                self.surface.particles = spawn_particles(count, &mut self.rng);

                self.surface.seed_label = self.name().to_string();
                self.timeline
                    .schedule(self.config.plant_settle(), Step::PlantSeed);
            }
            Step::PlantSeed => {
                self.surface.seed_planting = true;
                self.timeline
                    .schedule(self.config.grow_delay(), Step::GrowStem);
            }
            Step::GrowStem => {
                self.session.phase.advance_to(ScenePhase::Growing);
                self.surface.stem_growing = true;
            }
            Step::ClearShake => {
                self.surface.input.shaking = false;
                self.surface.input.invalid = false;
            }
            Step::RemovePrompt => self.surface.prompt = PromptState::Removed,
            Step::ShowMessage(text) => {
                let message = &mut self.surface.message;
                message.text = text;
                message.visible = true;
                message.glowing = true;
                self.timeline.schedule(self.config.glow(), Step::SettleGlow);
            }
            Step::SettleGlow => self.surface.message.glowing = false,
            Step::RestartPulse => {
                self.surface.pulse.active = true;
                self.surface.pulse.generation += 1;
            }
            Step::SparkleBurst(center) => self.burst_at(center),
        }
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new(GardenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn planted(name: &str) -> Garden {
        let mut garden = Garden::with_seed(GardenConfig::default(), 42);
        garden.submit_name(name).unwrap();
        garden
    }

    #[test]
    fn test_loading_overlay_dismissed() {
        let mut garden = Garden::with_seed(GardenConfig::default(), 1);
        assert!(garden.surface().loading_visible);
        garden.advance(ms(499));
        assert!(garden.surface().loading_visible);
        garden.advance(ms(1));
        assert!(!garden.surface().loading_visible);
    }

    #[test]
    fn test_empty_name_shakes_and_stays() {
        let mut garden = Garden::with_seed(GardenConfig::default(), 1);
        let err = garden.submit_name("   ").unwrap_err();
        assert!(matches!(err, GardenError::EmptyInput));
        assert_eq!(garden.phase(), ScenePhase::Entry);
        assert!(garden.surface().input.shaking);
        assert!(garden.surface().input.invalid);

        garden.advance(ms(500));
        assert!(!garden.surface().input.shaking);
        assert!(!garden.surface().input.invalid);

        // Retry works
        garden.submit_name("Amy").unwrap();
        assert_eq!(garden.phase(), ScenePhase::Planting);
    }

    #[test]
    fn test_second_submission_rejected() {
        let mut garden = planted("Amy");
        assert!(matches!(
            garden.submit_name("Bob"),
            Err(GardenError::AlreadyPlanted)
        ));
        assert_eq!(garden.name(), "Amy");
    }

    #[test]
    fn test_card_recedes_then_garden_reveals() {
        let mut garden = planted("Amy");
        assert_eq!(garden.surface().card, CardState::Receding);
        assert!(!garden.surface().garden_visible);

        garden.advance(ms(399));
        assert!(!garden.surface().garden_visible);

        garden.advance(ms(1));
        let surface = garden.surface();
        assert_eq!(surface.card, CardState::Hidden);
        assert!(surface.garden_visible);
        assert_eq!(surface.backdrop, Backdrop::Night);
        assert_eq!(surface.seed_label, "Amy");
        assert_eq!(surface.particles.len(), 30);
        assert!(!surface.seed_planting);
    }

    #[test]
    fn test_narrow_viewport_particles() {
        let mut garden = Garden::with_seed(GardenConfig::default(), 3);
        garden.set_viewport_width(600.0);
        garden.submit_name("Amy").unwrap();
        garden.advance(ms(400));
        assert_eq!(garden.surface().particles.len(), 20);
    }

    #[test]
    fn test_planting_then_growth() {
        let mut garden = planted("Amy");
        garden.advance(ms(500));
        assert!(garden.surface().seed_planting);
        assert_eq!(garden.phase(), ScenePhase::Planting);

        garden.advance(ms(3499));
        assert!(!garden.surface().stem_growing);

        garden.advance(ms(1));
        assert!(garden.surface().stem_growing);
        assert_eq!(garden.phase(), ScenePhase::Growing);
    }

    #[test]
    fn test_whole_sequence_in_one_advance() {
        let mut garden = planted("Amy");
        garden.advance(ms(10_000));
        assert_eq!(garden.phase(), ScenePhase::Growing);
        assert!(!garden.is_animating());
    }

    #[test]
    fn test_petal_before_garden_is_dormant() {
        let mut garden = Garden::with_seed(GardenConfig::default(), 1);
        assert!(matches!(
            garden.activate_petal(0, None),
            Err(GardenError::GardenDormant)
        ));
        assert!(matches!(
            garden.activate_center(None),
            Err(GardenError::GardenDormant)
        ));
        assert_eq!(garden.center_clicks(), 0);
    }

    #[test]
    fn test_petal_message_and_glow() {
        let mut garden = planted("Amy");
        garden.advance(ms(400));

        garden.activate_petal(0, None).unwrap();
        assert!(!garden.surface().message.visible);

        garden.advance(ms(100));
        let message = &garden.surface().message;
        assert!(message.visible);
        assert!(message.glowing);
        assert!(message.text.starts_with("Amy, you carry"));

        garden.advance(ms(600));
        assert!(!garden.surface().message.glowing);
        assert!(garden.surface().message.visible);
    }

    #[test]
    fn test_first_petal_hides_prompt_once() {
        let mut garden = planted("Amy");
        garden.advance(ms(400));

        garden.activate_petal(1, None).unwrap();
        assert!(garden.first_petal_seen());
        assert_eq!(garden.surface().prompt, PromptState::Fading);
        garden.advance(ms(300));
        assert_eq!(garden.surface().prompt, PromptState::Removed);

        garden.activate_petal(2, None).unwrap();
        assert_eq!(garden.surface().prompt, PromptState::Removed);
    }

    #[test]
    fn test_petal_sparkles_at_anchor() {
        let mut garden = planted("Amy");
        garden.advance(ms(400));

        let anchor = Bounds::new(100.0, 200.0, 40.0, 20.0);
        garden.activate_petal(3, Some(anchor)).unwrap();

        let sparkles = &garden.surface().sparkles;
        assert_eq!(sparkles.len(), 6);
        assert!(sparkles.iter().all(|s| s.origin == Point::new(120.0, 210.0)));
    }

    #[test]
    fn test_pulse_restarts_each_activation() {
        let mut garden = planted("Amy");
        garden.advance(ms(400));

        garden.activate_petal(0, None).unwrap();
        assert!(!garden.surface().pulse.active);
        garden.advance(ms(10));
        assert!(garden.surface().pulse.active);
        assert_eq!(garden.surface().pulse.generation, 1);

        garden.activate_petal(0, None).unwrap();
        garden.activate_petal(0, None).unwrap();
        assert!(!garden.surface().pulse.active);
        garden.advance(ms(10));
        assert_eq!(garden.surface().pulse.generation, 3);
    }

    #[test]
    fn test_sparkles_removed_after_fading() {
        let mut garden = planted("Amy");
        garden.advance(ms(400));
        garden.activate_petal(0, Some(Bounds::default())).unwrap();

        let mut removed = 0;
        for _ in 0..48 {
            removed += garden.tick_frame();
        }
        assert_eq!(removed, 0);
        assert_eq!(garden.tick_frame(), 6);
        assert!(garden.surface().sparkles.is_empty());
    }

    #[test]
    fn test_empty_name_after_stripping_is_generic() {
        let mut garden = planted("<>");
        assert_eq!(garden.phase(), ScenePhase::Planting);
        garden.advance(ms(400));
        assert_eq!(garden.surface().seed_label, "");

        garden.activate_petal(0, None).unwrap();
        garden.advance(ms(100));
        assert!(garden.surface().message.text.starts_with("You carry"));
    }
}
