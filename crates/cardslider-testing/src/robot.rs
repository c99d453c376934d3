//! Robot-style driver for headless slider tests.
//!
//! [`SliderRobot`] plays the host's part: it owns a layout manager and a
//! [`RecordingProvider`], feeds drag ticks the way a touch handler would,
//! releases with a velocity, and pumps fixed-length animation frames until
//! the slider comes to rest.
//!
//! # Example
//!
//! ```
//! use cardslider_layout::SliderConfig;
//! use cardslider_testing::SliderRobot;
//!
//! let mut robot = SliderRobot::new(12, SliderConfig::new(50, 150, 12.0), 600.0)
//!     .expect("valid configuration");
//!
//! robot.drag_and_release(-40, 0.0);
//! assert_eq!(robot.active(), Some(0));
//! ```

use cardslider_animation::FlingCalculator;
use cardslider_layout::{
    CardProvider, CardSliderLayoutManager, CardSnapHelper, ConfigError, LayoutPass, SavedState,
    SliderConfig,
};
use web_time::Duration;

use crate::provider::{RecordedCard, RecordingProvider};

/// 60 Hz.
pub const FRAME: Duration = Duration::from_millis(16);

/// Upper bound on frames pumped by a single call before the robot gives up.
pub const MAX_PUMPED_FRAMES: usize = 2_000;

/// Number of ticks a drag gesture is split into.
const DRAG_STEPS: i32 = 10;

/// Headless host for one slider.
pub struct SliderRobot {
    manager: CardSliderLayoutManager<RecordedCard>,
    provider: RecordingProvider,
    snap: CardSnapHelper,
    fling: FlingCalculator,
}

impl SliderRobot {
    /// Builds a slider over `count` items and runs the first layout pass.
    pub fn new(count: usize, config: SliderConfig, viewport_width: f32) -> Result<Self, ConfigError> {
        let mut manager = CardSliderLayoutManager::new(config)?;
        manager.set_viewport_width(viewport_width);

        let mut robot = Self {
            manager,
            provider: RecordingProvider::new(count),
            snap: CardSnapHelper::new(),
            fling: FlingCalculator::default(),
        };
        robot.layout();
        Ok(robot)
    }

    pub fn manager(&self) -> &CardSliderLayoutManager<RecordedCard> {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut CardSliderLayoutManager<RecordedCard> {
        &mut self.manager
    }

    pub fn provider(&self) -> &RecordingProvider {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut RecordingProvider {
        &mut self.provider
    }

    pub fn active(&self) -> Option<usize> {
        self.manager.active_card_position()
    }

    /// `(index, left)` of every attached card.
    pub fn lefts(&self) -> Vec<(usize, i32)> {
        self.manager
            .slots()
            .iter()
            .map(|slot| (slot.index(), slot.left()))
            .collect()
    }

    pub fn left_of(&self, index: usize) -> Option<i32> {
        self.manager.find_slot(index).map(|slot| slot.left())
    }

    pub fn layout(&mut self) {
        self.manager
            .on_layout_children(&mut self.provider, LayoutPass::Layout);
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.manager.set_viewport_width(width);
        self.layout();
    }

    /// Moves the finger by `dx` without lifting it. Positive `dx` pulls the
    /// content left. Returns the delta the slider consumed.
    pub fn drag_by(&mut self, dx: i32) -> i32 {
        let mut consumed = 0;
        for step in 0..DRAG_STEPS {
            // Spread the remainder over the first ticks.
            let tick = dx / DRAG_STEPS + i32::from(step < (dx % DRAG_STEPS).abs()) * dx.signum();
            if tick != 0 {
                consumed += self
                    .manager
                    .scroll_horizontally_by(tick, &mut self.provider);
            }
        }
        consumed
    }

    /// Lifts the finger with `velocity_x` px/s. A fast release is handed to
    /// the snap helper; a slow one runs as a free fling. Either way the
    /// slider is pumped until it is at rest.
    pub fn release(&mut self, velocity_x: f32) {
        if self
            .snap
            .on_fling(&mut self.manager, &self.provider, velocity_x, 0.0)
        {
            self.pump_frames();
        } else {
            self.free_fling(velocity_x);
        }
        self.settle();
    }

    pub fn drag_and_release(&mut self, dx: i32, velocity_x: f32) -> i32 {
        let consumed = self.drag_by(dx);
        self.release(velocity_x);
        consumed
    }

    /// Runs the idle snap until it no longer starts an animation.
    pub fn settle(&mut self) {
        while self.snap.on_scroll_idle(&mut self.manager) {
            self.pump_frames();
        }
    }

    /// Advances the running animation until it finishes. Returns the number
    /// of frames pumped.
    pub fn pump_frames(&mut self) -> usize {
        let mut frames = 0;
        while self.manager.is_smooth_scrolling() {
            self.manager.on_animation_frame(FRAME, &mut self.provider);
            frames += 1;
            assert!(frames < MAX_PUMPED_FRAMES, "animation did not finish");
        }
        frames
    }

    pub fn scroll_to(&mut self, position: usize) {
        self.manager.scroll_to_position(position, &mut self.provider);
    }

    pub fn smooth_scroll_to(&mut self, position: usize) -> usize {
        self.manager
            .smooth_scroll_to_position(position, &self.provider);
        self.pump_frames()
    }

    /// Removes `[start, start + count)` the way a host with item animations
    /// does: a pre-layout pass, the removal notification, then a layout pass.
    pub fn remove_items(&mut self, start: usize, count: usize) {
        let removed: Vec<usize> = self
            .manager
            .slots()
            .iter()
            .map(|slot| slot.index())
            .filter(|index| (start..start.saturating_add(count)).contains(index))
            .collect();

        self.provider.remove_items(start, count);
        self.manager.on_layout_children(
            &mut self.provider,
            LayoutPass::PreLayout { removed: &removed },
        );
        self.manager
            .on_items_removed(start, count, &mut self.provider);
        self.layout();
    }

    /// Swaps the collection for a fresh one of `count` items.
    pub fn replace_items(&mut self, count: usize) {
        self.manager.on_adapter_changed(&mut self.provider);
        assert_eq!(self.provider.live_count(), 0, "cards left attached after swap");

        self.provider = RecordingProvider::new(count);
        self.layout();
    }

    pub fn save_state(&self) -> SavedState {
        self.manager.save_state()
    }

    fn free_fling(&mut self, velocity_x: f32) {
        let info = self.fling.fling_info(velocity_x);
        let mut elapsed = Duration::ZERO;
        let mut travelled = 0;

        while !info.is_finished(elapsed) {
            elapsed += FRAME;
            let target = info.position(elapsed).round() as i32;
            let dx = target - travelled;
            if dx == 0 {
                continue;
            }

            let consumed = self.manager.scroll_horizontally_by(dx, &mut self.provider);
            if consumed == 0 {
                log::trace!("free fling hit an edge after {travelled}px");
                break;
            }
            travelled += consumed;
        }
    }
}

impl std::fmt::Debug for SliderRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderRobot")
            .field("items", &self.provider.item_count())
            .field("active", &self.active())
            .field("lefts", &self.lefts())
            .finish()
    }
}
