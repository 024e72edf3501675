//! Drag tracking for the topmost card.
//!
//! A [`GestureTracker`] turns a pointer drag into a discrete [`Direction`] and
//! describes how the card should be drawn while that happens. It knows nothing
//! about the session; the caller forwards a resolved swipe to
//! [`Session::decide`](super::Session::decide).

use tracing::debug;

use super::Direction;
use crate::settings::GestureSettings;

/// How far a swiped card travels before it is considered off-screen.
pub const FLING_DISTANCE: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(f32),
    Move(f32),
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored,
    Started,
    Moved,
    Swiped(Direction),
    SnappedBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub origin_x: f32,
    pub offset_x: f32,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Settle {
    from: f32,
    to: f32,
    started_at: f64,
}

/// Everything the view needs to paint one card for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisuals {
    pub offset_x: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub like_badge: f32,
    pub nope_badge: f32,
    pub dragging: bool,
}

impl CardVisuals {
    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    settings: GestureSettings,
    card_id: Option<String>,
    is_top: bool,
    drag: DragState,
    settle: Option<Settle>,
    swiped: Option<Direction>,
    image_loaded: bool,
}

impl GestureTracker {
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            card_id: None,
            is_top: false,
            drag: DragState::default(),
            settle: None,
            swiped: None,
            image_loaded: false,
        }
    }

    /// Points the tracker at the card currently drawn on top of the stack.
    ///
    /// A different id starts from scratch: idle, centred, image not loaded.
    pub fn track_card(&mut self, card_id: &str, is_top: bool) {
        if self.card_id.as_deref() != Some(card_id) {
            debug!(card = card_id, "Tracking new card");
            self.card_id = Some(card_id.to_string());
            self.drag = DragState::default();
            self.settle = None;
            self.swiped = None;
            self.image_loaded = false;
        }
        self.is_top = is_top;
    }

    /// Forgets the tracked card so the next [`track_card`](Self::track_card)
    /// starts fresh even if the id repeats.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
    }

    pub fn card_id(&self) -> Option<&str> {
        self.card_id.as_deref()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn swiped(&self) -> Option<Direction> {
        self.swiped
    }

    pub fn image_loaded(&self) -> bool {
        self.image_loaded
    }

    pub fn mark_image_loaded(&mut self) {
        self.image_loaded = true;
    }

    pub fn handle(&mut self, event: PointerEvent, now: f64) -> GestureOutcome {
        match event {
            PointerEvent::Down(x) => self.pointer_down(x),
            PointerEvent::Move(x) => self.pointer_move(x),
            PointerEvent::Up => self.pointer_up(now),
            PointerEvent::Leave => self.pointer_leave(now),
        }
    }

    pub fn pointer_down(&mut self, x: f32) -> GestureOutcome {
        if !self.is_top || self.drag.active || self.swiped.is_some() {
            return GestureOutcome::Ignored;
        }

        self.drag = DragState { origin_x: x, offset_x: 0.0, active: true };
        self.settle = None;
        GestureOutcome::Started
    }

    pub fn pointer_move(&mut self, x: f32) -> GestureOutcome {
        if !self.is_top || !self.drag.active {
            return GestureOutcome::Ignored;
        }

        self.drag.offset_x = x - self.drag.origin_x;
        GestureOutcome::Moved
    }

    pub fn pointer_up(&mut self, now: f64) -> GestureOutcome {
        if !self.drag.active {
            return GestureOutcome::Ignored;
        }

        let released_at = self.drag.offset_x;
        self.drag.active = false;

        if released_at.abs() > self.settings.swipe_threshold {
            let direction = Direction::from_offset(released_at);
            self.swiped = Some(direction);
            self.settle = Some(Settle {
                from: released_at,
                to: direction.sign() * FLING_DISTANCE,
                started_at: now,
            });
            debug!(offset = released_at, direction = direction.label(), "Swipe resolved");
            GestureOutcome::Swiped(direction)
        } else {
            self.drag.offset_x = 0.0;
            self.settle = Some(Settle { from: released_at, to: 0.0, started_at: now });
            GestureOutcome::SnappedBack
        }
    }

    /// The pointer leaving the card ends the drag exactly like a release.
    pub fn pointer_leave(&mut self, now: f64) -> GestureOutcome {
        self.pointer_up(now)
    }

    /// Flings the card off-screen without a drag, used by the like/dislike buttons.
    pub fn fling(&mut self, direction: Direction, now: f64) {
        if self.swiped.is_some() {
            return;
        }
        let from = self.displayed_offset(now);
        self.drag = DragState::default();
        self.swiped = Some(direction);
        self.settle = Some(Settle { from, to: direction.sign() * FLING_DISTANCE, started_at: now });
    }

    /// Horizontal offset to draw at `now`: the raw drag while dragging, otherwise
    /// an ease-out from the release point to the resting position.
    pub fn displayed_offset(&self, now: f64) -> f32 {
        if self.drag.active {
            return self.drag.offset_x;
        }

        match self.settle {
            Some(settle) => {
                let duration = f64::from(self.settings.settle_secs.max(0.0));
                let t = if duration == 0.0 {
                    1.0
                } else {
                    ((now - settle.started_at) / duration).clamp(0.0, 1.0) as f32
                };
                settle.from + (settle.to - settle.from) * ease_out_cubic(t)
            }
            None => 0.0,
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        match self.settle {
            Some(settle) if !self.drag.active => {
                now - settle.started_at < f64::from(self.settings.settle_secs)
            }
            _ => false,
        }
    }

    pub fn visuals(&self, now: f64) -> CardVisuals {
        let offset_x = self.displayed_offset(now);
        let dragging = self.drag.active;

        let (like_badge, nope_badge) = if dragging {
            let strength = self.badge_strength(offset_x.abs());
            if offset_x > 0.0 {
                (strength, 0.0)
            } else {
                (0.0, strength)
            }
        } else {
            (0.0, 0.0)
        };

        CardVisuals {
            offset_x,
            rotation_deg: offset_x * self.settings.rotation_factor,
            opacity: self.opacity_for(offset_x),
            like_badge,
            nope_badge,
            dragging,
        }
    }

    /// Linear fade to zero at `fade_distance`, never below zero.
    pub fn opacity_for(&self, offset_x: f32) -> f32 {
        if self.settings.fade_distance <= 0.0 {
            return 1.0;
        }
        (1.0 - offset_x.abs() / self.settings.fade_distance).clamp(0.0, 1.0)
    }

    fn badge_strength(&self, distance: f32) -> f32 {
        let GestureSettings { badge_threshold, swipe_threshold, .. } = self.settings;
        if distance <= badge_threshold {
            return 0.0;
        }
        let ramp = swipe_threshold - badge_threshold;
        if ramp <= 0.0 {
            return 1.0;
        }
        ((distance - badge_threshold) / ramp).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_tracker(card: &str) -> GestureTracker {
        let mut tracker = GestureTracker::new(GestureSettings::default());
        tracker.track_card(card, true);
        tracker
    }

    fn drag_to(tracker: &mut GestureTracker, offset: f32) {
        tracker.handle(PointerEvent::Down(200.0), 0.0);
        tracker.handle(PointerEvent::Move(200.0 + offset), 0.0);
    }

    #[test]
    fn drag_past_threshold_swipes_right() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 150.0);
        assert_eq!(tracker.handle(PointerEvent::Up, 1.0), GestureOutcome::Swiped(Direction::Right));
        assert_eq!(tracker.swiped(), Some(Direction::Right));
    }

    #[test]
    fn drag_past_threshold_swipes_left() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, -101.0);
        assert_eq!(tracker.handle(PointerEvent::Up, 1.0), GestureOutcome::Swiped(Direction::Left));
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, -40.0);
        assert_eq!(tracker.handle(PointerEvent::Up, 1.0), GestureOutcome::SnappedBack);
        assert_eq!(tracker.drag().offset_x, 0.0);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.swiped(), None);
    }

    #[test]
    fn exactly_threshold_snaps_back() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 100.0);
        assert_eq!(tracker.handle(PointerEvent::Up, 0.0), GestureOutcome::SnappedBack);
    }

    #[test]
    fn leave_resolves_like_release() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 180.0);
        assert_eq!(
            tracker.handle(PointerEvent::Leave, 0.0),
            GestureOutcome::Swiped(Direction::Right)
        );

        let mut tracker = top_tracker("b");
        drag_to(&mut tracker, 20.0);
        assert_eq!(tracker.handle(PointerEvent::Leave, 0.0), GestureOutcome::SnappedBack);
    }

    #[test]
    fn offset_tracks_pointer_from_origin() {
        let mut tracker = top_tracker("a");
        tracker.pointer_down(50.0);
        tracker.pointer_move(80.0);
        tracker.pointer_move(20.0);
        assert_eq!(tracker.drag().offset_x, -30.0);
        assert_eq!(tracker.drag().origin_x, 50.0);
    }

    #[test]
    fn moves_after_release_are_dropped() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 30.0);
        tracker.handle(PointerEvent::Up, 0.0);

        assert_eq!(tracker.handle(PointerEvent::Move(900.0), 0.0), GestureOutcome::Ignored);
        assert_eq!(tracker.handle(PointerEvent::Up, 0.0), GestureOutcome::Ignored);
        assert_eq!(tracker.drag().offset_x, 0.0);
    }

    #[test]
    fn card_behind_is_inert() {
        let mut tracker = GestureTracker::new(GestureSettings::default());
        tracker.track_card("behind", false);

        assert_eq!(tracker.handle(PointerEvent::Down(0.0), 0.0), GestureOutcome::Ignored);
        assert_eq!(tracker.handle(PointerEvent::Move(200.0), 0.0), GestureOutcome::Ignored);
        assert_eq!(tracker.handle(PointerEvent::Up, 0.0), GestureOutcome::Ignored);
    }

    #[test]
    fn swiped_card_ignores_new_drags() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 150.0);
        tracker.handle(PointerEvent::Up, 0.0);

        assert_eq!(tracker.handle(PointerEvent::Down(0.0), 0.0), GestureOutcome::Ignored);
    }

    #[test]
    fn new_card_resets_state() {
        let mut tracker = top_tracker("a");
        tracker.mark_image_loaded();
        drag_to(&mut tracker, 150.0);
        tracker.handle(PointerEvent::Up, 0.0);

        tracker.track_card("a", true);
        assert!(tracker.image_loaded());
        assert_eq!(tracker.swiped(), Some(Direction::Right));

        tracker.track_card("b", true);
        assert_eq!(tracker.card_id(), Some("b"));
        assert!(!tracker.image_loaded());
        assert_eq!(tracker.swiped(), None);
        assert_eq!(tracker.drag(), DragState::default());
        assert_eq!(tracker.visuals(0.0).offset_x, 0.0);
    }

    #[test]
    fn repeated_id_after_reset_starts_fresh() {
        let mut tracker = top_tracker("abc");
        tracker.mark_image_loaded();
        drag_to(&mut tracker, 150.0);
        tracker.handle(PointerEvent::Up, 0.0);
        assert_eq!(tracker.swiped(), Some(Direction::Right));

        tracker.reset();
        assert_eq!(tracker.card_id(), None);
        tracker.track_card("abc", true);

        assert_eq!(tracker.swiped(), None);
        assert!(!tracker.image_loaded());
        let visuals = tracker.visuals(0.0);
        assert_eq!(visuals.offset_x, 0.0);
        assert_eq!(visuals.opacity, 1.0);
        assert_eq!(tracker.handle(PointerEvent::Down(10.0), 0.0), GestureOutcome::Started);
    }

    #[test]
    fn visual_mapping_follows_drag() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 150.0);

        let visuals = tracker.visuals(0.0);
        assert!(visuals.dragging);
        assert_eq!(visuals.offset_x, 150.0);
        assert!((visuals.rotation_deg - 15.0).abs() < 1e-4);
        assert!((visuals.opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn opacity_is_clamped_at_zero() {
        let tracker = top_tracker("a");
        assert_eq!(tracker.opacity_for(450.0), 0.0);
        assert_eq!(tracker.opacity_for(-300.0), 0.0);
        assert_eq!(tracker.opacity_for(0.0), 1.0);
    }

    #[test]
    fn badges_are_exclusive_and_ramp() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 40.0);
        let visuals = tracker.visuals(0.0);
        assert_eq!((visuals.like_badge, visuals.nope_badge), (0.0, 0.0));

        tracker.pointer_move(200.0 + 75.0);
        let visuals = tracker.visuals(0.0);
        assert!((visuals.like_badge - 0.5).abs() < 1e-4);
        assert_eq!(visuals.nope_badge, 0.0);

        tracker.pointer_move(200.0 - 250.0);
        let visuals = tracker.visuals(0.0);
        assert_eq!(visuals.like_badge, 0.0);
        assert_eq!(visuals.nope_badge, 1.0);
    }

    #[test]
    fn badges_hidden_once_released() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 150.0);
        tracker.pointer_up(0.0);
        let visuals = tracker.visuals(0.0);
        assert_eq!((visuals.like_badge, visuals.nope_badge), (0.0, 0.0));
    }

    #[test]
    fn snap_back_eases_to_centre() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, 80.0);
        tracker.pointer_up(10.0);

        assert_eq!(tracker.displayed_offset(10.0), 80.0);
        let midway = tracker.displayed_offset(10.15);
        assert!(midway > 0.0 && midway < 40.0, "ease-out should pass halfway early: {midway}");
        assert_eq!(tracker.displayed_offset(10.31), 0.0);
        assert!(tracker.is_animating(10.1));
        assert!(!tracker.is_animating(10.4));
    }

    #[test]
    fn swipe_eases_off_screen() {
        let mut tracker = top_tracker("a");
        drag_to(&mut tracker, -120.0);
        tracker.pointer_up(0.0);

        assert_eq!(tracker.displayed_offset(1.0), -FLING_DISTANCE);
        assert_eq!(tracker.visuals(1.0).opacity, 0.0);
    }

    #[test]
    fn fling_from_button_leaves_screen() {
        let mut tracker = top_tracker("a");
        tracker.fling(Direction::Right, 0.0);

        assert_eq!(tracker.swiped(), Some(Direction::Right));
        assert_eq!(tracker.displayed_offset(0.0), 0.0);
        assert_eq!(tracker.displayed_offset(0.5), FLING_DISTANCE);
        assert_eq!(tracker.handle(PointerEvent::Down(0.0), 0.5), GestureOutcome::Ignored);
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
