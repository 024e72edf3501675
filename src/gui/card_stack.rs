use eframe::egui::{
    self,
    Align2,
    Color32,
    FontId,
    Pos2,
    Rect,
    Sense,
    Stroke,
    Ui,
    Vec2,
};

use crate::{
    core::{
        Card,
        CardVisuals,
        Direction,
        GestureOutcome,
        GestureTracker,
        PointerEvent,
    },
    gui::theme::Theme,
};

const MAX_CARD_WIDTH: f32 = 420.0;
const CARD_ASPECT: f32 = 3.0 / 4.0;
const CARD_INSET: f32 = 6.0;
const BEHIND_OPACITY: f32 = 0.5;

/// Largest 3:4 card that fits `available`, capped at [`MAX_CARD_WIDTH`].
pub fn card_size(available: Vec2) -> Vec2 {
    let width = available.x.min(MAX_CARD_WIDTH).min(available.y * CARD_ASPECT).max(0.0);
    Vec2::new(width, width / CARD_ASPECT)
}

/// Corners of `rect` rotated by `angle` radians around its centre, clockwise order.
pub fn rotated_quad(rect: Rect, angle: f32) -> Vec<Pos2> {
    let center = rect.center();
    let rot = egui::emath::Rot2::from_angle(angle);
    [rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()]
        .into_iter()
        .map(|corner| center + rot * (corner - center))
        .collect()
}

pub struct CardStack<'a> {
    cards: &'a [Card],
    theme: &'a Theme,
}

impl<'a> CardStack<'a> {
    pub fn new(cards: &'a [Card], theme: &'a Theme) -> Self {
        Self { cards, theme }
    }

    /// Draws the visible cards and feeds pointer input on the top one into `tracker`.
    ///
    /// Returns the direction of a drag that crossed the swipe threshold this frame.
    pub fn show(self, ui: &mut Ui, tracker: &mut GestureTracker) -> Option<Direction> {
        let size = card_size(ui.available_size());
        let (area, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let base_rect = Rect::from_center_size(area.center(), size);
        let now = ui.input(|i| i.time);

        let Some((top, behind)) = self.cards.split_first() else {
            return None;
        };

        if let Some(next) = behind.first() {
            self.paint_card(ui, next, base_rect, &resting(BEHIND_OPACITY), None);
        }

        tracker.track_card(&top.id, true);
        let swiped = self.handle_pointer(ui, top, base_rect, tracker, now);

        let visuals = tracker.visuals(now);
        self.paint_card(ui, top, base_rect, &visuals, Some(&mut *tracker));

        if visuals.dragging || tracker.is_animating(now) || !tracker.image_loaded() {
            ui.ctx().request_repaint();
        }

        swiped
    }

    fn handle_pointer(
        &self,
        ui: &mut Ui,
        card: &Card,
        base_rect: Rect,
        tracker: &mut GestureTracker,
        now: f64,
    ) -> Option<Direction> {
        let response = ui.interact(base_rect, ui.id().with(("swipe_card", &card.id)), Sense::drag());
        let (press_origin, latest) = ui.input(|i| (i.pointer.press_origin(), i.pointer.latest_pos()));

        let mut events = Vec::new();

        if response.drag_started() {
            if let Some(origin) = press_origin.or(latest) {
                events.push(PointerEvent::Down(origin.x));
            }
        }

        if tracker.is_dragging() || response.drag_started() {
            match latest {
                Some(pos) if response.dragged() => {
                    events.push(PointerEvent::Move(pos.x));

                    let offset = pos.x - press_origin.map_or(pos.x, |o| o.x);
                    if !base_rect.translate(Vec2::new(offset, 0.0)).contains(pos) {
                        events.push(PointerEvent::Leave);
                    }
                }
                None => events.push(PointerEvent::Leave),
                _ => {}
            }
        }

        if response.drag_stopped() {
            events.push(PointerEvent::Up);
        }

        let mut swiped = None;
        for event in events {
            if let GestureOutcome::Swiped(direction) = tracker.handle(event, now) {
                swiped = Some(direction);
            }
        }

        if response.hovered() && !tracker.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        } else if tracker.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        swiped
    }

    fn paint_card(
        &self,
        ui: &mut Ui,
        card: &Card,
        base_rect: Rect,
        visuals: &CardVisuals,
        tracker: Option<&mut GestureTracker>,
    ) {
        let ctx = ui.ctx().clone();
        let rect = base_rect.translate(Vec2::new(visuals.offset_x, 0.0));
        let angle = visuals.rotation_rad();
        let opacity = visuals.opacity;

        ui.painter().add(egui::Shape::convex_polygon(
            rotated_quad(rect, angle),
            self.theme.card_fill(&ctx).gamma_multiply(opacity),
            Stroke::NONE,
        ));

        let image_rect = rect.shrink(CARD_INSET);
        let image = egui::Image::new(card.image_url.as_str())
            .rotate(angle, Vec2::splat(0.5))
            .tint(Color32::WHITE.gamma_multiply(opacity));

        let ready = matches!(
            image.load_for_size(&ctx, image_rect.size()),
            Ok(egui::load::TexturePoll::Ready { .. })
        );

        if ready {
            if let Some(tracker) = tracker {
                tracker.mark_image_loaded();
            }
            image.paint_at(ui, image_rect);
        } else {
            ui.painter().add(egui::Shape::convex_polygon(
                rotated_quad(image_rect, angle),
                self.theme.placeholder(&ctx).gamma_multiply(opacity),
                Stroke::NONE,
            ));
            let spinner_rect = Rect::from_center_size(image_rect.center(), Vec2::splat(48.0));
            egui::Spinner::new().color(self.theme.orange(&ctx)).paint_at(ui, spinner_rect);
        }

        if visuals.like_badge > 0.0 {
            self.paint_badge(ui, rect, "LIKE", self.theme.like(&ctx), visuals.like_badge, true);
        }
        if visuals.nope_badge > 0.0 {
            self.paint_badge(ui, rect, "NOPE", self.theme.nope(&ctx), visuals.nope_badge, false);
        }
    }

    fn paint_badge(&self, ui: &Ui, card: Rect, text: &str, color: Color32, alpha: f32, left: bool) {
        let painter = ui.painter();
        let color = color.gamma_multiply(alpha);
        let (anchor, pos) = if left {
            (Align2::LEFT_TOP, card.left_top() + Vec2::new(36.0, 36.0))
        } else {
            (Align2::RIGHT_TOP, card.right_top() + Vec2::new(-36.0, 36.0))
        };

        let text_rect = painter.text(pos, anchor, text, FontId::proportional(40.0), color);
        painter.rect_stroke(
            text_rect.expand(10.0),
            egui::CornerRadius::same(12),
            Stroke::new(4.0, color),
            egui::StrokeKind::Outside,
        );
    }
}

fn resting(opacity: f32) -> CardVisuals {
    CardVisuals {
        offset_x: 0.0,
        rotation_deg: 0.0,
        opacity,
        like_badge: 0.0,
        nope_badge: 0.0,
        dragging: false,
    }
}
