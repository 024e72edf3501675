use std::sync::Arc;

use eframe::egui::{
    self,
    RichText,
};
use tracing::{
    debug,
    info,
};

use super::{
    card_stack::CardStack,
    error_panel::show_fetch_error,
    loading_overlay::LoadingOverlay,
    summary::show_summary,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Direction,
        GestureTracker,
        Session,
        SessionPhase,
    },
    settings::SwipeSettings,
    source::ImageSource,
};

const BUTTON_SIZE: f32 = 80.0;

pub struct SwipeApp {
    // Configuration
    settings: SwipeSettings,

    // Session state
    session: Session,
    tracker: GestureTracker,

    // UI State
    theme: Theme,
    loading_overlay: LoadingOverlay,

    // External Services
    source: Arc<dyn ImageSource>,
    task_manager: TaskManager,
}

impl SwipeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: SwipeSettings,
        source: Arc<dyn ImageSource>,
        task_manager: TaskManager,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::paws();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        let mut app = Self {
            session: Session::from_settings(&settings),
            tracker: GestureTracker::new(settings.gesture.clone()),
            theme,
            loading_overlay: LoadingOverlay::new(),
            source,
            task_manager: task_manager.with_repaint(cc.egui_ctx.clone()),
            settings,
        };

        app.start_session();
        app
    }

    fn start_session(&mut self) {
        if self.task_manager.has_pending_settle() {
            debug!(generation = self.session.generation(), "Dropping pending settle");
        }
        self.task_manager.cancel_pending();
        self.tracker.reset();
        let request = if self.session.generation() == 0 {
            self.session.start()
        } else {
            self.session.restart()
        };
        self.loading_overlay
            .set_message(format!("Loading {} cats from {}...", request.count, self.source.name()));
        self.task_manager.fetch_batch(request, self.source.clone(), self.settings.fetch_timeout());
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task_type = result.task_type(), generation = result.generation(), "Task result");

        match result {
            TaskResult::BatchLoaded { generation, result } => {
                self.session.batch_loaded(generation, result);
            }
            TaskResult::SettleElapsed { generation } => {
                self.session.settle_elapsed(generation);
            }
        }
    }

    fn decide(&mut self, direction: Direction) {
        if let Some(settle) = self.session.decide(direction) {
            self.task_manager.schedule_settle(settle);
        }
    }

    /// Like/dislike buttons and arrow keys: the same decision a finished swipe makes.
    fn decide_from_button(&mut self, direction: Direction, now: f64) {
        if self.session.phase() != &SessionPhase::Browsing
            || self.session.is_settling()
            || self.session.current_card().is_none()
        {
            return;
        }
        info!(card = ?self.tracker.card_id(), direction = direction.label(), "Button decision");
        self.tracker.fling(direction, now);
        self.decide(direction);
    }

    fn show_browsing(&mut self, ctx: &egui::Context) {
        let (position, total) = self.session.position();
        let mut button_choice = None;

        egui::TopBottomPanel::top("header").show_separator_line(false).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(self.theme.title(ctx, "Paws&Preference").size(40.0));
                ui.label(RichText::new(format!("{} / {}", position, total)).strong());
                ui.add_space(4.0);
            });
        });

        egui::TopBottomPanel::bottom("controls").show_separator_line(false).show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("← Swipe to dislike").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new("Swipe to like →").strong());
                });
            });
            ui.add_space(12.0);

            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    let spacing = 32.0;
                    let width = BUTTON_SIZE * 2.0 + spacing;
                    ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
                    ui.spacing_mut().item_spacing.x = spacing;

                    let dislike = egui::Button::new(RichText::new("😿").size(36.0))
                        .fill(self.theme.card_fill(ctx))
                        .corner_radius(egui::CornerRadius::same((BUTTON_SIZE / 2.0) as u8))
                        .min_size(egui::Vec2::splat(BUTTON_SIZE));
                    if ui.add(dislike).on_hover_text("Dislike").clicked() {
                        button_choice = Some(Direction::Left);
                    }

                    let like = egui::Button::new(RichText::new("❤").size(36.0).color(egui::Color32::WHITE))
                        .fill(self.theme.pink(ctx))
                        .corner_radius(egui::CornerRadius::same((BUTTON_SIZE / 2.0) as u8))
                        .min_size(egui::Vec2::splat(BUTTON_SIZE));
                    if ui.add(like).on_hover_text("Like").clicked() {
                        button_choice = Some(Direction::Right);
                    }
                });
            });
            ui.add_space(16.0);
        });

        let swiped = egui::CentralPanel::default()
            .show(ctx, |ui| {
                CardStack::new(self.session.visible_cards(), &self.theme).show(ui, &mut self.tracker)
            })
            .inner;

        let key_choice = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Direction::Left)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(Direction::Right)
            } else {
                None
            }
        });

        if let Some(direction) = swiped {
            info!(direction = direction.label(), "Swipe decision");
            self.decide(direction);
        } else if let Some(direction) = button_choice.or(key_choice) {
            let now = ctx.input(|i| i.time);
            self.decide_from_button(direction, now);
        }
    }
}

impl eframe::App for SwipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        match self.session.phase().clone() {
            SessionPhase::Loading => {
                self.loading_overlay.show(ctx, &self.theme);
            }
            SessionPhase::Failed { message } => {
                if show_fetch_error(ctx, &self.theme, &message) {
                    self.start_session();
                }
            }
            SessionPhase::Browsing => {
                self.show_browsing(ctx);
            }
            SessionPhase::Summary => {
                let restart = show_summary(
                    ctx,
                    &self.theme,
                    self.session.liked(),
                    self.session.total(),
                );
                if restart {
                    self.start_session();
                }
            }
        }
    }
}
