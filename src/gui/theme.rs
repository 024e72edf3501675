use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::paws()
    }
}

impl Theme {
    pub fn paws() -> Self {
        Theme { dark: ThemeDetails::paws_night(), light: ThemeDetails::paws_day() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn title(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).pink).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).comment)
    }

    pub fn like(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn nope(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    pub fn pink(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).pink
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card
    }

    pub fn placeholder(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    pink: Color32,
    card: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl ThemeDetails {
    fn paws_day() -> Self {
        Self {
            background: Color32::from_rgb(0xfd, 0xf2, 0xf8), // pink-50
            foreground: Color32::from_rgb(0x37, 0x41, 0x51), // gray-700
            selection: Color32::from_rgb(0xfb, 0xcf, 0xe8),
            comment: Color32::from_rgb(0x6b, 0x72, 0x80),
            red: Color32::from_rgb(0xef, 0x44, 0x44),
            orange: Color32::from_rgb(0xf9, 0x73, 0x16),
            green: Color32::from_rgb(0x22, 0xc5, 0x5e),
            pink: Color32::from_rgb(0xdb, 0x27, 0x77),
            card: Color32::WHITE,
            background_darker: Color32::from_rgb(0xfc, 0xe7, 0xf3),
            background_dark: Color32::from_rgb(0xff, 0xf7, 0xed), // orange-50
            background_light: Color32::from_rgb(0xff, 0xed, 0xd5),
        }
    }

    fn paws_night() -> Self {
        Self {
            background: Color32::from_rgb(33, 26, 36),
            foreground: Color32::from_rgb(236, 228, 232),
            selection: Color32::from_rgb(92, 54, 78),
            comment: Color32::from_rgb(160, 150, 165),
            red: Color32::from_rgb(255, 107, 107),
            orange: Color32::from_rgb(255, 161, 90),
            green: Color32::from_rgb(86, 209, 123),
            pink: Color32::from_rgb(255, 121, 198),
            card: Color32::from_rgb(52, 44, 56),
            background_darker: Color32::from_rgb(22, 18, 25),
            background_dark: Color32::from_rgb(28, 22, 31),
            background_light: Color32::from_rgb(66, 56, 70),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.card,
                    weak_bg_fill: theme.card,
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.orange, ..default.widgets.hovered.bg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.pink, ..default.widgets.active.bg_stroke },
                    ..default.widgets.active
                },
                ..default.widgets
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.pink,
            extreme_bg_color: theme.background_darker,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
