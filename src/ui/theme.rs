use crate::prefs::Theme;
use crate::projects::icon::ProjectIcon;
use ratatui::style::Color;

#[derive(Clone, Debug)]
pub struct ThemePalette {
    pub page_bg: Color,
    pub text: Color,
    pub dim_text: Color,
    pub accent: Color,
    pub header_bg: Color,
    pub shadow: Color,
    pub status_bg: Color,
    pub card_border: Color,
    pub selected_border: Color,
    pub tag_fg: Color,
    pub tag_bg: Color,
    pub star: Color,
    pub error_fg: Color,
    pub filter_active_fg: Color,
    pub filter_active_bg: Color,
}

pub fn palette_for(theme: Theme) -> ThemePalette {
    match theme {
        Theme::Dark => ThemePalette {
            page_bg: Color::Rgb(18, 18, 28),
            text: Color::Rgb(220, 220, 230),
            dim_text: Color::Rgb(100, 100, 120),
            accent: Color::Rgb(140, 115, 200),
            header_bg: Color::Rgb(25, 25, 38),
            shadow: Color::Rgb(55, 55, 75),
            status_bg: Color::Rgb(30, 30, 40),
            card_border: Color::Rgb(60, 60, 80),
            selected_border: Color::Rgb(120, 120, 180),
            tag_fg: Color::Rgb(170, 150, 230),
            tag_bg: Color::Rgb(40, 36, 62),
            star: Color::Yellow,
            error_fg: Color::LightRed,
            filter_active_fg: Color::Rgb(18, 18, 28),
            filter_active_bg: Color::Rgb(140, 115, 200),
        },
        Theme::Light => ThemePalette {
            page_bg: Color::Rgb(248, 248, 252),
            text: Color::Rgb(30, 30, 40),
            dim_text: Color::Rgb(120, 120, 135),
            accent: Color::Rgb(98, 70, 170),
            header_bg: Color::Rgb(236, 234, 244),
            shadow: Color::Rgb(200, 198, 212),
            status_bg: Color::Rgb(228, 226, 238),
            card_border: Color::Rgb(200, 200, 215),
            selected_border: Color::Rgb(98, 70, 170),
            tag_fg: Color::Rgb(88, 60, 160),
            tag_bg: Color::Rgb(230, 224, 248),
            star: Color::Rgb(190, 140, 0),
            error_fg: Color::Red,
            filter_active_fg: Color::Rgb(248, 248, 252),
            filter_active_bg: Color::Rgb(98, 70, 170),
        },
    }
}

/// Icon shown on the theme toggle: the theme you would switch to.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{f186}",
        Theme::Dark => "\u{f185}",
    }
}

pub fn icon_color(icon: ProjectIcon) -> Color {
    match icon {
        ProjectIcon::Shield => Color::LightRed,
        ProjectIcon::Python => Color::Rgb(55, 118, 171),
        ProjectIcon::JavaScript => Color::Rgb(240, 219, 79),
        ProjectIcon::Terminal => Color::Green,
        ProjectIcon::Php => Color::Rgb(119, 123, 180),
        ProjectIcon::Go => Color::Cyan,
        ProjectIcon::Code => Color::Gray,
    }
}
