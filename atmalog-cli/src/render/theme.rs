use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Slate background with a teal accent.
pub struct Lotus;

impl Lotus {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Lotus::TEXT);
        skin.bold.set_fg(Lotus::HIGHLIGHT);
        skin.italic.set_fg(Lotus::SAFFRON);

        skin.headers[0].set_fg(Lotus::TEAL);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Lotus::SAFFRON);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.headers[2].set_fg(Lotus::MUTED);

        skin.table.set_fg(Lotus::TEAL);
        skin.bullet.set_fg(Lotus::TEAL);
        skin.quote_mark.set_char('│');
        skin.quote_mark.set_fg(Lotus::TEAL);
        skin.inline_code.set_fg(Lotus::ROSE);
        skin.inline_code.set_bg(Lotus::SLATE);

        skin
    }

    pub const SLATE: Color = Color::Rgb {
        r: 0x1E,
        g: 0x29,
        b: 0x3B,
    }; // #1E293B
    pub const TEXT: Color = Color::Rgb {
        r: 0xE2,
        g: 0xE8,
        b: 0xF0,
    }; // #E2E8F0
    pub const HIGHLIGHT: Color = Color::Rgb {
        r: 0xF1,
        g: 0xF5,
        b: 0xF9,
    }; // #F1F5F9
    pub const MUTED: Color = Color::Rgb {
        r: 0x94,
        g: 0xA3,
        b: 0xB8,
    }; // #94A3B8
    pub const TEAL: Color = Color::Rgb {
        r: 0x14,
        g: 0xB8,
        b: 0xA6,
    }; // #14B8A6
    pub const SAFFRON: Color = Color::Rgb {
        r: 0xF5,
        g: 0x9E,
        b: 0x0B,
    }; // #F59E0B
    pub const ROSE: Color = Color::Rgb {
        r: 0xF8,
        g: 0x71,
        b: 0x71,
    }; // #F87171
}
