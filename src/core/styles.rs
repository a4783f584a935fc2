//! Style roles expressed as an enum + macro mapping logical names to `colored::Color`.
//!
//! Each logical style is a variant of `StyleRole`. Colouring is applied only when
//! the `enabled` flag passed to `paint()` is true, so callers decide per output
//! channel whether ANSI codes are wanted.
//!
//! ```
//! use poetry_version::core::styles::StyleRole;
//! let plain = StyleRole::Emphasis.paint("0.1.0", false);
//! assert_eq!(plain, "0.1.0");
//! let painted = StyleRole::Emphasis.paint("0.1.0", true);
//! assert!(painted.starts_with("\x1b["));
//! assert!(painted.ends_with("\x1b[0m"));
//! ```

use clap::builder::styling::AnsiColor;
use colored::Color;

// Macro defines the enum variants and their associated colour Option.
macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }

            pub fn ansi_code(self) -> Option<String> {
                map_color_code(self.color()?)
            }

            pub fn paint(self, text: &str, enabled: bool) -> String {
                if !enabled { return text.to_string(); }
                if let Some(code) = self.ansi_code() { return format!("\x1b[{}m{}\x1b[0m", code, text); }
                text.to_string()
            }
        }
    }
}

// Roles mapped to `None` are never painted
style! {
    Header      => Some(Color::Yellow),
    Literal     => Some(Color::Cyan),
    Placeholder => Some(Color::Green),
    Valid       => Some(Color::Green),
    Invalid     => Some(Color::Red),
    Error       => Some(Color::BrightRed),
    Prefix      => Some(Color::Blue),
    Emphasis    => Some(Color::BrightWhite),
    Value       => None,
}

fn map_color_code(c: Color) -> Option<String> {
    use Color::*;
    match c {
        Black => Some("30".to_string()),
        Red => Some("31".to_string()),
        Green => Some("32".to_string()),
        Yellow => Some("33".to_string()),
        Blue => Some("34".to_string()),
        Magenta => Some("35".to_string()),
        Cyan => Some("36".to_string()),
        White => Some("37".to_string()),
        BrightBlack => Some("90".to_string()),
        BrightRed => Some("91".to_string()),
        BrightGreen => Some("92".to_string()),
        BrightYellow => Some("93".to_string()),
        BrightBlue => Some("94".to_string()),
        BrightMagenta => Some("95".to_string()),
        BrightCyan => Some("96".to_string()),
        BrightWhite => Some("97".to_string()),
        TrueColor { r, g, b } => Some(format!("38;2;{};{};{}", r, g, b)),
    }
}

fn color_to_ansi(c: Color) -> Option<AnsiColor> {
    use AnsiColor as A;
    use Color::*;
    Some(match c {
        Black => A::Black,
        Red => A::Red,
        Green => A::Green,
        Yellow => A::Yellow,
        Blue => A::Blue,
        Magenta => A::Magenta,
        Cyan => A::Cyan,
        White => A::White,
        BrightBlack => A::BrightBlack,
        BrightRed => A::BrightRed,
        BrightGreen => A::BrightGreen,
        BrightYellow => A::BrightYellow,
        BrightBlue => A::BrightBlue,
        BrightMagenta => A::BrightMagenta,
        BrightCyan => A::BrightCyan,
        BrightWhite => A::BrightWhite,
        _ => return None,
    })
}

/// Build clap Styles for help output from the role palette.
pub fn palette_to_clap(enabled: bool) -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, Style};
    if !enabled {
        return clap::builder::Styles::plain();
    }

    let style = |role: StyleRole, bold: bool| {
        let mut s = Style::new();
        if let Some(col) = role.color().and_then(color_to_ansi) {
            s = s.fg_color(Some(ClapColor::Ansi(col)));
        }
        if bold {
            s = s.bold();
        }
        s
    };

    clap::builder::Styles::styled()
        .header(style(StyleRole::Header, true))
        .literal(style(StyleRole::Literal, false))
        .placeholder(style(StyleRole::Placeholder, false))
        .valid(style(StyleRole::Valid, false))
        .invalid(style(StyleRole::Invalid, false))
        .error(style(StyleRole::Error, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_code_header() {
        assert_eq!(StyleRole::Header.ansi_code(), Some("33".to_string()));
        assert_eq!(StyleRole::Emphasis.ansi_code(), Some("97".to_string()));
    }

    #[test]
    fn paint_enabled_disabled() {
        let txt = "poetry-version";
        let colored = StyleRole::Prefix.paint(txt, true);
        assert!(colored.starts_with("\x1b[34m") && colored.ends_with("\x1b[0m"));
        assert_eq!(StyleRole::Prefix.paint(txt, false), txt);
    }

    #[test]
    fn uncoloured_role_is_never_painted() {
        assert_eq!(StyleRole::Value.ansi_code(), None);
        assert_eq!(StyleRole::Value.paint("1.0", true), "1.0");
    }

    #[test]
    fn truecolor_support() {
        let code = map_color_code(Color::TrueColor {
            r: 255,
            g: 128,
            b: 64,
        });
        assert_eq!(code, Some("38;2;255;128;64".to_string()));
    }

    #[test]
    fn palette_to_clap_differs_when_enabled() {
        let plain_dbg = format!("{:?}", palette_to_clap(false));
        let styled_dbg = format!("{:?}", palette_to_clap(true));
        assert_ne!(plain_dbg, styled_dbg);
    }
}
