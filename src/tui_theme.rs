// bubble-tabbar/src/tui_theme.rs
use ratatui::style::Color;

pub const DISABLED_ICON_DEFAULT: Color = Color::Gray;
pub const BUBBLE_DEFAULT: Color = Color::Yellow;
pub const SELECTED_TEXT_DEFAULT: Color = Color::Black;
pub const SELECTED_ICON_DEFAULT: Color = Color::Black;
pub const BUBBLE_ALPHA_DEFAULT: f32 = 0.15;
pub const BAR_BG_DEFAULT: Color = Color::Reset;

pub const TEXT_FG: Color = Color::White;
pub const HINT_FG: Color = Color::Rgb(70, 70, 70);
pub const BORDER_DEFAULT: Color = Color::Rgb(100, 100, 100);
pub const BORDER_FOCUSED: Color = Color::Yellow;

/// Rounded caps drawn at both ends of a bubble when its corner radius is non-zero.
pub const CAP_LEFT: &str = "\u{e0b6}";
pub const CAP_RIGHT: &str = "\u{e0b4}";

// Backdrop assumed when the bar background is `Reset`, i.e. an ordinary dark terminal.
const TERMINAL_BG: (u8, u8, u8) = (0, 0, 0);

/// Approximate RGB value of a terminal color.
///
/// Named colors follow the xterm defaults; indexed colors outside the first
/// sixteen go through the 6x6x6 cube and the grayscale ramp.
pub fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Reset => return None,
        Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(i) => return indexed_to_rgb(i),
    };
    Some(rgb)
}

fn indexed_to_rgb(index: u8) -> Option<(u8, u8, u8)> {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    match index {
        0..=15 => None,
        16..=231 => {
            let i = index - 16;
            Some((
                LEVELS[(i / 36) as usize],
                LEVELS[((i / 6) % 6) as usize],
                LEVELS[(i % 6) as usize],
            ))
        }
        _ => {
            let v = 8 + (index - 232) * 10;
            Some((v, v, v))
        }
    }
}

/// Mix `fg` over `bg` with the given opacity (clamped to `0.0..=1.0`).
///
/// Colors without a known RGB value fall back to `fg` unchanged so the
/// bubble stays visible.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let Some((fr, fg_g, fb)) = to_rgb(fg) else {
        return fg;
    };
    let (br, bg_g, bb) = to_rgb(bg).unwrap_or(TERMINAL_BG);
    let mix = |f: u8, b: u8| (f as f32 * alpha + b as f32 * (1.0 - alpha)).round() as u8;
    Color::Rgb(mix(fr, br), mix(fg_g, bg_g), mix(fb, bb))
}
