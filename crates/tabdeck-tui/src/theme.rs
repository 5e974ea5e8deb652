use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Palette colors
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub aqua: Color,
    pub blue: Color,
    pub purple: Color,

    // Semantic colors
    pub error: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            red: Color::Rgb(0xea, 0x69, 0x62),
            orange: Color::Rgb(0xe7, 0x8a, 0x4e),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            aqua: Color::Rgb(0x89, 0xb4, 0x82),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            purple: Color::Rgb(0xd3, 0x86, 0x9b),
            error: Color::Rgb(0xea, 0x69, 0x62),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    /// Tab plate colors, cycled by tab index
    pub fn palette(&self) -> [Color; 7] {
        [
            self.blue,
            self.purple,
            self.aqua,
            self.green,
            self.yellow,
            self.orange,
            self.red,
        ]
    }

    /// Plate color of the tab at `index`
    pub fn tab_color(&self, index: usize) -> Color {
        let palette = self.palette();
        palette[index % palette.len()]
    }

    /// `color` drawn at opacity `alpha` over the screen background
    pub fn fade(&self, color: Color, alpha: f32) -> Color {
        blend(self.bg0, color, alpha)
    }
}

/// Linear mix of two RGB colors; non-RGB colors switch at half opacity
pub fn blend(under: Color, over: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (under, over) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * alpha).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if alpha >= 0.5 => over,
        _ => under,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let bg = Color::Rgb(0, 0, 0);
        let fg = Color::Rgb(200, 100, 50);
        assert_eq!(blend(bg, fg, 0.0), bg);
        assert_eq!(blend(bg, fg, 1.0), fg);
        assert_eq!(blend(bg, fg, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(bg, fg, 7.0), fg);
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Black, Color::White, 0.2), Color::Black);
        assert_eq!(blend(Color::Black, Color::White, 0.8), Color::White);
    }

    #[test]
    fn test_tab_colors_cycle() {
        let theme = Theme::default();
        assert_eq!(theme.tab_color(0), theme.blue);
        assert_eq!(theme.tab_color(7), theme.blue);
        assert_eq!(theme.tab_color(8), theme.purple);
    }
}
