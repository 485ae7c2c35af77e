//! Color palettes for the two themes, expressed as CSS custom properties.

use radar_core::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub bg_main: &'static str,
    pub bg_card: &'static str,
    pub bg_sidebar: &'static str,
    pub border: &'static str,
    pub border_subtle: &'static str,
    pub text_primary: &'static str,
    pub text_heading: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub link: &'static str,
    pub link_underline: &'static str,
    pub shadow: &'static str,
    pub grid_line: &'static str,
    pub grid_line_outer: &'static str,
    pub dot_stroke: &'static str,
}

pub const DARK: Palette = Palette {
    theme: Theme::Dark,
    bg_main: "#0f172a",
    bg_card: "#1e293b",
    bg_sidebar: "#111827",
    border: "#334155",
    border_subtle: "#1e293b",
    text_primary: "#e2e8f0",
    text_heading: "#f8fafc",
    text_secondary: "#94a3b8",
    text_muted: "#cbd5e1",
    link: "#38bdf8",
    link_underline: "#38bdf844",
    shadow: "rgba(0,0,0,0.5)",
    grid_line: "#334155",
    grid_line_outer: "#475569",
    dot_stroke: "#0f172a",
};

pub const LIGHT: Palette = Palette {
    theme: Theme::Light,
    bg_main: "#f8fafc",
    bg_card: "#ffffff",
    bg_sidebar: "#f1f5f9",
    border: "#cbd5e1",
    border_subtle: "#e2e8f0",
    text_primary: "#1e293b",
    text_heading: "#0f172a",
    text_secondary: "#64748b",
    text_muted: "#475569",
    link: "#0284c7",
    link_underline: "#0284c744",
    shadow: "rgba(0,0,0,0.1)",
    grid_line: "#cbd5e1",
    grid_line_outer: "#94a3b8",
    dot_stroke: "#f8fafc",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    /// `(custom property, value)` pairs in declaration order.
    pub fn variables(&self) -> [(&'static str, &'static str); 15] {
        [
            ("--bg-main", self.bg_main),
            ("--bg-card", self.bg_card),
            ("--bg-sidebar", self.bg_sidebar),
            ("--border", self.border),
            ("--border-subtle", self.border_subtle),
            ("--text-primary", self.text_primary),
            ("--text-heading", self.text_heading),
            ("--text-secondary", self.text_secondary),
            ("--text-muted", self.text_muted),
            ("--link", self.link),
            ("--link-underline", self.link_underline),
            ("--shadow", self.shadow),
            ("--grid-line", self.grid_line),
            ("--grid-line-outer", self.grid_line_outer),
            ("--dot-stroke", self.dot_stroke),
        ]
    }

    /// Value of one custom property, e.g. `"--grid-line"`.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.variables()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// A `:root { ... }` block declaring every variable.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.variables() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}
