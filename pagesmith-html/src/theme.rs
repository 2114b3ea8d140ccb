//! Page-shell themes: a named bundle of color, typography, and surface
//! treatment injected into the document head. Every theme shares one
//! responsive rule set; only the look changes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Modern,
    Minimal,
}

/// Mobile scaling shared by all themes: smaller headlines, tighter gutters.
const RESPONSIVE_CSS: &str = "\
@media (max-width: 768px) {
  .hero h1 { font-size: 2rem !important; }
  .text-inner, .hero, .site-header, .site-footer { padding: 0 15px; }
}";

impl Theme {
    /// Maps a theme identifier to a theme. Anything unrecognized (including
    /// an absent identifier) is the default theme; page builds never fail
    /// on a bad theme name.
    pub fn parse(name: &str) -> Theme {
        match name {
            "dark" => Theme::Dark,
            "modern" => Theme::Modern,
            "minimal" => Theme::Minimal,
            _ => Theme::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
        }
    }

    /// The full CSS block for the page shell: theme palette plus the shared
    /// responsive rules.
    pub fn css(self) -> String {
        format!("{}\n{}", self.palette_css(), RESPONSIVE_CSS)
    }

    fn palette_css(self) -> &'static str {
        match self {
            Theme::Default => {
                "\
body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background-color: #fff;
  color: #333;
}
.hero { padding: 80px 20px; text-align: center; }
.hero h1 { font-size: 3rem; margin: 0 0 24px; }
.subtitle { font-size: 1.2rem; color: #666; }
.cta, .btn { display: inline-block; padding: 16px 32px; border-radius: 8px; text-decoration: none; font-weight: 600; }
.text-section, .image-section, .button-section { padding: 40px 20px; }
.text-inner { max-width: 56rem; margin: 0 auto; }
.image-section { text-align: center; }
.image-section img { max-width: 100%; height: auto; border-radius: 8px; }
.caption { margin-top: 16px; font-style: italic; color: #666; }
.site-header { display: flex; justify-content: space-between; align-items: center; padding: 20px; border-bottom: 1px solid #e5e7eb; }
.site-header .brand { display: flex; align-items: center; }
.site-header .logo { height: 40px; margin-right: 16px; }
.site-header nav a { margin-left: 20px; color: #333; text-decoration: none; }
.site-footer { padding: 40px 20px; margin-top: 40px; text-align: center; border-top: 1px solid #e5e7eb; color: #666; }
.site-footer a { margin-right: 20px; color: #666; text-decoration: none; }"
            }
            Theme::Dark => {
                "\
body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background-color: #1a1a1a;
  color: #fff;
}
.hero { padding: 80px 20px; text-align: center; }
.hero h1 { font-size: 3rem; margin: 0 0 24px; }
.subtitle { font-size: 1.2rem; color: #aaa; }
.cta, .btn { display: inline-block; padding: 16px 32px; border-radius: 8px; text-decoration: none; font-weight: 600; }
.text-section, .image-section, .button-section { padding: 40px 20px; }
.text-inner { max-width: 56rem; margin: 0 auto; }
.image-section { text-align: center; }
.image-section img { max-width: 100%; height: auto; border-radius: 8px; }
.caption { margin-top: 16px; font-style: italic; color: #aaa; }
.site-header { display: flex; justify-content: space-between; align-items: center; padding: 20px; border-bottom: 1px solid #333; }
.site-header .brand { display: flex; align-items: center; }
.site-header .logo { height: 40px; margin-right: 16px; }
.site-header nav a { margin-left: 20px; color: #fff; text-decoration: none; }
.site-footer { padding: 40px 20px; margin-top: 40px; text-align: center; border-top: 1px solid #333; color: #aaa; }
.site-footer a { margin-right: 20px; color: #aaa; text-decoration: none; }"
            }
            Theme::Modern => {
                "\
body {
  margin: 0;
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  color: #fff;
  min-height: 100vh;
}
.hero, .text-section, .image-section, .button-section, .site-header, .site-footer {
  background: rgba(255,255,255,0.1);
  backdrop-filter: blur(10px);
  -webkit-backdrop-filter: blur(10px);
}
.hero { padding: 80px 20px; text-align: center; border-radius: 16px; margin: 20px; }
.hero h1 { font-size: 3rem; margin: 0 0 24px; }
.subtitle { font-size: 1.2rem; color: rgba(255,255,255,0.8); }
.cta, .btn { display: inline-block; padding: 16px 32px; border-radius: 8px; text-decoration: none; font-weight: 600; }
.text-section, .image-section, .button-section { padding: 40px 20px; border-radius: 16px; margin: 20px; }
.text-inner { max-width: 56rem; margin: 0 auto; }
.image-section { text-align: center; }
.image-section img { max-width: 100%; height: auto; border-radius: 8px; }
.caption { margin-top: 16px; font-style: italic; color: rgba(255,255,255,0.7); }
.site-header { display: flex; justify-content: space-between; align-items: center; padding: 20px; margin: 20px; border-radius: 16px; }
.site-header .brand { display: flex; align-items: center; }
.site-header .logo { height: 40px; margin-right: 16px; }
.site-header nav a { margin-left: 20px; color: #fff; text-decoration: none; }
.site-footer { padding: 40px 20px; margin: 40px 20px 20px; text-align: center; border-radius: 16px; color: rgba(255,255,255,0.8); }
.site-footer a { margin-right: 20px; color: rgba(255,255,255,0.8); text-decoration: none; }"
            }
            Theme::Minimal => {
                "\
body {
  margin: 0;
  font-family: Georgia, 'Times New Roman', serif;
  background-color: #fafafa;
  color: #222;
}
.hero { padding: 80px 20px; text-align: center; }
.hero h1 { font-size: 3rem; margin: 0 0 24px; font-weight: normal; }
.subtitle { font-size: 1.2rem; color: #555; }
.cta, .btn { display: inline-block; padding: 16px 32px; border-radius: 2px; text-decoration: none; }
.text-section, .image-section, .button-section { padding: 40px 20px; }
.text-inner { max-width: 48rem; margin: 0 auto; line-height: 1.7; }
.image-section { text-align: center; }
.image-section img { max-width: 100%; height: auto; }
.caption { margin-top: 16px; font-style: italic; color: #555; }
.site-header { display: flex; justify-content: space-between; align-items: center; padding: 20px; border-bottom: 1px solid #ddd; }
.site-header .brand { display: flex; align-items: center; }
.site-header .logo { height: 40px; margin-right: 16px; }
.site-header nav a { margin-left: 20px; color: #222; text-decoration: none; }
.site-footer { padding: 40px 20px; margin-top: 40px; text-align: center; border-top: 1px solid #ddd; color: #555; }
.site-footer a { margin-right: 20px; color: #555; text-decoration: none; }"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_default() {
        assert_eq!(Theme::parse("nonexistent"), Theme::Default);
        assert_eq!(Theme::parse(""), Theme::Default);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
    }

    #[test]
    fn each_theme_has_its_marker() {
        assert!(Theme::Default.css().contains("font-family: -apple-system"));
        assert!(Theme::Default.css().contains("background-color: #fff"));
        assert!(Theme::Dark.css().contains("background-color: #1a1a1a"));
        assert!(Theme::Modern.css().contains("linear-gradient"));
        assert!(Theme::Modern.css().contains("backdrop-filter: blur"));
        assert!(Theme::Modern.css().contains("rgba(255,255,255,0.1)"));
        assert!(Theme::Minimal.css().contains("Georgia"));
        assert!(Theme::Minimal.css().contains("background-color: #fafafa"));
    }

    #[test]
    fn responsive_rules_are_theme_independent() {
        for theme in [Theme::Default, Theme::Dark, Theme::Modern, Theme::Minimal] {
            let css = theme.css();
            assert!(css.contains("@media (max-width: 768px)"));
            assert!(css.contains("font-size: 2rem !important"));
            assert!(css.contains("padding: 0 15px"));
        }
    }
}
