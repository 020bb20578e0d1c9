use std::cell::OnceCell;
use std::fmt;

use docs_fmt::{StyleConfig, TermRenderer, Theme};

/// Turns a markdown result block into terminal text.
pub trait Stylist {
    fn style(&self, markdown: &str) -> Result<String, fmt::Error>;
}

impl Stylist for TermRenderer {
    fn style(&self, markdown: &str) -> Result<String, fmt::Error> {
        self.render(markdown)
    }
}

/// Builds its renderer on first use, so runs that print nothing styled never
/// query the terminal background.
#[derive(Debug, Default)]
pub struct TermStylist {
    theme: Theme,
    renderer: OnceCell<TermRenderer>,
}

impl TermStylist {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            renderer: OnceCell::new(),
        }
    }
}

impl Stylist for TermStylist {
    fn style(&self, markdown: &str) -> Result<String, fmt::Error> {
        self.renderer
            .get_or_init(|| TermRenderer::new(StyleConfig::no_wrap(self.theme)))
            .render(markdown)
    }
}
