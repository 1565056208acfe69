use std::borrow::Cow;

/// One key hint. Keys are usually static, but the palette hotkey comes
/// from config.
pub struct FooterItem {
    pub key: Cow<'static, str>,
    pub desc: &'static str,
    pub highlighted: bool,
}

impl FooterItem {
    pub fn new(key: impl Into<Cow<'static, str>>, desc: &'static str) -> Self {
        Self {
            key: key.into(),
            desc,
            highlighted: false,
        }
    }

    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    /// Rendered width of the key and description chips.
    pub fn width(&self) -> usize {
        self.key.chars().count() + self.desc.chars().count() + 4
    }
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}
