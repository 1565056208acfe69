use anyhow::Result;

/// Side effects a palette command can trigger outside of the app state.
///
/// Both calls are synchronous: the dispatcher needs the outcome before it
/// decides whether to close the palette.
#[cfg_attr(test, mockall::automock)]
pub trait EffectRunner: Send + Sync {
    // Hand a URL to the platform opener
    fn open_url(&self, url: &str) -> Result<()>;

    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}
