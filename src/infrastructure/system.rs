use crate::domain::effects::EffectRunner;
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;

/// Effects against the real desktop: the platform URL opener and the
/// terminal's OSC 52 clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEffects;

impl EffectRunner for SystemEffects {
    fn open_url(&self, url: &str) -> Result<()> {
        // Waits for the launcher, which hands off to the browser and exits
        open::that(url).with_context(|| format!("opening {url}"))?;
        tracing::info!(%url, "handed link to the platform opener");
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        write_osc52(&mut stdout, text).context("writing clipboard sequence")?;
        tracing::info!(bytes = text.len(), "copied to clipboard via OSC 52");
        Ok(())
    }
}

/// Writes `text` as an OSC 52 "set clipboard" sequence.
pub fn write_osc52<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        let mut out = Vec::new();
        write_osc52(&mut out, "jane@example.com").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b]52;c;amFuZUBleGFtcGxlLmNvbQ==\x07"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_open_url_waits_for_launcher() {
        use std::os::unix::fs::PermissionsExt;

        // Stand-in xdg-open that records its argument
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("opened");
        let launcher = dir.path().join("xdg-open");
        std::fs::write(
            &launcher,
            format!("#!/bin/sh\nprintf '%s' \"$1\" > '{}'\n", record.display()),
        )
        .unwrap();
        std::fs::set_permissions(&launcher, std::fs::Permissions::from_mode(0o755)).unwrap();

        let old_path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![dir.path().to_path_buf()];
        paths.extend(std::env::split_paths(&old_path));
        std::env::set_var("PATH", std::env::join_paths(paths).unwrap());

        let effects: &dyn EffectRunner = &SystemEffects;
        let result = effects.open_url("https://example.com");
        std::env::set_var("PATH", old_path);

        result.unwrap();
        // The launcher has already run to completion when open_url returns
        assert_eq!(
            std::fs::read_to_string(&record).unwrap(),
            "https://example.com"
        );
    }
}
