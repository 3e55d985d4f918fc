use anyhow::{Context as _, Result};

use super::Context;

/// Post the live status unless disabled or unconfigured.
pub fn notify(ctx: &Context, live: bool) -> Result<()> {
    if !ctx.hook {
        tracing::info!("live hook disabled by --no-hook");
        return Ok(());
    }

    match ctx.config.live_hook()? {
        Some(hook) => hook
            .notify(live)
            .with_context(|| format!("failed to notify {}", hook.url())),
        None => {
            tracing::warn!("PERSONAL_PAGE_API_KEY not set, skipping live hook");
            Ok(())
        }
    }
}
