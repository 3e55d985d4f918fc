use anyhow::{Context as _, Result};
use openai_chat::ChatClient;
use streaming_core::{
    pacing::{Pacer, SystemClock},
    sequence::SequenceRunner,
    templates::EmbeddedPrompts,
    types::{Phase, PromptRequest},
};

use super::{hook, Context};
use crate::render::TerminalBar;

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run one countdown phase end to end.
///
/// Configuration problems are reported before anything touches the network;
/// the live hook (start/stop only) fires before captions are requested.
pub fn run(ctx: &Context, phase: Phase, seconds: Option<u64>) -> Result<()> {
    let duration = seconds
        .or(phase.fixed_duration())
        .with_context(|| format!("'{phase}' needs a duration in seconds"))?;
    let request = PromptRequest::for_phase(phase, duration)?;

    let client = ChatClient::new(ctx.config.client_config()?)
        .context("failed to build chat client")?;

    if let Some(live) = phase.live_status() {
        hook::notify(ctx, live)?;
    }

    tracing::info!(%phase, duration, model = client.model(), "running sequence");

    let prompts = EmbeddedPrompts;
    let runner = SequenceRunner::new(&prompts, &client, Pacer::new(ctx.config.tick));
    let mut bar = TerminalBar::new(std::io::stdout(), phase.title());
    runner
        .run(&request, &mut bar, &mut SystemClock)
        .with_context(|| format!("'{phase}' sequence failed"))?;

    Ok(())
}
