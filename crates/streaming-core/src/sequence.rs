use openai_chat::ChatBackend;

use crate::acquire::CaptionAcquirer;
use crate::error::Result;
use crate::pacing::{Clock, Pacer, ProgressSink};
use crate::templates::{self, PromptStore};
use crate::types::PromptRequest;

/// Binds a template store, a chat backend and a pacer into one runnable
/// countdown.
pub struct SequenceRunner<'a> {
    prompts: &'a dyn PromptStore,
    chat: &'a dyn ChatBackend,
    pacer: Pacer,
}

impl<'a> SequenceRunner<'a> {
    pub fn new(prompts: &'a dyn PromptStore, chat: &'a dyn ChatBackend, pacer: Pacer) -> Self {
        Self {
            prompts,
            chat,
            pacer,
        }
    }

    /// Load the request's template and fill in the caption count.
    pub fn prepare(&self, request: &PromptRequest) -> Result<String> {
        let template = self.prompts.load(request.template_name())?;
        Ok(templates::render(&template, request.required_items()))
    }

    /// Acquire captions for `request`, then play them over its duration.
    pub fn run(
        &self,
        request: &PromptRequest,
        sink: &mut dyn ProgressSink,
        clock: &mut dyn Clock,
    ) -> Result<()> {
        let prompt = self.prepare(request)?;
        tracing::info!(
            template = request.template_name(),
            duration_seconds = request.duration_seconds(),
            min_items = request.required_items(),
            "requesting captions"
        );

        let captions =
            CaptionAcquirer::new(self.chat).acquire(&prompt, request.required_items())?;

        self.pacer
            .run(&captions, request.duration_seconds(), sink, clock)?;
        tracing::info!(template = request.template_name(), "sequence finished");
        Ok(())
    }
}
