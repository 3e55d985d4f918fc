use rust_embed::Embed;
use std::collections::HashMap;

use crate::error::{Result, StreamingError};

/// Token replaced with the minimum caption count before a template is sent.
pub const COUNT_PLACEHOLDER: &str = "%COUNT%";

const TEMPLATE_EXT: &str = ".prompt";

/// Named prompt templates.
pub trait PromptStore {
    fn load(&self, name: &str) -> Result<String>;
}

#[derive(Embed)]
#[folder = "prompts/"]
struct PromptAssets;

/// Templates compiled into the binary from `prompts/*.prompt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedPrompts;

impl PromptStore for EmbeddedPrompts {
    fn load(&self, name: &str) -> Result<String> {
        let file = <PromptAssets as Embed>::get(&format!("{name}{TEMPLATE_EXT}"))
            .ok_or_else(|| StreamingError::TemplateNotFound(name.to_string()))?;
        String::from_utf8(file.data.into_owned())
            .map_err(|_| StreamingError::TemplateEncoding(name.to_string()))
    }
}

impl PromptStore for HashMap<String, String> {
    fn load(&self, name: &str) -> Result<String> {
        self.get(name)
            .cloned()
            .ok_or_else(|| StreamingError::TemplateNotFound(name.to_string()))
    }
}

/// Replace every [`COUNT_PLACEHOLDER`] in `template` with `count`.
pub fn render(template: &str, count: usize) -> String {
    template.replace(COUNT_PLACEHOLDER, &count.to_string())
}
