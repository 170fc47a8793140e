use grove_core::transcript::Transcript;
use grove_core::{Exchange, ExchangeBuilder, ExchangeReport};
use grove_model::{ModelProvider, ModelProviderError};

use crate::tools::*;

const SYSTEM_PROMPT: &str = include_str!("./system_prompt.md");

/// A field assistant for palm oil plantations.
///
/// The assistant holds a fully configured exchange: the survey tools
/// are declared and the system instructions are set. Feed it one survey
/// report per call; each call is one independent exchange.
pub struct FieldAssistant {
    exchange: Exchange,
}

impl FieldAssistant {
    /// Creates an assistant backed by the given model provider.
    ///
    /// Credentials are part of the provider's configuration; this type
    /// never reads the environment.
    pub fn with_model_provider<M: ModelProvider + 'static>(
        provider: M,
    ) -> Self {
        let exchange = ExchangeBuilder::with_model_provider(provider)
            .with_tool(VisitLocationsTool::new())
            .with_tool(ResetGpsLocationTool::new())
            .build();
        Self { exchange }
    }

    /// Asks the model to plan treatment for the surveyed locations.
    #[inline]
    pub async fn plan(
        &self,
        survey: &str,
    ) -> Result<ExchangeReport, Box<dyn ModelProviderError>> {
        let transcript =
            Transcript::new().system(SYSTEM_PROMPT.trim()).user(survey);
        self.exchange.run(transcript).await
    }
}
