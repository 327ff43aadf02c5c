//! Built-in provider endpoints and well-known custom providers.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Provider endpoints the chat server understands natively.
pub enum ModelEndpoint {
    /// Azure-hosted OpenAI deployments.
    AzureOpenAi,
    /// OpenAI chat completions.
    OpenAi,
    /// Google Gemini / Vertex.
    Google,
    /// Anthropic Claude.
    Anthropic,
    /// OpenAI assistants.
    Assistants,
    /// Azure-hosted assistants.
    AzureAssistants,
    /// Server-side agents.
    Agents,
    /// User-configured OpenAI-compatible endpoint.
    Custom,
    /// AWS Bedrock.
    Bedrock,
    /// Legacy browser-session ChatGPT.
    ChatGptBrowser,
    /// Legacy plugins endpoint.
    GptPlugins,
}

impl ModelEndpoint {
    /// Every built-in endpoint in declaration order.
    pub const ALL: [Self; 11] = [
        Self::AzureOpenAi,
        Self::OpenAi,
        Self::Google,
        Self::Anthropic,
        Self::Assistants,
        Self::AzureAssistants,
        Self::Agents,
        Self::Custom,
        Self::Bedrock,
        Self::ChatGptBrowser,
        Self::GptPlugins,
    ];

    /// Canonical wire identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AzureOpenAi => "azureOpenAI",
            Self::OpenAi => "openAI",
            Self::Google => "google",
            Self::Anthropic => "anthropic",
            Self::Assistants => "assistants",
            Self::AzureAssistants => "azureAssistants",
            Self::Agents => "agents",
            Self::Custom => "custom",
            Self::Bedrock => "bedrock",
            Self::ChatGptBrowser => "chatGPTBrowser",
            Self::GptPlugins => "gptPlugins",
        }
    }

    /// Parses a wire identifier. Matching is exact, as the server emits it.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|endpoint| endpoint.as_str() == raw)
    }
}

impl fmt::Display for ModelEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelEndpoint {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw).ok_or_else(|| format!("unknown model endpoint `{raw}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Custom providers that ship with a bundled logo.
pub enum KnownEndpoint {
    /// Mistral AI.
    Mistral,
    /// OpenRouter.
    OpenRouter,
    /// Groq.
    Groq,
    /// Anyscale.
    Anyscale,
    /// Fireworks.
    Fireworks,
    /// Ollama.
    Ollama,
    /// Perplexity.
    Perplexity,
    /// Together AI.
    TogetherAi,
    /// Cohere.
    Cohere,
    /// ShuttleAI.
    ShuttleAi,
    /// APIpie.
    Apipie,
    /// Unify.
    Unify,
    /// xAI.
    Xai,
    /// DeepSeek.
    DeepSeek,
    /// Hugging Face.
    HuggingFace,
}

impl KnownEndpoint {
    const ALL: [Self; 15] = [
        Self::Mistral,
        Self::OpenRouter,
        Self::Groq,
        Self::Anyscale,
        Self::Fireworks,
        Self::Ollama,
        Self::Perplexity,
        Self::TogetherAi,
        Self::Cohere,
        Self::ShuttleAi,
        Self::Apipie,
        Self::Unify,
        Self::Xai,
        Self::DeepSeek,
        Self::HuggingFace,
    ];

    /// Lower-case provider name used in endpoint configuration keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mistral => "mistral",
            Self::OpenRouter => "openrouter",
            Self::Groq => "groq",
            Self::Anyscale => "anyscale",
            Self::Fireworks => "fireworks",
            Self::Ollama => "ollama",
            Self::Perplexity => "perplexity",
            Self::TogetherAi => "together.ai",
            Self::Cohere => "cohere",
            Self::ShuttleAi => "shuttleai",
            Self::Apipie => "apipie",
            Self::Unify => "unify",
            Self::Xai => "xai",
            Self::DeepSeek => "deepseek",
            Self::HuggingFace => "huggingface",
        }
    }

    /// Site-relative path of the bundled logo.
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Mistral => "/assets/mistral.png",
            Self::OpenRouter => "/assets/openrouter.png",
            Self::Groq => "/assets/groq.png",
            Self::Anyscale => "/assets/anyscale.png",
            Self::Fireworks => "/assets/fireworks.png",
            Self::Ollama => "/assets/ollama.png",
            Self::Perplexity => "/assets/perplexity.png",
            Self::TogetherAi => "/assets/together.png",
            Self::Cohere => "/assets/cohere.png",
            Self::ShuttleAi => "/assets/shuttleai.png",
            Self::Apipie => "/assets/apipie.png",
            Self::Unify => "/assets/unify.png",
            Self::Xai => "/assets/xai.png",
            Self::DeepSeek => "/assets/deepseek.png",
            Self::HuggingFace => "/assets/huggingface.png",
        }
    }

    /// Case-insensitive lookup by endpoint name.
    pub fn lookup(endpoint: &str) -> Option<Self> {
        let lowered = endpoint.to_ascii_lowercase();
        Self::ALL.into_iter().find(|known| known.name() == lowered)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn model_endpoint_parse_is_exact() {
        assert_eq!(ModelEndpoint::parse("openAI"), Some(ModelEndpoint::OpenAi));
        assert_eq!(
            ModelEndpoint::parse("chatGPTBrowser"),
            Some(ModelEndpoint::ChatGptBrowser)
        );
        assert_eq!(ModelEndpoint::parse("openai"), None);
        assert_eq!(ModelEndpoint::parse(""), None);
    }

    #[test]
    fn every_model_endpoint_round_trips_through_display() {
        for endpoint in ModelEndpoint::ALL {
            assert_eq!(endpoint.to_string().parse::<ModelEndpoint>(), Ok(endpoint));
        }
    }

    #[test]
    fn known_endpoint_lookup_ignores_case() {
        assert_eq!(KnownEndpoint::lookup("Mistral"), Some(KnownEndpoint::Mistral));
        assert_eq!(
            KnownEndpoint::lookup("Together.AI"),
            Some(KnownEndpoint::TogetherAi)
        );
        assert_eq!(KnownEndpoint::lookup("my-proxy"), None);
        assert_eq!(KnownEndpoint::Groq.asset_path(), "/assets/groq.png");
    }
}
