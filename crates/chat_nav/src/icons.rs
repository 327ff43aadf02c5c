use chat_ui::IconName;
use endpoint_catalog::ModelEndpoint;

/// Catalog glyph for a built-in endpoint.
pub fn endpoint_icon_name(endpoint: ModelEndpoint) -> IconName {
    match endpoint {
        ModelEndpoint::AzureOpenAi => IconName::Azure,
        ModelEndpoint::OpenAi => IconName::OpenAi,
        ModelEndpoint::Google => IconName::Google,
        ModelEndpoint::Anthropic => IconName::Anthropic,
        ModelEndpoint::Assistants | ModelEndpoint::AzureAssistants => IconName::Assistant,
        ModelEndpoint::Agents => IconName::Agent,
        ModelEndpoint::Custom => IconName::CustomMinimal,
        ModelEndpoint::Bedrock => IconName::Bedrock,
        ModelEndpoint::ChatGptBrowser => IconName::ChatBubble,
        ModelEndpoint::GptPlugins => IconName::Plugin,
    }
}
