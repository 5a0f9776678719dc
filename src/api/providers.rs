use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Groq,
    OpenRouter,
    OpenAI,
    /// Any OpenAI-compatible server; needs `base_url` in the config
    Custom,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenRouter => "openrouter",
            Self::OpenAI => "openai",
            Self::Custom => "custom",
        }
    }

    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Self::Groq => Some("https://api.groq.com/openai/v1"),
            Self::OpenRouter => Some("https://openrouter.ai/api/v1"),
            Self::OpenAI => Some("https://api.openai.com/v1"),
            Self::Custom => None,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Groq | Self::Custom => "llama-3.3-70b-versatile",
            Self::OpenRouter => "meta-llama/llama-3.3-70b-instruct",
            Self::OpenAI => "gpt-4o-mini",
        }
    }

    /// Environment variable consulted when the config carries no key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Custom => "DEEPCHECK_API_KEY",
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "openrouter" => Ok(Self::OpenRouter),
            "openai" => Ok(Self::OpenAI),
            "custom" => Ok(Self::Custom),
            other => Err(anyhow!(
                "Unknown provider '{}' (expected groq, openrouter, openai or custom)",
                other
            )),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
