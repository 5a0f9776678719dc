use std::path::Path;

use anyhow::{anyhow, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::client::HttpClient;
use crate::api::openai_compat::{CompletionEndpoint, OpenAiCompatEndpoint};
use crate::assistant::bridge::{exchange, AssistantBridge, BridgeOutcome, Exchange};
use crate::assistant::score::ContextScore;
use crate::cli::args::{IoArgs, RuntimeArgs};
use crate::config::settings::{ResolvedEndpoint, Settings};
use crate::session::store::SessionStore;
use crate::utils::format;
use crate::utils::secrets::mask_api_key;

const HELP: &str = "\
/score <0-100>  set the deepfake score given to the assistant
/score off      stop sending a score
/history        print the forensic log
/clear          empty the chat history
/save <path>    write the forensic log to a file
/help           show this list
/quit           leave the console";

/// A line typed into the interactive console.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleInput {
    Ask(String),
    SetScore(Option<ContextScore>),
    History,
    Clear,
    Save(String),
    Help,
    Quit,
    Invalid(String),
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Ask(line.to_string());
        };
        let (cmd, arg) = match rest.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (rest, ""),
        };
        match cmd {
            "score" => match arg {
                "" => Self::Invalid("usage: /score <0-100> | /score off".into()),
                "off" | "none" => Self::SetScore(None),
                value => match value.parse::<ContextScore>() {
                    Ok(score) => Self::SetScore(Some(score)),
                    Err(e) => Self::Invalid(e.to_string()),
                },
            },
            "history" | "log" => Self::History,
            "clear" => Self::Clear,
            "save" if !arg.is_empty() => Self::Save(arg.to_string()),
            "save" => Self::Invalid("usage: /save <path>".into()),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Invalid(format!("unknown command /{} (try /help)", other)),
        }
    }
}

/// Builds the production bridge. Fails when the endpoint config is incomplete.
pub fn connect(settings: &Settings, runtime: &RuntimeArgs) -> Result<AssistantBridge<OpenAiCompatEndpoint>> {
    let resolved: ResolvedEndpoint = settings.resolve_endpoint(
        runtime.provider.as_deref(),
        runtime.model.as_deref(),
        |var| std::env::var(var).ok(),
    )?;
    let http = HttpClient::new()?;
    let endpoint = OpenAiCompatEndpoint::new(
        http.client,
        &resolved.base_url,
        resolved.api_key,
        resolved.model,
        Some(resolved.temperature),
    );
    tracing::info!(
        provider = %resolved.provider,
        endpoint = endpoint.endpoint(),
        model = endpoint.model(),
        "completion endpoint ready"
    );
    Ok(AssistantBridge::new(endpoint))
}

async fn ask_with_spinner<E: CompletionEndpoint>(
    store: &mut SessionStore,
    bridge: &AssistantBridge<E>,
    line: &str,
    score: Option<ContextScore>,
) -> Option<Exchange> {
    let pb = ProgressBar::new_spinner().with_message("Consulting DeepCheck...");
    if let Ok(s) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(s);
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let result = exchange(store, bridge, line, score).await;
    pb.finish_and_clear();
    result
}

fn print_last_reply(store: &SessionStore, exchange: &Exchange) {
    if let Some(turn) = store.last() {
        if exchange.outcome.is_failure() {
            println!("{}", format::error(&format::chat_line(turn)));
        } else {
            println!("{}", format::chat_line(turn));
        }
    }
}

pub async fn handle_interactive(settings: &Settings, runtime: &RuntimeArgs) -> Result<()> {
    use dialoguer::Input;

    let bridge = connect(settings, runtime)?;
    let mut store = SessionStore::new();
    let mut score = runtime.score;

    println!("{}", style("DeepCheck console. /help for commands, /quit to exit.").cyan());
    if let Some(s) = score {
        println!("{}", format::success(&format!("Context score: {}%", s)));
    }

    loop {
        let line: String = Input::new()
            .with_prompt("Operator")
            .allow_empty(true)
            .interact_text()?;
        match ConsoleInput::parse(&line) {
            ConsoleInput::Ask(text) => {
                if let Some(done) = ask_with_spinner(&mut store, &bridge, &text, score).await {
                    print_last_reply(&store, &done);
                }
            }
            ConsoleInput::SetScore(new_score) => {
                score = new_score;
                match score {
                    Some(s) => println!("{}", format::success(&format!("Context score: {}%", s))),
                    None => println!("{}", format::warn("Context score cleared")),
                }
            }
            ConsoleInput::History => println!("{}", format::forensic_log(store.snapshot())),
            ConsoleInput::Clear => {
                store.clear();
                println!("{}", format::success("Chat history cleared"));
            }
            ConsoleInput::Save(path) => {
                match crate::utils::io::write_string(&path, &format::forensic_log(store.snapshot())) {
                    Ok(()) => println!("{}", format::success(&format!("Saved log to {}", path))),
                    Err(e) => println!("{}", format::error(&format!("{:#}", e))),
                }
            }
            ConsoleInput::Help => println!("{}", HELP),
            ConsoleInput::Quit => break,
            ConsoleInput::Invalid(msg) => println!("{}", format::warn(&msg)),
        }
    }
    Ok(())
}

pub async fn handle_ask(settings: &Settings, prompt: Option<String>, runtime: &RuntimeArgs, io: &IoArgs) -> Result<()> {
    // Prefer file input if provided
    let prompt = match (&io.input_file, &prompt) {
        (Some(path), _) => crate::utils::io::read_to_string(path)?,
        (None, Some(p)) => p.to_string(),
        _ => String::new(),
    };
    if prompt.trim().is_empty() {
        return Err(anyhow!("Prompt is empty. Provide text or use interactive mode."));
    }

    let bridge = connect(settings, runtime)?;
    let mut store = SessionStore::new();
    let Some(done) = ask_with_spinner(&mut store, &bridge, &prompt, runtime.score).await else {
        return Ok(());
    };

    if let Some(out) = &io.output_file {
        crate::utils::io::write_string(out, &format::forensic_log(store.snapshot()))?;
    }
    match &done.outcome {
        BridgeOutcome::Replied(text) => println!("{}", text),
        failed => return Err(anyhow!(failed.turn_text())),
    }
    Ok(())
}

pub fn handle_config_init(force: bool, scope: Option<&str>, explicit: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let project_root = match scope {
        Some("project") => Some(cwd.as_path()),
        _ => None,
    };
    let path = Settings::init_scoped(force, project_root, explicit)?;
    println!("{}", format::success(&format!("Wrote default config to {}", path.display())));
    Ok(())
}

pub fn handle_config_list(settings: &Settings) -> Result<()> {
    println!("provider: {}", settings.provider);
    println!("model: {}", settings.model.as_deref().unwrap_or("(provider default)"));
    println!("base_url: {}", settings.base_url.as_deref().unwrap_or("(provider default)"));
    println!("temperature: {}", settings.temperature);
    match &settings.api_key {
        Some(key) => println!("api_key: {}", mask_api_key(key)),
        None => println!("api_key: (not set, falls back to env)"),
    }
    Ok(())
}

pub fn handle_config_set(settings: &mut Settings, key: &str, value: &str, explicit: Option<&Path>) -> Result<()> {
    settings.set(key, value)?;
    settings.save(explicit)?;
    println!("{}", format::success(&format!("Updated {}", key)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(ConsoleInput::parse("is this real?"), ConsoleInput::Ask("is this real?".into()));
    }

    #[test]
    fn test_score_commands() {
        assert_eq!(
            ConsoleInput::parse("/score 12.5"),
            ConsoleInput::SetScore(Some(ContextScore::new(12.5).unwrap()))
        );
        assert_eq!(ConsoleInput::parse("/score off"), ConsoleInput::SetScore(None));
        assert!(matches!(ConsoleInput::parse("/score 101"), ConsoleInput::Invalid(_)));
        assert!(matches!(ConsoleInput::parse("/score"), ConsoleInput::Invalid(_)));
    }

    #[test]
    fn test_save_requires_path() {
        assert_eq!(ConsoleInput::parse("/save log.txt"), ConsoleInput::Save("log.txt".into()));
        assert!(matches!(ConsoleInput::parse("/save"), ConsoleInput::Invalid(_)));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(ConsoleInput::parse("/rewind"), ConsoleInput::Invalid(_)));
        assert_eq!(ConsoleInput::parse("  /quit "), ConsoleInput::Quit);
    }
}
