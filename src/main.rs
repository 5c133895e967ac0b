use std::collections::HashMap;
use std::io::{BufRead, Write};

use quizbooth::config::SessionConfig;
use quizbooth::fetch::OpenTdbClient;
use quizbooth::session::SessionController;
use quizbooth::view::TerminalView;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizbooth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting quizbooth...");

    let config = SessionConfig::from_env();
    let source = OpenTdbClient::new(config.api_url.clone(), config.question_count);
    let view = TerminalView::new();

    let mut session = SessionController::new(config, Box::new(source), Box::new(view));

    let remembered = match session.startup().await {
        Ok(name) => name,
        Err(e) => {
            tracing::error!("Failed to start session: {}", e);
            return;
        }
    };

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_username = remembered;

    // One iteration per player; the session itself never terminates, only
    // EOF on stdin ends the process.
    loop {
        let prompt = if last_username.is_empty() {
            "Player name: ".to_string()
        } else {
            format!("Player name [{}]: ", last_username)
        };
        let username = match read_line(&mut lines, &prompt) {
            Some(input) if input.trim().is_empty() => last_username.clone(),
            Some(input) => input.trim().to_string(),
            None => break,
        };

        let mut selections = HashMap::new();
        let blocks = session.rendered_questions().to_vec();
        for (index, block) in blocks.iter().enumerate() {
            let prompt = format!("Answer {} (a-d, blank to skip): ", index + 1);
            match read_line(&mut lines, &prompt) {
                Some(input) => {
                    if let Some(option) = parse_choice(&input, block.options.len()) {
                        selections.insert(index, block.options[option].text.clone());
                    }
                }
                None => return,
            }
        }

        match session.submit(&username, &selections).await {
            Ok(Some(entry)) => {
                println!("{} scored {} points!", entry.username, entry.score);
                last_username = entry.username;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Submission failed: {}", e);
                break;
            }
        }
    }
}

/// Prompt and read one trimmed line; None on EOF
fn read_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    prompt: &str,
) -> Option<String> {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    lines.next()?.ok()
}

/// Map an answer letter ("a".."d", case-insensitive) to an option index
fn parse_choice(input: &str, option_count: usize) -> Option<usize> {
    let c = input.trim().to_lowercase().chars().next()?;
    let index = (c as usize).checked_sub('a' as usize)?;
    (index < option_count).then_some(index)
}
