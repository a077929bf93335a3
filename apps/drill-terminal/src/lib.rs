pub mod config;
pub mod display;
pub mod input;
pub mod words;

use std::time::Duration;

use anyhow::Context;
use drill_core::{
    matching, Choices, ExerciseSpec, RngSource, Session, SessionPhase, SessionReport, SystemTime,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::input::{parse_line, Command};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("Loading words from {}", config.words_path.display());
    let all_words = words::load_words(&config.words_path)?;
    let pool = words::select_pool(&all_words, &config.criteria)?;
    tracing::info!("Drilling {} of {} words", pool.len(), all_words.len());

    let mut session = match config.seed {
        Some(seed) => Session::new(pool, config.session, RngSource::seeded(seed), SystemTime),
        None => Session::with_system_sources(pool, config.session),
    }
    .context("failed to start session")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if session.phase() == SessionPhase::Review {
        println!("Words in this session:\n{}", display::review_list(session.words()));
        println!("\nPress Enter to start ({} minutes).", session.config().duration_minutes);
        if lines.next_line().await?.is_none() {
            let report = session.end_session()?;
            println!("{}", display::summary(&report));
            return Ok(());
        }
        session.begin_exercises()?;
    }

    let report = drill(&mut session, &mut lines).await?;
    println!("\n{}", display::summary(&report));
    Ok(())
}

/// Exercise currently on screen, with its options if any.
struct Shown {
    spec: ExerciseSpec,
    choices: Option<Choices>,
}

fn show_current(session: &Session) -> Option<Shown> {
    let spec = session.current()?.clone();
    let choices = session.current_choices().cloned();

    println!(
        "\n[{}] {}",
        display::format_remaining(session.remaining_seconds()),
        display::prompt(&spec)
    );
    if let Some(choices) = &choices {
        println!("{}", display::render_choices(choices));
    }
    Some(Shown { spec, choices })
}

/// Map a command to a correctness verdict for the shown exercise.
/// `None` means the input was not a usable answer.
fn verdict(shown: &Shown, command: &Command) -> Option<bool> {
    match (&shown.choices, command) {
        (Some(choices), Command::Choice(number)) => {
            (*number <= choices.options.len()).then(|| choices.is_correct(number - 1))
        }
        (Some(choices), Command::Text(text)) => choices
            .options
            .iter()
            .position(|option| matching::equals(option, text))
            .map(|index| choices.is_correct(index)),
        _ => None,
    }
}

async fn drill(
    session: &mut Session,
    lines: &mut Lines<BufReader<Stdin>>,
) -> anyhow::Result<SessionReport> {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;

    let mut shown = show_current(session);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(report) = session.tick() {
                    return Ok(report);
                }
                let remaining = session.remaining_seconds();
                if remaining == 10 {
                    println!("10 seconds left!");
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(session.end_session()?);
                };
                let Some(command) = parse_line(&line) else {
                    continue;
                };
                let Some(current) = shown.as_ref() else {
                    return Ok(session.end_session()?);
                };

                let outcome = match &command {
                    Command::Quit => return Ok(session.end_session()?),
                    Command::Pause => {
                        if session.pause() {
                            println!("Paused. Type :r to resume.");
                        }
                        continue;
                    }
                    Command::Resume => {
                        if session.resume() {
                            println!("Resumed.");
                        }
                        continue;
                    }
                    Command::Skip => session.skip()?,
                    Command::Text(text) if current.choices.is_none() => session.answer_typed(text)?,
                    Command::Choice(number) if current.choices.is_none() => {
                        session.answer_typed(&number.to_string())?
                    }
                    _ => match verdict(current, &command) {
                        Some(is_correct) => session.answer(is_correct)?,
                        None => {
                            println!("Pick one of the numbered options, or :s to skip.");
                            continue;
                        }
                    },
                };

                println!("{}", display::feedback(&current.spec, &outcome));
                let stats = session.statistics();
                tracing::debug!(total = stats.total, accuracy = stats.accuracy, "live statistics");
                shown = show_current(session);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::{ExerciseKind, ManualTime, ReviewMode, SessionConfig};

    fn shown_choice() -> Shown {
        let words = words::parse_words(include_str!("../data/sample_words.json")).unwrap();
        let config = SessionConfig::new(1, vec![ExerciseKind::GenderChoice])
            .with_review(ReviewMode::Skip);
        let session =
            Session::new(words, config, RngSource::seeded(5), ManualTime::default()).unwrap();
        let spec = session.current().unwrap().clone();
        let choices = session.current_choices().cloned();
        Shown { spec, choices }
    }

    #[test]
    fn numbered_choice_verdict() {
        let shown = shown_choice();
        let correct = shown.choices.as_ref().unwrap().correct_index + 1;
        assert_eq!(verdict(&shown, &Command::Choice(correct)), Some(true));
        assert_eq!(verdict(&shown, &Command::Choice(99)), None);
    }

    #[test]
    fn typed_option_text_verdict() {
        let shown = shown_choice();
        let answer = shown.spec.word.gender.as_str().to_uppercase();
        assert_eq!(verdict(&shown, &Command::Text(answer)), Some(true));
        assert_eq!(verdict(&shown, &Command::Text("plural".to_string())), None);
    }
}
