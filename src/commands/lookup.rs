use crate::commands::render::{render_json, render_state, LOADING_TEXT, TITLE};
use crate::services::kick_service::ChannelSource;
use crate::services::lookup_service::{LookupState, LookupWidget};
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const QUIT_COMMANDS: [&str; 3] = [":q", "quit", "exit"];

#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub json: bool,
    pub default_avatar_url: String,
}

/// Submit `username` through the widget and write the outcome.
/// Returns the final state so the caller can pick an exit code.
pub async fn lookup_once<S, W>(
    widget: &LookupWidget<S>,
    username: &str,
    options: &OutputOptions,
    out: &mut W,
) -> Result<LookupState>
where
    S: ChannelSource,
    W: Write,
{
    widget.set_input(username);

    if widget.can_submit() && !options.json {
        writeln!(out, "{}", LOADING_TEXT)?;
        out.flush()?;
    }

    let state = widget.submit().await;
    write_state(&state, options, out)?;
    Ok(state)
}

fn write_state<W: Write>(state: &LookupState, options: &OutputOptions, out: &mut W) -> Result<()> {
    if options.json {
        let value = render_json(state, &options.default_avatar_url);
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&value).context("Failed to encode JSON output")?
        )?;
    } else {
        writeln!(out, "{}", render_state(state, &options.default_avatar_url))?;
    }
    out.flush()?;
    Ok(())
}

/// Prompt loop: every line is a lookup until EOF or a quit command.
pub async fn run_interactive<S, R, W>(
    widget: &LookupWidget<S>,
    input: R,
    options: &OutputOptions,
    out: &mut W,
) -> Result<()>
where
    S: ChannelSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if !options.json {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", render_state(&widget.state(), &options.default_avatar_url))?;
    }

    let mut lines = input.lines();
    loop {
        if !options.json {
            write!(out, "{} > ", widget.submit_label())?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            debug!("[Lookup] Input closed");
            break;
        };

        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        lookup_once(widget, &line, options, out).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::channel::ChannelResponse;
    use crate::models::error::LookupError;
    use crate::models::profile::DEFAULT_AVATAR_URL;
    use futures::future::BoxFuture;
    use serde_json::json;

    struct StaticSource;

    impl ChannelSource for StaticSource {
        fn fetch_channel<'a>(
            &'a self,
            username: &'a str,
        ) -> BoxFuture<'a, Result<ChannelResponse, LookupError>> {
            Box::pin(async move {
                match username {
                    "loochy" => serde_json::from_value(json!({
                        "user": { "username": "loochy", "bio": "hi" },
                        "followers_count": 2048,
                        "livestream": { "is_live": true }
                    }))
                    .map_err(LookupError::from),
                    _ => Err(LookupError::HttpError(404)),
                }
            })
        }
    }

    fn text_options() -> OutputOptions {
        OutputOptions {
            json: false,
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_once_text() {
        let widget = LookupWidget::new(StaticSource);
        let mut out = Vec::new();

        let state = lookup_once(&widget, "loochy", &text_options(), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(matches!(state, LookupState::Success { .. }));
        assert!(text.starts_with(LOADING_TEXT));
        assert!(text.contains("Followers: 2,048"));
        assert!(text.contains("Viewers:   0"));
    }

    #[tokio::test]
    async fn test_lookup_once_empty_skips_loading_line() {
        let widget = LookupWidget::new(StaticSource);
        let mut out = Vec::new();

        lookup_once(&widget, "  ", &text_options(), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains(LOADING_TEXT));
        assert_eq!(text.trim(), LookupError::EmptyInput.to_string());
    }

    #[tokio::test]
    async fn test_lookup_once_json_error() {
        let widget = LookupWidget::new(StaticSource);
        let mut out = Vec::new();
        let options = OutputOptions {
            json: true,
            ..text_options()
        };

        lookup_once(&widget, "ghost", &options, &mut out).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert!(value["error"].as_str().unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_interactive_session() {
        let widget = LookupWidget::new(StaticSource);
        let mut out = Vec::new();
        let input: &[u8] = b"loochy\n\nghost\n:q\nloochy\n";

        run_interactive(&widget, input, &text_options(), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(TITLE));
        assert!(text.contains(crate::commands::render::IDLE_HINT));
        assert_eq!(text.matches("Followers: 2,048").count(), 1);
        assert!(text.contains(&LookupError::EmptyInput.to_string()));
        assert!(text.contains("status 404"));
    }
}
