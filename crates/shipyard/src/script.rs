//! Input scripts: one event per line, `#` starts a comment.

use anyhow::{anyhow, Result};
use shipyard_edit::InputEvent;

pub fn parse(text: &str) -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((code, _)) => code,
            None => line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let event = line.parse::<InputEvent>().map_err(|err| anyhow!("line {}: {err}", number + 1))?;
        events.push(event);
    }
    Ok(events)
}
