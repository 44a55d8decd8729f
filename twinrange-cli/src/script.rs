//! Event scripts — line-oriented input sequences for `twinrange replay`.
//!
//! One event per line: `<slider-id> <action> <thumb> [arg]`.
//! Actions: `drag <value>`, `type [text]`, `enter`, `blur`, `focus`, `hover`.
//! Blank lines and `#` comments are skipped.
//!
//! ```text
//! # push the low thumb into the high one
//! sample focus low
//! sample type low 60
//! sample enter low
//! ```

use anyhow::{bail, Context, Result};

use twinrange_core::{CommitResult, DoubleRangeSlider, Thumb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Drag(i64),
    Type(String),
    Enter,
    Blur,
    Focus,
    Hover,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent {
    pub line: usize,
    pub slider: String,
    pub thumb: Thumb,
    pub action: Action,
}

/// What an event did to its slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Result(CommitResult),
    Drafted { accepted: bool, draft: String },
    Unchanged,
    Marked,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Result(CommitResult::Committed(c)) => write!(f, "committed {}..{}", c.low, c.high),
            Outcome::Result(CommitResult::Rejected(r)) => write!(f, "rejected: {r}"),
            Outcome::Drafted { accepted: true, draft } => write!(f, "draft {draft:?}"),
            Outcome::Drafted { accepted: false, draft } => write!(f, "ignored, draft stays {draft:?}"),
            Outcome::Unchanged => write!(f, "unchanged"),
            Outcome::Marked => write!(f, "ok"),
        }
    }
}

/// Parse a whole script. Errors carry the 1-based line number.
pub fn parse(content: &str) -> Result<Vec<ScriptEvent>> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.split('#').next().unwrap_or("").trim();
            (!text.is_empty()).then_some((i + 1, text))
        })
        .map(|(line, text)| parse_line(line, text).with_context(|| format!("line {line}: {text}")))
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<ScriptEvent> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 3 {
        bail!("expected `<slider-id> <action> <thumb> [arg]`");
    }
    let slider = parts[0].to_string();
    let thumb = match Thumb::parse(parts[2]) {
        Some(t) => t,
        None => bail!("unknown thumb {:?} (expected low or high)", parts[2]),
    };
    let arg = parts.get(3).copied();
    if parts.len() > 4 {
        bail!("too many arguments");
    }

    let action = match parts[1] {
        "drag" => {
            let Some(value) = arg else {
                bail!("drag needs a value");
            };
            Action::Drag(value.parse().with_context(|| format!("invalid drag value {value:?}"))?)
        }
        "type" => Action::Type(arg.unwrap_or("").to_string()),
        "enter" => Action::Enter,
        "blur" => Action::Blur,
        "focus" => Action::Focus,
        "hover" => Action::Hover,
        other => bail!("unknown action {other:?}"),
    };
    if arg.is_some() && !matches!(action, Action::Drag(_) | Action::Type(_)) {
        bail!("{} takes no argument", parts[1]);
    }

    Ok(ScriptEvent {
        line,
        slider,
        thumb,
        action,
    })
}

/// Feed one event to its slider.
pub fn apply(slider: &mut DoubleRangeSlider, event: &ScriptEvent) -> Outcome {
    let thumb = event.thumb;
    match &event.action {
        Action::Drag(value) => Outcome::Result(slider.drag(thumb, *value)),
        Action::Type(text) => {
            let accepted = slider.type_text(thumb, text);
            Outcome::Drafted {
                accepted,
                draft: slider.state().draft(thumb).to_string(),
            }
        }
        Action::Enter => Outcome::Result(slider.press_enter(thumb)),
        Action::Blur => slider.blur(thumb).map_or(Outcome::Unchanged, Outcome::Result),
        Action::Focus => {
            slider.focus(thumb);
            Outcome::Marked
        }
        Action::Hover => {
            slider.hover(thumb);
            Outcome::Marked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinrange_core::SliderConfig;

    #[test]
    fn parses_all_actions() {
        let events = parse(
            "# comment\n\
             sample drag low 30\n\
             \n\
             sample type high 65   # trailing comment\n\
             sample type high\n\
             sample enter high\n\
             sample blur LOW\n\
             sample focus hi\n\
             sample hover lo\n",
        )
        .unwrap();
        assert_eq!(events.len(), 7);
        assert_eq!(events[0].line, 2);
        assert_eq!(events[0].action, Action::Drag(30));
        assert_eq!(events[1].action, Action::Type("65".into()));
        assert_eq!(events[2].action, Action::Type(String::new()));
        assert_eq!(events[4].thumb, Thumb::Low);
        assert_eq!(events[5].thumb, Thumb::High);
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse("sample drag low 1\nsample jump low\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("unknown action"), "{msg}");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse("s drag low").is_err());
        assert!(parse("s drag low x").is_err());
        assert!(parse("s enter low 5").is_err());
        assert!(parse("s enter middle").is_err());
        assert!(parse("s type low 1 2").is_err());
    }

    #[test]
    fn apply_runs_scenario() {
        let mut slider = DoubleRangeSlider::new(&SliderConfig::new("sample", 0, 80, 25, 50));
        let events = parse("sample type low 60\nsample enter low\nsample blur low\n").unwrap();

        let outcomes: Vec<String> = events.iter().map(|e| apply(&mut slider, e).to_string()).collect();
        assert_eq!(outcomes[0], "draft \"60\"");
        assert_eq!(outcomes[1], "rejected: low thumb value 60 violates separation (limit 49)");
        assert_eq!(outcomes[2], "unchanged");
        assert_eq!(slider.state().draft(Thumb::Low), "25");
    }

    #[test]
    fn lone_zero_is_ignored() {
        let mut slider = DoubleRangeSlider::new(&SliderConfig::new("sample", 0, 80, 25, 50));
        let events = parse("sample type low 0").unwrap();
        assert_eq!(apply(&mut slider, &events[0]).to_string(), "ignored, draft stays \"25\"");
    }
}
