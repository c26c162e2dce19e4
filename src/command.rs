use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A menu setting that can be nudged up or down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Setting {
    Speed,
    StartLength,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Cancel,
    TogglePause,
    AdjustSetting(Setting, i8),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        if ev.kind != KeyEventKind::Press {
            return None;
        }
        if ev.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(ev.code, KeyCode::Char('c')).then_some(Command::Cancel);
        }
        match ev.code {
            KeyCode::Up | KeyCode::Char('w') => Some(Command::MoveUp),
            KeyCode::Down | KeyCode::Char('s') => Some(Command::MoveDown),
            KeyCode::Left | KeyCode::Char('a') => Some(Command::MoveLeft),
            KeyCode::Right | KeyCode::Char('d') => Some(Command::MoveRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Cancel),
            KeyCode::Char('p') => Some(Command::TogglePause),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                Some(Command::AdjustSetting(Setting::Speed, 1))
            }
            KeyCode::Char('-') => Some(Command::AdjustSetting(Setting::Speed, -1)),
            KeyCode::Char(']') => Some(Command::AdjustSetting(Setting::StartLength, 1)),
            KeyCode::Char('[') => Some(Command::AdjustSetting(Setting::StartLength, -1)),
            _ => None,
        }
    }
}
