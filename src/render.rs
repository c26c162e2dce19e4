//! Frame description and the ratatui widget that draws it
use crate::command::Setting;
use crate::consts;
use crate::game::{Phase, RoundEnd, Settings};
use crate::grid::{Pos, Size};
use crate::haus::FatalCollision;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Bomb,
    Apple,
    Portal,
    SnekBody,
    SnekHead,
}

impl EntityKind {
    fn glyph(&self) -> (&'static str, Style) {
        match self {
            EntityKind::Bomb => (consts::BOMB_SYMBOL, consts::BOMB_STYLE),
            EntityKind::Apple => (consts::APPLE_SYMBOL, consts::APPLE_STYLE),
            EntityKind::Portal => (consts::PORTAL_SYMBOL, consts::PORTAL_STYLE),
            EntityKind::SnekBody => (consts::SNEK_BODY_SYMBOL, consts::SNEK_BODY_STYLE),
            EntityKind::SnekHead => (consts::SNEK_HEAD_SYMBOL, consts::SNEK_HEAD_STYLE),
        }
    }
}

/// One fully-updated frame: enough for a renderer with no state of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Scene {
    pub(crate) phase: Phase,
    pub(crate) settings: Settings,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) size: Size,
    /// Drawn in order, later entries on top
    pub(crate) entities: Vec<(EntityKind, Pos)>,
}

impl Scene {
    fn header(&self) -> String {
        match self.phase {
            Phase::Playing | Phase::Paused => format!(
                "SNEK    High Score: {}    Score: {}",
                self.high_score, self.score
            ),
            _ => format!("SNEK    High Score: {}", self.high_score),
        }
    }

    fn menu_lines(&self, selected: Setting) -> Vec<Line<'static>> {
        let item = |setting: Setting, label: &str, value: u8| {
            let text = format!("{label}: < {value} >");
            if setting == selected {
                Line::styled(text, consts::MENU_SELECTION_STYLE)
            } else {
                Line::from(text)
            }
        };
        vec![
            Line::from("SNEK"),
            Line::from(""),
            item(Setting::Speed, "Speed", self.settings.speed),
            item(
                Setting::StartLength,
                "Start length",
                self.settings.start_length,
            ),
            Line::from(""),
            Line::from("Up/Down to choose, Left/Right to change"),
            Line::from("Press ENTER to start, ESC to quit"),
        ]
    }

    fn draw_board(&self, area: Rect, buf: &mut Buffer) {
        for &(kind, pos) in &self.entities {
            if pos.x >= self.size.width || pos.y >= self.size.height {
                continue;
            }
            let x = area.x.saturating_add(pos.x.saturating_mul(consts::CELL_WIDTH));
            let y = area.y.saturating_add(pos.y);
            if x.saturating_add(consts::CELL_WIDTH) > area.right() || y >= area.bottom() {
                continue;
            }
            let (symbol, style) = kind.glyph();
            buf.set_string(x, y, symbol, style);
        }
    }
}

fn game_over_text(final_score: u32, cause: RoundEnd) -> String {
    let reason = match cause {
        RoundEnd::Collision(FatalCollision::Hazard) => "You hit a bomb",
        RoundEnd::Collision(FatalCollision::Body) => "You bit yourself",
        RoundEnd::BoardFull => "The board is full",
    };
    format!("GAME OVER\n{reason}\nFinal Score: {final_score}\nPress ENTER for the menu")
}

impl Widget for &Scene {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, game_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.header())
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL))
            .render(header_area, buf);

        let title = match self.phase {
            Phase::Playing => "Playing",
            Phase::Paused => "Paused. Press SPACE to continue",
            _ => "",
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner_area = block.inner(game_area);
        block.render(game_area, buf);

        match self.phase {
            Phase::Menu { selected } => {
                Paragraph::new(self.menu_lines(selected))
                    .alignment(Alignment::Center)
                    .render(inner_area, buf);
            }
            Phase::Playing | Phase::Paused => self.draw_board(inner_area, buf),
            Phase::GameOver { final_score, cause } => {
                self.draw_board(inner_area, buf);
                Paragraph::new(game_over_text(final_score, cause))
                    .alignment(Alignment::Center)
                    .render(inner_area, buf);
            }
            Phase::Exit => {}
        }
    }
}
