//! Assorted constants & hard-coded configuration
use crate::grid::Size;
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default arena: an 800x800 window cut into 40px cells
pub(crate) const DEFAULT_GRID_SIZE: Size = Size {
    width: 20,
    height: 20,
};

/// Smallest arena either axis may be configured to
pub(crate) const MIN_GRID_EXTENT: u16 = 4;

pub(crate) const DEFAULT_LOG_FILE: &str = "portal-snek.log";

/// Where a fresh snake is laid down
pub(crate) const SNEK_START_POS: (u16, u16) = (1, 1);

/// One bomb per this many snake segments
pub(crate) const SEGMENTS_PER_BOMB: usize = 5;

/// Lowest body index the head is tested against for self-collision
pub(crate) const SELF_COLLISION_START_INDEX: usize = 4;

/// Rejection sampling gives up after this many candidates
pub(crate) const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Upper bound (inclusive) of the per-tick portal activation roll
pub(crate) const PORTAL_ROLL_MAX: u32 = 100;

/// Portals open once `roll + ticks_since_close` exceeds this
pub(crate) const PORTAL_ACTIVATION_CUTOFF: u32 = 120;

/// Inclusive range of ticks a freshly opened portal pair stays open
pub(crate) const PORTAL_OPEN_TICKS_MIN: u32 = 30;
pub(crate) const PORTAL_OPEN_TICKS_MAX: u32 = 60;

pub(crate) const MIN_SPEED: u8 = 1;
pub(crate) const MAX_SPEED: u8 = 10;
pub(crate) const DEFAULT_SPEED: u8 = 5;

pub(crate) const MIN_START_LENGTH: u8 = 1;
pub(crate) const MAX_START_LENGTH: u8 = 10;
pub(crate) const DEFAULT_START_LENGTH: u8 = 2;

/// Tick delay at speed 1
pub(crate) const SLOWEST_TICK: Duration = Duration::from_millis(250);

/// How much each speed step above 1 shaves off the tick delay
pub(crate) const TICK_STEP: Duration = Duration::from_millis(20);

// Each grid cell is drawn this many terminal columns wide so the arena looks square
pub(crate) const CELL_WIDTH: u16 = 2;

// Glyphs are CELL_WIDTH columns wide
pub(crate) const SNEK_HEAD_SYMBOL: &str = "██";
pub(crate) const SNEK_BODY_SYMBOL: &str = "▓▓";
pub(crate) const APPLE_SYMBOL: &str = "()";
pub(crate) const BOMB_SYMBOL: &str = "**";
pub(crate) const PORTAL_SYMBOL: &str = "@@";

pub(crate) const SNEK_HEAD_STYLE: Style = Style::new().fg(Color::Yellow);
pub(crate) const SNEK_BODY_STYLE: Style = Style::new().fg(Color::Green);
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);
pub(crate) const BOMB_STYLE: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD);
pub(crate) const PORTAL_STYLE: Style = Style::new().fg(Color::Magenta);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
