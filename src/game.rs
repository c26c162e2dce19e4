//! Menu / Playing / Paused / GameOver phases wrapped around a [`SnekHaus`]
use crate::command::{Command, Setting};
use crate::consts::{
    DEFAULT_SPEED, DEFAULT_START_LENGTH, MAX_SPEED, MAX_START_LENGTH, MIN_SPEED,
    MIN_START_LENGTH, SLOWEST_TICK, SNEK_START_POS, TICK_STEP,
};
use crate::grid::{Direction, Pos, Size};
use crate::haus::{FatalCollision, SnekHaus, TickOutcome};
use crate::placement::PlacementError;
use crate::render::{EntityKind, Scene};
use crate::sound::SoundEvent;
use log::{error, info};
use rand::Rng;
use std::time::Duration;

/// Session settings chosen on the menu. Never written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) speed: u8,
    pub(crate) start_length: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            speed: DEFAULT_SPEED,
            start_length: DEFAULT_START_LENGTH,
        }
    }
}

impl Settings {
    pub(crate) fn adjust(&mut self, setting: Setting, delta: i8) {
        match setting {
            Setting::Speed => {
                self.speed = self.speed.saturating_add_signed(delta).clamp(MIN_SPEED, MAX_SPEED)
            }
            Setting::StartLength => {
                self.start_length = self
                    .start_length
                    .saturating_add_signed(delta)
                    .clamp(MIN_START_LENGTH, MAX_START_LENGTH)
            }
        }
    }

    /// Time between ticks; faster speeds tick sooner.
    pub(crate) fn tick_delay(&self) -> Duration {
        SLOWEST_TICK - TICK_STEP * u32::from(self.speed - MIN_SPEED)
    }
}

/// Why a round ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoundEnd {
    Collision(FatalCollision),
    /// Nowhere left to put an apple or bomb
    BoardFull,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    Menu { selected: Setting },
    Playing,
    Paused,
    GameOver { final_score: u32, cause: RoundEnd },
    Exit,
}

pub(crate) struct Game<R> {
    rng: R,
    size: Size,
    settings: Settings,
    phase: Phase,
    haus: SnekHaus,
    high_score: u32,
    sounds: Vec<SoundEvent>,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(size: Size, mut rng: R) -> Result<Self, PlacementError> {
        let haus = Self::fresh_haus(size, &mut rng)?;
        Ok(Game {
            rng,
            size,
            settings: Settings::default(),
            phase: Phase::Menu {
                selected: Setting::Speed,
            },
            haus,
            high_score: 0,
            sounds: Vec::new(),
        })
    }

    fn fresh_haus(size: Size, rng: &mut R) -> Result<SnekHaus, PlacementError> {
        let (x, y) = SNEK_START_POS;
        SnekHaus::new(size, size.wrap(i32::from(x), i32::from(y)), rng)
    }

    /// Runs one simulation tick if a round is in progress.
    ///
    /// A collision or a full board ends the round: the board is reset right
    /// away and the final score is shown until the player confirms.
    pub(crate) fn update(&mut self) -> Result<(), PlacementError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }
        let outcome = self.haus.tick(&mut self.rng);
        self.sounds.extend(self.haus.take_sounds());
        match outcome {
            Ok(TickOutcome::Continue) => Ok(()),
            Ok(TickOutcome::GameOver(collision)) => {
                self.end_round(RoundEnd::Collision(collision))
            }
            Err(e) => {
                error!("Ending round, board is full: {}", e);
                self.end_round(RoundEnd::BoardFull)
            }
        }
    }

    fn end_round(&mut self, cause: RoundEnd) -> Result<(), PlacementError> {
        let final_score = self.haus.score();
        info!("Game over ({:?}), final score {}", cause, final_score);
        if final_score > self.high_score {
            info!("New high score: {}", final_score);
            self.high_score = final_score;
        }
        self.haus = Self::fresh_haus(self.size, &mut self.rng)?;
        self.phase = Phase::GameOver { final_score, cause };
        Ok(())
    }

    pub(crate) fn handle_command(&mut self, command: Command) {
        if command == Command::Cancel {
            info!("Exiting from {:?}", self.phase);
            self.phase = Phase::Exit;
            return;
        }

        let new_phase = match &mut self.phase {
            Phase::Menu { selected } => match command {
                Command::MoveUp | Command::MoveDown => {
                    *selected = match selected {
                        Setting::Speed => Setting::StartLength,
                        Setting::StartLength => Setting::Speed,
                    };
                    None
                }
                Command::MoveLeft => {
                    self.settings.adjust(*selected, -1);
                    None
                }
                Command::MoveRight => {
                    self.settings.adjust(*selected, 1);
                    None
                }
                Command::AdjustSetting(setting, delta) => {
                    self.settings.adjust(setting, delta);
                    None
                }
                Command::Confirm => {
                    self.haus.grow_to(usize::from(self.settings.start_length));
                    info!(
                        "Starting round at speed {} with length {}",
                        self.settings.speed, self.settings.start_length
                    );
                    Some(Phase::Playing)
                }
                Command::TogglePause | Command::Cancel => None,
            },
            Phase::Playing => match command {
                Command::MoveUp => {
                    self.haus.queue_direction(Direction::North);
                    None
                }
                Command::MoveDown => {
                    self.haus.queue_direction(Direction::South);
                    None
                }
                Command::MoveLeft => {
                    self.haus.queue_direction(Direction::West);
                    None
                }
                Command::MoveRight => {
                    self.haus.queue_direction(Direction::East);
                    None
                }
                Command::TogglePause => Some(Phase::Paused),
                Command::Confirm | Command::AdjustSetting(..) | Command::Cancel => None,
            },
            Phase::Paused => match command {
                Command::Confirm | Command::TogglePause => Some(Phase::Playing),
                _ => None,
            },
            Phase::GameOver { .. } => match command {
                Command::Confirm => Some(Phase::Menu {
                    selected: Setting::Speed,
                }),
                _ => None,
            },
            Phase::Exit => None,
        };

        if let Some(new_phase) = new_phase {
            info!("{:?} -> {:?}", self.phase, new_phase);
            self.phase = new_phase;
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn settings(&self) -> Settings {
        self.settings
    }

    pub(crate) fn take_sounds(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.sounds)
    }

    /// Everything a renderer needs for one frame. Bombs come first and the
    /// head last, so later entries draw over earlier ones.
    pub(crate) fn scene(&self) -> Scene {
        let haus = &self.haus;
        let mut entities: Vec<(EntityKind, Pos)> = haus
            .bombs()
            .cells()
            .iter()
            .map(|&pos| (EntityKind::Bomb, pos))
            .collect();
        entities.push((EntityKind::Apple, haus.apple().pos()));
        if let Some((a, b)) = haus.portals().ends() {
            entities.push((EntityKind::Portal, a));
            entities.push((EntityKind::Portal, b));
        }
        let segments = haus.snek().segments();
        entities.extend(
            segments[1..]
                .iter()
                .rev()
                .map(|&pos| (EntityKind::SnekBody, pos)),
        );
        entities.push((EntityKind::SnekHead, haus.snek().head()));

        Scene {
            phase: self.phase,
            settings: self.settings,
            score: haus.score(),
            high_score: self.high_score,
            size: haus.size(),
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apple::Apple;
    use crate::portal::Portals;
    use crate::snek::Snek;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const ARENA: Size = Size {
        width: 10,
        height: 10,
    };

    fn new_game() -> Game<ChaCha8Rng> {
        Game::new(ARENA, ChaCha8Rng::seed_from_u64(0x5EED)).unwrap()
    }

    fn menu() -> Phase {
        Phase::Menu {
            selected: Setting::Speed,
        }
    }

    #[test]
    fn test_settings_clamp() {
        let mut settings = Settings::default();
        for _ in 0..20 {
            settings.adjust(Setting::Speed, 1);
            settings.adjust(Setting::StartLength, -1);
        }
        assert_eq!(
            settings,
            Settings {
                speed: MAX_SPEED,
                start_length: MIN_START_LENGTH
            }
        );
    }

    #[test]
    fn test_tick_delay_shrinks_with_speed() {
        let slowest = Settings {
            speed: MIN_SPEED,
            ..Settings::default()
        };
        assert_eq!(slowest.tick_delay(), Duration::from_millis(250));
        assert_eq!(Settings::default().tick_delay(), Duration::from_millis(170));
        let fastest = Settings {
            speed: MAX_SPEED,
            ..Settings::default()
        };
        assert_eq!(fastest.tick_delay(), Duration::from_millis(70));
    }

    #[test]
    fn test_menu_navigation() {
        let mut game = new_game();
        game.handle_command(Command::MoveRight);
        assert_eq!(game.settings().speed, DEFAULT_SPEED + 1);

        game.handle_command(Command::MoveDown);
        assert_eq!(
            game.phase(),
            Phase::Menu {
                selected: Setting::StartLength
            }
        );
        game.handle_command(Command::MoveRight);
        game.handle_command(Command::AdjustSetting(Setting::StartLength, 1));
        assert_eq!(game.settings().start_length, DEFAULT_START_LENGTH + 2);

        // Nothing moves until the round starts
        game.update().unwrap();
        assert_eq!(game.haus.snek().segments(), &[Pos::new(1, 1)]);
    }

    #[test]
    fn test_confirm_starts_round_at_start_length() {
        let mut game = new_game();
        game.handle_command(Command::AdjustSetting(Setting::StartLength, 3));
        game.handle_command(Command::Confirm);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.haus.snek().len(), 5);
    }

    #[test]
    fn test_pause_keeps_round() {
        let mut game = new_game();
        game.handle_command(Command::Confirm);
        game.update().unwrap();
        game.handle_command(Command::TogglePause);
        assert_eq!(game.phase(), Phase::Paused);

        let frozen = game.haus.clone();
        game.update().unwrap();
        game.handle_command(Command::MoveDown);
        assert_eq!(game.haus, frozen);

        game.handle_command(Command::Confirm);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.haus, frozen);
    }

    #[test]
    fn test_self_collision_resets_board() {
        let mut game = new_game();
        game.handle_command(Command::Confirm);
        game.haus = SnekHaus::with_parts(
            ARENA,
            Snek::from_segments(
                vec![
                    Pos::new(5, 5),
                    Pos::new(4, 5),
                    Pos::new(4, 6),
                    Pos::new(5, 6),
                    Pos::new(6, 6),
                    Pos::new(6, 7),
                ],
                Direction::South,
            ),
            Apple::new(Pos::new(0, 0)),
            Portals::default(),
        );

        game.update().unwrap();

        assert_eq!(
            game.phase(),
            Phase::GameOver {
                final_score: 0,
                cause: RoundEnd::Collision(FatalCollision::Body)
            }
        );
        assert_eq!(game.take_sounds(), vec![SoundEvent::SelfCollision]);
        assert_eq!(game.haus.snek().segments(), &[Pos::new(1, 1)]);
        assert_eq!(game.haus.bombs().len(), 0);
        assert_eq!(game.haus.portals().ends(), None);
        assert_eq!(game.haus.score(), 0);

        game.handle_command(Command::MoveLeft);
        assert!(matches!(game.phase(), Phase::GameOver { .. }));
        game.handle_command(Command::Confirm);
        assert_eq!(game.phase(), menu());
    }

    #[test]
    fn test_high_score_tracks_best_round() {
        let mut game = new_game();
        game.handle_command(Command::Confirm);
        game.haus = SnekHaus::with_parts(
            ARENA,
            Snek::from_segments(vec![Pos::new(3, 3), Pos::new(2, 3)], Direction::East),
            Apple::new(Pos::new(4, 3)),
            Portals::default(),
        );
        game.update().unwrap();
        assert_eq!(game.take_sounds(), vec![SoundEvent::Eat]);

        game.end_round(RoundEnd::BoardFull).unwrap();
        assert_eq!(game.high_score, 1);
        assert_eq!(
            game.phase(),
            Phase::GameOver {
                final_score: 1,
                cause: RoundEnd::BoardFull
            }
        );
    }

    #[test]
    fn test_full_board_ends_round() {
        let tiny = Size {
            width: 3,
            height: 2,
        };
        let mut game = Game::new(tiny, ChaCha8Rng::seed_from_u64(3)).unwrap();
        game.handle_command(Command::Confirm);
        // After the move only (2, 1) is free and the apple sits on it, so the
        // bomb a five-segment snek calls for has nowhere to go
        game.haus = SnekHaus::with_parts(
            tiny,
            Snek::from_segments(
                vec![
                    Pos::new(1, 0),
                    Pos::new(0, 0),
                    Pos::new(0, 1),
                    Pos::new(1, 1),
                    Pos::new(2, 1),
                ],
                Direction::East,
            ),
            Apple::new(Pos::new(2, 1)),
            Portals::default(),
        );

        game.update().unwrap();

        assert_eq!(
            game.phase(),
            Phase::GameOver {
                final_score: 0,
                cause: RoundEnd::BoardFull
            }
        );
        assert_eq!(game.haus.snek().segments(), &[Pos::new(1, 1)]);
        assert_eq!(game.haus.bombs().len(), 0);
        assert_eq!(game.haus.portals().ends(), None);
        assert_ne!(game.haus.apple().pos(), Pos::new(1, 1));

        game.handle_command(Command::Confirm);
        assert_eq!(game.phase(), menu());
    }

    #[test]
    fn test_cancel_exits_from_anywhere() {
        let mut game = new_game();
        game.handle_command(Command::Cancel);
        assert_eq!(game.phase(), Phase::Exit);

        let mut game = new_game();
        game.handle_command(Command::Confirm);
        game.handle_command(Command::TogglePause);
        game.handle_command(Command::Cancel);
        assert_eq!(game.phase(), Phase::Exit);
    }

    #[test]
    fn test_scene_lists_head_last() {
        let mut game = new_game();
        game.haus = SnekHaus::with_parts(
            ARENA,
            Snek::from_segments(
                vec![Pos::new(3, 3), Pos::new(2, 3), Pos::new(1, 3)],
                Direction::East,
            ),
            Apple::new(Pos::new(7, 7)),
            Portals::open_at(Pos::new(0, 9), Pos::new(9, 0), 5),
        );

        let scene = game.scene();
        assert_eq!(
            scene.entities,
            vec![
                (EntityKind::Apple, Pos::new(7, 7)),
                (EntityKind::Portal, Pos::new(0, 9)),
                (EntityKind::Portal, Pos::new(9, 0)),
                (EntityKind::SnekBody, Pos::new(1, 3)),
                (EntityKind::SnekBody, Pos::new(2, 3)),
                (EntityKind::SnekHead, Pos::new(3, 3)),
            ]
        );
        assert_eq!(scene.phase, menu());
        assert_eq!(scene.score, 0);
        assert_eq!(scene.size, ARENA);
    }
}
