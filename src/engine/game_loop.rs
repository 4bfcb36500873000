use core::fmt;
use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::barrel::{Barrel, BARRELS_TOTAL};
use crate::domain::card::Card;
use crate::domain::config::GameConfig;
use crate::domain::drum::Drum;
use crate::domain::player::{Player, PlayerDescriptor, PlayerKind};
use crate::domain::PlayerIndex;
use crate::engine::errors::EngineError;
use crate::engine::game_history::{GameEventKind, GameHistory};
use crate::engine::moves::{
    resolve_computer_move, resolve_human_move, Claim, DisqualificationReason, MoveSummary,
};
use crate::engine::RandomSource;

/// Минимум игроков независимо от конфига.
const ABSOLUTE_MIN_PLAYERS: usize = 2;

/// Состояние партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameState {
    Setup,
    InProgress,
    Won,
    Drawn,
    Aborted,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Drawn | GameState::Aborted)
    }
}

/// Чем закончилась партия.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: PlayerIndex },
    Drawn,
    Aborted {
        disqualified: PlayerIndex,
        reason: DisqualificationReason,
    },
}

/// Результат одного раунда для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    /// Вытянутый бочонок (`None`, если мешок пуст или бочонок не тянули).
    pub drawn_barrel: Option<Barrel>,
    /// Чей был ход.
    pub acting_player: Option<PlayerIndex>,
    pub move_summary: MoveSummary,
    pub state: GameState,
}

/// Источник решений человека. Вызов блокирующий: ответ нужен сразу.
///
/// Ошибка означает, что ответа нет (например, ввод закрыт): ход остаётся
/// незавершённым, решение за игрока не принимается.
pub trait ClaimSource {
    fn claim(&mut self, player: &Player, barrel: Barrel) -> io::Result<Claim>;
}

/// Всегда отвечает честно — для симуляций и тестов.
#[derive(Clone, Copy, Debug, Default)]
pub struct HonestClaims;

impl ClaimSource for HonestClaims {
    fn claim(&mut self, player: &Player, barrel: Barrel) -> io::Result<Claim> {
        Ok(Claim::from(player.card.contains_unmarked(barrel.number())))
    }
}

/// Ожидаемое решение человека.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
struct PendingClaim {
    player: PlayerIndex,
    barrel: Barrel,
}

/// Партия лото: мешок, игроки по порядку хода и состояние.
#[derive(Clone, Debug)]
pub struct Game {
    pub config: GameConfig,
    players: Vec<Player>,
    drum: Drum,
    current_player: PlayerIndex,
    state: GameState,
    outcome: Option<GameOutcome>,
    pending: Option<PendingClaim>,
    history: GameHistory,
}

impl Game {
    /// Новая партия с конфигом по умолчанию.
    pub fn new<R: RandomSource>(
        descriptors: &[PlayerDescriptor],
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        Self::with_config(descriptors, GameConfig::default(), rng)
    }

    /// Партия по строковым типам игроков ("human", "computer", "h", "c", ...).
    pub fn from_kind_names<R: RandomSource>(
        kinds: &[&str],
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let descriptors = kinds
            .iter()
            .map(|k| {
                PlayerKind::from_str(k)
                    .map(PlayerDescriptor::new)
                    .map_err(|e| EngineError::UnknownPlayerKind(e.0))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&descriptors, rng)
    }

    pub fn with_config<R: RandomSource>(
        descriptors: &[PlayerDescriptor],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        validate_setup(descriptors.len(), &config)?;

        let mut players = Vec::with_capacity(descriptors.len());
        for (idx, d) in descriptors.iter().enumerate() {
            let name = d
                .name
                .clone()
                .unwrap_or_else(|| d.kind.default_name(idx + 1));
            let card = Card::generate(name.clone(), rng)?;
            players.push(Player::new(name, d.kind, card));
        }

        let drum = Drum::shuffled(config.drum_size, rng);
        Self::from_parts(players, drum, config)
    }

    /// Новая партия с уже существующими игроками (статистика сохраняется,
    /// карточки генерируются заново).
    pub fn with_players<R: RandomSource>(
        mut players: Vec<Player>,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        validate_setup(players.len(), &config)?;

        for p in players.iter_mut() {
            p.card = Card::generate(p.name.clone(), rng)?;
        }

        let drum = Drum::shuffled(config.drum_size, rng);
        Self::from_parts(players, drum, config)
    }

    /// Собрать партию из готовых частей (реплей, тесты).
    pub fn from_parts(
        players: Vec<Player>,
        drum: Drum,
        config: GameConfig,
    ) -> Result<Self, EngineError> {
        validate_setup(players.len(), &config)?;

        Ok(Self {
            config,
            players,
            drum,
            current_player: 0,
            state: GameState::Setup,
            outcome: None,
            pending: None,
            history: GameHistory::new(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(GameOutcome::Won { winner }) => self.players.get(winner),
            _ => None,
        }
    }

    pub fn disqualified(&self) -> Option<&Player> {
        match self.outcome {
            Some(GameOutcome::Aborted { disqualified, .. }) => self.players.get(disqualified),
            _ => None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: PlayerIndex) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: PlayerIndex) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Индекс игрока по имени.
    pub fn find_player(&self, name: &str) -> Option<PlayerIndex> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn current_player_index(&self) -> PlayerIndex {
        self.current_player
    }

    pub fn current_barrel(&self) -> Option<Barrel> {
        self.drum.drawn()
    }

    pub fn barrels_left(&self) -> usize {
        self.drum.remaining()
    }

    pub fn drum(&self) -> &Drum {
        &self.drum
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Чьё решение и по какому бочонку сейчас ожидается.
    pub fn pending_decision(&self) -> Option<(PlayerIndex, Barrel)> {
        self.pending.map(|p| (p.player, p.barrel))
    }

    /// Забрать игроков (со статистикой) для следующей партии.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    /// Все карточки. Компьютерные скрыты, кроме карточки текущего игрока.
    pub fn render_cards(&self, hide_computers: bool) -> String {
        self.players
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let hide = hide_computers
                    && p.kind == PlayerKind::Computer
                    && idx != self.current_player;
                p.card.render(!hide)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Один раунд: вытянуть бочонок и разыграть ход текущего игрока.
    ///
    /// Для человека возвращается `MoveSummary::AwaitingClaim`, раунд
    /// завершается вызовом `submit_human_decision`.
    pub fn step(&mut self) -> Result<RoundResult, EngineError> {
        if self.state.is_terminal() {
            return Err(EngineError::GameFinished);
        }
        if let Some(p) = self.pending {
            return Err(EngineError::DecisionPending { player: p.player });
        }
        if self.state == GameState::Setup {
            self.start();
        }

        // Кто-то уже закрыл карточку вне обычного хода.
        if let Some(idx) = self.first_complete_player() {
            self.finish(GameOutcome::Won { winner: idx });
            return Ok(RoundResult {
                drawn_barrel: None,
                acting_player: Some(idx),
                move_summary: MoveSummary::AlreadyComplete,
                state: self.state,
            });
        }

        let Some(barrel) = self.drum.draw() else {
            // Закрытые карточки уже выиграли выше, здесь — только ничья.
            self.finish(GameOutcome::Drawn);
            return Ok(RoundResult {
                drawn_barrel: None,
                acting_player: None,
                move_summary: MoveSummary::DrumExhausted,
                state: self.state,
            });
        };

        let acting = self.current_player;
        debug!(barrel = barrel.number(), player = acting, left = self.drum.remaining(), "barrel drawn");
        self.history.push(GameEventKind::BarrelDrawn {
            barrel,
            player: acting,
        });

        match self.players[acting].kind {
            PlayerKind::Computer => {
                let summary = resolve_computer_move(&mut self.players[acting].card, barrel.number());
                Ok(self.complete_round(acting, barrel, summary))
            }
            PlayerKind::Human => {
                self.pending = Some(PendingClaim {
                    player: acting,
                    barrel,
                });
                Ok(RoundResult {
                    drawn_barrel: Some(barrel),
                    acting_player: Some(acting),
                    move_summary: MoveSummary::AwaitingClaim {
                        number: barrel.number(),
                    },
                    state: self.state,
                })
            }
        }
    }

    /// Ответ человека на текущий бочонок.
    pub fn submit_human_decision(&mut self, claims_present: bool) -> Result<RoundResult, EngineError> {
        if self.state.is_terminal() {
            return Err(EngineError::GameFinished);
        }
        let pending = self.pending.take().ok_or(EngineError::NoPendingDecision)?;

        let claim = Claim::from(claims_present);
        let summary = resolve_human_move(
            &mut self.players[pending.player].card,
            pending.barrel.number(),
            claim,
        );
        Ok(self.complete_round(pending.player, pending.barrel, summary))
    }

    /// Раунд целиком: `step` и, если нужно, решение человека из `source`.
    ///
    /// Если `source` не дал ответа, возвращается `EngineError::ClaimUnavailable`,
    /// а решение остаётся ожидающим.
    pub fn play_round<C: ClaimSource>(&mut self, source: &mut C) -> Result<RoundResult, EngineError> {
        let result = self.step()?;

        match (result.move_summary, result.acting_player, result.drawn_barrel) {
            (MoveSummary::AwaitingClaim { .. }, Some(idx), Some(barrel)) => {
                let claim = source
                    .claim(&self.players[idx], barrel)
                    .map_err(EngineError::ClaimUnavailable)?;
                self.submit_human_decision(claim == Claim::Present)
            }
            _ => Ok(result),
        }
    }

    /// Играть до конца партии.
    pub fn run_to_end<C: ClaimSource>(&mut self, source: &mut C) -> Result<GameOutcome, EngineError> {
        while !self.state.is_terminal() {
            self.play_round(source)?;
        }
        self.outcome.ok_or(EngineError::GameFinished)
    }

    fn start(&mut self) {
        self.state = GameState::InProgress;
        self.history.push(GameEventKind::GameStarted {
            players: self.players.len(),
            barrels: self.drum.remaining(),
        });
        info!(players = self.players.len(), barrels = self.drum.remaining(), "game started");
    }

    /// Применить итог хода: отметка, победа, дисквалификация, переход хода.
    fn complete_round(&mut self, acting: PlayerIndex, barrel: Barrel, summary: MoveSummary) -> RoundResult {
        debug!(player = acting, ?summary, "move resolved");

        match summary {
            MoveSummary::Marked { number } => {
                let remaining = self.players[acting].card.remaining();
                self.history.push(GameEventKind::NumberMarked {
                    player: acting,
                    number,
                    remaining,
                });
                if self.players[acting].card.is_complete() {
                    self.finish(GameOutcome::Won { winner: acting });
                }
            }
            MoveSummary::Passed { number } => {
                self.history.push(GameEventKind::Passed {
                    player: acting,
                    number,
                });
            }
            MoveSummary::Disqualified { number, reason } => {
                warn!(player = acting, number, ?reason, "player disqualified");
                self.history.push(GameEventKind::Disqualified {
                    player: acting,
                    number,
                    reason,
                });
                self.finish(GameOutcome::Aborted {
                    disqualified: acting,
                    reason,
                });
            }
            MoveSummary::AwaitingClaim { .. }
            | MoveSummary::DrumExhausted
            | MoveSummary::AlreadyComplete => {}
        }

        if self.state == GameState::InProgress {
            if let Some(idx) = self.first_complete_player() {
                self.finish(GameOutcome::Won { winner: idx });
            }
        }

        if self.state == GameState::InProgress {
            self.current_player = (self.current_player + 1) % self.players.len();
        }

        RoundResult {
            drawn_barrel: Some(barrel),
            acting_player: Some(acting),
            move_summary: summary,
            state: self.state,
        }
    }

    fn first_complete_player(&self) -> Option<PlayerIndex> {
        self.players.iter().position(|p| p.card.is_complete())
    }

    /// Терминальное состояние + статистика игроков.
    fn finish(&mut self, outcome: GameOutcome) {
        self.pending = None;
        self.outcome = Some(outcome);

        match outcome {
            GameOutcome::Won { winner } => {
                self.state = GameState::Won;
                self.history.push(GameEventKind::GameWon { player: winner });
                for (idx, p) in self.players.iter_mut().enumerate() {
                    if idx == winner {
                        p.add_win_with_score(self.config.win_score);
                    } else {
                        p.add_loss();
                    }
                }
                info!(winner = %self.players[winner].name, "game won");
            }
            GameOutcome::Drawn => {
                self.state = GameState::Drawn;
                self.history.push(GameEventKind::GameDrawn);
                self.count_unfinished_game();
                info!("drum exhausted, game drawn");
            }
            GameOutcome::Aborted { disqualified, .. } => {
                self.state = GameState::Aborted;
                self.count_unfinished_game();
                info!(disqualified = %self.players[disqualified].name, "game aborted");
            }
        }
    }

    fn count_unfinished_game(&mut self) {
        if self.config.count_unfinished_games {
            for p in self.players.iter_mut() {
                p.add_loss();
            }
        }
    }
}

/// Проверка параметров партии до генерации карточек.
fn validate_setup(player_count: usize, config: &GameConfig) -> Result<(), EngineError> {
    let minimum = config.min_players.max(ABSOLUTE_MIN_PLAYERS);
    if player_count < minimum {
        return Err(EngineError::NotEnoughPlayers {
            requested: player_count,
            minimum,
        });
    }
    if config.drum_size == 0 || config.drum_size > BARRELS_TOTAL {
        return Err(EngineError::InvalidDrumSize(config.drum_size));
    }
    Ok(())
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Игра в лото: {} игроков, осталось бочонков {}",
            self.players.len(),
            self.drum.remaining()
        )?;
        for p in &self.players {
            writeln!(f, "  {p}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Game {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
