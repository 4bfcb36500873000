use std::cmp::Reverse;

use crate::domain::card::Card;
use crate::domain::player::{Player, PlayerKind};
use crate::engine::{Game, RoundResult};

use super::dto::{CardViewDto, GameViewDto, PlayerStatsDto, PlayerViewDto, RoundViewDto};

/// Заголовок отчёта по статистике.
pub const STATISTICS_HEADER: &str = "СТАТИСТИКА ИГРОКОВ";

/// DTO карточки. При `reveal == false` раскладка не отдаётся.
pub fn build_card_view(card: &Card, reveal: bool) -> CardViewDto {
    let rows: Option<Vec<Vec<Option<u8>>>> =
        reveal.then(|| card.layout().iter().map(|r| r.to_vec()).collect());
    let marked: Vec<Vec<bool>> = card
        .layout()
        .iter()
        .enumerate()
        .map(|(r, row)| (0..row.len()).map(|c| card.is_marked(r, c)).collect())
        .collect();

    CardViewDto {
        card_id: card.card_id.clone(),
        rows,
        marked,
        remaining: card.remaining(),
        rendered: card.render(reveal),
    }
}

/// Сформировать DTO партии.
/// `is_hero` решает, чью карточку показывать открыто; компьютерные
/// карточки всегда открыты, если `hide_computers == false`.
pub fn build_game_view(
    game: &Game,
    hide_computers: bool,
    is_hero: impl Fn(&Player) -> bool,
) -> GameViewDto {
    let players = game
        .players()
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let reveal = match p.kind {
                PlayerKind::Human => is_hero(p) || !hide_computers,
                PlayerKind::Computer => !hide_computers || index == game.current_player_index(),
            };
            PlayerViewDto {
                index,
                name: p.name.clone(),
                kind: p.kind,
                card: build_card_view(&p.card, reveal),
                games_played: p.games_played(),
                games_won: p.games_won(),
                score: p.score(),
                win_rate: p.win_rate(),
            }
        })
        .collect();

    GameViewDto {
        state: game.state(),
        current_barrel: game.current_barrel().map(|b| b.number()),
        barrels_left: game.barrels_left(),
        current_player: game.current_player_index(),
        awaiting_decision_from: game.pending_decision().map(|(idx, _)| idx),
        winner: game.winner().map(|p| p.name.clone()),
        disqualified: game.disqualified().map(|p| p.name.clone()),
        players,
    }
}

/// DTO раунда с именем игрока (или победителя, если хода не было).
pub fn build_round_view(game: &Game, result: &RoundResult) -> RoundViewDto {
    let name = result
        .acting_player
        .and_then(|idx| game.player(idx))
        .or_else(|| game.winner())
        .map(|p| p.name.clone());
    RoundViewDto::from_round(result, name)
}

/// Игроки по убыванию очков. При равенстве — исходный порядок.
pub fn rank_by_score(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by_key(|p| Reverse(p.score()));
    ranked
}

pub fn build_stats(players: &[Player]) -> Vec<PlayerStatsDto> {
    rank_by_score(players)
        .into_iter()
        .map(|p| PlayerStatsDto {
            name: p.name.clone(),
            kind: p.kind,
            games_played: p.games_played(),
            games_won: p.games_won(),
            score: p.score(),
            win_rate: p.win_rate(),
        })
        .collect()
}

/// Текстовый отчёт по статистике игроков.
pub fn statistics_report(players: &[Player]) -> String {
    let mut lines = vec![
        "=".repeat(50),
        STATISTICS_HEADER.to_string(),
        "=".repeat(50),
    ];

    for (place, s) in build_stats(players).iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}): партий {}, побед {}, процент побед {:.1}%, очки {}",
            place + 1,
            s.name,
            s.kind,
            s.games_played,
            s.games_won,
            s.win_rate,
            s.score
        ));
    }

    lines.join("\n")
}
