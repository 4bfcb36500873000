// src/bin/loto_cli.rs
//
// Консольное лото: выбор игроков, партия с подсказками, статистика,
// "сыграть ещё раз" — явным циклом поверх `Game`.

use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use loto_engine::api::{build_round_view, statistics_report};
use loto_engine::domain::{Barrel, GameConfig, Player, PlayerDescriptor, PlayerKind};
use loto_engine::engine::{
    Claim, ClaimSource, EngineError, Game, GameState, HonestClaims,
};
use loto_engine::infra::{DeterministicRng, RngSeed};

#[derive(Parser)]
#[command(name = "loto_cli")]
#[command(about = "Консольная игра в лото")]
struct Args {
    /// Типы игроков через запятую: h,c,c (если не задано — спросим)
    #[arg(short, long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// Seed сессии для воспроизводимых партий
    #[arg(long)]
    seed: Option<u64>,

    /// JSON-файл с GameConfig
    #[arg(long)]
    config: Option<PathBuf>,

    /// Без вопросов: люди отвечают честно, партии идут подряд
    #[arg(long)]
    auto: bool,

    /// Сколько партий сыграть в режиме --auto
    #[arg(long, default_value = "1")]
    games: u32,

    /// Показывать карточки компьютеров открытыми
    #[arg(long)]
    show_all: bool,

    /// Логи уровня info
    #[arg(short, long)]
    verbose: bool,

    /// Логи уровня debug
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // RUST_LOG важнее флагов.
    let default_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(args.config.as_deref())?;
    let seed = match args.seed {
        Some(s) => RngSeed::from_u64(s),
        None => RngSeed::from_bytes(rand::random()),
    };
    info!(?config, seed = ?args.seed, "session started");

    println!("Добро пожаловать в игру Лото!");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let descriptors = match &args.players {
        Some(kinds) => parse_descriptors(kinds)?,
        None => prompt_descriptors(&mut input)?,
    };

    let mut players: Option<Vec<Player>> = None;
    let mut game_index: u64 = 0;

    loop {
        let mut rng = seed.derive(game_index).to_rng();
        let mut game = new_game(players.take(), &descriptors, &config, &mut rng)?;
        game_index += 1;

        let hide_computers = !args.show_all;
        let played = if args.auto {
            play_game(&mut game, &mut HonestClaims, hide_computers)
        } else {
            let mut console = ConsoleClaims { input: &mut input };
            play_game(&mut game, &mut console, hide_computers)
        };
        match played {
            Ok(()) => {}
            Err(EngineError::ClaimUnavailable(e)) => {
                // Партия не доиграна: статистику не трогаем.
                warn!(error = %e, "no answer from player, session stopped");
                println!("\nВвод закрыт, партия прервана.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        let finished = game.into_players();
        println!();
        println!("{}", statistics_report(&finished));
        players = Some(finished);

        let again = if args.auto {
            game_index < u64::from(args.games)
        } else {
            ask_yes_no(&mut input, "\nСыграть еще раз? (y/n): ")?
        };
        if !again {
            break;
        }
    }

    println!("Спасибо за игру! До свидания!");
    Ok(())
}

/// Первая партия — игроки из описаний, дальше — те же игроки с новыми карточками.
fn new_game(
    players: Option<Vec<Player>>,
    descriptors: &[PlayerDescriptor],
    config: &GameConfig,
    rng: &mut DeterministicRng,
) -> Result<Game, EngineError> {
    match players {
        Some(players) => Game::with_players(players, config.clone(), rng),
        None => Game::with_config(descriptors, config.clone(), rng),
    }
}

/// Одна партия до терминального состояния.
fn play_game<C: ClaimSource>(
    game: &mut Game,
    claims: &mut C,
    hide_computers: bool,
) -> Result<(), EngineError> {
    println!("\n{}", "=".repeat(50));
    println!("           ИГРА В ЛОТО");
    println!("{}", "=".repeat(50));
    println!("\nНачальные карточки:");
    println!("{}", game.render_cards(false));

    while !game.state().is_terminal() {
        let result = game.play_round(claims)?;

        if let Some(barrel) = result.drawn_barrel {
            println!("\n{}", "=".repeat(50));
            println!("Бочонок: {} (осталось {})", barrel, game.barrels_left());
            // Финальные карточки печатаются после партии.
            if game.state() == GameState::InProgress {
                println!("{}", game.render_cards(hide_computers));
            }
        }
        println!("{}", build_round_view(game, &result).message);
    }

    println!("\nИГРА ОКОНЧЕНА!");
    println!("\nФинальные карточки:");
    println!("{}", game.render_cards(false));

    match (game.winner(), game.disqualified()) {
        (Some(w), _) => println!("Победитель: {}", w.name),
        (None, Some(d)) => println!("{} дисквалифицирован", d.name),
        (None, None) => println!("Ничья - никто не зачеркнул все числа"),
    }
    Ok(())
}

/// Решения человека с консоли.
struct ConsoleClaims<'a, R: BufRead> {
    input: &'a mut R,
}

impl<R: BufRead> ClaimSource for ConsoleClaims<'_, R> {
    fn claim(&mut self, player: &Player, barrel: Barrel) -> io::Result<Claim> {
        println!("\nНовый бочонок: {barrel}");
        println!("{}, ваш ход!", player.name);
        println!("{}", player.card.render(true));

        ask_yes_no(self.input, "Зачеркнуть цифру? (y/n): ").map(Claim::from)
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, Box<dyn Error>> {
    match path {
        Some(p) => {
            let raw = fs::read_to_string(p)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(GameConfig::default()),
    }
}

fn parse_descriptors(kinds: &[String]) -> Result<Vec<PlayerDescriptor>, Box<dyn Error>> {
    let mut out = Vec::with_capacity(kinds.len());
    for k in kinds {
        out.push(PlayerDescriptor::new(PlayerKind::from_str(k)?));
    }
    Ok(out)
}

fn prompt_descriptors<R: BufRead>(input: &mut R) -> io::Result<Vec<PlayerDescriptor>> {
    let count = loop {
        let line = prompt(input, "\nВведите количество игроков (2 и более): ")?;
        match line.parse::<usize>() {
            Ok(n) if n >= 2 => break n,
            Ok(_) => println!("Количество игроков должно быть не менее 2"),
            Err(_) => println!("Пожалуйста, введите число"),
        }
    };

    let mut descriptors = Vec::with_capacity(count);
    for i in 0..count {
        loop {
            let line = prompt(input, &format!("Игрок {}: человек или компьютер? (h/c): ", i + 1))?;
            match PlayerKind::from_str(&line) {
                Ok(kind) => {
                    descriptors.push(PlayerDescriptor::new(kind));
                    break;
                }
                Err(_) => println!("Пожалуйста, введите 'h' для человека или 'c' для компьютера"),
            }
        }
    }
    Ok(descriptors)
}

fn ask_yes_no<R: BufRead>(input: &mut R, question: &str) -> io::Result<bool> {
    loop {
        let line = prompt(input, question)?.to_lowercase();
        match line.as_str() {
            "y" | "д" => return Ok(true),
            "n" | "н" => return Ok(false),
            _ => println!("Пожалуйста, введите 'y' или 'n'"),
        }
    }
}

fn prompt<R: BufRead>(input: &mut R, question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "ввод закрыт"));
    }
    Ok(line.trim().to_string())
}
