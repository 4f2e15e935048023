//! Simulation command
//!
//! Pits an automatic guesser against the engine over many games.

use crate::config::GameConfig;
use crate::game::{GameSession, GuessStatus, SessionState};
use crate::solver::{Guesser, GuesserType};
use crate::wordlists::Corpus;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word_length: usize,
    pub state: SessionState,
    pub guesses: usize,
    pub misses_used: u8,
    /// Word disclosed at the end, if the game finished normally
    pub word: Option<String>,
}

/// Per word length tallies
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LengthStats {
    pub games: usize,
    pub wins: usize,
}

impl LengthStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug, Clone)]
pub struct SimulationStats {
    pub guesser: &'static str,
    pub total_misses: u8,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub errors: usize,
    pub average_guesses: f64,
    pub average_misses: f64,
    pub by_length: BTreeMap<usize, LengthStats>,
    /// Words the engine disclosed most often on a loss
    pub toughest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Lengths sorted from lowest to highest win rate
    #[must_use]
    pub fn hardest_lengths(&self, limit: usize) -> Vec<(usize, LengthStats)> {
        let mut lengths: Vec<(usize, LengthStats)> =
            self.by_length.iter().map(|(&len, &stats)| (len, stats)).collect();
        lengths.sort_by(|a, b| a.1.win_rate().total_cmp(&b.1.win_rate()).then(a.0.cmp(&b.0)));
        lengths.truncate(limit);
        lengths
    }
}

/// Play a single game with `guesser`, seeded for reproducibility
pub fn play_one<G: Guesser>(guesser: &G, corpus: &Corpus, config: GameConfig, seed: u64) -> GameRecord {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::start(corpus, config, &mut rng);
    let mut guesses = 0;
    let mut word = None;

    while session.is_active() {
        let Some(letter) = guesser.next_letter(session.pattern(), session.guessed(), corpus, &mut rng)
        else {
            break;
        };
        let Ok(outcome) = session.guess_letter(letter, corpus, &mut rng) else {
            break;
        };

        if outcome.status.counts_as_turn() {
            guesses += 1;
        }
        if outcome.status == GuessStatus::Error {
            log::warn!("game {seed} aborted at {}", outcome.pattern);
        }
        word = outcome.disclosed_word.map(|w| w.text().to_string());
    }

    GameRecord {
        word_length: session.word_length(),
        state: session.state(),
        guesses,
        misses_used: session.total_misses() - session.misses_left(),
        word,
    }
}

/// Play `count` games in parallel
///
/// Game `i` is seeded with `seed + i`, so a run is reproducible regardless of
/// thread scheduling.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_simulation(
    guesser: GuesserType,
    corpus: &Corpus,
    config: GameConfig,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> Result<SimulationStats> {
    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message(guesser.name());

    let start = Instant::now();

    let records: Vec<GameRecord> = (0..count)
        .into_par_iter()
        .map(|i| {
            let record = play_one(&guesser, corpus, config, seed.wrapping_add(i as u64));
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");
    log::info!("simulated {count} games in {:.2?}", start.elapsed());

    Ok(summarize(guesser.name(), config, &records, start.elapsed()))
}

fn summarize(guesser: &'static str, config: GameConfig, records: &[GameRecord], duration: Duration) -> SimulationStats {
    let games = records.len();
    let count = |state: SessionState| records.iter().filter(|r| r.state == state).count();

    let mut by_length: BTreeMap<usize, LengthStats> = BTreeMap::new();
    let mut lost_words: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        let entry = by_length.entry(record.word_length).or_default();
        entry.games += 1;
        if record.state == SessionState::Won {
            entry.wins += 1;
        }
        if let (SessionState::Lost, Some(word)) = (record.state, &record.word) {
            *lost_words.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let mut toughest_words: Vec<(String, usize)> = lost_words
        .into_iter()
        .map(|(word, n)| (word.to_string(), n))
        .collect();
    toughest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    toughest_words.truncate(5);

    let mean = |f: fn(&GameRecord) -> usize| {
        if games == 0 {
            0.0
        } else {
            records.iter().map(f).sum::<usize>() as f64 / games as f64
        }
    };

    SimulationStats {
        guesser,
        total_misses: config.total_misses(),
        games,
        wins: count(SessionState::Won),
        losses: count(SessionState::Lost),
        errors: count(SessionState::Error),
        average_guesses: mean(|r| r.guesses),
        average_misses: mean(|r| usize::from(r.misses_used)),
        by_length,
        toughest_words,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AlphabetGuesser, FrequencyGuesser};

    #[test]
    fn play_one_finishes() {
        let corpus = Corpus::embedded().unwrap();
        let record = play_one(&FrequencyGuesser, &corpus, GameConfig::default(), 3);

        assert!(matches!(record.state, SessionState::Won | SessionState::Lost));
        assert!(record.word.is_some());
        assert!(record.guesses <= 26);
        assert!(record.misses_used <= 7);
    }

    #[test]
    fn play_one_is_reproducible() {
        let corpus = Corpus::embedded().unwrap();
        let first = play_one(&AlphabetGuesser, &corpus, GameConfig::default(), 42);
        let second = play_one(&AlphabetGuesser, &corpus, GameConfig::default(), 42);
        assert_eq!(first, second);
    }

    #[test]
    fn disclosed_word_fits_length() {
        let corpus = Corpus::embedded().unwrap();
        for seed in 0..10 {
            let record = play_one(&FrequencyGuesser, &corpus, GameConfig::default(), seed);
            let word = record.word.unwrap();
            assert_eq!(word.len(), record.word_length);
        }
    }

    #[test]
    fn single_word_corpus_is_always_won() {
        let corpus = Corpus::parse("cat").unwrap();
        let record = play_one(&FrequencyGuesser, &corpus, GameConfig::default(), 0);
        assert_eq!(record.state, SessionState::Won);
        assert_eq!(record.word.as_deref(), Some("cat"));
        assert_eq!(record.misses_used, 0);
    }

    #[test]
    fn simulation_counts_add_up() {
        let corpus = Corpus::embedded().unwrap();
        let stats = run_simulation(
            GuesserType::from_name("frequency"),
            &corpus,
            GameConfig::default(),
            40,
            1,
            false,
        )
        .unwrap();

        assert_eq!(stats.games, 40);
        assert_eq!(stats.wins + stats.losses + stats.errors, 40);
        assert_eq!(stats.errors, 0);
        assert_eq!(stats.by_length.values().map(|s| s.games).sum::<usize>(), 40);
        assert!(stats.average_misses <= 7.0);
        assert!((0.0..=1.0).contains(&stats.win_rate()));
    }

    #[test]
    fn simulation_is_reproducible() {
        let corpus = Corpus::embedded().unwrap();
        let run = || {
            run_simulation(GuesserType::from_name("random"), &corpus, GameConfig::default(), 20, 9, false)
                .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.by_length, b.by_length);
        assert_eq!(a.toughest_words, b.toughest_words);
    }

    #[test]
    fn hardest_lengths_sorted_by_win_rate() {
        let mut by_length = BTreeMap::new();
        by_length.insert(3, LengthStats { games: 4, wins: 1 });
        by_length.insert(5, LengthStats { games: 4, wins: 4 });
        by_length.insert(4, LengthStats { games: 4, wins: 0 });

        let stats = SimulationStats {
            guesser: "frequency",
            total_misses: 7,
            games: 12,
            wins: 5,
            losses: 7,
            errors: 0,
            average_guesses: 0.0,
            average_misses: 0.0,
            by_length,
            toughest_words: Vec::new(),
            duration: Duration::from_secs(1),
            games_per_second: 12.0,
        };

        let hardest: Vec<usize> = stats.hardest_lengths(2).into_iter().map(|(len, _)| len).collect();
        assert_eq!(hardest, vec![4, 3]);
    }
}
