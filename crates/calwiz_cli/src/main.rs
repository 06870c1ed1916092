use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use calwiz_astrology::{
    alignment_grade, chinese_sign_for_year, detect_aspects, moon_phase_name, moon_phase_percent,
    planet_positions, planetary_hour, planetary_influence, sample_at, sample_day, zodiac_for_date,
    AlignmentTicker, Aspect, PlanetPosition,
};
use calwiz_calendar::{astrology_day, month_grid, CalendarSlot};
use calwiz_insight::{
    insight_or_fallback, DemoSource, InsightConfig, InsightRequest, WebhookClient,
};
use calwiz_numerology::{
    day_numerology, energy_level, life_area_advice, life_path_from_text, number_meaning,
    DayNumerology,
};
use calwiz_store::{load_profile, save_profile, JsonFileStore};
use calwiz_time::{
    civil_from_days, day_of_year, minute_of_day, weekday, CalendarDate, MONTH_NAMES, WEEKDAY_NAMES,
};
use clap::{Parser, Subcommand};
use log::debug;

#[derive(Parser)]
#[command(name = "calwiz", about = "CalWiz numerology and astrology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a life path number from a birthdate
    LifePath {
        /// Birthdate as DD/MM/YYYY (any non-digit separators accepted)
        birthdate: String,
        /// Profile store file; when given, the result is saved
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Daily numerology for a date
    Day {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Life path number for the personal number
        #[arg(long)]
        life_path: Option<u32>,
        /// Profile store file to read a saved life path from
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Full month grid with per-day numerology and astrology
    Month {
        /// Year (default: current)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 (default: current)
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        life_path: Option<u32>,
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Zodiac sign, Chinese sign, ruling planet, and moon phase for a date
    Astro {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Simulated planetary alignment at a date and time
    Alignment {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Time of day (HH:MM)
        #[arg(long, default_value = "12:00")]
        time: String,
    },
    /// 96-sample daily timeline of simulated positions
    Timeline {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Print every sample instead of hourly ones
        #[arg(long)]
        full: bool,
    },
    /// Combined numerology + astrology summary for today
    Today {
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// AI insight for a date, with a local fallback narrative
    Insight {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Mode: numerology or astrology
        #[arg(long, default_value = "numerology")]
        mode: String,
        #[arg(long)]
        life_path: Option<u32>,
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Re-sample the alignment on an interval for a bounded duration
    Watch {
        /// Seconds between samples
        #[arg(long, default_value = "5")]
        interval: u64,
        /// Total seconds to run
        #[arg(long, default_value = "30")]
        duration: u64,
    },
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .unwrap_or_else(|err| {
            eprintln!("failed to start logger: {err}");
            std::process::exit(1);
        });

    let cli = Cli::parse();
    debug!("event=cli_start version={}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::LifePath { birthdate, store } => {
            let (birth, number) = life_path_from_text(&birthdate).unwrap_or_else(|err| {
                eprintln!("{err}");
                std::process::exit(1);
            });
            let meaning = number_meaning(number);
            println!(
                "Life path {} ({}) for {:02}/{:02}/{}",
                number, meaning.title, birth.day, birth.month, birth.year
            );
            println!("{}", meaning.description);
            if let Some(path) = store {
                let mut store = open_store(&path);
                if let Err(err) = save_profile(&mut store, &birthdate, number) {
                    eprintln!("failed to save profile: {err}");
                    std::process::exit(1);
                }
                println!("Saved to {}", path.display());
            }
        }

        Commands::Day { date, life_path, store } => {
            let date = resolve_date(date);
            let life_path = life_path.or_else(|| stored_life_path(store.as_deref()));
            let numbers = day_numbers(date, life_path);
            let meaning = number_meaning(numbers.primary);
            let advice = life_area_advice(numbers.primary);
            println!(
                "{} ({}, {})",
                date,
                WEEKDAY_NAMES[weekday(date) as usize],
                MONTH_NAMES[(date.month - 1) as usize]
            );
            println!(
                "Primary {} - {} [{} energy, {}]",
                numbers.primary,
                meaning.title,
                meaning.energy,
                energy_level(numbers.primary).name()
            );
            if let Some(secondary) = numbers.secondary {
                println!("Secondary {secondary}");
            }
            if let Some(personal) = numbers.personal {
                println!("Personal {personal} (life path {})", life_path.unwrap_or(0));
            }
            println!("Focus: {}", meaning.focus.join(", "));
            println!("Love: {}", advice.love);
            println!("Career: {}", advice.career);
            println!("Health: {}", advice.health);
            println!("Finance: {}", advice.finance);
        }

        Commands::Month { year, month, life_path, store } => {
            let today = today_utc();
            let year = year.unwrap_or(today.year);
            let month = month.unwrap_or(today.month);
            if !(1..=12).contains(&month) {
                eprintln!("Month must be between 1 and 12");
                std::process::exit(1);
            }
            let life_path = life_path.or_else(|| stored_life_path(store.as_deref()));
            let grid = month_grid(year, month - 1, life_path, Some(today));
            println!("{} {}", MONTH_NAMES[(month - 1) as usize], year);
            println!("Sun Mon Tue Wed Thu Fri Sat");
            let mut column = 0;
            for slot in &grid.slots {
                match slot {
                    CalendarSlot::Blank => print!("    "),
                    CalendarSlot::Day(cell) => {
                        let marker = if cell.is_today { '*' } else { ' ' };
                        print!("{:2}{} ", cell.date, marker);
                    }
                }
                column += 1;
                if column == 7 {
                    println!();
                    column = 0;
                }
            }
            if column != 0 {
                println!();
            }
            for cell in grid.days() {
                let astro = cell.astrology;
                print!(
                    "{:2}: primary {}  {} {}",
                    cell.date,
                    cell.numerology.primary,
                    astro.zodiac.symbol(),
                    astro.zodiac.name()
                );
                if let Some(personal) = cell.numerology.personal {
                    print!("  personal {personal}");
                }
                println!();
            }
        }

        Commands::Astro { date } => {
            let date = resolve_date(date);
            let astro = astrology_day(date.year, date.month - 1, date.day);
            let percent = moon_phase_percent(date, 720);
            let phase = moon_phase_name(percent);
            println!("{date}");
            println!("Zodiac: {} {}", astro.zodiac.symbol(), astro.zodiac.name());
            println!(
                "Chinese: {} (year {})",
                chinese_sign_for_year(date.year).name(),
                date.year
            );
            println!("Ruling planet: {}", astro.influence.name());
            println!("Moon: {} {} ({percent:.1}%)", phase.emoji(), phase.name());
        }

        Commands::Alignment { date, time } => {
            let date = resolve_date(date);
            let (hour, minute) = parse_hhmm(&time).unwrap_or_else(|| {
                eprintln!("Invalid time `{time}`; expected HH:MM");
                std::process::exit(1);
            });
            let sample = sample_at(date, hour, minute);
            let (positions, aspects) = alignment_chart(date, hour, minute);
            println!("{date} {}", sample.time_label());
            for pos in &positions {
                println!(
                    "{:8} {:6.1}° ring {}",
                    pos.planet.name(),
                    pos.angle_deg,
                    pos.distance
                );
            }
            if aspects.is_empty() {
                println!("No aspects within orb");
            }
            for aspect in &aspects {
                println!(
                    "{} {} - {} ({:.1}°)",
                    aspect.aspect.name(),
                    aspect.from.name(),
                    aspect.to.name(),
                    aspect.separation_deg
                );
            }
            println!(
                "Alignment {} ({})",
                sample.alignment,
                alignment_grade(sample.alignment).name()
            );
            println!("Planetary hour: {}", planetary_hour(hour).name());
        }

        Commands::Timeline { date, full } => {
            let date = resolve_date(date);
            println!("{date}");
            for sample in sample_day(date) {
                if !full && sample.minute != 0 {
                    continue;
                }
                println!(
                    "{}  alignment {:3} ({})  moon {:5.1}%  hour {}",
                    sample.time_label(),
                    sample.alignment,
                    alignment_grade(sample.alignment).name(),
                    sample.moon_phase,
                    sample.planetary_hour.name()
                );
            }
        }

        Commands::Today { store } => {
            let date = today_utc();
            let life_path = stored_life_path(store.as_deref());
            let numbers = day_numbers(date, life_path);
            let meaning = number_meaning(numbers.primary);
            let astro = astrology_day(date.year, date.month - 1, date.day);
            let percent = moon_phase_percent(date, 720);
            println!(
                "{} ({})",
                date,
                WEEKDAY_NAMES[weekday(date) as usize]
            );
            println!("Primary {} - {}", numbers.primary, meaning.title);
            if let Some(personal) = numbers.personal {
                println!("Personal {personal}");
            }
            println!("Zodiac: {} {}", astro.zodiac.symbol(), astro.zodiac.name());
            println!("Ruling planet: {}", astro.influence.name());
            println!(
                "Moon: {} ({percent:.1}%)",
                moon_phase_name(percent).name()
            );
        }

        Commands::Insight { date, mode, life_path, store } => {
            let date = resolve_date(date);
            let life_path = life_path.or_else(|| stored_life_path(store.as_deref()));
            let numbers = day_numbers(date, life_path);
            let request = match mode.as_str() {
                "numerology" => InsightRequest::numerology(date, numbers, life_path),
                "astrology" => {
                    let zodiac = zodiac_for_date(date);
                    let chinese = chinese_sign_for_year(date.year);
                    let planet = planetary_influence(
                        day_of_year(date.year, date.month, date.day),
                        date.day,
                    );
                    InsightRequest::astrology(date, zodiac.name(), chinese.name(), planet.name())
                }
                other => {
                    eprintln!("Invalid mode `{other}`; use numerology or astrology");
                    std::process::exit(1);
                }
            };
            let config = InsightConfig::from_env();
            let text = if config.demo_mode {
                let source = DemoSource::new(date, numbers);
                insight_or_fallback(&source, &request, date, numbers)
            } else {
                match WebhookClient::new(config) {
                    Ok(client) => insight_or_fallback(&client, &request, date, numbers),
                    Err(err) => {
                        eprintln!("{err}");
                        std::process::exit(1);
                    }
                }
            };
            println!("{text}");
        }

        Commands::Watch { interval, duration } => {
            let date = today_utc();
            let ticker = AlignmentTicker::start(Duration::from_secs(interval), move || {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs();
                let minute = ((now % 86_400) / 60) as u32;
                let sample = sample_at(date, minute / 60, minute % 60);
                println!(
                    "{}  alignment {:3} ({})",
                    sample.time_label(),
                    sample.alignment,
                    alignment_grade(sample.alignment).name()
                );
            });
            std::thread::sleep(Duration::from_secs(duration));
            ticker.stop();
        }
    }
}

/// Current UTC date from the system clock.
fn today_utc() -> CalendarDate {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    civil_from_days(secs.div_euclid(86_400))
}

fn resolve_date(arg: Option<String>) -> CalendarDate {
    match arg {
        None => today_utc(),
        Some(text) => parse_iso_date(&text).unwrap_or_else(|| {
            eprintln!("Invalid date `{text}`; expected YYYY-MM-DD");
            std::process::exit(1);
        }),
    }
}

fn parse_iso_date(text: &str) -> Option<CalendarDate> {
    let mut parts = text.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || day == 0 || day > calwiz_time::days_in_month(year, month) {
        return None;
    }
    Some(CalendarDate::new(year, month, day))
}

fn parse_hhmm(text: &str) -> Option<(u32, u32)> {
    let (hour, minute) = text.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

fn open_store(path: &std::path::Path) -> JsonFileStore {
    JsonFileStore::open(path).unwrap_or_else(|err| {
        eprintln!("failed to open store {}: {err}", path.display());
        std::process::exit(1);
    })
}

fn stored_life_path(path: Option<&std::path::Path>) -> Option<u32> {
    let store = open_store(path?);
    load_profile(&store).map(|profile| profile.life_path)
}

fn day_numbers(date: CalendarDate, life_path: Option<u32>) -> DayNumerology {
    day_numerology(date.day, date.month - 1, date.year.unsigned_abs(), life_path)
}

/// Positions and the aspects detected between them, built from one
/// position set so the listed placements match the aspect report.
fn alignment_chart(
    date: CalendarDate,
    hour: u32,
    minute: u32,
) -> ([PlanetPosition; 7], Vec<Aspect>) {
    let positions = planet_positions(date.day_of_year(), minute_of_day(hour, minute));
    let aspects = detect_aspects(&positions);
    (positions, aspects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_parses() {
        let date = parse_iso_date("2024-11-01").unwrap();
        assert_eq!(date, CalendarDate::new(2024, 11, 1));
        assert!(parse_iso_date("2024-13-01").is_none());
        assert!(parse_iso_date("2023-02-29").is_none());
        assert!(parse_iso_date("nonsense").is_none());
    }

    #[test]
    fn hhmm_parses() {
        assert_eq!(parse_hhmm("09:30"), Some((9, 30)));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12"), None);
    }

    #[test]
    fn day_numbers_from_calendar_date() {
        // 2024-11-11: daySum 2 + monthSum 2 + yearSum 8 = 12 → primary 3
        let numbers = day_numbers(CalendarDate::new(2024, 11, 11), None);
        assert_eq!(numbers.primary, 3);
        assert_eq!(numbers.secondary, Some(12));

        let with_path = day_numbers(CalendarDate::new(2024, 11, 11), Some(4));
        assert_eq!(with_path.personal, Some(7));
    }

    #[test]
    fn alignment_chart_aspects_match_listed_positions() {
        let (positions, aspects) = alignment_chart(CalendarDate::new(2024, 6, 1), 12, 0);
        for aspect in &aspects {
            let from = positions
                .iter()
                .find(|pos| pos.planet == aspect.from)
                .unwrap();
            let to = positions
                .iter()
                .find(|pos| pos.planet == aspect.to)
                .unwrap();
            let mut separation = (from.angle_deg - to.angle_deg).abs() % 360.0;
            if separation > 180.0 {
                separation = 360.0 - separation;
            }
            assert!((separation - aspect.separation_deg).abs() < 1e-9);
        }
    }
}
