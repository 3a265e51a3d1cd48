use std::io;
use std::path::PathBuf;

use aura_rs::{AuraConfig, AuraError, ProviderMode, UtcTime};
use aura_vedic_base::{nakshatra_from_longitude, rashi_from_longitude, rashi_lord};
use chrono::{NaiveDate, NaiveTime};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "aura", about = "Sidereal transit engine CLI")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Position provider: auto, precise or fallback
    #[arg(long, global = true)]
    provider: Option<ProviderMode>,
    /// Log at debug level
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// A recorded birth: date plus optional UTC time.
#[derive(Args)]
struct Birth {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth: NaiveDate,
    /// Birth time (hh:mm[:ss], UTC); defaults to the configured hour
    #[arg(long)]
    birth_time: Option<NaiveTime>,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a UTC timestamp
    Jd {
        /// UTC timestamp (YYYY-MM-DDThh:mm:ssZ)
        timestamp: UtcTime,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Tropical sun sign for a birth date
    SunSign {
        /// Birth date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Positions of all nine bodies
    Chart {
        /// UTC timestamp (YYYY-MM-DDThh:mm:ssZ)
        timestamp: UtcTime,
        /// Birth date; adds houses from the natal Moon sign
        #[arg(long)]
        birth: Option<NaiveDate>,
        /// Birth time (hh:mm[:ss], UTC)
        #[arg(long, requires = "birth")]
        birth_time: Option<NaiveTime>,
    },
    /// Transit records relative to the natal Moon sign
    Transits {
        #[command(flatten)]
        birth: Birth,
        /// UTC timestamp; defaults to now
        #[arg(long)]
        at: Option<UtcTime>,
    },
    /// Cosmic-battery score
    Battery {
        #[command(flatten)]
        birth: Birth,
        /// UTC timestamp; defaults to now
        #[arg(long)]
        at: Option<UtcTime>,
    },
    /// Full daily transit report
    Report {
        #[command(flatten)]
        birth: Birth,
        /// UTC timestamp; defaults to now
        #[arg(long)]
        at: Option<UtcTime>,
    },
    /// Sign, degree and nakshatra of every body at a timestamp
    Positions {
        /// UTC timestamp (YYYY-MM-DDThh:mm:ssZ)
        timestamp: UtcTime,
        #[command(flatten)]
        birth: Birth,
    },
    /// Vimshottari mahadashas from birth
    Dasha {
        #[command(flatten)]
        birth: Birth,
        /// UTC timestamp marking the current period; defaults to now
        #[arg(long)]
        at: Option<UtcTime>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt().with_writer(io::stderr).with_env_filter(filter).init();
}

fn init_engine(cli: &Cli) -> Result<(), AuraError> {
    let mut config = AuraConfig::load(cli.config.as_deref())?;
    if let Some(provider) = cli.provider {
        config.engine.provider = provider;
    }
    aura_rs::init(config)
}

fn birth_instant(birth: &Birth) -> Result<UtcTime, AuraError> {
    aura_rs::birth_instant(birth.birth, birth.birth_time)
}

fn run(cli: Cli) -> Result<(), AuraError> {
    match &cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(*lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi), {} sign, lord {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms(),
                info.degrees_in_rashi,
                info.rashi.element().name(),
                rashi_lord(info.rashi)
            );
            return Ok(());
        }
        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(*lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.lord
            );
            return Ok(());
        }
        Commands::SunSign { date } => {
            println!("{}", aura_rs::sun_sign_from_birth_date(*date));
            return Ok(());
        }
        _ => {}
    }

    init_engine(&cli)?;
    tracing::debug!(provider = ?aura_rs::engine()?.provider_kind(), "engine ready");

    match cli.command {
        Commands::Rashi { .. } | Commands::Nakshatra { .. } | Commands::SunSign { .. } => {}

        Commands::Jd { timestamp } => {
            let jd = aura_rs::julian_day(&timestamp)?;
            let aya = aura_rs::ayanamsa(&timestamp)?;
            println!("JD: {jd:.6}");
            println!("Ayanamsha (Lahiri): {aya:.6} deg");
        }

        Commands::Chart {
            timestamp,
            birth,
            birth_time,
        } => {
            let reference = match birth {
                Some(date) => Some(aura_rs::birth_instant(date, birth_time)?),
                None => None,
            };
            let chart = aura_rs::assemble_chart(&timestamp, reference.as_ref())?;
            println!("Chart at {timestamp} (JD {:.6})", chart.jd);
            println!("Ayanamsha: {:.6} deg", chart.ayanamsa);
            if let Some(r) = chart.reference_rashi {
                println!("Reference Moon sign: {r}");
            }
            for body in &chart {
                let retro = if body.is_retrograde { " R" } else { "" };
                let house = body
                    .house
                    .map(|h| format!("  house {h:>2}"))
                    .unwrap_or_default();
                println!(
                    "  {:<8} {:>10.4}  {:<12} {:>7.4}  {:<17} pada {}{house}{retro}",
                    body.graha.english_name(),
                    body.longitude,
                    body.rashi.western_name(),
                    body.sign_degree,
                    body.nakshatra.name(),
                    body.pada
                );
            }
        }

        Commands::Transits { birth, at } => {
            let reference = birth_instant(&birth)?;
            let at = at.unwrap_or_else(UtcTime::now);
            for t in aura_rs::transits(&reference, &at)? {
                let mut flags = String::new();
                if t.is_retrograde {
                    flags.push_str(" R");
                }
                if t.is_combust {
                    flags.push_str(" C");
                }
                println!(
                    "{:<8} {:<12} house {:>2}{flags}  {}",
                    t.graha.english_name(),
                    t.rashi.western_name(),
                    t.house,
                    t.aspect_summary()
                );
            }
        }

        Commands::Battery { birth, at } => {
            let reference = birth_instant(&birth)?;
            let at = at.unwrap_or_else(UtcTime::now);
            let score = aura_rs::battery(&reference, &at)?;
            println!("{}% ({})", score.percentage, score.level);
            println!("{}", score.message);
            for factor in &score.factors {
                println!("  • {factor}");
            }
        }

        Commands::Report { birth, at } => {
            let reference = birth_instant(&birth)?;
            let at = at.unwrap_or_else(UtcTime::now);
            println!("{}", aura_rs::format_report(&reference, &at)?);
        }

        Commands::Positions { timestamp, birth } => {
            let reference = birth_instant(&birth)?;
            println!("{}", aura_rs::format_positions_at(&timestamp, &reference)?);
        }

        Commands::Dasha { birth, at } => {
            let reference = birth_instant(&birth)?;
            let at = at.unwrap_or_else(UtcTime::now);
            let periods = aura_rs::mahadashas(&reference)?;
            let current = aura_rs::current_mahadasha(&reference, &at)?;
            for p in &periods {
                let start = UtcTime::from_julian_day(p.start_jd)?;
                let end = UtcTime::from_julian_day(p.end_jd)?;
                let marker = if current.as_ref() == Some(p) { "  <- current" } else { "" };
                println!(
                    "{}. {:<8} {} .. {}  ({:.2} y){marker}",
                    p.order,
                    p.lord.english_name(),
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d"),
                    p.duration_years()
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
