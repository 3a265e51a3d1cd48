//! Golden text for the daily report and the positions-at report.
//!
//! Both use the mean-motion strategy, so the text is exact.

use aura_core::Engine;
use aura_search::{BatteryRules, format_positions_at, format_report};
use aura_time::UtcTime;

fn j2000() -> UtcTime {
    UtcTime::new(2000, 1, 1, 12, 0, 0.0).unwrap()
}

fn birth_1995() -> UtcTime {
    UtcTime::new(1995, 6, 15, 12, 0, 0.0).unwrap()
}

fn mid_january_2024() -> UtcTime {
    UtcTime::new(2024, 1, 15, 12, 0, 0.0).unwrap()
}

const REPORT_J2000: &str = "\
Current Date: January 01, 2000 12:00 UTC
User's Sun Sign: Capricorn
User's Moon Sign (Rashi): Libra
User's Birth Nakshatra: Swati (Pada 3)

CURRENT PLANETARY TRANSITS (Sidereal/Lahiri):
--------------------------------------------------
  Sun: Sagittarius — 3th house from Moon | Aspects: trine Jupiter
  Moon: Libra — 1th house from Moon | Aspects: opposite Jupiter, square Rahu, square Ketu
  Mars: Pisces [RETROGRADE] — 6th house from Moon | Aspects: opposite Venus
  Mercury: Scorpio [RETROGRADE] — 2th house from Moon | Aspects: trine Rahu
  Jupiter: Aries [RETROGRADE] — 7th house from Moon | Aspects: trine Sun, opposite Moon, square Rahu
  Venus: Virgo [RETROGRADE] — 12th house from Moon | Aspects: opposite Mars, trine Ketu
  Saturn: Aries [RETROGRADE] — 7th house from Moon
  Rahu: Cancer [RETROGRADE] — 10th house from Moon | Aspects: square Moon, trine Mercury, square Jupiter
  Ketu: Capricorn [RETROGRADE] — 4th house from Moon | Aspects: square Moon, square Jupiter, trine Venus

COSMIC BATTERY: 64% (good)
  • Moon in 1th house (favorable) ✨
  • Mars energizing 6th house (drive) 🔥
  • Mercury retrograde (communication disrupted) ☿️
  • Saturn in 7th house (heavy energy) 🪨
  • Rahu in 10th (amplifying ambition)";

const REPORT_2024: &str = "\
Current Date: January 15, 2024 12:00 UTC
User's Sun Sign: Gemini
User's Moon Sign (Rashi): Sagittarius
User's Birth Nakshatra: Uttara Ashadha (Pada 1)

CURRENT PLANETARY TRANSITS (Sidereal/Lahiri):
--------------------------------------------------
  Sun: Capricorn — 2th house from Moon | Aspects: square Venus, square Rahu, square Ketu
  Moon: Aquarius — 3th house from Moon | Aspects: conjunct Saturn
  Mars: Sagittarius — 1th house from Moon | Aspects: square Mercury, trine Jupiter
  Mercury: Virgo — 10th house from Moon | Aspects: square Mars
  Jupiter: Aries [RETROGRADE] — 5th house from Moon | Aspects: trine Mars
  Venus: Libra [RETROGRADE] — 11th house from Moon | Aspects: square Sun
  Saturn: Aquarius [RETROGRADE] — 3th house from Moon | Aspects: conjunct Moon
  Rahu: Pisces [RETROGRADE] — 4th house from Moon | Aspects: square Sun, opposite Ketu
  Ketu: Virgo [RETROGRADE] — 10th house from Moon | Aspects: square Sun, opposite Rahu

COSMIC BATTERY: 70% (good)
  • Moon in 3th house (neutral)
  • Mars agitating 1th house (tension)
  • Jupiter blessing 5th house (excellent) 🌟
  • Venus gracing 11th house (pleasure) 💫
  • Saturn in 3th house (productive)";

const POSITIONS_J2000: &str = "\
Planetary positions at 12:00 PM on January 01, 2000: 
  Sun: Sagittarius 16.47° in Purva Ashadha
  Moon: Libra 14.32° in Swati
  Mars: Pisces 1.43° (R) in Purva Bhadrapada
  Mercury: Scorpio 18.25° (R) in Jyeshtha
  Jupiter: Aries 10.35° (R) in Ashwini
  Venus: Virgo 7.98° (R) in Uttara Phalguni
  Saturn: Aries 26.08° (R) in Bharani
  Rahu: Cancer 11.04° (R) in Pushya
  Ketu: Capricorn 11.04° (R) in Shravana";

const POSITIONS_2024: &str = "\
Planetary positions at 12:00 PM on January 15, 2024: 
  Sun: Capricorn 0.11° in Uttara Ashadha
  Moon: Aquarius 22.74° in Purva Bhadrapada
  Mars: Sagittarius 12.0° in Mula
  Mercury: Virgo 8.61° in Uttara Phalguni
  Jupiter: Aries 19.5° (R) in Bharani
  Venus: Libra 4.35° (R) in Chitra
  Saturn: Aquarius 19.38° (R) in Shatabhisha
  Rahu: Pisces 25.77° (R) in Revati
  Ketu: Virgo 25.77° (R) in Chitra";

#[test]
fn report_at_j2000() {
    let engine = Engine::fallback();
    let text = format_report(&engine, &j2000(), &j2000(), &BatteryRules::default()).unwrap();
    assert_eq!(text, REPORT_J2000);
}

#[test]
fn report_mid_january_2024() {
    let engine = Engine::fallback();
    let text = format_report(
        &engine,
        &birth_1995(),
        &mid_january_2024(),
        &BatteryRules::default(),
    )
    .unwrap();
    assert_eq!(text, REPORT_2024);
}

#[test]
fn positions_at_j2000() {
    let engine = Engine::fallback();
    let text = format_positions_at(&engine, &j2000(), &j2000()).unwrap();
    assert_eq!(text, POSITIONS_J2000);
}

#[test]
fn positions_mid_january_2024() {
    let engine = Engine::fallback();
    let text = format_positions_at(&engine, &mid_january_2024(), &birth_1995()).unwrap();
    assert_eq!(text, POSITIONS_2024);
}

#[test]
fn report_honours_battery_bounds() {
    let engine = Engine::fallback();
    let rules = BatteryRules {
        max: 50,
        max_factors: 2,
        ..BatteryRules::default()
    };
    let text = format_report(&engine, &j2000(), &j2000(), &rules).unwrap();
    assert!(text.contains("COSMIC BATTERY: 50% (neutral)"));
    assert_eq!(text.matches("  • ").count(), 2);
}
