//! Swiss Ephemeris binding for the precise strategy.
//!
//! Compiled only with the `swisseph` feature. The data directory must exist
//! when the source is opened; a missing directory is reported as
//! [`EngineError::PreciseUnavailable`] so that `ProviderMode::Auto` can
//! select the mean-motion strategy instead.

use std::path::{Path, PathBuf};

use aura_time::UtcTime;
use aura_vedic_base::{Graha, normalize_360};
use libswisseph_sys::SE_SIDM_LAHIRI;
use swisseph::swe::{calc_ut, get_ayanamsa_ut, julday, set_ephe_path};

use crate::EngineError;
use crate::precise::SiderealSource;

const GREG_CAL: u32 = 1;
const FLG_SWIEPH: u32 = 2;
const FLG_SIDEREAL: u32 = 64;
const FLG_SPEED: u32 = 256;

/// Swiss Ephemeris body code for a directly computed graha.
const fn body_code(graha: Graha) -> Option<u32> {
    match graha {
        Graha::Surya => Some(0),
        Graha::Chandra => Some(1),
        Graha::Buddh => Some(2),
        Graha::Shukra => Some(3),
        Graha::Mangal => Some(4),
        Graha::Guru => Some(5),
        Graha::Shani => Some(6),
        // mean lunar node
        Graha::Rahu => Some(10),
        Graha::Ketu => None,
    }
}

/// The safe wrapper does not expose the sidereal-mode setter.
#[allow(unsafe_code)]
fn select_lahiri() {
    // SAFETY: plain scalar arguments; the library copies them into its
    // global sidereal settings.
    unsafe {
        libswisseph_sys::swe_set_sid_mode(SE_SIDM_LAHIRI as i32, 0.0, 0.0);
    }
}

/// Swiss Ephemeris data files on disk.
///
/// The library keeps its data path and sidereal mode in process-global
/// state; both are set by [`SiderealSource::set_lahiri_mode`].
#[derive(Debug)]
pub struct SwissSource {
    ephemeris_path: PathBuf,
    lahiri: bool,
}

impl SwissSource {
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Err(EngineError::PreciseUnavailable(format!(
                "ephemeris path {} does not exist",
                path.display()
            )));
        }
        Ok(Self {
            ephemeris_path: path.to_path_buf(),
            lahiri: false,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn ensure_lahiri(&self) -> Result<(), EngineError> {
        if self.lahiri {
            Ok(())
        } else {
            Err(EngineError::ExternalSource(
                "sidereal mode not selected".to_string(),
            ))
        }
    }
}

impl SiderealSource for SwissSource {
    fn set_lahiri_mode(&mut self) -> Result<(), EngineError> {
        let path = self
            .ephemeris_path
            .to_str()
            .filter(|p| !p.contains('\0'))
            .ok_or_else(|| {
                EngineError::PreciseUnavailable(format!(
                    "ephemeris path {} is not valid UTF-8",
                    self.ephemeris_path.display()
                ))
            })?;
        set_ephe_path(path);
        select_lahiri();
        self.lahiri = true;
        tracing::debug!(path, "swiss ephemeris set to lahiri");
        Ok(())
    }

    fn julian_day(&self, t: &UtcTime) -> f64 {
        julday(
            t.year(),
            t.month() as i32,
            t.day() as i32,
            t.day_hours(),
            GREG_CAL,
        )
    }

    fn ayanamsa(&self, jd: f64) -> Result<f64, EngineError> {
        self.ensure_lahiri()?;
        Ok(normalize_360(get_ayanamsa_ut(jd)))
    }

    fn sidereal_lon_speed(&self, graha: Graha, jd: f64) -> Result<(f64, f64), EngineError> {
        self.ensure_lahiri()?;
        let code = body_code(graha).ok_or(EngineError::UnsupportedBody(graha))?;
        let result = calc_ut(jd, code, FLG_SWIEPH | FLG_SIDEREAL | FLG_SPEED)
            .map_err(|e| EngineError::ExternalSource(format!("swiss ephemeris: {e}")))?;
        Ok((result.out[0], result.out[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PositionProvider;
    use crate::precise::PreciseProvider;

    const J2000: f64 = 2_451_545.0;

    fn provider() -> PreciseProvider<SwissSource> {
        let source = SwissSource::open(&std::env::temp_dir()).unwrap();
        PreciseProvider::new(source).unwrap()
    }

    #[test]
    fn ayanamsa_at_j2000_is_lahiri() {
        let ayan = provider().ayanamsa(J2000).unwrap();
        assert!((ayan - 23.857).abs() < 0.01, "ayanamsa = {ayan}");
    }

    #[test]
    fn sun_at_j2000_is_sidereal_sagittarius() {
        let sun = provider().position(Graha::Surya, J2000).unwrap();
        assert!((sun.longitude - 256.52).abs() < 0.1, "sun = {}", sun.longitude);
        assert!(!sun.is_retrograde);
    }

    #[test]
    fn queries_before_setup_are_rejected() {
        let source = SwissSource::open(&std::env::temp_dir()).unwrap();
        assert!(matches!(
            source.ayanamsa(J2000),
            Err(EngineError::ExternalSource(_))
        ));
    }

    #[test]
    fn gregorian_julian_day() {
        let source = SwissSource::open(&std::env::temp_dir()).unwrap();
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((source.julian_day(&t) - J2000).abs() < 1e-9);
    }

    #[test]
    fn missing_directory_is_unavailable() {
        assert!(matches!(
            SwissSource::open(Path::new("/nonexistent/aura/ephe")),
            Err(EngineError::PreciseUnavailable(_))
        ));
    }
}
