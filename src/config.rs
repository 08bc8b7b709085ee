use log::warn;
use std::env;

const DEFAULT_SCALE: f64 = 1.0;
const MAX_SCALE: f64 = 4.0;

/// Runtime options, read from the environment.
///
/// * `DEBUG=true` enables the bounding box overlay.
/// * `DUEL_SCALE` sets the initial window scale, between 1 and 4.
#[derive(Debug, PartialEq)]
pub(crate) struct Config {
    pub(crate) debug: bool,
    pub(crate) scale: f64,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::parse(env::var("DEBUG").ok(), env::var("DUEL_SCALE").ok())
    }

    fn parse(debug: Option<String>, scale: Option<String>) -> Self {
        let debug = debug.and_then(|value| value.parse().ok()).unwrap_or(false);

        let scale = match scale.map(|value| value.parse::<f64>()) {
            None => DEFAULT_SCALE,
            Some(Ok(scale)) if scale.is_finite() => scale.clamp(DEFAULT_SCALE, MAX_SCALE),
            Some(_) => {
                warn!("Ignoring invalid DUEL_SCALE, using {DEFAULT_SCALE}");
                DEFAULT_SCALE
            }
        };

        Self { debug, scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(debug: Option<&str>, scale: Option<&str>) -> Config {
        Config::parse(debug.map(String::from), scale.map(String::from))
    }

    #[test]
    fn defaults() {
        let expected = Config {
            debug: false,
            scale: 1.0,
        };
        assert_eq!(parse(None, None), expected);
    }

    #[test]
    fn debug_flag() {
        assert!(parse(Some("true"), None).debug);
        assert!(!parse(Some("false"), None).debug);
        assert!(!parse(Some("yes please"), None).debug, "Unparsable is off");
    }

    #[test]
    fn scale_is_clamped() {
        assert_eq!(parse(None, Some("2")).scale, 2.0);
        assert_eq!(parse(None, Some("0.25")).scale, 1.0);
        assert_eq!(parse(None, Some("10")).scale, 4.0);
        assert_eq!(parse(None, Some("huge")).scale, 1.0);
        assert_eq!(parse(None, Some("NaN")).scale, 1.0);
    }
}
