use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub cinema: CinemaConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CinemaConfig {
    pub name: String,
    pub tagline: String,
    pub seats_per_movie: i32,
    pub movies: Vec<MovieConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MovieConfig {
    pub name: String,
    /// Minutes since midnight
    pub showtime: u32,
}

impl Default for CinemaConfig {
    fn default() -> Self {
        Self {
            name: "SM Cinema Legazpi".to_string(),
            tagline: "Your entertainment destination!".to_string(),
            seats_per_movie: 10,
            movies: vec![
                MovieConfig { name: "Hello, Love, Again".to_string(), showtime: 13 * 60 },
                MovieConfig { name: "Moana 2".to_string(), showtime: 14 * 60 + 30 },
                MovieConfig { name: "The Wicked".to_string(), showtime: 17 * 60 },
            ],
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file is optional; missing keys fall back to the built-in cinema
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `BOXOFFICE__CINEMA__SEATS_PER_MOVIE=20`
            .add_source(config::Environment::with_prefix("BOXOFFICE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
