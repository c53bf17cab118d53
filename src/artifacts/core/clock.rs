use chrono::{Local, NaiveDateTime};

/// Environment variable pinning the clock, formatted as `DATE_FORMAT`
pub const AUTHOR_DATE_ENV: &str = "LGIT_AUTHOR_DATE";

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of commit and stash timestamps
///
/// Reads the local wall clock unless a fixed time was pinned, which keeps
/// commit output reproducible in tests.
#[derive(Debug, Clone, Default)]
pub struct Clock {
    fixed_time: Option<NaiveDateTime>,
}

impl Clock {
    pub fn system() -> Self {
        Self::default()
    }

    pub fn fixed(time: NaiveDateTime) -> Self {
        Clock {
            fixed_time: Some(time),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(AUTHOR_DATE_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                let time = NaiveDateTime::parse_from_str(value.trim(), DATE_FORMAT).map_err(
                    |e| anyhow::anyhow!("invalid {AUTHOR_DATE_ENV} value '{value}': {e}"),
                )?;
                Ok(Self::fixed(time))
            }
            _ => Ok(Self::system()),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.fixed_time
            .unwrap_or_else(|| Local::now().naive_local())
    }
}
