use serde::Deserialize;

const DEFAULT_DEMO_USER_ID: i64 = 1;

/// Settings for the demo binary. The store itself takes none.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub demo_user_id: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let demo_user_id = parse_user_id(std::env::var("DEMO_USER_ID").ok());
        Ok(Self {
            database_url,
            demo_user_id,
        })
    }
}

fn parse_user_id(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_DEMO_USER_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_user_id_defaults_when_unset() {
        assert_eq!(parse_user_id(None), 1);
    }

    #[test]
    fn demo_user_id_defaults_when_unparsable() {
        assert_eq!(parse_user_id(Some("abc".into())), 1);
    }

    #[test]
    fn demo_user_id_parses_trimmed_value() {
        assert_eq!(parse_user_id(Some(" 42 ".into())), 42);
        assert_eq!(parse_user_id(Some("-3".into())), -3);
    }
}
