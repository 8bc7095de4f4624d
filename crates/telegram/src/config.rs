use std::path::Path;

use {
    botmux_markup::DEFAULT_MAX_CHUNK_LEN,
    serde::{Deserialize, Serialize},
    tracing::debug,
};

use crate::{
    Error, Result,
    markdown::{SuperscriptPolicy, TELEGRAM_MAX_MESSAGE_LEN},
};

/// How reply text is interpreted by Telegram.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// botmux markup rendered to MarkdownV2.
    #[default]
    MarkdownV2,
    /// Text is already Telegram HTML and is sent unchanged.
    Html,
}

impl ParseMode {
    /// Value of the Bot API `parse_mode` field.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::MarkdownV2 => "MarkdownV2",
            Self::Html => "HTML",
        }
    }
}

/// Rendering settings for Telegram replies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TelegramFormatConfig {
    pub parse_mode: ParseMode,

    /// Chunks are kept strictly below this many bytes.
    pub max_message_len: usize,

    /// Preferred split point between chunks.
    pub boundary: String,

    pub superscript_policy: SuperscriptPolicy,
}

impl Default for TelegramFormatConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::default(),
            max_message_len: DEFAULT_MAX_CHUNK_LEN,
            boundary: "\n".into(),
            superscript_policy: SuperscriptPolicy::default(),
        }
    }
}

impl TelegramFormatConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_message_len == 0 || self.max_message_len > TELEGRAM_MAX_MESSAGE_LEN {
            return Err(Error::invalid_config(format!(
                "max_message_len must be between 1 and {TELEGRAM_MAX_MESSAGE_LEN}, got {}",
                self.max_message_len
            )));
        }
        Ok(())
    }
}

/// Load and validate a [`TelegramFormatConfig`] from a TOML file.
///
/// Settings are read from a `[telegram]` table when the file has one,
/// otherwise from the top level. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<TelegramFormatConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&raw)?;
    debug!(path = %path.display(), ?config, "loaded telegram config");
    Ok(config)
}

fn parse_config(raw: &str) -> Result<TelegramFormatConfig> {
    let mut value: toml::Table = toml::from_str(raw)?;
    let config: TelegramFormatConfig = match value.remove("telegram") {
        Some(section) => section.try_into()?,
        None => toml::Value::Table(value).try_into()?,
    };
    config.validate()?;
    Ok(config)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, std::io::Write};

    #[test]
    fn default_config() {
        let cfg = TelegramFormatConfig::default();
        assert_eq!(cfg.parse_mode, ParseMode::MarkdownV2);
        assert_eq!(cfg.max_message_len, 4000);
        assert_eq!(cfg.boundary, "\n");
        assert_eq!(cfg.superscript_policy, SuperscriptPolicy::DigitsOnly);
        cfg.validate().unwrap();
    }

    #[test]
    fn parse_mode_api_strings() {
        assert_eq!(ParseMode::MarkdownV2.as_api_str(), "MarkdownV2");
        assert_eq!(ParseMode::Html.as_api_str(), "HTML");
    }

    #[test]
    fn deserialize_from_json() {
        let json = r#"{ "parse_mode": "html", "boundary": " " }"#;
        let cfg: TelegramFormatConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.parse_mode, ParseMode::Html);
        assert_eq!(cfg.boundary, " ");
        // defaults for unspecified fields
        assert_eq!(cfg.max_message_len, 4000);
    }

    #[test]
    fn parses_telegram_section() {
        let cfg = parse_config(
            r#"
            [telegram]
            max_message_len = 1000
            superscript_policy = "keep_others"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.max_message_len, 1000);
        assert_eq!(cfg.superscript_policy, SuperscriptPolicy::KeepOthers);
        assert_eq!(cfg.parse_mode, ParseMode::MarkdownV2);
    }

    #[test]
    fn parses_top_level_keys() {
        let cfg = parse_config("parse_mode = \"html\"\n").unwrap();
        assert_eq!(cfg.parse_mode, ParseMode::Html);
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), TelegramFormatConfig::default());
    }

    #[test]
    fn rejects_oversized_limit() {
        let err = parse_config("max_message_len = 5000\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }), "{err}");
    }

    #[test]
    fn rejects_zero_limit() {
        let cfg = TelegramFormatConfig {
            max_message_len: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_config("parse_mode = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)), "{err}");
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telegram]\nboundary = \" \"").unwrap();
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.boundary, " ");
    }

    #[test]
    fn load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/botmux.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{err}");
    }
}
