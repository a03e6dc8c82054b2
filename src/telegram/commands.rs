//! Command parsing and reply handlers.
//!
//! Commands are parsed by hand from message text, the way the bot's polling
//! loop sees them. Only the five known commands produce a reply; anything
//! else is ignored.

use crate::config::Config;
use crate::reports::ReportGenerator;

/// A recognized bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Volume,
    Ratio,
    /// `/volume_other <TOKEN_CA>`; `None` when the address is missing.
    VolumeOther(Option<String>),
    /// `/ratio_other <TOKEN_CA>`; `None` when the address is missing.
    RatioOther(Option<String>),
}

impl Command {
    /// Parse message text into a command.
    ///
    /// The command token is matched case-sensitively; an `@botname` suffix is
    /// stripped so commands keep working in group chats. Arguments are
    /// whitespace-delimited; only the first one is used. Returns `None` for
    /// anything that is not a known command.
    pub fn parse(text: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let first = words.next()?;
        let command = first.split('@').next().unwrap_or(first);
        let arg = words.next().map(str::to_string);

        match command {
            "/start" => Some(Self::Start),
            "/volume" => Some(Self::Volume),
            "/ratio" => Some(Self::Ratio),
            "/volume_other" => Some(Self::VolumeOther(arg)),
            "/ratio_other" => Some(Self::RatioOther(arg)),
            _ => None,
        }
    }
}

/// Produce the reply text for a command.
///
/// Fetching happens here; missing-argument commands reply with their usage
/// string without touching the network.
pub async fn respond(command: Command, generator: &ReportGenerator, config: &Config) -> String {
    match command {
        Command::Start => start_text(&config.home_symbol),
        Command::Volume => generator.volume_report(&config.home_token, true).await,
        Command::Ratio => generator.ratio_report(&config.home_token).await,
        Command::VolumeOther(Some(address)) => generator.volume_report(&address, false).await,
        Command::VolumeOther(None) => "Usage: /volume_other <TOKEN_CA>".to_string(),
        Command::RatioOther(Some(address)) => generator.ratio_report(&address).await,
        Command::RatioOther(None) => "Usage: /ratio_other <TOKEN_CA>".to_string(),
    }
}

/// Static welcome text listing the data commands.
fn start_text(home_symbol: &str) -> String {
    format!(
        "Welcome! Commands available:\n\
         /volume → {home} LP pairs by 24H volume\n\
         /ratio → {home} LP pairs by ratio\n\
         /volume_other <TOKEN_CA> → LP pairs of another token by 24H volume\n\
         /ratio_other <TOKEN_CA> → LP pairs of another token by ratio",
        home = home_symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::dexscreener::DexScreenerClient;

    fn generator() -> ReportGenerator {
        ReportGenerator::new(DexScreenerClient::new(15).unwrap(), "DRIP")
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/volume"), Some(Command::Volume));
        assert_eq!(Command::parse("/ratio"), Some(Command::Ratio));
        assert_eq!(
            Command::parse("/volume_other abc123"),
            Some(Command::VolumeOther(Some("abc123".to_string())))
        );
        assert_eq!(
            Command::parse("/ratio_other abc123"),
            Some(Command::RatioOther(Some("abc123".to_string())))
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(Command::parse("/volume_other"), Some(Command::VolumeOther(None)));
        assert_eq!(Command::parse("/ratio_other  "), Some(Command::RatioOther(None)));
    }

    #[test]
    fn test_parse_strips_bot_mention() {
        assert_eq!(Command::parse("/volume@dripbot"), Some(Command::Volume));
        assert_eq!(
            Command::parse("/volume_other@dripbot abc123"),
            Some(Command::VolumeOther(Some("abc123".to_string())))
        );
    }

    #[test]
    fn test_parse_uses_first_argument_only() {
        assert_eq!(
            Command::parse("/volume_other abc123 extra words"),
            Some(Command::VolumeOther(Some("abc123".to_string())))
        );
    }

    #[test]
    fn test_parse_is_case_sensitive_and_rejects_unknown_text() {
        assert_eq!(Command::parse("/Volume"), None);
        assert_eq!(Command::parse("/unknown"), None);
        assert_eq!(Command::parse("hello there"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[tokio::test]
    async fn test_missing_argument_replies_with_usage_and_no_fetch() {
        let generator = generator();
        let config = Config::default();

        let reply = respond(Command::VolumeOther(None), &generator, &config).await;
        assert_eq!(reply, "Usage: /volume_other <TOKEN_CA>");

        let reply = respond(Command::RatioOther(None), &generator, &config).await;
        assert_eq!(reply, "Usage: /ratio_other <TOKEN_CA>");
    }

    #[tokio::test]
    async fn test_start_lists_the_four_data_commands() {
        let generator = generator();
        let config = Config::default();

        let reply = respond(Command::Start, &generator, &config).await;
        assert!(reply.starts_with("Welcome! Commands available:"));
        assert!(reply.contains("/volume → DRIP LP pairs by 24H volume"));
        assert!(reply.contains("/ratio → DRIP LP pairs by ratio"));
        assert!(reply.contains("/volume_other <TOKEN_CA>"));
        assert!(reply.contains("/ratio_other <TOKEN_CA>"));
    }
}
