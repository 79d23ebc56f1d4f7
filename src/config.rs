//! Command-line and environment configuration shared by the binaries.
//!
//! Every option can also be set through an environment variable, which is
//! how the server is usually configured in containers:
//!
//! | Flag | Variable | Default |
//! |------|----------|---------|
//! | `--luhn` | `CARDCHECKER_LUHN` | `reference` |
//! | `--match-order` | `CARDCHECKER_MATCH_ORDER` | `most-specific` |
//! | `--rules` | `CARDCHECKER_RULES` | built-in table |
//! | `--host` (server) | `HOST` | `0.0.0.0` |
//! | `--port` (server) | `PORT` | `8080` |

use crate::classifier::CardClassifier;
use crate::error::RuleError;
use crate::luhn::LuhnMode;
use crate::network::{MatchOrder, RuleTable};
use crate::rules_json::JsonRuleLoader;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "server")]
use std::net::{IpAddr, SocketAddr};

/// Checksum comparison rule as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LuhnArg {
    /// Reject numbers whose weighted sum is a multiple of ten
    Reference,
    /// Textbook modulus-10 comparison
    Standard,
}

impl From<LuhnArg> for LuhnMode {
    fn from(arg: LuhnArg) -> Self {
        match arg {
            LuhnArg::Reference => LuhnMode::Reference,
            LuhnArg::Standard => LuhnMode::Standard,
        }
    }
}

/// Rule ordering as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Longest prefixes first
    MostSpecific,
    /// Declaration order
    Declared,
}

impl From<OrderArg> for MatchOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::MostSpecific => MatchOrder::MostSpecific,
            OrderArg::Declared => MatchOrder::Declared,
        }
    }
}

/// Options that select how numbers are checked and classified.
#[derive(Debug, Clone, Args)]
pub struct ClassifierArgs {
    /// Checksum comparison rule
    #[arg(long, env = "CARDCHECKER_LUHN", value_enum, default_value_t = LuhnArg::Reference)]
    pub luhn: LuhnArg,

    /// Order in which prefix rules are tried
    #[arg(long, env = "CARDCHECKER_MATCH_ORDER", value_enum, default_value_t = OrderArg::MostSpecific)]
    pub match_order: OrderArg,

    /// JSON file replacing the built-in network table
    #[arg(long, env = "CARDCHECKER_RULES")]
    pub rules: Option<PathBuf>,
}

impl ClassifierArgs {
    /// Loads the rule table and builds a classifier.
    ///
    /// # Errors
    ///
    /// Fails if `--rules` names a file that cannot be read or parsed.
    pub fn build(&self) -> Result<CardClassifier, RuleError> {
        let order = MatchOrder::from(self.match_order);
        let table = match &self.rules {
            Some(path) => Arc::new(JsonRuleLoader::from_file(path, order)?),
            None if order == MatchOrder::MostSpecific => RuleTable::builtin(),
            None => Arc::new(RuleTable::builtin_with_order(order)),
        };
        Ok(CardClassifier::new(table).with_luhn_mode(self.luhn.into()))
    }
}

/// Configuration of the HTTP server.
#[cfg(feature = "server")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "cardchecker-server")]
#[command(author, version, about = "Card number check and network classification API")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[command(flatten)]
    pub classifier: ClassifierArgs,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// The socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        classifier: ClassifierArgs,
    }

    #[test]
    fn test_explicit_options() {
        let cli = TestCli::try_parse_from([
            "test",
            "--luhn",
            "standard",
            "--match-order",
            "declared",
        ])
        .unwrap();
        assert_eq!(cli.classifier.luhn, LuhnArg::Standard);
        assert_eq!(cli.classifier.match_order, OrderArg::Declared);

        let classifier = cli.classifier.build().unwrap();
        assert_eq!(classifier.luhn_mode(), LuhnMode::Standard);
        assert_eq!(classifier.table().order(), MatchOrder::Declared);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(TestCli::try_parse_from(["test", "--luhn", "mod11"]).is_err());
    }

    #[test]
    fn test_missing_rules_file() {
        let cli = TestCli::try_parse_from([
            "test",
            "--rules",
            "/nonexistent/networks.json",
        ])
        .unwrap();
        assert!(matches!(cli.classifier.build(), Err(RuleError::Io(_))));
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_server_config() {
        let config =
            ServerConfig::try_parse_from(["cardchecker-server", "--host", "127.0.0.1", "--port", "9090"])
                .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:9090".parse().unwrap());
    }
}
