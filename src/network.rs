//! Issuing network classification from prefix rules.
//!
//! A rule pairs a [`PrefixSpec`] with a network name. Specs are either a
//! literal prefix (`"34"`) or an inclusive numeric range written `"A_B"`
//! (`"644_649"`). A range matches when the card number starts with the
//! decimal form of any integer between its bounds.
//!
//! Rules in a [`RuleTable`] overlap (`"60"` and `"6011"`, `"62"` and
//! `"622126_622925"`), so the table has a fixed [`MatchOrder`] and the first
//! matching rule wins. When no rule matches, numbers starting with `4` fall
//! back to Visa.
//!
//! # Example
//!
//! ```
//! use cardchecker::network::RuleTable;
//!
//! let table = RuleTable::builtin();
//! assert_eq!(table.classify("6011514433546201"), Some("Discover Card"));
//! assert_eq!(table.classify("4532015112830366"), Some("Visa"));
//! assert_eq!(table.classify("7000000000000000"), None);
//! ```

use crate::error::RuleError;
use crate::rules::BUILTIN_RULES;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Separator between the bounds of a range spec.
pub const RANGE_SEPARATOR: char = '_';

/// Prefix of numbers classified by the fallback rule.
pub const FALLBACK_PREFIX: &str = "4";

/// Network reported by the fallback rule.
pub const FALLBACK_NETWORK: &str = "Visa";

/// Widest range bound accepted; anything wider cannot prefix a card number.
const MAX_BOUND_DIGITS: usize = 19;

/// Number of decimal digits in `n`.
#[inline]
fn digit_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// The prefix part of a network rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrefixSpec {
    /// Matches numbers starting with this exact digit string.
    Literal(Cow<'static, str>),
    /// Matches numbers starting with the decimal form of any integer in
    /// `low..=high`.
    Range {
        /// Inclusive lower bound.
        low: u64,
        /// Inclusive upper bound.
        high: u64,
    },
}

impl PrefixSpec {
    /// Parses `"34"` or `"644_649"`.
    ///
    /// # Errors
    ///
    /// Literals must be non-empty digit strings. Range bounds must be digit
    /// strings of at most 19 digits with the lower bound not exceeding the
    /// upper one.
    pub fn parse(spec: &str) -> Result<Self, RuleError> {
        let invalid = |reason| RuleError::InvalidSpec {
            spec: spec.to_string(),
            reason,
        };

        if spec.is_empty() {
            return Err(invalid("spec is empty"));
        }

        match spec.split_once(RANGE_SEPARATOR) {
            Some((low, high)) => {
                let low = parse_bound(low).map_err(invalid)?;
                let high = parse_bound(high).map_err(invalid)?;
                if low > high {
                    return Err(invalid("lower bound exceeds upper bound"));
                }
                Ok(Self::Range { low, high })
            }
            None => {
                if !spec.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid("prefix must contain only digits"));
                }
                Ok(Self::Literal(Cow::Owned(spec.to_string())))
            }
        }
    }

    /// Returns `true` if `number` starts with this prefix.
    ///
    /// Range specs compare the leading digits numerically, once per digit
    /// width between the two bounds. A leading zero never matches a
    /// multi-digit width, as no integer prints with one.
    pub fn matches(&self, number: &str) -> bool {
        match self {
            Self::Literal(prefix) => number.starts_with(prefix.as_ref()),
            Self::Range { low, high } => {
                (digit_width(*low)..=digit_width(*high)).any(|width| {
                    let Some(prefix) = number.get(..width) else {
                        return false;
                    };
                    if !prefix.bytes().all(|b| b.is_ascii_digit())
                        || (width > 1 && prefix.starts_with('0'))
                    {
                        return false;
                    }
                    prefix
                        .parse::<u64>()
                        .is_ok_and(|value| (*low..=*high).contains(&value))
                })
            }
        }
    }

    /// Length of the shortest prefix this spec can match.
    #[inline]
    pub fn width(&self) -> usize {
        match self {
            Self::Literal(prefix) => prefix.len(),
            Self::Range { low, .. } => digit_width(*low),
        }
    }
}

fn parse_bound(bound: &str) -> Result<u64, &'static str> {
    if bound.is_empty() || !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err("range bounds must contain only digits");
    }
    if bound.len() > MAX_BOUND_DIGITS {
        return Err("range bound is wider than 19 digits");
    }
    bound.parse().map_err(|_| "range bound out of range")
}

impl FromStr for PrefixSpec {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrefixSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(prefix) => f.write_str(prefix),
            Self::Range { low, high } => write!(f, "{}{}{}", low, RANGE_SEPARATOR, high),
        }
    }
}

/// A prefix spec and the network it identifies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkRule {
    spec: PrefixSpec,
    network: Cow<'static, str>,
}

impl NetworkRule {
    /// A literal-prefix rule for compiled-in tables.
    pub const fn literal(prefix: &'static str, network: &'static str) -> Self {
        Self {
            spec: PrefixSpec::Literal(Cow::Borrowed(prefix)),
            network: Cow::Borrowed(network),
        }
    }

    /// A range rule for compiled-in tables.
    pub const fn range(low: u64, high: u64, network: &'static str) -> Self {
        Self {
            spec: PrefixSpec::Range { low, high },
            network: Cow::Borrowed(network),
        }
    }

    /// Builds a rule from a textual spec such as `"2221_2720"`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardchecker::network::NetworkRule;
    ///
    /// let rule = NetworkRule::parse("2221_2720", "Mastercard").unwrap();
    /// assert!(rule.matches("2223000048400011"));
    /// assert!(!rule.matches("2721000000000000"));
    /// ```
    pub fn parse(spec: &str, network: impl Into<String>) -> Result<Self, RuleError> {
        let network = network.into();
        if network.trim().is_empty() {
            return Err(RuleError::EmptyNetwork {
                spec: spec.to_string(),
            });
        }
        Ok(Self {
            spec: PrefixSpec::parse(spec)?,
            network: Cow::Owned(network),
        })
    }

    /// The prefix part of the rule.
    #[inline]
    pub fn spec(&self) -> &PrefixSpec {
        &self.spec
    }

    /// The network name.
    #[inline]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns `true` if `number` starts with this rule's prefix.
    #[inline]
    pub fn matches(&self, number: &str) -> bool {
        self.spec.matches(number)
    }
}

impl fmt::Display for NetworkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.spec, self.network)
    }
}

/// Order in which a [`RuleTable`] tries its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchOrder {
    /// Longer prefixes first; rules of equal width keep declaration order.
    #[default]
    MostSpecific,
    /// Declaration order.
    Declared,
}

impl MatchOrder {
    /// Lowercase name used in configuration and CLI output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MostSpecific => "most-specific",
            Self::Declared => "declared",
        }
    }
}

/// An immutable, ordered set of network rules.
///
/// Built once and shared by reference; lookups take `&self` and need no
/// synchronization.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<NetworkRule>,
    order: MatchOrder,
}

impl RuleTable {
    /// Builds a table, arranging `rules` according to `order`.
    pub fn new(rules: impl IntoIterator<Item = NetworkRule>, order: MatchOrder) -> Self {
        let mut rules: Vec<NetworkRule> = rules.into_iter().collect();
        if order == MatchOrder::MostSpecific {
            // Stable sort: equal widths keep declaration order
            rules.sort_by_key(|rule| Reverse(rule.spec.width()));
        }
        Self { rules, order }
    }

    /// Builds a table from `(spec, network)` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use cardchecker::network::{MatchOrder, RuleTable};
    ///
    /// let table = RuleTable::from_specs(
    ///     [("60", "RuPay"), ("6011", "Discover Card")],
    ///     MatchOrder::MostSpecific,
    /// )
    /// .unwrap();
    /// assert_eq!(table.classify("6011000990139424"), Some("Discover Card"));
    /// assert_eq!(table.classify("6012000000000000"), Some("RuPay"));
    /// ```
    pub fn from_specs<I, S, N>(pairs: I, order: MatchOrder) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (S, N)>,
        S: AsRef<str>,
        N: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(spec, network)| NetworkRule::parse(spec.as_ref(), network))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules, order))
    }

    /// The compiled-in table in [`MatchOrder::MostSpecific`] order.
    ///
    /// Built on first use and shared afterwards.
    pub fn builtin() -> Arc<RuleTable> {
        static BUILTIN: OnceLock<Arc<RuleTable>> = OnceLock::new();
        Arc::clone(
            BUILTIN.get_or_init(|| Arc::new(Self::builtin_with_order(MatchOrder::MostSpecific))),
        )
    }

    /// A fresh copy of the compiled-in table arranged by `order`.
    pub fn builtin_with_order(order: MatchOrder) -> Self {
        Self::new(BUILTIN_RULES.iter().cloned(), order)
    }

    /// Rules in the order they are tried.
    #[inline]
    pub fn rules(&self) -> &[NetworkRule] {
        &self.rules
    }

    /// How the rules were arranged.
    #[inline]
    pub fn order(&self) -> MatchOrder {
        self.order
    }

    /// Number of rules, not counting the Visa fallback.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table has no rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule matching `number`, ignoring the fallback.
    pub fn matching_rule(&self, number: &str) -> Option<&NetworkRule> {
        self.rules.iter().find(|rule| rule.matches(number))
    }

    /// Classifies a normalized card number.
    ///
    /// Returns the network of the first matching rule, then `"Visa"` for
    /// numbers starting with `4`, then `None`.
    pub fn classify(&self, number: &str) -> Option<&str> {
        match self.matching_rule(number) {
            Some(rule) => Some(rule.network()),
            None if number.starts_with(FALLBACK_PREFIX) => Some(FALLBACK_NETWORK),
            None => None,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin_with_order(MatchOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Range matching as a brute-force scan over every integer in the range.
    fn expand_matches(low: u64, high: u64, number: &str) -> bool {
        (low..=high).any(|i| number.starts_with(&i.to_string()))
    }

    #[test]
    fn test_parse_literal() {
        let spec = PrefixSpec::parse("34").unwrap();
        assert_eq!(spec, PrefixSpec::Literal(Cow::Borrowed("34")));
        assert_eq!(spec.width(), 2);
        assert_eq!(spec.to_string(), "34");
    }

    #[test]
    fn test_parse_range() {
        let spec: PrefixSpec = "644_649".parse().unwrap();
        assert_eq!(spec, PrefixSpec::Range { low: 644, high: 649 });
        assert_eq!(spec.width(), 3);
        assert_eq!(spec.to_string(), "644_649");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "3a", "_5", "5_", "9_1", "1_2_3", "12345678901234567890_1", "4 5"] {
            assert!(PrefixSpec::parse(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_literal_matching() {
        let spec = PrefixSpec::parse("6011").unwrap();
        assert!(spec.matches("6011514433546201"));
        assert!(!spec.matches("6012514433546201"));
        assert!(!spec.matches("601"));
    }

    #[test]
    fn test_range_matching() {
        let spec = PrefixSpec::parse("644_649").unwrap();
        assert!(spec.matches("6445644564456445"));
        assert!(spec.matches("6490000000000000"));
        assert!(!spec.matches("6430000000000000"));
        assert!(!spec.matches("6500000000000000"));
        assert!(!spec.matches("64"));
    }

    #[test]
    fn test_range_with_mixed_widths() {
        let spec = PrefixSpec::parse("9_11").unwrap();
        assert!(spec.matches("9000"));
        assert!(spec.matches("1000"));
        assert!(spec.matches("1100"));
        assert!(!spec.matches("1200"));
        assert!(!spec.matches("0900"));
    }

    #[test]
    fn test_range_agrees_with_expansion() {
        let numbers = [
            "60400100123456",
            "60420099000000",
            "60420100000000",
            "6040009",
            "5060990000000000",
            "5061980000000000",
            "5061990000000000",
            "6221260000000000",
            "6229250000000000",
            "6229260000000000",
            "2720990000000000",
            "2221000000000000",
            "2220990000000000",
            "0000000000000000",
            "5500000000000004",
        ];
        for rule in BUILTIN_RULES.iter() {
            if let PrefixSpec::Range { low, high } = rule.spec() {
                for number in numbers {
                    assert_eq!(
                        rule.matches(number),
                        expand_matches(*low, *high, number),
                        "{} against {}",
                        rule,
                        number
                    );
                }
            }
        }
    }

    #[test]
    fn test_zero_bound() {
        let spec = PrefixSpec::parse("0_3").unwrap();
        assert!(spec.matches("0123"));
        assert!(spec.matches("3999"));
        assert!(!spec.matches("4000"));
    }

    #[test]
    fn test_rule_parse_rejects_empty_network() {
        assert!(matches!(
            NetworkRule::parse("34", "  "),
            Err(RuleError::EmptyNetwork { .. })
        ));
    }

    #[test]
    fn test_most_specific_order() {
        let table = RuleTable::from_specs(
            [("62", "China UnionPay"), ("622126_622925", "Discover Card")],
            MatchOrder::MostSpecific,
        )
        .unwrap();
        assert_eq!(table.rules()[0].network(), "Discover Card");
        assert_eq!(table.classify("6221260000000000"), Some("Discover Card"));
        assert_eq!(table.classify("6200000000000000"), Some("China UnionPay"));
    }

    #[test]
    fn test_declared_order() {
        let table = RuleTable::from_specs(
            [("62", "China UnionPay"), ("622126_622925", "Discover Card")],
            MatchOrder::Declared,
        )
        .unwrap();
        assert_eq!(table.order(), MatchOrder::Declared);
        assert_eq!(table.classify("6221260000000000"), Some("China UnionPay"));
    }

    #[test]
    fn test_equal_width_keeps_declaration_order() {
        let table = RuleTable::from_specs(
            [("55", "Diners Club United States & Canada"), ("51_55", "Mastercard")],
            MatchOrder::MostSpecific,
        )
        .unwrap();
        assert_eq!(
            table.classify("5500000000000004"),
            Some("Diners Club United States & Canada")
        );
        assert_eq!(table.classify("5100000000000000"), Some("Mastercard"));
    }

    #[test]
    fn test_visa_fallback() {
        let table = RuleTable::new(Vec::new(), MatchOrder::MostSpecific);
        assert!(table.is_empty());
        assert_eq!(table.classify("4000000000000002"), Some("Visa"));
        assert_eq!(table.classify("5000000000000000"), None);
    }

    #[test]
    fn test_table_rule_beats_fallback() {
        let table = RuleTable::builtin();
        assert_eq!(table.classify("4571000000000001"), Some("Dankort"));
        assert_eq!(table.classify("4026000000000002"), Some("Visa Electron"));
        assert_eq!(table.classify("4242424242424242"), Some("Visa"));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = RuleTable::builtin();
        let b = RuleTable::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), BUILTIN_RULES.len());
        assert_eq!(a.order(), MatchOrder::MostSpecific);
    }

    #[test]
    fn test_most_specific_is_sorted_by_width() {
        let table = RuleTable::builtin();
        let widths: Vec<usize> = table.rules().iter().map(|r| r.spec().width()).collect();
        assert!(widths.windows(2).all(|w| w[0] >= w[1]));
    }
}
