//! Compiled-in issuing network table.
//!
//! Entries are listed in declaration order. [`RuleTable`](crate::network::RuleTable)
//! rearranges them according to its [`MatchOrder`](crate::network::MatchOrder);
//! under the default order the longest prefixes are tried first, and among
//! equal widths the entry listed here first wins (so `55` is Diners Club
//! United States & Canada rather than Mastercard).

use crate::network::NetworkRule;

/// Built-in prefix rules.
pub static BUILTIN_RULES: [NetworkRule; 60] = [
    // American Express
    NetworkRule::literal("34", "American Express"),
    NetworkRule::literal("37", "American Express"),
    // Bankcard
    NetworkRule::literal("5610", "Bankcard"),
    NetworkRule::range(560221, 560225, "Bankcard"),
    NetworkRule::literal("31", "China T-Union"),
    NetworkRule::literal("62", "China UnionPay"),
    // Diners Club
    NetworkRule::literal("36", "Diners Club International"),
    NetworkRule::literal("55", "Diners Club United States & Canada"),
    // Discover
    NetworkRule::literal("6011", "Discover Card"),
    NetworkRule::range(644, 649, "Discover Card"),
    NetworkRule::literal("647", "Discover Card"),
    NetworkRule::range(622126, 622925, "Discover Card"),
    NetworkRule::range(60400100, 60420099, "UkrCard"),
    // RuPay
    NetworkRule::literal("60", "RuPay"),
    NetworkRule::literal("81", "RuPay"),
    NetworkRule::literal("82", "RuPay"),
    NetworkRule::literal("508", "RuPay"),
    NetworkRule::literal("353", "RuPay"),
    NetworkRule::literal("356", "RuPay"),
    NetworkRule::literal("636", "InterPayment"),
    NetworkRule::range(637, 639, "InstaPayment"),
    NetworkRule::range(3528, 3589, "JCB"),
    // Maestro
    NetworkRule::literal("676770", "Maestro UK"),
    NetworkRule::literal("676774", "Maestro UK"),
    NetworkRule::literal("5018", "Maestro"),
    NetworkRule::literal("5020", "Maestro"),
    NetworkRule::literal("5038", "Maestro"),
    NetworkRule::literal("5893", "Maestro"),
    NetworkRule::literal("6304", "Maestro"),
    NetworkRule::literal("6761", "Maestro"),
    NetworkRule::literal("6762", "Maestro"),
    NetworkRule::literal("6763", "Maestro"),
    // Dankort
    NetworkRule::literal("5019", "Dankort"),
    NetworkRule::literal("4571", "Dankort"),
    NetworkRule::range(2200, 2204, "Mir"),
    NetworkRule::literal("2205", "BORICA"),
    // Mastercard
    NetworkRule::range(2221, 2720, "Mastercard"),
    NetworkRule::range(51, 55, "Mastercard"),
    // Switch
    NetworkRule::literal("4903", "Switch"),
    NetworkRule::literal("4905", "Switch"),
    NetworkRule::literal("4911", "Switch"),
    NetworkRule::literal("4936", "Switch"),
    NetworkRule::literal("564182", "Switch"),
    NetworkRule::literal("633110", "Switch"),
    NetworkRule::literal("6333", "Switch"),
    NetworkRule::literal("6759", "Switch | Maestro"),
    // Troy
    NetworkRule::literal("65", "Troy | Discover Card"),
    NetworkRule::literal("9792", "Troy"),
    // Visa Electron
    NetworkRule::literal("4026", "Visa Electron"),
    NetworkRule::literal("417500", "Visa Electron"),
    NetworkRule::literal("4508", "Visa Electron"),
    NetworkRule::literal("4844", "Visa Electron"),
    NetworkRule::literal("4913", "Visa Electron"),
    NetworkRule::literal("4917", "Visa Electron"),
    NetworkRule::literal("1", "UATP"),
    // Verve
    NetworkRule::range(506099, 506198, "Verve"),
    NetworkRule::range(650002, 650027, "Verve"),
    NetworkRule::range(507865, 507964, "Verve"),
    NetworkRule::literal("357111", "LankaPay"),
    NetworkRule::literal("9704", "Napas"),
];
