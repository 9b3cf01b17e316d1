//! Market overview figures derived from the current list.

use super::StatCard;
use crate::domain::market::Cryptocurrency;
use crate::shared::fmt::currency::format_compact;
use crate::shared::fmt::num::display_fixed;
use crate::shared::Currency;

const BITCOIN_ID: &str = "bitcoin";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketOverview {
    /// Sum of market caps over the listed assets.
    pub total_market_cap: f64,
    /// Bitcoin's share of `total_market_cap` in percent, when listed.
    pub btc_dominance: Option<f64>,
    pub asset_count: usize,
}

impl MarketOverview {
    pub fn from_list(list: &[Cryptocurrency]) -> Self {
        let total_market_cap: f64 = list.iter().map(|c| c.market_cap).sum();
        let btc_dominance = list
            .iter()
            .find(|c| c.id.as_str() == BITCOIN_ID)
            .filter(|_| total_market_cap > 0.0)
            .map(|btc| btc.market_cap / total_market_cap * 100.0);
        Self {
            total_market_cap,
            btc_dominance,
            asset_count: list.len(),
        }
    }

    pub fn cards(&self, currency: Currency) -> Vec<StatCard> {
        vec![
            StatCard::new(
                "Total Market Cap",
                format_compact(self.total_market_cap, currency.as_str()),
            ),
            StatCard::new(
                "BTC Dominance",
                self.btc_dominance
                    .map(|d| format!("{}%", display_fixed(d, 1)))
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            StatCard::new("Tracked Assets", self.asset_count.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::crypto;

    #[test]
    fn test_overview_from_list() {
        let mut btc = crypto("bitcoin", "Bitcoin", "btc", 1.0);
        btc.market_cap = 600.0;
        let mut eth = crypto("ethereum", "Ethereum", "eth", 1.0);
        eth.market_cap = 400.0;

        let overview = MarketOverview::from_list(&[btc, eth]);
        assert_eq!(overview.total_market_cap, 1000.0);
        assert_eq!(overview.btc_dominance, Some(60.0));
        assert_eq!(overview.asset_count, 2);

        let cards = overview.cards(Currency::Usd);
        assert_eq!(cards[0].value, "$1.00K");
        assert_eq!(cards[1].value, "60.0%");
        assert_eq!(cards[2].value, "2");
    }

    #[test]
    fn test_overview_without_bitcoin() {
        let overview = MarketOverview::from_list(&[crypto("ethereum", "Ethereum", "eth", 1.0)]);
        assert!(overview.btc_dominance.is_none());
        assert_eq!(overview.cards(Currency::Usd)[1].value, "N/A");
    }

    #[test]
    fn test_overview_of_empty_list() {
        let overview = MarketOverview::from_list(&[]);
        assert_eq!(overview.total_market_cap, 0.0);
        assert_eq!(overview.asset_count, 0);
        assert!(overview.btc_dominance.is_none());
    }
}
