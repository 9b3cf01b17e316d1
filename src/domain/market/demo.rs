//! Bundled demo snapshot shown when the markets endpoint is unavailable.

use super::Cryptocurrency;
use crate::shared::AssetId;

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    symbol: &str,
    name: &str,
    image: &str,
    current_price: f64,
    market_cap: f64,
    rank: u32,
    changes: [f64; 4],
) -> Cryptocurrency {
    let [day, week, month, year] = changes;
    Cryptocurrency {
        id: AssetId::from(id),
        symbol: symbol.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        current_price,
        market_cap,
        market_cap_rank: Some(rank),
        price_change_percentage_24h: day,
        price_change_percentage_7d_in_currency: Some(week),
        price_change_percentage_30d_in_currency: Some(month),
        price_change_percentage_1y_in_currency: Some(year),
    }
}

/// Ten well-known assets in market-cap rank order.
pub fn demo_cryptocurrencies() -> Vec<Cryptocurrency> {
    vec![
        entry(
            "bitcoin",
            "btc",
            "Bitcoin",
            "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            61245.32,
            1_203_456_789_012.0,
            1,
            [2.35, 5.78, 12.45, 42.67],
        ),
        entry(
            "ethereum",
            "eth",
            "Ethereum",
            "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
            3245.67,
            389_012_345_678.0,
            2,
            [1.23, 3.45, 8.91, 32.45],
        ),
        entry(
            "binancecoin",
            "bnb",
            "BNB",
            "https://assets.coingecko.com/coins/images/825/large/bnb-icon2_2x.png",
            567.89,
            87_654_321_098.0,
            3,
            [-0.45, 2.34, 5.67, 28.91],
        ),
        entry(
            "solana",
            "sol",
            "Solana",
            "https://assets.coingecko.com/coins/images/4128/large/solana.png",
            123.45,
            45_678_901_234.0,
            4,
            [3.21, 7.89, 15.67, 45.67],
        ),
        entry(
            "cardano",
            "ada",
            "Cardano",
            "https://assets.coingecko.com/coins/images/975/large/cardano.png",
            0.45,
            15_678_901_234.0,
            5,
            [-1.23, -2.34, 4.56, 12.34],
        ),
        entry(
            "ripple",
            "xrp",
            "XRP",
            "https://assets.coingecko.com/coins/images/44/large/xrp-symbol-white-128.png",
            0.56,
            28_901_234_567.0,
            6,
            [0.78, 1.23, 3.45, 9.87],
        ),
        entry(
            "polkadot",
            "dot",
            "Polkadot",
            "https://assets.coingecko.com/coins/images/12171/large/polkadot.png",
            6.78,
            7_890_123_456.0,
            7,
            [-0.56, 1.45, 5.67, 15.67],
        ),
        entry(
            "dogecoin",
            "doge",
            "Dogecoin",
            "https://assets.coingecko.com/coins/images/5/large/dogecoin.png",
            0.12,
            15_678_901_234.0,
            8,
            [4.56, 8.90, 12.34, 23.45],
        ),
        entry(
            "avalanche-2",
            "avax",
            "Avalanche",
            "https://assets.coingecko.com/coins/images/12559/large/Avalanche_Circle_RedWhite_Trans.png",
            34.56,
            11_234_567_890.0,
            9,
            [2.34, 5.67, 9.87, 21.34],
        ),
        entry(
            "chainlink",
            "link",
            "Chainlink",
            "https://assets.coingecko.com/coins/images/877/large/chainlink-new-logo.png",
            13.45,
            7_123_456_789.0,
            10,
            [1.23, 3.45, 7.89, 18.90],
        ),
    ]
}

/// Look up one asset of the demo snapshot.
pub fn demo_cryptocurrency(id: &AssetId) -> Option<Cryptocurrency> {
    demo_cryptocurrencies().into_iter().find(|c| &c.id == id)
}
