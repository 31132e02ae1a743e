//! Market Data Adapters
//!
//! WebSocket-based implementations of `MarketDataPort` for streaming market data.

mod adapter;

pub use adapter::AlpacaMarketDataAdapter;
