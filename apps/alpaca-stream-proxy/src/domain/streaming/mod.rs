//! Market Data Streaming Types
//!
//! Core domain types for market data: quotes, trades, and bars.
//! These types are codec-agnostic and represent the canonical
//! internal representation of market data.
