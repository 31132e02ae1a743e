//! Message Parsing for Alpaca WebSocket Streams

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::types::{QuoteUpdate, TradeEvent, TradeUpdate, WebSocketError};

/// Raw stock quote message from Alpaca v2/sip stream.
#[derive(Debug, Deserialize)]
struct RawStockQuote {
    /// Message type ("q" for quote).
    #[serde(rename = "T")]
    #[allow(dead_code)]
    msg_type: String,
    /// Symbol.
    #[serde(rename = "S")]
    symbol: String,
    /// Bid price.
    #[serde(rename = "bp")]
    bid_price: f64,
    /// Ask price.
    #[serde(rename = "ap")]
    ask_price: f64,
    /// Bid size.
    #[serde(rename = "bs")]
    bid_size: i32,
    /// Ask size.
    #[serde(rename = "as")]
    ask_size: i32,
    /// Timestamp (RFC-3339).
    #[serde(rename = "t")]
    timestamp: String,
}

/// Raw options quote message from Alpaca v1beta1/opra stream.
#[derive(Debug, Deserialize)]
struct RawOptionsQuote {
    /// Message type ("q" for quote).
    #[serde(rename = "T")]
    #[allow(dead_code)]
    msg_type: String,
    /// OCC symbol.
    #[serde(rename = "S")]
    symbol: String,
    /// Bid price.
    #[serde(rename = "bp")]
    bid_price: f64,
    /// Ask price.
    #[serde(rename = "ap")]
    ask_price: f64,
    /// Bid size.
    #[serde(rename = "bs")]
    bid_size: i32,
    /// Ask size.
    #[serde(rename = "as")]
    ask_size: i32,
    /// Timestamp (RFC-3339).
    #[serde(rename = "t")]
    timestamp: String,
}

/// Raw trade update message from Alpaca trading stream.
#[derive(Debug, Deserialize)]
struct RawTradeUpdate {
    /// Stream name.
    #[allow(dead_code)]
    stream: Option<String>,
    /// Event type.
    event: Option<String>,
    /// Order data.
    order: Option<RawOrder>,
    /// Data wrapper (for alternative format).
    data: Option<RawTradeUpdateData>,
}

/// Alternative format for trade update data.
#[derive(Debug, Deserialize)]
struct RawTradeUpdateData {
    /// Event type.
    event: String,
    /// Order data.
    order: RawOrder,
}

/// Raw order data from trade update.
#[derive(Debug, Deserialize)]
struct RawOrder {
    /// Broker order ID.
    id: String,
    /// Client order ID.
    client_order_id: String,
    /// Symbol.
    symbol: String,
    /// Filled quantity.
    filled_qty: Option<String>,
    /// Average fill price.
    #[serde(rename = "filled_avg_price")]
    avg_fill_price: Option<String>,
    /// Timestamp.
    #[serde(rename = "filled_at")]
    filled_at: Option<String>,
    /// Created timestamp.
    created_at: Option<String>,
    /// Updated timestamp.
    updated_at: Option<String>,
}

/// Control message from Alpaca streams.
#[derive(Debug, Deserialize)]
pub struct ControlMessage {
    /// Message type.
    #[serde(rename = "T")]
    pub msg_type: String,
    /// Message content.
    #[allow(dead_code)]
    pub msg: Option<String>,
    /// Error code.
    #[allow(dead_code)]
    pub code: Option<i32>,
}

/// Parse a stock quote from JSON message.
///
/// # Errors
///
/// Returns error if the message cannot be parsed or is not a quote message.
pub fn parse_stock_quote(json: &str) -> Result<Option<QuoteUpdate>, WebSocketError> {
    // Alpaca sends messages as arrays
    let messages: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| WebSocketError::ParseError {
            message: format!("invalid JSON: {e}"),
        })?;

    for msg in messages {
        // Check message type
        let msg_type = msg.get("T").and_then(|v| v.as_str()).unwrap_or("");

        if msg_type == "q" {
            let quote: RawStockQuote =
                serde_json::from_value(msg).map_err(|e| WebSocketError::ParseError {
                    message: format!("invalid stock quote: {e}"),
                })?;

            let timestamp = parse_timestamp(&quote.timestamp)?;

            return Ok(Some(QuoteUpdate {
                symbol: quote.symbol,
                bid: decimal_from_f64(quote.bid_price),
                ask: decimal_from_f64(quote.ask_price),
                bid_size: quote.bid_size,
                ask_size: quote.ask_size,
                timestamp,
                is_option: false,
            }));
        }
    }

    Ok(None)
}

/// Parse an options quote from JSON or msgpack message.
///
/// # Errors
///
/// Returns error if the message cannot be parsed or is not a quote message.
pub fn parse_options_quote(json: &str) -> Result<Option<QuoteUpdate>, WebSocketError> {
    // Alpaca sends messages as arrays
    let messages: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| WebSocketError::ParseError {
            message: format!("invalid JSON: {e}"),
        })?;

    for msg in messages {
        let msg_type = msg.get("T").and_then(|v| v.as_str()).unwrap_or("");

        if msg_type == "q" {
            let quote: RawOptionsQuote =
                serde_json::from_value(msg).map_err(|e| WebSocketError::ParseError {
                    message: format!("invalid options quote: {e}"),
                })?;

            let timestamp = parse_timestamp(&quote.timestamp)?;

            return Ok(Some(QuoteUpdate {
                symbol: quote.symbol,
                bid: decimal_from_f64(quote.bid_price),
                ask: decimal_from_f64(quote.ask_price),
                bid_size: quote.bid_size,
                ask_size: quote.ask_size,
                timestamp,
                is_option: true,
            }));
        }
    }

    Ok(None)
}

/// Parse a trade update from JSON message.
///
/// # Errors
///
/// Returns error if the message cannot be parsed.
pub fn parse_trade_update(json: &str) -> Result<Option<TradeUpdate>, WebSocketError> {
    let raw: RawTradeUpdate =
        serde_json::from_str(json).map_err(|e| WebSocketError::ParseError {
            message: format!("invalid trade update JSON: {e}"),
        })?;

    // Handle both message formats
    let (event_str, order) = if let Some(data) = raw.data {
        (data.event, data.order)
    } else if let (Some(event), Some(order)) = (raw.event, raw.order) {
        (event, order)
    } else {
        return Ok(None);
    };

    let event = TradeEvent::from_alpaca_event(&event_str);

    let filled_qty = order
        .filled_qty
        .as_deref()
        .and_then(|s| s.parse::<f64>().ok())
        .map_or(Decimal::ZERO, decimal_from_f64);

    let avg_fill_price = order
        .avg_fill_price
        .as_deref()
        .and_then(|s| s.parse::<f64>().ok())
        .map(decimal_from_f64);

    let timestamp = order
        .filled_at
        .as_deref()
        .or(order.updated_at.as_deref())
        .or(order.created_at.as_deref())
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or_else(Utc::now);

    Ok(Some(TradeUpdate {
        event,
        order_id: order.id,
        client_order_id: order.client_order_id,
        symbol: order.symbol,
        filled_qty,
        avg_fill_price,
        timestamp,
    }))
}

/// Parse a control message (success, error, subscription).
///
/// # Errors
///
/// Returns error if the message cannot be parsed.
pub fn parse_control_message(json: &str) -> Result<Option<ControlMessage>, WebSocketError> {
    let messages: Vec<ControlMessage> =
        serde_json::from_str(json).map_err(|e| WebSocketError::ParseError {
            message: format!("invalid control message JSON: {e}"),
        })?;

    Ok(messages.into_iter().next())
}

/// Check if a message is a success response.
#[must_use]
pub fn is_success_message(json: &str) -> bool {
    if let Ok(Some(ctrl)) = parse_control_message(json) {
        ctrl.msg_type == "success"
    } else {
        false
    }
}

/// Check if a message is an error response.
#[must_use]
pub fn is_error_message(json: &str) -> bool {
    if let Ok(Some(ctrl)) = parse_control_message(json) {
        ctrl.msg_type == "error"
    } else {
        false
    }
}

/// Parse RFC-3339 timestamp.
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, WebSocketError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WebSocketError::ParseError {
            message: format!("invalid timestamp '{s}': {e}"),
        })
}

/// Convert f64 to Decimal with reasonable precision.
fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}
