//! gRPC `MarketDataService` implementation.

use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::{Stream, wrappers::ReceiverStream};
use tonic::{Request, Response, Status};

use super::proto::cream::v1::{
    GetOptionChainRequest, GetOptionChainResponse, GetSnapshotRequest, GetSnapshotResponse,
    MarketSnapshot, MarketStatus, OptionChain, Quote, SubscribeMarketDataRequest,
    SubscribeMarketDataResponse, SymbolSnapshot,
    market_data_service_server::{MarketDataService, MarketDataServiceServer},
};

use crate::application::ports::{MarketDataPort, MarketQuote, OptionType};

/// gRPC `MarketDataService` adapter.
pub struct MarketDataServiceAdapter<M>
where
    M: MarketDataPort,
{
    market_data: Arc<M>,
}

impl<M> MarketDataServiceAdapter<M>
where
    M: MarketDataPort,
{
    /// Create a new `MarketDataService` adapter.
    pub const fn new(market_data: Arc<M>) -> Self {
        Self { market_data }
    }
}

/// Create a `MarketDataService` gRPC server.
pub fn create_market_data_service<M>(
    market_data: Arc<M>,
) -> MarketDataServiceServer<MarketDataServiceAdapter<M>>
where
    M: MarketDataPort + 'static,
{
    let service = MarketDataServiceAdapter::new(market_data);
    MarketDataServiceServer::new(service)
}

#[tonic::async_trait]
impl<M> MarketDataService for MarketDataServiceAdapter<M>
where
    M: MarketDataPort + 'static,
{
    type SubscribeMarketDataStream =
        Pin<Box<dyn Stream<Item = Result<SubscribeMarketDataResponse, Status>> + Send>>;

    async fn subscribe_market_data(
        &self,
        request: Request<SubscribeMarketDataRequest>,
    ) -> Result<Response<Self::SubscribeMarketDataStream>, Status> {
        let req = request.into_inner();
        let symbols = req.symbols;

        tracing::info!(symbols = ?symbols, "Market data subscription started");

        let (tx, rx) = mpsc::channel(128);
        let market_data = Arc::clone(&self.market_data);

        tokio::spawn(async move {
            match market_data.get_quotes(&symbols).await {
                Ok(quotes) => {
                    for quote in quotes {
                        let response = SubscribeMarketDataResponse {
                            update: Some(
                                super::proto::cream::v1::subscribe_market_data_response::Update::Quote(
                                    convert_quote(&quote),
                                ),
                            ),
                        };
                        if tx.send(Ok(response)).await.is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to fetch quotes for stream");
                    let _ = tx
                        .send(Err(Status::internal(format!("Market data error: {e}"))))
                        .await;
                }
            }
        });

        let stream = ReceiverStream::new(rx);
        Ok(Response::new(Box::pin(stream)))
    }

    async fn get_snapshot(
        &self,
        request: Request<GetSnapshotRequest>,
    ) -> Result<Response<GetSnapshotResponse>, Status> {
        let req = request.into_inner();
        let symbols = req.symbols;

        tracing::debug!(symbols = ?symbols, "Getting market snapshot");

        let quotes = self
            .market_data
            .get_quotes(&symbols)
            .await
            .map_err(|e| Status::internal(format!("Failed to get quotes: {e}")))?;

        let symbol_snapshots: Vec<SymbolSnapshot> = quotes
            .iter()
            .map(|q| SymbolSnapshot {
                symbol: q.symbol.clone(),
                quote: Some(convert_quote(q)),
                bars: vec![],
                market_status: MarketStatus::Open.into(),
                day_high: 0.0,
                day_low: 0.0,
                prev_close: 0.0,
                open: 0.0,
                as_of: Some(prost_types::Timestamp::from(std::time::SystemTime::now())),
            })
            .collect();

        let snapshot = MarketSnapshot {
            environment: super::proto::cream::v1::Environment::Paper.into(),
            as_of: Some(prost_types::Timestamp::from(std::time::SystemTime::now())),
            market_status: MarketStatus::Open.into(),
            regime: super::proto::cream::v1::Regime::Unspecified.into(),
            symbols: symbol_snapshots,
        };

        Ok(Response::new(GetSnapshotResponse {
            snapshot: Some(snapshot),
        }))
    }

    async fn get_option_chain(
        &self,
        request: Request<GetOptionChainRequest>,
    ) -> Result<Response<GetOptionChainResponse>, Status> {
        let req = request.into_inner();
        let underlying = req.underlying;

        tracing::debug!(underlying = %underlying, "Getting option chain");

        let chain_data = self
            .market_data
            .get_option_chain(&underlying)
            .await
            .map_err(|e| Status::internal(format!("Failed to get option chain: {e}")))?;

        let underlying_price: f64 = chain_data
            .underlying_price
            .to_string()
            .parse()
            .unwrap_or(0.0);

        let options: Vec<super::proto::cream::v1::OptionQuote> = chain_data
            .options
            .iter()
            .map(|opt| {
                let contract = super::proto::cream::v1::OptionContract {
                    underlying: opt.contract.underlying.clone(),
                    expiration: opt.contract.expiration.clone(),
                    strike: opt.contract.strike.to_string().parse().unwrap_or(0.0),
                    option_type: match opt.contract.option_type {
                        OptionType::Call => super::proto::cream::v1::OptionType::Call.into(),
                        OptionType::Put => super::proto::cream::v1::OptionType::Put.into(),
                    },
                };

                let quote = opt.quote.as_ref().map(convert_quote);

                super::proto::cream::v1::OptionQuote {
                    contract: Some(contract),
                    quote,
                    implied_volatility: opt.implied_volatility,
                    delta: opt.greeks.as_ref().and_then(|g| g.delta),
                    gamma: opt.greeks.as_ref().and_then(|g| g.gamma),
                    theta: opt.greeks.as_ref().and_then(|g| g.theta),
                    vega: opt.greeks.as_ref().and_then(|g| g.vega),
                    rho: opt.greeks.as_ref().and_then(|g| g.rho),
                    open_interest: opt.open_interest,
                }
            })
            .collect();

        let chain = OptionChain {
            underlying: chain_data.underlying,
            underlying_price,
            options,
            as_of: Some(prost_types::Timestamp::from(std::time::SystemTime::now())),
        };

        Ok(Response::new(GetOptionChainResponse { chain: Some(chain) }))
    }
}

/// Convert a `MarketQuote` to a proto `Quote`.
fn convert_quote(quote: &MarketQuote) -> Quote {
    Quote {
        symbol: quote.symbol.clone(),
        bid: quote.bid.to_string().parse().unwrap_or(0.0),
        ask: quote.ask.to_string().parse().unwrap_or(0.0),
        bid_size: quote.bid_size,
        ask_size: quote.ask_size,
        last: quote.last.to_string().parse().unwrap_or(0.0),
        last_size: quote.last_size,
        volume: quote.volume,
        timestamp: Some(prost_types::Timestamp::from(std::time::SystemTime::now())),
    }
}
