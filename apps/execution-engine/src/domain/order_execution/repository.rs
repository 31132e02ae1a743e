//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use super::value_objects::OrderStatus;
use crate::domain::shared::{BrokerId, OrderId};

/// Repository trait for Order persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters (Postgres, in-memory, etc.).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Save an order (insert or update).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, order: &Order) -> Result<(), OrderError>;

    /// Find an order by its internal ID.
    ///
    /// # Errors
    ///
    /// Returns error if order not found or query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Find an order by broker's order ID.
    ///
    /// # Errors
    ///
    /// Returns error if query fails.
    async fn find_by_broker_id(&self, broker_id: &BrokerId) -> Result<Option<Order>, OrderError>;

    /// Find all orders with a given status.
    ///
    /// # Errors
    ///
    /// Returns error if query fails.
    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError>;

    /// Find all active (non-terminal) orders.
    ///
    /// # Errors
    ///
    /// Returns error if query fails.
    async fn find_active(&self) -> Result<Vec<Order>, OrderError>;

    /// Delete an order by ID.
    ///
    /// # Errors
    ///
    /// Returns error if order not found or deletion fails.
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;

    /// Check if an order exists.
    ///
    /// # Errors
    ///
    /// Returns error if query fails.
    async fn exists(&self, id: &OrderId) -> Result<bool, OrderError>;
}
