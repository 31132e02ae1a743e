//! Application Services
//!
//! Services that orchestrate domain logic and coordinate between ports.
//!
//! - `SubscriptionService`: Manages client subscriptions and routing
//! - `HealthService`: Monitors connection health and status
