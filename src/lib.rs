//! # worldcup-api
//!
//! Read-only REST API over the World Cup relational dataset: players, teams,
//! tournaments, matches, stadiums, goals, and appearances, queried with
//! filters, sorting, and pagination.
//!
//! The heart of the crate is the generic [`query`] layer shared by every
//! resource: validated filters become AND-composed predicates on a SQL
//! fragment, values travel exclusively through a named parameter map, and
//! the pagination engine turns any fragment into a counted, windowed
//! [`query::PageResult`] envelope. Resources are thin declarative tables
//! over that core.
//!
//! ## Example
//!
//! ```rust,no_run
//! use worldcup_api::{config::Config, db, handlers, observability, server::Server, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     observability::init_tracing(&config)?;
//!
//!     let pool = db::create_pool(&config.database).await?;
//!     let app = handlers::router(AppState::new(pool));
//!
//!     Server::new(config).serve(app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod query;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
