//! CKMT search tools module.
//!
//! One file per tool, each mapping its parameters onto a single endpoint of
//! the search API:
//! - `host`: everything known about one IP address
//! - `hosts`: filtered, paginated host search
//! - `facets`: aggregated count breakdowns
//! - `count`: number of matching hosts
//! - `ports`: ports seen on matching hosts
//! - `services`: all detected service names
//! - `stats`: index-wide statistics

pub mod common;
pub mod count;
pub mod facets;
pub mod host;
pub mod hosts;
pub mod ports;
pub mod services;
pub mod stats;

pub use count::{CountHostsParams, CountHostsTool};
pub use facets::{SearchFacetsParams, SearchFacetsTool};
pub use host::{SearchHostParams, SearchHostTool};
pub use hosts::{SearchHostsParams, SearchHostsTool};
pub use ports::{GetPortsParams, GetPortsTool};
pub use services::{GetServicesParams, GetServicesTool};
pub use stats::{GetStatsParams, GetStatsTool};
