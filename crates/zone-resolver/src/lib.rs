//! # zone-resolver
//!
//! Resolution strategies for local date-times that fall in a time zone gap or
//! overlap.
//!
//! When a zone's UTC offset jumps forward, a span of wall-clock times never
//! happens (a gap). When it jumps backward, a span happens twice (an overlap).
//! A [`ZoneResolver`] decides which concrete offset date-time such a local time
//! denotes. Zone data comes from `chrono-tz`.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zone_resolver::{resolve, resolvers};
//!
//! let zone: chrono_tz::Tz = "Europe/Paris".parse().unwrap();
//! // 02:30 does not exist on the spring-forward day.
//! let local = NaiveDate::from_ymd_opt(2026, 3, 29)
//!     .unwrap()
//!     .and_hms_opt(2, 30, 0)
//!     .unwrap();
//!
//! let pushed = resolve(zone, local, resolvers::push_forward().as_ref()).unwrap();
//! assert_eq!(pushed.to_rfc3339(), "2026-03-29T03:30:00+02:00");
//!
//! assert!(resolve(zone, local, resolvers::strict().as_ref()).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] -- the `ZoneResolver` trait
//! - [`strategies`] -- the five built-in resolvers
//! - [`combination`] -- a resolver built from separate gap and overlap resolvers
//! - [`resolvers`] -- factory functions returning the shared instances
//! - [`policy`] -- named policies and the serde `ResolverConfig`
//! - [`discontinuity`] -- the transition value type
//! - [`transition`] -- `chrono-tz` backed gap/overlap detection
//! - [`dispatch`] -- resolve a local date-time end to end
//! - [`error`] -- Error types

pub mod combination;
pub mod discontinuity;
pub mod dispatch;
pub mod error;
pub mod policy;
pub mod resolver;
pub mod resolvers;
pub mod strategies;
pub mod transition;

pub use combination::Combination;
pub use discontinuity::Discontinuity;
pub use dispatch::{plus, resolve, resolve_with_previous};
pub use error::ResolveError;
pub use policy::{ResolverConfig, ResolverPolicy};
pub use resolver::{SharedResolver, ZoneResolver};
pub use transition::{classify, offset_at, parse_zone, LocalTimeKind};
