//! Data models for objectives, key results and milestones.
//!
//! This module contains the domain models edited by an
//! [`ObjectiveSession`](crate::session::ObjectiveSession). Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! # Ownership
//!
//! - An [`ObjectiveDraft`] owns its [`KeyResult`]s; insertion order is display
//!   order.
//! - A [`KeyResult`] owns its [`Milestone`]s.
//! - Ids come from one [`IdGenerator`] per session and are never reused.
//!
//! # Examples
//!
//! ```rust
//! use okr_core::models::{KeyResult, KeyResultId, Weight};
//!
//! let kr = KeyResult::suggested(KeyResultId(1), "Reduce churn by 8%");
//! assert!(kr.is_ai);
//! assert_eq!(kr.weight, Weight::DEFAULT);
//! assert_eq!(kr.progress, 100);
//!
//! assert!("42".parse::<Weight>().is_ok());
//! assert!("101".parse::<Weight>().is_err());
//! ```

pub mod ids;
pub mod key_result;
pub mod milestone;
pub mod objective;
pub mod weight;


pub use ids::{IdGenerator, KeyResultId, MilestoneId};
pub use key_result::KeyResult;
pub use milestone::Milestone;
pub use objective::{ObjectiveDraft, ObjectiveRecord};
pub use weight::Weight;
