//! Evolutionary group partitioning with multi-factor compatibility scoring.
//!
//! Assigns a population of candidates to groups of bounded size so as to
//! maximize a weighted compatibility score:
//!
//! - **Scoring**: Bounded `[0, 1]` group score from interest overlap, major
//!   mix, year proximity and personality compatibility.
//! - **Partition**: Feasible group-size sequences and random size-valid
//!   partitions driven by an injected generator.
//! - **PaCS**: Partition-and-Cycle-Search, a population-of-worlds search
//!   with elitist lead groups, member-swap mutation and plateau-based
//!   termination.
//!
//! # Architecture
//!
//! The crate is a pure computation: it receives a closed candidate
//! snapshot, a configuration, a compatibility lookup and a random source,
//! and returns a result. Fetching candidates and persisting runs belong to
//! the caller.
//!
//! ```
//! use u_pacs::pacs::{PacsConfig, PacsRunner};
//! use u_pacs::random::Lcg;
//! use u_pacs::scoring::{Candidate, CompatibilityMap};
//!
//! let candidates: Vec<Candidate> = (0..20)
//!     .map(|i| Candidate::new(format!("user-{i}"), "CS", 1 + (i % 4) as i32, ["AI"], "Creative"))
//!     .collect();
//! let config = PacsConfig::default().with_num_worlds(10).with_num_cycles(6);
//!
//! let result = PacsRunner::run(&candidates, &config, &CompatibilityMap::new(), &mut Lcg::new(42))?;
//! let placed: usize = result.best_world.groups.iter().map(|g| g.member_ids.len()).sum();
//! assert_eq!(placed, 20);
//! # Ok::<(), u_pacs::PacsError>(())
//! ```

pub mod error;
pub mod pacs;
pub mod partition;
pub mod random;
pub mod scoring;

pub use error::PacsError;
