//! A blackjack strategy simulator.
//!
//! The crate simulates repeated rounds of blackjack under configurable
//! casino rules, applying a deterministic [`Strategy`] oracle to every
//! decision and recording bankroll trajectories, trial summaries, and
//! per-rank card-draw counts for statistical analysis. A seeded run is
//! fully reproducible: every shuffle and draw comes from one `ChaCha8Rng`
//! stream.
//!
//! # Example
//!
//! ```
//! use bjsim::{SimOptions, Simulator, TableStrategy};
//!
//! // An empty table stands on everything; real tables map hand keys to
//! // actions.
//! let strategy = TableStrategy::default();
//! let options = SimOptions::default().with_trials(2).with_seed(42);
//! let report = Simulator::new(options, &strategy).run()?;
//! assert_eq!(report.summaries.len(), 2);
//! # Ok::<(), bjsim::ShoeError>(())
//! ```

pub mod card;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod records;
pub mod shoe;
pub mod sim;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::Dealer;
pub use error::ShoeError;
pub use hand::Hand;
pub use options::{Rules, SimOptions};
pub use player::Player;
pub use records::{BankrollPoint, RankCount, RoundRecord, SimulationReport, TrialSummary};
pub use shoe::Shoe;
pub use sim::{Simulator, resolve_wager};
pub use strategy::{Action, LegalActions, Strategy, TableStrategy};
