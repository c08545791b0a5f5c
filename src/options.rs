//! Rule and simulation configuration.

use serde::Serialize;

/// Casino rule variant for a simulated table.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjsim::Rules;
///
/// let rules = Rules::default()
///     .with_decks(8)
///     .with_blackjack_pays(1.2)
///     .with_hit_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rules {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Fraction of the shoe dealt before a reshuffle is due, in `(0, 1]`.
    pub penetration: f64,
    /// Blackjack payout ratio (1.5 for 3:2, 1.2 for 6:5).
    pub blackjack_pays: f64,
    /// Whether the dealer hits on soft 17 (H17) rather than standing (S17).
    pub hit_soft_17: bool,
    /// Whether doubling down is allowed after a split.
    pub double_after_split: bool,
    /// Whether a hand split from aces may be split again.
    pub resplit_aces: bool,
    /// Whether surrender is offered on the first two cards.
    pub surrender: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            decks: 6,
            penetration: 0.75,
            blackjack_pays: 1.5,
            hit_soft_17: false,
            double_after_split: true,
            resplit_aces: false,
            surrender: true,
        }
    }
}

impl Rules {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Rules;
    ///
    /// let rules = Rules::default().with_decks(2);
    /// assert_eq!(rules.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the penetration fraction.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Rules;
    ///
    /// let rules = Rules::default().with_penetration(0.5);
    /// assert_eq!(rules.penetration, 0.5);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Rules;
    ///
    /// let rules = Rules::default().with_blackjack_pays(1.2);
    /// assert_eq!(rules.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether the dealer hits on soft 17.
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }

    /// Sets whether doubling after a split is allowed.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether split aces may be split again.
    #[must_use]
    pub const fn with_resplit_aces(mut self, allowed: bool) -> Self {
        self.resplit_aces = allowed;
        self
    }

    /// Sets whether surrender is offered.
    #[must_use]
    pub const fn with_surrender(mut self, offered: bool) -> Self {
        self.surrender = offered;
        self
    }
}

/// Full configuration for a simulation run.
///
/// ```
/// use bjsim::SimOptions;
///
/// let options = SimOptions::default()
///     .with_trials(10)
///     .with_bankroll(500.0)
///     .with_seed(42);
/// assert_eq!(options.trials, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimOptions {
    /// Number of independent trials to run.
    pub trials: u32,
    /// Hand-count cap per trial; a trial may end earlier if the bankroll
    /// cannot cover the next wager.
    pub hands_per_trial: u32,
    /// Starting bankroll for each trial.
    pub bankroll: f64,
    /// Flat wager per round.
    pub bet: f64,
    /// Seed for the run's random stream. `None` seeds from OS entropy, so
    /// only seeded runs are reproducible.
    pub seed: Option<u64>,
    /// Casino rules in force at the table.
    pub rules: Rules,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            trials: 100,
            hands_per_trial: 100,
            bankroll: 1000.0,
            bet: 1.0,
            seed: None,
            rules: Rules::default(),
        }
    }
}

impl SimOptions {
    /// Sets the number of trials.
    #[must_use]
    pub const fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the hand-count cap per trial.
    #[must_use]
    pub const fn with_hands_per_trial(mut self, hands: u32) -> Self {
        self.hands_per_trial = hands;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_bankroll(mut self, bankroll: f64) -> Self {
        self.bankroll = bankroll;
        self
    }

    /// Sets the flat wager per round.
    #[must_use]
    pub const fn with_bet(mut self, bet: f64) -> Self {
        self.bet = bet;
        self
    }

    /// Sets the seed for the run's random stream.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the table rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}
