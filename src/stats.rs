//! Character health
//!
//! Health is tracked as a current/max pair so damage can't push it below
//! zero and healing can't push it past the maximum.

/// Maximum health every character starts with
pub const MAX_HEALTH: i32 = 100;

/// Represents a character's health points
///
/// # Example
///
/// ```rust
/// use console_game::stats::Health;
///
/// let mut health = Health::new(100);
/// health.take_damage(30);
/// assert_eq!(health.current(), 70);
/// assert_eq!(health.heal(50), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Creates a new Health instance with full health
    pub fn new(max: i32) -> Self {
        Health { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Checks if the character is alive (health > 0)
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Applies damage, returning how much was actually taken
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let old_health = self.current;
        self.current = (self.current - amount.max(0)).max(0);
        old_health - self.current
    }

    /// Heals health, capped at max health
    ///
    /// Returns the actual amount healed (which may be less than requested
    /// if already near max health)
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old_health = self.current;
        self.current = self.current.saturating_add(amount.max(0)).min(self.max);
        self.current - old_health
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}
