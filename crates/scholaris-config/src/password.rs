use std::env;

/// bcrypt accepts work factors in this range.
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

impl PasswordConfig {
    pub fn from_env() -> Self {
        let cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::default().bcrypt_cost);

        Self::with_cost(cost)
    }

    pub fn with_cost(cost: u32) -> Self {
        Self {
            bcrypt_cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(PasswordConfig::with_cost(1).bcrypt_cost, 4);
        assert_eq!(PasswordConfig::with_cost(12).bcrypt_cost, 12);
        assert_eq!(PasswordConfig::with_cost(99).bcrypt_cost, 31);
    }
}
