//! Domain guesses

use crate::random::RandomSource;

/// Share of simulated lookups that report the domain as free
pub const SIMULATED_AVAILABILITY: f64 = 0.4;

/// `.com` domain for a name: lowercased, everything outside `[a-z0-9]` removed
pub fn domain_for(name: &str) -> String {
    let label: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    format!("{}.com", label)
}

/// Stand-in for a registrar lookup; ignores the domain entirely.
// TODO: replace with an RDAP query once a registrar endpoint is configured.
pub fn simulate_availability<R: RandomSource + ?Sized>(rng: &mut R) -> bool {
    rng.chance(SIMULATED_AVAILABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::StdRandom;

    #[test]
    fn domain_strips_non_alphanumerics() {
        assert_eq!(domain_for("HabitFlow"), "habitflow.com");
        assert_eq!(domain_for("Ai-Powered Io"), "aipoweredio.com");
        assert_eq!(domain_for("Web3Tool"), "web3tool.com");
        assert_eq!(domain_for("CaféHub"), "cafhub.com");
    }

    #[test]
    fn availability_rate_is_roughly_forty_percent() {
        let mut rng = StdRandom::seeded(42);
        let hits = (0..10_000).filter(|_| simulate_availability(&mut rng)).count();
        assert!((3_500..4_500).contains(&hits), "got {hits}");
    }
}
