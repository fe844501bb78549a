use crate::models::{VibeTag, VibeTier};

/// Band an average rating into a vibe tier
#[inline]
pub fn vibe_tier(average_rating: f64) -> VibeTier {
    if average_rating >= 4.5 {
        VibeTier::Excellent
    } else if average_rating >= 3.5 {
        VibeTier::Good
    } else if average_rating >= 2.5 {
        VibeTier::Fair
    } else {
        VibeTier::Poor
    }
}

/// Percentage overlap between two people's vibe preferences
///
/// Counts the friend's tags that the user also has, divided by the longer of
/// the two lists. Returns 0 when either list is empty.
pub fn vibe_match(user_preferences: &[VibeTag], friend_preferences: &[VibeTag]) -> u8 {
    if user_preferences.is_empty() || friend_preferences.is_empty() {
        return 0;
    }

    let shared = friend_preferences
        .iter()
        .filter(|tag| user_preferences.contains(tag))
        .count();
    let denominator = friend_preferences.len().max(user_preferences.len());

    let percent = (shared as f64 / denominator as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibe_tier_bands() {
        assert_eq!(vibe_tier(5.0), VibeTier::Excellent);
        assert_eq!(vibe_tier(4.5), VibeTier::Excellent);
        assert_eq!(vibe_tier(4.49), VibeTier::Good);
        assert_eq!(vibe_tier(3.5), VibeTier::Good);
        assert_eq!(vibe_tier(2.5), VibeTier::Fair);
        assert_eq!(vibe_tier(2.4), VibeTier::Poor);
        assert_eq!(vibe_tier(0.0), VibeTier::Poor);
    }

    #[test]
    fn test_vibe_match_empty() {
        assert_eq!(vibe_match(&[], &[VibeTag::Cozy]), 0);
        assert_eq!(vibe_match(&[VibeTag::Cozy], &[]), 0);
    }

    #[test]
    fn test_vibe_match_uses_longer_list() {
        let user = [VibeTag::Cozy, VibeTag::Quiet, VibeTag::Relaxing];
        let friend = [VibeTag::Cozy, VibeTag::Lively];

        // 1 shared out of max(2, 3)
        assert_eq!(vibe_match(&user, &friend), 33);
        assert_eq!(vibe_match(&user, &user), 100);
    }

    #[test]
    fn test_vibe_match_rounds() {
        let user = [VibeTag::Cozy, VibeTag::Quiet, VibeTag::Clean];
        let friend = [VibeTag::Cozy, VibeTag::Quiet, VibeTag::Trendy];

        // 2/3 = 66.67
        assert_eq!(vibe_match(&user, &friend), 67);
    }
}
