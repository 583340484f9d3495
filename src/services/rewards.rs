//! Reward split calculation.

use serde::{Deserialize, Serialize};

/// Platform fee taken off the top of every reward, in percent
pub const PLATFORM_FEE_PERCENT: u64 = 2;

/// How a task reward divides between the worker, their tip, and the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSplit {
    pub worker_sats: u64,
    pub tip_sats: u64,
    pub platform_fee_sats: u64,
}

impl RewardSplit {
    pub fn total(&self) -> u64 {
        self.worker_sats + self.tip_sats + self.platform_fee_sats
    }
}

/// Split a reward: flat platform fee first (floored), then the tip as a
/// percentage of the remainder (floored), worker keeps the rest.
///
/// `tip_percent` above 100 is clamped. The parts always sum to
/// `total_sats` exactly.
pub fn split_reward(total_sats: u64, tip_percent: u8) -> RewardSplit {
    let tip_percent = u64::from(tip_percent.min(100));

    // u128 intermediates so huge totals cannot overflow the multiply
    let platform_fee_sats =
        (u128::from(total_sats) * u128::from(PLATFORM_FEE_PERCENT) / 100) as u64;
    let remainder = total_sats - platform_fee_sats;
    let tip_sats = (u128::from(remainder) * u128::from(tip_percent) / 100) as u64;
    let worker_sats = remainder - tip_sats;

    RewardSplit {
        worker_sats,
        tip_sats,
        platform_fee_sats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_sum_to_total() {
        for total in [0u64, 1, 99, 100, 101, 1_000, 123_457, u64::MAX] {
            for tip in [0u8, 1, 10, 50, 100] {
                let split = split_reward(total, tip);
                assert_eq!(split.total(), total, "total={total} tip={tip}");
            }
        }
    }

    #[test]
    fn fee_is_two_percent_floored() {
        let split = split_reward(1_000, 0);
        assert_eq!(split.platform_fee_sats, 20);
        assert_eq!(split.tip_sats, 0);
        assert_eq!(split.worker_sats, 980);

        // 2% of 99 floors to 1
        assert_eq!(split_reward(99, 0).platform_fee_sats, 1);
    }

    #[test]
    fn tip_comes_out_of_the_remainder() {
        let split = split_reward(1_000, 10);
        // fee 20, remainder 980, tip 98, worker 882
        assert_eq!(split.platform_fee_sats, 20);
        assert_eq!(split.tip_sats, 98);
        assert_eq!(split.worker_sats, 882);
    }

    #[test]
    fn oversized_tip_percent_is_clamped() {
        let split = split_reward(100, u8::MAX);
        assert_eq!(split.worker_sats, 0);
        assert_eq!(split.total(), 100);
    }
}
