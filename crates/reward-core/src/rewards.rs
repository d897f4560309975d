//! # Rewards Module
//!
//! The point formula and the aggregations built on it.
//!
//! ## Tier Schedule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Amount is truncated to whole dollars first: $109.50 → 109              │
//! │                                                                         │
//! │   $0 ─────────── $50 ─────────── $100 ───────────────►                 │
//! │   │   0 pts/$    │   1 pt/$       │   2 pts/$                          │
//! │                  │  (max 50 pts)  │                                    │
//! │                                                                         │
//! │  $109 → (109 - 100) × 2 + min(50, 109 - 50) = 18 + 50 = 68 points      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Aggregation Policy
//! All aggregations are fail-fast: the first transaction with an invalid
//! amount aborts the whole call with [`CoreError::InvalidAmount`]. No
//! partial result is ever returned, and invalid transactions are never
//! skipped.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MonthlyRewards, RewardSummary, Transaction};
use crate::{LOWER_TIER_CAP, LOWER_TIER_THRESHOLD, UPPER_TIER_MULTIPLIER, UPPER_TIER_THRESHOLD};

// =============================================================================
// Point Formula
// =============================================================================

/// Computes the reward points for a single purchase amount.
///
/// Cents are discarded before tiering (truncation, not rounding), so
/// `$51.99` earns the same as `$51`.
///
/// ## Errors
/// [`CoreError::InvalidAmount`] when the whole-dollar amount is zero or
/// negative. Amounts between one cent and 99 cents truncate to zero and are
/// rejected too.
///
/// ## Example
/// ```rust
/// use reward_core::money::Money;
/// use reward_core::rewards::points_for;
///
/// assert_eq!(points_for(Money::from_cents(15000)).unwrap(), 150);
/// assert_eq!(points_for(Money::from_cents(7000)).unwrap(), 20);
/// assert_eq!(points_for(Money::from_cents(4000)).unwrap(), 0);
/// assert_eq!(points_for(Money::from_cents(10950)).unwrap(), 68);
/// assert!(points_for(Money::zero()).is_err());
/// ```
pub fn points_for(amount: Money) -> CoreResult<i64> {
    let dollars = amount.dollars();

    if dollars <= 0 {
        return Err(CoreError::InvalidAmount);
    }

    let mut points = 0;

    if dollars > UPPER_TIER_THRESHOLD {
        points += (dollars - UPPER_TIER_THRESHOLD) * UPPER_TIER_MULTIPLIER;
    }

    if dollars > LOWER_TIER_THRESHOLD {
        points += LOWER_TIER_CAP.min(dollars - LOWER_TIER_THRESHOLD);
    }

    Ok(points)
}

// =============================================================================
// Aggregator
// =============================================================================

/// Computes the points earned by one transaction.
///
/// ## Errors
/// Propagates [`CoreError::InvalidAmount`] unchanged.
#[inline]
pub fn rewards_for_transaction(transaction: &Transaction) -> CoreResult<i64> {
    points_for(transaction.amount())
}

/// Sums points per period label.
///
/// Every period that has at least one transaction appears in the result,
/// even when its sum is zero. Periods without transactions are absent.
///
/// ## Errors
/// - [`CoreError::NoTransactions`] for an empty slice
/// - [`CoreError::InvalidAmount`] if ANY transaction has an invalid amount
///   (fail-fast, no partial map)
///
/// ## Example
/// ```rust
/// use reward_core::money::Money;
/// use reward_core::rewards::monthly_rewards;
/// use reward_core::Transaction;
///
/// let customer = "550e8400-e29b-41d4-a716-446655440000";
/// let txs = vec![
///     Transaction::new(customer, Money::from_cents(6000), "Jan").unwrap(),
///     Transaction::new(customer, Money::from_cents(12000), "Jan").unwrap(),
///     Transaction::new(customer, Money::from_cents(3000), "Feb").unwrap(),
/// ];
///
/// let monthly = monthly_rewards(&txs).unwrap();
/// assert_eq!(monthly["Jan"], 100);
/// assert_eq!(monthly["Feb"], 0);
/// ```
pub fn monthly_rewards(transactions: &[Transaction]) -> CoreResult<MonthlyRewards> {
    if transactions.is_empty() {
        return Err(CoreError::NoTransactions);
    }

    transactions
        .iter()
        .try_fold(MonthlyRewards::new(), |mut monthly, tx| {
            let points = rewards_for_transaction(tx)?;
            *monthly.entry(tx.transaction_month.clone()).or_insert(0) += points;
            Ok(monthly)
        })
}

/// Sums points across all transactions.
///
/// ## Errors
/// - [`CoreError::NoTransactions`] for an empty slice
/// - [`CoreError::InvalidAmount`] if ANY transaction has an invalid amount
/// - [`CoreError::NoRewardsEarned`] if the sum is zero, i.e. every purchase
///   stayed at or below $50. A zero total is reported, never returned.
pub fn total_rewards(transactions: &[Transaction]) -> CoreResult<i64> {
    if transactions.is_empty() {
        return Err(CoreError::NoTransactions);
    }

    let total = transactions
        .iter()
        .map(rewards_for_transaction)
        .sum::<CoreResult<i64>>()?;

    if total <= 0 {
        return Err(CoreError::NoRewardsEarned);
    }

    Ok(total)
}

/// Computes the monthly breakdown and the total in a single pass.
///
/// Follows the monthly semantics: a zero total is allowed here, so a
/// report can show customers who have not earned anything yet.
///
/// ## Errors
/// - [`CoreError::NoTransactions`] for an empty slice
/// - [`CoreError::InvalidAmount`] if ANY transaction has an invalid amount
pub fn reward_summary(transactions: &[Transaction]) -> CoreResult<RewardSummary> {
    let monthly_points = monthly_rewards(transactions)?;
    let total_points = monthly_points.values().sum();

    Ok(RewardSummary {
        transaction_count: transactions.len(),
        monthly_points,
        total_points,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn tx(cents: i64, month: &str) -> Transaction {
        Transaction::new(CUSTOMER_ID, Money::from_cents(cents), month).unwrap()
    }

    fn points(cents: i64) -> CoreResult<i64> {
        points_for(Money::from_cents(cents))
    }

    #[test]
    fn test_points_for_known_amounts() {
        assert_eq!(points(15000), Ok(150));
        assert_eq!(points(7000), Ok(20));
        assert_eq!(points(4000), Ok(0));
        assert_eq!(points(5150), Ok(1));
        assert_eq!(points(10950), Ok(68));
    }

    #[test]
    fn test_points_for_rejects_non_positive_amounts() {
        assert_eq!(points(0), Err(CoreError::InvalidAmount));
        assert_eq!(points(-5000), Err(CoreError::InvalidAmount));
        // 99 cents truncates to $0
        assert_eq!(points(99), Err(CoreError::InvalidAmount));
    }

    #[test]
    fn test_points_for_tier_boundaries() {
        assert_eq!(points(100), Ok(0));
        assert_eq!(points(5000), Ok(0));
        assert_eq!(points(5099), Ok(0));
        assert_eq!(points(5100), Ok(1));
        assert_eq!(points(10000), Ok(50));
        assert_eq!(points(10099), Ok(50));
        assert_eq!(points(10100), Ok(52));
    }

    #[test]
    fn test_points_for_truncates_instead_of_rounding() {
        assert_eq!(points(5199), Ok(1));
        assert_eq!(points(10999), Ok(68));
    }

    #[test]
    fn test_points_for_follows_tier_formula_across_ranges() {
        for dollars in 1..=50 {
            assert_eq!(points(dollars * 100 + 37), Ok(0), "${dollars}");
        }
        for dollars in 51..=100 {
            assert_eq!(points(dollars * 100 + 37), Ok(dollars - 50), "${dollars}");
        }
        for dollars in [101, 150, 250, 1_000, 10_000] {
            assert_eq!(
                points(dollars * 100 + 37),
                Ok((dollars - 100) * 2 + 50),
                "${dollars}"
            );
        }
    }

    #[test]
    fn test_rewards_for_transaction() {
        assert_eq!(rewards_for_transaction(&tx(12000, "Jan")), Ok(90));
        assert_eq!(
            rewards_for_transaction(&tx(0, "Jan")),
            Err(CoreError::InvalidAmount)
        );
    }

    #[test]
    fn test_monthly_rewards_groups_by_period() {
        let txs = vec![tx(6000, "Jan"), tx(12000, "Jan"), tx(3000, "Feb")];

        let monthly = monthly_rewards(&txs).unwrap();

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly.get("Jan"), Some(&100));
        // Feb earned nothing but still had a transaction
        assert_eq!(monthly.get("Feb"), Some(&0));
        assert_eq!(monthly.get("Mar"), None);
    }

    #[test]
    fn test_monthly_rewards_empty() {
        assert_eq!(monthly_rewards(&[]), Err(CoreError::NoTransactions));
    }

    #[test]
    fn test_monthly_rewards_fails_fast_on_invalid_amount() {
        let txs = vec![tx(12000, "Jan"), tx(-100, "Feb"), tx(7000, "Mar")];
        assert_eq!(monthly_rewards(&txs), Err(CoreError::InvalidAmount));
    }

    #[test]
    fn test_total_rewards_sums_all_transactions() {
        let txs = vec![tx(6000, "Jan"), tx(12000, "Jan"), tx(3000, "Feb")];
        let expected: i64 = txs.iter().map(|t| rewards_for_transaction(t).unwrap()).sum();

        assert_eq!(total_rewards(&txs), Ok(expected));
        assert_eq!(expected, 100);
    }

    #[test]
    fn test_total_rewards_empty() {
        assert_eq!(total_rewards(&[]), Err(CoreError::NoTransactions));
    }

    #[test]
    fn test_total_rewards_zero_sum_is_reported() {
        let txs = vec![tx(1000, "Jan"), tx(1000, "Feb")];
        assert_eq!(total_rewards(&txs), Err(CoreError::NoRewardsEarned));
    }

    #[test]
    fn test_total_rewards_fails_fast_before_zero_check() {
        let txs = vec![tx(1000, "Jan"), tx(0, "Feb")];
        assert_eq!(total_rewards(&txs), Err(CoreError::InvalidAmount));
    }

    #[test]
    fn test_reward_summary() {
        let txs = vec![tx(6000, "Jan"), tx(12000, "Jan"), tx(3000, "Feb")];

        let summary = reward_summary(&txs).unwrap();

        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.total_points, 100);
        assert_eq!(summary.monthly_points.get("Jan"), Some(&100));
    }

    #[test]
    fn test_reward_summary_allows_zero_total() {
        let summary = reward_summary(&[tx(1000, "Jan")]).unwrap();
        assert_eq!(summary.total_points, 0);
    }

    #[test]
    fn test_operations_are_idempotent() {
        let txs = vec![tx(6000, "Jan"), tx(25000, "Feb")];

        assert_eq!(monthly_rewards(&txs), monthly_rewards(&txs));
        assert_eq!(total_rewards(&txs), total_rewards(&txs));
        assert_eq!(
            rewards_for_transaction(&txs[1]),
            rewards_for_transaction(&txs[1])
        );
    }
}
