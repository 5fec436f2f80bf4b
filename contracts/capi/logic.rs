//! Fee arithmetic for a single transfer.
//!
//! Every share is taken from the gross amount with its own basis-point
//! multiplication and the same truncating division. The shares therefore never
//! exceed the total fee, but can fall short of it by up to two base units when
//! the gross amount is not a multiple of 200. That residue is never debited:
//! the sender pays `net + burn + dev + donation`, so nothing leaves circulation
//! without being burned.

use crate::model::{
    Balance, Error, Result, BPS_DENOMINATOR, BURN_FEE_BPS, DEVELOPMENT_FEE_BPS, DONATION_FEE_BPS,
    TOTAL_FEE_BPS,
};

/// How a gross transfer amount is divided up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub gross_val: Balance,
    pub net_val: Balance,
    pub total_fee: Balance,
    pub burn_val: Balance,
    pub dev_val: Balance,
    pub donation_val: Balance,
    /// Truncation dust: `total_fee - (burn + dev + donation)`. Stays with the sender.
    pub residue_val: Balance,
}

fn bps_of(amount_val: Balance, bps_val: Balance) -> Result<Balance> {
    let scaled = amount_val.checked_mul(bps_val).ok_or(Error::Overflow)?;
    Ok(scaled / BPS_DENOMINATOR)
}

pub fn split_amount(amount_val: Balance) -> Result<FeeSplit> {
    let total_fee = bps_of(amount_val, TOTAL_FEE_BPS)?;
    let burn_val = bps_of(amount_val, BURN_FEE_BPS)?;
    let dev_val = bps_of(amount_val, DEVELOPMENT_FEE_BPS)?;
    let donation_val = bps_of(amount_val, DONATION_FEE_BPS)?;
    let net_val = amount_val.checked_sub(total_fee).ok_or(Error::Overflow)?;

    let shares = burn_val
        .checked_add(dev_val)
        .and_then(|v| v.checked_add(donation_val))
        .ok_or(Error::Overflow)?;
    let residue_val = total_fee.checked_sub(shares).ok_or(Error::Overflow)?;

    Ok(FeeSplit {
        gross_val: amount_val,
        net_val,
        total_fee,
        burn_val,
        dev_val,
        donation_val,
        residue_val,
    })
}

impl FeeSplit {
    /// What actually leaves the sender's balance.
    pub fn debit_val(&self) -> Balance {
        self.gross_val - self.residue_val
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ONE_CAPI;

    #[test]
    fn thousand_tokens_split() {
        let split = split_amount(1_000 * ONE_CAPI).unwrap();
        assert_eq!(split.net_val, 980 * ONE_CAPI);
        assert_eq!(split.total_fee, 20 * ONE_CAPI);
        assert_eq!(split.burn_val, 5 * ONE_CAPI);
        assert_eq!(split.dev_val, 5 * ONE_CAPI);
        assert_eq!(split.donation_val, 10 * ONE_CAPI);
        assert_eq!(split.residue_val, 0);
        assert_eq!(split.debit_val(), 1_000 * ONE_CAPI);
    }

    #[test]
    fn shares_match_total_fee_on_multiples_of_200() {
        for k in [0, 1, 2, 7, 1_000, 5 * ONE_CAPI, 4_999_999 * ONE_CAPI] {
            let amount_val = k * 200;
            let split = split_amount(amount_val).unwrap();
            assert_eq!(
                split.burn_val + split.dev_val + split.donation_val,
                split.total_fee,
                "residue at {amount_val}"
            );
            assert_eq!(split.debit_val(), amount_val);
        }
    }

    #[test]
    fn debit_is_net_plus_shares() {
        for amount_val in 0..20_000 {
            let split = split_amount(amount_val).unwrap();
            assert!(split.residue_val <= 2, "residue {} at {amount_val}", split.residue_val);
            assert_eq!(split.net_val + split.total_fee, amount_val);
            assert_eq!(
                split.debit_val(),
                split.net_val + split.burn_val + split.dev_val + split.donation_val
            );
        }
    }

    #[test]
    fn dust_amounts() {
        let split = split_amount(49).unwrap();
        assert_eq!(split.total_fee, 0);
        assert_eq!(split.net_val, 49);
        assert_eq!(split.debit_val(), 49);

        // 100 units: 2 fee, but only the donation share survives truncation
        let split = split_amount(100).unwrap();
        assert_eq!(split.total_fee, 2);
        assert_eq!(split.burn_val, 0);
        assert_eq!(split.dev_val, 0);
        assert_eq!(split.donation_val, 1);
        assert_eq!(split.net_val, 98);
        assert_eq!(split.residue_val, 1);
        assert_eq!(split.debit_val(), 99);
    }

    #[test]
    fn odd_amount_keeps_residue_with_sender() {
        // 1000 tokens + 173 units: 173 falls in the [150, 200) band, two units of dust
        let split = split_amount(1_000 * ONE_CAPI + 173).unwrap();
        assert_eq!(split.residue_val, 2);
        assert_eq!(split.debit_val(), 1_000 * ONE_CAPI + 171);
    }

    #[test]
    fn huge_amount_overflows() {
        assert_eq!(split_amount(Balance::MAX), Err(Error::Overflow));
    }
}
