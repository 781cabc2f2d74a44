//! Central tendency and relative scores.

use recipecost_core::{ArithmeticError, DecimalContext};
use rust_decimal::Decimal;

use crate::CentralTendency;

/// Mean or median of `values`; zero for an empty slice.
pub fn centre(
    ctx: &DecimalContext,
    values: &[Decimal],
    tendency: CentralTendency,
) -> Result<Decimal, ArithmeticError> {
    if values.is_empty() {
        return Ok(Decimal::ZERO);
    }
    match tendency {
        CentralTendency::Mean => {
            let total = ctx.sum(values.iter().copied())?;
            ctx.divide(total, Decimal::from(values.len()))
        }
        CentralTendency::Median => {
            let mut sorted = values.to_vec();
            sorted.sort_unstable();
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 1 {
                Ok(sorted[mid])
            } else {
                let pair = ctx.add(sorted[mid - 1], sorted[mid])?;
                ctx.divide(pair, Decimal::TWO)
            }
        }
    }
}

/// Score `value` against `centre` so that the centre itself scores 100.
///
/// For a positive centre this is `value / centre × 100`. For a negative
/// centre the distance is measured against its magnitude, which keeps
/// higher values scoring higher. A zero centre maps positive values to 200,
/// zero to 100 and negative values to 0.
pub fn relative_score(
    ctx: &DecimalContext,
    value: Decimal,
    centre: Decimal,
) -> Result<Decimal, ArithmeticError> {
    if centre.is_zero() {
        return Ok(match value.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Decimal::TWO * Decimal::ONE_HUNDRED,
            std::cmp::Ordering::Equal => Decimal::ONE_HUNDRED,
            std::cmp::Ordering::Less => Decimal::ZERO,
        });
    }
    let distance = ctx.subtract(value, centre)?;
    let relative = ctx.ratio_percent(distance, centre.abs())?;
    ctx.add(Decimal::ONE_HUNDRED, relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ctx() -> DecimalContext {
        DecimalContext::default()
    }

    #[test]
    fn test_mean() {
        let values = [dec!(10), dec!(20), dec!(60)];
        assert_eq!(
            centre(&ctx(), &values, CentralTendency::Mean).unwrap(),
            dec!(30)
        );
    }

    #[test]
    fn test_median_odd_and_even() {
        let odd = [dec!(60), dec!(10), dec!(20)];
        assert_eq!(
            centre(&ctx(), &odd, CentralTendency::Median).unwrap(),
            dec!(20)
        );
        let even = [dec!(40), dec!(10), dec!(20), dec!(60)];
        assert_eq!(
            centre(&ctx(), &even, CentralTendency::Median).unwrap(),
            dec!(30)
        );
    }

    #[test]
    fn test_centre_empty() {
        assert_eq!(
            centre(&ctx(), &[], CentralTendency::Median).unwrap(),
            dec!(0)
        );
    }

    #[test]
    fn test_relative_score_positive_centre() {
        assert_eq!(relative_score(&ctx(), dec!(30), dec!(20)).unwrap(), dec!(150));
        assert_eq!(relative_score(&ctx(), dec!(20), dec!(20)).unwrap(), dec!(100));
        assert_eq!(relative_score(&ctx(), dec!(5), dec!(20)).unwrap(), dec!(25));
    }

    #[test]
    fn test_relative_score_negative_centre_keeps_order() {
        let better = relative_score(&ctx(), dec!(-1), dec!(-2)).unwrap();
        let worse = relative_score(&ctx(), dec!(-3), dec!(-2)).unwrap();
        assert_eq!(better, dec!(150));
        assert!(better > worse);
    }

    #[test]
    fn test_relative_score_zero_centre() {
        assert_eq!(relative_score(&ctx(), dec!(4), dec!(0)).unwrap(), dec!(200));
        assert_eq!(relative_score(&ctx(), dec!(0), dec!(0)).unwrap(), dec!(100));
        assert_eq!(relative_score(&ctx(), dec!(-4), dec!(0)).unwrap(), dec!(0));
    }
}
