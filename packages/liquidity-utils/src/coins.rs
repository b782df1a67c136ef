use cosmwasm_std::Coin;

use crate::error::ParamsError;

/// Checks a native denomination against the Cosmos SDK syntax
/// `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn validate_denom(denom: &str) -> Result<(), ParamsError> {
    cw_denom::validate_native_denom(denom.to_string())
        .map(|_| ())
        .map_err(|err| ParamsError::InvalidDenom {
            denom: denom.to_string(),
            reason: err.to_string(),
        })
}

/// Well-formedness of a coin bag: every denom is valid, every amount is
/// positive, and denoms are strictly ascending (sorted, no duplicates).
/// An empty bag is well formed.
pub fn validate_coins(coins: &[Coin]) -> Result<(), ParamsError> {
    let mut previous: Option<&str> = None;

    for coin in coins {
        validate_denom(&coin.denom)?;

        if coin.amount.is_zero() {
            return Err(ParamsError::NonPositiveCoin {
                denom: coin.denom.clone(),
            });
        }

        if let Some(low) = previous {
            if coin.denom.as_str() == low {
                return Err(ParamsError::DuplicateDenom {
                    denom: coin.denom.clone(),
                });
            }
            if coin.denom.as_str() < low {
                return Err(ParamsError::UnsortedCoins {
                    denom: coin.denom.clone(),
                });
            }
        }

        previous = Some(&coin.denom);
    }

    Ok(())
}
