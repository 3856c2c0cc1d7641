use fancy_regex::Regex;
use thiserror::Error;

/// Largest input the unary formulation accepts. Past this point the
/// repeated-block search backtracks quadratically in `n`.
pub const MAX_UNARY_LEN: u64 = 1 << 16;

#[derive(Debug, Error)]
pub enum UnaryError {
    #[error("{0} exceeds the maximum unary length of {MAX_UNARY_LEN}")]
    InputTooLarge(u64),
    #[error("composite pattern failed to run: {0}")]
    Pattern(#[from] fancy_regex::Error),
}

/// The classic formulation: a number is composite exactly when a string
/// of that many ones is empty, a lone one, or some block of two or more
/// ones repeated two or more times.
pub fn is_prime_unary(n: u64) -> Result<bool, UnaryError> {
    if n > MAX_UNARY_LEN {
        return Err(UnaryError::InputTooLarge(n));
    }

    let composite = Regex::new(r"^1?$|^(11+?)\1+$").unwrap();
    let ones = "1".repeat(n as usize);

    Ok(!composite.is_match(&ones)?)
}
