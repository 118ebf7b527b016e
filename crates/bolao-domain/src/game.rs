//! Game (number combination) validation.

/// Numbers per game.
pub const GAME_SIZE: usize = 6;

/// Smallest playable number.
pub const MIN_NUMBER: i32 = 1;

/// Largest playable number.
pub const MAX_NUMBER: i32 = 60;

/// Validation failures for a submitted game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("a game must have exactly 6 numbers")]
    WrongLength,
    #[error("numbers must be between 1 and 60")]
    OutOfRange,
}

/// Check length and range of a submitted game.
///
/// Duplicate values are not rejected; an edit may repeat a number.
pub fn validate_game(numbers: &[i32]) -> Result<(), GameError> {
    if numbers.len() != GAME_SIZE {
        return Err(GameError::WrongLength);
    }
    if !numbers
        .iter()
        .all(|&n| (MIN_NUMBER..=MAX_NUMBER).contains(&n))
    {
        return Err(GameError::OutOfRange);
    }
    Ok(())
}

/// Ascending copy of a game — the form every write path stores.
pub fn sorted(numbers: &[i32]) -> Vec<i32> {
    let mut out = numbers.to_vec();
    out.sort_unstable();
    out
}
