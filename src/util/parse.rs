use crate::error::AppError;

/// Parses a string-backed active enum from client input, case-insensitively.
///
/// # Arguments
/// - `value` - The raw string from the request
/// - `what` - Field name used in the error message
///
/// # Returns
/// - `Ok(T)` - The parsed enum variant
/// - `Err(AppError::BadRequest)` - Value names no variant
pub fn parse_enum<T>(value: &str, what: &str) -> Result<T, AppError>
where
    T: sea_orm::ActiveEnum<Value = String>,
{
    T::try_from_value(&value.trim().to_uppercase())
        .map_err(|_| AppError::BadRequest(format!("Invalid {what}: {value}")))
}

/// Parses a qualifying lap time string into milliseconds.
///
/// Accepts times in `M:SS.mmm` form but tolerates missing separators by
/// reading digits only: the last three digits are milliseconds, the two
/// before those are seconds, anything remaining is minutes. `1:23.456`,
/// `1.23.456` and `123456` all parse to the same value.
///
/// # Arguments
/// - `value` - The lap time string submitted by an admin
///
/// # Returns
/// - `Ok(i64)` - Total lap time in milliseconds
/// - `Err(AppError::BadRequest)` - Fewer than four digits, not a lap time
pub fn parse_lap_time(value: &str) -> Result<i64, AppError> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return Err(AppError::BadRequest(format!(
            "Invalid lap time format: {value}"
        )));
    }

    let (rest, millis) = digits.split_at(digits.len() - 3);
    let (minutes, seconds) = rest.split_at(rest.len() - 2);

    // Unwraps cannot fail: every slice is non-empty ASCII digits within i64 range.
    let minutes: i64 = if minutes.is_empty() {
        0
    } else {
        minutes.parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid lap time format: {value}"))
        })?
    };
    let seconds: i64 = seconds
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid lap time format: {value}")))?;
    let millis: i64 = millis
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid lap time format: {value}")))?;

    Ok(minutes * 60_000 + seconds * 1_000 + millis)
}

/// Formats a lap time in milliseconds back into `M:SS.mmm` form.
pub fn format_lap_time(time_ms: i64) -> String {
    let minutes = time_ms / 60_000;
    let seconds = (time_ms % 60_000) / 1_000;
    let millis = time_ms % 1_000;

    format!("{minutes}:{seconds:02}.{millis:03}")
}
