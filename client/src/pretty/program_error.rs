use std::fmt::{self, Display, Formatter};

use colored::Colorize;
use lockup_interface::error::LockupProgramError;

use crate::logs::LogColor;

/// Interprets a custom error code reported by a failed lockup transaction.
pub struct PrettyProgramError(pub u32);

impl Display for PrettyProgramError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let code = self.0;
        let message = u8::try_from(code)
            .ok()
            .and_then(LockupProgramError::from_repr)
            .map(<&'static str>::from)
            .unwrap_or("Unknown lockup program error");

        write!(
            f,
            "{} {}",
            format!("LockupProgramError({code})").color(LogColor::Error),
            message.color(LogColor::Value)
        )
    }
}
