use std::fmt::{self, Display, Formatter};

use colored::Colorize;
use lockup_interface::instructions::ParsedLockupInstruction;

use crate::logs::LogColor;

pub struct PrettyInstruction<'a>(pub &'a ParsedLockupInstruction);

impl Display for PrettyInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parsed = self.0;
        let name = format!("lockup::{}", parsed.tag()).color(LogColor::Label);

        let detail = match parsed {
            ParsedLockupInstruction::Lockup(lockup) => format!(
                "amount={} metadata={} owner={}",
                lockup.data.amount(),
                lockup.data.metadata,
                lockup.accounts.token_owner,
            ),
            ParsedLockupInstruction::Unlock(unlock) => {
                format!("authority={}", unlock.accounts.lockup_authority)
            }
            ParsedLockupInstruction::Withdraw(withdraw) => format!(
                "authority={} to={}",
                withdraw.accounts.lockup_authority, withdraw.accounts.depositor_token_account,
            ),
        };

        write!(f, "{name} {}", detail.color(LogColor::Value))
    }
}
