use std::fmt::{self, Display, Formatter};

use colored::Colorize;
use lockup_interface::state::{
    lockup::Lockup,
    lockup_pool::{LockupPool, LOCKUP_POOL_CAPACITY},
};

use crate::logs::LogColor;

/// How many pool entries to print before eliding the rest.
const MAX_PRINTED_ENTRIES: usize = 8;

pub struct PrettyLockup<'a>(pub &'a Lockup);

impl Display for PrettyLockup<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lockup = self.0;
        writeln!(f, "{}", "lockup".color(LogColor::Label))?;
        write_kv(f, "authority", lockup.authority)?;
        write_kv(f, "amount", lockup.amount())?;
        write_kv(f, "start", lockup.lockup_start_timestamp())?;
        match lockup.lockup_end_timestamp() {
            Some(end) => write_kv(f, "end", end)?,
            None => writeln!(f, "  {:<10} {}", "end", "none".color(LogColor::Muted))?,
        }
        write_kv(f, "mint", lockup.mint)?;
        write_kv(f, "metadata", lockup.metadata)
    }
}

pub struct PrettyLockupPool<'a>(pub &'a LockupPool);

impl Display for PrettyLockupPool<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pool = self.0;
        writeln!(
            f,
            "{} {}",
            "lockup_pool".color(LogColor::Label),
            format!("{}/{} occupied", pool.entries_len(), LOCKUP_POOL_CAPACITY)
                .color(LogColor::Value)
        )?;

        let live = pool.live_entries();
        for entry in live.iter().take(MAX_PRINTED_ENTRIES) {
            writeln!(
                f,
                "  {} {}",
                entry.lockup.to_string().color(LogColor::Value),
                format!("({})", entry.amount()).color(LogColor::Muted)
            )?;
        }
        if live.len() > MAX_PRINTED_ENTRIES {
            writeln!(
                f,
                "  {}",
                format!("… {} more", live.len() - MAX_PRINTED_ENTRIES).color(LogColor::Muted)
            )?;
        }
        Ok(())
    }
}

fn write_kv(f: &mut Formatter<'_>, label: &str, value: impl Display) -> fmt::Result {
    writeln!(
        f,
        "  {:<10} {}",
        label,
        value.to_string().color(LogColor::Value)
    )
}
