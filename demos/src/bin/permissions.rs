//! Models a handful of access permissions as flags.

use bitflag::{flags, Flag};

const READ: Flag = Flag::bit(0);
const WRITE: Flag = Flag::bit(1);
const EXEC: Flag = Flag::bit(2);
const ADMIN: Flag = Flag::bit(31);

const READ_WRITE: Flag = flags![READ, WRITE];

fn main() -> anyhow::Result<()> {
    bitflag_demos::init_tracing();

    let mut user = Flag::new();
    user.set(READ);
    tracing::info!(%user, "granted read");

    user.set_all([WRITE, EXEC]).clear(EXEC);
    tracing::info!(%user, can_edit = user.has(READ_WRITE), "granted write");

    let mut admin = user;
    admin.set(ADMIN);
    tracing::info!(admin = %format!("{:#034b}", admin), "promoted to admin");

    for bit in admin {
        tracing::debug!(bit = %format!("{:#x}", bit), "permission bit");
    }

    admin.toggle_all_bits();
    tracing::info!(revoked = %admin, "inverted permissions");

    if !user.has_all([READ, WRITE]) || user.has(EXEC) {
        anyhow::bail!("unexpected permissions {:?}", user);
    }

    Ok(())
}
