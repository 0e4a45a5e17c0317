//! Apply flag operations to a binary value from the command line.
//!
//! ```bash
//! cargo run --package bitflag-demos --bin flagcalc -- 0b1010 set 0 toggle 3 has 1
//! ```

use anyhow::{anyhow, bail, Context, Result};
use bitflag::Flag;

fn parse_bit(arg: Option<String>) -> Result<Flag> {
    let arg = arg.ok_or_else(|| anyhow!("missing bit index"))?;
    let index = arg
        .parse::<u32>()
        .with_context(|| format!("bad bit index `{}`", arg))?;

    if index >= Flag::BITS {
        bail!("bit index {} out of range", index);
    }

    Ok(Flag::bit(index))
}

fn main() -> Result<()> {
    bitflag_demos::init_tracing();

    let mut args = std::env::args().skip(1);

    let initial = args.next().unwrap_or_else(|| String::from("0"));
    let mut flag = initial
        .parse::<Flag>()
        .with_context(|| format!("parsing `{}`", initial))?;

    while let Some(op) = args.next() {
        match op.as_str() {
            "set" => {
                flag.set(parse_bit(args.next())?);
            }
            "clear" => {
                flag.clear(parse_bit(args.next())?);
            }
            "toggle" => {
                flag.toggle(parse_bit(args.next())?);
            }
            "set-all" => {
                flag.set_all_bits();
            }
            "clear-all" => {
                flag.clear_all_bits();
            }
            "toggle-all" => {
                flag.toggle_all_bits();
            }
            "has" => {
                let bit = parse_bit(args.next())?;
                println!("has {}: {}", bit, flag.has(bit));
                continue;
            }
            other => bail!("unknown operation `{}`", other),
        }

        tracing::debug!(%op, %flag, "applied");
    }

    println!("{}", flag);
    Ok(())
}
