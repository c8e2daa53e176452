use std::path::PathBuf;

use addrconv_common::{decode, encode, Ssn};
use anyhow::Context;
use clap::{Parser, Subcommand};
use config_file::FromConfigFile;
use log::{debug, info, warn};

mod config;
mod utils;

use config::StaticConfig;

#[derive(Debug, Parser)]
struct Opt {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Render an integer address as dotted octets
    Encode { address: String },
    /// Pack dotted octets into an integer
    Decode {
        text: String,

        #[clap(long)]
        hex: bool,
    },
    /// Print the hash of an SSN
    Ssn { value: String },
    /// Convert every entry of a yaml file
    Batch { config: PathBuf },
}

fn main() -> Result<(), anyhow::Error> {
    let opt = Opt::parse();

    env_logger::init();

    match opt.cmd {
        Cmd::Encode { address } => {
            let address = utils::parse_u32(&address)?;
            debug!("encoding {:#010x}", address);
            println!("{}", encode(address));
        }
        Cmd::Decode { text, hex } => {
            let address = decode(&text).with_context(|| format!("cannot decode {}", text))?;
            debug!("decoded {} to {:#010x}", text, address);
            if hex {
                println!("{:#010x}", address);
            } else {
                println!("{}", address);
            }
        }
        Cmd::Ssn { value } => {
            let ssn = Ssn::new(value);
            println!(
                "{} ({} wire bytes)",
                utils::hash_to_string(&ssn),
                ssn.wire_bytes().len()
            );
        }
        Cmd::Batch { config } => {
            let cfg = StaticConfig::from_config_file(&config)
                .with_context(|| format!("failed to load {}", config.display()))?;
            info!("loaded batch from {}", config.display());
            if cfg.is_empty() {
                warn!("{} has no entries", config.display());
            }
            for line in run_batch(&cfg) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn run_batch(cfg: &StaticConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for address in cfg.addresses.iter().flatten() {
        lines.push(format!("{} => {}", address, encode(*address)));
    }
    for text in cfg.dotted.iter().flatten() {
        match decode(text) {
            Ok(address) => lines.push(format!("{} => {}", text, address)),
            Err(e) => warn!("skipping {}: {}", text, e),
        }
    }
    for value in cfg.ssns.iter().flatten() {
        let ssn = Ssn::new(value.as_str());
        lines.push(format!("ssn => {}", utils::hash_to_string(&ssn)));
    }
    info!("converted {} entries", lines.len());
    lines
}
