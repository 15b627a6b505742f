use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "feemarket")]
pub struct Opt {
    /// Address permitted to submit parameter updates
    #[arg(long, global = true, default_value = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")]
    pub authority: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "init", about = "Seed the store with default params and state")]
    Init,
    #[command(name = "showparams", about = "Print the stored controller params")]
    ShowParams {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(name = "showstate", about = "Print the stored controller state")]
    ShowState {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(
        name = "enabledheight",
        about = "Print the height at which the fee market was enabled"
    )]
    EnabledHeight,
    #[command(name = "setenabledheight", about = "Record the enabled height")]
    SetEnabledHeight {
        #[arg(help = "The block height at which the fee market activated")]
        height: i64,
    },
}
