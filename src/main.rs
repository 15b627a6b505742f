use clap::Parser;
use feemarket::keeper::{AccountKeeper, Keeper, HEIGHT_NOT_ENABLED};
use feemarket::storage::SledStore;
use feemarket::{Command, DecCoin, Opt, GLOBAL_CONFIG};
use log::{error, LevelFilter};
use std::process;

// The CLI carries no real module accounts; the keeper only holds the
// capability for collaborators
struct CliAccounts;

impl AccountKeeper for CliAccounts {
    fn module_address(&self, _module: &str) -> Option<String> {
        None
    }
}

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    let store = SledStore::open(GLOBAL_CONFIG.get_data_dir())?;
    // A malformed authority means the deployment can never authorize
    // anything; surfacing it here aborts the process with exit code 1
    let keeper = Keeper::new(Box::new(CliAccounts), None, &opt.authority)?;

    match opt.command {
        Command::Init => {
            keeper.init_genesis_defaults(&store)?;
            println!("Done!");
        }
        Command::ShowParams { json } => {
            let params = keeper.get_params(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&params)?);
            } else {
                println!("alpha:              {}", params.alpha);
                println!("beta:               {}", params.beta);
                println!("gamma:              {}", params.gamma);
                println!("delta:              {}", params.delta);
                println!(
                    "min base gas price: {}",
                    DecCoin::new(GLOBAL_CONFIG.get_fee_denom(), params.min_base_gas_price)
                );
                println!("min learning rate:  {}", params.min_learning_rate);
                println!("max learning rate:  {}", params.max_learning_rate);
            }
        }
        Command::ShowState { json } => {
            let state = keeper.get_state(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                // Gas prices are denominated in the configured fee denom
                let fee_denom = GLOBAL_CONFIG.get_fee_denom();
                println!(
                    "base gas price: {}",
                    DecCoin::new(fee_denom, state.base_gas_price)
                );
                println!("learning rate:  {}", state.learning_rate);
                println!("window:         {:?}", state.window);
            }
        }
        Command::EnabledHeight => {
            let height = keeper.get_enabled_height(&store)?;
            if height == HEIGHT_NOT_ENABLED {
                println!("Fee market is not enabled yet");
            } else {
                println!("Enabled at height {height}");
            }
        }
        Command::SetEnabledHeight { height } => {
            keeper.set_enabled_height(&store, height)?;
            println!("Done!");
        }
    }

    Ok(())
}
