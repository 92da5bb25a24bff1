use anyhow::Context;

use autolot_demo::{Action, Controller, DemoConfig};

fn main() -> anyhow::Result<()> {
    autolot_observability::init_from_env();

    let config = DemoConfig::from_env();
    tracing::info!(?config, "starting demo");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let actions: Vec<Action> = if args.is_empty() {
        Action::DEFAULT_SCRIPT.to_vec()
    } else {
        args.iter()
            .map(|arg| arg.parse::<Action>())
            .collect::<Result<Vec<_>, _>>()
            .context("usage: autolot-demo [demo|accelerate|brake|compare]...")?
    };

    let mut controller = Controller::new(config);
    for action in actions {
        let response = controller
            .dispatch(action)
            .with_context(|| format!("action `{action}` failed"))?;

        println!("> {action}");
        println!("{}", response.message);
        for entry in &response.state {
            println!("  {}: {}", entry.label, entry.value);
        }
        println!();
    }

    Ok(())
}
