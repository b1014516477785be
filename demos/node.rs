use anyhow::Context;
use dash_args::{help, Args, OptionHelp, Usage};
use tracing_subscriber::EnvFilter;

fn usage() -> Usage {
    Usage::new("node", "Prints the settings a node would start with")
        .add_option(OptionHelp::new("-?", "This help message"))
        .add_option(OptionHelp::new("-conf", "Read settings from this file").with_value("file"))
        .add_option(OptionHelp::new("-datadir", "Data directory").with_value("dir"))
        .add_option(OptionHelp::new("-port", "Listen for connections on <port>").with_value("port"))
        .add_option(OptionHelp::new("-maxconnections", "Maximum number of peers").with_value("n"))
        .add_option(OptionHelp::new("-nolisten", "Don't accept connections from outside"))
        .add_option(OptionHelp::new("-addnode", "Add a node to connect to").with_value("ip"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = Args::from_env();

    if args.help_requested() {
        help::write_help(std::io::stdout(), &usage()).context("could not write to stdout")?;
        return Ok(());
    }

    if let Some(conf) = args.parse::<String>("-conf")? {
        args = args
            .merge_config_file(&conf)
            .with_context(|| format!("could not load settings from {conf}"))?;
    }

    let args = args.with_bool_default("-listen", true);
    let port: u16 = args.parse("-port")?.unwrap_or(8333);

    println!("datadir:        {}", args.string("-datadir", "~/.node"));
    println!("port:           {port}");
    println!("listen:         {}", args.bool("-listen", true));
    println!("maxconnections: {}", args.int("-maxconnections", 125));
    for node in args.values("-addnode") {
        println!("addnode:        {node}");
    }
    for extra in args.positionals() {
        println!("ignored:        {extra}");
    }

    Ok(())
}
