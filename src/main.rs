use jollof::{
    cli::{get_log_level_from_verbose, parse_cli, run, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();
    match cli.command {
        Commands::Cook(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            if let Err(err) = run(args) {
                default_error_handler(err);
            }
        }
    }
}
