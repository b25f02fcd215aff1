#[macro_use]
extern crate clap;

#[macro_use]
extern crate log;

extern crate env_logger;

use std::error::Error;
use std::io;

use clap::{App, ArgMatches};

use radix::commands;
use radix::demo::Demo;

fn main() {
    env_logger::init();
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let result = match matches.subcommand() {
        ("to-base", Some(args)) => to_base(args),
        ("to-decimal", Some(args)) => to_decimal(args),
        ("check", Some(args)) => check(args),
        ("explain", Some(args)) => explain(args),
        _ => run_demo(),
    };
    if let Err(e) = result {
        error!("{}", e);
        println!("{}", e);
        std::process::exit(1);
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut demo = Demo::new(stdout.lock());
    demo.run()
}

fn to_base(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    commands::to_base(
        &mut stdout.lock(),
        required(args, "VALUE")?,
        required(args, "BASE")?,
    )
}

fn to_decimal(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    commands::to_decimal(
        &mut stdout.lock(),
        required(args, "NUMERAL")?,
        required(args, "BASE")?,
    )
}

fn check(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    commands::check(
        &mut stdout.lock(),
        required(args, "NUMERAL")?,
        required(args, "BASE")?,
    )
}

fn explain(args: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    commands::explain(&mut stdout.lock(), required(args, "NOTATION")?)
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str, Box<dyn Error>> {
    args.value_of(name)
        .ok_or_else(|| format!("Missing argument {}", name).into())
}
