use seaplane::args::sorted_entries;
use seaplane::{
    ArgParser, OptionMap, ParseOption, SchemaBuilder, SeaplaneResult, StdoutSink, Variant,
    sea_log,
};
use std::env;
use std::process;

fn default_options() -> OptionMap {
    SchemaBuilder::new()
        .set("num", 1)
        .set("bool", true)
        .set("str", "bag")
        .set("dec", 7.3)
        .build()
}

fn print_usage(program: &str, defaults: &OptionMap) {
    eprintln!("usage: {} [options]", program);
    eprintln!("Available options are:");
    for (name, value) in sorted_entries(defaults) {
        match value {
            Variant::Boolean(_) => {
                eprintln!("  -{name} / +{name}  enable / disable (default {value})")
            }
            _ => eprintln!(
                "  -{name} <{kind}>  (default {value})",
                kind = value.data_type()
            ),
        }
    }
}

fn show_variants() -> SeaplaneResult<()> {
    let i = Variant::from(6);
    let d = Variant::from(0.5);
    let b = Variant::from(true);
    let s = Variant::from("Yellow?");

    println!("{},{},{},{}", i, d, b, s);

    let i2 = i.get::<i32>()?;
    let d2 = d.get::<f64>()?;
    let b2 = b.get::<bool>()?;
    let s2 = s.get::<String>()?;

    println!("{},{},{},{}", i2, d2, b2, s2);
    Ok(())
}

fn seaplane_main() -> i32 {
    sea_log!("Hello {}", "seaplane");

    if let Err(e) = show_variants() {
        eprintln!("seaplane: {}", e);
        return 1;
    }

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("seaplane");
    let defaults = default_options();

    let mut parser = ArgParser::with_sink(ParseOption { announce: true }, StdoutSink);
    // The sink has already printed and flushed the message
    let options = match parser.parse_args(&defaults, &argv) {
        Ok(options) => options,
        Err(_) => {
            print_usage(program, &defaults);
            return 1;
        }
    };

    println!("Parsed arguments:");
    for (name, value) in sorted_entries(&options) {
        println!("\t{}: {}", name, value);
    }

    0
}

fn main() {
    process::exit(seaplane_main());
}
