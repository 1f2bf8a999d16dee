use anyhow::{bail, Context, Result};

use minitree::prelude::*;
use minitree::research::Logger;

use std::env;
use std::process;


const USAGE: &str = "\
usage: minitree <train.csv> <test.csv> [--dot <file>] [--json <file>] [--verbose | -v]
       minitree inspect <file.csv>";


/// Options of the training command.
struct Options {
    train: String,
    test: String,
    dot: Option<String>,
    json: Option<String>,
    verbose: bool,
}


enum Command {
    Train(Options),
    Inspect(String),
}


fn parse_args(args: &[String]) -> Result<Command> {
    if args.first().is_some_and(|arg| arg == "inspect") {
        return match args {
            [_, file] => Ok(Command::Inspect(file.clone())),
            _ => bail!("`inspect` takes exactly one file"),
        };
    }

    let mut files = Vec::new();
    let mut dot = None;
    let mut json = None;
    let mut verbose = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dot" => {
                let file = iter.next().context("`--dot` needs a file name")?;
                dot = Some(file.clone());
            },
            "--json" => {
                let file = iter.next().context("`--json` needs a file name")?;
                json = Some(file.clone());
            },
            "--verbose" | "-v" => { verbose = true; },
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            file => files.push(file.to_string()),
        }
    }

    match <[String; 2]>::try_from(files) {
        Ok([train, test]) => {
            Ok(Command::Train(Options { train, test, dot, json, verbose }))
        },
        Err(files) => {
            bail!("expected a train file and a test file, got {}", files.len())
        },
    }
}


fn read_sample(file: &str) -> Result<Sample> {
    SampleReader::new()
        .file(file)
        .read()
        .with_context(|| format!("failed to read `{file}`"))
}


fn train(opts: Options) -> Result<()> {
    let train = read_sample(&opts.train)?;
    let test = read_sample(&opts.test)?;

    let (n_train, n_train_attr) = train.shape();
    let n_test_attr = test.shape().1;
    if n_train_attr != n_test_attr {
        bail!(
            "`{}` has {n_train_attr} attributes but `{}` has {n_test_attr}",
            opts.train, opts.test,
        );
    }
    if n_train == 0 {
        bail!("`{}` has no instance", opts.train);
    }

    let tree = DecisionTreeBuilder::new(&train).build();
    let (f, report) = Logger::new(&tree, &train, &test)
        .verbose(opts.verbose)
        .run();

    print!("{}", f.display(train.attribute_names()));
    println!("{report}");

    if let Some(file) = opts.dot {
        f.to_dot_file(&file, train.attribute_names())
            .with_context(|| format!("failed to write `{file}`"))?;
    }
    if let Some(file) = opts.json {
        f.to_json_file(&file)
            .with_context(|| format!("failed to write `{file}`"))?;
    }
    Ok(())
}


fn run(command: Command) -> Result<()> {
    match command {
        Command::Train(opts) => train(opts),
        Command::Inspect(file) => {
            let sample = read_sample(&file)?;
            println!("{}", inspect(&sample));
            Ok(())
        },
    }
}


fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}\n{USAGE}");
            process::exit(1);
        },
    };

    if let Err(e) = run(command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
