use clap::Parser;
use localematch::{LocaleId, LocaleMatcher, NO_MATCH, PriorityList};
use std::process::ExitCode;

/// Pick the best supported locale for a desired one.
#[derive(Debug, Parser)]
#[command(name = "localematch", version)]
struct Args {
    /// Desired locale, or an Accept-Language list such as `de-CH, en;q=0.5`.
    desired: String,

    /// Supported locales in priority order.
    #[arg(required = true)]
    supported: Vec<String>,

    /// Distances at or above this never match.
    #[arg(long, short)]
    threshold: Option<u16>,

    /// Locale to return when nothing matches.
    #[arg(long, short)]
    default: Option<String>,

    /// Demotion per additional desired locale.
    #[arg(long)]
    demotion: Option<u16>,

    /// Print every candidate's expansion and distance.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), localematch::Error> {
    let desired: PriorityList = args.desired.parse()?;
    let supported = PriorityList::from_tags(&args.supported[..])?;

    let mut builder = LocaleMatcher::builder();
    if let Some(threshold) = args.threshold {
        builder = builder.threshold(threshold);
    }
    if let Some(demotion) = args.demotion {
        builder = builder.demotion(demotion);
    }
    if let Some(default) = &args.default {
        builder = builder.default_locale(default.parse::<LocaleId>()?);
    }
    let matcher = builder.build();

    if args.verbose {
        for d in &desired {
            println!("desired   {d:<16} {}", matcher.expand(d));
            for s in &supported {
                let distance = matcher.distance(d, s);
                let shown = if distance == NO_MATCH {
                    "-".to_owned()
                } else {
                    distance.to_string()
                };
                println!("  {s:<16} {:<16} {shown}", matcher.expand(s).to_string());
            }
        }
    }

    let result = matcher.best_match_list(&desired, &supported)?;
    if args.verbose {
        println!(
            "best      {} (distance {}, desired #{})",
            result.supported,
            if result.is_default() { "-".to_owned() } else { result.distance.to_string() },
            result.desired_index
        );
    } else {
        println!("{}", result.supported);
    }
    Ok(())
}
