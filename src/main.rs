use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use scoped_resource::resource::{HeapCell, Resource};
use scoped_resource::scope::{Console, Owner};
use scoped_resource::signal::{Policy, ResultExtension, intercept, raise};

/// Acquires a resource, uses it, and then (unless told otherwise) signals an error before the
/// result can be returned, printing each step as it happens.
#[derive(Debug, Parser)]
#[command(name = "raii-demo", version, about)]
struct Args {
    /// The value to store in the resource.
    #[arg(long, default_value_t = 42)]
    value: i32,

    /// Return normally instead of signaling an error after the value is read back.
    #[arg(long)]
    succeed: bool,

    /// Don't wrap the scenario in a handler.
    #[arg(long)]
    no_handler: bool,

    /// What happens to a signaled error that nothing intercepts.
    #[arg(long, value_enum, default_value_t = PolicyArg::Abort)]
    policy: PolicyArg,

    /// Manage the resource by hand instead of through an owner.
    #[arg(long)]
    naive: bool,

    /// Fail with an ordinary panic rather than a signaled error.
    #[arg(long)]
    plain_panic: bool,
}

/// How the use phase ends.
#[derive(Debug, Clone, Copy)]
enum Outcome {
    Return,
    Signal,
    Panic,
}

impl Outcome {
    fn conclude(self, read: i32) {
        let message = format!("failed after reading back {read}");
        match self {
            Outcome::Return => {},
            Outcome::Signal => raise(message),
            Outcome::Panic => panic!("{message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Unwind,
    Abort,
}

impl From<PolicyArg> for Policy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Unwind => Policy::Unwind,
            PolicyArg::Abort => Policy::Abort,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "starting");
    Policy::from(args.policy).install();

    let outcome = match (args.succeed, args.plain_panic) {
        (true, _) => Outcome::Return,
        (false, false) => Outcome::Signal,
        (false, true) => Outcome::Panic,
    };
    let scenario = || if args.naive { naive(args.value, outcome) } else { scoped(args.value, outcome) };

    if args.no_handler {
        println!("{}", scenario());
    } else {
        match intercept(scenario) {
            Ok(value) => println!("{value}"),
            Err(_) => println!("exception handler"),
        }
    }
}

/// The resource is released when `cell` goes out of scope, whichever way that happens.
fn scoped(value: i32, outcome: Outcome) -> i32 {
    let mut cell = Owner::<HeapCell<i32>, _>::acquire_observed(0, Console).throw();
    cell.set(value);
    let read = cell.get();

    outcome.conclude(read);
    read
}

/// The release at the bottom is skipped entirely if anything above it signals.
fn naive(value: i32, outcome: Outcome) -> i32 {
    let mut cell = HeapCell::acquire(0).throw();
    println!("allocating the resource");
    cell.set(value);
    let read = cell.get();

    outcome.conclude(read);

    cell.release().throw();
    println!("cleaning up the resource");
    read
}
