use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use tailbytes_lib::{decode_with, pop_decode, pop_n, ByteOrder, DecodeConfig, TailbytesError};

#[derive(Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/**
 * Available CLI commands
 */
#[derive(Subcommand)]
enum Commands {
    /// Pop values off the tail of a sequence
    Pop {
        /// Number of values to pop
        #[arg(short = 'n', long)]
        count: usize,

        /// The sequence
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode a sequence of bytes into a signed integer
    Decode {
        /// Byte order (little, big, native)
        #[arg(short, long, env = "TAILBYTES_BYTE_ORDER", default_value = "native")]
        order: ByteOrder,

        /// The bytes
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Pop values off the tail of a sequence and decode them
    PopDecode {
        /// Number of values to pop
        #[arg(short = 'n', long)]
        count: usize,

        /// Byte order (little, big, native)
        #[arg(short, long, env = "TAILBYTES_BYTE_ORDER", default_value = "native")]
        order: ByteOrder,

        /// The sequence
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/**
 * Execute a command and return the text to print
 */
fn run(command: Commands) -> Result<String, TailbytesError> {
    let output = match command {
        Commands::Pop { count, mut values } => {
            let popped = pop_n(&mut values, count)?;
            format!("Popped: {:?}\nRemaining: {:?}", popped, values)
        }

        Commands::Decode { order, values } => {
            let config = DecodeConfig::new(order);
            debug!("decoding with {} byte order", order.resolve());
            decode_with(&values, &config)?.to_string()
        }

        Commands::PopDecode {
            count,
            order,
            mut values,
        } => {
            let config = DecodeConfig::new(order);
            let value = pop_decode(&mut values, count, &config)?;
            format!(
                "Decoded: {}\nRemaining: {:?} (length {})",
                value,
                values,
                values.len()
            )
        }
    };

    Ok(output)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(command) = cli.command {
        match run(command) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
