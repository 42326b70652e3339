use rand::{prelude::random, rngs::SmallRng, SeedableRng};
use structopt::StructOpt;

use std::{error, fs, io, path::PathBuf, process, result};

use rbmap::{dump, pairs, RBMap};

/// Generate random key-value pairs, or read them from a csv file, and
/// index them into a red-black tree.
#[derive(Clone, StructOpt)]
pub struct Opt {
    /// Number of key-value pairs to generate.
    #[structopt(
        short = "n",
        long = "nnodes",
        conflicts_with = "input",
        required_unless = "input"
    )]
    nnodes: Option<usize>,

    /// Key-value csv file to read, when --nnodes is not given.
    #[structopt(short = "i", long = "input")]
    input: Option<PathBuf>,

    /// Write outputs to files named with this prefix, instead of
    /// standard output.
    #[structopt(short = "o", long = "output")]
    output: Option<String>,

    /// Seed for the random generator, picked at random when not given.
    #[structopt(long = "seed")]
    seed: Option<u64>,
}

fn main() {
    let opts = Opt::from_args();
    if let Err(err) = run(opts) {
        eprintln!("treegen: {}", err);
        process::exit(1);
    }
}

fn run(opts: Opt) -> result::Result<(), Box<dyn error::Error>> {
    let seed = opts.seed.unwrap_or_else(random);
    let mut rng = SmallRng::seed_from_u64(seed);

    let pairs = match (opts.nnodes, &opts.input) {
        (Some(n), _) => {
            let pairs = pairs::generate(n, &mut rng);
            // keep the generated input around when writing to files
            if let Some(prefix) = &opts.output {
                let mut out = fs::File::create(format!("{}-pairs.csv", prefix))?;
                pairs::write_pairs(pairs.iter().cloned(), &mut out)?;
            }
            pairs
        }
        (None, Some(path)) => {
            let f = fs::File::open(path)?;
            pairs::read_pairs(io::BufReader::new(f))?
        }
        (None, None) => unreachable!("argument parsing requires --nnodes or --input"),
    };

    let mut index: RBMap<i64, i64> = RBMap::new();
    for (key, value) in pairs {
        index.insert(key, value)?;
    }

    match &opts.output {
        Some(prefix) => {
            let mut out = fs::File::create(format!("{}-nodes.csv", prefix))?;
            dump::write_inorder(&index, &mut out)?;
            let mut out = fs::File::create(format!("{}-tree.txt", prefix))?;
            dump::write_tree(&index, &mut out)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            dump::write_inorder(&index, &mut out)?;
            dump::write_tree(&index, &mut out)?;
        }
    }

    Ok(())
}
