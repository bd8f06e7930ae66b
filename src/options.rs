use std::time::Duration;

use toruslife::Grid;

/// Side length used when `--size` is not given
const DEFAULT_SIZE: usize = 100;
/// Tick interval used in console mode when `--sleep` is not given
const DEFAULT_CONSOLE_SLEEP: Duration = Duration::from_millis(100);

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),
    #[error("invalid value `{value}` for --{name}")]
    Value { name: &'static str, value: String },
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ArgsError> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optopt("n", "size", "set grid side length", "SIZE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "seed", "seed for the initial random fill", "SEED");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: toruslife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface malformed values up front instead of mid-simulation
        args.size()?;
        args.generations()?;
        args.sleep()?;
        args.seed()?;
        Ok(Some(args))
    }
    pub fn from_env() -> Result<Option<Self>, ArgsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T: std::str::FromStr>(&self, name: &'static str) -> Result<Option<T>, ArgsError> {
        self.matches
            .opt_get(name)
            .map_err(|_| ArgsError::Value {
                name,
                value: self.matches.opt_str(name).unwrap_or_default(),
            })
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn size(&self) -> Result<usize, ArgsError> {
        match self.get::<usize>("size")? {
            Some(size) if size > Grid::MAX_SIZE => Err(ArgsError::Value {
                name: "size",
                value: size.to_string(),
            }),
            size => Ok(size.unwrap_or(DEFAULT_SIZE)),
        }
    }
    pub fn generations(&self) -> Result<usize, ArgsError> {
        Ok(self.get("gens")?.unwrap_or(usize::MAX)) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Result<Option<Duration>, ArgsError> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(DEFAULT_CONSOLE_SLEEP),
            None => None,
        })
    }
    pub fn seed(&self) -> Result<Option<u64>, ArgsError> {
        self.get("seed")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
