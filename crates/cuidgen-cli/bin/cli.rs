use clap::Parser;
use cuidgen::GeneratorConfig;

pub const BIG_ENV: &str = "CUIDGEN_BIG";
pub const LENGTH_ENV: &str = "CUIDGEN_LENGTH";
pub const FINGERPRINT_ENV: &str = "CUIDGEN_FINGERPRINT";

#[derive(Debug, Parser)]
#[command(name = "cuidgen", about = "Generate secure, collision-resistant ids")]
pub struct CLI {
    /// Use a length of 32 characters
    #[arg(short, long, env = BIG_ENV)]
    pub big: bool,

    /// Length in characters
    #[arg(short, long, env = LENGTH_ENV)]
    pub length: Option<usize>,

    /// Fingerprint used to help prevent collisions when generating ids in a
    /// distributed system
    #[arg(short, long, env = FINGERPRINT_ENV)]
    pub fingerprint: Option<String>,

    /// Number of ids to print, one per line
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,
}

impl CLI {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length,
            big: self.big,
            fingerprint: self.fingerprint.clone(),
            ..GeneratorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a_single_default_length_id() {
        let cli = CLI::try_parse_from(["cuidgen"]).unwrap();
        assert_eq!(cli.count, 1);

        let config = cli.generator_config();
        assert!(!config.big);
        assert_eq!(config.length, None);
        assert_eq!(config.fingerprint, None);
        assert_eq!(config.counter_seed, None);
    }

    #[test]
    fn flags_map_onto_the_config() {
        let cli = CLI::try_parse_from(["cuidgen", "-l", "10", "-f", "node-a", "-n", "3"]).unwrap();
        assert_eq!(cli.count, 3);

        let config = cli.generator_config();
        assert_eq!(config.length, Some(10));
        assert_eq!(config.fingerprint.as_deref(), Some("node-a"));
    }

    #[test]
    fn big_and_length_are_both_passed_through() {
        // the generator, not the parser, reports the conflict
        let cli = CLI::try_parse_from(["cuidgen", "--big", "--length", "10"]).unwrap();
        let config = cli.generator_config();
        assert!(config.big);
        assert_eq!(config.length, Some(10));
    }
}
