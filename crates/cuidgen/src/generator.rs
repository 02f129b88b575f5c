use crate::{
    clock::{Clock, SystemClock},
    codec::encode_i64,
    counter::Counter,
    cuid::Cuid,
    entropy::{next_entropy, random_letter},
    error::{Error, Result},
    fingerprint::{create_fingerprint, host_context},
    hash::hash,
    BIG_LENGTH, DEFAULT_LENGTH, MAX_LENGTH,
};
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Mutex;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Configures a [`Generator`] instance. Every field is optional.
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct GeneratorConfig {
    /// First counter value. Drawn from the random source when unset.
    #[builder(default, setter(strip_option))]
    pub counter_seed: Option<i64>,
    /// Length of the generated ids. Unset or zero means [`DEFAULT_LENGTH`].
    #[builder(default, setter(strip_option))]
    pub length: Option<usize>,
    /// Use [`BIG_LENGTH`]. Must not be combined with `length`.
    #[builder(default)]
    pub big: bool,
    /// Fingerprint used verbatim instead of one derived from the host.
    ///
    /// Supplying the same value on every node of a fleet, or a fixed value in
    /// tests, takes the host out of the id inputs.
    #[builder(default, setter(strip_option, into))]
    pub fingerprint: Option<String>,
}

impl GeneratorConfig {
    fn resolve_length(&self) -> Result<usize> {
        let length = match (self.big, self.length) {
            (true, Some(_)) => return Err(Error::ConfigurationConflict),
            (true, None) => BIG_LENGTH,
            (false, None | Some(0)) => DEFAULT_LENGTH,
            (false, Some(length)) => length,
        };

        if length > MAX_LENGTH {
            return Err(Error::InvalidLength {
                length,
                max_length: MAX_LENGTH,
            });
        }

        Ok(length)
    }
}

struct GeneratorState<R> {
    rng: R,
    counter: Counter,
}

/// Produces collision-resistant ids of a fixed length.
///
/// Each id is a random lowercase letter followed by the hash of the current
/// time, fresh entropy, a counter and the generator's fingerprint.
pub struct Generator<R: RngCore = OsRng, C: Clock = SystemClock> {
    length: usize,
    fingerprint: String,
    clock: C,
    state: Mutex<GeneratorState<R>>,
}

impl Generator<OsRng, SystemClock> {
    /// Creates a generator backed by the operating system's secure random
    /// source and the real system clock.
    pub fn init(config: GeneratorConfig) -> Result<Self> {
        Self::with_rng(config, OsRng)
    }
}

impl<R: RngCore> Generator<R, SystemClock> {
    /// Creates a generator drawing randomness from `rng`.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        Self::with_clock(config, rng, SystemClock)
    }
}

impl<R: RngCore, C: Clock> Generator<R, C> {
    /// Creates a generator drawing randomness from `rng` and time from `clock`.
    pub fn with_clock(config: GeneratorConfig, mut rng: R, clock: C) -> Result<Self> {
        let length = config.resolve_length()?;

        let counter = match config.counter_seed {
            Some(seed) => Counter::new(seed),
            None => Counter::random(&mut rng)?,
        };

        let supplied_fingerprint = config.fingerprint.filter(|f| !f.is_empty());
        let fingerprint_supplied = supplied_fingerprint.is_some();
        let fingerprint = match supplied_fingerprint {
            Some(fingerprint) => fingerprint,
            None => create_fingerprint(&mut rng, &host_context()?)?,
        };

        debug!(
            length,
            seeded_counter = config.counter_seed.is_some(),
            fingerprint_supplied,
            "initialized id generator"
        );

        Ok(Self {
            length,
            fingerprint,
            clock,
            state: Mutex::new(GeneratorState { rng, counter }),
        })
    }

    /// Length of every id this generator produces.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Generates the next id.
    ///
    /// The counter advances even when a random draw fails, so a failed call
    /// still consumes a counter value.
    pub fn next_id(&self) -> Result<Cuid> {
        let mut state = self.state.lock().map_err(|_| Error::StatePoisoned)?;
        let GeneratorState { rng, counter } = &mut *state;

        let first_letter = random_letter(rng);
        let time = encode_i64(self.clock.now().as_millisecond());
        let count = encode_i64(counter.next_count());
        let first_letter = first_letter?;

        let salt = next_entropy(rng, self.length)?;
        drop(state);

        let hash_input = format!("{time}{salt}{count}{}", self.fingerprint);
        let digest = hash(&hash_input, self.length);

        let mut id = String::with_capacity(self.length);
        id.push(first_letter);
        id.extend(digest.chars().skip(1));

        trace!(id = %id, "generated id");

        Ok(Cuid::new_unchecked(id))
    }
}
