use crate::{Cuid, Generator, GeneratorConfig, Result};
use std::sync::OnceLock;

static DEFAULT_GENERATOR: OnceLock<Result<Generator>> = OnceLock::new();

/// Generates an id from the process-wide default generator.
///
/// The default generator is created with [`GeneratorConfig::default`] on
/// first use and lives for the rest of the process. If creating it failed,
/// every call returns that same error. Use [`Generator::init`] for an
/// isolated instance.
pub fn create_id() -> Result<Cuid> {
    DEFAULT_GENERATOR
        .get_or_init(|| Generator::init(GeneratorConfig::default()))
        .as_ref()
        .map_err(Clone::clone)?
        .next_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_LENGTH;

    #[test]
    fn create_id_uses_the_default_length() {
        let id = create_id().unwrap();
        assert_eq!(id.as_str().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn default_generator_is_shared() {
        let a = create_id().unwrap();
        let b = create_id().unwrap();
        assert_ne!(a, b);
    }
}
