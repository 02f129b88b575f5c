use crate::entropy::next_entropy;
use crate::error::{Error, Result};
use crate::hash::hash;
use crate::BIG_LENGTH;
use rand::RngCore;
use std::ffi::OsString;
use std::io;

/// Number of characters in a computed fingerprint.
pub const FINGERPRINT_LENGTH: usize = 4;

/// Collects strings that tell this process apart from others on the same or
/// other hosts: the environment (`KEY=VALUE`), the host name and the process
/// id, in that order.
///
/// Fails with [`Error::Hostname`] when the host name cannot be resolved.
pub fn host_context() -> Result<Vec<String>> {
    context_with_host(hostname::get())
}

fn context_with_host(host: io::Result<OsString>) -> Result<Vec<String>> {
    let host = host.map_err(|e| Error::Hostname(e.to_string()))?;

    let mut context: Vec<String> = std::env::vars_os()
        .map(|(key, value)| format!("{}={}", key.to_string_lossy(), value.to_string_lossy()))
        .collect();
    context.push(host.to_string_lossy().into_owned());
    context.push(std::process::id().to_string());
    Ok(context)
}

/// Derives a fingerprint from `context` salted with fresh entropy.
///
/// The salt keeps two generators in the same process, which share the same
/// context, from ending up with the same fingerprint.
pub fn create_fingerprint<R, S>(rng: &mut R, context: &[S]) -> Result<String>
where
    R: RngCore + ?Sized,
    S: AsRef<str>,
{
    let salt = next_entropy(rng, BIG_LENGTH)?;

    let mut input = context
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<&str>>()
        .join(",");
    input.push_str(&salt);

    Ok(hash(&input, FINGERPRINT_LENGTH))
}
