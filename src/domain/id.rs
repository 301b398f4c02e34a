use rand::Rng;

/// Length of ids handed out by the CLI unless configured otherwise.
pub const DEFAULT_ID_LENGTH: usize = 4;

/// Longest id the CLI will ask for.
pub const MAX_ID_LENGTH: usize = 64;

const URL_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub trait IdGenerator {
    fn generate(&self, len: usize) -> String;
}

/// Random ids drawn uniformly from the URL-safe alphabet.
#[derive(Debug, Default, Clone, Copy)]
pub struct NanoId;

impl IdGenerator for NanoId {
    fn generate(&self, len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| URL_ALPHABET[rng.gen_range(0..URL_ALPHABET.len())] as char)
            .collect()
    }
}
