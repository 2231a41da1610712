use std::{fmt, str::FromStr};

use heapless::String;
use sha2::{Sha256, digest::Output};
use thiserror::Error;

// 256 bits / 4 bits per hex character
const SHA256_LEN: usize = 256 / 0xF_u8.count_ones() as usize;

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "&str")]
pub struct Sha256String(String<SHA256_LEN>);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum Sha256StringError {
    #[error("SHA-256 hash must be exactly {SHA256_LEN} characters but has {_0}")]
    WrongLength(usize),
    #[error("SHA-256 hash contains non-hexadecimal character {_0:?}")]
    InvalidCharacter(char),
}

impl Sha256String {
    /// Creates a `Sha256String` from any type that implements `AsRef<str>`.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the hash is not exactly 64 characters long or contains a
    /// non-hexadecimal character.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpkg_core::Sha256String;
    ///
    /// assert!(
    ///     Sha256String::new("BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD")
    ///         .is_ok()
    /// );
    /// assert!(Sha256String::new("abc").is_err());
    /// ```
    pub fn new<T: AsRef<str>>(hash: T) -> Result<Self, Sha256StringError> {
        let hash = hash.as_ref();

        let char_count = hash.chars().count();
        if char_count != SHA256_LEN {
            return Err(Sha256StringError::WrongLength(char_count));
        }

        if let Some(invalid) = hash.chars().find(|char| !char.is_ascii_hexdigit()) {
            return Err(Sha256StringError::InvalidCharacter(invalid));
        }

        Ok(Self(hash.parse::<String<SHA256_LEN>>().unwrap_or_else(|_| {
            unreachable!("hash was already checked to be {SHA256_LEN} characters long")
        })))
    }

    /// Creates a `Sha256String` from a Sha256 digest.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpkg_core::{sha2::{Digest, Sha256}, Sha256String};
    ///
    /// // Digest some data manually
    /// let sha256_digest = Sha256::digest("abc");
    ///
    /// assert_eq!(
    ///     Sha256String::from_digest(&sha256_digest).as_str(),
    ///     "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
    /// );
    /// ```
    #[must_use]
    pub fn from_digest(digest: &Output<Sha256>) -> Self {
        let mut encode_buf = [0; SHA256_LEN];

        Self(
            base16ct::upper::encode_str(digest, &mut encode_buf)
                .unwrap_or_else(|_| unreachable!("SHA256 digests should always be 32 bytes long"))
                .parse::<String<SHA256_LEN>>()
                .unwrap_or_else(|_| {
                    unreachable!("Sha256 hashes should always be {SHA256_LEN} bytes long")
                }),
        )
    }

    /// Creates a `Sha256String` by hashing data from a reader.
    ///
    /// This will repeatedly read the data into a buffer of length 4096.
    ///
    /// # Errors
    ///
    /// Returns the propagated `Err` from [`io::read`].
    ///
    /// # Examples
    ///
    /// [`File`]s implement `Read`:
    ///
    /// [`File`]: std::fs::File
    /// [`io::read`]: std::io::Read::read
    ///
    /// ```no_run
    /// use std::io;
    /// use std::fs::File;
    ///
    /// use winpkg_core::Sha256String;
    ///
    /// fn main() -> io::Result<()> {
    ///     let mut f = File::open("foo.txt")?;
    ///
    ///     let sha256_string = Sha256String::hash_from_reader(f)?;
    ///
    ///     println!("File SHA256 hash: {sha256_string}");
    ///     Ok(())
    /// }
    /// ```
    pub fn hash_from_reader<R: std::io::Read>(mut reader: R) -> std::io::Result<Self> {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        let mut buffer = [0; 1 << 12];

        loop {
            let count = reader.read(&mut buffer)?;
            if count == 0 {
                break;
            }
            hasher.update(&buffer[..count]);
        }

        Ok(Self::from_digest(&hasher.finalize()))
    }

    /// Extracts a string slice containing the entire `Sha256String`.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Sha256String {
    fn default() -> Self {
        Self(std::iter::repeat_n('0', SHA256_LEN).collect::<_>())
    }
}

impl fmt::Display for Sha256String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Sha256String {
    type Err = Sha256StringError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Sha256String {
    type Error = Sha256StringError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Sha256String, Sha256StringError};

    const VALID: &str = "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD";

    #[test]
    fn valid_hash_round_trips() {
        assert_eq!(Sha256String::new(VALID).unwrap().as_str(), VALID);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(Sha256String::new("abc"), Err(Sha256StringError::WrongLength(3)));
    }

    #[test]
    fn non_hex_character_is_rejected() {
        let mut too_long_non_hex = "g".repeat(64);
        too_long_non_hex.replace_range(0..1, "g");
        assert_eq!(
            Sha256String::new(too_long_non_hex),
            Err(Sha256StringError::InvalidCharacter('g'))
        );
    }

    #[test]
    fn deserializes_via_try_from_str() {
        let quoted = format!("{VALID:?}");
        let parsed: Sha256String = serde_json::from_str(&quoted).unwrap();
        assert_eq!(parsed.as_str(), VALID);

        assert!(serde_json::from_str::<Sha256String>("\"abc\"").is_err());
    }
}
