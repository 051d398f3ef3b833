//! Extension additions of extensible sequences.
//!
//! According to ITU-T X.691 | ISO/IEC 8825-2:2015, an extensible sequence is built as
//!  - the extension bit, preceding the presence bits of the root fields
//!  - the root fields
//!  - if the extension bit is set
//!    - the number of extension additions (as normally-small-length)
//!    - a presence bit for each extension addition, oldest first
//!    - each present addition as open type: length determinant in octets and the content
//!      padded to the next octet
//!
//! The number of additions an IE carries is frozen per release, a newer peer might send more
//! of them. These are skipped by their length.

use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// How far a received value made use of the extension mechanism
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionState {
    /// The extension bit was not set
    Baseline,
    /// The extension bit was set, but no addition was flagged as present
    ExtendedNoGroups,
    /// The presence bitmap as received, which might be longer than the additions known
    ExtendedWithGroups(Vec<bool>),
}

impl ExtensionState {
    pub fn is_extended(&self) -> bool {
        !matches!(self, ExtensionState::Baseline)
    }

    /// Number of additions the peer declared
    pub fn declared(&self) -> usize {
        match self {
            ExtensionState::ExtendedWithGroups(bitmap) => bitmap.len(),
            _ => 0,
        }
    }
}

/// The slot of an extension addition, `None` if absent
#[inline]
pub fn addition<T: Writable>(value: &Option<T>) -> Option<&dyn Writable> {
    value.as_ref().map(|value| value as &dyn Writable)
}

/// Content of an extension addition that is counted but not decoded by this codec. The
/// octets are kept as received so a value re-encodes bit-exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpaqueExtension(pub Vec<u8>);

impl Writable for OpaqueExtension {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        self.0.iter().try_for_each(|byte| writer.write_bits(u64::from(*byte), 8))
    }
}

impl Readable for OpaqueExtension {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        reader.read_remaining_octets().map(OpaqueExtension)
    }
}

impl UperWriter {
    /// Writes the extension bit, which is set if any of the `additions` is present
    pub fn write_extension_marker(&mut self, additions: &[Option<&dyn Writable>]) -> Result<(), Error> {
        self.write_bit(additions.iter().any(Option::is_some))
    }

    /// Writes the extension additions after the root fields, nothing if none is present
    pub fn write_extension_additions(
        &mut self,
        additions: &[Option<&dyn Writable>],
    ) -> Result<(), Error> {
        if additions.iter().all(Option::is_none) {
            return Ok(());
        }
        self.write_normally_small_length(additions.len() as u64 - 1)?;
        for addition in additions {
            self.write_bit(addition.is_some())?;
        }
        for addition in additions.iter().flatten() {
            self.write_open_type(|w| addition.write(w))?;
        }
        Ok(())
    }
}

impl<'a> UperReader<'a> {
    #[inline]
    pub fn read_extension_marker(&mut self) -> Result<bool, Error> {
        self.read_bit()
    }

    /// Reads the extension additions of `name` if `extended`, calling `f` with the index of
    /// each present addition below `known`. The reader passed to `f` is limited to the content
    /// of the addition. Additions beyond `known` are skipped and reported to the sink.
    pub fn read_extension_additions<F: FnMut(usize, &mut UperReader<'a>) -> Result<(), Error>>(
        &mut self,
        name: &'static str,
        extended: bool,
        known: usize,
        mut f: F,
    ) -> Result<ExtensionState, Error> {
        if !extended {
            return Ok(ExtensionState::Baseline);
        }

        // every declared addition takes at least its bitmap bit
        let declared = self.read_normally_small_length()?;
        if declared >= self.remaining_bits() as u64 {
            return Err(Error::end_of_stream(
                declared.saturating_add(1) as usize,
                self.remaining_bits(),
            ));
        }
        let count = declared as usize + 1;
        let mut bitmap = Vec::with_capacity(count);
        for _ in 0..count {
            bitmap.push(self.read_bit()?);
        }

        if count > known {
            self.diagnostic(
                name,
                &format!("{count} extension additions declared, {known} known"),
            );
        }

        for (index, _) in bitmap.iter().enumerate().filter(|(_, present)| **present) {
            let bits = self.read_open_type_len(name)?;
            if index < known {
                self.with_limit(bits, |reader| f(index, reader))?;
            } else {
                self.diagnostic(
                    name,
                    &format!("skipping unknown extension addition {index} of {bits} bits"),
                );
                self.with_limit(bits, |_| Ok(()))?;
            }
        }

        if bitmap.iter().any(|present| *present) {
            Ok(ExtensionState::ExtendedWithGroups(bitmap))
        } else {
            Ok(ExtensionState::ExtendedNoGroups)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::io::per::ErrorKind;

    #[derive(Debug, PartialEq)]
    struct Versioned {
        root: bool,
        v920: Option<u8>,
        r10: Option<OpaqueExtension>,
    }

    struct Int(u8);

    impl Writable for Int {
        fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
            writer.write_int(self.0, 0, 15)
        }
    }

    fn write(value: &Versioned) -> UperWriter {
        let v920 = value.v920.map(Int);
        let additions = [addition(&v920), addition(&value.r10)];
        let mut writer = UperWriter::default();
        writer.write_extension_marker(&additions).unwrap();
        writer.write_bit(value.root).unwrap();
        writer.write_extension_additions(&additions).unwrap();
        writer
    }

    fn read(reader: &mut UperReader, known: usize) -> (Versioned, ExtensionState) {
        let extended = reader.read_extension_marker().unwrap();
        let mut value = Versioned {
            root: reader.read_bit().unwrap(),
            v920: None,
            r10: None,
        };
        let state = reader
            .read_extension_additions("Versioned", extended, known, |index, reader| {
                match index {
                    0 => value.v920 = Some(reader.read_int(0, 15)?),
                    _ => value.r10 = Some(reader.read()?),
                }
                Ok(())
            })
            .unwrap();
        (value, state)
    }

    #[test]
    fn test_baseline_takes_one_bit() {
        let value = Versioned {
            root: true,
            v920: None,
            r10: None,
        };
        let writer = write(&value);
        assert_eq!(2, writer.finish());
        let (decoded, state) = read(&mut writer.as_reader(), 2);
        assert_eq!(value, decoded);
        assert_eq!(ExtensionState::Baseline, state);
    }

    #[test]
    fn test_additions_layout() {
        let value = Versioned {
            root: false,
            v920: None,
            r10: Some(OpaqueExtension(vec![0xCA, 0xFE])),
        };
        let writer = write(&value);
        // ext bit, root, normally small (7), bitmap (2), length octet, two content octets
        assert_eq!(1 + 1 + 7 + 2 + 8 + 16, writer.finish());
        let (decoded, state) = read(&mut writer.as_reader(), 2);
        assert_eq!(value, decoded);
        assert_eq!(ExtensionState::ExtendedWithGroups(vec![false, true]), state);
    }

    #[test]
    fn test_unknown_additions_are_skipped() {
        let value = Versioned {
            root: true,
            v920: Some(9),
            r10: Some(OpaqueExtension(vec![0x01, 0x02, 0x03])),
        };
        let writer = write(&value);
        let sink = CollectingSink::default();
        let mut reader = writer.as_reader().with_sink(&sink);
        let (decoded, state) = read(&mut reader, 1);
        assert_eq!(
            Versioned {
                root: true,
                v920: Some(9),
                r10: None
            },
            decoded
        );
        assert_eq!(2, state.declared());
        assert_eq!(0, reader.bits_remaining());
        assert!(sink.contains("Versioned"));
    }

    #[test]
    fn test_overrunning_length_is_rejected() {
        let value = Versioned {
            root: true,
            v920: None,
            r10: Some(OpaqueExtension(vec![0x01, 0x02, 0x03])),
        };
        let writer = write(&value);
        let bytes = writer.byte_content();
        // cut the last content octet
        let mut reader = UperReader::from_bits(&bytes[..bytes.len() - 1], writer.finish() - 8);
        let extended = reader.read_extension_marker().unwrap();
        reader.read_bit().unwrap();
        let result = reader.read_extension_additions("Versioned", extended, 2, |_, _| Ok(()));
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::ExtensionLengthOverrun {
                name: "Versioned",
                length_bits: 24,
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_addition_count_is_rejected() {
        let mut writer = UperWriter::default();
        writer.write_bit(true).unwrap();
        writer.write_bit(true).unwrap();
        writer.write_normally_small_length(1 << 39).unwrap();
        writer.write_bits((1 << 40) - 1, 40).unwrap();

        let mut reader = writer.as_reader();
        let extended = reader.read_extension_marker().unwrap();
        reader.read_bit().unwrap();
        let error = reader
            .read_extension_additions("Versioned", extended, 2, |_, _| Ok(()))
            .unwrap_err();
        assert!(matches!(
            error.kind(),
            ErrorKind::EndOfStream {
                requested: 549_755_813_889,
                available: 40,
            }
        ));
        assert!(error.is_decode_error());
    }
}
