//! Generic choices that recur throughout the catalog.

use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// `CHOICE { release NULL, setup T }`, used to (re)configure or tear down a function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupRelease<T> {
    Release,
    Setup(T),
}

impl<T> SetupRelease<T> {
    pub fn as_setup(&self) -> Option<&T> {
        match self {
            SetupRelease::Release => None,
            SetupRelease::Setup(value) => Some(value),
        }
    }
}

impl<T: Writable> Writable for SetupRelease<T> {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            SetupRelease::Release => writer.write_choice_index("SetupRelease", 0, 2, false),
            SetupRelease::Setup(value) => {
                writer.write_choice_index("SetupRelease", 1, 2, false)?;
                value.write(writer)
            }
        }
    }
}

impl<T: Readable> Readable for SetupRelease<T> {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("SetupRelease", 2, false)? {
            0 => Ok(SetupRelease::Release),
            _ => Ok(SetupRelease::Setup(reader.read()?)),
        }
    }
}

/// `CHOICE { explicitValue T, defaultValue NULL }`, where the default consumes no further bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplicitOrDefault<T> {
    Explicit(T),
    Default,
}

impl<T: Writable> Writable for ExplicitOrDefault<T> {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            ExplicitOrDefault::Explicit(value) => {
                writer.write_choice_index("ExplicitOrDefault", 0, 2, false)?;
                value.write(writer)
            }
            ExplicitOrDefault::Default => {
                writer.write_choice_index("ExplicitOrDefault", 1, 2, false)
            }
        }
    }
}

impl<T: Readable> Readable for ExplicitOrDefault<T> {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("ExplicitOrDefault", 2, false)? {
            0 => Ok(ExplicitOrDefault::Explicit(reader.read()?)),
            _ => Ok(ExplicitOrDefault::Default),
        }
    }
}

/// An alternative of an extensible choice that is not known to this codec. The content is
/// kept as received so the value can be re-encoded as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownAlternative {
    pub index: u64,
    pub data: Vec<u8>,
}

impl UnknownAlternative {
    /// Reads the open type of the alternative at `index` and reports it to the sink
    pub fn read(
        reader: &mut UperReader<'_>,
        name: &'static str,
        index: u64,
    ) -> Result<Self, Error> {
        let data = reader.read_open_type_octets(name)?;
        reader.diagnostic(
            name,
            &format!("unknown alternative {index} with {} octets", data.len()),
        );
        Ok(UnknownAlternative { index, data })
    }

    /// Writes index and content, failing if the index denotes a known alternative
    pub fn write(
        &self,
        writer: &mut UperWriter,
        name: &'static str,
        known_variants: u64,
        root_variants: u64,
    ) -> Result<(), Error> {
        if self.index < known_variants {
            return Err(crate::io::per::ErrorKind::ChoiceVariantMismatch {
                name,
                index: self.index,
            }
            .into());
        }
        writer.write_choice_index(name, self.index, root_variants, true)?;
        writer.write_open_type_octets(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::per::ErrorKind;

    #[test]
    fn test_setup_release() {
        let mut writer = UperWriter::default();
        SetupRelease::Setup(true).write(&mut writer).unwrap();
        SetupRelease::<bool>::Release.write(&mut writer).unwrap();
        assert_eq!(3, writer.finish());
        assert_eq!(&[0b1100_0000], writer.byte_content());

        let mut reader = writer.as_reader();
        assert_eq!(
            SetupRelease::Setup(true),
            SetupRelease::<bool>::read(&mut reader).unwrap()
        );
        assert_eq!(
            SetupRelease::Release,
            SetupRelease::<bool>::read(&mut reader).unwrap()
        );
    }

    #[test]
    fn test_default_consumes_no_further_bits() {
        let mut writer = UperWriter::default();
        ExplicitOrDefault::<bool>::Default.write(&mut writer).unwrap();
        assert_eq!(1, writer.finish());
    }

    #[test]
    fn test_unknown_alternative_round_trip() {
        let unknown = UnknownAlternative {
            index: 6,
            data: vec![0xAB],
        };
        let mut writer = UperWriter::default();
        unknown.write(&mut writer, "test", 6, 5).unwrap();
        // extension bit, normally small 1, length 1 and the content
        assert_eq!(1 + 7 + 8 + 8, writer.finish());

        let mut reader = writer.as_reader();
        let index = reader.read_choice_index("test", 5, true).unwrap();
        assert_eq!(6, index);
        assert_eq!(
            unknown,
            UnknownAlternative::read(&mut reader, "test", index).unwrap()
        );
    }

    #[test]
    fn test_unknown_alternative_must_not_shadow_known() {
        let unknown = UnknownAlternative {
            index: 5,
            data: vec![],
        };
        let mut writer = UperWriter::default();
        assert_eq!(
            &ErrorKind::ChoiceVariantMismatch {
                name: "test",
                index: 5
            },
            unknown
                .write(&mut writer, "test", 6, 5)
                .unwrap_err()
                .kind()
        );
    }
}
