//! Multicast control channel.
//!
//! ```text
//! MCCH-MessageType ::= CHOICE {
//!     c1 CHOICE { mbsfnAreaConfiguration-r9 },
//!     later CHOICE {
//!         c2 CHOICE { mbmsCountingRequest-r10 },
//!         messageClassExtension SEQUENCE {}
//!     }
//! }
//! ```

use crate::codec::LogicalChannelMessage;
use crate::ies::mbms::MbsfnAreaConfiguration;
use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum McchMessage {
    MbsfnAreaConfiguration(MbsfnAreaConfiguration),
    /// The `messageClassExtension` within the `later` branch
    MessageClassExtension,
}

impl Writable for McchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            McchMessage::MbsfnAreaConfiguration(config) => {
                writer.write_choice_index(Self::NAME, 0, 2, false)?;
                writer.write_choice_index("c1", 0, 1, false)?;
                writer.write(config)
            }
            McchMessage::MessageClassExtension => {
                writer.write_choice_index(Self::NAME, 1, 2, false)?;
                writer.write_choice_index("later", 1, 2, false)
            }
        }
    }
}

impl Readable for McchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        if reader.read_choice_index(Self::NAME, 2, false)? == 0 {
            reader.read_choice_index("c1", 1, false)?;
            return Ok(McchMessage::MbsfnAreaConfiguration(reader.read()?));
        }
        match reader.read_choice_index("later", 2, false)? {
            0 => Err(Error::unsupported("MBMSCountingRequest-r10")),
            _ => {
                reader.diagnostic(Self::NAME, "messageClassExtension");
                Ok(McchMessage::MessageClassExtension)
            }
        }
    }
}

impl LogicalChannelMessage for McchMessage {
    const NAME: &'static str = "MCCH-Message";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::ies::mbms::{
        CommonSfAllocPeriod, MbsfnSubframeConfig, RadioframeAllocationPeriod, SubframeAllocation,
    };
    use crate::io::per::ErrorKind;

    #[test]
    fn test_minimal_area_configuration() {
        let message = McchMessage::MbsfnAreaConfiguration(MbsfnAreaConfiguration {
            common_sf_alloc: vec![MbsfnSubframeConfig {
                radioframe_allocation_period: RadioframeAllocationPeriod::N1,
                radioframe_allocation_offset: 0,
                subframe_allocation: SubframeAllocation::OneFrame(0b10_0000),
            }],
            common_sf_alloc_period: CommonSfAllocPeriod::Rf4,
            pmch_info_list: vec![],
            non_critical_extension: None,
        });
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(message, McchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_counting_request_is_unsupported() {
        // later, c2
        let data = [0b1000_0000];
        assert_eq!(
            &ErrorKind::Unsupported("MBMSCountingRequest-r10"),
            McchMessage::decode_from(&data).unwrap_err().kind()
        );
    }

    #[test]
    fn test_message_class_extension() {
        let sink = CollectingSink::default();
        let bytes = McchMessage::MessageClassExtension.encode_to_vec().unwrap();
        assert_eq!(vec![0b1100_0000], bytes);
        let mut reader = UperReader::from(&bytes[..]).with_sink(&sink);
        assert_eq!(
            McchMessage::MessageClassExtension,
            reader.read::<McchMessage>().unwrap()
        );
        assert!(sink.contains("MCCH-Message"));
    }
}
