//! Entry points for encoding and decoding complete messages of a logical channel.
//!
//! ```ignore
//! let codec = Codec::new(CodecConfig::default());
//! let bytes = codec.encode(&message)?;
//! let decoded: DlDcchMessage = codec.decode(&bytes)?;
//! ```

use crate::diag::{DiagnosticSink, NoopSink, TracingSink};
use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// The largest RRC PDU handed to PDCP, in octets
pub const MAX_PDU_BYTES: usize = 8188;

static TRACING: TracingSink = TracingSink;
static NOOP: NoopSink = NoopSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Encoding a message that needs more octets fails with `CapacityExceeded`
    pub max_pdu_bytes: usize,
    /// Whether decode diagnostics are forwarded to `tracing` or discarded, unless a sink is
    /// given explicitly
    pub trace_diagnostics: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            max_pdu_bytes: MAX_PDU_BYTES,
            trace_diagnostics: true,
        }
    }
}

/// A complete message of a logical channel, the outermost value of a PDU
pub trait LogicalChannelMessage: Writable + Readable {
    /// The ASN.1 name of the message, used as diagnostic context
    const NAME: &'static str;

    /// Encodes the message padded to the next octet
    fn encode_to_vec(&self) -> Result<Vec<u8>, Error> {
        let mut writer = UperWriter::default();
        self.write(&mut writer)?;
        Ok(writer.into_bytes_vec())
    }

    /// Decodes a message, trailing padding is ignored
    fn decode_from(data: &[u8]) -> Result<Self, Error> {
        Self::read(&mut UperReader::from(data))
    }
}

/// Encodes and decodes channel messages with a capacity limit and a diagnostic sink
#[derive(Clone)]
pub struct Codec<'a> {
    config: CodecConfig,
    sink: &'a dyn DiagnosticSink,
}

impl Codec<'static> {
    pub fn new(config: CodecConfig) -> Self {
        let sink: &'static dyn DiagnosticSink = if config.trace_diagnostics {
            &TRACING
        } else {
            &NOOP
        };
        Codec { config, sink }
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl<'a> Codec<'a> {
    /// A codec reporting decode diagnostics to `sink` instead of the configured default
    pub fn with_sink(config: CodecConfig, sink: &'a dyn DiagnosticSink) -> Self {
        Codec { config, sink }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode<M: LogicalChannelMessage>(&self, message: &M) -> Result<Vec<u8>, Error> {
        let mut writer = UperWriter::with_limit(self.config.max_pdu_bytes * 8);
        if let Err(e) = message.write(&mut writer) {
            tracing::debug!(message = M::NAME, "encoding failed: {}", e.kind());
            return Err(e);
        }
        tracing::trace!(message = M::NAME, bits = writer.bit_len(), "encoded");
        Ok(writer.into_bytes_vec())
    }

    pub fn decode<M: LogicalChannelMessage>(&self, data: &[u8]) -> Result<M, Error> {
        let mut reader = UperReader::from(data).with_sink(self.sink);
        let message = match M::read(&mut reader) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    message = M::NAME,
                    octets = data.len(),
                    "decoding failed: {}",
                    e.kind()
                );
                return Err(e);
            }
        };
        if reader.remaining_bits() >= 8 {
            reader.diagnostic(
                M::NAME,
                &format!("{} bits after the end of the message", reader.remaining_bits()),
            );
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::ies::radio_resource::common::{PhichConfig, PhichDuration, PhichResource};
    use crate::ies::system_information::{CellBandwidth, MasterInformationBlock};
    use crate::io::per::ErrorKind;
    use crate::messages::BcchBchMessage;

    fn mib() -> BcchBchMessage {
        BcchBchMessage(MasterInformationBlock {
            dl_bandwidth: CellBandwidth::N100,
            phich_config: PhichConfig {
                phich_duration: PhichDuration::Extended,
                phich_resource: PhichResource::OneSixth,
            },
            system_frame_number: 0x12,
            spare: 0,
        })
    }

    #[test]
    fn test_config_defaults() {
        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(CodecConfig::default(), config);

        let config: CodecConfig = serde_json::from_str(r#"{"max_pdu_bytes": 2}"#).unwrap();
        assert_eq!(2, config.max_pdu_bytes);
        assert!(config.trace_diagnostics);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let codec = Codec::new(CodecConfig {
            max_pdu_bytes: 2,
            trace_diagnostics: false,
        });
        let err = codec.encode(&mib()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::CapacityExceeded { .. }));
        assert!(!err.is_decode_error());

        let codec = Codec::new(CodecConfig {
            max_pdu_bytes: 3,
            trace_diagnostics: false,
        });
        assert_eq!(mib(), codec.decode(&codec.encode(&mib()).unwrap()).unwrap());
    }

    #[test]
    fn test_trailing_octets_are_reported() {
        let sink = CollectingSink::default();
        let codec = Codec::with_sink(CodecConfig::default(), &sink);
        let mut bytes = mib().encode_to_vec().unwrap();
        assert_eq!(3, bytes.len());
        assert_eq!(mib(), codec.decode(&bytes).unwrap());
        assert!(sink.take().is_empty());

        bytes.push(0);
        assert_eq!(mib(), codec.decode(&bytes).unwrap());
        assert!(sink.contains("BCCH-BCH-Message"));
    }

    #[test]
    fn test_truncated_message_is_a_decode_error() {
        let err = Codec::default()
            .decode::<BcchBchMessage>(&[0x00, 0x00])
            .unwrap_err();
        assert!(err.is_decode_error());
    }
}
