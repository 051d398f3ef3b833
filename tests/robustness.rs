mod test_utils;

use lte_rrc::ies::common::{RrcTransactionIdentifier, STmsi};
use lte_rrc::ies::ue_capability::RatType;
use lte_rrc::messages::ccch::{
    EstablishmentCause, InitialUeIdentity, ReestabUeIdentity, RrcConnectionRejectR8,
    RrcConnectionRequest, RrcConnectionRequestR8,
};
use lte_rrc::messages::dcch::downlink::{UeCapabilityEnquiry, UeCapabilityEnquiryR8};
use lte_rrc::messages::pcch::{CnDomain, Paging, PagingRecord, PagingUeIdentity};
use proptest::prelude::*;
use test_utils::*;

fn s_tmsi() -> PagingUeIdentity {
    PagingUeIdentity::STmsi(STmsi {
        mmec: 0x01,
        m_tmsi: 0x0203_0405,
    })
}

fn bit(data: &[u8], index: usize) -> bool {
    data[index / 8] & (0x80 >> (index % 8)) != 0
}

#[test]
fn test_unknown_extension_addition_is_skipped() {
    let mut writer = UperWriter::default();
    // PCCH c1, record list present, one record
    writer.write_bit(false).unwrap();
    writer.write_presence(&[true, false, false, false]).unwrap();
    writer.write_bits(0, 4).unwrap();
    // the record with an extension addition of a later release
    writer.write_bit(true).unwrap();
    writer.write(&s_tmsi()).unwrap();
    writer.write(&CnDomain::Cs).unwrap();
    writer.write_normally_small_length(0).unwrap();
    writer.write_bit(true).unwrap();
    writer.write_open_type(|w| w.write_bits(0xA5, 8)).unwrap();
    let bytes = writer.into_bytes_vec();

    let sink = CollectingSink::default();
    let codec = Codec::with_sink(CodecConfig::default(), &sink);
    let message: PcchMessage = codec.decode(&bytes).unwrap();
    assert_eq!(
        PcchMessage::Paging(Paging {
            paging_record_list: Some(vec![PagingRecord {
                ue_identity: s_tmsi(),
                cn_domain: CnDomain::Cs,
            }]),
            ..Default::default()
        }),
        message
    );
    assert!(sink.contains("PagingRecord"));
}

#[test]
fn test_spare_values_are_accepted() {
    let sink = CollectingSink::default();
    let codec = Codec::with_sink(CodecConfig::default(), &sink);

    let spare = DlDcchMessage::Spare(12);
    let bytes = codec.encode(&spare).unwrap();
    assert_eq!(spare, codec.decode::<DlDcchMessage>(&bytes).unwrap());
    assert!(sink.contains("DL-DCCH-Message"));

    let request = UlCcchMessage::RrcConnectionRequest(RrcConnectionRequest {
        critical_extensions: CriticalExtensions::Current(RrcConnectionRequestR8 {
            ue_identity: InitialUeIdentity::RandomValue(0x12_3456_789A),
            establishment_cause: EstablishmentCause::Spare1,
            spare: false,
        }),
    });
    let bytes = codec.encode(&request).unwrap();
    assert_eq!(request, codec.decode::<UlCcchMessage>(&bytes).unwrap());
    assert!(sink.contains("EstablishmentCause"));
}

#[test]
fn test_every_truncation_fails() {
    let message = DlDcchMessage::UeCapabilityEnquiry(UeCapabilityEnquiry {
        rrc_transaction_identifier: RrcTransactionIdentifier(1),
        critical_extensions: CriticalExtensions::Current(UeCapabilityEnquiryR8 {
            ue_capability_request: vec![RatType::Eutra, RatType::GeranCs],
        }),
    });
    let (bits, bytes) = serialize_uper(&message);
    for truncated in 0..bits {
        let error = UperReader::from_bits(&bytes, truncated)
            .read::<DlDcchMessage>()
            .unwrap_err();
        assert!(error.is_decode_error(), "{truncated} bits: {error:?}");
    }
    assert_eq!(message, deserialize_uper::<DlDcchMessage>(&bytes, bits));
}

#[test]
fn test_oversized_extension_count_is_a_decode_error() {
    let data = [
        0x70, 0x36, 0x3c, 0xd4, 0xc1, 0x5e, 0xf6, 0x57, 0xab, 0x64, 0x04,
    ];
    let error = DlCcchMessage::decode_from(&data).unwrap_err();
    assert!(error.is_decode_error(), "{error:?}");
}

#[test]
fn test_encoding_is_deterministic() {
    let message = PcchMessage::Paging(Paging {
        paging_record_list: Some(vec![PagingRecord {
            ue_identity: s_tmsi(),
            cn_domain: CnDomain::Ps,
        }]),
        system_info_modification: true,
        ..Default::default()
    });
    let codec = Codec::default();
    let first = codec.encode(&message).unwrap();
    let second = codec.encode(&message.clone()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, message.encode_to_vec().unwrap());
}

#[test]
fn test_message_serde_round_trip() {
    let message = UlCcchMessage::RrcConnectionRequest(RrcConnectionRequest {
        critical_extensions: CriticalExtensions::Current(RrcConnectionRequestR8 {
            ue_identity: InitialUeIdentity::STmsi(STmsi {
                mmec: 0x7F,
                m_tmsi: 0xDEAD_BEEF,
            }),
            establishment_cause: EstablishmentCause::MoSignalling,
            spare: false,
        }),
    });
    let json = serde_json::to_string(&message).unwrap();
    assert_eq!(message, serde_json::from_str::<UlCcchMessage>(&json).unwrap());
}

#[test]
fn test_codec_config_from_json() {
    let config: CodecConfig = serde_json::from_str(r#"{ "max_pdu_bytes": 2 }"#).unwrap();
    assert_eq!(2, config.max_pdu_bytes);
    assert!(config.trace_diagnostics);

    let codec = Codec::new(config);
    let message = DlDcchMessage::UeCapabilityEnquiry(UeCapabilityEnquiry {
        rrc_transaction_identifier: RrcTransactionIdentifier(0),
        critical_extensions: CriticalExtensions::Current(UeCapabilityEnquiryR8 {
            ue_capability_request: vec![RatType::Eutra; 8],
        }),
    });
    assert!(codec.encode(&message).unwrap_err().is_encode_error());
}

proptest! {
    #[test]
    fn reject_wait_time_round_trips(wait_time in 1_u8..=16) {
        let reject = RrcConnectionRejectR8 { wait_time };
        let (bits, bytes) = serialize_uper(&reject);
        prop_assert_eq!(1 + 4, bits);
        prop_assert_eq!(reject, deserialize_uper::<RrcConnectionRejectR8>(&bytes, bits));
    }

    #[test]
    fn reestablishment_identity_round_trips(
        c_rnti in any::<u16>(),
        phys_cell_id in 0_u16..504,
        short_mac_i in any::<u16>(),
    ) {
        let identity = ReestabUeIdentity {
            c_rnti,
            phys_cell_id,
            short_mac_i,
        };
        let (bits, bytes) = serialize_uper(&identity);
        prop_assert_eq!(41, bits);
        prop_assert_eq!(identity, deserialize_uper::<ReestabUeIdentity>(&bytes, bits));
    }

    #[test]
    fn decoded_ul_ccch_reencodes_to_the_consumed_bits(data in proptest::collection::vec(any::<u8>(), 6)) {
        let mut reader = UperReader::from(&data[..]);
        if let Ok(message) = reader.read::<UlCcchMessage>() {
            let consumed = data.len() * 8 - reader.bits_remaining();
            let (bits, bytes) = serialize_uper(&message);
            prop_assert_eq!(consumed, bits);
            for index in 0..bits {
                prop_assert_eq!(bit(&data, index), bit(&bytes, index));
            }
        }
    }
}
