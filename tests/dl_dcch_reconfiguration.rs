mod test_utils;

use lte_rrc::ies::radio_resource::physical::{
    PhysicalConfigDedicated, PhysicalConfigDedicatedR10, PucchConfigDedicatedV1020, PucchFormat,
    PucchFormat3Conf,
};
use lte_rrc::ies::common::RrcTransactionIdentifier;
use lte_rrc::ies::radio_resource::RadioResourceConfigDedicated;
use lte_rrc::messages::dcch::downlink::{
    RrcConnectionReconfiguration, RrcConnectionReconfigurationR8,
};
use test_utils::*;

const RECONFIGURATION: &str = "20 02 01 80 01 10 10 08 21 60 CA 32 00 06 60";

fn expected() -> DlDcchMessage {
    DlDcchMessage::RrcConnectionReconfiguration(Box::new(RrcConnectionReconfiguration {
        rrc_transaction_identifier: RrcTransactionIdentifier(0),
        critical_extensions: CriticalExtensions::Current(RrcConnectionReconfigurationR8 {
            radio_resource_config_dedicated: Some(RadioResourceConfigDedicated {
                physical_config_dedicated: Some(PhysicalConfigDedicated {
                    r10: Some(PhysicalConfigDedicatedR10 {
                        pucch_config_dedicated_v1020: Some(PucchConfigDedicatedV1020 {
                            pucch_format: Some(PucchFormat::Format3(PucchFormat3Conf {
                                n3_pucch_an_list: Some(vec![25, 281, 0, 51]),
                                two_antenna_port_activated: None,
                            })),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
    }))
}

#[test]
fn test_decode_reconfiguration_with_format3() {
    let bytes = hex(RECONFIGURATION);
    let message: DlDcchMessage = Codec::default().decode(&bytes).unwrap();

    let reconfiguration = match &message {
        DlDcchMessage::RrcConnectionReconfiguration(reconfiguration) => reconfiguration,
        other => panic!("Unexpected message {other:?}"),
    };
    assert_eq!(RrcTransactionIdentifier(0), reconfiguration.rrc_transaction_identifier);
    let body = reconfiguration.critical_extensions.current().unwrap();
    assert!(body.meas_config.is_none());

    let physical = body
        .radio_resource_config_dedicated
        .as_ref()
        .and_then(|config| config.physical_config_dedicated.as_ref())
        .unwrap();
    let format = physical
        .r10
        .as_ref()
        .and_then(|r10| r10.pucch_config_dedicated_v1020.as_ref())
        .and_then(|pucch| pucch.pucch_format.as_ref())
        .unwrap();
    match format {
        PucchFormat::Format3(format3) => {
            assert_eq!(Some(&vec![25, 281, 0, 51]), format3.n3_pucch_an_list.as_ref())
        }
        other => panic!("Unexpected format {other:?}"),
    }

    assert_eq!(expected(), message);
}

#[test]
fn test_encode_reconfiguration_with_format3() {
    let (bits, bytes) = serialize_uper(&expected());
    assert_eq!(119, bits);
    assert_eq!(hex(RECONFIGURATION), bytes);
    assert_eq!(bytes, Codec::default().encode(&expected()).unwrap());
}

#[test]
fn test_truncated_reconfiguration_fails() {
    let bytes = hex(RECONFIGURATION);
    let mut reader = UperReader::from_bits(&bytes, 118);
    let error = reader.read::<DlDcchMessage>().unwrap_err();
    assert!(error.is_decode_error());
}
