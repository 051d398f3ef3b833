mod test_utils;

use lte_rrc::ies::common::PlmnIdentity;
use lte_rrc::ies::mbms::{
    CommonSfAllocPeriod, MbmsSessionInfo, MbsfnAreaConfiguration, MbsfnSubframeConfig,
    MchSchedulingPeriod, PmchConfig, PmchInfo, RadioframeAllocationPeriod, SubframeAllocation,
    Tmgi, TmgiPlmnId,
};
use test_utils::*;

const AREA_CONFIGURATION: &str = "0d 8f df ff ff ff e2 2f fc 38 5e 61 ec a8 00 00 02 02 10 00 \
                                  20 05 e6 1e ca 80 00 00 40 42";

fn session(service: u8) -> MbmsSessionInfo {
    MbmsSessionInfo {
        tmgi: Tmgi {
            plmn_id: TmgiPlmnId::Explicit(PlmnIdentity {
                mcc: Some([9, 8, 7]),
                mnc: vec![6, 5, 4],
            }),
            service_id: [0, 0, service],
        },
        session_id: Some(service),
        logical_channel_identity: service,
    }
}

fn expected() -> McchMessage {
    McchMessage::MbsfnAreaConfiguration(MbsfnAreaConfiguration {
        common_sf_alloc: vec![
            MbsfnSubframeConfig {
                radioframe_allocation_period: RadioframeAllocationPeriod::N32,
                radioframe_allocation_offset: 4,
                subframe_allocation: SubframeAllocation::OneFrame(0x3F),
            },
            MbsfnSubframeConfig {
                radioframe_allocation_period: RadioframeAllocationPeriod::N8,
                radioframe_allocation_offset: 7,
                subframe_allocation: SubframeAllocation::FourFrames(0xFF_FFFF),
            },
        ],
        common_sf_alloc_period: CommonSfAllocPeriod::Rf256,
        pmch_info_list: vec![
            PmchInfo {
                pmch_config: PmchConfig {
                    sf_alloc_end: 1535,
                    data_mcs: 16,
                    mch_scheduling_period: MchSchedulingPeriod::Rf1024,
                },
                mbms_session_info_list: vec![session(1)],
            },
            PmchInfo {
                pmch_config: PmchConfig {
                    sf_alloc_end: 0,
                    data_mcs: 8,
                    mch_scheduling_period: MchSchedulingPeriod::Rf8,
                },
                mbms_session_info_list: vec![session(2)],
            },
        ],
        non_critical_extension: None,
    })
}

#[test]
fn test_decode_reference_area_configuration() {
    let bytes = hex(AREA_CONFIGURATION);
    assert_eq!(30, bytes.len());

    let message = McchMessage::decode_from(&bytes).unwrap();
    let config = match &message {
        McchMessage::MbsfnAreaConfiguration(config) => config,
        other => panic!("Unexpected message {other:?}"),
    };
    assert_eq!(2, config.common_sf_alloc.len());
    assert_eq!(4, config.common_sf_alloc[0].radioframe_allocation_offset);
    assert_eq!(7, config.common_sf_alloc[1].radioframe_allocation_offset);
    assert_eq!(
        RadioframeAllocationPeriod::N32,
        config.common_sf_alloc[0].radioframe_allocation_period
    );
    assert_eq!(
        RadioframeAllocationPeriod::N8,
        config.common_sf_alloc[1].radioframe_allocation_period
    );
    assert_eq!(2, config.pmch_info_list.len());
    assert_eq!(16, config.pmch_info_list[0].pmch_config.data_mcs);
    assert_eq!(8, config.pmch_info_list[1].pmch_config.data_mcs);
    assert_eq!(
        MchSchedulingPeriod::Rf1024,
        config.pmch_info_list[0].pmch_config.mch_scheduling_period
    );
    assert_eq!(
        MchSchedulingPeriod::Rf8,
        config.pmch_info_list[1].pmch_config.mch_scheduling_period
    );

    assert_eq!(expected(), message);
}

#[test]
fn test_reencode_reproduces_reference() {
    let bytes = hex(AREA_CONFIGURATION);
    let message = McchMessage::decode_from(&bytes).unwrap();
    assert_eq!(bytes, message.encode_to_vec().unwrap());
    serialize_and_deserialize_uper(240, &bytes, &expected());
}
